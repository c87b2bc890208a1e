//! Explore screen UI
//!
//! Search box and the two selectors on top, then the featured and trending
//! strips, then the filtered destination list.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::format_rating;
use crate::app::{App, ExploreField};
use crate::data::explore::{featured, trending};
use crate::data::ExploreDestination;

/// Color scheme for the explore screen
mod colors {
    use ratatui::style::Color;

    pub const HEADER: Color = Color::Cyan;
    pub const PRIMARY: Color = Color::White;
    pub const SECONDARY: Color = Color::Gray;
    pub const FOCUS: Color = Color::Yellow;
    pub const RATING: Color = Color::Yellow;
    pub const TRENDING: Color = Color::Magenta;
    pub const BORDER: Color = Color::DarkGray;
}

/// Highlights listed before collapsing the rest into "+N more"
const SHOWN_HIGHLIGHTS: usize = 2;

/// Renders the Explore screen
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Search and selectors
            Constraint::Length(2), // Featured / trending
            Constraint::Min(3),    // Results
        ])
        .split(area);

    render_filters(frame, chunks[0], app);
    render_strips(frame, chunks[1]);
    render_results(frame, chunks[2], app);
}

fn render_filters(frame: &mut Frame, area: Rect, app: &App) {
    let query = &app.explore_query;
    let row = |field: ExploreField, label: &'static str, value: Vec<Span<'static>>| {
        let focused = app.explore_focus == field;
        let marker = if focused { "\u{203A} " } else { "  " };
        let mut spans = vec![
            Span::styled(marker, Style::default().fg(colors::FOCUS)),
            Span::styled(format!("{label:<10}"), Style::default().fg(colors::SECONDARY)),
        ];
        spans.extend(value);
        Line::from(spans)
    };
    let selector = |field: ExploreField, value: &str| {
        let style = if app.explore_focus == field {
            Style::default()
                .fg(colors::FOCUS)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::PRIMARY)
        };
        vec![Span::styled(format!("\u{25C0} {value} \u{25B6}"), style)]
    };

    let mut search = if query.search.is_empty() {
        vec![Span::styled(
            "Search destinations...",
            Style::default().fg(colors::BORDER),
        )]
    } else {
        vec![Span::styled(
            query.search.clone(),
            Style::default().fg(colors::PRIMARY),
        )]
    };
    if app.explore_focus == ExploreField::Search {
        search.push(Span::styled("\u{258F}", Style::default().fg(colors::FOCUS)));
    }

    let category = query.category.map_or("All", |c| c.label());
    let region = query.region.as_deref().unwrap_or("All");
    let lines = vec![
        row(ExploreField::Search, "Search", search),
        row(ExploreField::Category, "Category", selector(ExploreField::Category, category)),
        row(ExploreField::Region, "State", selector(ExploreField::Region, region)),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .title(Span::styled(
            " Explore Destinations ",
            Style::default()
                .fg(colors::HEADER)
                .add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_strips(frame: &mut Frame, area: Rect) {
    let names = |items: Vec<&ExploreDestination>| {
        items
            .iter()
            .map(|d| d.name)
            .collect::<Vec<_>>()
            .join(", ")
    };
    let lines = vec![
        Line::from(vec![
            Span::styled(" Featured  ", Style::default().fg(colors::HEADER)),
            Span::styled(names(featured().collect()), Style::default().fg(colors::PRIMARY)),
        ]),
        Line::from(vec![
            Span::styled(" Trending  ", Style::default().fg(colors::TRENDING)),
            Span::styled(names(trending().collect()), Style::default().fg(colors::PRIMARY)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_results(frame: &mut Frame, area: Rect, app: &App) {
    let results = app.filtered_explore();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .title(Span::styled(
            format!(" {} destinations ", results.len()),
            Style::default().fg(colors::SECONDARY),
        ));

    if results.is_empty() {
        let lines = vec![
            Line::from(Span::styled(
                "No destinations found",
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Try adjusting your search or filters (Esc clears them)",
                Style::default().fg(colors::SECONDARY),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), area);
        return;
    }

    let mut lines = Vec::new();
    for dest in results {
        lines.extend(destination_lines(dest));
    }
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn destination_lines(dest: &ExploreDestination) -> Vec<Line<'static>> {
    let mut title = vec![
        Span::styled(
            dest.name,
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(", {}  ", dest.state),
            Style::default().fg(colors::SECONDARY),
        ),
        Span::styled(format_rating(dest.rating), Style::default().fg(colors::RATING)),
        Span::styled(
            format!(" ({} reviews)", dest.reviews),
            Style::default().fg(colors::SECONDARY),
        ),
    ];
    if dest.trending {
        title.push(Span::styled(
            "  \u{1F525} Trending",
            Style::default().fg(colors::TRENDING),
        ));
    }

    let mut highlights: Vec<String> = dest
        .highlights
        .iter()
        .take(SHOWN_HIGHLIGHTS)
        .map(|h| h.to_string())
        .collect();
    let hidden = dest.highlights.len().saturating_sub(SHOWN_HIGHLIGHTS);
    if hidden > 0 {
        highlights.push(format!("+{hidden} more"));
    }

    vec![
        Line::from(title),
        Line::from(Span::styled(
            format!("  {}  Best time: {}", dest.description, dest.best_time),
            Style::default().fg(colors::SECONDARY),
        )),
        Line::from(Span::styled(
            format!("  {}", highlights.join(" \u{00B7} ")),
            Style::default().fg(colors::PRIMARY),
        )),
    ]
}
