//! Travel Guides screen UI

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{format_long_date, tab_line};
use crate::app::App;
use crate::data::{all_guides, Guide, GuideCategory};

/// Color scheme for the guides screen
mod colors {
    use ratatui::style::Color;

    pub const HEADER: Color = Color::Cyan;
    pub const PRIMARY: Color = Color::White;
    pub const SECONDARY: Color = Color::Gray;
    pub const FEATURED: Color = Color::Yellow;
    pub const BORDER: Color = Color::DarkGray;
}

/// Renders the Guides screen
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Category tabs
            Constraint::Length(4), // Featured
            Constraint::Min(3),    // Guide list
        ])
        .split(area);

    let mut labels = vec!["All Guides".to_string()];
    labels.extend(GuideCategory::all().iter().map(|c| c.label().to_string()));
    let selected = app
        .guide_filter
        .and_then(|f| GuideCategory::all().iter().position(|c| *c == f))
        .map_or(0, |i| i + 1);
    frame.render_widget(Paragraph::new(tab_line(&labels, selected, true)), chunks[0]);

    render_featured(frame, chunks[1]);
    render_list(frame, chunks[2], app);
}

fn render_featured(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = all_guides()
        .iter()
        .filter(|g| g.featured)
        .map(|g| {
            Line::from(vec![
                Span::styled("\u{2605} ", Style::default().fg(colors::FEATURED)),
                Span::styled(g.title, Style::default().fg(colors::PRIMARY)),
                Span::styled(
                    format!("  by {}", g.author),
                    Style::default().fg(colors::SECONDARY),
                ),
            ])
        })
        .collect();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .title(Span::styled(
            " Featured Guides ",
            Style::default()
                .fg(colors::HEADER)
                .add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_list(frame: &mut Frame, area: Rect, app: &App) {
    let guides = app.filtered_guides();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .title(Span::styled(
            format!(" {} guides ", guides.len()),
            Style::default().fg(colors::SECONDARY),
        ));

    let mut lines = Vec::new();
    for guide in guides {
        lines.extend(guide_lines(guide));
        lines.push(Line::from(""));
    }
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn guide_lines(guide: &Guide) -> Vec<Line<'static>> {
    let published = guide
        .published()
        .map_or_else(|| guide.published_date.to_string(), format_long_date);
    vec![
        Line::from(Span::styled(
            guide.title,
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "{} \u{00B7} {} \u{00B7} {} min read \u{00B7} {}",
                guide.category.label(),
                guide.author,
                guide.read_time,
                published
            ),
            Style::default().fg(colors::HEADER),
        )),
        Line::from(Span::styled(
            guide.excerpt,
            Style::default().fg(colors::SECONDARY),
        )),
        Line::from(Span::styled(
            format!("\u{1F441} {}  \u{2665} {}", guide.views, guide.likes),
            Style::default().fg(colors::SECONDARY),
        )),
    ]
}
