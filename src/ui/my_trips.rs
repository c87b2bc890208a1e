//! My Trips screen UI

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::widgets::UsageBar;
use super::{format_rating, format_rupees, format_short_date, tab_line};
use crate::app::App;
use crate::data::trips::{count_by_status, trip_stats};
use crate::data::{TripRecord, TripStatus};
use crate::trip::Severity;

/// Color scheme for the trips screen
mod colors {
    use ratatui::style::Color;

    pub const HEADER: Color = Color::Cyan;
    pub const PRIMARY: Color = Color::White;
    pub const SECONDARY: Color = Color::Gray;
    pub const RATING: Color = Color::Yellow;
    pub const STAT: Color = Color::Green;
    pub const BORDER: Color = Color::DarkGray;
}

/// Height of one trip card including its border
const CARD_HEIGHT: u16 = 5;

/// Renders the My Trips screen
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Stats
            Constraint::Length(1), // Status tabs
            Constraint::Min(3),    // Trip cards
        ])
        .split(area);

    render_stats(frame, chunks[0], &app.trips);

    let labels: Vec<String> = TripStatus::all()
        .iter()
        .map(|s| format!("{} ({})", s.label(), count_by_status(&app.trips, *s)))
        .collect();
    let selected = TripStatus::all()
        .iter()
        .position(|s| *s == app.trip_tab)
        .unwrap_or(0);
    frame.render_widget(Paragraph::new(tab_line(&labels, selected, true)), chunks[1]);

    render_cards(frame, chunks[2], app);
}

fn render_stats(frame: &mut Frame, area: Rect, trips: &[TripRecord]) {
    let stats = trip_stats(trips);
    let stat = |label: &'static str, value: String| {
        vec![
            Span::styled(format!("{label} "), Style::default().fg(colors::SECONDARY)),
            Span::styled(
                value,
                Style::default()
                    .fg(colors::STAT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
        ]
    };

    let mut spans = stat("Total Trips", stats.total_trips.to_string());
    spans.extend(stat("Places Visited", stats.places_visited.to_string()));
    spans.extend(stat("Total Spent", format_rupees(stats.total_spent)));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .title(Span::styled(
            " My Trips ",
            Style::default()
                .fg(colors::HEADER)
                .add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_cards(frame: &mut Frame, area: Rect, app: &App) {
    let trips = app.filtered_trips();
    if trips.is_empty() {
        let message = format!("No {} trips", app.trip_tab.label().to_lowercase());
        frame.render_widget(
            Paragraph::new(Span::styled(message, Style::default().fg(colors::SECONDARY))),
            area,
        );
        return;
    }

    let visible = (area.height / CARD_HEIGHT).max(1) as usize;
    let constraints: Vec<Constraint> = trips
        .iter()
        .take(visible)
        .map(|_| Constraint::Length(CARD_HEIGHT))
        .collect();
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (trip, slot) in trips.iter().zip(slots.iter()) {
        render_card(frame, *slot, trip);
    }
}

fn render_card(frame: &mut Frame, area: Rect, trip: &TripRecord) {
    let mut title = vec![Span::styled(
        format!(" {} ", trip.destination),
        Style::default()
            .fg(colors::PRIMARY)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(rating) = trip.rating {
        title.push(Span::styled(
            format!("{} ", format_rating(rating)),
            Style::default().fg(colors::RATING),
        ));
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .title(Line::from(title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let dates = Line::from(vec![
        Span::styled(
            format!(
                "{} - {}",
                format_short_date(trip.start_date),
                format_short_date(trip.end_date)
            ),
            Style::default().fg(colors::SECONDARY),
        ),
        Span::styled(
            format!("   {} places", trip.places),
            Style::default().fg(colors::SECONDARY),
        ),
    ]);
    frame.render_widget(Paragraph::new(dates), rows[0]);

    let money = Line::from(vec![
        Span::styled("Budget ", Style::default().fg(colors::SECONDARY)),
        Span::styled(format_rupees(trip.budget), Style::default().fg(colors::PRIMARY)),
        Span::styled("   Spent ", Style::default().fg(colors::SECONDARY)),
        Span::styled(format_rupees(trip.spent), Style::default().fg(colors::PRIMARY)),
    ]);
    frame.render_widget(Paragraph::new(money), rows[1]);

    let usage = trip.budget_usage_percent();
    frame.render_widget(
        UsageBar::new(usage).severity(Severity::from_percentage(usage)),
        rows[2],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::ui::test_support::render_to_string;

    fn draw(frame: &mut Frame, app: &App) {
        render(frame, frame.area(), app);
    }

    #[test]
    fn test_stats_and_tab_counts() {
        let app = App::new(Settings::default(), None);
        let content = render_to_string(100, 20, &app, draw);
        assert!(content.contains("Total Trips 4"));
        assert!(content.contains("Places Visited 31"));
        assert!(content.contains("₹23,900"));
        assert!(content.contains("Upcoming (1)"));
        assert!(content.contains("Completed (2)"));
    }

    #[test]
    fn test_upcoming_tab_shows_goa() {
        let app = App::new(Settings::default(), None);
        let content = render_to_string(100, 20, &app, draw);
        assert!(content.contains("Goa"));
        assert!(content.contains("Feb 15, 2025 - Feb 20, 2025"));
        assert!(!content.contains("Alleppey"));
    }

    #[test]
    fn test_completed_tab_shows_ratings() {
        let mut app = App::new(Settings::default(), None);
        app.trip_tab = TripStatus::Completed;
        let content = render_to_string(100, 20, &app, draw);
        assert!(content.contains("Kochi"));
        assert!(content.contains("Alleppey"));
        assert!(content.contains("★ 4.8"));
        assert!(!content.contains("Goa"));
    }

    #[test]
    fn test_empty_tab_message() {
        let mut app = App::new(Settings::default(), None);
        app.trips.retain(|t| t.status != TripStatus::Ongoing);
        app.trip_tab = TripStatus::Ongoing;
        let content = render_to_string(100, 20, &app, draw);
        assert!(content.contains("No ongoing trips"));
    }
}
