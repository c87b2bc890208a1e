//! Help overlay showing all keybindings
//!
//! Renders a centered modal overlay with keyboard shortcuts, grouped by
//! where they apply.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const OVERLAY_WIDTH: u16 = 60;
const OVERLAY_HEIGHT: u16 = 26;

/// Renders the help overlay on top of the current view
pub fn render(frame: &mut Frame) {
    let overlay_area = centered_rect(OVERLAY_WIDTH, OVERLAY_HEIGHT, frame.area());

    frame.render_widget(Clear, overlay_area);

    let lines = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section("Everywhere"),
        help_line("Tab/S-Tab", "Next / previous screen"),
        help_line("F1-F5", "Jump to a screen"),
        help_line("↑, ↓", "Move focus"),
        help_line("←, →", "Change selector or value"),
        help_line("Enter/Space", "Activate focused item"),
        help_line("q", "Quit (outside text fields)"),
        help_line("Ctrl-C", "Quit"),
        help_line("?", "Toggle this help"),
        Line::from(""),
        section("Plan Trip"),
        help_line("PgUp/PgDn", "Switch panel once a plan exists"),
        help_line("Esc", "Back to the trip form"),
        help_line("Space", "Add / remove itinerary stop"),
        Line::from(""),
        section("Lists"),
        help_line("←, →", "Switch tabs (trips, guides, stays)"),
        help_line("Esc", "Clear explore search and filters"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc or ? to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, overlay_area);
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

/// Creates a help line with key and description
fn help_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<13}", key), Style::default().fg(Color::Yellow)),
        Span::raw(description.to_string()),
    ])
}

/// A `width` x `height` rect centered in `area`, shrunk to fit
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    horizontal[1]
}
