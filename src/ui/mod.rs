//! UI rendering module for TripGuide
//!
//! [`render`] draws the frame shared by every screen (header, navigation
//! bar, footer) and hands the body to the module of the current screen. All
//! rendering reads from [`App`]; nothing here changes state.

pub mod explore;
pub mod guides;
pub mod help_overlay;
pub mod my_trips;
pub mod plan_trip;
pub mod profile;
pub mod widgets;

use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Screen};
use crate::trip::PAISE_PER_RUPEE;

/// Color scheme for the frame around the screens
mod colors {
    use ratatui::style::Color;

    pub const BRAND: Color = Color::Cyan;
    pub const ACTIVE_TAB: Color = Color::Yellow;
    pub const SECONDARY: Color = Color::Gray;
    pub const STATUS: Color = Color::Green;
}

/// Renders the whole UI for the current state
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Navigation
            Constraint::Min(5),    // Screen body
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_nav(frame, chunks[1], app.screen);

    match app.screen {
        Screen::PlanTrip => plan_trip::render(frame, chunks[2], app),
        Screen::MyTrips => my_trips::render(frame, chunks[2], app),
        Screen::Explore => explore::render(frame, chunks[2], app),
        Screen::Guides => guides::render(frame, chunks[2], app),
        Screen::Profile => profile::render(frame, chunks[2], app),
    }

    render_footer(frame, chunks[3], app);

    if app.show_help {
        help_overlay::render(frame);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            " \u{1F9ED} TripGuide ",
            Style::default()
                .fg(colors::BRAND)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Your smart travel companion",
            Style::default().fg(colors::SECONDARY),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_nav(frame: &mut Frame, area: Rect, current: Screen) {
    let mut spans = Vec::new();
    for (i, screen) in Screen::all().iter().enumerate() {
        let style = if *screen == current {
            Style::default()
                .fg(colors::ACTIVE_TAB)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(colors::SECONDARY)
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!(" F{} {} ", i + 1, screen.label()), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.status_message {
        Some(message) => Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(colors::STATUS),
        )),
        None => {
            let quit = if app.text_input_focused() {
                " Ctrl-C quit"
            } else {
                " q quit  ? help"
            };
            Line::from(vec![
                Span::styled(" Tab", Style::default().fg(colors::BRAND)),
                Span::styled(" next screen ", Style::default().fg(colors::SECONDARY)),
                Span::styled(quit, Style::default().fg(colors::SECONDARY)),
            ])
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Formats a rupee amount with thousands separators, e.g. `₹12,500`
pub fn format_rupees(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("₹{grouped}")
}

/// Formats a paise amount as rupees, showing paise only when there are any,
/// e.g. `₹5,000` or `₹12.50`
pub fn format_paise(paise: u64) -> String {
    let rupees = format_rupees(paise / PAISE_PER_RUPEE);
    match paise % PAISE_PER_RUPEE {
        0 => rupees,
        fraction => format!("{rupees}.{fraction:02}"),
    }
}

/// Like [`format_paise`] but keeps the sign of negative amounts
pub fn format_signed_paise(paise: i64) -> String {
    if paise < 0 {
        format!("-{}", format_paise(paise.unsigned_abs()))
    } else {
        format_paise(paise.unsigned_abs())
    }
}

/// Short date as used on trip cards, e.g. `Feb 15, 2025`
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Long date as used on guides, e.g. `January 5, 2025`
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Rating rendered as `★ 4.5`
pub fn format_rating(rating: f32) -> String {
    format!("\u{2605} {rating:.1}")
}

/// Cuts text to `max` characters, marking the cut with an ellipsis
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}\u{2026}")
    }
}

/// Renders a row of tabs with the selected one highlighted
pub fn tab_line<'a>(labels: &[String], selected: usize, focused: bool) -> Line<'a> {
    let mut spans = Vec::new();
    for (i, label) in labels.iter().enumerate() {
        let style = if i == selected {
            let style = Style::default()
                .fg(colors::ACTIVE_TAB)
                .add_modifier(Modifier::BOLD);
            if focused {
                style.add_modifier(Modifier::REVERSED)
            } else {
                style
            }
        } else {
            Style::default().fg(colors::SECONDARY)
        };
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(colors::SECONDARY)));
        }
        spans.push(Span::styled(format!(" {label} "), style));
    }
    Line::from(spans)
}


#[cfg(test)]
mod tests {
    use super::test_support::render_to_string;
    use super::*;
    use crate::config::Settings;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(0), "₹0");
        assert_eq!(format_rupees(999), "₹999");
        assert_eq!(format_rupees(5000), "₹5,000");
        assert_eq!(format_rupees(23900), "₹23,900");
        assert_eq!(format_rupees(1234567), "₹1,234,567");
    }

    #[test]
    fn test_format_paise() {
        assert_eq!(format_paise(500_000), "₹5,000");
        assert_eq!(format_paise(1_250), "₹12.50");
        assert_eq!(format_paise(5), "₹0.05");
        assert_eq!(format_signed_paise(-30_000), "-₹300");
        assert_eq!(format_signed_paise(480_000), "₹4,800");
        assert_eq!(format_signed_paise(i64::MIN), "-₹92,233,720,368,547,758.08");
    }

    #[test]
    fn test_date_formats() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(format_short_date(date), "Jan 5, 2025");
        assert_eq!(format_long_date(date), "January 5, 2025");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Munnar", 10), "Munnar");
        assert_eq!(truncate("Kerala Backwaters", 8), "Kerala \u{2026}");
    }

    #[test]
    fn test_frame_shows_header_nav_and_footer() {
        let app = App::new(Settings::default(), None);
        let content = render_to_string(120, 40, &app, render);
        assert!(content.contains("TripGuide"));
        assert!(content.contains("F1 Plan Trip"));
        assert!(content.contains("F5 Profile"));
        assert!(content.contains("Ctrl-C quit"));
    }

    #[test]
    fn test_every_screen_renders_in_small_terminal() {
        let mut app = App::new(Settings::default(), None);
        for _ in Screen::all() {
            let _ = render_to_string(60, 16, &app, render);
            app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        }
    }

    #[test]
    fn test_help_overlay_drawn_on_top() {
        let mut app = App::new(Settings::default(), None);
        app.screen = Screen::Guides;
        app.show_help = true;
        let content = render_to_string(100, 40, &app, render);
        assert!(content.contains("Keyboard Shortcuts"));
    }
}
