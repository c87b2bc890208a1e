//! Profile screen UI

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{format_long_date, format_short_date, tab_line};
use crate::app::{App, PreferenceField, ProfileTab};
use crate::config::NOTIFICATION_ITEMS;
use crate::data::profile::SETTINGS_ITEMS;
use crate::data::{user_profile, UserProfile};

/// Color scheme for the profile screen
mod colors {
    use ratatui::style::Color;

    pub const HEADER: Color = Color::Cyan;
    pub const PRIMARY: Color = Color::White;
    pub const SECONDARY: Color = Color::Gray;
    pub const FOCUS: Color = Color::Yellow;
    pub const ENABLED: Color = Color::Green;
    pub const DISABLED: Color = Color::DarkGray;
    pub const UNSAVED: Color = Color::Magenta;
    pub const BORDER: Color = Color::DarkGray;
}

/// Renders the Profile screen
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    let labels: Vec<String> = ProfileTab::all()
        .iter()
        .map(|t| t.label().to_string())
        .collect();
    let selected = ProfileTab::all()
        .iter()
        .position(|t| *t == app.profile_tab)
        .unwrap_or(0);
    frame.render_widget(
        Paragraph::new(tab_line(&labels, selected, app.preference_focus.is_none())),
        chunks[0],
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER));
    let lines = match app.profile_tab {
        ProfileTab::Overview => overview_lines(&user_profile()),
        ProfileTab::Settings => settings_lines(),
        ProfileTab::Preferences => preference_lines(app),
    };
    frame.render_widget(Paragraph::new(lines).block(block), chunks[1]);
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(colors::HEADER)
            .add_modifier(Modifier::BOLD),
    ))
}

fn overview_lines(profile: &UserProfile) -> Vec<Line<'static>> {
    let label = |s: &str| Span::styled(s.to_string(), Style::default().fg(colors::SECONDARY));
    let value = |s: String| {
        Span::styled(
            s,
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )
    };

    let mut lines = vec![
        Line::from(vec![
            value(profile.name.to_string()),
            label(&format!("  {}  {}", profile.email, profile.location)),
        ]),
        Line::from(label(&format!(
            "Member since {}  \u{00B7}  {}  \u{00B7}  Favorite: {}",
            format_long_date(profile.join_date),
            profile.travel_style,
            profile.favorite_destination
        ))),
        Line::from(vec![
            label("Trips "),
            value(profile.trips_completed.to_string()),
            label("   Places "),
            value(profile.places_visited.to_string()),
            label("   Distance "),
            value(format!("{} km", profile.total_distance)),
            label("   Avg rating "),
            value(format!("{:.1}", profile.average_rating)),
        ]),
        Line::from(""),
        heading("Badges"),
    ];
    for badge in profile.badges {
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", badge.icon)),
            value(badge.name.to_string()),
            label(&format!("  {}", badge.description)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(heading("Recent Activity"));
    for activity in &profile.recent_activity {
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", activity.kind.icon())),
            Span::styled(activity.action, Style::default().fg(colors::PRIMARY)),
            label(&format!("  {}", format_short_date(activity.date))),
        ]));
    }
    lines
}

fn settings_lines() -> Vec<Line<'static>> {
    SETTINGS_ITEMS
        .iter()
        .map(|(title, description)| {
            Line::from(vec![
                Span::styled(
                    format!("{title:<22}"),
                    Style::default().fg(colors::PRIMARY),
                ),
                Span::styled(*description, Style::default().fg(colors::SECONDARY)),
            ])
        })
        .collect()
}

fn preference_lines(app: &App) -> Vec<Line<'static>> {
    let prefs = &app.settings.preferences;
    let focused = |field: PreferenceField| app.preference_focus == Some(field);
    let marker = |on: bool| {
        if on {
            Span::styled("\u{203A} ", Style::default().fg(colors::FOCUS))
        } else {
            Span::raw("  ")
        }
    };
    let selector = |field: PreferenceField, label: &str, value: &str| {
        let on = focused(field);
        let style = if on {
            Style::default()
                .fg(colors::FOCUS)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::PRIMARY)
        };
        Line::from(vec![
            marker(on),
            Span::styled(format!("{label:<22}"), Style::default().fg(colors::SECONDARY)),
            Span::styled(format!("\u{25C0} {value} \u{25B6}"), style),
        ])
    };

    let mut lines = vec![
        heading("Travel Preferences"),
        selector(PreferenceField::Transport, "Preferred transport", prefs.transport.label()),
        selector(PreferenceField::BudgetRange, "Budget range", prefs.budget_range.label()),
        selector(PreferenceField::TravelStyle, "Travel style", prefs.travel_style.label()),
        selector(PreferenceField::Accommodation, "Accommodation", prefs.accommodation.label()),
        Line::from(""),
        heading("Notifications"),
    ];

    for (i, (title, description)) in NOTIFICATION_ITEMS.iter().enumerate() {
        let on = focused(PreferenceField::Notification(i));
        let enabled = prefs.notifications.get(i);
        let toggle = if enabled {
            Span::styled("[on] ", Style::default().fg(colors::ENABLED))
        } else {
            Span::styled("[off]", Style::default().fg(colors::DISABLED))
        };
        let title_style = if on {
            Style::default()
                .fg(colors::FOCUS)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::PRIMARY)
        };
        lines.push(Line::from(vec![
            marker(on),
            toggle,
            Span::styled(format!(" {title}"), title_style),
            Span::styled(
                format!("  {description}"),
                Style::default().fg(colors::SECONDARY),
            ),
        ]));
    }

    lines.push(Line::from(""));
    let save_on = focused(PreferenceField::Save);
    let save_style = if save_on {
        Style::default()
            .fg(colors::FOCUS)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(colors::ENABLED)
    };
    let mut save = vec![marker(save_on), Span::styled("[ Save Preferences ]", save_style)];
    if app.preferences_dirty {
        save.push(Span::styled(
            "  \u{25CF} unsaved changes",
            Style::default().fg(colors::UNSAVED),
        ));
    }
    lines.push(Line::from(save));
    lines
}
