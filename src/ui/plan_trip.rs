//! Plan Trip screen UI
//!
//! Before a plan exists only the trip form is shown. Once the plan is
//! created the screen splits into the form and itinerary browser on the left
//! and weather, accommodations and the budget tracker on the right. The
//! focused panel gets a highlighted border.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::widgets::{usage_bar::severity_color, UsageBar};
use super::{
    format_paise, format_rating, format_rupees, format_signed_paise, tab_line, truncate,
};
use crate::app::{App, BudgetField, FormField, PlanPanel};
use crate::data::accommodations::amenity_icon;
use crate::data::weather::advisory;
use crate::data::{transport_info, AccommodationType, WeatherReport};
use crate::trip::{ExpenseCategory, QUICK_ADD_AMOUNTS};

/// Color scheme for the plan trip screen
mod colors {
    use ratatui::style::Color;

    pub const HEADER: Color = Color::Cyan;
    pub const PRIMARY: Color = Color::White;
    pub const SECONDARY: Color = Color::Gray;
    pub const FOCUS: Color = Color::Yellow;
    pub const SELECTED: Color = Color::Green;
    pub const DISABLED: Color = Color::DarkGray;
    pub const ERROR: Color = Color::Red;
    pub const BORDER: Color = Color::DarkGray;
}

/// Renders the Plan Trip screen
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    if !app.trip.has_plan() {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);
        render_form(frame, chunks[0], app);
        render_intro(frame, chunks[1]);
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(10), Constraint::Min(6)])
        .split(columns[0]);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Weather and transport
            Constraint::Length(8), // Accommodations
            Constraint::Min(9),    // Budget tracker
        ])
        .split(columns[1]);

    render_form(frame, left[0], app);
    render_itinerary(frame, left[1], app);
    render_conditions(frame, right[0], app);
    render_stays(frame, right[1], app);
    render_budget(frame, right[2], app);
}

fn panel_block(app: &App, panel: PlanPanel) -> Block<'static> {
    let focused = app.plan_panel == panel;
    let border = if focused { colors::FOCUS } else { colors::BORDER };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            format!(" {} ", panel.label()),
            Style::default()
                .fg(colors::HEADER)
                .add_modifier(Modifier::BOLD),
        ))
}

fn focus_marker(focused: bool) -> Span<'static> {
    if focused {
        Span::styled("\u{203A} ", Style::default().fg(colors::FOCUS))
    } else {
        Span::raw("  ")
    }
}

fn value_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(colors::FOCUS)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::PRIMARY)
    }
}

/// Renders the trip details form
fn render_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = panel_block(app, PlanPanel::Form);
    let form = &app.form;
    let panel_focused = app.plan_panel == PlanPanel::Form;

    let mut lines = Vec::new();
    for field in FormField::all() {
        let focused = panel_focused && form.focus == *field;
        let value = match field {
            FormField::CurrentLocation => text_value(&form.current_location, "e.g. Kochi", focused),
            FormField::Destination => text_value(&form.destination, "e.g. Thrissur", focused),
            FormField::Days => stepper(&format!("{} day{}", form.days, if form.days == 1 { "" } else { "s" }), focused),
            FormField::Budget => stepper(&format_rupees(form.budget), focused),
            FormField::Mode => stepper(&format!("{} {}", form.mode.icon(), form.mode.label()), focused),
            FormField::Submit => {
                let style = if !form.is_complete() {
                    Style::default().fg(colors::DISABLED)
                } else if focused {
                    Style::default()
                        .fg(colors::FOCUS)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(colors::SELECTED)
                };
                lines.push(Line::from(vec![
                    focus_marker(focused),
                    Span::styled(format!("[ {} ]", field.label()), style),
                ]));
                continue;
            }
        };
        let mut spans = vec![
            focus_marker(focused),
            Span::styled(
                format!("{:<18}", field.label()),
                Style::default().fg(colors::SECONDARY),
            ),
        ];
        spans.extend(value);
        lines.push(Line::from(spans));
    }

    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            format!("  {error}"),
            Style::default().fg(colors::ERROR),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn text_value(text: &str, placeholder: &str, focused: bool) -> Vec<Span<'static>> {
    let mut spans = if text.is_empty() {
        vec![Span::styled(
            placeholder.to_string(),
            Style::default().fg(colors::DISABLED),
        )]
    } else {
        vec![Span::styled(text.to_string(), value_style(focused))]
    };
    if focused {
        spans.push(Span::styled("\u{258F}", Style::default().fg(colors::FOCUS)));
    }
    spans
}

fn stepper(value: &str, focused: bool) -> Vec<Span<'static>> {
    let arrow = Style::default().fg(if focused { colors::FOCUS } else { colors::DISABLED });
    vec![
        Span::styled("\u{25C0} ", arrow),
        Span::styled(value.to_string(), value_style(focused)),
        Span::styled(" \u{25B6}", arrow),
    ]
}

/// Placeholder shown beside the form until a plan exists
fn render_intro(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Plan your perfect trip",
            Style::default()
                .fg(colors::HEADER)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter where you are and where you want to go, pick the number of days, \
             your budget and how you'd like to travel.",
            Style::default().fg(colors::SECONDARY),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "You'll get a list of places to build an itinerary from, weather for both \
             ends of the trip, places to stay and a budget tracker.",
            Style::default().fg(colors::SECONDARY),
        )),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

/// Renders the catalog with selection markers and the route summary
fn render_itinerary(frame: &mut Frame, area: Rect, app: &App) {
    let itinerary = app.trip.itinerary();
    let block = panel_block(app, PlanPanel::Itinerary).title_bottom(Span::styled(
        format!(" {} selected ", itinerary.len()),
        Style::default().fg(colors::SECONDARY),
    ));
    let focused = app.plan_panel == PlanPanel::Itinerary;
    let name_width = (area.width as usize).saturating_sub(34).max(10);

    let mut lines = Vec::new();
    for (i, destination) in app.trip.catalog().iter().enumerate() {
        let is_cursor = focused && i == app.itinerary_cursor;
        let marker = match itinerary.position(&destination.id) {
            Some(n) => Span::styled(format!("[{n}]"), Style::default().fg(colors::SELECTED)),
            None => Span::styled("[ ]", Style::default().fg(colors::SECONDARY)),
        };
        let name_style = if is_cursor {
            Style::default()
                .fg(colors::FOCUS)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::PRIMARY)
        };
        lines.push(Line::from(vec![
            focus_marker(is_cursor),
            marker,
            Span::raw(" "),
            Span::styled(
                format!("{:<width$}", truncate(&destination.name, name_width), width = name_width),
                name_style,
            ),
            Span::styled(
                format!(" {:<13}", destination.category.label()),
                Style::default().fg(colors::SECONDARY),
            ),
            Span::styled(
                format!("{} ", format_rating(destination.rating)),
                Style::default().fg(colors::FOCUS),
            ),
            Span::styled(
                format!("{:>7}", format_rupees(destination.estimated_cost)),
                Style::default().fg(colors::PRIMARY),
            ),
        ]));
    }

    lines.push(Line::from(""));
    if itinerary.is_empty() {
        lines.push(Line::from(Span::styled(
            "  Press Space to add places to your itinerary",
            Style::default().fg(colors::SECONDARY),
        )));
    } else {
        let route: Vec<String> = itinerary
            .stops()
            .iter()
            .enumerate()
            .map(|(i, d)| format!("{}. {}", i + 1, d.name))
            .collect();
        lines.push(Line::from(vec![
            Span::styled("  Route: ", Style::default().fg(colors::SECONDARY)),
            Span::styled(route.join(" \u{2192} "), Style::default().fg(colors::PRIMARY)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("  Total estimated cost: ", Style::default().fg(colors::SECONDARY)),
            Span::styled(
                format_rupees(app.trip.itinerary_cost()),
                Style::default()
                    .fg(colors::SELECTED)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    if let Some(direction) = app.trip.route_direction() {
        lines.push(Line::from(vec![
            Span::styled("  Optimized route: ", Style::default().fg(colors::SECONDARY)),
            Span::styled(direction.label(), Style::default().fg(colors::HEADER)),
        ]));
    }

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

/// Renders weather for both ends of the trip plus transport info
fn render_conditions(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .title(Span::styled(
            " Weather & Transport ",
            Style::default()
                .fg(colors::HEADER)
                .add_modifier(Modifier::BOLD),
        ));

    let mut lines = Vec::new();
    if let Some((origin, destination)) = app.plan_weather() {
        lines.push(weather_line(&origin));
        lines.push(weather_line(&destination));
        lines.push(Line::from(Span::styled(
            advisory(&destination),
            Style::default().fg(colors::SECONDARY),
        )));
    }
    if let Some(params) = app.trip.params() {
        let info = transport_info(params.transport_mode);
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", params.transport_mode.icon())),
            Span::styled(info.info, Style::default().fg(colors::PRIMARY)),
            Span::styled(
                format!("  {}", info.station),
                Style::default().fg(colors::SECONDARY),
            ),
        ]));
    }
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn weather_line(report: &WeatherReport) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<12}", truncate(&report.location, 12)),
            Style::default().fg(colors::PRIMARY),
        ),
        Span::raw(format!("{} ", report.condition.icon())),
        Span::styled(
            format!("{}\u{00B0}C ", report.temperature),
            Style::default()
                .fg(colors::FOCUS)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "{}  humidity {}%  wind {} km/h",
                report.condition.label(),
                report.humidity,
                report.wind_speed
            ),
            Style::default().fg(colors::SECONDARY),
        ),
    ])
}

/// Renders the accommodation list with its type tabs
fn render_stays(frame: &mut Frame, area: Rect, app: &App) {
    let block = panel_block(app, PlanPanel::Stays);
    let focused = app.plan_panel == PlanPanel::Stays;

    let mut labels = vec!["All".to_string()];
    labels.extend(AccommodationType::all().iter().map(|t| t.tab_label().to_string()));
    let selected = app
        .stay_filter
        .and_then(|f| AccommodationType::all().iter().position(|t| *t == f))
        .map_or(0, |i| i + 1);

    let mut lines = vec![tab_line(&labels, selected, focused)];
    for stay in app.filtered_stays() {
        lines.push(Line::from(vec![
            Span::styled(
                stay.name,
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}  ", stay.kind.label()),
                Style::default().fg(colors::SECONDARY),
            ),
            Span::styled(format_rating(stay.rating), Style::default().fg(colors::FOCUS)),
            Span::styled(
                format!("  {}/night", format_rupees(stay.price)),
                Style::default().fg(colors::SELECTED),
            ),
        ]));
        let amenities: Vec<String> = stay
            .amenities
            .iter()
            .map(|a| format!("{} {}", amenity_icon(a), a))
            .collect();
        lines.push(Line::from(Span::styled(
            format!("  {}  {}", stay.distance, amenities.join(" ")),
            Style::default().fg(colors::SECONDARY),
        )));
    }
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Renders the budget tracker
fn render_budget(frame: &mut Frame, area: Rect, app: &App) {
    let block = panel_block(app, PlanPanel::Budget);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let budget = app.trip.budget();
    let status = app.trip.budget_status();
    let focused = app.plan_panel == PlanPanel::Budget;
    let row_focused = |field: BudgetField| focused && app.budget_focus == field;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Totals
            Constraint::Length(1), // Usage bar
            Constraint::Length(1), // Percentage / exceeded banner
            Constraint::Min(3),    // Expense entry and breakdown
        ])
        .split(inner);

    let totals = Line::from(vec![
        Span::styled("Total ", Style::default().fg(colors::SECONDARY)),
        Span::styled(format_paise(budget.total()), Style::default().fg(colors::PRIMARY)),
        Span::styled("  Spent ", Style::default().fg(colors::SECONDARY)),
        Span::styled(format_paise(budget.spent()), Style::default().fg(colors::PRIMARY)),
        Span::styled("  Remaining ", Style::default().fg(colors::SECONDARY)),
        Span::styled(
            format_signed_paise(status.remaining),
            Style::default()
                .fg(severity_color(status.severity))
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(totals), chunks[0]);

    frame.render_widget(
        UsageBar::new(status.used_percentage).severity(status.severity),
        chunks[1],
    );

    let usage = if status.exceeded {
        Line::from(Span::styled(
            "\u{26A0} Budget exceeded!",
            Style::default()
                .fg(colors::ERROR)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            format!("{:.1}% used", status.used_percentage),
            Style::default().fg(severity_color(status.severity)),
        ))
    };
    frame.render_widget(Paragraph::new(usage), chunks[2]);

    let mut lines = Vec::new();
    let category_focused = row_focused(BudgetField::Category);
    let mut category = vec![
        focus_marker(category_focused),
        Span::styled("Category ", Style::default().fg(colors::SECONDARY)),
    ];
    category.extend(stepper(app.expense_category.label(), category_focused));
    lines.push(Line::from(category));

    let amount_focused = row_focused(BudgetField::Amount);
    let add_style = if app.expense_input_valid() {
        Style::default().fg(colors::SELECTED)
    } else {
        Style::default().fg(colors::DISABLED)
    };
    let mut amount = vec![
        focus_marker(amount_focused),
        Span::styled("Amount   \u{20B9}", Style::default().fg(colors::SECONDARY)),
    ];
    amount.extend(text_value(&app.expense_input, "0", amount_focused));
    amount.push(Span::styled("  [Add]", add_style));
    lines.push(Line::from(amount));

    let mut quick = vec![
        focus_marker(matches!(app.budget_focus, BudgetField::QuickAdd(_)) && focused),
        Span::styled("Quick add ", Style::default().fg(colors::SECONDARY)),
    ];
    for (i, value) in QUICK_ADD_AMOUNTS.iter().enumerate() {
        let style = if row_focused(BudgetField::QuickAdd(i)) {
            Style::default()
                .fg(colors::FOCUS)
                .add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(colors::PRIMARY)
        };
        quick.push(Span::styled(format!("[+{}]", format_rupees(*value)), style));
        quick.push(Span::raw(" "));
    }
    lines.push(Line::from(quick));

    for (category, spent) in budget.spent_by_category() {
        lines.push(category_line(category, spent));
    }

    frame.render_widget(Paragraph::new(lines), chunks[3]);
}

fn category_line(category: ExpenseCategory, spent: u64) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:<16}", category.label()),
            Style::default().fg(colors::SECONDARY),
        ),
        Span::styled(format_paise(spent), Style::default().fg(colors::PRIMARY)),
    ])
}
