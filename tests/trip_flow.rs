//! End-to-end keyboard flows through the public API
//!
//! Drives [`App`] with key events the way the event loop does and checks the
//! resulting trip state, budget and saved settings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tempfile::TempDir;
use tripguide::app::{App, BudgetField, PlanPanel, PreferenceField, ProfileTab, Screen};
use tripguide::config::{PreferredTransport, Settings, SettingsStore};
use tripguide::trip::Severity;

fn press(app: &mut App, codes: &[KeyCode]) {
    for code in codes {
        app.handle_key(KeyEvent::new(*code, KeyModifiers::NONE));
    }
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }
}

/// Fills the form from the first field down and submits it
fn plan(app: &mut App, from: &str, to: &str) {
    type_text(app, from);
    press(app, &[KeyCode::Down]);
    type_text(app, to);
    // Days, budget and mode keep their defaults
    press(
        app,
        &[KeyCode::Down, KeyCode::Down, KeyCode::Down, KeyCode::Down, KeyCode::Enter],
    );
}

#[test]
fn test_plan_select_and_spend() {
    let mut app = App::new(Settings::default(), None);
    plan(&mut app, "Kochi", "Thrissur");
    assert!(app.trip.has_plan());
    assert_eq!(app.trip.budget().total(), 500_000);
    assert_eq!(app.plan_panel, PlanPanel::Itinerary);

    // Temple (free) and restaurant (₹300)
    press(&mut app, &[KeyCode::Char(' '), KeyCode::Down, KeyCode::Down, KeyCode::Char(' ')]);
    assert_eq!(app.trip.itinerary().len(), 2);
    assert_eq!(app.trip.itinerary_cost(), 300);

    // Dropping the temple keeps the restaurant and the cost
    press(&mut app, &[KeyCode::Up, KeyCode::Up, KeyCode::Char(' ')]);
    assert_eq!(app.trip.itinerary().len(), 1);
    assert_eq!(app.trip.itinerary_cost(), 300);

    press(&mut app, &[KeyCode::PageDown, KeyCode::PageDown]);
    assert_eq!(app.plan_panel, PlanPanel::Budget);

    press(&mut app, &[KeyCode::Down]);
    assert_eq!(app.budget_focus, BudgetField::Amount);
    type_text(&mut app, "2450");
    press(&mut app, &[KeyCode::Enter]);
    assert_eq!(app.trip.budget().spent(), 245_000);
    assert!(app.expense_input.is_empty());

    // ₹50 quick add lands exactly on half the budget
    press(&mut app, &[KeyCode::Down, KeyCode::Enter]);
    let status = app.trip.budget_status();
    assert_eq!(app.trip.budget().spent(), 250_000);
    assert_eq!(status.remaining, 250_000);
    assert_eq!(status.used_percentage, 50.0);
    assert_eq!(status.severity, Severity::Warning);
    assert!(!status.exceeded);
}

#[test]
fn test_fractional_amounts_keep_paise() {
    let mut app = App::new(Settings::default(), None);
    plan(&mut app, "Kochi", "Thrissur");
    press(&mut app, &[KeyCode::PageDown, KeyCode::PageDown, KeyCode::Down]);
    assert_eq!(app.budget_focus, BudgetField::Amount);

    type_text(&mut app, "12.5");
    press(&mut app, &[KeyCode::Enter]);
    type_text(&mut app, "0.75");
    press(&mut app, &[KeyCode::Enter]);

    let status = app.trip.budget_status();
    assert_eq!(app.trip.budget().spent(), 1_325);
    assert_eq!(status.remaining, 498_675);
    assert_eq!(status.severity, Severity::Ok);
}

#[test]
fn test_rejected_expense_leaves_budget_alone() {
    let mut app = App::new(Settings::default(), None);
    plan(&mut app, "Kochi", "Thrissur");
    press(&mut app, &[KeyCode::PageDown, KeyCode::PageDown, KeyCode::Down]);
    assert_eq!(app.plan_panel, PlanPanel::Budget);

    type_text(&mut app, "-50");
    assert!(!app.expense_input_valid());
    press(&mut app, &[KeyCode::Enter]);
    assert_eq!(app.trip.budget().spent(), 0);
    assert_eq!(app.expense_input, "-50");
}

#[test]
fn test_missing_destination_blocks_plan() {
    let mut app = App::new(Settings::default(), None);
    type_text(&mut app, "Kochi");
    press(
        &mut app,
        &[KeyCode::Down, KeyCode::Down, KeyCode::Down, KeyCode::Down, KeyCode::Down, KeyCode::Enter],
    );
    assert!(!app.trip.has_plan());
    let error = app.form.error.as_ref().map(ToString::to_string);
    assert_eq!(error.as_deref(), Some("Destination is required"));
}

#[test]
fn test_typing_q_in_a_text_field_does_not_quit() {
    let mut app = App::new(Settings::default(), None);
    type_text(&mut app, "Quilon q");
    assert!(!app.should_quit);
    assert_eq!(app.form.current_location, "Quilon q");

    press(&mut app, &[KeyCode::F(2), KeyCode::Char('q')]);
    assert_eq!(app.screen, Screen::MyTrips);
    assert!(app.should_quit);
}

#[test]
fn test_settings_file_feeds_the_form() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "default_budget": 8000, "default_days": 3 }"#).unwrap();

    let store = SettingsStore::with_path(path);
    let app = App::new(store.load(), Some(store));
    assert_eq!(app.form.budget, 8000);
    assert_eq!(app.form.days, 3);
}

#[test]
fn test_preferences_saved_to_disk() {
    let dir = TempDir::new().unwrap();
    let store = SettingsStore::with_path(dir.path().join("nested").join("settings.json"));
    let mut app = App::new(Settings::default(), Some(store.clone()));

    press(&mut app, &[KeyCode::F(5), KeyCode::Right, KeyCode::Right]);
    assert_eq!(app.profile_tab, ProfileTab::Preferences);

    press(&mut app, &[KeyCode::Down, KeyCode::Right]);
    assert_eq!(app.preference_focus, Some(PreferenceField::Transport));
    assert!(app.preferences_dirty);

    app.preference_focus = Some(PreferenceField::Save);
    press(&mut app, &[KeyCode::Enter]);
    assert!(!app.preferences_dirty);
    assert_eq!(app.status_message.as_deref(), Some("Preferences saved"));

    let saved = store.read().unwrap().unwrap();
    assert_eq!(saved.preferences.transport, PreferredTransport::Train);
}
