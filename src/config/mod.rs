//! User settings persisted between runs
//!
//! Settings hold the plan form defaults and the travel preferences edited on
//! the profile screen. They are stored as pretty-printed JSON in the platform
//! config directory (`~/.config/tripguide/settings.json` on Linux). Trip
//! state is never written here.

mod store;

pub use store::{ConfigError, SettingsStore};

use serde::{Deserialize, Serialize};

use crate::data::TransportMode;
use crate::trip::{BUDGET_STEP, MAX_DAYS, MIN_BUDGET, MIN_DAYS};

/// Budget the plan form starts with when nothing is configured
pub const DEFAULT_BUDGET: u64 = 5000;
/// Trip length the plan form starts with when nothing is configured
pub const DEFAULT_DAYS: u8 = 1;

/// Preferred way to travel, including modes the planner itself can't book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredTransport {
    #[default]
    Bus,
    Train,
    Car,
    Flight,
}

impl PreferredTransport {
    pub fn all() -> &'static [PreferredTransport] {
        &[
            PreferredTransport::Bus,
            PreferredTransport::Train,
            PreferredTransport::Car,
            PreferredTransport::Flight,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            PreferredTransport::Bus => "Bus",
            PreferredTransport::Train => "Train",
            PreferredTransport::Car => "Car",
            PreferredTransport::Flight => "Flight",
        }
    }
}

/// Per-trip spending bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetRange {
    #[default]
    Budget,
    Mid,
    Luxury,
}

impl BudgetRange {
    pub fn all() -> &'static [BudgetRange] {
        &[BudgetRange::Budget, BudgetRange::Mid, BudgetRange::Luxury]
    }

    pub fn label(&self) -> &'static str {
        match self {
            BudgetRange::Budget => "₹5,000 - ₹15,000",
            BudgetRange::Mid => "₹15,000 - ₹30,000",
            BudgetRange::Luxury => "₹30,000+",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelStyle {
    #[default]
    Solo,
    Couple,
    Family,
    Group,
}

impl TravelStyle {
    pub fn all() -> &'static [TravelStyle] {
        &[
            TravelStyle::Solo,
            TravelStyle::Couple,
            TravelStyle::Family,
            TravelStyle::Group,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            TravelStyle::Solo => "Solo Traveler",
            TravelStyle::Couple => "Couple",
            TravelStyle::Family => "Family",
            TravelStyle::Group => "Group",
        }
    }
}

/// Preferred kind of stay; wider than the accommodation catalog's types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredStay {
    #[default]
    Homestay,
    Hotel,
    Resort,
    Hostel,
}

impl PreferredStay {
    pub fn all() -> &'static [PreferredStay] {
        &[
            PreferredStay::Homestay,
            PreferredStay::Hotel,
            PreferredStay::Resort,
            PreferredStay::Hostel,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            PreferredStay::Homestay => "Homestays",
            PreferredStay::Hotel => "Hotels",
            PreferredStay::Resort => "Resorts",
            PreferredStay::Hostel => "Hostels",
        }
    }
}

/// Label and description of each notification switch, in display order
pub const NOTIFICATION_ITEMS: [(&str, &str); 4] = [
    ("Trip reminders", "Get notified about upcoming trips"),
    ("Weather alerts", "Receive weather updates for your destinations"),
    ("Budget notifications", "Alerts when approaching budget limits"),
    (
        "New destination suggestions",
        "Discover new places based on your preferences",
    ),
];

/// Notification switches; every one starts enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notifications {
    pub trip_reminders: bool,
    pub weather_alerts: bool,
    pub budget_alerts: bool,
    pub destination_suggestions: bool,
}

impl Default for Notifications {
    fn default() -> Self {
        Self {
            trip_reminders: true,
            weather_alerts: true,
            budget_alerts: true,
            destination_suggestions: true,
        }
    }
}

impl Notifications {
    /// Switch state by display index (see [`NOTIFICATION_ITEMS`])
    pub fn get(&self, index: usize) -> bool {
        match index {
            0 => self.trip_reminders,
            1 => self.weather_alerts,
            2 => self.budget_alerts,
            3 => self.destination_suggestions,
            _ => false,
        }
    }

    /// Returns a copy with the switch at `index` flipped; out-of-range
    /// indexes change nothing.
    pub fn toggled(mut self, index: usize) -> Notifications {
        match index {
            0 => self.trip_reminders = !self.trip_reminders,
            1 => self.weather_alerts = !self.weather_alerts,
            2 => self.budget_alerts = !self.budget_alerts,
            3 => self.destination_suggestions = !self.destination_suggestions,
            _ => {}
        }
        self
    }
}

/// Travel preferences from the profile screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub transport: PreferredTransport,
    pub budget_range: BudgetRange,
    pub travel_style: TravelStyle,
    pub accommodation: PreferredStay,
    pub notifications: Notifications,
}

/// Everything stored in `settings.json`
///
/// Unknown fields are ignored and missing ones fall back to their defaults,
/// so older files keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Budget prefilled in the plan form, in rupees
    pub default_budget: u64,
    /// Trip length prefilled in the plan form
    pub default_days: u8,
    pub default_mode: TransportMode,
    pub preferences: Preferences,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_budget: DEFAULT_BUDGET,
            default_days: DEFAULT_DAYS,
            default_mode: TransportMode::default(),
            preferences: Preferences::default(),
        }
    }
}

impl Settings {
    /// Pulls the form defaults back inside the ranges the plan form accepts.
    ///
    /// Days are clamped to 1..=14; the budget is raised to the minimum and
    /// rounded down onto the 500 step.
    pub fn sanitized(self) -> Settings {
        let days = self.default_days.clamp(MIN_DAYS, MAX_DAYS);
        let budget = self.default_budget.max(MIN_BUDGET);
        let budget = budget - (budget - MIN_BUDGET) % BUDGET_STEP;
        if days != self.default_days || budget != self.default_budget {
            tracing::warn!(
                days = self.default_days,
                budget = self.default_budget,
                "configured form defaults out of range, adjusted"
            );
        }
        Settings {
            default_days: days,
            default_budget: budget,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_budget, 5000);
        assert_eq!(settings.default_days, 1);
        assert_eq!(settings.default_mode, TransportMode::Bus);
        assert_eq!(settings.preferences.transport, PreferredTransport::Bus);
        assert!(settings.preferences.notifications.weather_alerts);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"default_days": 4, "preferences": {"transport": "flight"}}"#)
                .unwrap();
        assert_eq!(settings.default_days, 4);
        assert_eq!(settings.default_budget, 5000);
        assert_eq!(settings.preferences.transport, PreferredTransport::Flight);
        assert_eq!(settings.preferences.travel_style, TravelStyle::Solo);
        assert!(settings.preferences.notifications.trip_reminders);
    }

    #[test]
    fn test_sanitized_clamps_form_defaults() {
        let settings = Settings {
            default_budget: 1200,
            default_days: 30,
            ..Settings::default()
        }
        .sanitized();
        assert_eq!(settings.default_budget, 1000);
        assert_eq!(settings.default_days, 14);

        let settings = Settings {
            default_budget: 200,
            default_days: 0,
            ..Settings::default()
        }
        .sanitized();
        assert_eq!(settings.default_budget, 1000);
        assert_eq!(settings.default_days, 1);

        let fine = Settings {
            default_budget: 7500,
            ..Settings::default()
        };
        assert_eq!(fine.clone().sanitized(), fine);
    }

    #[test]
    fn test_notifications_toggle_by_index() {
        let notifications = Notifications::default().toggled(1);
        assert!(!notifications.get(1));
        assert!(notifications.get(0));
        assert_eq!(notifications.toggled(1), Notifications::default());
        assert_eq!(notifications.toggled(9), notifications);
        assert_eq!(NOTIFICATION_ITEMS.len(), 4);
    }

    #[test]
    fn test_preference_labels() {
        assert_eq!(PreferredTransport::all().len(), 4);
        assert_eq!(PreferredTransport::Flight.label(), "Flight");
        assert_eq!(BudgetRange::Luxury.label(), "₹30,000+");
        assert_eq!(PreferredStay::Hostel.label(), "Hostels");
    }
}
