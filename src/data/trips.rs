//! Trip history shown on the My Trips screen

use chrono::NaiveDate;
use serde::Serialize;

/// Lifecycle stage of a past or planned trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl TripStatus {
    pub fn all() -> &'static [TripStatus] {
        &[TripStatus::Upcoming, TripStatus::Ongoing, TripStatus::Completed]
    }

    pub fn label(&self) -> &'static str {
        match self {
            TripStatus::Upcoming => "Upcoming",
            TripStatus::Ongoing => "Ongoing",
            TripStatus::Completed => "Completed",
        }
    }
}

/// A trip in the user's history
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TripRecord {
    pub id: &'static str,
    pub destination: &'static str,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: TripStatus,
    pub budget: u64,
    pub spent: u64,
    /// Number of places on the itinerary
    pub places: u32,
    /// Rating given after the trip, out of 5
    pub rating: Option<f32>,
}

impl TripRecord {
    /// Share of the budget spent, capped at 100 for the progress bar
    pub fn budget_usage_percent(&self) -> f64 {
        if self.budget == 0 {
            return 0.0;
        }
        (self.spent as f64 / self.budget as f64 * 100.0).min(100.0)
    }
}

/// Builds the trip history
///
/// Dates are not const-constructible, so the history is built on demand
/// rather than held in a static array.
pub fn all_trips() -> Vec<TripRecord> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN);
    vec![
        TripRecord {
            id: "1",
            destination: "Goa",
            start_date: date(2025, 2, 15),
            end_date: date(2025, 2, 20),
            status: TripStatus::Upcoming,
            budget: 15000,
            spent: 0,
            places: 8,
            rating: None,
        },
        TripRecord {
            id: "2",
            destination: "Munnar",
            start_date: date(2025, 1, 10),
            end_date: date(2025, 1, 12),
            status: TripStatus::Ongoing,
            budget: 8000,
            spent: 3200,
            places: 5,
            rating: None,
        },
        TripRecord {
            id: "3",
            destination: "Kochi",
            start_date: date(2024, 12, 20),
            end_date: date(2024, 12, 23),
            status: TripStatus::Completed,
            budget: 12000,
            spent: 11500,
            places: 12,
            rating: Some(4.8),
        },
        TripRecord {
            id: "4",
            destination: "Alleppey",
            start_date: date(2024, 11, 5),
            end_date: date(2024, 11, 8),
            status: TripStatus::Completed,
            budget: 10000,
            spent: 9200,
            places: 6,
            rating: Some(4.5),
        },
    ]
}

/// Aggregate figures shown above the trip tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripStats {
    pub total_trips: usize,
    pub places_visited: u32,
    pub total_spent: u64,
}

pub fn trip_stats(trips: &[TripRecord]) -> TripStats {
    TripStats {
        total_trips: trips.len(),
        places_visited: trips.iter().map(|t| t.places).sum(),
        total_spent: trips.iter().map(|t| t.spent).sum(),
    }
}

/// Number of trips with the given status, for the tab badges
pub fn count_by_status(trips: &[TripRecord], status: TripStatus) -> usize {
    trips.iter().filter(|t| t.status == status).count()
}
