//! Core data models for TripGuide
//!
//! This module contains the catalog types used throughout the application:
//! plan destinations, transport modes, and the static catalogs behind the
//! explore, guides, accommodation, trip history and profile screens.

pub mod accommodations;
pub mod destinations;
pub mod explore;
pub mod guides;
pub mod profile;
pub mod transport;
pub mod trips;
pub mod weather;

pub use accommodations::{all_accommodations, Accommodation, AccommodationType};
pub use destinations::{CatalogSource, StaticCatalog};
pub use explore::{all_explore_destinations, ExploreCategory, ExploreDestination};
pub use guides::{all_guides, Guide, GuideCategory};
pub use profile::{user_profile, UserProfile};
pub use transport::{transport_info, TransportInfo};
pub use trips::{all_trips, TripRecord, TripStatus};
pub use weather::{StaticWeather, WeatherCondition, WeatherReport, WeatherSource};

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair
///
/// Only used to derive the route direction label, never for real distances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Kinds of places that can appear in a plan catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DestinationCategory {
    Attraction,
    Food,
    Accommodation,
}

impl DestinationCategory {
    /// Returns a slice containing all category variants.
    pub fn all() -> &'static [DestinationCategory] {
        &[
            DestinationCategory::Attraction,
            DestinationCategory::Food,
            DestinationCategory::Accommodation,
        ]
    }

    /// Returns a human-readable display label for the category.
    pub fn label(&self) -> &'static str {
        match self {
            DestinationCategory::Attraction => "Attraction",
            DestinationCategory::Food => "Food",
            DestinationCategory::Accommodation => "Accommodation",
        }
    }

    /// Parses a category name, case-insensitively.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<DestinationCategory> {
        match s.to_lowercase().trim() {
            "attraction" => Some(DestinationCategory::Attraction),
            "food" => Some(DestinationCategory::Food),
            "accommodation" | "stay" => Some(DestinationCategory::Accommodation),
            _ => None,
        }
    }
}

/// A candidate place to visit, produced by a [`CatalogSource`] for one plan
///
/// Unlike the static catalogs, destinations own their strings since a catalog
/// is regenerated every time a plan is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    /// Unique identifier within one catalog snapshot
    pub id: String,
    /// Display name
    pub name: String,
    /// What kind of place this is
    pub category: DestinationCategory,
    /// Rating between 0 and 5
    pub rating: f32,
    /// Short description
    pub description: String,
    /// Location of the place
    pub coordinates: Coordinates,
    /// Estimated cost in rupees
    pub estimated_cost: u64,
    /// Free-text duration, e.g. "2 hours" or "per night"
    pub duration: String,
}

/// How the traveller gets around
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    #[default]
    Bus,
    Train,
    Car,
}

impl TransportMode {
    /// Returns a slice containing all transport modes in form order.
    pub fn all() -> &'static [TransportMode] {
        &[TransportMode::Bus, TransportMode::Train, TransportMode::Car]
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Bus => "Bus",
            TransportMode::Train => "Train",
            TransportMode::Car => "Car",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TransportMode::Bus => "\u{1F68C}",   // 🚌
            TransportMode::Train => "\u{1F682}", // 🚂
            TransportMode::Car => "\u{1F697}",   // 🚗
        }
    }

    /// Parses a transport mode name, case-insensitively.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<TransportMode> {
        match s.to_lowercase().trim() {
            "bus" => Some(TransportMode::Bus),
            "train" | "rail" => Some(TransportMode::Train),
            "car" | "drive" => Some(TransportMode::Car),
            _ => None,
        }
    }

    /// The next mode in form order, wrapping around
    pub fn next(self) -> TransportMode {
        cycle(TransportMode::all(), self, 1)
    }

    /// The previous mode in form order, wrapping around
    pub fn prev(self) -> TransportMode {
        cycle(TransportMode::all(), self, -1)
    }
}

/// Steps through a closed set of values, wrapping at both ends
///
/// Used by every selector the UI cycles with the arrow keys.
pub fn cycle<T: Copy + PartialEq>(values: &[T], current: T, step: isize) -> T {
    let len = values.len() as isize;
    let index = values.iter().position(|v| *v == current).unwrap_or(0) as isize;
    values[(index + step).rem_euclid(len) as usize]
}

/// Cycles an optional selector where `None` stands for "all"
///
/// The order is `None`, then each value in turn.
pub fn cycle_choice<T: Copy + PartialEq>(values: &[T], current: Option<T>, step: isize) -> Option<T> {
    let len = values.len() as isize + 1;
    let index = match current {
        None => 0,
        Some(c) => values.iter().position(|v| *v == c).map_or(0, |i| i as isize + 1),
    };
    match (index + step).rem_euclid(len) {
        0 => None,
        i => Some(values[(i - 1) as usize]),
    }
}
