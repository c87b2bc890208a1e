//! Destination catalog sources
//!
//! A plan's catalog is produced by a [`CatalogSource`]. The built-in
//! [`StaticCatalog`] serves a fixed list of places around Thrissur, Kerala
//! for any destination name.

use super::{Coordinates, Destination, DestinationCategory};
use crate::trip::TripParameters;

/// Produces the candidate destinations for a trip plan
pub trait CatalogSource {
    /// Returns the catalog for the given parameters.
    ///
    /// Implementations must return entries with unique ids.
    fn destinations_for(&self, params: &TripParameters) -> Vec<Destination>;
}

/// One row of the built-in catalog
struct StaticEntry {
    id: &'static str,
    name: &'static str,
    category: DestinationCategory,
    rating: f32,
    description: &'static str,
    lat: f64,
    lng: f64,
    estimated_cost: u64,
    duration: &'static str,
}

static THRISSUR: [StaticEntry; 5] = [
    StaticEntry {
        id: "1",
        name: "Vadakkunnathan Temple",
        category: DestinationCategory::Attraction,
        rating: 4.7,
        description: "Ancient Shiva temple with traditional Kerala architecture",
        lat: 10.5276,
        lng: 76.2144,
        estimated_cost: 0,
        duration: "2 hours",
    },
    StaticEntry {
        id: "2",
        name: "Kerala Sahitya Akademi",
        category: DestinationCategory::Attraction,
        rating: 4.3,
        description: "Cultural center showcasing Malayalam literature",
        lat: 10.5186,
        lng: 76.2144,
        estimated_cost: 50,
        duration: "1.5 hours",
    },
    StaticEntry {
        id: "3",
        name: "Pathans Restaurant",
        category: DestinationCategory::Food,
        rating: 4.6,
        description: "Famous for traditional Kerala meals and biryanis",
        lat: 10.5216,
        lng: 76.2144,
        estimated_cost: 300,
        duration: "1 hour",
    },
    StaticEntry {
        id: "4",
        name: "Lulu Mall Thrissur",
        category: DestinationCategory::Attraction,
        rating: 4.4,
        description: "Large shopping and entertainment complex",
        lat: 10.5129,
        lng: 76.2049,
        estimated_cost: 500,
        duration: "3 hours",
    },
    StaticEntry {
        id: "5",
        name: "Hotel Elite International",
        category: DestinationCategory::Accommodation,
        rating: 4.2,
        description: "Comfortable hotel with modern amenities",
        lat: 10.5276,
        lng: 76.2144,
        estimated_cost: 2500,
        duration: "per night",
    },
];

impl StaticEntry {
    fn to_destination(&self) -> Destination {
        Destination {
            id: self.id.to_string(),
            name: self.name.to_string(),
            category: self.category,
            rating: self.rating,
            description: self.description.to_string(),
            coordinates: Coordinates {
                lat: self.lat,
                lng: self.lng,
            },
            estimated_cost: self.estimated_cost,
            duration: self.duration.to_string(),
        }
    }
}

/// Catalog source backed by the built-in place list
///
/// Returns the same entries regardless of the requested destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

impl CatalogSource for StaticCatalog {
    fn destinations_for(&self, params: &TripParameters) -> Vec<Destination> {
        tracing::debug!(destination = %params.destination, "serving built-in catalog");
        THRISSUR.iter().map(StaticEntry::to_destination).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::TransportMode;

    fn params() -> TripParameters {
        TripParameters {
            current_location: "Kochi".to_string(),
            destination: "Thrissur".to_string(),
            days: 2,
            budget: 5000,
            transport_mode: TransportMode::Bus,
        }
    }

    #[test]
    fn test_static_catalog_has_five_entries() {
        assert_eq!(StaticCatalog.destinations_for(&params()).len(), 5);
    }

    #[test]
    fn test_static_catalog_ids_are_unique() {
        let mut ids: Vec<String> = StaticCatalog
            .destinations_for(&params())
            .into_iter()
            .map(|d| d.id)
            .collect();
        let original_len = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), original_len, "Catalog ids are not unique");
    }

    #[test]
    fn test_static_catalog_is_deterministic() {
        let first = StaticCatalog.destinations_for(&params());
        let second = StaticCatalog.destinations_for(&params());
        assert_eq!(first, second);
    }

    #[test]
    fn test_static_catalog_ratings_in_range() {
        for dest in StaticCatalog.destinations_for(&params()) {
            assert!(
                (0.0..=5.0).contains(&dest.rating),
                "{} has rating {}",
                dest.name,
                dest.rating
            );
        }
    }

    #[test]
    fn test_temple_is_free() {
        let catalog = StaticCatalog.destinations_for(&params());
        let temple = catalog.iter().find(|d| d.id == "1").unwrap();
        assert_eq!(temple.name, "Vadakkunnathan Temple");
        assert_eq!(temple.estimated_cost, 0);
    }
}
