//! Ordered itinerary selection

use crate::data::Destination;

/// The places the traveller has chosen, in the order they were picked
///
/// Membership is unique by destination id. Removing a member leaves the
/// relative order of the rest untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Itinerary {
    stops: Vec<Destination>,
}

impl Itinerary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new itinerary with `destination` removed if present (by id),
    /// or appended to the end otherwise.
    pub fn toggled(&self, destination: &Destination) -> Itinerary {
        let mut stops = self.stops.clone();
        if let Some(pos) = stops.iter().position(|d| d.id == destination.id) {
            stops.remove(pos);
        } else {
            stops.push(destination.clone());
        }
        Itinerary { stops }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.stops.iter().any(|d| d.id == id)
    }

    /// 1-based position of a destination, as shown in the route summary
    pub fn position(&self, id: &str) -> Option<usize> {
        self.stops.iter().position(|d| d.id == id).map(|i| i + 1)
    }

    /// Sum of the estimated cost of every stop; 0 when empty
    pub fn total_cost(&self) -> u64 {
        self.stops.iter().map(|d| d.estimated_cost).sum()
    }

    pub fn stops(&self) -> &[Destination] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}
