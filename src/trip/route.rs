//! Route direction label derived from destination coordinates

use crate::data::Destination;

/// General heading of a route, for the "Optimized route" label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDirection {
    SouthToNorth,
    NorthToSouth,
    EastToWest,
    WestToEast,
}

impl RouteDirection {
    pub fn label(&self) -> &'static str {
        match self {
            RouteDirection::SouthToNorth => "South to North",
            RouteDirection::NorthToSouth => "North to South",
            RouteDirection::EastToWest => "East to West",
            RouteDirection::WestToEast => "West to East",
        }
    }
}

/// Heading from the first stop to the last one.
///
/// The axis with the larger displacement wins; ties go to north/south.
/// Returns `None` for fewer than two stops.
pub fn route_direction(stops: &[Destination]) -> Option<RouteDirection> {
    if stops.len() < 2 {
        return None;
    }
    let first = stops.first()?.coordinates;
    let last = stops.last()?.coordinates;
    let d_lat = last.lat - first.lat;
    let d_lng = last.lng - first.lng;

    let direction = if d_lat.abs() >= d_lng.abs() {
        if d_lat >= 0.0 {
            RouteDirection::SouthToNorth
        } else {
            RouteDirection::NorthToSouth
        }
    } else if d_lng >= 0.0 {
        RouteDirection::WestToEast
    } else {
        RouteDirection::EastToWest
    };
    Some(direction)
}
