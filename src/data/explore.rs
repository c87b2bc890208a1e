//! Static destination data for the Explore screen

use serde::Serialize;

/// Destination themes used by the explore filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExploreCategory {
    Beach,
    HillStation,
    Heritage,
    Adventure,
    Spiritual,
}

impl ExploreCategory {
    pub fn all() -> &'static [ExploreCategory] {
        &[
            ExploreCategory::Beach,
            ExploreCategory::HillStation,
            ExploreCategory::Heritage,
            ExploreCategory::Adventure,
            ExploreCategory::Spiritual,
        ]
    }

    /// Plural label used by the category selector
    pub fn label(&self) -> &'static str {
        match self {
            ExploreCategory::Beach => "Beaches",
            ExploreCategory::HillStation => "Hill Stations",
            ExploreCategory::Heritage => "Heritage",
            ExploreCategory::Adventure => "Adventure",
            ExploreCategory::Spiritual => "Spiritual",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<ExploreCategory> {
        match s.to_lowercase().trim() {
            "beach" | "beaches" => Some(ExploreCategory::Beach),
            "hill-station" | "hill" | "hills" => Some(ExploreCategory::HillStation),
            "heritage" => Some(ExploreCategory::Heritage),
            "adventure" => Some(ExploreCategory::Adventure),
            "spiritual" => Some(ExploreCategory::Spiritual),
            _ => None,
        }
    }
}

/// A destination shown on the Explore screen
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExploreDestination {
    pub id: &'static str,
    pub name: &'static str,
    /// Indian state, used by the region filter
    pub state: &'static str,
    pub category: ExploreCategory,
    pub rating: f32,
    pub reviews: u32,
    pub description: &'static str,
    /// Best months to visit
    pub best_time: &'static str,
    pub highlights: &'static [&'static str],
    pub trending: bool,
    pub featured: bool,
}

/// States offered by the region selector, in display order
pub static STATES: [&str; 5] = [
    "Kerala",
    "Karnataka",
    "Rajasthan",
    "Uttarakhand",
    "Himachal Pradesh",
];

pub static EXPLORE_DESTINATIONS: [ExploreDestination; 6] = [
    ExploreDestination {
        id: "1",
        name: "Munnar",
        state: "Kerala",
        category: ExploreCategory::HillStation,
        rating: 4.7,
        reviews: 2847,
        description: "Breathtaking tea plantations and misty mountains",
        best_time: "Oct - Mar",
        highlights: &["Tea Gardens", "Eravikulam National Park", "Mattupetty Dam"],
        trending: true,
        featured: true,
    },
    ExploreDestination {
        id: "2",
        name: "Hampi",
        state: "Karnataka",
        category: ExploreCategory::Heritage,
        rating: 4.6,
        reviews: 1923,
        description: "Ancient ruins and UNESCO World Heritage Site",
        best_time: "Nov - Feb",
        highlights: &["Virupaksha Temple", "Stone Chariot", "Hippie Island"],
        trending: false,
        featured: true,
    },
    ExploreDestination {
        id: "3",
        name: "Rishikesh",
        state: "Uttarakhand",
        category: ExploreCategory::Adventure,
        rating: 4.5,
        reviews: 3156,
        description: "Yoga capital and adventure sports hub",
        best_time: "Mar - Jun, Sep - Nov",
        highlights: &["River Rafting", "Lakshman Jhula", "Beatles Ashram"],
        trending: true,
        featured: false,
    },
    ExploreDestination {
        id: "4",
        name: "Udaipur",
        state: "Rajasthan",
        category: ExploreCategory::Heritage,
        rating: 4.8,
        reviews: 4521,
        description: "City of Lakes with royal palaces",
        best_time: "Oct - Mar",
        highlights: &["City Palace", "Lake Pichola", "Jag Mandir"],
        trending: false,
        featured: true,
    },
    ExploreDestination {
        id: "5",
        name: "Gokarna",
        state: "Karnataka",
        category: ExploreCategory::Beach,
        rating: 4.4,
        reviews: 1687,
        description: "Pristine beaches and spiritual vibes",
        best_time: "Oct - Mar",
        highlights: &["Om Beach", "Kudle Beach", "Mahabaleshwar Temple"],
        trending: true,
        featured: false,
    },
    ExploreDestination {
        id: "6",
        name: "Manali",
        state: "Himachal Pradesh",
        category: ExploreCategory::HillStation,
        rating: 4.3,
        reviews: 2934,
        description: "Snow-capped peaks and adventure activities",
        best_time: "May - Jun, Oct - Feb",
        highlights: &["Rohtang Pass", "Solang Valley", "Old Manali"],
        trending: false,
        featured: false,
    },
];

pub fn all_explore_destinations() -> &'static [ExploreDestination] {
    &EXPLORE_DESTINATIONS
}

/// Featured destinations, in catalog order
pub fn featured() -> impl Iterator<Item = &'static ExploreDestination> {
    EXPLORE_DESTINATIONS.iter().filter(|d| d.featured)
}

/// Trending destinations, in catalog order
pub fn trending() -> impl Iterator<Item = &'static ExploreDestination> {
    EXPLORE_DESTINATIONS.iter().filter(|d| d.trending)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explore_catalog_has_six_entries() {
        assert_eq!(all_explore_destinations().len(), 6);
    }

    #[test]
    fn test_featured_destinations() {
        let names: Vec<&str> = featured().map(|d| d.name).collect();
        assert_eq!(names, vec!["Munnar", "Hampi", "Udaipur"]);
    }

    #[test]
    fn test_trending_destinations() {
        let names: Vec<&str> = trending().map(|d| d.name).collect();
        assert_eq!(names, vec!["Munnar", "Rishikesh", "Gokarna"]);
    }

    #[test]
    fn test_every_destination_state_is_selectable() {
        for dest in all_explore_destinations() {
            assert!(
                STATES.contains(&dest.state),
                "{} has unlisted state {}",
                dest.name,
                dest.state
            );
        }
    }

    #[test]
    fn test_explore_category_from_str() {
        assert_eq!(
            ExploreCategory::from_str("hill-station"),
            Some(ExploreCategory::HillStation)
        );
        assert_eq!(ExploreCategory::from_str("Beach"), Some(ExploreCategory::Beach));
        assert_eq!(ExploreCategory::from_str("all"), None);
    }
}
