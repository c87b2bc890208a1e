//! Static travel guide articles

use chrono::NaiveDate;
use serde::Serialize;

/// Guide topics, as offered by the category tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuideCategory {
    SoloTravel,
    BudgetTravel,
    Adventure,
    Culture,
    Food,
}

impl GuideCategory {
    pub fn all() -> &'static [GuideCategory] {
        &[
            GuideCategory::SoloTravel,
            GuideCategory::BudgetTravel,
            GuideCategory::Adventure,
            GuideCategory::Culture,
            GuideCategory::Food,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            GuideCategory::SoloTravel => "Solo Travel",
            GuideCategory::BudgetTravel => "Budget Travel",
            GuideCategory::Adventure => "Adventure",
            GuideCategory::Culture => "Culture & Heritage",
            GuideCategory::Food => "Food & Cuisine",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<GuideCategory> {
        match s.to_lowercase().trim() {
            "solo-travel" | "solo" => Some(GuideCategory::SoloTravel),
            "budget-travel" | "budget" => Some(GuideCategory::BudgetTravel),
            "adventure" => Some(GuideCategory::Adventure),
            "culture" => Some(GuideCategory::Culture),
            "food" => Some(GuideCategory::Food),
            _ => None,
        }
    }
}

/// A published travel guide
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Guide {
    pub id: &'static str,
    pub title: &'static str,
    pub author: &'static str,
    pub category: GuideCategory,
    /// Reading time in minutes
    pub read_time: u32,
    pub views: u32,
    pub likes: u32,
    pub excerpt: &'static str,
    /// ISO date string, parsed with [`Guide::published`]
    pub published_date: &'static str,
    pub featured: bool,
}

impl Guide {
    /// Publication date, if the stored string parses
    pub fn published(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.published_date, "%Y-%m-%d").ok()
    }
}

pub static GUIDES: [Guide; 5] = [
    Guide {
        id: "1",
        title: "Complete Guide to Kerala Backwaters: A Solo Traveler's Paradise",
        author: "Priya Sharma",
        category: GuideCategory::SoloTravel,
        read_time: 8,
        views: 12500,
        likes: 847,
        excerpt: "Discover the serene beauty of Kerala's backwaters with insider tips on houseboats, local cuisine, and hidden gems that only locals know about.",
        published_date: "2025-01-05",
        featured: true,
    },
    Guide {
        id: "2",
        title: "Budget Travel in Rajasthan: Royal Experiences Under ₹10,000",
        author: "Arjun Patel",
        category: GuideCategory::BudgetTravel,
        read_time: 12,
        views: 18200,
        likes: 1203,
        excerpt: "Experience the grandeur of Rajasthan without breaking the bank. From palace stays to street food tours, here's how to travel like royalty on a budget.",
        published_date: "2025-01-03",
        featured: true,
    },
    Guide {
        id: "3",
        title: "Himalayan Trek Safety: Essential Tips for First-Time Trekkers",
        author: "Meera Singh",
        category: GuideCategory::Adventure,
        read_time: 15,
        views: 9800,
        likes: 654,
        excerpt: "Everything you need to know before embarking on your first Himalayan adventure. Safety protocols, gear recommendations, and acclimatization tips.",
        published_date: "2024-12-28",
        featured: false,
    },
    Guide {
        id: "4",
        title: "South Indian Temple Architecture: A Cultural Journey",
        author: "Dr. Lakshmi Nair",
        category: GuideCategory::Culture,
        read_time: 10,
        views: 7300,
        likes: 432,
        excerpt: "Explore the magnificent temple architecture of South India, from Dravidian masterpieces to intricate stone carvings that tell stories of ancient civilizations.",
        published_date: "2024-12-25",
        featured: false,
    },
    Guide {
        id: "5",
        title: "Goa Beyond Beaches: Hidden Cultural Gems",
        author: "Carlos D'Souza",
        category: GuideCategory::Culture,
        read_time: 6,
        views: 15600,
        likes: 923,
        excerpt: "Discover Goa's rich Portuguese heritage, spice plantations, and traditional villages that showcase the state's authentic cultural identity.",
        published_date: "2024-12-20",
        featured: false,
    },
];

pub fn all_guides() -> &'static [Guide] {
    &GUIDES
}
