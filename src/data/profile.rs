//! User profile, badges and recent activity

use chrono::NaiveDate;
use serde::Serialize;

/// An achievement shown on the profile overview
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Badge {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

/// Kind of entry in the recent activity feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Trip,
    Review,
    Save,
    Share,
}

impl ActivityKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ActivityKind::Trip => "\u{1F5FA}",   // 🗺
            ActivityKind::Review => "\u{2B50}",  // ⭐
            ActivityKind::Save => "\u{1F516}",   // 🔖
            ActivityKind::Share => "\u{1F4F7}",  // 📷
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RecentActivity {
    pub action: &'static str,
    pub date: NaiveDate,
    pub kind: ActivityKind,
}

/// The signed-in traveller
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub name: &'static str,
    pub email: &'static str,
    pub join_date: NaiveDate,
    pub location: &'static str,
    pub trips_completed: u32,
    pub places_visited: u32,
    /// Total distance travelled in km
    pub total_distance: u64,
    pub average_rating: f32,
    pub favorite_destination: &'static str,
    pub travel_style: &'static str,
    pub badges: &'static [Badge],
    pub recent_activity: Vec<RecentActivity>,
}

static BADGES: [Badge; 4] = [
    Badge {
        name: "Explorer",
        icon: "\u{1F5FA}",
        description: "Visited 10+ destinations",
    },
    Badge {
        name: "Budget Master",
        icon: "\u{1F4B0}",
        description: "Stayed under budget 5 times",
    },
    Badge {
        name: "Culture Enthusiast",
        icon: "\u{1F3DB}",
        description: "Visited 15+ heritage sites",
    },
    Badge {
        name: "Mountain Lover",
        icon: "\u{26F0}",
        description: "Completed 3+ hill station trips",
    },
];

/// Entries of the profile settings tab, as (title, description)
pub static SETTINGS_ITEMS: [(&str, &str); 4] = [
    ("Notifications", "Manage trip and weather alerts"),
    ("Payment Methods", "Cards and UPI saved for bookings"),
    ("Privacy & Security", "Password, sessions and data sharing"),
    ("Sign Out", "Log out of this device"),
];

pub fn user_profile() -> UserProfile {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN);
    UserProfile {
        name: "Rahul Kumar",
        email: "rahul.kumar@email.com",
        join_date: date(2024, 6, 15),
        location: "Bangalore, Karnataka",
        trips_completed: 12,
        places_visited: 47,
        total_distance: 15420,
        average_rating: 4.8,
        favorite_destination: "Munnar",
        travel_style: "Solo Adventurer",
        badges: &BADGES,
        recent_activity: vec![
            RecentActivity {
                action: "Completed trip to Kochi",
                date: date(2024, 12, 23),
                kind: ActivityKind::Trip,
            },
            RecentActivity {
                action: "Rated Hotel Elite International",
                date: date(2024, 12, 22),
                kind: ActivityKind::Review,
            },
            RecentActivity {
                action: "Saved \"Budget Travel in Rajasthan\" guide",
                date: date(2024, 12, 20),
                kind: ActivityKind::Save,
            },
            RecentActivity {
                action: "Shared photos from Alleppey",
                date: date(2024, 11, 8),
                kind: ActivityKind::Share,
            },
        ],
    }
}
