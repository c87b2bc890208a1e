//! Static accommodation listings

use serde::Serialize;

/// Kinds of stay offered in the accommodation list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccommodationType {
    Hotel,
    Homestay,
    Resort,
}

impl AccommodationType {
    pub fn all() -> &'static [AccommodationType] {
        &[
            AccommodationType::Hotel,
            AccommodationType::Homestay,
            AccommodationType::Resort,
        ]
    }

    /// Singular label shown on a listing badge
    pub fn label(&self) -> &'static str {
        match self {
            AccommodationType::Hotel => "hotel",
            AccommodationType::Homestay => "homestay",
            AccommodationType::Resort => "resort",
        }
    }

    /// Plural label shown on the filter tabs
    pub fn tab_label(&self) -> &'static str {
        match self {
            AccommodationType::Hotel => "Hotels",
            AccommodationType::Homestay => "Homestays",
            AccommodationType::Resort => "Resorts",
        }
    }
}

/// A place to stay
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Accommodation {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: AccommodationType,
    pub rating: f32,
    /// Price per night in rupees
    pub price: u64,
    pub amenities: &'static [&'static str],
    pub distance: &'static str,
    pub description: &'static str,
}

pub static ACCOMMODATIONS: [Accommodation; 3] = [
    Accommodation {
        id: "1",
        name: "Heritage Homestay Thrissur",
        kind: AccommodationType::Homestay,
        rating: 4.8,
        price: 1200,
        amenities: &["Wifi", "Parking", "Breakfast"],
        distance: "2.5 km from city center",
        description: "Traditional Kerala home with authentic local experience",
    },
    Accommodation {
        id: "2",
        name: "Crowne Plaza Kochi",
        kind: AccommodationType::Hotel,
        rating: 4.5,
        price: 3500,
        amenities: &["Wifi", "Pool", "Spa", "Restaurant"],
        distance: "1.2 km from city center",
        description: "Luxury hotel with modern amenities and city views",
    },
    Accommodation {
        id: "3",
        name: "Backwater Resort Kumarakom",
        kind: AccommodationType::Resort,
        rating: 4.6,
        price: 4200,
        amenities: &["Wifi", "Pool", "Boat rides", "Ayurveda"],
        distance: "45 km from Thrissur",
        description: "Serene resort surrounded by Kerala backwaters",
    },
];

pub fn all_accommodations() -> &'static [Accommodation] {
    &ACCOMMODATIONS
}

/// Icon for an amenity name, with a generic fallback
pub fn amenity_icon(amenity: &str) -> &'static str {
    match amenity.to_lowercase().as_str() {
        "wifi" => "\u{1F4F6}",      // 📶
        "parking" => "\u{1F697}",   // 🚗
        "breakfast" => "\u{2615}",  // ☕
        _ => "\u{1F465}",           // 👥
    }
}
