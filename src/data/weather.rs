//! Weather readings for the trip's origin and destination
//!
//! Weather is provided through the [`WeatherSource`] trait. The built-in
//! [`StaticWeather`] returns fixed readings; a live provider would implement
//! the same trait.

use serde::{Deserialize, Serialize};

/// Types of weather conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherCondition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rainy,
}

impl WeatherCondition {
    pub fn label(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "Sunny",
            WeatherCondition::PartlyCloudy => "Partly Cloudy",
            WeatherCondition::Cloudy => "Cloudy",
            WeatherCondition::Rainy => "Rainy",
        }
    }

    /// Icon for the condition; anything not sunny or rainy shows a cloud
    pub fn icon(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "\u{2600}",  // ☀
            WeatherCondition::Rainy => "\u{1F327}", // 🌧
            _ => "\u{2601}",                        // ☁
        }
    }
}

/// Current conditions at one location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Location name as entered by the user
    pub location: String,
    /// Temperature in Celsius
    pub temperature: i32,
    pub condition: WeatherCondition,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Wind speed in km/h
    pub wind_speed: u32,
}

/// Provides current weather for a named location
pub trait WeatherSource {
    fn current(&self, location: &str) -> WeatherReport;

    /// Weather at the place the traveller starts from
    fn origin(&self, location: &str) -> WeatherReport {
        self.current(location)
    }

    /// Weather at the trip destination
    fn destination(&self, location: &str) -> WeatherReport {
        self.current(location)
    }
}

/// Fixed readings: partly cloudy at the origin, sunny at the destination
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticWeather;

impl WeatherSource for StaticWeather {
    fn current(&self, location: &str) -> WeatherReport {
        self.origin(location)
    }

    fn origin(&self, location: &str) -> WeatherReport {
        WeatherReport {
            location: location.to_string(),
            temperature: 28,
            condition: WeatherCondition::PartlyCloudy,
            humidity: 65,
            wind_speed: 12,
        }
    }

    fn destination(&self, location: &str) -> WeatherReport {
        WeatherReport {
            location: location.to_string(),
            temperature: 32,
            condition: WeatherCondition::Sunny,
            humidity: 58,
            wind_speed: 8,
        }
    }
}

/// Short advisory shown under the weather cards
pub fn advisory(destination: &WeatherReport) -> &'static str {
    match destination.condition {
        WeatherCondition::Rainy => "Showers expected. Pack an umbrella and plan indoor stops.",
        WeatherCondition::Sunny if destination.temperature >= 30 => {
            "Perfect weather for outdoor activities. Don't forget sunscreen!"
        }
        _ => "Pleasant conditions for sightseeing.",
    }
}
