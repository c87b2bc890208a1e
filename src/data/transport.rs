//! Transport information lookup keyed by transport mode

use super::TransportMode;

/// Departure hint and nearest station for a transport mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportInfo {
    pub info: &'static str,
    pub station: &'static str,
}

pub fn transport_info(mode: TransportMode) -> TransportInfo {
    match mode {
        TransportMode::Train => TransportInfo {
            info: "Next train: Express 12345 at 14:30",
            station: "Thrissur Railway Station (2.5 km)",
        },
        TransportMode::Bus => TransportInfo {
            info: "Next bus: Kerala RTC at 15:15",
            station: "KSRTC Bus Stand (1.8 km)",
        },
        TransportMode::Car => TransportInfo {
            info: "Recommended parking near attractions",
            station: "Multiple parking spots available",
        },
    }
}
