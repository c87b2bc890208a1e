//! Custom widgets

pub mod usage_bar;

pub use usage_bar::UsageBar;
