//! TripGuide library
//!
//! Trip planning state, static catalogs, settings and the terminal UI. The
//! binary in `main.rs` only wires these to a real terminal; everything else
//! is exposed here for the integration tests.

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod filter;
pub mod logging;
pub mod trip;
pub mod ui;
