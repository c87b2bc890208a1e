//! Command-line interface parsing for TripGuide
//!
//! Handles the flags that choose the starting screen and prefill the plan
//! form. When both `--from` and `--to` are given the plan is created as soon
//! as the app starts.

use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

use crate::app::Screen;
use crate::data::TransportMode;
use crate::trip::{BUDGET_STEP, MAX_DAYS, MIN_BUDGET, MIN_DAYS};

/// Error types for CLI argument parsing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("Invalid screen: '{0}'. Valid screens: plan, trips, explore, guides, profile")]
    InvalidScreen(String),

    #[error("Invalid transport mode: '{0}'. Valid modes: bus, train, car")]
    InvalidTransport(String),

    #[error("Invalid trip length: {0}. Days must be between 1 and 14")]
    InvalidDays(u8),

    #[error("Invalid budget: {0}. Budget must be at least 1000 in steps of 500")]
    InvalidBudget(u64),
}

/// TripGuide - plan trips, track budgets and browse destinations
#[derive(Parser, Debug)]
#[command(name = "tripguide")]
#[command(about = "Terminal travel planner: itineraries, budgets, destinations and guides")]
#[command(version)]
pub struct Cli {
    /// Screen to open first
    ///
    /// Valid screens: plan, trips, explore, guides, profile
    #[arg(long, value_name = "SCREEN")]
    pub screen: Option<String>,

    /// Prefill the current location
    #[arg(long, value_name = "LOCATION")]
    pub from: Option<String>,

    /// Prefill the destination
    ///
    /// Examples:
    ///   tripguide --from Kochi --to Thrissur            # Plan straight away
    ///   tripguide --from Kochi --to Thrissur --days 3   # Three day trip
    #[arg(long, value_name = "DESTINATION")]
    pub to: Option<String>,

    /// Trip length in days (1-14)
    #[arg(long, value_name = "N")]
    pub days: Option<u8>,

    /// Budget in rupees (at least 1000, in steps of 500)
    #[arg(long, value_name = "RUPEES")]
    pub budget: Option<u64>,

    /// Transport mode: bus, train or car
    #[arg(long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Use this settings file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StartupConfig {
    /// Screen to show first
    pub screen: Screen,
    pub from: Option<String>,
    pub to: Option<String>,
    pub days: Option<u8>,
    pub budget: Option<u64>,
    pub mode: Option<TransportMode>,
    /// Settings file override
    pub config_path: Option<PathBuf>,
}

impl StartupConfig {
    /// Validates parsed CLI arguments.
    ///
    /// Returns `Err(CliError)` for unknown screen or mode names and for days
    /// or budget values the plan form would not accept.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let screen = match &cli.screen {
            Some(name) => parse_screen_arg(name)?,
            None => Screen::default(),
        };
        let mode = cli.mode.as_deref().map(parse_transport_arg).transpose()?;

        if let Some(days) = cli.days {
            if !(MIN_DAYS..=MAX_DAYS).contains(&days) {
                return Err(CliError::InvalidDays(days));
            }
        }
        if let Some(budget) = cli.budget {
            if budget < MIN_BUDGET || (budget - MIN_BUDGET) % BUDGET_STEP != 0 {
                return Err(CliError::InvalidBudget(budget));
            }
        }

        Ok(StartupConfig {
            screen,
            from: non_blank(&cli.from),
            to: non_blank(&cli.to),
            days: cli.days,
            budget: cli.budget,
            mode,
            config_path: cli.config.clone(),
        })
    }

    /// True when the plan should be created at startup
    pub fn plans_on_start(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Parses a screen name into a [`Screen`].
pub fn parse_screen_arg(s: &str) -> Result<Screen, CliError> {
    Screen::from_str(s).ok_or_else(|| CliError::InvalidScreen(s.to_string()))
}

/// Parses a transport mode name into a [`TransportMode`].
pub fn parse_transport_arg(s: &str) -> Result<TransportMode, CliError> {
    TransportMode::from_str(s).ok_or_else(|| CliError::InvalidTransport(s.to_string()))
}
