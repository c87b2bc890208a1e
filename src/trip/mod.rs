//! Trip planning state
//!
//! [`TripState`] holds the trip parameters, the destination catalog produced
//! for the current plan, the itinerary selection and the budget. Every
//! operation takes `&self` and returns the next state, so the UI keeps exactly
//! one value and replaces it after each user action.

pub mod budget;
pub mod error;
pub mod itinerary;
pub mod route;

pub use budget::{
    parse_expense_amount, rupees_to_paise, Budget, BudgetStatus, Expense, ExpenseCategory,
    Severity, PAISE_PER_RUPEE, QUICK_ADD_AMOUNTS,
};
pub use error::TripError;
pub use itinerary::Itinerary;
pub use route::{route_direction, RouteDirection};

use serde::{Deserialize, Serialize};

use crate::data::{CatalogSource, Destination, TransportMode};

/// Shortest trip the planner accepts
pub const MIN_DAYS: u8 = 1;
/// Longest trip the planner accepts
pub const MAX_DAYS: u8 = 14;
/// Smallest budget the planner accepts, in rupees
pub const MIN_BUDGET: u64 = 1000;
/// Budget granularity, in rupees
pub const BUDGET_STEP: u64 = 500;

/// What the traveller entered in the plan form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripParameters {
    pub current_location: String,
    pub destination: String,
    pub days: u8,
    pub budget: u64,
    pub transport_mode: TransportMode,
}

impl TripParameters {
    /// Checks every form constraint, returning the first violation.
    pub fn validate(&self) -> Result<(), TripError> {
        if self.current_location.trim().is_empty() {
            return Err(TripError::MissingField("Current location"));
        }
        if self.destination.trim().is_empty() {
            return Err(TripError::MissingField("Destination"));
        }
        if !(MIN_DAYS..=MAX_DAYS).contains(&self.days) {
            return Err(TripError::DaysOutOfRange(self.days));
        }
        if self.budget < MIN_BUDGET {
            return Err(TripError::BudgetBelowMinimum(self.budget));
        }
        if (self.budget - MIN_BUDGET) % BUDGET_STEP != 0 {
            return Err(TripError::BudgetOffStep(self.budget));
        }
        Ok(())
    }
}

/// Everything the planner knows about the current trip
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripState {
    params: Option<TripParameters>,
    catalog: Vec<Destination>,
    itinerary: Itinerary,
    budget: Budget,
}

impl TripState {
    /// State before any plan has been created
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a plan from validated parameters.
    ///
    /// The catalog is regenerated from `source`, the itinerary is cleared and
    /// the budget restarts at `params.budget` with no expenses. Invalid
    /// parameters leave the caller's state as it was.
    pub fn create_plan(
        &self,
        params: TripParameters,
        source: &dyn CatalogSource,
    ) -> Result<TripState, TripError> {
        params.validate()?;
        let catalog = source.destinations_for(&params);
        tracing::info!(
            from = %params.current_location,
            to = %params.destination,
            days = params.days,
            budget = params.budget,
            mode = params.transport_mode.label(),
            catalog_size = catalog.len(),
            "trip plan created"
        );
        Ok(TripState {
            budget: Budget::new(params.budget),
            params: Some(params),
            catalog,
            itinerary: Itinerary::new(),
        })
    }

    /// Adds or removes a catalog destination from the itinerary.
    pub fn toggle_destination(&self, id: &str) -> Result<TripState, TripError> {
        if self.params.is_none() {
            return Err(TripError::NoActivePlan);
        }
        let destination = self
            .catalog
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| TripError::UnknownDestination(id.to_string()))?;
        let itinerary = self.itinerary.toggled(destination);
        tracing::debug!(
            id,
            selected = itinerary.contains(id),
            stops = itinerary.len(),
            "itinerary toggled"
        );
        Ok(TripState {
            itinerary,
            ..self.clone()
        })
    }

    /// Records an expense of `amount` paise against the current plan's budget.
    pub fn add_expense(&self, category: ExpenseCategory, amount: i64) -> Result<TripState, TripError> {
        if self.params.is_none() {
            return Err(TripError::NoActivePlan);
        }
        let budget = self.budget.with_expense(category, amount)?;
        let status = budget.status();
        tracing::debug!(
            category = category.label(),
            amount,
            spent = budget.spent(),
            remaining = status.remaining,
            "expense added"
        );
        if status.exceeded && !self.budget.status().exceeded {
            tracing::warn!(remaining = status.remaining, "budget exceeded");
        }
        Ok(TripState {
            budget,
            ..self.clone()
        })
    }

    pub fn params(&self) -> Option<&TripParameters> {
        self.params.as_ref()
    }

    pub fn has_plan(&self) -> bool {
        self.params.is_some()
    }

    pub fn catalog(&self) -> &[Destination] {
        &self.catalog
    }

    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    pub fn itinerary_cost(&self) -> u64 {
        self.itinerary.total_cost()
    }

    pub fn budget_status(&self) -> BudgetStatus {
        self.budget.status()
    }

    /// Route heading over the itinerary, or over the whole catalog while
    /// fewer than two stops are selected
    pub fn route_direction(&self) -> Option<RouteDirection> {
        if self.itinerary.len() >= 2 {
            route_direction(self.itinerary.stops())
        } else {
            route_direction(&self.catalog)
        }
    }
}
