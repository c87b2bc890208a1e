//! Error types for trip planning operations

use thiserror::Error;

/// Errors raised when trip input fails validation
///
/// These are all input-validation errors. The UI reports them inline and
/// leaves the current state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TripError {
    /// A required text field was empty
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Day count outside the allowed range
    #[error("Trip length must be between 1 and 14 days, got {0}")]
    DaysOutOfRange(u8),

    /// Budget under the minimum
    #[error("Budget must be at least ₹1000, got ₹{0}")]
    BudgetBelowMinimum(u64),

    /// Budget not on the 500 step grid
    #[error("Budget must be a multiple of ₹500, got ₹{0}")]
    BudgetOffStep(u64),

    /// Expense amount that is zero, negative or not a number
    #[error("Invalid expense amount: '{0}'")]
    InvalidExpense(String),

    /// Itinerary toggle for an id that is not in the current catalog
    #[error("Unknown destination: '{0}'")]
    UnknownDestination(String),

    /// An operation that needs a plan was called before one was created
    #[error("No trip plan has been created yet")]
    NoActivePlan,
}
