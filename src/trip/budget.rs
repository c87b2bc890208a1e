//! Budget tracking: total, expense ledger and derived status
//!
//! Every amount in a [`Budget`] is held in paise so that expenses like
//! ₹12.50 are recorded exactly. The plan total and the quick-add amounts are
//! whole rupees and are converted with [`rupees_to_paise`].

use serde::Serialize;

use super::TripError;

/// Usage percentage at which the budget turns from ok to warning
pub const WARNING_THRESHOLD: f64 = 50.0;
/// Usage percentage at which the budget turns critical
pub const CRITICAL_THRESHOLD: f64 = 80.0;

/// Amounts offered as one-key quick adds, in rupees
pub const QUICK_ADD_AMOUNTS: [u64; 3] = [50, 100, 200];

pub const PAISE_PER_RUPEE: u64 = 100;

/// Converts whole rupees to paise, saturating at `u64::MAX`
pub fn rupees_to_paise(rupees: u64) -> u64 {
    rupees.saturating_mul(PAISE_PER_RUPEE)
}

/// What an expense was spent on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    #[default]
    Food,
    Transport,
    Accommodation,
    Activities,
    Shopping,
    Other,
}

impl ExpenseCategory {
    pub fn all() -> &'static [ExpenseCategory] {
        &[
            ExpenseCategory::Food,
            ExpenseCategory::Transport,
            ExpenseCategory::Accommodation,
            ExpenseCategory::Activities,
            ExpenseCategory::Shopping,
            ExpenseCategory::Other,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "Food & Dining",
            ExpenseCategory::Transport => "Transportation",
            ExpenseCategory::Accommodation => "Accommodation",
            ExpenseCategory::Activities => "Activities",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Other => "Other",
        }
    }
}

/// One recorded expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Expense {
    pub category: ExpenseCategory,
    /// Amount in paise
    pub amount: u64,
}

/// Budget consumption level, used for display emphasis only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Ok,
    Warning,
    Critical,
}

impl Severity {
    /// Classifies a usage percentage: below 50 is ok, below 80 is a warning,
    /// anything else is critical.
    pub fn from_percentage(used: f64) -> Severity {
        if used < WARNING_THRESHOLD {
            Severity::Ok
        } else if used < CRITICAL_THRESHOLD {
            Severity::Warning
        } else {
            Severity::Critical
        }
    }
}

/// Derived view of a [`Budget`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetStatus {
    /// Total minus spent in paise; negative when overspent
    pub remaining: i64,
    /// Spent as a percentage of the total; 0 when the total is 0
    pub used_percentage: f64,
    pub severity: Severity,
    /// True when `remaining` is below zero
    pub exceeded: bool,
}

/// The trip budget and the expenses recorded against it
///
/// Expenses form a one-way ledger: entries are only ever appended. Sums
/// saturate instead of wrapping, so an enormous ledger still reads as
/// overspent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Budget {
    /// Total in paise
    total: u64,
    expenses: Vec<Expense>,
}

impl Budget {
    /// A budget of `total_rupees` with no expenses
    pub fn new(total_rupees: u64) -> Self {
        Self {
            total: rupees_to_paise(total_rupees),
            expenses: Vec::new(),
        }
    }

    /// Total in paise
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Running total of every recorded expense, in paise
    pub fn spent(&self) -> u64 {
        saturating_sum(self.expenses.iter().map(|e| e.amount))
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Total minus spent, in paise, clamped to the `i64` range
    pub fn remaining(&self) -> i64 {
        let remaining = i128::from(self.total) - i128::from(self.spent());
        i64::try_from(remaining).unwrap_or(if remaining < 0 { i64::MIN } else { i64::MAX })
    }

    pub fn used_percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.spent() as f64 / self.total as f64 * 100.0
    }

    /// Returns a new budget with the expense recorded.
    ///
    /// `amount` is in paise and must be strictly positive. There is no upper
    /// bound: spending past the total is a valid, flagged state.
    pub fn with_expense(&self, category: ExpenseCategory, amount: i64) -> Result<Budget, TripError> {
        if amount <= 0 {
            return Err(TripError::InvalidExpense(amount.to_string()));
        }
        let mut next = self.clone();
        next.expenses.push(Expense {
            category,
            amount: amount.unsigned_abs(),
        });
        Ok(next)
    }

    pub fn status(&self) -> BudgetStatus {
        let remaining = self.remaining();
        let used_percentage = self.used_percentage();
        BudgetStatus {
            remaining,
            used_percentage,
            severity: Severity::from_percentage(used_percentage),
            exceeded: remaining < 0,
        }
    }

    /// Spent paise per category, in category order, skipping empty ones
    pub fn spent_by_category(&self) -> Vec<(ExpenseCategory, u64)> {
        ExpenseCategory::all()
            .iter()
            .filter_map(|category| {
                let sum = saturating_sum(
                    self.expenses
                        .iter()
                        .filter(|e| e.category == *category)
                        .map(|e| e.amount),
                );
                (sum > 0).then_some((*category, sum))
            })
            .collect()
    }
}

fn saturating_sum(amounts: impl Iterator<Item = u64>) -> u64 {
    amounts.fold(0, u64::saturating_add)
}

/// Parses the rupee amount typed into the expense field into paise.
///
/// Accepts digits with an optional fractional part of at most two places
/// (`250`, `12.5`, `.75`). Empty, non-numeric, zero, negative and
/// unrepresentably large input are all rejected, which is what keeps the add
/// button disabled.
pub fn parse_expense_amount(input: &str) -> Result<i64, TripError> {
    let trimmed = input.trim();
    let invalid = || TripError::InvalidExpense(trimmed.to_string());
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    if (whole.is_empty() && fraction.is_empty())
        || fraction.len() > 2
        || !all_digits(whole)
        || !all_digits(fraction)
    {
        return Err(invalid());
    }

    let whole: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid())?
    };
    let fraction: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
        _ => fraction.parse().map_err(|_| invalid())?,
    };
    let paise = whole
        .checked_mul(PAISE_PER_RUPEE as i64)
        .and_then(|p| p.checked_add(fraction))
        .ok_or_else(invalid)?;
    if paise <= 0 {
        return Err(invalid());
    }
    Ok(paise)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records `rupees` of food spending
    fn spend(budget: &Budget, rupees: i64) -> Budget {
        budget
            .with_expense(ExpenseCategory::Food, rupees * 100)
            .expect("positive amount should be accepted")
    }

    #[test]
    fn test_add_expense_increases_spent_by_amount() {
        let budget = Budget::new(5000);
        let after = spend(&budget, 750);
        assert_eq!(after.spent(), budget.spent() + 75_000);
        assert_eq!(budget.spent(), 0, "source budget must not change");
    }

    #[test]
    fn test_non_positive_expense_rejected() {
        let budget = spend(&Budget::new(5000), 100);
        for amount in [0, -1, -500] {
            let result = budget.with_expense(ExpenseCategory::Other, amount);
            assert!(matches!(result, Err(TripError::InvalidExpense(_))));
        }
        assert_eq!(budget.spent(), 10_000);
    }

    #[test]
    fn test_severity_boundaries() {
        assert_eq!(Severity::from_percentage(49.999), Severity::Ok);
        assert_eq!(Severity::from_percentage(50.0), Severity::Warning);
        assert_eq!(Severity::from_percentage(79.999), Severity::Warning);
        assert_eq!(Severity::from_percentage(80.0), Severity::Critical);
        assert_eq!(Severity::from_percentage(0.0), Severity::Ok);
        assert_eq!(Severity::from_percentage(250.0), Severity::Critical);
    }

    #[test]
    fn test_exact_boundaries_through_budget() {
        let half = spend(&Budget::new(1000), 500);
        assert_eq!(half.status().severity, Severity::Warning);
        let eighty = spend(&Budget::new(1000), 800);
        assert_eq!(eighty.status().severity, Severity::Critical);
        let under = spend(&Budget::new(1000), 499);
        assert_eq!(under.status().severity, Severity::Ok);
    }

    #[test]
    fn test_budget_scenario_5000() {
        let budget = Budget::new(5000);

        let budget = spend(&budget, 200);
        let status = budget.status();
        assert_eq!(budget.spent(), 20_000);
        assert_eq!(status.remaining, 480_000);
        assert!((status.used_percentage - 4.0).abs() < 1e-9);
        assert_eq!(status.severity, Severity::Ok);
        assert!(!status.exceeded);

        let budget = spend(&budget, 2600);
        let status = budget.status();
        assert_eq!(budget.spent(), 280_000);
        assert_eq!(status.remaining, 220_000);
        assert!((status.used_percentage - 56.0).abs() < 1e-9);
        assert_eq!(status.severity, Severity::Warning);
        assert!(!status.exceeded);

        let budget = spend(&budget, 2500);
        let status = budget.status();
        assert_eq!(budget.spent(), 530_000);
        assert_eq!(status.remaining, -30_000);
        assert!((status.used_percentage - 106.0).abs() < 1e-9);
        assert_eq!(status.severity, Severity::Critical);
        assert!(status.exceeded);
    }

    #[test]
    fn test_zero_total_guards_percentage() {
        let budget = Budget::new(0);
        let status = budget.status();
        assert_eq!(status.used_percentage, 0.0);
        assert_eq!(status.severity, Severity::Ok);
        assert!(!status.exceeded);

        let overspent = spend(&budget, 10);
        let status = overspent.status();
        assert_eq!(status.used_percentage, 0.0);
        assert!(status.used_percentage.is_finite());
        assert!(status.exceeded);
    }

    #[test]
    fn test_parse_expense_amount() {
        assert_eq!(parse_expense_amount("250"), Ok(25_000));
        assert_eq!(parse_expense_amount(" 42 "), Ok(4_200));
        assert!(parse_expense_amount("").is_err());
        assert!(parse_expense_amount("0").is_err());
        assert!(parse_expense_amount("0.00").is_err());
        assert!(parse_expense_amount("-5").is_err());
        assert!(parse_expense_amount("-0.5").is_err());
        assert!(parse_expense_amount("abc").is_err());
        assert!(parse_expense_amount(".").is_err());
        assert!(parse_expense_amount("1.2.3").is_err());
        assert!(parse_expense_amount("1e3").is_err());
    }

    #[test]
    fn test_parse_fractional_amounts() {
        assert_eq!(parse_expense_amount("12.5"), Ok(1_250));
        assert_eq!(parse_expense_amount("12.05"), Ok(1_205));
        assert_eq!(parse_expense_amount("0.5"), Ok(50));
        assert_eq!(parse_expense_amount(".75"), Ok(75));
        assert_eq!(parse_expense_amount("12."), Ok(1_200));
        assert!(parse_expense_amount("12.345").is_err());
    }

    #[test]
    fn test_parse_rejects_unrepresentable_amounts() {
        assert!(parse_expense_amount("92233720368547758.08").is_err());
        assert!(parse_expense_amount("9223372036854775807").is_err());
        assert_eq!(
            parse_expense_amount("92233720368547758.07"),
            Ok(i64::MAX)
        );
    }

    #[test]
    fn test_huge_expenses_saturate_and_stay_exceeded() {
        let mut budget = Budget::new(5000);
        for _ in 0..3 {
            budget = budget
                .with_expense(ExpenseCategory::Other, i64::MAX)
                .unwrap();
            let status = budget.status();
            assert!(status.remaining < 0);
            assert!(status.exceeded);
            assert_eq!(status.severity, Severity::Critical);
        }
        assert_eq!(budget.spent(), u64::MAX);
        assert_eq!(budget.remaining(), i64::MIN);
        assert_eq!(
            budget.spent_by_category(),
            vec![(ExpenseCategory::Other, u64::MAX)]
        );
    }

    #[test]
    fn test_fractional_expense_recorded_exactly() {
        let budget = Budget::new(1000)
            .with_expense(ExpenseCategory::Food, parse_expense_amount("12.5").unwrap())
            .unwrap();
        assert_eq!(budget.spent(), 1_250);
        assert_eq!(budget.remaining(), 98_750);
        assert!((budget.used_percentage() - 1.25).abs() < 1e-9);
    }

    #[test]
    fn test_spent_by_category() {
        let budget = Budget::new(5000)
            .with_expense(ExpenseCategory::Food, 10_000)
            .and_then(|b| b.with_expense(ExpenseCategory::Shopping, 30_000))
            .and_then(|b| b.with_expense(ExpenseCategory::Food, 5_000))
            .unwrap();
        assert_eq!(
            budget.spent_by_category(),
            vec![(ExpenseCategory::Food, 15_000), (ExpenseCategory::Shopping, 30_000)]
        );
    }
}
