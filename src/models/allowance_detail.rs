//! Salary aggregation and allowance result models.

use rust_decimal::Decimal;

/// The apportioned salary components over the leave period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalarySummary {
    /// Salary contribution for the month containing the leave start date.
    pub first_month_salary: Decimal,
    /// Salary contribution for the month containing the leave end date.
    pub last_month_salary: Decimal,
    /// Salary contribution for fully-contained months in between.
    pub other_month_salary: Decimal,
    /// Exact sum of the three components.
    pub total_salary: Decimal,
}

/// The monetary outcome of a calculation.
///
/// `allowance` is `None` when the city's formula cannot be evaluated with
/// the data this engine holds; that is a designed "cannot compute" outcome,
/// distinct from a computed zero. When `allowance` is `Some`,
/// `compensation == max(0, total_salary - allowance)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllowanceDetail {
    /// Salary for the month containing the leave start date.
    pub first_month_salary: Decimal,
    /// Salary for the month containing the leave end date.
    pub last_month_salary: Decimal,
    /// Salary for fully-contained months in between.
    pub other_month_salary: Decimal,
    /// Sum of the three salary components.
    pub total_salary: Decimal,
    /// Government-paid allowance, or `None` if it cannot be computed.
    pub allowance: Option<Decimal>,
    /// Employer top-up covering the gap between allowance and salary.
    /// `None` only when `allowance` is `None` and the policy defines no
    /// fallback top-up.
    pub compensation: Option<Decimal>,
}

/// The ordered, human-readable audit trail for a calculation.
///
/// Entries follow computation order (leave breakdown, salary, allowance,
/// compensation) and are purely descriptive; nothing downstream consumes
/// them programmatically.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CalculateComments {
    /// One statement per notable fact, in computation order.
    pub description_list: Vec<String>,
}
