//! Allowance and compensation computation.
//!
//! Dispatches on the city's [`AllowanceFormula`] variant, keeping every
//! formula enumerable and the calculator's control flow city-independent.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::EngineResult;
use crate::models::{AllowanceDetail, LeaveDetail, SalarySummary};
use crate::policy::{AllowanceFormula, CompensationFallback, Policy};

/// Computes the government allowance and employer compensation.
///
/// The qualifying monthly base is taken from the declared figures: the flat
/// other-month rate when present and positive, otherwise the average of the
/// first and last month figures. Each formula prorates the base over the
/// total leave days and rounds to currency precision (2 dp, midpoint away
/// from zero).
///
/// A formula of [`AllowanceFormula::Unavailable`] yields `allowance: None`,
/// a designed "cannot compute" outcome, never coerced to zero. Compensation
/// is then driven by the policy's [`CompensationFallback`]; otherwise it is
/// `max(0, total_salary - allowance)`.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidPolicy`] for a malformed
/// policy (possible for fixture policies built outside the registry), such
/// as a zero formula divisor.
pub fn calculate_allowance(
    leave: &LeaveDetail,
    salaries: &SalarySummary,
    policy: &Policy,
) -> EngineResult<AllowanceDetail> {
    policy.validate()?;

    let days = Decimal::from(leave.total_leave_days);

    let allowance = match &policy.allowance_formula {
        AllowanceFormula::AverageBased { daily_divisor } => {
            let base = monthly_base(salaries);
            Some(round_currency(base / Decimal::from(*daily_divisor) * days))
        }
        AllowanceFormula::CappedAverage {
            daily_divisor,
            monthly_floor,
            monthly_cap,
        } => {
            let base = monthly_base(salaries).clamp(*monthly_floor, *monthly_cap);
            Some(round_currency(base / Decimal::from(*daily_divisor) * days))
        }
        AllowanceFormula::Unavailable => None,
    };

    let compensation = match allowance {
        Some(amount) => {
            let gap = salaries.total_salary - amount;
            Some(round_currency(gap.max(Decimal::ZERO)))
        }
        None => match policy.compensation_fallback {
            CompensationFallback::None => None,
            CompensationFallback::FullSalary => Some(salaries.total_salary),
        },
    };

    Ok(AllowanceDetail {
        first_month_salary: salaries.first_month_salary,
        last_month_salary: salaries.last_month_salary,
        other_month_salary: salaries.other_month_salary,
        total_salary: salaries.total_salary,
        allowance,
        compensation,
    })
}

/// The qualifying monthly base salary used by the prorating formulas.
fn monthly_base(salaries: &SalarySummary) -> Decimal {
    if salaries.other_month_salary > Decimal::ZERO {
        salaries.other_month_salary
    } else {
        (salaries.first_month_salary + salaries.last_month_salary) / Decimal::TWO
    }
}

fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
