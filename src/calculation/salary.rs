//! Salary aggregation over the leave period.
//!
//! Validates the declared monthly figures and sums them. Any day-fraction
//! weighting a city formula requires happens in the allowance calculator,
//! not here.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{DeclaredSalaries, LeaveDetail, SalarySummary};

/// Aggregates the declared salary figures for a computed leave period.
///
/// The first and last figures cover the calendar months containing the leave
/// start and end dates; the other-month figure is the flat monthly rate for
/// fully-contained months in between and is required whenever the period
/// spans three or more calendar months. When the period is shorter the
/// figure may be omitted and counts as zero.
///
/// # Errors
///
/// Returns [`EngineError::InvalidSalary`] if any figure is negative, or if
/// the other-month figure is absent while the period requires it.
pub fn aggregate_salary(
    leave: &LeaveDetail,
    salaries: &DeclaredSalaries,
) -> EngineResult<SalarySummary> {
    check_non_negative("firstMonthSalary", salaries.first_month)?;
    check_non_negative("lastMonthSalary", salaries.last_month)?;
    if let Some(other) = salaries.other_month {
        check_non_negative("otherMonthSalary", other)?;
    }

    let months = leave.months_spanned();
    let other_month_salary = match salaries.other_month {
        Some(value) => value,
        None if months >= 3 => {
            return Err(EngineError::InvalidSalary {
                field: "otherMonthSalary".to_string(),
                message: format!(
                    "required when the leave period spans {} calendar months",
                    months
                ),
            });
        }
        None => Decimal::ZERO,
    };

    let total_salary = salaries.first_month + salaries.last_month + other_month_salary;

    Ok(SalarySummary {
        first_month_salary: salaries.first_month,
        last_month_salary: salaries.last_month,
        other_month_salary,
        total_salary,
    })
}

fn check_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::InvalidSalary {
            field: field.to_string(),
            message: format!("must not be negative (got {})", value),
        });
    }
    Ok(())
}
