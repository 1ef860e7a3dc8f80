//! Human-readable explanation of a calculation.
//!
//! Produces the ordered statements shown to the user and stored alongside a
//! calculation. Purely presentational: it reads the computed results and
//! never alters them, and the same inputs always yield byte-identical output.

use rust_decimal::Decimal;

use crate::models::{AllowanceDetail, BirthFlags, CalculateComments, LeaveDetail};
use crate::policy::Policy;

/// Builds the explanation statements for a completed calculation.
///
/// Order is fixed: leave category breakdown, total leave span, salary
/// components, allowance, compensation.
pub fn build_comments(
    flags: &BirthFlags,
    policy: &Policy,
    leave: &LeaveDetail,
    allowance: &AllowanceDetail,
) -> CalculateComments {
    let mut lines = Vec::new();

    if flags.is_abortion {
        lines.push(format!(
            "Abortion leave in {}: {} days, replacing statutory maternity leave",
            policy.city_name, leave.abortion_leave_days
        ));
    } else {
        lines.push(format!(
            "Statutory maternity leave in {}: {} days",
            policy.city_name, leave.statutory_leave_days
        ));
        if leave.dystocia_leave_days > 0 {
            lines.push(format!(
                "Dystocia bonus: {} additional days",
                leave.dystocia_leave_days
            ));
        }
        if leave.more_infant_leave_days > 0 {
            lines.push(format!(
                "Multiple-infant bonus: {} additional days ({} days per extra infant)",
                leave.more_infant_leave_days, policy.per_extra_infant_days
            ));
        }
        if leave.other_extended_leave_days > 0 {
            lines.push(format!(
                "Extended leave: {} additional days",
                leave.other_extended_leave_days
            ));
        }
    }

    lines.push(format!(
        "Total leave: {} days, from {} to {}",
        leave.total_leave_days,
        leave.leave_start_date.format("%Y-%m-%d"),
        leave.leave_end_date.format("%Y-%m-%d")
    ));

    lines.push(format!(
        "Declared salary: first month {}, last month {}, other months {}, total {}",
        money(allowance.first_month_salary),
        money(allowance.last_month_salary),
        money(allowance.other_month_salary),
        money(allowance.total_salary)
    ));

    match allowance.allowance {
        Some(amount) => {
            lines.push(format!("Maternity allowance: {}", money(amount)));
            match allowance.compensation {
                Some(compensation) if compensation > Decimal::ZERO => {
                    lines.push(format!(
                        "Employer compensation: {} (declared salary exceeds the allowance)",
                        money(compensation)
                    ));
                }
                _ => {
                    lines.push(
                        "Employer compensation: 0 (allowance covers the declared salary)"
                            .to_string(),
                    );
                }
            }
        }
        None => {
            lines.push(format!(
                "Maternity allowance could not be determined for {}: contribution history is not available to this calculation",
                policy.city_name
            ));
            match allowance.compensation {
                Some(compensation) => {
                    lines.push(format!(
                        "Employer compensation: {} (guaranteed full declared salary)",
                        money(compensation)
                    ));
                }
                None => {
                    lines.push(
                        "Employer compensation could not be determined without an allowance figure"
                            .to_string(),
                    );
                }
            }
        }
    }

    CalculateComments {
        description_list: lines,
    }
}

fn money(value: Decimal) -> String {
    value.normalize().to_string()
}
