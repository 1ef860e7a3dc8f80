//! Leave period computation.
//!
//! Turns a start date, a city policy, and the medical flags into an end date
//! and a per-category day breakdown, using plain calendar arithmetic.

use chrono::{Duration, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::{BirthFlags, LeaveDetail};
use crate::policy::Policy;

/// Computes the leave period for a start date under a city policy.
///
/// For a live birth the entitlement is the statutory base plus whichever
/// bonuses the flags activate: the dystocia bonus, the per-extra-infant
/// bonus for each infant beyond the first, and the extended leave the
/// employee claims. When the abortion flag is set, the policy's abortion
/// day count replaces that entire stack; abortion leave is never combined
/// with any live-birth category.
///
/// The end date is `start + total - 1` calendar days, crossing month and
/// leap-year boundaries as the calendar dictates. A zero-day entitlement
/// yields `end == start - 1` rather than an error, so the range stays
/// well-formed and the caller can detect the zero duration from the count.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPolicy`] if the policy carries a negative
/// day count (possible for fixture policies built outside the registry), or
/// [`EngineError::Calculation`] if the end date would leave the supported
/// calendar range.
pub fn compute_leave_period(
    start_date: NaiveDate,
    policy: &Policy,
    flags: &BirthFlags,
) -> EngineResult<LeaveDetail> {
    policy.validate()?;

    let (statutory, abortion, dystocia, more_infant, extended) = if flags.is_abortion {
        (0, policy.abortion_leave_days, 0, 0, 0)
    } else {
        let extra_infants = i64::from(flags.multiple_infant_count.saturating_sub(1));
        (
            policy.statutory_leave_days,
            0,
            if flags.is_dystocia {
                policy.dystocia_bonus_days
            } else {
                0
            },
            policy.per_extra_infant_days * extra_infants,
            if flags.claims_extended_leave {
                policy.extended_leave_days
            } else {
                0
            },
        )
    };

    let total = statutory + abortion + dystocia + more_infant + extended;

    let end_date = start_date
        .checked_add_signed(Duration::days(total - 1))
        .ok_or_else(|| EngineError::Calculation {
            message: format!(
                "leave end date out of range for start {} and {} days",
                start_date, total
            ),
        })?;

    Ok(LeaveDetail {
        leave_start_date: start_date,
        leave_end_date: end_date,
        statutory_leave_days: statutory,
        abortion_leave_days: abortion,
        dystocia_leave_days: dystocia,
        more_infant_leave_days: more_infant,
        other_extended_leave_days: extended,
        total_leave_days: total,
    })
}
