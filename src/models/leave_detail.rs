//! The computed leave period and its per-category day breakdown.

use chrono::{Datelike, NaiveDate};

/// The result of the leave period calculation.
///
/// Invariants, maintained by the calculator:
/// - `total_leave_days` equals the sum of the five category counts.
/// - `leave_end_date` equals `leave_start_date + total_leave_days - 1`
///   calendar days; a zero-day entitlement yields `start - 1` so the range
///   is still well-formed and the caller can detect the zero duration from
///   the day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaveDetail {
    /// The first day of leave.
    pub leave_start_date: NaiveDate,
    /// The last day of leave, inclusive.
    pub leave_end_date: NaiveDate,
    /// Base statutory maternity leave days.
    pub statutory_leave_days: i64,
    /// Abortion leave days (exclusive with all other categories).
    pub abortion_leave_days: i64,
    /// Dystocia bonus days.
    pub dystocia_leave_days: i64,
    /// Multiple-infant bonus days.
    pub more_infant_leave_days: i64,
    /// Extended leave days claimed beyond the statutory minimum.
    pub other_extended_leave_days: i64,
    /// Total leave days across all categories.
    pub total_leave_days: i64,
}

impl LeaveDetail {
    /// Number of distinct calendar months the leave period touches.
    ///
    /// A zero-day entitlement spans no months.
    pub fn months_spanned(&self) -> u32 {
        if self.total_leave_days == 0 {
            return 0;
        }
        let start = self.leave_start_date.year() * 12 + self.leave_start_date.month() as i32;
        let end = self.leave_end_date.year() * 12 + self.leave_end_date.month() as i32;
        (end - start + 1) as u32
    }
}
