//! The wire-shaped calculation result.
//!
//! This is the JSON contract consumed by the presentation layer and the
//! persistence collaborator. Field names are camelCase per that contract.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::allowance_detail::{AllowanceDetail, CalculateComments};
use super::leave_detail::LeaveDetail;

/// The monetary portion of the wire result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllowanceDetailView {
    /// Government-paid allowance; `null` when it could not be computed.
    pub allowance: Option<Decimal>,
    /// Employer top-up; `null` only when the allowance is `null` and the
    /// policy defines no fallback.
    pub compensation: Option<Decimal>,
    /// Salary for the month containing the leave start date.
    pub first_month_salary: Decimal,
    /// Salary for the month containing the leave end date.
    pub last_month_salary: Decimal,
    /// Salary for fully-contained months in between.
    pub other_month_salary: Decimal,
    /// Sum of the three salary components.
    pub total_salary: Option<Decimal>,
}

/// The leave period portion of the wire result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDetailView {
    /// First day of leave, formatted `YYYY-MM-DD`.
    pub leave_start_date: Option<String>,
    /// Last day of leave (inclusive), formatted `YYYY-MM-DD`.
    pub leave_end_date: Option<String>,
    /// Total leave days across all categories.
    pub current_leave_days: i64,
}

/// The audit trail portion of the wire result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateCommentsView {
    /// Ordered explanatory statements.
    pub description_list: Vec<String>,
}

/// The complete wire result for one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllowanceCalculationResult {
    /// Monetary outcome.
    pub allowance_detail: AllowanceDetailView,
    /// Leave period outcome.
    pub leave_detail: LeaveDetailView,
    /// Audit trail.
    pub calculate_comments: CalculateCommentsView,
}

impl AllowanceCalculationResult {
    /// Assembles the wire result from the pipeline's domain outputs.
    pub fn from_parts(
        leave: &LeaveDetail,
        allowance: &AllowanceDetail,
        comments: &CalculateComments,
    ) -> Self {
        Self {
            allowance_detail: AllowanceDetailView {
                allowance: allowance.allowance,
                compensation: allowance.compensation,
                first_month_salary: allowance.first_month_salary,
                last_month_salary: allowance.last_month_salary,
                other_month_salary: allowance.other_month_salary,
                total_salary: Some(allowance.total_salary),
            },
            leave_detail: LeaveDetailView {
                leave_start_date: Some(leave.leave_start_date.format("%Y-%m-%d").to_string()),
                leave_end_date: Some(leave.leave_end_date.format("%Y-%m-%d").to_string()),
                current_leave_days: leave.total_leave_days,
            },
            calculate_comments: CalculateCommentsView {
                description_list: comments.description_list.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_result() -> AllowanceCalculationResult {
        let leave = LeaveDetail {
            leave_start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            leave_end_date: NaiveDate::from_ymd_opt(2024, 6, 6).unwrap(),
            statutory_leave_days: 98,
            abortion_leave_days: 0,
            dystocia_leave_days: 0,
            more_infant_leave_days: 0,
            other_extended_leave_days: 0,
            total_leave_days: 98,
        };
        let allowance = AllowanceDetail {
            first_month_salary: dec("10000"),
            last_month_salary: dec("10000"),
            other_month_salary: dec("10000"),
            total_salary: dec("30000"),
            allowance: Some(dec("32666.67")),
            compensation: Some(dec("0")),
        };
        let comments = CalculateComments {
            description_list: vec!["Statutory maternity leave: 98 days".to_string()],
        };
        AllowanceCalculationResult::from_parts(&leave, &allowance, &comments)
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let json = serde_json::to_value(sample_result()).unwrap();
        assert!(json["allowanceDetail"]["totalSalary"].is_number());
        assert!(json["leaveDetail"]["currentLeaveDays"].is_number());
        assert!(json["calculateComments"]["descriptionList"].is_array());
    }

    #[test]
    fn test_dates_are_iso_formatted() {
        let result = sample_result();
        assert_eq!(
            result.leave_detail.leave_start_date.as_deref(),
            Some("2024-03-01")
        );
        assert_eq!(
            result.leave_detail.leave_end_date.as_deref(),
            Some("2024-06-06")
        );
    }

    #[test]
    fn test_null_allowance_serializes_as_null() {
        let mut result = sample_result();
        result.allowance_detail.allowance = None;
        result.allowance_detail.compensation = None;
        let json = serde_json::to_value(result).unwrap();
        assert!(json["allowanceDetail"]["allowance"].is_null());
        assert!(json["allowanceDetail"]["compensation"].is_null());
    }
}
