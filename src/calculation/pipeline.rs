//! The end-to-end calculation pipeline.
//!
//! Chains policy lookup, leave period computation, salary aggregation,
//! allowance computation, and explanation generation. The whole pipeline is
//! a pure function of its input and the injected registry: no I/O, no clock,
//! no shared mutable state.

use crate::error::EngineResult;
use crate::models::{
    AllowanceCalculationResult, AllowanceDetail, CalculateComments, CalculationInput, LeaveDetail,
};
use crate::policy::PolicyRegistry;

use super::allowance::calculate_allowance;
use super::explanation::build_comments;
use super::leave_period::compute_leave_period;
use super::salary::aggregate_salary;

/// Everything a single calculation produces.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationOutcome {
    /// The computed leave period and day breakdown.
    pub leave_detail: LeaveDetail,
    /// The monetary outcome.
    pub allowance_detail: AllowanceDetail,
    /// The ordered audit trail.
    pub comments: CalculateComments,
}

impl CalculationOutcome {
    /// Converts the outcome into the camelCase wire result.
    pub fn into_result(self) -> AllowanceCalculationResult {
        AllowanceCalculationResult::from_parts(
            &self.leave_detail,
            &self.allowance_detail,
            &self.comments,
        )
    }
}

/// Runs the full calculation pipeline for one input.
///
/// Fails without partial results on an unknown city, malformed policy, or
/// invalid salary figures. The documented `None` allowance for cities whose
/// formula cannot be evaluated is a successful outcome, not an error.
pub fn run_calculation(
    registry: &PolicyRegistry,
    input: &CalculationInput,
) -> EngineResult<CalculationOutcome> {
    let policy = registry.lookup(&input.city)?;
    let leave_detail = compute_leave_period(input.leave_start_date, policy, &input.flags)?;
    let salary_summary = aggregate_salary(&leave_detail, &input.salaries)?;
    let allowance_detail = calculate_allowance(&leave_detail, &salary_summary, policy)?;
    let comments = build_comments(&input.flags, policy, &leave_detail, &allowance_detail);

    Ok(CalculationOutcome {
        leave_detail,
        allowance_detail,
        comments,
    })
}
