//! Calculation logic for the maternity engine.
//!
//! This module contains the pipeline stages: leave period computation,
//! salary aggregation, allowance and compensation computation, the
//! human-readable explanation generator, and the pipeline that chains them.

mod allowance;
mod explanation;
mod leave_period;
mod pipeline;
mod salary;

pub use allowance::calculate_allowance;
pub use explanation::build_comments;
pub use leave_period::compute_leave_period;
pub use pipeline::{CalculationOutcome, run_calculation};
pub use salary::aggregate_salary;
