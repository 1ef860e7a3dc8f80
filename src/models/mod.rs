//! Core data models for the maternity calculation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod allowance_detail;
mod calculation_result;
mod history;
mod input;
mod leave_detail;

pub use allowance_detail::{AllowanceDetail, CalculateComments, SalarySummary};
pub use calculation_result::{
    AllowanceCalculationResult, AllowanceDetailView, CalculateCommentsView, LeaveDetailView,
};
pub use history::{CalculationHistoryRecord, SaveCalculationRequest};
pub use input::{BirthFlags, CalculationInput, DeclaredSalaries};
pub use leave_detail::LeaveDetail;
