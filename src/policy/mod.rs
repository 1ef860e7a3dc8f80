//! Per-city maternity leave policy data.
//!
//! This module contains the strongly-typed [`Policy`] record, the tagged
//! allowance formula variants, and the [`PolicyRegistry`] that holds the
//! immutable, process-wide table of city policies.

mod registry;
mod types;

pub use registry::PolicyRegistry;
pub use types::{AllowanceFormula, CompensationFallback, Policy};
