//! Snapshot types exchanged with the persistence collaborator.
//!
//! The engine never calls the persistence service itself; the caller builds
//! a [`SaveCalculationRequest`] from the engine's output and invokes the
//! collaborator, which returns a [`CalculationHistoryRecord`]. The types
//! live here so both sides agree on the shape.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::calculation_result::AllowanceCalculationResult;

/// The payload the caller sends to the persistence service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveCalculationRequest {
    /// The city the calculation was run for.
    pub city_code: String,
    /// The leave start date, formatted `YYYY-MM-DD`.
    pub leave_start_date: String,
    /// Declared salary figures, echoed for later re-computation.
    pub first_month_salary: Decimal,
    /// Declared last-month salary figure.
    pub last_month_salary: Decimal,
    /// Declared other-month salary figure, when supplied.
    pub other_month_salary: Option<Decimal>,
    /// The full calculation result snapshot.
    pub result: AllowanceCalculationResult,
}

/// A persisted calculation, as returned by the persistence service.
///
/// The identifier and timestamp are assigned by the collaborator; the engine
/// never mutates records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationHistoryRecord {
    /// Unique record identifier.
    pub id: Uuid,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// The city the calculation was run for.
    pub city_code: String,
    /// The leave start date, formatted `YYYY-MM-DD`.
    pub leave_start_date: String,
    /// The full calculation result snapshot.
    pub result: AllowanceCalculationResult,
}
