//! Request types for the maternity calculation API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint and its conversion into the domain input.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{BirthFlags, CalculationInput, DeclaredSalaries};

/// Earliest leave start year the engine accepts.
const MIN_START_YEAR: i32 = 1900;
/// Latest leave start year the engine accepts.
const MAX_START_YEAR: i32 = 2100;

/// Request body for the `/calculate` endpoint.
///
/// Field names follow the external camelCase contract. The date is carried
/// as a string so unparseable values surface as a typed
/// [`EngineError::InvalidDate`] rather than a generic deserialization
/// failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    /// City code (e.g. "310000") or display name (e.g. "上海").
    pub city_code: String,
    /// First day of leave, formatted `YYYY-MM-DD`.
    pub leave_start_date: String,
    /// Salary for the month containing the leave start date.
    pub first_month_salary: Decimal,
    /// Salary for the month containing the leave end date.
    pub last_month_salary: Decimal,
    /// Flat monthly rate for fully-contained months in between.
    #[serde(default)]
    pub other_month_salary: Option<Decimal>,
    /// The pregnancy was terminated.
    #[serde(default)]
    pub abortion: bool,
    /// The birth was difficult.
    #[serde(default)]
    pub dystocia: bool,
    /// Number of infants born; defaults to a single birth.
    #[serde(default = "default_infant_count")]
    pub multiple_infant_count: u32,
    /// The employee claims the city's optional extended leave.
    #[serde(default)]
    pub extended_leave: bool,
}

fn default_infant_count() -> u32 {
    1
}

impl CalculationRequest {
    /// Converts the wire request into the domain input.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDate`] when the start date is not a
    /// valid `YYYY-MM-DD` calendar date or falls outside the supported
    /// 1900-2100 range.
    pub fn into_input(self) -> EngineResult<CalculationInput> {
        let leave_start_date = parse_start_date(&self.leave_start_date)?;

        Ok(CalculationInput {
            city: self.city_code,
            leave_start_date,
            salaries: DeclaredSalaries {
                first_month: self.first_month_salary,
                last_month: self.last_month_salary,
                other_month: self.other_month_salary,
            },
            flags: BirthFlags {
                is_abortion: self.abortion,
                is_dystocia: self.dystocia,
                multiple_infant_count: self.multiple_infant_count,
                claims_extended_leave: self.extended_leave,
            },
        })
    }
}

fn parse_start_date(value: &str) -> EngineResult<NaiveDate> {
    let date =
        NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| EngineError::InvalidDate {
            value: value.to_string(),
            message: e.to_string(),
        })?;

    let year = chrono::Datelike::year(&date);
    if !(MIN_START_YEAR..=MAX_START_YEAR).contains(&year) {
        return Err(EngineError::InvalidDate {
            value: value.to_string(),
            message: format!(
                "year {} is outside the supported range {}-{}",
                year, MIN_START_YEAR, MAX_START_YEAR
            ),
        });
    }

    Ok(date)
}
