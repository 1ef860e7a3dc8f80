//! Policy record types for per-city maternity leave rules.
//!
//! Each city publishes its own statutory day counts and allowance formula.
//! These are modeled as plain data so the whole table is enumerable and
//! exhaustively testable.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// The method used to compute the government-paid maternity allowance.
///
/// Formulas are dispatched by pattern match in the allowance calculator, so
/// adding a city with a new formula shape means adding a variant here rather
/// than changing the calculator's control flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowanceFormula {
    /// Monthly base salary divided by `daily_divisor`, multiplied by the
    /// total leave days.
    AverageBased {
        /// Days per month used to derive the daily rate (commonly 30).
        daily_divisor: u32,
    },
    /// As [`AllowanceFormula::AverageBased`], but the monthly base is first
    /// clamped into the city's contribution-wage band.
    CappedAverage {
        /// Days per month used to derive the daily rate.
        daily_divisor: u32,
        /// Lower bound on the monthly base (typically the city minimum wage).
        monthly_floor: Decimal,
        /// Upper bound on the monthly base (the social-insurance cap).
        monthly_cap: Decimal,
    },
    /// The city's formula needs contribution-history data this engine does
    /// not have. The allowance is reported as "cannot compute" (`None`),
    /// never coerced to zero.
    Unavailable,
}

/// What to report as compensation when the allowance cannot be computed.
///
/// City policies are ambiguous on this point, so it is an explicit policy
/// parameter rather than a hardcoded behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompensationFallback {
    /// No comparison is possible; compensation is also reported as unknown.
    None,
    /// The employer guarantees the full declared salary as a top-up.
    FullSalary,
}

/// A per-city policy record: statutory day counts and the allowance formula.
///
/// Policies are owned by the [`super::PolicyRegistry`], constructed once at
/// process start, and never mutated afterwards. Day counts are signed so a
/// misconfigured negative value is representable and can be rejected with
/// [`EngineError::InvalidPolicy`] at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    /// The administrative division code (e.g. "310000" for Shanghai).
    pub city_code: String,
    /// The display name of the city (e.g. "上海").
    pub city_name: String,
    /// The province or municipality the city belongs to.
    pub province: String,
    /// Base statutory maternity leave days for a normal birth.
    pub statutory_leave_days: i64,
    /// Additional days granted for a difficult birth.
    pub dystocia_bonus_days: i64,
    /// Additional days per infant beyond the first in a multiple birth.
    pub per_extra_infant_days: i64,
    /// Additional days the city grants beyond the statutory minimum, when
    /// the employee claims them.
    pub extended_leave_days: i64,
    /// Leave days for a terminated pregnancy. Replaces the entire
    /// live-birth stack when the abortion flag is set.
    pub abortion_leave_days: i64,
    /// How the government allowance is computed for this city.
    pub allowance_formula: AllowanceFormula,
    /// Compensation behavior when the allowance cannot be computed.
    pub compensation_fallback: CompensationFallback,
}

impl Policy {
    /// Validates the policy's internal consistency.
    ///
    /// Returns [`EngineError::InvalidPolicy`] if any day count is negative,
    /// a formula divisor is zero, or a formula's floor exceeds its cap.
    /// Called by the registry at construction time so calculation-time code
    /// can rely on the policy being well-formed.
    pub fn validate(&self) -> EngineResult<()> {
        let day_fields = [
            ("statutory_leave_days", self.statutory_leave_days),
            ("dystocia_bonus_days", self.dystocia_bonus_days),
            ("per_extra_infant_days", self.per_extra_infant_days),
            ("extended_leave_days", self.extended_leave_days),
            ("abortion_leave_days", self.abortion_leave_days),
        ];
        for (name, value) in day_fields {
            if value < 0 {
                return Err(EngineError::InvalidPolicy {
                    city: self.city_code.clone(),
                    message: format!("{} is negative ({})", name, value),
                });
            }
        }

        match &self.allowance_formula {
            AllowanceFormula::AverageBased { daily_divisor } => {
                if *daily_divisor == 0 {
                    return Err(EngineError::InvalidPolicy {
                        city: self.city_code.clone(),
                        message: "allowance formula daily divisor is zero".to_string(),
                    });
                }
            }
            AllowanceFormula::CappedAverage {
                daily_divisor,
                monthly_floor,
                monthly_cap,
            } => {
                if *daily_divisor == 0 {
                    return Err(EngineError::InvalidPolicy {
                        city: self.city_code.clone(),
                        message: "allowance formula daily divisor is zero".to_string(),
                    });
                }
                if monthly_floor > monthly_cap {
                    return Err(EngineError::InvalidPolicy {
                        city: self.city_code.clone(),
                        message: format!(
                            "monthly floor {} exceeds monthly cap {}",
                            monthly_floor, monthly_cap
                        ),
                    });
                }
            }
            AllowanceFormula::Unavailable => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn base_policy() -> Policy {
        Policy {
            city_code: "310000".to_string(),
            city_name: "上海".to_string(),
            province: "上海市".to_string(),
            statutory_leave_days: 98,
            dystocia_bonus_days: 15,
            per_extra_infant_days: 15,
            extended_leave_days: 60,
            abortion_leave_days: 42,
            allowance_formula: AllowanceFormula::AverageBased { daily_divisor: 30 },
            compensation_fallback: CompensationFallback::None,
        }
    }

    #[test]
    fn test_valid_policy_passes_validation() {
        assert!(base_policy().validate().is_ok());
    }

    #[test]
    fn test_negative_statutory_days_rejected() {
        let policy = Policy {
            statutory_leave_days: -1,
            ..base_policy()
        };
        match policy.validate().unwrap_err() {
            EngineError::InvalidPolicy { city, message } => {
                assert_eq!(city, "310000");
                assert!(message.contains("statutory_leave_days"));
            }
            other => panic!("Expected InvalidPolicy, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_abortion_days_rejected() {
        let policy = Policy {
            abortion_leave_days: -42,
            ..base_policy()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_zero_divisor_rejected() {
        let policy = Policy {
            allowance_formula: AllowanceFormula::AverageBased { daily_divisor: 0 },
            ..base_policy()
        };
        match policy.validate().unwrap_err() {
            EngineError::InvalidPolicy { message, .. } => {
                assert!(message.contains("divisor"));
            }
            other => panic!("Expected InvalidPolicy, got {:?}", other),
        }
    }

    #[test]
    fn test_floor_above_cap_rejected() {
        let policy = Policy {
            allowance_formula: AllowanceFormula::CappedAverage {
                daily_divisor: 30,
                monthly_floor: dec("5000"),
                monthly_cap: dec("4000"),
            },
            ..base_policy()
        };
        match policy.validate().unwrap_err() {
            EngineError::InvalidPolicy { message, .. } => {
                assert!(message.contains("floor"));
            }
            other => panic!("Expected InvalidPolicy, got {:?}", other),
        }
    }

    #[test]
    fn test_unavailable_formula_passes_validation() {
        let policy = Policy {
            allowance_formula: AllowanceFormula::Unavailable,
            ..base_policy()
        };
        assert!(policy.validate().is_ok());
    }
}
