//! The process-wide registry of per-city maternity policies.
//!
//! The registry is populated once from a static table (no network or file
//! I/O), validated at construction, and read-only thereafter, so concurrent
//! lookups need no locking.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::types::{AllowanceFormula, CompensationFallback, Policy};

/// An immutable table of city policies, looked up by administrative city
/// code or display name.
///
/// # Example
///
/// ```
/// use maternity_engine::policy::PolicyRegistry;
///
/// let registry = PolicyRegistry::builtin().unwrap();
/// let policy = registry.lookup("310000").unwrap();
/// assert_eq!(policy.city_name, "上海");
/// // Display-name lookup resolves to the same policy.
/// assert_eq!(registry.lookup("上海").unwrap().city_code, "310000");
/// ```
#[derive(Debug, Clone)]
pub struct PolicyRegistry {
    policies: Vec<Policy>,
    index: HashMap<String, usize>,
}

impl PolicyRegistry {
    /// Builds a registry from the given policies.
    ///
    /// Every policy is validated eagerly; a malformed policy is a
    /// construction-time [`EngineError::InvalidPolicy`], never a
    /// calculation-time error. A city code or display name that collides
    /// with any earlier entry's code or name is also rejected, so no entry
    /// can silently shadow another.
    pub fn with_policies(policies: Vec<Policy>) -> EngineResult<Self> {
        let mut index: HashMap<String, usize> = HashMap::new();
        for (position, policy) in policies.iter().enumerate() {
            policy.validate()?;
            for key in [&policy.city_code, &policy.city_name] {
                if let Some(previous) = index.insert(key.clone(), position) {
                    // A policy whose name equals its own code maps to itself.
                    if previous != position {
                        return Err(EngineError::InvalidPolicy {
                            city: policy.city_code.clone(),
                            message: format!("duplicate city identifier '{}' in registry", key),
                        });
                    }
                }
            }
        }
        Ok(Self { policies, index })
    }

    /// The built-in policy table covering the supported cities.
    ///
    /// Day counts follow each province's population regulations: 98 statutory
    /// days nationally, plus the province's extended leave, dystocia bonus,
    /// and per-extra-infant bonus.
    ///
    /// A malformed builtin table surfaces here as
    /// [`EngineError::InvalidPolicy`] so startup can abort eagerly.
    pub fn builtin() -> EngineResult<Self> {
        Self::with_policies(builtin_policies())
    }

    /// Resolves a policy by city code or display name.
    ///
    /// Returns [`EngineError::UnknownCity`] when the identifier has no
    /// registered policy.
    pub fn lookup(&self, city: &str) -> EngineResult<&Policy> {
        self.index
            .get(city)
            .map(|&position| &self.policies[position])
            .ok_or_else(|| EngineError::UnknownCity {
                city: city.to_string(),
            })
    }

    /// Returns all registered policies, in registration order.
    pub fn policies(&self) -> &[Policy] {
        &self.policies
    }
}

fn dec(value: i64) -> Decimal {
    Decimal::from(value)
}

fn builtin_policies() -> Vec<Policy> {
    vec![
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
        },
        Policy {
            city_code: "110000".to_string(),
            city_name: "北京".to_string(),
            province: "北京市".to_string(),
            statutory_leave_days: 98,
            dystocia_bonus_days: 15,
            per_extra_infant_days: 15,
            extended_leave_days: 60,
            abortion_leave_days: 42,
            allowance_formula: AllowanceFormula::CappedAverage {
                daily_divisor: 30,
                monthly_floor: dec(2420),
                monthly_cap: dec(33891),
            },
            compensation_fallback: CompensationFallback::None,
        },
        Policy {
            city_code: "440100".to_string(),
            city_name: "广州".to_string(),
            province: "广东省".to_string(),
            statutory_leave_days: 98,
            dystocia_bonus_days: 30,
            per_extra_infant_days: 15,
            extended_leave_days: 80,
            abortion_leave_days: 42,
            allowance_formula: AllowanceFormula::AverageBased { daily_divisor: 30 },
            compensation_fallback: CompensationFallback::None,
        },
        Policy {
            city_code: "440300".to_string(),
            city_name: "深圳".to_string(),
            province: "广东省".to_string(),
            statutory_leave_days: 98,
            dystocia_bonus_days: 30,
            per_extra_infant_days: 15,
            extended_leave_days: 80,
            abortion_leave_days: 42,
            allowance_formula: AllowanceFormula::CappedAverage {
                daily_divisor: 30,
                monthly_floor: dec(2360),
                monthly_cap: dec(26749),
            },
            compensation_fallback: CompensationFallback::None,
        },
        Policy {
            city_code: "120000".to_string(),
            city_name: "天津".to_string(),
            province: "天津市".to_string(),
            statutory_leave_days: 98,
            dystocia_bonus_days: 15,
            per_extra_infant_days: 15,
            extended_leave_days: 60,
            abortion_leave_days: 42,
            allowance_formula: AllowanceFormula::AverageBased { daily_divisor: 30 },
            compensation_fallback: CompensationFallback::None,
        },
        // Chongqing's fund requires contribution history the engine does not
        // hold; the employer guarantees the declared salary instead.
        Policy {
            city_code: "500000".to_string(),
            city_name: "重庆".to_string(),
            province: "重庆市".to_string(),
            statutory_leave_days: 98,
            dystocia_bonus_days: 15,
            per_extra_infant_days: 15,
            extended_leave_days: 80,
            abortion_leave_days: 42,
            allowance_formula: AllowanceFormula::Unavailable,
            compensation_fallback: CompensationFallback::FullSalary,
        },
        Policy {
            city_code: "510100".to_string(),
            city_name: "成都".to_string(),
            province: "四川省".to_string(),
            statutory_leave_days: 98,
            dystocia_bonus_days: 15,
            per_extra_infant_days: 15,
            extended_leave_days: 60,
            abortion_leave_days: 42,
            allowance_formula: AllowanceFormula::Unavailable,
            compensation_fallback: CompensationFallback::None,
        },
    ]
}
