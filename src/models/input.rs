//! Caller-supplied input models.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Medical and biological flags affecting the leave entitlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BirthFlags {
    /// The pregnancy was terminated. Abortion leave replaces the entire
    /// live-birth leave stack.
    pub is_abortion: bool,
    /// The birth was difficult, granting the city's dystocia bonus.
    pub is_dystocia: bool,
    /// Number of infants born. Values above 1 grant the per-extra-infant
    /// bonus for each additional infant.
    pub multiple_infant_count: u32,
    /// The employee claims the city's optional extended leave.
    pub claims_extended_leave: bool,
}

/// The employee's declared monthly salary figures.
///
/// The three figures apply to the calendar month containing the leave start
/// date, the month containing the leave end date, and the flat monthly rate
/// for any fully-contained months in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclaredSalaries {
    /// Salary for the month containing the leave start date.
    pub first_month: Decimal,
    /// Salary for the month containing the leave end date.
    pub last_month: Decimal,
    /// Flat monthly rate for fully-contained months in between, when the
    /// leave period has any.
    pub other_month: Option<Decimal>,
}

/// A complete calculation request in domain form.
///
/// Immutable once constructed; the pipeline never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationInput {
    /// City code (e.g. "310000") or display name (e.g. "上海").
    pub city: String,
    /// The first day of leave.
    pub leave_start_date: NaiveDate,
    /// Declared monthly salary figures.
    pub salaries: DeclaredSalaries,
    /// Medical and biological flags.
    pub flags: BirthFlags,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_flags_are_all_unset() {
        let flags = BirthFlags::default();
        assert!(!flags.is_abortion);
        assert!(!flags.is_dystocia);
        assert_eq!(flags.multiple_infant_count, 0);
        assert!(!flags.claims_extended_leave);
    }
}
