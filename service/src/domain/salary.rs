//! [`Salary`] definitions.

use std::str::FromStr;

use common::{Date, Money};
use derive_more::{Display, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use rust_decimal::Decimal;

use crate::domain::employee;
#[cfg(doc)]
use crate::domain::{Employee, Position};

/// Salary record of an [`Employee`] for a [`Period`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Salary {
    /// ID of this [`Salary`].
    pub id: Id,

    /// ID of the [`Employee`] this [`Salary`] is paid to.
    pub employee_id: employee::Id,

    /// [`Period`] this [`Salary`] covers.
    pub period: Period,

    /// Bonus on top of the base salary of the [`Employee`]'s [`Position`].
    pub bonus: Amount,

    /// Deduction from the base salary of the [`Employee`]'s [`Position`].
    pub deduction: Amount,
}

impl Salary {
    /// Calculates the total pay of this [`Salary`] for the provided base
    /// salary of the [`Employee`]'s [`Position`].
    ///
    /// [`Amount`]s are expressed in the currency of the `base_salary`.
    #[must_use]
    pub fn total_pay(&self, base_salary: Money) -> Money {
        Money {
            amount: base_salary.amount + self.bonus.0 - self.deduction.0,
            currency: base_salary.currency,
        }
    }
}

define_id!(Salary);

/// Inclusive range of [`Date`]s a [`Salary`] covers.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Period {
    /// First day of this [`Period`].
    start: Date,

    /// Last day of this [`Period`].
    end: Date,
}

impl Period {
    /// Creates a new [`Period`] if `start` is not after `end`.
    #[must_use]
    pub fn new(start: Date, end: Date) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Returns the first day of this [`Period`].
    #[must_use]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Returns the last day of this [`Period`].
    #[must_use]
    pub fn end(&self) -> Date {
        self.end
    }

    /// Indicates whether any boundary of this [`Period`] is after `today`.
    #[must_use]
    pub fn is_after(&self, today: Date) -> bool {
        self.start > today || self.end > today
    }

    /// Checks whether the `other` [`Period`] collides with this one.
    ///
    /// A collision happens when either boundary of the `other` [`Period`]
    /// falls within this one. An `other` [`Period`] strictly containing
    /// this one is __not__ considered colliding.
    #[must_use]
    pub fn collides_with(&self, other: &Self) -> bool {
        let contains = |d: Date| self.start <= d && d <= self.end;
        contains(other.start) || contains(other.end)
    }
}

/// Non-negative monetary amount of a [`Salary`] with at most two fractional
/// digits.
///
/// Currency is implied by the base salary of the [`Employee`]'s
/// [`Position`].
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, Into, PartialEq)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Amount(Decimal);

impl Amount {
    /// Zero [`Amount`].
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Number of integral digits an [`Amount`] fits into.
    pub const MAX_DIGITS: u32 = 16;

    /// Creates a new [`Amount`] if the provided `value` is non-negative, has
    /// at most two fractional digits and at most [`Amount::MAX_DIGITS`]
    /// integral ones.
    #[must_use]
    pub fn new(value: Decimal) -> Option<Self> {
        let value = value.normalize();
        let limit = Decimal::from(10_i64.pow(Self::MAX_DIGITS));
        (!value.is_sign_negative() && value.scale() <= 2 && value < limit)
            .then_some(Self(value))
    }
}

impl FromStr for Amount {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s).map_err(|_| "invalid decimal")?;
        Self::new(value).ok_or("invalid `salary::Amount`")
    }
}

/// Reason a [`Salary`] is rejected.
#[derive(Clone, Copy, Debug, strum::Display, Eq, PartialEq)]
#[strum(serialize_all = "kebab-case")]
pub enum Violation {
    /// [`Period`] starts after it ends.
    StartAfterEnd,

    /// [`Period`] lies, at least partially, in the future.
    FuturePeriod,

    /// [`Period`] overlaps with another [`Salary`] of the same
    /// [`Employee`].
    Overlap,

    /// [`Employee`] is terminated.
    TerminatedEmployee,
}

#[cfg(test)]
mod spec {
    use common::{money::Currency, Date, Money};
    use rust_decimal::Decimal;

    use crate::domain::employee;

    use super::{Amount, Id, Period, Salary, Violation};

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    fn period(start: &str, end: &str) -> Period {
        Period::new(date(start), date(end)).unwrap()
    }

    #[test]
    fn period_requires_ordered_boundaries() {
        assert!(Period::new(date("2024-01-01"), date("2024-01-31")).is_some());
        assert!(Period::new(date("2024-01-15"), date("2024-01-15")).is_some());
        assert!(Period::new(date("2024-01-31"), date("2024-01-01")).is_none());
    }

    #[test]
    fn period_in_future() {
        let today = date("2024-05-31");

        assert!(!period("2024-05-01", "2024-05-31").is_after(today));
        assert!(period("2024-05-01", "2024-06-01").is_after(today));
        assert!(period("2024-06-01", "2024-06-30").is_after(today));
    }

    #[test]
    fn collides_when_either_boundary_falls_inside() {
        let existing = period("2024-01-10", "2024-01-20");

        // Start inside.
        assert!(existing.collides_with(&period("2024-01-15", "2024-01-25")));
        // End inside.
        assert!(existing.collides_with(&period("2024-01-05", "2024-01-15")));
        // Both inside.
        assert!(existing.collides_with(&period("2024-01-12", "2024-01-18")));
        // Shared boundary days.
        assert!(existing.collides_with(&period("2024-01-20", "2024-01-31")));
        assert!(existing.collides_with(&period("2024-01-01", "2024-01-10")));
        // Identical.
        assert!(existing.collides_with(&existing));
    }

    #[test]
    fn does_not_collide_when_disjoint() {
        let existing = period("2024-01-01", "2024-01-31");

        assert!(!existing.collides_with(&period("2024-02-01", "2024-02-29")));
        assert!(!existing.collides_with(&period("2023-12-01", "2023-12-31")));
    }

    #[test]
    fn does_not_collide_when_strictly_containing() {
        let existing = period("2024-01-10", "2024-01-20");

        assert!(!existing.collides_with(&period("2024-01-01", "2024-01-31")));
        // The reverse direction is caught, though.
        assert!(period("2024-01-01", "2024-01-31")
            .collides_with(&period("2024-01-10", "2024-01-20")));
    }

    #[test]
    fn amount_is_non_negative_with_cents() {
        assert_eq!("0".parse::<Amount>(), Ok(Amount::ZERO));
        assert!("500".parse::<Amount>().is_ok());
        assert!("12.34".parse::<Amount>().is_ok());
        assert!("12.30".parse::<Amount>().is_ok());
        assert!("12.340".parse::<Amount>().is_ok());

        assert!("9999999999999999.99".parse::<Amount>().is_ok());

        assert!("10000000000000000".parse::<Amount>().is_err());
        assert!("1000000000000000000".parse::<Amount>().is_err());
        assert!("-0.01".parse::<Amount>().is_err());
        assert!("12.345".parse::<Amount>().is_err());
        assert!("abc".parse::<Amount>().is_err());
    }

    #[test]
    fn total_pay() {
        let salary = Salary {
            id: Id::new(),
            employee_id: employee::Id::new(),
            period: period("2024-01-01", "2024-01-31"),
            bonus: Amount::new(decimal("500")).unwrap(),
            deduction: Amount::new(decimal("200")).unwrap(),
        };
        let base_salary = Money {
            amount: decimal("5000"),
            currency: Currency::Bgn,
        };

        assert_eq!(
            salary.total_pay(base_salary),
            Money {
                amount: decimal("5300"),
                currency: Currency::Bgn,
            },
        );

        let salary = Salary {
            bonus: Amount::ZERO,
            deduction: Amount::new(decimal("3500.50")).unwrap(),
            ..salary
        };
        assert_eq!(
            salary.total_pay(Money {
                amount: decimal("3000"),
                currency: Currency::Bgn,
            }),
            Money {
                amount: decimal("-500.50"),
                currency: Currency::Bgn,
            },
        );
    }

    #[test]
    fn violation_names() {
        assert_eq!(Violation::StartAfterEnd.to_string(), "start-after-end");
        assert_eq!(Violation::FuturePeriod.to_string(), "future-period");
        assert_eq!(Violation::Overlap.to_string(), "overlap");
        assert_eq!(
            Violation::TerminatedEmployee.to_string(),
            "terminated-employee",
        );
    }
}
