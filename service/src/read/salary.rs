//! [`Salary`] read model definition.

use std::fmt;

use common::Money;
use rust_decimal::Decimal;

use crate::domain::{position, Salary};
#[cfg(doc)]
use crate::domain::{Employee, Position};

/// Statement of a [`Salary`] paid to an [`Employee`].
#[derive(Clone, Debug)]
pub struct Statement {
    /// [`Salary`] this [`Statement`] is about.
    pub salary: Salary,

    /// Full name of the [`Employee`].
    pub employee_name: String,

    /// Title of the [`Employee`]'s [`Position`].
    pub position_title: position::Title,

    /// Base salary of the [`Employee`]'s [`Position`].
    pub base_salary: Money,
}

impl Statement {
    /// Calculates the total pay of this [`Statement`].
    #[must_use]
    pub fn total_pay(&self) -> Money {
        self.salary.total_pay(self.base_salary)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let currency = self.base_salary.currency;
        let in_currency = |amount: Decimal| Money { amount, currency };

        writeln!(f, "Salary statement")?;
        writeln!(f, "Employee:    {}", self.employee_name)?;
        writeln!(f, "Position:    {}", self.position_title)?;
        writeln!(
            f,
            "Period:      {} - {}",
            self.salary.period.start(),
            self.salary.period.end(),
        )?;
        writeln!(f, "Base salary: {}", self.base_salary.to_fixed())?;
        writeln!(
            f,
            "Bonus:       {}",
            in_currency(self.salary.bonus.into()).to_fixed(),
        )?;
        writeln!(
            f,
            "Deduction:   {}",
            in_currency(self.salary.deduction.into()).to_fixed(),
        )?;
        write!(f, "Total:       {}", self.total_pay().to_fixed())
    }
}
