//! [`Employee`] read model definition.

use crate::domain::{
    Address, City, Company, Employee, Office, Position, Salary,
};

pub mod list {
    //! [`Employee`]s list definitions.
    //!
    //! [`Employee`]: crate::domain::Employee

    use crate::domain::Employee;

    /// Selector of [`Employee`]s in a list.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub enum Selector {
        /// Only currently working [`Employee`]s.
        #[default]
        Active,

        /// Only terminated [`Employee`]s.
        Terminated,

        /// All the [`Employee`]s.
        All,
    }

    impl Selector {
        /// Checks whether the provided [`Employee`] is selected by this
        /// [`Selector`].
        #[must_use]
        pub fn matches(self, employee: &Employee) -> bool {
            match self {
                Self::Active => !employee.is_terminated(),
                Self::Terminated => employee.is_terminated(),
                Self::All => true,
            }
        }
    }
}

/// Full details of an [`Employee`] with everything it refers to.
#[derive(Clone, Debug)]
pub struct Details {
    /// [`Employee`] itself.
    pub employee: Employee,

    /// Home [`Address`] of the [`Employee`].
    pub address: Address,

    /// [`City`] of the home [`Address`].
    pub city: City,

    /// [`Company`] the [`Employee`] works for.
    pub company: Company,

    /// [`Position`] the [`Employee`] holds.
    pub position: Position,

    /// [`Office`] the [`Employee`] works at.
    pub office: Office,

    /// [`Salary`] records of the [`Employee`] ordered by period start.
    pub salaries: Vec<Salary>,
}
