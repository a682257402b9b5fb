//! [`Position`] definitions.

use common::Money;

use crate::domain::department;
#[cfg(doc)]
use crate::domain::{Department, Employee};

/// Job position an [`Employee`] holds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Position {
    /// ID of this [`Position`].
    pub id: Id,

    /// [`Title`] of this [`Position`].
    pub title: Title,

    /// Monthly base salary of this [`Position`].
    ///
    /// Its currency is the currency of every salary paid for this
    /// [`Position`].
    pub base_salary: Money,

    /// ID of the [`Department`] this [`Position`] belongs to.
    pub department_id: department::Id,
}

define_id!(Position);

define_text! {
    #[doc = "Title of a [`Position`]."]
    Title(max = 50)
}
