//! [`Department`] definitions.

use crate::domain::company;
#[cfg(doc)]
use crate::domain::Company;

/// Department of a [`Company`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Department {
    /// ID of this [`Department`].
    pub id: Id,

    /// [`Name`] of this [`Department`].
    pub name: Name,

    /// ID of the [`Company`] this [`Department`] belongs to.
    pub company_id: company::Id,
}

define_id!(Department);

define_text! {
    #[doc = "Name of a [`Department`]."]
    Name(max = 100)
}
