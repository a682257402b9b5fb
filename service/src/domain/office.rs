//! [`Office`] definitions.

use crate::domain::{address, company};
#[cfg(doc)]
use crate::domain::{Address, Company};

/// Office of a [`Company`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Office {
    /// ID of this [`Office`].
    pub id: Id,

    /// [`Name`] of this [`Office`].
    pub name: Name,

    /// ID of the [`Company`] this [`Office`] belongs to.
    pub company_id: company::Id,

    /// ID of the [`Address`] this [`Office`] is located at.
    pub address_id: address::Id,
}

define_id!(Office);

define_text! {
    #[doc = "Name of an [`Office`]."]
    Name(max = 100)
}
