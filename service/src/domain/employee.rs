//! [`Employee`] definitions.

#[cfg(doc)]
use common::DateTime;
use common::{unit, DateTimeOf};

use crate::domain::{address, company, office, position};
#[cfg(doc)]
use crate::domain::{Address, Company, Office, Position};

/// Person employed by a [`Company`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Employee {
    /// ID of this [`Employee`].
    pub id: Id,

    /// First [`Name`] of this [`Employee`].
    pub first_name: Name,

    /// Middle [`Name`] of this [`Employee`], if any.
    pub middle_name: Option<Name>,

    /// Last [`Name`] of this [`Employee`].
    pub last_name: Name,

    /// ID of the home [`Address`] owned by this [`Employee`].
    pub address_id: address::Id,

    /// ID of the [`Position`] this [`Employee`] holds.
    pub position_id: position::Id,

    /// ID of the [`Office`] this [`Employee`] works at.
    pub office_id: office::Id,

    /// ID of the [`Company`] this [`Employee`] works for.
    pub company_id: company::Id,

    /// [`DateTime`] when this [`Employee`] was (re)hired.
    pub hired_at: HiringDateTime,

    /// Employment [`Status`] of this [`Employee`].
    pub status: Status,
}

impl Employee {
    /// Returns the full name of this [`Employee`], with the middle name
    /// omitted if absent.
    #[must_use]
    pub fn full_name(&self) -> String {
        match &self.middle_name {
            Some(middle) => {
                format!("{} {middle} {}", self.first_name, self.last_name)
            }
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }

    /// Indicates whether this [`Employee`] is terminated.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.status.is_terminated()
    }

    /// Returns the [`DateTime`] when this [`Employee`] was terminated, if
    /// it was.
    #[must_use]
    pub fn terminated_at(&self) -> Option<TerminationDateTime> {
        self.status.terminated_at()
    }
}

define_id!(Employee);

define_text! {
    #[doc = "Personal name of an [`Employee`]."]
    Name(max = 50)
}

/// Employment status of an [`Employee`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Status {
    /// [`Employee`] currently works.
    #[default]
    Active,

    /// [`Employee`] was terminated.
    Terminated {
        /// [`DateTime`] of the termination.
        at: TerminationDateTime,
    },
}

impl Status {
    /// Indicates whether this [`Status`] is [`Status::Terminated`].
    #[must_use]
    pub fn is_terminated(self) -> bool {
        matches!(self, Self::Terminated { .. })
    }

    /// Returns the [`DateTime`] of the termination, if any.
    #[must_use]
    pub fn terminated_at(self) -> Option<TerminationDateTime> {
        match self {
            Self::Active => None,
            Self::Terminated { at } => Some(at),
        }
    }
}

impl From<Option<TerminationDateTime>> for Status {
    fn from(at: Option<TerminationDateTime>) -> Self {
        at.map_or(Self::Active, |at| Self::Terminated { at })
    }
}

/// [`DateTime`] when an [`Employee`] was hired.
pub type HiringDateTime = DateTimeOf<(Employee, unit::Hiring)>;

/// [`DateTime`] when an [`Employee`] was terminated.
pub type TerminationDateTime = DateTimeOf<(Employee, unit::Termination)>;
