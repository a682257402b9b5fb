//! [`Query`] collection related to multiple [`Salary`] records.

use common::operations::By;

use crate::domain::{employee, Salary};
#[cfg(doc)]
use crate::{domain::Employee, Query};

use super::DatabaseQuery;

/// Queries all the [`Salary`] records.
pub type List = DatabaseQuery<By<Vec<Salary>, ()>>;

/// Queries [`Salary`] records of an [`Employee`], ordered by their period
/// start.
pub type ByEmployee = DatabaseQuery<By<Vec<Salary>, employee::Id>>;
