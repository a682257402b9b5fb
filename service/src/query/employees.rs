//! [`Query`] collection related to multiple [`Employee`]s.

use common::operations::By;

use crate::{domain::Employee, read};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a list of [`Employee`]s matching a
/// [`read::employee::list::Selector`], ordered by their names.
pub type List =
    DatabaseQuery<By<Vec<Employee>, read::employee::list::Selector>>;
