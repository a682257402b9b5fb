//! [`Postgres`] implementation of the [`Database`].
//!
//! Every write flows through a [`Tx`] client, which opens its transaction
//! lazily on the first statement and rolls it back when dropped without a
//! [`Commit`].
//!
//! [`Commit`]: common::operations::Commit

mod client;
pub mod connection;
mod impls;

use deadpool_postgres::Runtime;
use derive_more::{Deref, Display, Error as StdError, From};
use tokio_postgres::NoTls;
use tracerr::Traced;

use crate::infra::database;
#[cfg(doc)]
use crate::infra::Database;

pub use deadpool_postgres::Config;
pub use refinery::embed_migrations;

pub use self::{
    client::{NonTx, Tx},
    connection::Connection,
};

/// Postgres [`Database`] backed by a [`connection::Pool`].
///
/// `T` is the client every statement is sent through: [`NonTx`] outside of a
/// transaction and [`Tx`] inside one.
#[derive(Clone, Copy, Debug, Deref)]
pub struct Postgres<T = NonTx>(T);

impl Postgres {
    /// Creates a new [`Postgres`] out of the provided [`Config`].
    ///
    /// No connection is established until the first statement.
    ///
    /// # Errors
    ///
    /// If the [`Config`] cannot produce a [`connection::Pool`].
    pub fn new(conf: &Config) -> Result<Self, Traced<database::Error>> {
        conf.create_pool(Some(Runtime::Tokio1), NoTls)
            .map(|pool| Self(NonTx::from_pool(pool)))
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)
    }
}

/// Error of a [`Postgres`] operation.
#[derive(Debug, Display, StdError, From)]
pub enum Error {
    /// Statement failed on a [`Connection`].
    #[display("statement failed: {_0}")]
    Connection(connection::Error),

    /// [`Config`] is not enough for a [`connection::Pool`].
    #[display("cannot create `connection::Pool`: {_0}")]
    PoolCreation(connection::PoolCreationError),

    /// [`connection::Pool`] has not provided a connection.
    #[display("cannot acquire pooled connection: {_0}")]
    Pool(connection::PoolError),
}

#[cfg(test)]
mod spec {
    use std::{collections::HashMap, sync::LazyLock};

    use regex::Regex;

    /// Seed migration applied on top of the schema.
    const SEED: &str = include_str!("../../../../../migrations/V2__seed.sql");

    /// Returns the quoted literals of every row inserted into the `table`.
    fn rows(table: &str) -> Vec<Vec<&'static str>> {
        static LITERAL: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"'([^']*)'").unwrap());

        let start = SEED.find(&format!("INSERT INTO {table} ")).unwrap();
        let end = start + SEED[start..].find(';').unwrap();
        let values = &SEED[start..end];
        let values = &values[values.find("VALUES").unwrap()..];

        values
            .split("\n    (")
            .skip(1)
            .map(|row| {
                LITERAL
                    .captures_iter(row)
                    .map(|c| c.get(1).unwrap().as_str())
                    .collect()
            })
            .collect()
    }

    /// Returns `ID -> row` of the `table`.
    fn by_id(table: &str) -> HashMap<&'static str, Vec<&'static str>> {
        rows(table).into_iter().map(|r| (r[0], r)).collect()
    }

    #[test]
    fn seeded_employees_work_where_their_company_is() {
        let companies = by_id("companies");
        let offices = by_id("offices");
        let departments = by_id("departments");
        let positions = by_id("positions");

        let placements = rows("employees")
            .into_iter()
            .map(|e| {
                let (position, office, company) = (e[4], e[5], e[6]);
                let department = positions[position][2];

                assert_eq!(offices[office][2], company);
                assert_eq!(departments[department][2], company);

                (e[1], companies[company][1], offices[office][1])
            })
            .collect::<Vec<_>>();

        assert_eq!(
            placements,
            [
                ("John", "Tech Solutions Ltd.", "Sofia HQ"),
                ("Jane", "Tech Solutions Ltd.", "Sofia HQ"),
                ("Bob", "Digital Innovations Inc.", "Plovdiv Branch"),
            ],
        );
    }
}
