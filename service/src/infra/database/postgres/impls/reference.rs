//! [`Database`] implementations of the reference data: [`City`],
//! [`Company`], [`Department`], [`Office`] and [`Position`].

use common::{
    operations::{By, Select},
    Money,
};
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{
        city, company, department, office, position, City, Company,
        Department, Office, Position,
    },
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
};

/// Implements selection of a reference entity by its ID and of all of
/// them, ordered by the provided columns.
macro_rules! impl_select {
    (
        $entity:ident by $id:ty,
        table = $table:literal,
        columns = $columns:literal,
        order = $order:literal,
        from_row = $from_row:expr $(,)?
    ) => {
        impl<C> Database<Select<By<Option<$entity>, $id>>> for Postgres<C>
        where
            C: Connection,
        {
            type Ok = Option<$entity>;
            type Err = Traced<database::Error>;

            async fn execute(
                &self,
                Select(by): Select<By<Option<$entity>, $id>>,
            ) -> Result<Self::Ok, Self::Err> {
                // Avoid subtle change for SQL.
                let id: $id = by.into_inner();

                const SQL: &str = ::core::concat!(
                    "SELECT ", $columns, " ",
                    "FROM ", $table, " ",
                    "WHERE id = $1::UUID",
                );
                Ok(self
                    .query_opt(SQL, &[&id])
                    .await
                    .map_err(tracerr::wrap!())?
                    .as_ref()
                    .map($from_row))
            }
        }

        impl<C> Database<Select<By<Vec<$entity>, ()>>> for Postgres<C>
        where
            C: Connection,
        {
            type Ok = Vec<$entity>;
            type Err = Traced<database::Error>;

            async fn execute(
                &self,
                _: Select<By<Vec<$entity>, ()>>,
            ) -> Result<Self::Ok, Self::Err> {
                const SQL: &str = ::core::concat!(
                    "SELECT ", $columns, " ",
                    "FROM ", $table, " ",
                    "ORDER BY ", $order,
                );
                Ok(self
                    .query(SQL, &[])
                    .await
                    .map_err(tracerr::wrap!())?
                    .iter()
                    .map($from_row)
                    .collect())
            }
        }
    };
}

impl_select! {
    City by city::Id,
    table = "cities",
    columns = "id, name",
    order = "name, id",
    from_row = |row: &Row| City {
        id: row.get("id"),
        name: row.get("name"),
    },
}

impl_select! {
    Company by company::Id,
    table = "companies",
    columns = "id, name",
    order = "name, id",
    from_row = |row: &Row| Company {
        id: row.get("id"),
        name: row.get("name"),
    },
}

impl_select! {
    Department by department::Id,
    table = "departments",
    columns = "id, name, company_id",
    order = "name, id",
    from_row = |row: &Row| Department {
        id: row.get("id"),
        name: row.get("name"),
        company_id: row.get("company_id"),
    },
}

impl_select! {
    Office by office::Id,
    table = "offices",
    columns = "id, name, company_id, address_id",
    order = "name, id",
    from_row = |row: &Row| Office {
        id: row.get("id"),
        name: row.get("name"),
        company_id: row.get("company_id"),
        address_id: row.get("address_id"),
    },
}

impl_select! {
    Position by position::Id,
    table = "positions",
    columns = "id, title, base_salary, base_salary_currency, department_id",
    order = "title, id",
    from_row = |row: &Row| Position {
        id: row.get("id"),
        title: row.get("title"),
        base_salary: Money {
            amount: row.get("base_salary"),
            currency: row.get("base_salary_currency"),
        },
        department_id: row.get("department_id"),
    },
}
