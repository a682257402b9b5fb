//! [`Employee`]-related [`Database`] implementations.

use common::operations::{By, Insert, Lock, Select, Update};
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{employee, Employee},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
    read,
};

/// Columns of the `employees` table in the order [`from_row()`] expects.
const COLUMNS: &str = "\
    id, first_name, middle_name, last_name, \
    address_id, position_id, office_id, company_id, \
    hired_at, terminated_at";

/// Reads an [`Employee`] from the provided [`Row`].
fn from_row(row: &Row) -> Employee {
    Employee {
        id: row.get("id"),
        first_name: row.get("first_name"),
        middle_name: row.get("middle_name"),
        last_name: row.get("last_name"),
        address_id: row.get("address_id"),
        position_id: row.get("position_id"),
        office_id: row.get("office_id"),
        company_id: row.get("company_id"),
        hired_at: row.get("hired_at"),
        status: row
            .get::<_, Option<employee::TerminationDateTime>>("terminated_at")
            .into(),
    }
}

impl<C> Database<Select<By<Option<Employee>, employee::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<Employee>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Employee>, employee::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: employee::Id = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM employees \
             WHERE id = $1::UUID"
        );
        Ok(self
            .query_opt(&sql, &[&id])
            .await
            .map_err(tracerr::wrap!())?
            .as_ref()
            .map(from_row))
    }
}

impl<C> Database<Select<By<Vec<Employee>, read::employee::list::Selector>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Employee>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<Vec<Employee>, read::employee::list::Selector>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        use read::employee::list::Selector as S;

        let filter = match by.into_inner() {
            S::Active => "WHERE terminated_at IS NULL",
            S::Terminated => "WHERE terminated_at IS NOT NULL",
            S::All => "",
        };
        let sql = format!(
            "SELECT {COLUMNS} \
             FROM employees \
             {filter} \
             ORDER BY last_name, first_name, id"
        );
        Ok(self
            .query(&sql, &[])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(from_row)
            .collect())
    }
}

impl<C> Database<Insert<Employee>> for Postgres<C>
where
    C: Connection,
    Self: Database<Update<Employee>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(employee): Insert<Employee>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(employee))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<C> Database<Update<Employee>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(employee): Update<Employee>,
    ) -> Result<Self::Ok, Self::Err> {
        let terminated_at = employee.terminated_at();
        let Employee {
            id,
            first_name,
            middle_name,
            last_name,
            address_id,
            position_id,
            office_id,
            company_id,
            hired_at,
            status: _,
        } = employee;

        const SQL: &str = "\
            INSERT INTO employees (\
                id, first_name, middle_name, last_name, \
                address_id, position_id, office_id, company_id, \
                hired_at, terminated_at\
            ) \
            VALUES (\
                $1::UUID, \
                $2::VARCHAR, $3::VARCHAR, $4::VARCHAR, \
                $5::UUID, $6::UUID, $7::UUID, $8::UUID, \
                $9::TIMESTAMPTZ, $10::TIMESTAMPTZ\
            ) \
            ON CONFLICT (id) DO UPDATE \
            SET first_name = EXCLUDED.first_name, \
                middle_name = EXCLUDED.middle_name, \
                last_name = EXCLUDED.last_name, \
                address_id = EXCLUDED.address_id, \
                position_id = EXCLUDED.position_id, \
                office_id = EXCLUDED.office_id, \
                company_id = EXCLUDED.company_id, \
                hired_at = EXCLUDED.hired_at, \
                terminated_at = EXCLUDED.terminated_at";
        self.exec(
            SQL,
            &[
                &id,
                &first_name,
                &middle_name,
                &last_name,
                &address_id,
                &position_id,
                &office_id,
                &company_id,
                &hired_at,
                &terminated_at,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}

impl<C> Database<Lock<By<Employee, employee::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Lock(by): Lock<By<Employee, employee::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: employee::Id = by.into_inner();

        // Touching an already existing row locks it until the end of the
        // transaction as well.
        const SQL: &str = "\
            INSERT INTO employees_lock \
            VALUES ($1::UUID) \
            ON CONFLICT (id) DO UPDATE \
            SET id = EXCLUDED.id";
        self.exec(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}
