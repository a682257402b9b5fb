//! [`Salary`]-related [`Database`] implementations.

use common::{
    operations::{By, Delete, Insert, Select, Update},
    Date,
};
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{employee, salary, Salary},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
};

/// Reads a [`Salary`] from the provided [`Row`].
fn from_row(row: &Row) -> Salary {
    Salary {
        id: row.get("id"),
        employee_id: row.get("employee_id"),
        period: salary::Period::new(
            row.get::<_, Date>("period_start"),
            row.get::<_, Date>("period_end"),
        )
        .expect("`salaries_period_check` constraint"),
        bonus: row.get("bonus"),
        deduction: row.get("deduction"),
    }
}

impl<C> Database<Select<By<Option<Salary>, salary::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<Salary>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Salary>, salary::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: salary::Id = by.into_inner();

        const SQL: &str = "\
            SELECT id, employee_id, period_start, period_end, \
                   bonus, deduction \
            FROM salaries \
            WHERE id = $1::UUID";
        Ok(self
            .query_opt(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())?
            .as_ref()
            .map(from_row))
    }
}

impl<C> Database<Select<By<Vec<Salary>, employee::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Salary>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Salary>, employee::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let employee_id: employee::Id = by.into_inner();

        const SQL: &str = "\
            SELECT id, employee_id, period_start, period_end, \
                   bonus, deduction \
            FROM salaries \
            WHERE employee_id = $1::UUID \
            ORDER BY period_start, id";
        Ok(self
            .query(SQL, &[&employee_id])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(from_row)
            .collect())
    }
}

impl<C> Database<Select<By<Vec<Salary>, ()>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Salary>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Salary>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        const SQL: &str = "\
            SELECT id, employee_id, period_start, period_end, \
                   bonus, deduction \
            FROM salaries \
            ORDER BY period_start DESC, employee_id, id";
        Ok(self
            .query(SQL, &[])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(from_row)
            .collect())
    }
}

impl<C> Database<Insert<Salary>> for Postgres<C>
where
    C: Connection,
    Self: Database<Update<Salary>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(salary): Insert<Salary>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(salary))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<C> Database<Update<Salary>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(salary): Update<Salary>,
    ) -> Result<Self::Ok, Self::Err> {
        let Salary {
            id,
            employee_id,
            period,
            bonus,
            deduction,
        } = salary;
        let (start, end) = (period.start(), period.end());

        const SQL: &str = "\
            INSERT INTO salaries (\
                id, employee_id, period_start, period_end, \
                bonus, deduction\
            ) \
            VALUES (\
                $1::UUID, $2::UUID, $3::DATE, $4::DATE, \
                $5::NUMERIC, $6::NUMERIC\
            ) \
            ON CONFLICT (id) DO UPDATE \
            SET period_start = EXCLUDED.period_start, \
                period_end = EXCLUDED.period_end, \
                bonus = EXCLUDED.bonus, \
                deduction = EXCLUDED.deduction";
        self.exec(
            SQL,
            &[&id, &employee_id, &start, &end, &bonus, &deduction],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}

impl<C> Database<Delete<By<Salary, salary::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Salary, salary::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: salary::Id = by.into_inner();

        const SQL: &str = "\
            DELETE FROM salaries \
            WHERE id = $1::UUID";
        self.exec(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}
