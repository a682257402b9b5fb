//! [`Query`] collection related to a single [`Salary`].

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{employee, position, salary, Employee, Position, Salary},
    infra::{database, Database},
    read, Query, Service,
};

use super::DatabaseQuery;

/// Queries a [`Salary`] by its [`salary::Id`].
pub type ById = DatabaseQuery<By<Option<Salary>, salary::Id>>;

/// [`Query`] building a [`read::salary::Statement`] of a [`Salary`].
#[derive(Clone, Copy, Debug)]
pub struct Statement {
    /// ID of the [`Salary`] to build the [`read::salary::Statement`] of.
    pub salary_id: salary::Id,
}

impl<Db> Query<Statement> for Service<Db>
where
    Db: Database<
            Select<By<Option<Salary>, salary::Id>>,
            Ok = Option<Salary>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Employee>, employee::Id>>,
            Ok = Option<Employee>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Position>, position::Id>>,
            Ok = Option<Position>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Option<read::salary::Statement>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Statement { salary_id }: Statement,
    ) -> Result<Self::Ok, Self::Err> {
        let db = self.database();

        let Some(salary) = db
            .execute(Select(By::<Option<Salary>, _>::new(salary_id)))
            .await
            .map_err(tracerr::wrap!())?
        else {
            return Ok(None);
        };
        let Some(employee) = db
            .execute(Select(By::<Option<Employee>, _>::new(salary.employee_id)))
            .await
            .map_err(tracerr::wrap!())?
        else {
            return Ok(None);
        };
        let Some(position) = db
            .execute(Select(By::<Option<Position>, _>::new(
                employee.position_id,
            )))
            .await
            .map_err(tracerr::wrap!())?
        else {
            return Ok(None);
        };

        Ok(Some(read::salary::Statement {
            salary,
            employee_name: employee.full_name(),
            position_title: position.title,
            base_salary: position.base_salary,
        }))
    }
}

#[cfg(test)]
mod spec {
    use common::{Clock, DateTime};
    use rust_decimal::Decimal;

    use crate::{
        command::CreateSalary, domain::salary, infra::Memory, Command as _,
        Service,
    };

    use super::Statement;

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn now() -> DateTime {
        DateTime::from_rfc3339("2024-05-31T12:00:00Z").unwrap()
    }

    #[tokio::test]
    async fn builds_statement_with_total_pay() {
        let (db, seed) = Memory::seeded(now());
        let service = Service::new(db).with_clock(Clock::Frozen(now()));
        let salary = service
            .execute(CreateSalary {
                employee_id: seed.employee.id,
                period_start: "2024-05-01".parse().unwrap(),
                period_end: "2024-05-31".parse().unwrap(),
                bonus: salary::Amount::new(decimal("200")).unwrap(),
                deduction: salary::Amount::new(decimal("50")).unwrap(),
            })
            .await
            .unwrap();

        let statement = service
            .execute(Statement {
                salary_id: salary.id,
            })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(statement.employee_name, "John Doe");
        assert_eq!(statement.position_title, seed.position.title);
        assert_eq!(statement.total_pay().amount, decimal("5150"));
        assert!(statement.to_string().ends_with("Total:       5150.00 BGN"));
    }

    #[tokio::test]
    async fn returns_nothing_for_missing_salary() {
        let (db, _) = Memory::seeded(now());

        let statement = Service::new(db)
            .execute(Statement {
                salary_id: salary::Id::new(),
            })
            .await
            .unwrap();

        assert!(statement.is_none());
    }
}
