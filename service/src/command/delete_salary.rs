//! [`Command`] for deleting a [`Salary`].

use common::operations::{By, Commit, Delete, Select, Transact, Transacted};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{salary, Salary},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for permanently deleting a [`Salary`].
#[derive(Clone, Copy, Debug)]
pub struct DeleteSalary {
    /// ID of the [`Salary`] to be deleted.
    pub salary_id: salary::Id,
}

impl<Db> Command<DeleteSalary> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Salary>, salary::Id>>,
            Ok = Option<Salary>,
            Err = Traced<database::Error>,
        > + Database<
            Delete<By<Salary, salary::Id>>,
            Err = Traced<database::Error>,
        > + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Salary;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        DeleteSalary { salary_id }: DeleteSalary,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let salary = tx
            .execute(Select(By::<Option<Salary>, _>::new(salary_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::SalaryNotExists(salary_id))
            .map_err(tracerr::wrap!())?;

        tx.execute(Delete(By::<Salary, _>::new(salary_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        log::info!(
            "`Salary(id: {salary_id})` of `Employee(id: {})` deleted",
            salary.employee_id,
        );

        Ok(salary)
    }
}

/// Error of [`DeleteSalary`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Salary`] with the provided ID does not exist.
    #[display("`Salary(id: {_0})` does not exist")]
    SalaryNotExists(#[error(not(source))] salary::Id),
}

#[cfg(test)]
mod spec {
    use common::{Clock, DateTime};

    use crate::{
        command::CreateSalary, domain::salary, infra::Memory, Command as _,
        Service,
    };

    use super::{DeleteSalary, ExecutionError};

    fn now() -> DateTime {
        DateTime::from_rfc3339("2024-05-31T12:00:00Z").unwrap()
    }

    #[tokio::test]
    async fn deletes_salary_and_frees_its_period() {
        let (db, seed) = Memory::seeded(now());
        let service = Service::new(db.clone()).with_clock(Clock::Frozen(now()));
        let create = CreateSalary {
            employee_id: seed.employee.id,
            period_start: "2024-01-01".parse().unwrap(),
            period_end: "2024-01-31".parse().unwrap(),
            bonus: salary::Amount::ZERO,
            deduction: salary::Amount::ZERO,
        };
        let salary = service.execute(create).await.unwrap();

        let deleted = service
            .execute(DeleteSalary {
                salary_id: salary.id,
            })
            .await
            .unwrap();

        assert_eq!(deleted, salary);
        assert!(db.snapshot().salaries.is_empty());
        _ = service.execute(create).await.unwrap();
    }

    #[tokio::test]
    async fn fails_on_missing_salary() {
        let (db, _) = Memory::seeded(now());
        let missing = salary::Id::new();

        let err = Service::new(db)
            .execute(DeleteSalary { salary_id: missing })
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::SalaryNotExists(id) if *id == missing,
        ));
    }
}
