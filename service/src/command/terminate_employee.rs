//! [`Command`] for terminating an [`Employee`].

use common::operations::{
    By, Commit, Lock, Select, Transact, Transacted, Update,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{employee, Employee},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for terminating an [`Employee`].
///
/// Terminating an already terminated [`Employee`] re-stamps its termination
/// date and time.
#[derive(Clone, Copy, Debug)]
pub struct TerminateEmployee {
    /// ID of the [`Employee`] to be terminated.
    pub employee_id: employee::Id,
}

impl<Db> Command<TerminateEmployee> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Lock<By<Employee, employee::Id>>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Employee>, employee::Id>>,
            Ok = Option<Employee>,
            Err = Traced<database::Error>,
        > + Database<Update<Employee>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Employee;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        TerminateEmployee { employee_id }: TerminateEmployee,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        // Avoid concurrent lifecycle changes of the same `Employee`.
        tx.execute(Lock(By::new(employee_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        let mut employee = tx
            .execute(Select(By::<Option<Employee>, _>::new(employee_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::EmployeeNotExists(employee_id))
            .map_err(tracerr::wrap!())?;

        employee.status = employee::Status::Terminated {
            at: self.clock().now().coerce(),
        };

        tx.execute(Update(employee.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        log::info!("`Employee(id: {employee_id})` terminated");

        Ok(employee)
    }
}

/// Error of [`TerminateEmployee`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Employee`] with the provided ID does not exist.
    #[display("`Employee(id: {_0})` does not exist")]
    EmployeeNotExists(#[error(not(source))] employee::Id),
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use common::{Clock, DateTime};

    use crate::{
        domain::employee, infra::Memory, read, Command as _, Service,
    };

    use super::{ExecutionError, TerminateEmployee};

    fn now() -> DateTime {
        DateTime::from_rfc3339("2024-05-31T12:00:00Z").unwrap()
    }

    #[tokio::test]
    async fn terminates_employee() {
        let (db, seed) = Memory::seeded(now() - Duration::from_secs(86_400));
        let service = Service::new(db.clone()).with_clock(Clock::Frozen(now()));

        let employee = service
            .execute(TerminateEmployee {
                employee_id: seed.employee.id,
            })
            .await
            .unwrap();

        assert_eq!(
            employee.status,
            employee::Status::Terminated { at: now().coerce() },
        );
        assert_eq!(employee.hired_at, seed.employee.hired_at);
        assert_eq!(db.snapshot().employees[&employee.id], employee);
        assert!(!read::employee::list::Selector::Active.matches(&employee));
    }

    #[tokio::test]
    async fn re_stamps_termination_of_terminated_employee() {
        let (db, seed) = Memory::seeded(now());
        let later = now() + Duration::from_secs(3600);

        _ = Service::new(db.clone())
            .with_clock(Clock::Frozen(now()))
            .execute(TerminateEmployee {
                employee_id: seed.employee.id,
            })
            .await
            .unwrap();
        let employee = Service::new(db)
            .with_clock(Clock::Frozen(later))
            .execute(TerminateEmployee {
                employee_id: seed.employee.id,
            })
            .await
            .unwrap();

        assert_eq!(employee.terminated_at(), Some(later.coerce()));
    }

    #[tokio::test]
    async fn fails_on_missing_employee() {
        let (db, _) = Memory::seeded(now());
        let missing = employee::Id::new();

        let err = Service::new(db)
            .execute(TerminateEmployee {
                employee_id: missing,
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::EmployeeNotExists(id) if *id == missing,
        ));
    }
}
