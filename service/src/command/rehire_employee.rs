//! [`Command`] for rehiring a terminated [`Employee`].

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

/// [`Command`] for rehiring a terminated [`Employee`].
#[derive(Clone, Copy, Debug)]
pub struct RehireEmployee {
    /// ID of the [`Employee`] to be rehired.
    pub employee_id: employee::Id,
}

impl<Db> Command<RehireEmployee> for Service<Db>
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
        RehireEmployee { employee_id }: RehireEmployee,
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

        if !employee.is_terminated() {
            return Err(tracerr::new!(E::EmployeeNotTerminated(employee_id)));
        }

        employee.status = employee::Status::Active;
        employee.hired_at = self.clock().now().coerce();

        tx.execute(Update(employee.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        log::info!("`Employee(id: {employee_id})` rehired");

        Ok(employee)
    }
}

/// Error of [`RehireEmployee`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Employee`] is not terminated, so cannot be rehired.
    #[display("`Employee(id: {_0})` is not terminated")]
    EmployeeNotTerminated(#[error(not(source))] employee::Id),

    /// [`Employee`] with the provided ID does not exist.
    #[display("`Employee(id: {_0})` does not exist")]
    EmployeeNotExists(#[error(not(source))] employee::Id),
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use common::{Clock, DateTime};

    use crate::{
        command::TerminateEmployee, domain::employee, infra::Memory,
        Command as _, Service,
    };

    use super::{ExecutionError, RehireEmployee};

    fn now() -> DateTime {
        DateTime::from_rfc3339("2024-05-31T12:00:00Z").unwrap()
    }

    #[tokio::test]
    async fn terminate_then_rehire() {
        let hired_at = now() - Duration::from_secs(2 * 365 * 86_400);
        let terminated_at = now() - Duration::from_secs(30 * 86_400);
        let (db, seed) = Memory::seeded(hired_at);

        _ = Service::new(db.clone())
            .with_clock(Clock::Frozen(terminated_at))
            .execute(TerminateEmployee {
                employee_id: seed.employee.id,
            })
            .await
            .unwrap();
        let employee = Service::new(db.clone())
            .with_clock(Clock::Frozen(now()))
            .execute(RehireEmployee {
                employee_id: seed.employee.id,
            })
            .await
            .unwrap();

        assert_eq!(employee.status, employee::Status::Active);
        assert_eq!(employee.terminated_at(), None);
        assert_eq!(employee.hired_at, now().coerce());
        assert_eq!(db.snapshot().employees[&employee.id], employee);
    }

    #[tokio::test]
    async fn refuses_active_employee_without_changes() {
        let (db, seed) = Memory::seeded(now() - Duration::from_secs(86_400));

        let err = Service::new(db.clone())
            .with_clock(Clock::Frozen(now()))
            .execute(RehireEmployee {
                employee_id: seed.employee.id,
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::EmployeeNotTerminated(id)
                if *id == seed.employee.id,
        ));
        assert_eq!(db.snapshot().employees[&seed.employee.id], seed.employee);
    }

    #[tokio::test]
    async fn fails_on_missing_employee() {
        let (db, _) = Memory::seeded(now());
        let missing = employee::Id::new();

        let err = Service::new(db)
            .execute(RehireEmployee {
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
