//! [`Command`] for assigning a new [`Salary`] to an [`Employee`].

use common::{
    operations::{By, Commit, Insert, Lock, Select, Transact, Transacted},
    Date,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{employee, salary, Employee, Salary},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for assigning a new [`Salary`] to an [`Employee`].
#[derive(Clone, Copy, Debug)]
pub struct CreateSalary {
    /// ID of the [`Employee`] the [`Salary`] is paid to.
    pub employee_id: employee::Id,

    /// First day of the [`salary::Period`].
    pub period_start: Date,

    /// Last day of the [`salary::Period`].
    pub period_end: Date,

    /// Bonus on top of the base salary.
    pub bonus: salary::Amount,

    /// Deduction from the base salary.
    pub deduction: salary::Amount,
}

impl<Db> Command<CreateSalary> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Lock<By<Employee, employee::Id>>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Employee>, employee::Id>>,
            Ok = Option<Employee>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Salary>, employee::Id>>,
            Ok = Vec<Salary>,
            Err = Traced<database::Error>,
        > + Database<Insert<Salary>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Salary;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CreateSalary) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateSalary {
            employee_id,
            period_start,
            period_end,
            bonus,
            deduction,
        } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        // Serialize concurrent `Salary` assignments to the same `Employee`,
        // so the overlap check below sees all of them.
        tx.execute(Lock(By::new(employee_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        let employee = tx
            .execute(Select(By::<Option<Employee>, _>::new(employee_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::EmployeeNotExists(employee_id))
            .map_err(tracerr::wrap!())?;

        let period = salary::Period::new(period_start, period_end)
            .ok_or(E::PeriodStartAfterEnd {
                start: period_start,
                end: period_end,
            })
            .map_err(tracerr::wrap!())?;

        let today = self.clock().today();
        if period.is_after(today) {
            return Err(tracerr::new!(E::PeriodInFuture { today }));
        }

        let existing = tx
            .execute(Select(By::<Vec<Salary>, _>::new(employee_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if let Some(s) =
            existing.iter().find(|s| s.period.collides_with(&period))
        {
            return Err(tracerr::new!(E::PeriodOverlaps(s.id)));
        }

        if employee.is_terminated() {
            return Err(tracerr::new!(E::EmployeeTerminated(employee_id)));
        }

        let salary = Salary {
            id: salary::Id::new(),
            employee_id,
            period,
            bonus,
            deduction,
        };

        tx.execute(Insert(salary.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        log::info!(
            "`Salary(id: {})` assigned to `Employee(id: {employee_id})` \
             for {period_start}..={period_end}",
            salary.id,
        );

        Ok(salary)
    }
}

/// Error of [`CreateSalary`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Employee`] with the provided ID does not exist.
    #[display("`Employee(id: {_0})` does not exist")]
    EmployeeNotExists(#[error(not(source))] employee::Id),

    /// [`Employee`] is terminated.
    #[display("`Employee(id: {_0})` is terminated")]
    EmployeeTerminated(#[error(not(source))] employee::Id),

    /// [`salary::Period`] ends after today.
    #[display("`salary::Period` cannot end in the future, today is {today}")]
    PeriodInFuture {
        /// Current date.
        today: Date,
    },

    /// [`salary::Period`] overlaps with another [`Salary`].
    #[display("`salary::Period` overlaps with `Salary(id: {_0})`")]
    PeriodOverlaps(#[error(not(source))] salary::Id),

    /// [`salary::Period`] starts after it ends.
    #[display("`salary::Period` cannot start at {start} after {end}")]
    PeriodStartAfterEnd {
        /// Start of the period.
        start: Date,

        /// End of the period.
        end: Date,
    },
}

impl ExecutionError {
    /// Returns the [`salary::Violation`] this [`ExecutionError`] represents,
    /// if any.
    #[must_use]
    pub fn violation(&self) -> Option<salary::Violation> {
        use salary::Violation as V;

        match self {
            Self::PeriodStartAfterEnd { .. } => Some(V::StartAfterEnd),
            Self::PeriodInFuture { .. } => Some(V::FuturePeriod),
            Self::PeriodOverlaps(_) => Some(V::Overlap),
            Self::EmployeeTerminated(_) => Some(V::TerminatedEmployee),
            Self::Db(_) | Self::EmployeeNotExists(_) => None,
        }
    }
}
