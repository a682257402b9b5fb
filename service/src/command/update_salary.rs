//! [`Command`] for updating an existing [`Salary`].

use common::{
    operations::{By, Commit, Lock, Select, Transact, Transacted, Update},
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

/// [`Command`] for updating the [`salary::Period`] and amounts of an
/// existing [`Salary`].
///
/// Unlike [`CreateSalary`], neither future [`salary::Period`]s nor
/// terminated [`Employee`]s are rejected.
///
/// [`CreateSalary`]: super::CreateSalary
#[derive(Clone, Copy, Debug)]
pub struct UpdateSalary {
    /// ID of the [`Salary`] to be updated.
    pub salary_id: salary::Id,

    /// New first day of the [`salary::Period`].
    pub period_start: Date,

    /// New last day of the [`salary::Period`].
    pub period_end: Date,

    /// New bonus on top of the base salary.
    pub bonus: salary::Amount,

    /// New deduction from the base salary.
    pub deduction: salary::Amount,
}

impl<Db> Command<UpdateSalary> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Salary>, salary::Id>>,
            Ok = Option<Salary>,
            Err = Traced<database::Error>,
        > + Database<
            Lock<By<Employee, employee::Id>>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Salary>, employee::Id>>,
            Ok = Vec<Salary>,
            Err = Traced<database::Error>,
        > + Database<Update<Salary>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Salary;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: UpdateSalary) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateSalary {
            salary_id,
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

        let salary = tx
            .execute(Select(By::<Option<Salary>, _>::new(salary_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::SalaryNotExists(salary_id))
            .map_err(tracerr::wrap!())?;

        tx.execute(Lock(By::new(salary.employee_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        let period = salary::Period::new(period_start, period_end)
            .ok_or(E::PeriodStartAfterEnd {
                start: period_start,
                end: period_end,
            })
            .map_err(tracerr::wrap!())?;

        let others = tx
            .execute(Select(By::<Vec<Salary>, _>::new(salary.employee_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if let Some(s) = others
            .iter()
            .filter(|s| s.id != salary_id)
            .find(|s| s.period.collides_with(&period))
        {
            return Err(tracerr::new!(E::PeriodOverlaps(s.id)));
        }

        let salary = Salary {
            period,
            bonus,
            deduction,
            ..salary
        };

        tx.execute(Update(salary.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        log::debug!("`Salary(id: {salary_id})` updated");

        Ok(salary)
    }
}

/// Error of [`UpdateSalary`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

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

    /// [`Salary`] with the provided ID does not exist.
    #[display("`Salary(id: {_0})` does not exist")]
    SalaryNotExists(#[error(not(source))] salary::Id),
}

impl ExecutionError {
    /// Returns the [`salary::Violation`] this [`ExecutionError`] represents,
    /// if any.
    #[must_use]
    pub fn violation(&self) -> Option<salary::Violation> {
        use salary::Violation as V;

        match self {
            Self::PeriodStartAfterEnd { .. } => Some(V::StartAfterEnd),
            Self::PeriodOverlaps(_) => Some(V::Overlap),
            Self::Db(_) | Self::SalaryNotExists(_) => None,
        }
    }
}
