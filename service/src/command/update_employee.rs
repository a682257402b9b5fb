//! [`Command`] for overwriting an [`Employee`].

use common::operations::{
    By, Commit, Lock, Select, Transact, Transacted, Update,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::{Company, Office, Position};
use crate::{
    domain::{address, company, employee, office, position, Address, Employee},
    infra::{database, Database},
    Service,
};

use super::{create_employee::NewAddress, Command};

/// [`Command`] for overwriting all the data of an existing [`Employee`].
///
/// Referenced entities are not checked to exist, so a dangling ID fails
/// on the [`Database`] level.
#[derive(Clone, Debug)]
pub struct UpdateEmployee {
    /// ID of the [`Employee`] to be updated.
    pub employee_id: employee::Id,

    /// New first [`employee::Name`].
    pub first_name: employee::Name,

    /// New middle [`employee::Name`], if any.
    pub middle_name: Option<employee::Name>,

    /// New last [`employee::Name`].
    pub last_name: employee::Name,

    /// ID of the new [`Company`].
    pub company_id: company::Id,

    /// ID of the new [`Position`].
    pub position_id: position::Id,

    /// ID of the new [`Office`].
    pub office_id: office::Id,

    /// New hiring date and time.
    pub hired_at: employee::HiringDateTime,

    /// New termination date and time, if the [`Employee`] is terminated.
    pub terminated_at: Option<employee::TerminationDateTime>,

    /// New home [`Address`] data.
    pub address: NewAddress,

    /// New [`address::Kind`] of the home [`Address`].
    pub address_kind: address::Kind,
}

impl<Db> Command<UpdateEmployee> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Lock<By<Employee, employee::Id>>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Employee>, employee::Id>>,
            Ok = Option<Employee>,
            Err = Traced<database::Error>,
        > + Database<Update<Address>, Err = Traced<database::Error>>
        + Database<Update<Employee>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Employee;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateEmployee,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateEmployee {
            employee_id,
            first_name,
            middle_name,
            last_name,
            company_id,
            position_id,
            office_id,
            hired_at,
            terminated_at,
            address,
            address_kind,
        } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

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

        let address = address.into_address(employee.address_id, address_kind);
        let employee = Employee {
            first_name,
            middle_name,
            last_name,
            position_id,
            office_id,
            company_id,
            hired_at,
            status: terminated_at.into(),
            ..employee
        };

        tx.execute(Update(address))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Update(employee.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        log::debug!("`Employee(id: {employee_id})` updated");

        Ok(employee)
    }
}

/// Error of [`UpdateEmployee`] [`Command`] execution.
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
