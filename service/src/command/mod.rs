//! [`Command`] definition.

pub mod create_employee;
pub mod create_salary;
pub mod delete_salary;
pub mod rehire_employee;
pub mod terminate_employee;
pub mod update_employee;
pub mod update_salary;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    create_employee::CreateEmployee, create_salary::CreateSalary,
    delete_salary::DeleteSalary, rehire_employee::RehireEmployee,
    terminate_employee::TerminateEmployee, update_employee::UpdateEmployee,
    update_salary::UpdateSalary,
};
