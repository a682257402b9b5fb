//! GraphQL API definitions.

pub mod address;
pub mod employee;
mod mutation;
mod query;
pub mod reference;
pub mod salary;
pub mod scalar;

use juniper::EmptySubscription;
use service::{infra::database, Query as _};
use tracerr::Traced;

use crate::{define_error, AsError, Context, Error, Service};

pub use self::{
    address::Address,
    employee::Employee,
    mutation::Mutation,
    query::Query,
    reference::{City, Company, Department, Office, Position},
    salary::Salary,
};

/// GraphQL schema.
pub type Schema =
    juniper::RootNode<'static, Query, Mutation, EmptySubscription<Context>>;

define_error! {
    enum NotExistsError {
        #[code = "ADDRESS_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Address` with the provided ID does not exist"]
        Address,

        #[code = "CITY_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`City` with the provided ID does not exist"]
        City,

        #[code = "COMPANY_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Company` with the provided ID does not exist"]
        Company,

        #[code = "DEPARTMENT_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Department` with the provided ID does not exist"]
        Department,

        #[code = "EMPLOYEE_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Employee` with the provided ID does not exist"]
        Employee,

        #[code = "OFFICE_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Office` with the provided ID does not exist"]
        Office,

        #[code = "POSITION_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Position` with the provided ID does not exist"]
        Position,

        #[code = "SALARY_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Salary` with the provided ID does not exist"]
        Salary,
    }
}

/// Executes the provided read-only `query`.
///
/// # Errors
///
/// If the [`database`] fails.
async fn fetch<Q, T>(ctx: &Context, query: Q) -> Result<T, Error>
where
    Service: service::Query<Q, Ok = T, Err = Traced<database::Error>>,
{
    ctx.service()
        .execute(query)
        .await
        .map_err(AsError::into_error)
        .map_err(ctx.error())
}

/// Executes the provided read-only `query` of a single entity.
///
/// # Errors
///
/// With the provided [`NotExistsError`] if there is no such entity, or if
/// the [`database`] fails.
async fn find<Q, T>(
    ctx: &Context,
    query: Q,
    missing: NotExistsError,
) -> Result<T, Error>
where
    Service: service::Query<
        Q,
        Ok = Option<T>,
        Err = Traced<database::Error>,
    >,
{
    fetch(ctx, query)
        .await?
        .ok_or_else(|| missing.into())
        .map_err(ctx.error())
}
