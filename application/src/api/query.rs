//! GraphQL [`Query`]s definitions.

use juniper::graphql_object;
use service::query;

use crate::{
    api::{self, NotExistsError},
    Context, Error,
};

/// Root of all GraphQL queries.
#[derive(Clone, Copy, Debug)]
pub struct Query;

impl Query {
    /// Name of the [`tracing::Span`] for the queries.
    pub(crate) const SPAN_NAME: &'static str = "GraphQL query";
}

#[graphql_object(context = Context)]
impl Query {
    /// Lists `Employee`s by their status, ordered by their names.
    ///
    /// Only active `Employee`s are listed by default.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "employees",
            otel.name = Self::SPAN_NAME,
            status = ?status,
        ),
    )]
    pub async fn employees(
        status: Option<api::employee::StatusFilter>,
        ctx: &Context,
    ) -> Result<Vec<api::Employee>, Error> {
        api::fetch(
            ctx,
            query::employees::List::by(status.unwrap_or_default().into()),
        )
        .await
        .map(|list| list.into_iter().map(Into::into).collect())
    }

    /// Lists terminated `Employee`s, ordered by their names.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "terminatedEmployees",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn terminated_employees(
        ctx: &Context,
    ) -> Result<Vec<api::Employee>, Error> {
        Self::employees(Some(api::employee::StatusFilter::Terminated), ctx)
            .await
    }

    /// Returns the `Employee` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `EMPLOYEE_NOT_EXISTS` - the `Employee` with the specified ID does
    ///                           not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "employee",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn employee(
        id: api::employee::Id,
        ctx: &Context,
    ) -> Result<api::Employee, Error> {
        api::find(
            ctx,
            query::employee::ById::by(id.into()),
            NotExistsError::Employee,
        )
        .await
        .map(Into::into)
    }

    /// Returns the `Employee` with the specified ID along with everything it
    /// refers to.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `EMPLOYEE_NOT_EXISTS` - the `Employee` with the specified ID does
    ///                           not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "employeeDetails",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn employee_details(
        id: api::employee::Id,
        ctx: &Context,
    ) -> Result<api::employee::Details, Error> {
        api::find(
            ctx,
            query::employee::Details {
                employee_id: id.into(),
            },
            NotExistsError::Employee,
        )
        .await
        .map(Into::into)
    }

    /// Lists all the `Salary` records, latest periods first.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "salaries",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn salaries(ctx: &Context) -> Result<Vec<api::Salary>, Error> {
        api::fetch(ctx, query::salaries::List::all())
            .await
            .map(|list| list.into_iter().map(Into::into).collect())
    }

    /// Returns the `Salary` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `SALARY_NOT_EXISTS` - the `Salary` with the specified ID does not
    ///                         exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "salary",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn salary(
        id: api::salary::Id,
        ctx: &Context,
    ) -> Result<api::Salary, Error> {
        api::find(
            ctx,
            query::salary::ById::by(id.into()),
            NotExistsError::Salary,
        )
        .await
        .map(Into::into)
    }

    /// Builds the statement of the `Salary` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `SALARY_NOT_EXISTS` - the `Salary` with the specified ID does not
    ///                         exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "salaryStatement",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn salary_statement(
        id: api::salary::Id,
        ctx: &Context,
    ) -> Result<api::salary::Statement, Error> {
        api::find(
            ctx,
            query::salary::Statement {
                salary_id: id.into(),
            },
            NotExistsError::Salary,
        )
        .await
        .map(Into::into)
    }

    /// Lists all the `Company`s.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "companies",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn companies(ctx: &Context) -> Result<Vec<api::Company>, Error> {
        api::fetch(ctx, query::reference::company::List::all())
            .await
            .map(|list| list.into_iter().map(Into::into).collect())
    }

    /// Lists all the `Office`s.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "offices",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn offices(ctx: &Context) -> Result<Vec<api::Office>, Error> {
        api::fetch(ctx, query::reference::office::List::all())
            .await
            .map(|list| list.into_iter().map(Into::into).collect())
    }

    /// Lists all the `Department`s.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "departments",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn departments(
        ctx: &Context,
    ) -> Result<Vec<api::Department>, Error> {
        api::fetch(ctx, query::reference::department::List::all())
            .await
            .map(|list| list.into_iter().map(Into::into).collect())
    }

    /// Lists all the `Position`s.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "positions",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn positions(ctx: &Context) -> Result<Vec<api::Position>, Error> {
        api::fetch(ctx, query::reference::position::List::all())
            .await
            .map(|list| list.into_iter().map(Into::into).collect())
    }

    /// Lists all the `City`s.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "cities",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn cities(ctx: &Context) -> Result<Vec<api::City>, Error> {
        api::fetch(ctx, query::reference::city::List::all())
            .await
            .map(|list| list.into_iter().map(Into::into).collect())
    }

    /// Lists all the `Address`es.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "addresses",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn addresses(ctx: &Context) -> Result<Vec<api::Address>, Error> {
        api::fetch(ctx, query::reference::address::List::all())
            .await
            .map(|list| list.into_iter().map(Into::into).collect())
    }
}
