//! [`Employee`]-related definitions.

use common::DateTime;
use derive_more::{AsRef, Display, From, Into};
use juniper::{graphql_object, GraphQLObject, GraphQLScalar};
use service::{domain, query, read};

use crate::{
    api::{self, scalar, NotExistsError},
    Context, Error,
};

scalar::define_id! {
    #[doc = "Unique identifier of an `Employee`."]
    "EmployeeId" => domain::employee::Id
}

/// Person hired by a [`api::Company`].
#[derive(Clone, Debug, From)]
pub struct Employee(domain::Employee);

/// Person hired by a `Company`.
#[graphql_object(context = Context)]
impl Employee {
    /// Unique identifier of this `Employee`.
    #[must_use]
    pub fn id(&self) -> Id {
        self.0.id.into()
    }

    /// First name of this `Employee`.
    #[must_use]
    pub fn first_name(&self) -> Name {
        self.0.first_name.clone().into()
    }

    /// Middle name of this `Employee`, if any.
    #[must_use]
    pub fn middle_name(&self) -> Option<Name> {
        self.0.middle_name.clone().map(Into::into)
    }

    /// Last name of this `Employee`.
    #[must_use]
    pub fn last_name(&self) -> Name {
        self.0.last_name.clone().into()
    }

    /// Space-separated first, middle and last names of this `Employee`.
    #[must_use]
    pub fn full_name(&self) -> String {
        self.0.full_name()
    }

    /// `DateTime` when this `Employee` was hired or rehired last time.
    #[must_use]
    pub fn hired_at(&self) -> DateTime {
        self.0.hired_at.coerce()
    }

    /// Indicator whether this `Employee` is terminated.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.0.is_terminated()
    }

    /// `DateTime` when this `Employee` was terminated, if it is.
    #[must_use]
    pub fn terminated_at(&self) -> Option<DateTime> {
        self.0.terminated_at().map(|at| at.coerce())
    }

    /// Home `Address` of this `Employee`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Employee.address",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn address(&self, ctx: &Context) -> Result<api::Address, Error> {
        api::find(
            ctx,
            query::reference::address::ById::by(self.0.address_id),
            NotExistsError::Address,
        )
        .await
        .map(Into::into)
    }

    /// `Company` this `Employee` works for.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Employee.company",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn company(&self, ctx: &Context) -> Result<api::Company, Error> {
        api::find(
            ctx,
            query::reference::company::ById::by(self.0.company_id),
            NotExistsError::Company,
        )
        .await
        .map(Into::into)
    }

    /// `Office` this `Employee` works at.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Employee.office",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn office(&self, ctx: &Context) -> Result<api::Office, Error> {
        api::find(
            ctx,
            query::reference::office::ById::by(self.0.office_id),
            NotExistsError::Office,
        )
        .await
        .map(Into::into)
    }

    /// `Position` this `Employee` holds.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Employee.position",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn position(
        &self,
        ctx: &Context,
    ) -> Result<api::Position, Error> {
        api::find(
            ctx,
            query::reference::position::ById::by(self.0.position_id),
            NotExistsError::Position,
        )
        .await
        .map(Into::into)
    }

    /// `Salary` records of this `Employee` ordered by their period start.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Employee.salaries",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn salaries(
        &self,
        ctx: &Context,
    ) -> Result<Vec<api::Salary>, Error> {
        api::fetch(ctx, query::salaries::ByEmployee::by(self.0.id))
            .await
            .map(|salaries| salaries.into_iter().map(Into::into).collect())
    }
}

/// Name of an `Employee`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "EmployeeName",
    with = scalar::Via::<domain::employee::Name>,
)]
pub struct Name(domain::employee::Name);

/// `Employee` with everything it refers to, loaded at once.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(name = "EmployeeDetails", context = Context)]
pub struct Details {
    /// `Employee` itself.
    pub employee: Employee,

    /// Home `Address` of the `Employee`.
    pub address: api::Address,

    /// `City` of the home `Address`.
    pub city: api::City,

    /// `Company` the `Employee` works for.
    pub company: api::Company,

    /// `Position` the `Employee` holds.
    pub position: api::Position,

    /// `Office` the `Employee` works at.
    pub office: api::Office,

    /// `Salary` records of the `Employee` ordered by their period start.
    pub salaries: Vec<api::Salary>,
}

impl From<read::employee::Details> for Details {
    fn from(details: read::employee::Details) -> Self {
        let read::employee::Details {
            employee,
            address,
            city,
            company,
            position,
            office,
            salaries,
        } = details;
        Self {
            employee: employee.into(),
            address: address.into(),
            city: city.into(),
            company: company.into(),
            position: position.into(),
            office: office.into(),
            salaries: salaries.into_iter().map(Into::into).collect(),
        }
    }
}

/// Filter of the `Employee` list.
#[derive(Clone, Copy, Debug, Default, Eq, juniper::GraphQLEnum, PartialEq)]
#[graphql(name = "EmployeeStatusFilter")]
pub enum StatusFilter {
    /// Only `Employee`s not terminated.
    #[default]
    Active,

    /// Only terminated `Employee`s.
    Terminated,

    /// All the `Employee`s.
    All,
}

impl From<StatusFilter> for read::employee::list::Selector {
    fn from(filter: StatusFilter) -> Self {
        match filter {
            StatusFilter::Active => Self::Active,
            StatusFilter::Terminated => Self::Terminated,
            StatusFilter::All => Self::All,
        }
    }
}
