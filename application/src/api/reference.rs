//! Reference data [`Employee`]s are hired with.
//!
//! [`Employee`]: api::Employee

use common::Money;
use derive_more::From;
use juniper::graphql_object;
use service::{domain, query};

use crate::{
    api::{self, scalar, NotExistsError},
    Context, Error,
};

pub mod city {
    //! [`City`]-related definitions.
    //!
    //! [`City`]: super::City

    super::scalar::define_id! {
        #[doc = "Unique identifier of a `City`."]
        "CityId" => service::domain::city::Id
    }
}

pub mod company {
    //! [`Company`]-related definitions.
    //!
    //! [`Company`]: super::Company

    super::scalar::define_id! {
        #[doc = "Unique identifier of a `Company`."]
        "CompanyId" => service::domain::company::Id
    }
}

pub mod department {
    //! [`Department`]-related definitions.
    //!
    //! [`Department`]: super::Department

    super::scalar::define_id! {
        #[doc = "Unique identifier of a `Department`."]
        "DepartmentId" => service::domain::department::Id
    }
}

pub mod office {
    //! [`Office`]-related definitions.
    //!
    //! [`Office`]: super::Office

    super::scalar::define_id! {
        #[doc = "Unique identifier of an `Office`."]
        "OfficeId" => service::domain::office::Id
    }
}

pub mod position {
    //! [`Position`]-related definitions.
    //!
    //! [`Position`]: super::Position

    super::scalar::define_id! {
        #[doc = "Unique identifier of a `Position`."]
        "PositionId" => service::domain::position::Id
    }
}

/// City an [`api::Address`] is located in.
#[derive(Clone, Debug, From)]
pub struct City(domain::City);

/// City an `Address` is located in.
#[graphql_object(context = Context)]
impl City {
    /// Unique identifier of this `City`.
    #[must_use]
    pub fn id(&self) -> city::Id {
        self.0.id.into()
    }

    /// Name of this `City`.
    #[must_use]
    pub fn name(&self) -> &str {
        self.0.name.as_ref()
    }
}

/// Company [`api::Employee`]s work for.
#[derive(Clone, Debug, From)]
pub struct Company(domain::Company);

/// Company `Employee`s work for.
#[graphql_object(context = Context)]
impl Company {
    /// Unique identifier of this `Company`.
    #[must_use]
    pub fn id(&self) -> company::Id {
        self.0.id.into()
    }

    /// Name of this `Company`.
    #[must_use]
    pub fn name(&self) -> &str {
        self.0.name.as_ref()
    }
}

/// Department of a [`Company`].
#[derive(Clone, Debug, From)]
pub struct Department(domain::Department);

/// Department of a `Company`.
#[graphql_object(context = Context)]
impl Department {
    /// Unique identifier of this `Department`.
    #[must_use]
    pub fn id(&self) -> department::Id {
        self.0.id.into()
    }

    /// Name of this `Department`.
    #[must_use]
    pub fn name(&self) -> &str {
        self.0.name.as_ref()
    }

    /// `Company` this `Department` belongs to.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Department.company",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn company(&self, ctx: &Context) -> Result<Company, Error> {
        api::find(
            ctx,
            query::reference::company::ById::by(self.0.company_id),
            NotExistsError::Company,
        )
        .await
        .map(Company)
    }
}

/// Office of a [`Company`] [`api::Employee`]s work at.
#[derive(Clone, Debug, From)]
pub struct Office(domain::Office);

/// Office of a `Company` `Employee`s work at.
#[graphql_object(context = Context)]
impl Office {
    /// Unique identifier of this `Office`.
    #[must_use]
    pub fn id(&self) -> office::Id {
        self.0.id.into()
    }

    /// Name of this `Office`.
    #[must_use]
    pub fn name(&self) -> &str {
        self.0.name.as_ref()
    }

    /// `Company` this `Office` belongs to.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Office.company",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn company(&self, ctx: &Context) -> Result<Company, Error> {
        api::find(
            ctx,
            query::reference::company::ById::by(self.0.company_id),
            NotExistsError::Company,
        )
        .await
        .map(Company)
    }

    /// `Address` of this `Office`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Office.address",
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
}

/// Position an [`api::Employee`] is hired for.
#[derive(Clone, Debug, From)]
pub struct Position(domain::Position);

/// Position an `Employee` is hired for.
#[graphql_object(context = Context)]
impl Position {
    /// Unique identifier of this `Position`.
    #[must_use]
    pub fn id(&self) -> position::Id {
        self.0.id.into()
    }

    /// Title of this `Position`.
    #[must_use]
    pub fn title(&self) -> &str {
        self.0.title.as_ref()
    }

    /// Monthly base salary of this `Position`.
    #[must_use]
    pub fn base_salary(&self) -> Money {
        self.0.base_salary
    }

    /// `Department` this `Position` belongs to.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Position.department",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn department(
        &self,
        ctx: &Context,
    ) -> Result<Department, Error> {
        api::find(
            ctx,
            query::reference::department::ById::by(self.0.department_id),
            NotExistsError::Department,
        )
        .await
        .map(Department)
    }
}

#[cfg(test)]
mod spec {
    use service::domain;
    use uuid::Uuid;

    use super::city;

    #[test]
    fn id_converts_both_ways() {
        let uuid = Uuid::new_v4();
        let domain_id = domain::city::Id::from(uuid);

        let id = city::Id::from(domain_id);

        assert_eq!(domain::city::Id::from(id), domain_id);
        assert_eq!(id.to_string(), uuid.to_string());
    }
}
