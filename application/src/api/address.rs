//! [`Address`]-related definitions.

use derive_more::{AsRef, Display, From, Into};
use juniper::{graphql_object, GraphQLEnum, GraphQLInputObject, GraphQLScalar};
use service::{command, domain, query};

use crate::{
    api::{self, reference::city, scalar, NotExistsError},
    Context, Error,
};

scalar::define_id! {
    #[doc = "Unique identifier of an `Address`."]
    "AddressId" => domain::address::Id
}

/// Postal address of an [`api::Office`] or an [`api::Employee`].
#[derive(Clone, Debug, From)]
pub struct Address(domain::Address);

/// Postal address of an `Office` or an `Employee`.
#[graphql_object(context = Context)]
impl Address {
    /// Unique identifier of this `Address`.
    #[must_use]
    pub fn id(&self) -> Id {
        self.0.id.into()
    }

    /// Street name of this `Address`.
    #[must_use]
    pub fn street_name(&self) -> StreetName {
        self.0.street_name.clone().into()
    }

    /// Street number of this `Address`.
    #[must_use]
    pub fn street_number(&self) -> StreetNumber {
        self.0.street_number.clone().into()
    }

    /// Neighborhood of this `Address`, if any.
    #[must_use]
    pub fn neighborhood(&self) -> Option<Neighborhood> {
        self.0.neighborhood.clone().map(Into::into)
    }

    /// Postal code of this `Address`, if any.
    #[must_use]
    pub fn postal_code(&self) -> Option<PostalCode> {
        self.0.postal_code.clone().map(Into::into)
    }

    /// Kind of this `Address`.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.0.kind.into()
    }

    /// `City` this `Address` is located in.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Address.city",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn city(&self, ctx: &Context) -> Result<api::City, Error> {
        api::find(
            ctx,
            query::reference::city::ById::by(self.0.city_id),
            NotExistsError::City,
        )
        .await
        .map(Into::into)
    }
}

/// Kind of an `Address`.
#[derive(Clone, Copy, Debug, Eq, GraphQLEnum, PartialEq)]
#[graphql(name = "AddressKind")]
pub enum Kind {
    /// Address of an `Office`.
    Office,

    /// Home address of an `Employee`.
    Employee,
}

impl From<domain::address::Kind> for Kind {
    fn from(kind: domain::address::Kind) -> Self {
        match kind {
            domain::address::Kind::Office => Self::Office,
            domain::address::Kind::Employee => Self::Employee,
        }
    }
}

impl From<Kind> for domain::address::Kind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Office => Self::Office,
            Kind::Employee => Self::Employee,
        }
    }
}

/// Street name of an `Address`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "StreetName",
    with = scalar::Via::<domain::address::StreetName>,
)]
pub struct StreetName(domain::address::StreetName);

/// Street number of an `Address`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "StreetNumber",
    with = scalar::Via::<domain::address::StreetNumber>,
)]
pub struct StreetNumber(domain::address::StreetNumber);

/// Neighborhood of an `Address`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "Neighborhood",
    with = scalar::Via::<domain::address::Neighborhood>,
)]
pub struct Neighborhood(domain::address::Neighborhood);

/// Postal code of an `Address`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "PostalCode",
    with = scalar::Via::<domain::address::PostalCode>,
)]
pub struct PostalCode(domain::address::PostalCode);

/// Home `Address` of an `Employee` to be stored.
#[derive(Clone, Debug, GraphQLInputObject)]
#[graphql(name = "AddressInput")]
pub struct Input {
    /// Street name of the `Address`.
    pub street_name: StreetName,

    /// Street number of the `Address`.
    pub street_number: StreetNumber,

    /// Neighborhood of the `Address`, if any.
    pub neighborhood: Option<Neighborhood>,

    /// Postal code of the `Address`, if any.
    pub postal_code: Option<PostalCode>,

    /// ID of the `City` the `Address` is located in.
    pub city_id: city::Id,
}

impl From<Input> for command::create_employee::NewAddress {
    fn from(input: Input) -> Self {
        let Input {
            street_name,
            street_number,
            neighborhood,
            postal_code,
            city_id,
        } = input;
        Self {
            street_name: street_name.into(),
            street_number: street_number.into(),
            neighborhood: neighborhood.map(Into::into),
            postal_code: postal_code.map(Into::into),
            city_id: city_id.into(),
        }
    }
}

#[cfg(test)]
mod spec {
    use service::domain;

    use super::Kind;

    #[test]
    fn kind_maps_both_ways() {
        for kind in [Kind::Office, Kind::Employee] {
            assert_eq!(Kind::from(domain::address::Kind::from(kind)), kind);
        }
    }
}
