//! [`Address`] definitions.

use std::{str::FromStr, sync::LazyLock};

use common::define_kind;
use derive_more::{AsRef, Display};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use regex::Regex;

use crate::domain::city;
#[cfg(doc)]
use crate::domain::{City, Employee, Office};

/// Postal address of an [`Office`] or an [`Employee`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Address {
    /// ID of this [`Address`].
    pub id: Id,

    /// [`StreetName`] of this [`Address`].
    pub street_name: StreetName,

    /// [`StreetNumber`] of this [`Address`].
    pub street_number: StreetNumber,

    /// [`Neighborhood`] of this [`Address`], if any.
    pub neighborhood: Option<Neighborhood>,

    /// [`PostalCode`] of this [`Address`], if any.
    pub postal_code: Option<PostalCode>,

    /// ID of the [`City`] this [`Address`] is located in.
    pub city_id: city::Id,

    /// [`Kind`] of this [`Address`].
    pub kind: Kind,
}

define_id!(Address);

define_kind! {
    #[doc = "Kind of an [`Address`]."]
    enum Kind {
        #[doc = "Address of an [`Office`]."]
        Office = 1,

        #[doc = "Home address of an [`Employee`]."]
        Employee = 2,
    }
}

define_text! {
    #[doc = "Street name of an [`Address`]."]
    StreetName(max = 100)
}

define_text! {
    #[doc = "Street number of an [`Address`]."]
    StreetNumber(max = 15)
}

define_text! {
    #[doc = "Neighborhood of an [`Address`]."]
    Neighborhood(max = 30)
}

/// Postal code of an [`Address`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct PostalCode(String);

impl PostalCode {
    /// Creates a new [`PostalCode`] if the given `code` is valid.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Option<Self> {
        let code = code.into();
        Self::check(&code).then_some(Self(code))
    }

    /// Checks whether the given `code` is a valid [`PostalCode`].
    fn check(code: impl AsRef<str>) -> bool {
        /// Regular expression checking [`PostalCode`] invariants:
        /// - Must be between 1 and 20 characters long;
        /// - Must consist of letters, digits, spaces and hyphens;
        /// - Must start and end with a letter or a digit.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[\p{L}\p{N}](?:[\p{L}\p{N} \-]{0,18}[\p{L}\p{N}])?$")
                .expect("valid regex")
        });

        REGEX.is_match(code.as_ref())
    }
}

impl FromStr for PostalCode {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `PostalCode`")
    }
}

#[cfg(test)]
mod spec {
    use super::{Kind, PostalCode, StreetNumber};

    #[test]
    fn postal_code() {
        assert!(PostalCode::new("1000").is_some());
        assert!(PostalCode::new("SW1A 1AA").is_some());
        assert!(PostalCode::new("123-4567").is_some());
        assert!(PostalCode::new("a".repeat(20)).is_some());

        assert!(PostalCode::new("").is_none());
        assert!(PostalCode::new(" 1000").is_none());
        assert!(PostalCode::new("1000-").is_none());
        assert!(PostalCode::new("10#00").is_none());
        assert!(PostalCode::new("a".repeat(21)).is_none());
    }

    #[test]
    fn street_number() {
        assert!(StreetNumber::new("42A").is_some());
        assert!(StreetNumber::new("1".repeat(16)).is_none());
    }

    #[test]
    fn kind_from_u8() {
        assert_eq!(Kind::try_from(1), Ok(Kind::Office));
        assert_eq!(Kind::try_from(2), Ok(Kind::Employee));
        assert_eq!(Kind::try_from(3), Err(3));
    }
}
