//! Domain definitions.

/// Defines a random UUID identifier of the given entity.
macro_rules! define_id {
    ($entity:ident) => {
        #[doc = ::core::concat!(
            "ID of a [`", ::core::stringify!($entity), "`].",
        )]
        #[derive(
            Clone,
            Copy,
            Debug,
            Default,
            ::serde::Deserialize,
            ::derive_more::Display,
            Eq,
            ::derive_more::From,
            ::derive_more::FromStr,
            Hash,
            ::derive_more::Into,
            PartialEq,
            ::serde::Serialize,
        )]
        #[cfg_attr(
            feature = "postgres",
            derive(::postgres_types::ToSql, ::postgres_types::FromSql),
            postgres(transparent)
        )]
        pub struct Id(::uuid::Uuid);

        impl Id {
            /// Creates a new random [`Id`].
            #[must_use]
            pub fn new() -> Self {
                Self(::uuid::Uuid::new_v4())
            }
        }
    };
}

/// Defines a trimmed non-empty text bounded by the given number of
/// characters.
macro_rules! define_text {
    (
        #[doc = $doc:literal]
        $name:ident(max = $max:literal)
    ) => {
        #[doc = $doc]
        #[derive(
            ::derive_more::AsRef,
            Clone,
            Debug,
            ::derive_more::Display,
            Eq,
            Hash,
            PartialEq,
        )]
        #[as_ref(str)]
        #[cfg_attr(
            feature = "postgres",
            derive(::postgres_types::FromSql, ::postgres_types::ToSql),
            postgres(transparent)
        )]
        pub struct $name(String);

        impl $name {
            #[doc = ::core::concat!(
                "Maximum number of characters in a [`",
                ::core::stringify!($name),
                "`].",
            )]
            pub const MAX_LEN: usize = $max;

            #[doc = ::core::concat!(
                "Creates a new [`",
                ::core::stringify!($name),
                "`] if the given `value` is valid.",
            )]
            #[must_use]
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let value = value.into();
                Self::check(&value).then_some(Self(value))
            }

            /// Checks whether the given `value` is trimmed, non-empty and
            /// fits into [`Self::MAX_LEN`] characters.
            fn check(value: impl AsRef<str>) -> bool {
                let value = value.as_ref();
                value.trim() == value
                    && !value.is_empty()
                    && value.chars().count() <= Self::MAX_LEN
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = &'static str;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s).ok_or(::core::concat!(
                    "invalid `",
                    ::core::stringify!($name),
                    "`",
                ))
            }
        }
    };
}

pub mod address;
pub mod city;
pub mod company;
pub mod department;
pub mod employee;
pub mod office;
pub mod position;
pub mod salary;

pub use self::{
    address::Address, city::City, company::Company, department::Department,
    employee::Employee, office::Office, position::Position, salary::Salary,
};

#[cfg(test)]
mod spec {
    use super::{city, employee};

    #[test]
    fn text_is_trimmed_and_bounded() {
        assert!(employee::Name::new("Ivan").is_some());
        assert!(employee::Name::new("Иван").is_some());
        assert!(employee::Name::new("").is_none());
        assert!(employee::Name::new(" Ivan").is_none());
        assert!(employee::Name::new("Ivan ").is_none());

        assert!(employee::Name::new("a".repeat(50)).is_some());
        assert!(employee::Name::new("a".repeat(51)).is_none());
        // Limit is in characters, not bytes.
        assert!(employee::Name::new("я".repeat(50)).is_some());

        assert!(city::Name::new("a".repeat(100)).is_some());
        assert!(city::Name::new("a".repeat(101)).is_none());
    }

    #[test]
    fn text_is_viewed_as_str() {
        let name = employee::Name::new("Ivan").unwrap();

        assert_eq!(name.as_ref(), "Ivan");
        assert!(name.as_ref().starts_with('I'));
    }
}
