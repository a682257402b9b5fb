//! GraphQL scalar helpers.

use std::{fmt, marker::PhantomData, str::FromStr};

use juniper::{
    GraphQLType, InputValue, ParseScalarResult, ParseScalarValue, ScalarToken,
    ScalarValue, Value,
};

/// Defines an `Id` GraphQL scalar wrapping the UUID of a domain entity.
macro_rules! define_id {
    (
        #[doc = $doc:literal]
        $name:literal => $domain:ty
    ) => {
        #[doc = $doc]
        #[derive(
            Clone,
            Copy,
            Debug,
            ::derive_more::Display,
            Eq,
            ::derive_more::From,
            ::juniper::GraphQLScalar,
            ::derive_more::Into,
            PartialEq,
        )]
        #[from($domain)]
        #[into($domain)]
        #[graphql(name = $name, transparent)]
        pub struct Id(::uuid::Uuid);
    };
}

pub(crate) use define_id;

/// Helper for `#[graphql(with = ..)]` attribute, converting a newtype to and
/// from a string GraphQL scalar through the [`FromStr`] and [`Display`]
/// impls of the wrapped `As` type.
///
/// This way the validation of the `As` type applies to the GraphQL input.
///
/// [`Display`]: fmt::Display
#[derive(Debug)]
pub struct Via<As>(PhantomData<As>);

impl<As> Via<As> {
    /// Renders the provided `value` as a string scalar [`Value`].
    pub fn to_output<T, S>(value: &T) -> Value<S>
    where
        As: fmt::Display,
        T: AsRef<As>,
        S: ScalarValue,
    {
        Value::from(value.as_ref().to_string())
    }

    /// Parses a `T` out of the provided string scalar `input`.
    ///
    /// # Errors
    ///
    /// If the `input` is not a string, or is not a valid `As` or `T`.
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    pub fn from_input<T, S>(input: &InputValue<S>) -> Result<T, String>
    where
        As: FromStr,
        As::Err: fmt::Display,
        T: TryFrom<As> + GraphQLType<S, TypeInfo = ()>,
        T::Error: fmt::Display,
        S: ScalarValue,
    {
        let name = T::name(&()).expect("scalars are named");
        let s = input.as_string_value().ok_or_else(|| {
            format!("`{name}` scalar expects a string, found: {input}")
        })?;
        s.parse::<As>()
            .map_err(|e| format!("`{name}` scalar cannot be \"{s}\": {e}"))?
            .try_into()
            .map_err(|e| format!("`{name}` scalar cannot be \"{s}\": {e}"))
    }

    /// Parses the provided [`ScalarToken`] as a string.
    ///
    /// # Errors
    ///
    /// If the token is not a string.
    pub fn parse_token<S: ScalarValue>(
        value: ScalarToken<'_>,
    ) -> ParseScalarResult<S> {
        <String as ParseScalarValue<S>>::from_str(value)
    }
}

#[cfg(test)]
mod spec {
    use juniper::{graphql_input_value, DefaultScalarValue, InputValue};
    use service::domain;

    use crate::api::employee;

    use super::Via;

    fn parse(
        input: &InputValue<DefaultScalarValue>,
    ) -> Result<employee::Name, String> {
        Via::<domain::employee::Name>::from_input(input)
    }

    #[test]
    fn parses_valid_input() {
        let name = parse(&graphql_input_value!("Jo")).unwrap();

        assert_eq!(name.to_string(), "Jo");
    }

    #[test]
    fn rejects_invalid_input() {
        for input in [
            graphql_input_value!(" Jo"),
            graphql_input_value!(""),
            graphql_input_value!(42),
        ] {
            assert!(parse(&input).is_err(), "accepted {input}");
        }
    }
}
