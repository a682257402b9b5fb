//! [`Query`] collection related to reference data [`Employee`]s are hired
//! with.
//!
//! [`Employee`]: crate::domain::Employee
//! [`Query`]: crate::Query

/// Defines `ById` and `List` [`Query`]s of the provided entity.
///
/// [`Query`]: crate::Query
macro_rules! define_queries {
    ($($module:ident => $entity:ident),* $(,)?) => {$(
        pub mod $module {
            #![doc = ::core::concat!(
                "[`Query`] collection related to [`",
                ::core::stringify!($entity),
                "`]s.",
            )]
            //!
            //! [`Query`]: crate::Query

            use common::operations::By;

            use crate::{domain::$module, domain::$entity, query::DatabaseQuery};

            #[doc = ::core::concat!(
                "Queries a [`", ::core::stringify!($entity), "`] by its ID.",
            )]
            pub type ById = DatabaseQuery<By<Option<$entity>, $module::Id>>;

            #[doc = ::core::concat!(
                "Queries all the [`", ::core::stringify!($entity), "`]s.",
            )]
            pub type List = DatabaseQuery<By<Vec<$entity>, ()>>;
        }
    )*};
}

define_queries! {
    address => Address,
    city => City,
    company => Company,
    department => Department,
    office => Office,
    position => Position,
}
