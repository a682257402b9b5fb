//! GraphQL API of the payroll [`Service`].

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod api;
pub mod args;
pub mod config;
mod context;
pub mod error;

use std::sync::Arc;

use axum::{
    response::{IntoResponse, Response},
    Extension, Json,
};
use derive_more::Debug;
use juniper::{http::GraphQLBatchResponse, DefaultScalarValue, ScalarValue};
use juniper_axum::extract::JuniperRequest;
// Used in binary.
use axum_client_ip as _;
use refinery as _;
use tokio as _;
use tower_http as _;
use tracing_subscriber as _;

pub use self::{
    args::Args,
    config::Config,
    context::Context,
    error::{AsError, Error},
};

/// [`Service`] with filled infrastructure dependencies.
///
/// [`Service`]: service::Service
pub type Service = service::Service<service::infra::Postgres>;

/// [`juniper`] GraphQL response.
#[derive(Debug)]
pub struct JuniperResponse<S = DefaultScalarValue>
where
    S: ScalarValue,
{
    /// Status code of the response.
    pub status_code: http::StatusCode,

    /// Underlying GraphQL response.
    #[debug(skip)]
    pub response: GraphQLBatchResponse<S>,
}

impl<S> IntoResponse for JuniperResponse<S>
where
    S: ScalarValue,
{
    fn into_response(self) -> Response {
        let Self {
            status_code,
            response,
        } = self;

        if response.is_ok() {
            Json(response).into_response()
        } else {
            (status_code, Json(response)).into_response()
        }
    }
}

/// Executes a GraphQL request against the [`api::Schema`].
pub async fn graphql(
    Extension(schema): Extension<Arc<api::Schema>>,
    context: Context,
    JuniperRequest(gql_request): JuniperRequest,
) -> JuniperResponse {
    JuniperResponse {
        status_code: context.error_status_code(),
        response: gql_request.execute(&*schema, &context).await,
    }
}

#[cfg(test)]
mod spec {
    use std::sync::Arc;

    use axum::{response::IntoResponse as _, Extension};
    use juniper::{
        http::{GraphQLBatchRequest, GraphQLRequest},
        EmptySubscription,
    };
    use juniper_axum::extract::JuniperRequest;
    use service::infra::Postgres;

    use crate::{api, config::Config, graphql, Context, Service};

    async fn execute(query: &str) -> http::StatusCode {
        let postgres = Postgres::new(&Config::default().postgres.into())
            .unwrap();
        let schema = api::Schema::new(
            api::Query,
            api::Mutation,
            EmptySubscription::new(),
        );
        let request = GraphQLBatchRequest::Single(GraphQLRequest::new(
            query.into(),
            None,
            None,
        ));

        graphql(
            Extension(Arc::new(schema)),
            Context::new(Service::new(postgres)),
            JuniperRequest(request),
        )
        .await
        .into_response()
        .status()
    }

    #[tokio::test]
    async fn out_of_range_salary_amount_is_bad_request() {
        let status = execute(
            r#"mutation {
                createSalary(
                    employeeId: "00000000-0000-0000-0000-000000000701",
                    periodStart: "2024-01-01",
                    periodEnd: "2024-01-31",
                    bonus: "1000000000000000000",
                ) { id }
            }"#,
        )
        .await;

        assert_eq!(status, http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_query_is_bad_request() {
        let status = execute("mutation { createSalary(").await;

        assert_eq!(status, http::StatusCode::BAD_REQUEST);
    }
}
