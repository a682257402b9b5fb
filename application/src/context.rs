//! [`Context`] of GraphQL requests.

use std::sync::atomic::{self, AtomicU16};

use axum::{async_trait, extract::FromRequestParts};
use juniper::{
    http::{GraphQLBatchResponse, GraphQLResponse},
    IntoFieldError as _,
};

use crate::{Error, JuniperResponse, Service};

/// Context shared by all the resolvers of a single GraphQL request.
#[derive(Debug)]
pub struct Context {
    /// [`Service`] the request is executed against.
    service: Service,

    /// HTTP status code of the response, if it fails.
    error_status_code: AtomicU16,
}

impl Context {
    /// Creates a new [`Context`] over the provided [`Service`].
    ///
    /// Until a resolver records its error, a failing response is a request
    /// that could not be parsed, validated or coerced, so it is answered
    /// with `BAD_REQUEST`.
    #[must_use]
    pub fn new(service: Service) -> Self {
        Self {
            service,
            error_status_code: AtomicU16::new(
                http::StatusCode::BAD_REQUEST.as_u16(),
            ),
        }
    }

    /// Returns the [`Service`] of this [`Context`].
    #[must_use]
    pub fn service(&self) -> &Service {
        &self.service
    }

    /// Returns the HTTP status code of the response, if it fails.
    #[must_use]
    pub fn error_status_code(&self) -> http::StatusCode {
        http::StatusCode::from_u16(
            self.error_status_code.load(atomic::Ordering::Relaxed),
        )
        .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Sets the HTTP status code of the response, if it fails.
    pub fn set_error_status_code(&self, status_code: http::StatusCode) {
        self.error_status_code
            .store(status_code.as_u16(), atomic::Ordering::Relaxed);
    }

    /// Returns a closure for [`Result::map_err()`] recording the status code
    /// of the passed [`Error`] in this [`Context`].
    pub fn error(&self) -> impl FnOnce(Error) -> Error + '_ {
        move |err| {
            self.set_error_status_code(err.status_code);
            err
        }
    }
}

impl juniper::Context for Context {}

#[async_trait]
impl<S> FromRequestParts<S> for Context
where
    S: Send + Sync,
{
    type Rejection = JuniperResponse;

    async fn from_request_parts(
        parts: &mut http::request::Parts,
        _: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Service>()
            .cloned()
            .map(Self::new)
            .ok_or_else(|| JuniperResponse {
                status_code: http::StatusCode::INTERNAL_SERVER_ERROR,
                response: GraphQLBatchResponse::Single(GraphQLResponse::error(
                    Error::internal(&"missing `Service` extension")
                        .into_field_error(),
                )),
            })
    }
}
