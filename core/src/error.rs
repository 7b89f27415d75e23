//! Error types for the product client core.
//!
//! # Design
//! `ApiError` distinguishes the ways an exchange can fail so log records are
//! useful, but the views never branch on the variant: any `Err` is treated
//! as "the call failed". The remaining types cover local input problems
//! (routes, form fields, actions) that never reach the network.

use thiserror::Error;

use crate::route::Route;

/// Failure of one API operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 for the requested product.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be decoded into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be encoded as JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// No response was obtained at all.
    #[error("transport failed: {0}")]
    Transport(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("no route matches `{0}`")]
    Unknown(String),

    #[error("invalid product id `{0}`")]
    InvalidId(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown field `{0}` (expected `desc` or `price`)")]
    UnknownField(String),

    #[error("price `{0}` is not a number")]
    InvalidPrice(String),
}

/// A user action that the mounted screen does not offer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("`{action}` is not available on {route}")]
    Unavailable { action: &'static str, route: Route },
}
