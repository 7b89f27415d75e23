//! Client core for the product CRUD service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), and layers the list and
//! form screens plus route switching on top of that. The host supplies a
//! `Transport` and renders whatever the mounted screen produces.
//!
//! # Design
//! - `ProductClient` is stateless; it holds only the collection endpoint.
//! - Each operation is split into `build_*` and `parse_*`; `ProductApi`
//!   joins them around a `Transport` call.
//! - Views catch and log every API failure; none is surfaced to the user.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod app;
pub mod client;
pub mod error;
pub mod form_view;
pub mod http;
pub mod list_view;
pub mod route;
pub mod types;

pub use api::ProductApi;
pub use app::{Action, App, Screen};
pub use client::{ProductClient, DEFAULT_API_URL};
pub use error::{ActionError, ApiError, FormError, RouteError};
pub use form_view::{Field, FormPhase, FormView, ProductDraft};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use list_view::{ListEntry, ListPhase, ListView};
pub use route::Route;
pub use types::{Product, ProductId};
