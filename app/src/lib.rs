//! Terminal host for the product client core.
//!
//! # Overview
//! Reads configuration, performs HTTP through ureq on behalf of the core,
//! and drives the app screens from a line-oriented prompt.

pub mod config;
pub mod repl;
pub mod transport;

pub use config::Config;
pub use transport::UreqTransport;
