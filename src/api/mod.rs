//! HTTP layer for both services.
//!
//! Translates HTTP requests into service calls and formats responses.
//!
//! # Modules
//!
//! - [`dto`] - Request/response bodies
//! - [`envelope`] - `{status, message, data?, errors?}` envelope of the user API
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route tables for each service

pub mod dto;
pub mod envelope;
pub mod handlers;
pub mod middleware;
pub mod routes;
