//! # IO Module
//!
//! Interface layer between HTTP clients and the domain services.
//!
//! Handlers translate requests into service calls and map the outcome onto a
//! status code: records come back as JSON with 200, absent records as 404,
//! malformed input as 400 and anything unexpected as 500. Every non-2xx body
//! has the shape `{ "message": ... }`.
//!
//! ## Current Implementation
//!
//! - **Web Framework**: Axum handlers with `State<AppState>` injection
//! - **Serialization**: Serde camelCase records from the `shared` crate
//! - **Error Handling**: [`rest::ApiError`] implements `IntoResponse`

pub mod rest;

pub use rest::*;
