//! # REST API Interface Layer
//!
//! One module per resource. Each handler logs the request, calls one service
//! method and converts the result; no business logic lives here.

pub mod diary_apis;
pub mod error;
pub mod health_apis;
pub mod pet_apis;
pub mod task_apis;
pub mod vaccine_apis;

pub use diary_apis::*;
pub use error::ApiError;
pub use health_apis::*;
pub use pet_apis::*;
pub use task_apis::*;
pub use vaccine_apis::*;
