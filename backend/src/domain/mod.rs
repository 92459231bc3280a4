//! # Domain Module
//!
//! Services that sit between the REST layer and storage. Each service owns a
//! trait-object handle to the storage it needs, logs what it does, and adds the
//! derived views the UI asks for (daily task counters, vaccine schedule).
//!
//! ## Module Organization
//!
//! - **user_service**: lookup and registration of users
//! - **pet_service**: pets owned by a user
//! - **task_service**: daily care tasks and the per-day summary
//! - **vaccine_service**: vaccination records and the due-date schedule
//! - **diary_service**: diary entries, newest first
//! - **calendar**: day-string parsing and "today"
//!
//! ## Business Rules
//!
//! - A missing record is a normal outcome (`None` / `false`), not an error
//! - Deleting a pet leaves its tasks, vaccines and diary entries in place
//! - Joined listings only include records of pets the user currently owns

pub mod calendar;
pub mod diary_service;
pub mod pet_service;
pub mod task_service;
pub mod user_service;
pub mod vaccine_service;

pub use diary_service::*;
pub use pet_service::*;
pub use task_service::*;
pub use user_service::*;
pub use vaccine_service::*;
