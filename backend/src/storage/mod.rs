//! # Storage Module
//!
//! Holds every entity the pet care tracker knows about and answers the
//! owner-scoped queries the API needs.
//!
//! The domain layer only sees the traits in [`traits`]; the in-memory
//! [`MemoryStore`] is the one implementation. State lives for the lifetime of
//! the process and starts empty apart from a single seed user.
//!
//! ## Key Responsibilities
//!
//! - **Identity**: per-entity monotonic ids, never reused after a delete
//! - **CRUD**: create, get, partial update, delete, list by scoping field
//! - **Joins**: tasks, vaccines and diary entries annotated with the pet name

pub mod error;
pub mod memory;
pub mod traits;

pub use error::StorageError;
pub use memory::MemoryStore;
pub use traits::{DiaryStorage, PetStorage, TaskStorage, UserStorage, VaccineStorage};
