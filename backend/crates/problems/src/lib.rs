//! Problems Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository trait
//! - `application/` - Use cases (create, check, list)
//! - `infra/` - PostgreSQL and in-process store implementations
//! - `presentation/` - HTTP handlers, DTOs, admin gate
//!
//! ## Consistency Model
//! - `problem_no` is unique; create checks for an existing number first
//! - The check and the insert are separate store calls, so each store also
//!   rejects a duplicate at insert time and that surfaces as `Conflict`
//! - Nothing is retried; every failure reaches the caller with a status code

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::ProblemsConfig;
pub use error::{ProblemError, ProblemResult};
pub use infra::memory::InMemoryProblemRepository;
pub use infra::postgres::PgProblemRepository;
pub use presentation::router::problems_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}
