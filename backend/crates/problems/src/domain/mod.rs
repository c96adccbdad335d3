//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Problem, NewProblem)
//! - Domain value objects (ProblemNo, CallerRole)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;
