//! Application Layer - Use Cases
//!
//! Request validation and orchestration of repository calls.

pub mod check_problem;
pub mod config;
pub mod create_problem;
pub mod list_problems;

pub use check_problem::CheckProblemUseCase;
pub use create_problem::{CreateProblemInput, CreateProblemUseCase};
pub use list_problems::ListProblemsUseCase;
