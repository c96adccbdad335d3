//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use crate::domain::entities::{NewProblem, Problem};
use crate::domain::value_objects::ProblemNo;
use crate::error::ProblemResult;

/// Problem repository trait
///
/// Sole owner of access to the `problems` collection. Store failures are
/// surfaced as-is; nothing is retried.
#[trait_variant::make(ProblemRepository: Send)]
pub trait LocalProblemRepository {
    /// True iff at least one stored problem has this number
    async fn exists(&self, problem_no: ProblemNo) -> ProblemResult<bool>;

    /// Insert a problem and return it with its store-assigned id.
    ///
    /// Fails with `Conflict` if the store itself already holds the number.
    async fn create(&self, problem: NewProblem) -> ProblemResult<Problem>;

    /// Every stored problem, ascending by `problem_no`
    async fn list(&self) -> ProblemResult<Vec<Problem>>;
}
