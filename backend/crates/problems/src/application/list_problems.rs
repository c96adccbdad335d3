//! List Problems Use Case

use crate::domain::entities::Problem;
use crate::domain::repository::ProblemRepository;
use crate::error::ProblemResult;
use std::sync::Arc;

/// List Problems Use Case
pub struct ListProblemsUseCase<R>
where
    R: ProblemRepository,
{
    problem_repo: Arc<R>,
}

impl<R> ListProblemsUseCase<R>
where
    R: ProblemRepository,
{
    pub fn new(problem_repo: Arc<R>) -> Self {
        Self { problem_repo }
    }

    /// All problems, ascending by number. Empty when nothing is stored.
    pub async fn execute(&self) -> ProblemResult<Vec<Problem>> {
        let problems = self.problem_repo.list().await?;
        tracing::debug!(count = problems.len(), "Listed problems");
        Ok(problems)
    }
}
