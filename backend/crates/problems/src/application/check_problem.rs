//! Check Problem Number Use Case

use crate::domain::repository::ProblemRepository;
use crate::domain::value_objects::ProblemNo;
use crate::error::ProblemResult;
use std::sync::Arc;

/// Check Problem Number Use Case
pub struct CheckProblemUseCase<R>
where
    R: ProblemRepository,
{
    problem_repo: Arc<R>,
}

impl<R> CheckProblemUseCase<R>
where
    R: ProblemRepository,
{
    pub fn new(problem_repo: Arc<R>) -> Self {
        Self { problem_repo }
    }

    /// Whether a problem with this number is already stored.
    ///
    /// Absent, empty, or non-numeric candidates cannot match a stored
    /// problem and are answered without touching the store.
    pub async fn execute(&self, candidate: Option<&str>) -> ProblemResult<bool> {
        let Some(problem_no) = candidate.and_then(ProblemNo::parse) else {
            return Ok(false);
        };

        let exists = self.problem_repo.exists(problem_no).await?;
        tracing::debug!(%problem_no, exists, "Checked problem number");

        Ok(exists)
    }
}
