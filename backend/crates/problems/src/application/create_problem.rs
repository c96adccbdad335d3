//! Create Problem Use Case

use crate::domain::entities::{NewProblem, Problem};
use crate::domain::repository::ProblemRepository;
use crate::domain::value_objects::ProblemNo;
use crate::error::{ProblemError, ProblemResult};
use std::sync::Arc;

/// Input DTO for create problem
///
/// Fields are raw caller text; `None` means the field was absent.
#[derive(Debug, Clone, Default)]
pub struct CreateProblemInput {
    pub problem_no: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub solution: Option<String>,
}

/// Create Problem Use Case
pub struct CreateProblemUseCase<R>
where
    R: ProblemRepository,
{
    problem_repo: Arc<R>,
}

impl<R> CreateProblemUseCase<R>
where
    R: ProblemRepository,
{
    pub fn new(problem_repo: Arc<R>) -> Self {
        Self { problem_repo }
    }

    pub async fn execute(&self, input: CreateProblemInput) -> ProblemResult<Problem> {
        let (Some(problem_no), Some(title), Some(description), Some(solution)) = (
            present(&input.problem_no),
            present(&input.title),
            present(&input.description),
            present(&input.solution),
        ) else {
            tracing::debug!("Create rejected: missing required fields");
            return Err(ProblemError::missing_fields());
        };

        let problem_no = ProblemNo::parse(problem_no).ok_or_else(|| {
            ProblemError::InvalidInput("Problem number must be a positive integer.".to_string())
        })?;

        // Best-effort: the store enforces uniqueness again at insert
        if self.problem_repo.exists(problem_no).await? {
            return Err(ProblemError::Conflict(problem_no));
        }

        let problem = self
            .problem_repo
            .create(NewProblem::new(problem_no, title, description, solution))
            .await?;

        tracing::info!(
            problem_id = %problem.id,
            problem_no = %problem.problem_no,
            "Problem created"
        );

        Ok(problem)
    }
}

/// Trimmed field text, or `None` when absent or blank
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
