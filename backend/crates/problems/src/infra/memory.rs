//! In-process Repository Implementation
//!
//! Keeps the collection in memory. Used by tests and by the API binary when
//! no database is configured; contents do not survive a restart.

use std::collections::BTreeMap;
use std::sync::Arc;

use kernel::id::ProblemId;
use tokio::sync::RwLock;

use crate::domain::entities::{NewProblem, Problem};
use crate::domain::repository::ProblemRepository;
use crate::domain::value_objects::ProblemNo;
use crate::error::{ProblemError, ProblemResult};

/// In-memory repository, keyed (and therefore ordered) by problem number
#[derive(Clone, Default)]
pub struct InMemoryProblemRepository {
    problems: Arc<RwLock<BTreeMap<ProblemNo, Problem>>>,
}

impl InMemoryProblemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored problems
    pub async fn len(&self) -> usize {
        self.problems.read().await.len()
    }
}

impl ProblemRepository for InMemoryProblemRepository {
    async fn exists(&self, problem_no: ProblemNo) -> ProblemResult<bool> {
        Ok(self.problems.read().await.contains_key(&problem_no))
    }

    async fn create(&self, problem: NewProblem) -> ProblemResult<Problem> {
        let mut problems = self.problems.write().await;

        if problems.contains_key(&problem.problem_no) {
            tracing::warn!(
                problem_no = %problem.problem_no,
                "Duplicate problem number caught at insert"
            );
            return Err(ProblemError::Conflict(problem.problem_no));
        }

        let problem = problem.into_problem(ProblemId::new());
        problems.insert(problem.problem_no, problem.clone());

        Ok(problem)
    }

    async fn list(&self) -> ProblemResult<Vec<Problem>> {
        Ok(self.problems.read().await.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(n: i64, title: &str) -> NewProblem {
        NewProblem::new(ProblemNo::new(n).unwrap(), title, "desc", "sol")
    }

    #[tokio::test]
    async fn test_create_then_exists() {
        let repo = InMemoryProblemRepository::new();
        let no = ProblemNo::new(3).unwrap();
        assert!(!repo.exists(no).await.unwrap());

        let created = repo.create(draft(3, "Three")).await.unwrap();
        assert_eq!(created.problem_no, no);
        assert!(repo.exists(no).await.unwrap());
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_number() {
        let repo = InMemoryProblemRepository::new();
        repo.create(draft(1, "First")).await.unwrap();

        let err = repo.create(draft(1, "Again")).await.unwrap_err();
        assert!(matches!(err, ProblemError::Conflict(n) if n.value() == 1));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_list_is_sorted_by_number() {
        let repo = InMemoryProblemRepository::new();
        for n in [5, 1, 3] {
            repo.create(draft(n, "p")).await.unwrap();
        }

        let numbers: Vec<i64> = repo
            .list()
            .await
            .unwrap()
            .iter()
            .map(|p| p.problem_no.value())
            .collect();
        assert_eq!(numbers, vec![1, 3, 5]);
    }

    #[tokio::test]
    async fn test_concurrent_creates_store_one_document() {
        let repo = InMemoryProblemRepository::new();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.create(draft(42, "race")).await })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(repo.len().await, 1);
    }
}
