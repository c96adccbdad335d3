//! Domain Entities
//!
//! Core business entities for the problems domain.

use chrono::{DateTime, SubsecRound, Utc};
use kernel::id::ProblemId;

use crate::domain::value_objects::ProblemNo;

/// A problem that has not been persisted yet
///
/// Text fields are trimmed and `created_at` is stamped on construction; the
/// store only assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProblem {
    pub problem_no: ProblemNo,
    pub title: String,
    pub description: String,
    pub solution: String,
    pub created_at: DateTime<Utc>,
}

impl NewProblem {
    pub fn new(problem_no: ProblemNo, title: &str, description: &str, solution: &str) -> Self {
        Self {
            problem_no,
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            solution: solution.trim().to_string(),
            // ISO-8601 timestamps are exchanged with millisecond precision
            created_at: Utc::now().trunc_subsecs(3),
        }
    }

    /// Attach the store-assigned id
    pub fn into_problem(self, id: ProblemId) -> Problem {
        Problem {
            id,
            problem_no: self.problem_no,
            title: self.title,
            description: self.description,
            solution: self.solution,
            created_at: self.created_at,
        }
    }
}

/// Problem entity - a persisted coding problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub id: ProblemId,
    pub problem_no: ProblemNo,
    pub title: String,
    pub description: String,
    pub solution: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no(n: i64) -> ProblemNo {
        ProblemNo::new(n).unwrap()
    }

    #[test]
    fn test_new_problem_trims_text() {
        let draft = NewProblem::new(no(1), " Two Sum ", "\tFind two numbers\n", "  use a map ");
        assert_eq!(draft.title, "Two Sum");
        assert_eq!(draft.description, "Find two numbers");
        assert_eq!(draft.solution, "use a map");
    }

    #[test]
    fn test_created_at_has_millisecond_precision() {
        let draft = NewProblem::new(no(1), "a", "b", "c");
        assert_eq!(draft.created_at.timestamp_subsec_nanos() % 1_000_000, 0);
    }

    #[test]
    fn test_into_problem_keeps_fields() {
        let draft = NewProblem::new(no(9), "t", "d", "s");
        let id = ProblemId::new();
        let problem = draft.clone().into_problem(id);
        assert_eq!(problem.id, id);
        assert_eq!(problem.problem_no, draft.problem_no);
        assert_eq!(problem.created_at, draft.created_at);
    }
}
