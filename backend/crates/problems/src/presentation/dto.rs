//! API DTOs (Data Transfer Objects)
//!
//! Field names are snake_case to match the admin form and dashboard.

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::application::CreateProblemInput;
use crate::domain::entities::Problem;

/// Request for POST /api/problems
///
/// Every field is optional here so that a missing field is reported as a
/// validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProblemRequest {
    /// Form posts send a string, API callers may send a number
    #[serde(default)]
    pub problem_no: Option<serde_json::Value>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub solution: Option<String>,
}

impl From<CreateProblemRequest> for CreateProblemInput {
    fn from(req: CreateProblemRequest) -> Self {
        let problem_no = match req.problem_no {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(text)) => Some(text),
            Some(other) => Some(other.to_string()),
        };

        CreateProblemInput {
            problem_no,
            title: req.title,
            description: req.description,
            solution: req.solution,
        }
    }
}

/// Query string for GET /api/problems
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProblemsQuery {
    /// Present (even empty) switches the endpoint to an existence check
    pub check: Option<String>,
}

/// A stored problem as returned to callers
#[derive(Debug, Clone, Serialize)]
pub struct ProblemResponse {
    pub id: String,
    pub problem_no: i64,
    pub title: String,
    pub description: String,
    pub solution: String,
    /// ISO-8601, millisecond precision, UTC
    pub created_at: String,
}

impl From<Problem> for ProblemResponse {
    fn from(problem: Problem) -> Self {
        Self {
            id: problem.id.to_string(),
            problem_no: problem.problem_no.value(),
            title: problem.title,
            description: problem.description,
            solution: problem.solution,
            created_at: problem
                .created_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Response for POST /api/problems (201)
#[derive(Debug, Clone, Serialize)]
pub struct CreateProblemResponse {
    pub message: String,
    pub id: String,
    pub problem: ProblemResponse,
}

/// Response for GET /api/problems?check=
#[derive(Debug, Clone, Serialize)]
pub struct CheckResponse {
    pub exists: bool,
}

/// Response for GET /api/problems
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    pub problems: Vec<ProblemResponse>,
}
