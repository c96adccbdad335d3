//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::ProblemId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{NewProblem, Problem};
use crate::domain::repository::ProblemRepository;
use crate::domain::value_objects::ProblemNo;
use crate::error::{ProblemError, ProblemResult, StoreOperation};

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgProblemRepository {
    pool: PgPool,
}

impl PgProblemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProblemRepository for PgProblemRepository {
    async fn exists(&self, problem_no: ProblemNo) -> ProblemResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM problems WHERE problem_no = $1)",
        )
        .bind(problem_no.value())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| store_error(StoreOperation::Check, e))
    }

    async fn create(&self, problem: NewProblem) -> ProblemResult<Problem> {
        let result = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO problems (
                problem_no,
                title,
                description,
                solution,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(problem.problem_no.value())
        .bind(&problem.title)
        .bind(&problem.description)
        .bind(&problem.solution)
        .bind(problem.created_at)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(id) => Ok(problem.into_problem(ProblemId::from_uuid(id))),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                tracing::warn!(
                    problem_no = %problem.problem_no,
                    "Duplicate problem number caught at insert"
                );
                Err(ProblemError::Conflict(problem.problem_no))
            }
            Err(e) => Err(store_error(StoreOperation::Save, e)),
        }
    }

    async fn list(&self) -> ProblemResult<Vec<Problem>> {
        let rows = sqlx::query_as::<_, ProblemRow>(
            r#"
            SELECT
                id,
                problem_no,
                title,
                description,
                solution,
                created_at
            FROM problems
            ORDER BY problem_no ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| store_error(StoreOperation::Fetch, e))?;

        rows.into_iter().map(ProblemRow::into_problem).collect()
    }
}

/// Classify a sqlx failure into the store failure kinds
///
/// SQLSTATE classes: https://www.postgresql.org/docs/current/errcodes-appendix.html
pub(crate) fn store_error(operation: StoreOperation, err: sqlx::Error) -> ProblemError {
    let message = err.to_string();
    match &err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            ProblemError::StoreUnavailable { operation, message }
        }
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            // Class 42 insufficient_privilege
            Some("42501") => ProblemError::PermissionDenied { operation, message },
            // Class 08 connection, 53 resources, 57 operator intervention
            Some(code)
                if code.starts_with("08") || code.starts_with("53") || code.starts_with("57") =>
            {
                ProblemError::StoreUnavailable { operation, message }
            }
            _ => ProblemError::Store { operation, message },
        },
        _ => ProblemError::Store { operation, message },
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct ProblemRow {
    id: Uuid,
    problem_no: i64,
    title: String,
    description: String,
    solution: String,
    created_at: DateTime<Utc>,
}

impl ProblemRow {
    fn into_problem(self) -> ProblemResult<Problem> {
        let problem_no = ProblemNo::new(self.problem_no).ok_or_else(|| {
            ProblemError::Internal(format!("stored problem_no {} is not positive", self.problem_no))
        })?;

        Ok(Problem {
            id: ProblemId::from_uuid(self.id),
            problem_no,
            title: self.title,
            description: self.description,
            solution: self.solution,
            created_at: self.created_at,
        })
    }
}
