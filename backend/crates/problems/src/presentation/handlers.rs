//! HTTP Handlers

use crate::application::config::ProblemsConfig;
use crate::application::{CheckProblemUseCase, CreateProblemUseCase, ListProblemsUseCase};
use crate::domain::repository::ProblemRepository;
use crate::error::ProblemError;
use crate::presentation::dto::{
    CheckResponse, CreateProblemRequest, CreateProblemResponse, ListResponse, ProblemResponse,
    ProblemsQuery,
};
use crate::presentation::middleware::Caller;
use axum::{Extension, Json};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::{AppError, AppResult};
use std::sync::Arc;

/// Shared state for problem handlers
#[derive(Clone)]
pub struct ProblemsAppState<R>
where
    R: ProblemRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<ProblemsConfig>,
}

impl<R> ProblemsAppState<R>
where
    R: ProblemRepository + Clone + Send + Sync + 'static,
{
    /// Log and convert, honoring the detailed-errors setting
    fn reject(&self, err: ProblemError) -> AppError {
        err.log();
        err.into_app_error(self.config.expose_error_details)
    }

    /// Same as [`Self::reject`], but store failures become a plain 500
    fn reject_read(&self, err: ProblemError) -> AppError {
        err.log();
        err.into_read_failure().into_app_error(self.config.expose_error_details)
    }
}

/// POST /api/problems
pub async fn create_problem<R>(
    State(state): State<ProblemsAppState<R>>,
    caller: Option<Extension<Caller>>,
    payload: Result<Json<CreateProblemRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<CreateProblemResponse>)>
where
    R: ProblemRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Malformed create request body");
        state.reject(ProblemError::InvalidInput(
            "Request body must be a JSON object.".to_string(),
        ))
    })?;

    let use_case = CreateProblemUseCase::new(state.repo.clone());

    let problem = use_case
        .execute(req.into())
        .await
        .map_err(|e| state.reject(e))?;

    if let Some(Extension(caller)) = caller {
        tracing::debug!(role = %caller.role, problem_id = %problem.id, "Problem created by caller");
    }

    let problem = ProblemResponse::from(problem);

    Ok((
        StatusCode::CREATED,
        Json(CreateProblemResponse {
            message: "Problem added successfully".to_string(),
            id: problem.id.clone(),
            problem,
        }),
    ))
}

/// GET /api/problems and GET /api/problems?check=<problem_no>
pub async fn get_problems<R>(
    State(state): State<ProblemsAppState<R>>,
    Query(query): Query<ProblemsQuery>,
) -> AppResult<Response>
where
    R: ProblemRepository + Clone + Send + Sync + 'static,
{
    if let Some(candidate) = query.check.as_deref() {
        let use_case = CheckProblemUseCase::new(state.repo.clone());
        let exists = use_case
            .execute(Some(candidate))
            .await
            .map_err(|e| state.reject_read(e))?;

        return Ok(Json(CheckResponse { exists }).into_response());
    }

    let use_case = ListProblemsUseCase::new(state.repo.clone());
    let problems = use_case.execute().await.map_err(|e| state.reject_read(e))?;

    Ok(Json(ListResponse {
        problems: problems.into_iter().map(ProblemResponse::from).collect(),
    })
    .into_response())
}
