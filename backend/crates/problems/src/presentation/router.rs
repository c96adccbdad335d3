//! Problems Router

use crate::application::config::ProblemsConfig;
use crate::domain::repository::ProblemRepository;
use crate::presentation::handlers::{self, ProblemsAppState};
use crate::presentation::middleware::require_admin;
use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

/// Create the problems router for any repository implementation
///
/// `GET /problems` is open; `POST /problems` sits behind the admin gate.
pub fn problems_router<R>(repo: R, config: ProblemsConfig) -> Router
where
    R: ProblemRepository + Clone + Send + Sync + 'static,
{
    let config = Arc::new(config);
    let state = ProblemsAppState {
        repo: Arc::new(repo),
        config: config.clone(),
    };

    let admin_create = post(handlers::create_problem::<R>)
        .route_layer(middleware::from_fn_with_state(config, require_admin));

    Router::new()
        .route(
            "/problems",
            get(handlers::get_problems::<R>).merge(admin_create),
        )
        .with_state(state)
}
