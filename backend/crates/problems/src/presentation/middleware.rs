//! Admin Gate Middleware
//!
//! The identity layer in front of the service decides who is an admin; this
//! gate only checks the credential it issued before the handler runs.

use crate::application::config::ProblemsConfig;
use crate::domain::value_objects::CallerRole;
use crate::error::ProblemError;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use platform::client::{extract_bearer_token, extract_client_ip};
use std::sync::Arc;

/// Caller identity stored in request extensions for downstream handlers
#[derive(Debug, Clone, Copy)]
pub struct Caller {
    pub role: CallerRole,
}

/// Middleware that requires the admin role
pub async fn require_admin(
    State(config): State<Arc<ProblemsConfig>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ProblemError> {
    let token = extract_bearer_token(req.headers())?;
    let role = config.role_for(token);

    if !role.is_admin() {
        let client_ip = req
            .extensions()
            .get::<axum::extract::ConnectInfo<std::net::SocketAddr>>()
            .map(|info| info.0.ip());
        let client_ip = extract_client_ip(req.headers(), client_ip);

        tracing::warn!(
            client_ip = ?client_ip,
            role = %role,
            path = %req.uri().path(),
            "Admin route denied"
        );
        return Err(ProblemError::Forbidden);
    }

    req.extensions_mut().insert(Caller { role });

    Ok(next.run(req).await)
}
