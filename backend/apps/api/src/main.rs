//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod config;

use axum::{
    Json, Router, http,
    http::{Method, header},
    routing::get,
};
use chrono::{SecondsFormat, Utc};
use config::AppConfig;
use kernel::error::app_error::AppError;
use problems::{InMemoryProblemRepository, PgProblemRepository, ProblemsConfig, problems_router};
use serde::Serialize;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;

    init_tracing(config.log_json);

    // Admin credential
    let admin_token = match config.admin_token.clone() {
        Some(token) => token,
        None => {
            let token = platform::crypto::random_token(32);
            // Secret goes to the terminal only, never into structured logs
            eprintln!("Development admin token: {token}");
            tracing::warn!(
                token_hint = %token_hint(&token),
                "ADMIN_TOKEN not set, generated a development token (printed to stderr)"
            );
            token
        }
    };

    let problems_config = ProblemsConfig {
        expose_error_details: config.expose_error_details,
        ..ProblemsConfig::default()
    }
    .with_admin_token(&admin_token);

    // Store selection
    let problems = match config.database_url.as_deref() {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .connect_lazy(database_url)?;

            if config.run_migrations {
                sqlx::migrate!("../../../database/migrations")
                    .run(&pool)
                    .await?;
                tracing::info!("Migrations completed");
            }

            tracing::info!(
                max_connections = config.database_max_connections,
                "Using PostgreSQL problem store"
            );
            problems_router(PgProblemRepository::new(pool), problems_config)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, problems are kept in memory only");
            problems_router(InMemoryProblemRepository::new(), problems_config)
        }
    };

    let app = app(problems, cors_layer(&config.frontend_origins));

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "api=info,problems=info,tower_http=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<http::HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true)
}

fn app(problems: Router, cors: CorsLayer) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .nest("/api", problems)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    message: &'static str,
    timestamp: String,
}

/// First characters of a secret, enough to tell tokens apart in logs
fn token_hint(token: &str) -> String {
    let prefix: String = token.chars().take(4).collect();
    format!("{prefix}…")
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "API is working!",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

async fn not_found() -> AppError {
    AppError::not_found("Not found")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
