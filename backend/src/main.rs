use dotenvy::dotenv;
use axum::{
    routing::{any, get, post},
    Router,
    Json,
    http::StatusCode,
    middleware,
};
use anyhow::Context;
use diesel::prelude::*;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use serde_json::json;
use tower_http::cors::{CorsLayer, Any};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::{info, warn, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

mod config {
    pub mod app_config;
}
mod handlers {
    pub mod auth_middleware;
    pub mod lead_dtos;
    pub mod lead_handlers;
}
mod models {
    pub mod lead_models;
}
mod repositories {
    pub mod lead_repository;
}
mod schema;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod api_tests;

use config::app_config::AppConfig;
use handlers::auth_middleware::{self, SubmissionLimiter};
use handlers::lead_handlers;
use repositories::lead_repository::LeadRepository;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

pub struct AppState {
    leads: Arc<LeadRepository>,
    admin_token: Option<String>,
    submission_limiter: SubmissionLimiter,
    trust_proxy: bool,
}

impl AppState {
    pub fn new(
        pool: DbPool,
        admin_token: Option<String>,
        submissions_per_minute: NonZeroU32,
        trust_proxy: bool,
    ) -> Self {
        Self {
            leads: Arc::new(LeadRepository::new(pool)),
            admin_token,
            submission_limiter: auth_middleware::submission_limiter(submissions_per_minute),
            trust_proxy,
        }
    }
}

#[derive(Debug)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute("PRAGMA busy_timeout = 5000; PRAGMA foreign_keys = ON;")
            .map_err(r2d2::Error::QueryError)
    }
}

pub fn build_pool(database_url: &str, max_size: u32) -> anyhow::Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    r2d2::Pool::builder()
        .max_size(max_size)
        .connection_customizer(Box::new(SqlitePragmas))
        .build(manager)
        .with_context(|| format!("Failed to create pool for {}", database_url))
}

pub fn run_migrations(pool: &DbPool) -> anyhow::Result<()> {
    let mut pooled = pool.get().context("Failed to get DB connection")?;
    let conn: &mut SqliteConnection = &mut pooled;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?;
    for version in applied {
        info!("Applied migration {}", version);
    }
    Ok(())
}

async fn api_not_found() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::NOT_FOUND, Json(json!({"error": "Not found"})))
}

/// The full HTTP surface. `frontend_dist` is served for every non-API path when given.
pub fn build_app(state: Arc<AppState>, frontend_dist: Option<&Path>) -> Router {
    let submission_routes = Router::new()
        .route("/api/demo-requests", post(lead_handlers::create_demo_request))
        .route("/api/newsletter", post(lead_handlers::subscribe_newsletter))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware::rate_limit_submissions));

    let admin_routes = Router::new()
        .route("/api/admin/demo-requests", get(lead_handlers::list_demo_requests))
        .route("/api/admin/newsletter-subscribers", get(lead_handlers::list_newsletter_subscribers))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware::require_admin));

    let mut app = Router::new()
        .route("/api/health", get(lead_handlers::health_check))
        .merge(submission_routes)
        .merge(admin_routes)
        .route("/api/{*rest}", any(api_not_found));

    if let Some(dist) = frontend_dist {
        // client side routes (/privacy, /terms, ...) all boot from index.html
        let spa = ServeDir::new(dist).fallback(ServeFile::new(dist.join("index.html")));
        app = app.fallback_service(spa);
    }

    app.layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any)
                .allow_headers([axum::http::header::CONTENT_TYPE, axum::http::header::AUTHORIZATION])
                .expose_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = AppConfig::from_env()?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some(config.environment.clone().into()),
            ..Default::default()
        }))
    });

    // Initialize tracing
    let default_filter = if config.is_development() {
        "threatatlas_backend=debug,tower_http=debug"
    } else {
        "threatatlas_backend=info,tower_http=info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ThreatAtlas backend in {} mode", config.environment);
    if config.admin_token.is_none() {
        warn!("ADMIN_TOKEN not set, admin routes are disabled");
    }

    // Set up database connection pool
    let pool = build_pool(&config.database_url, 8)?;
    run_migrations(&pool)?;

    let state = Arc::new(AppState::new(
        pool,
        config.admin_token.clone(),
        config.rate_limit_per_minute,
        config.trust_proxy,
    ));

    // Forget clients whose quota has refilled
    let limiter_state = state.clone();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(60));
        loop {
            ticker.tick().await;
            auth_middleware::prune_submission_limiter(&limiter_state.submission_limiter);
        }
    });

    let dist = if config.frontend_dist.is_dir() {
        Some(config.frontend_dist.as_path())
    } else {
        warn!("Frontend dist {} not found, serving API only", config.frontend_dist.display());
        None
    };
    let app = build_app(state, dist);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .context("Server error")?;
    Ok(())
}
