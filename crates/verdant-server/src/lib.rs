//! Verdant Web Server
//!
//! Axum-based REST API serving simulation history and analytics reports.
//!
//! Security features:
//! - Identity header from the fronting auth proxy (required by default, use
//!   --no-auth for local dev)
//! - Restrictive CORS policy
//! - Sanitized error responses

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::{error, info, warn};

use verdant_core::{AnalyticsEngine, Database};

mod handlers;

/// Maximum history page size
pub const MAX_PAGE_LIMIT: i64 = 1000;

/// Header carrying the authenticated user id, set by the auth proxy
pub const USER_HEADER: &str = "x-verdant-user";

/// User id used when authentication is disabled and no header is sent
pub const LOCAL_USER: &str = "local";

/// Environment variable listing allowed CORS origins (comma separated)
pub const ALLOWED_ORIGINS_ENV: &str = "VERDANT_ALLOWED_ORIGINS";

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    /// Whether the identity header is required (secure by default)
    pub require_auth: bool,
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            require_auth: true,
            allowed_origins: vec![],
        }
    }
}

impl ServerConfig {
    /// Read allowed origins from `VERDANT_ALLOWED_ORIGINS`
    pub fn from_env(require_auth: bool) -> Self {
        let allowed_origins = std::env::var(ALLOWED_ORIGINS_ENV)
            .map(|v| parse_origins(&v))
            .unwrap_or_default();

        Self {
            require_auth,
            allowed_origins,
        }
    }
}

fn parse_origins(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Shared application state
pub struct AppState {
    pub db: Database,
    pub engine: AnalyticsEngine,
    pub config: ServerConfig,
}

/// Identity middleware - rejects requests without a user when auth is required
///
/// The header is trusted as-is: the server is meant to sit behind an auth
/// proxy that strips any client-supplied copy.
async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    if !state.config.require_auth || request.uri().path() == "/api/health" {
        return next.run(request).await;
    }

    if let Some(user) = header_user(request.headers()) {
        tracing::debug!(user, path = %request.uri().path(), "Authenticated via identity header");
        return next.run(request).await;
    }

    warn!(path = %request.uri().path(), "Unauthorized request - no identity header");
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({
            "error": "Authentication required"
        })),
    )
        .into_response()
}

fn header_user(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(USER_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// User id for a request: the identity header, or "local" when auth is off
pub fn get_user_id(headers: &HeaderMap) -> String {
    header_user(headers).unwrap_or(LOCAL_USER).to_string()
}

/// Create the application router
pub fn create_router(db: Database, engine: AnalyticsEngine, config: ServerConfig) -> Router {
    let cors = build_cors(&config.allowed_origins);

    let state = Arc::new(AppState { db, engine, config });

    let api_routes = Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/simulations",
            get(handlers::list_simulations).post(handlers::create_simulation),
        )
        .route("/roi/analyze", get(handlers::roi_analyze))
        .route("/roi/forecast", get(handlers::roi_forecast))
        .route("/roi/carbon", get(handlers::roi_carbon))
        .route("/roi/compare", get(handlers::roi_compare))
        .route("/ai/insights", get(handlers::ai_insights));

    Router::new()
        .nest("/api", api_routes)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
}

fn build_cors(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::HeaderName::from_static(USER_HEADER),
        ]);

    if allowed_origins.is_empty() {
        // Same-origin only
        return cors;
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    cors.allow_origin(origins)
}

/// Start the server
pub async fn serve_with_config(
    db: Database,
    engine: AnalyticsEngine,
    host: &str,
    port: u16,
    config: ServerConfig,
) -> anyhow::Result<()> {
    if !config.require_auth {
        warn!("⚠️  Authentication disabled - do not expose to network!");
    }

    let app = create_router(db, engine, config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Generic message to the client, full error to the log
            message: "An internal error occurred".to_string(),
            internal: Some(err.into()),
        }
    }
}

#[cfg(test)]
mod tests;
