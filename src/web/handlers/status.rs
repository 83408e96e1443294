//! Status and diagnostics handlers.

use axum::{extract::State, Json};
use std::sync::Arc;
use utoipa;

use super::AppState;
use crate::db::DatabaseStatus;
use crate::web::dto::{MessageResponse, StatusResponse};

/// Maximum number of collection names reported by the diagnostics endpoint.
const MAX_COLLECTIONS: usize = 10;

/// Maximum length of an error message echoed by the diagnostics endpoint.
const MAX_ERROR_CHARS: usize = 50;

/// GET / - Root liveness endpoint.
#[utoipa::path(
    get,
    path = "/",
    tag = "status",
    responses(
        (status = 200, description = "Backend is alive", body = MessageResponse)
    )
)]
pub async fn read_root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from FastAPI Backend!",
    })
}

/// GET /api/hello - API liveness endpoint.
#[utoipa::path(
    get,
    path = "/api/hello",
    tag = "status",
    responses(
        (status = 200, description = "API is alive", body = MessageResponse)
    )
)]
pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from the backend API!",
    })
}

/// Report presence of an environment variable without echoing its value.
fn env_flag(key: &str) -> &'static str {
    if std::env::var(key).is_ok() {
        "✅ Set"
    } else {
        "❌ Not Set"
    }
}

/// GET /test - Database diagnostics endpoint.
///
/// Probes the optional external database and reports a fixed vocabulary of
/// status strings. Every probe outcome maps to a response; this handler
/// never fails.
#[utoipa::path(
    get,
    path = "/test",
    tag = "status",
    responses(
        (status = 200, description = "Diagnostics report", body = StatusResponse)
    )
)]
pub async fn test_database(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let mut response = StatusResponse {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: env_flag("DATABASE_URL").to_string(),
        database_name: env_flag("DATABASE_NAME").to_string(),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    if let Some(probe) = &state.database {
        match probe.check() {
            DatabaseStatus::Connected { name, collections } => {
                tracing::debug!(database = %name, "database probe succeeded");
                response.database = "✅ Connected & Working".to_string();
                response.connection_status = "Connected".to_string();
                response.collections = collections.into_iter().take(MAX_COLLECTIONS).collect();
            }
            DatabaseStatus::Unconfigured => {}
            DatabaseStatus::Error { message } => {
                let short: String = message.chars().take(MAX_ERROR_CHARS).collect();
                response.database = format!("❌ Error: {short}");
            }
        }
    }

    Json(response)
}
