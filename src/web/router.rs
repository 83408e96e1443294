//! Router configuration for the Web API.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use super::handlers::{item, status, AppState};
use super::middleware::create_cors_layer;
use crate::config::WebConfig;

/// Headroom above the image ceiling for multipart boundaries and text fields.
/// Axum's default body limit sits below the accepted 2 MiB image boundary, so
/// the limit is raised here and the size decision left to validation.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>, web_config: &WebConfig) -> Router {
    let uploads_dir = app_state.store.base_path().to_path_buf();
    let public_prefix = app_state.public_prefix.clone();
    let body_limit = app_state.max_image_bytes + MULTIPART_OVERHEAD;

    Router::new()
        .route("/", get(status::read_root))
        .route("/api/hello", get(status::hello))
        .route("/test", get(status::test_database))
        .route("/barang", post(item::create_item))
        .nest_service(&public_prefix, ServeDir::new(uploads_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(&web_config.cors_origins))
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(app_state)
}

/// OpenAPI document for the Web API.
#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::status::read_root,
        super::handlers::status::hello,
        super::handlers::status::test_database,
        super::handlers::item::create_item,
    ),
    components(schemas(
        crate::web::dto::MessageResponse,
        crate::web::dto::StatusResponse,
        crate::web::dto::CreateItemResponse,
        crate::web::dto::ItemData,
        crate::web::error::ErrorBody,
    )),
    tags(
        (name = "status", description = "Liveness and diagnostics"),
        (name = "items", description = "Item submissions")
    )
)]
struct ApiDoc;

/// Create a router serving the OpenAPI document.
pub fn create_docs_router() -> Router {
    Router::new().route("/api-docs/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
