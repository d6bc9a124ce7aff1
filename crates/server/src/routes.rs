use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::clientes::{ClienteRepository, ClienteService};

use crate::openapi::ApiDoc;

pub mod clientes;

/// Shared handler state; the repository behind the service is chosen at startup.
#[derive(Clone)]
pub struct ServerState {
    pub clientes: Arc<ClienteService<dyn ClienteRepository>>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn ClienteRepository>) -> Self {
        Self { clientes: Arc::new(ClienteService::new(repo)) }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, cliente CRUD, and API docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/api/clientes", get(clientes::list).post(clientes::create))
        .route(
            "/api/clientes/:id",
            get(clientes::get).put(clientes::update).delete(clientes::delete),
        )
        .route("/api/clientes/ciudad/:ciudad", get(clientes::list_by_ciudad));

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx are logged at ERROR
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
