use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use service::clientes::{Cliente, ClienteInput};
use tracing::info;

use crate::{errors::JsonApiError, routes::ServerState};

#[utoipa::path(
    get, path = "/api/clientes", tag = "clientes",
    responses(
        (status = 200, description = "All clientes", body = [crate::openapi::ClienteDoc])
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Cliente>>, JsonApiError> {
    let list = state.clientes.list_all().await?;
    info!(count = list.len(), "list clientes");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/api/clientes/{id}", tag = "clientes",
    params(("id" = i64, Path, description = "Cliente ID")),
    responses(
        (status = 200, description = "Cliente found", body = crate::openapi::ClienteDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Cliente>, JsonApiError> {
    let Path(id) = id?;
    Ok(Json(state.clientes.get_by_id(id).await?))
}

#[utoipa::path(
    post, path = "/api/clientes", tag = "clientes",
    request_body = crate::openapi::ClienteInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ClienteDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorBodyDoc),
        (status = 409, description = "Email already in use", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    input: Result<Json<ClienteInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Cliente>), JsonApiError> {
    let Json(input) = input?;
    let created = state.clientes.create(input).await?;
    info!(id = ?created.id, email = %created.email, "created cliente");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/api/clientes/{id}", tag = "clientes",
    params(("id" = i64, Path, description = "Cliente ID")),
    request_body = crate::openapi::ClienteInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ClienteDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorBodyDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc),
        (status = 409, description = "Email already in use", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
    input: Result<Json<ClienteInput>, JsonRejection>,
) -> Result<Json<Cliente>, JsonApiError> {
    let Path(id) = id?;
    let Json(input) = input?;
    let updated = state.clientes.update(id, input).await?;
    info!(id, "updated cliente");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/clientes/{id}", tag = "clientes",
    params(("id" = i64, Path, description = "Cliente ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id?;
    state.clientes.delete(id).await?;
    info!(id, "deleted cliente");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get, path = "/api/clientes/ciudad/{ciudad}", tag = "clientes",
    params(("ciudad" = String, Path, description = "Exact, case-sensitive city name")),
    responses(
        (status = 200, description = "Clientes in the city (possibly empty)", body = [crate::openapi::ClienteDoc]),
        (status = 400, description = "Malformed city segment", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn list_by_ciudad(
    State(state): State<ServerState>,
    ciudad: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<Cliente>>, JsonApiError> {
    let Path(ciudad) = ciudad?;
    let list = state.clientes.list_by_ciudad(&ciudad).await?;
    info!(%ciudad, count = list.len(), "list clientes by ciudad");
    Ok(Json(list))
}
