use axum::{extract::{Path, State}, http::StatusCode, Json};
use service::kyc_entity::domain::{EntityPayload, KycEntity};
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/api/entities", tag = "entities",
    responses(
        (status = 200, description = "All entities, possibly empty", body = [crate::openapi::KycEntityDoc]),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list_all(State(state): State<ServerState>) -> Result<Json<Vec<KycEntity>>, JsonApiError> {
    let list = state.entities.list_all().await?;
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/api/entities/{id}", tag = "entities",
    params(("id" = String, Path, description = "Entity id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::KycEntityDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_by_id(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<KycEntity>, JsonApiError> {
    Ok(Json(state.entities.get_by_id(&id).await?))
}

#[utoipa::path(
    post, path = "/api/entities", tag = "entities",
    request_body = crate::openapi::EntityPayloadDoc,
    responses(
        (status = 200, description = "Created; the id is server-assigned", body = crate::openapi::KycEntityDoc),
        (status = 500, description = "Create Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(State(state): State<ServerState>, Json(payload): Json<EntityPayload>) -> Result<Json<KycEntity>, JsonApiError> {
    let created = state.entities.create(payload).await?;
    Ok(Json(created))
}

#[utoipa::path(
    put, path = "/api/entities/{id}", tag = "entities",
    params(("id" = String, Path, description = "Entity id")),
    request_body = crate::openapi::EntityPayloadDoc,
    responses(
        (status = 200, description = "Replaced", body = crate::openapi::KycEntityDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<EntityPayload>,
) -> Result<Json<KycEntity>, JsonApiError> {
    Ok(Json(state.entities.update(&id, payload).await?))
}

#[utoipa::path(
    delete, path = "/api/entities/{id}", tag = "entities",
    params(("id" = String, Path, description = "Entity id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<String>) -> Result<StatusCode, JsonApiError> {
    state.entities.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get, path = "/api/entities/bycountry/{country}", tag = "search",
    params(("country" = String, Path, description = "Exact, case-sensitive country")),
    responses(
        (status = 200, description = "Matches", body = [crate::openapi::KycEntityDoc]),
        (status = 404, description = "No entity matched", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn by_country(State(state): State<ServerState>, Path(country): Path<String>) -> Result<Json<Vec<KycEntity>>, JsonApiError> {
    let found = state.entities.find_by_country(&country).await?;
    info!(%country, count = found.len(), "search by country");
    Ok(Json(found))
}

#[utoipa::path(
    get, path = "/api/entities/byaddressline/{line}", tag = "search",
    params(("line" = String, Path, description = "Case-insensitive substring of the address line")),
    responses(
        (status = 200, description = "Matches", body = [crate::openapi::KycEntityDoc]),
        (status = 404, description = "No entity matched", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn by_address_line(State(state): State<ServerState>, Path(line): Path<String>) -> Result<Json<Vec<KycEntity>>, JsonApiError> {
    let found = state.entities.find_by_address_line(&line).await?;
    info!(count = found.len(), "search by address line");
    Ok(Json(found))
}

#[utoipa::path(
    get, path = "/api/entities/byfirstname/{name}", tag = "search",
    params(("name" = String, Path, description = "Case-insensitive substring of the first name")),
    responses(
        (status = 200, description = "Matches", body = [crate::openapi::KycEntityDoc]),
        (status = 404, description = "No entity matched", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn by_first_name(State(state): State<ServerState>, Path(name): Path<String>) -> Result<Json<Vec<KycEntity>>, JsonApiError> {
    let found = state.entities.find_by_first_name(&name).await?;
    info!(count = found.len(), "search by first name");
    Ok(Json(found))
}

#[utoipa::path(
    get, path = "/api/entities/bymiddlename/{name}", tag = "search",
    params(("name" = String, Path, description = "Case-insensitive substring of the middle name")),
    responses(
        (status = 200, description = "Matches", body = [crate::openapi::KycEntityDoc]),
        (status = 404, description = "No entity matched", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn by_middle_name(State(state): State<ServerState>, Path(name): Path<String>) -> Result<Json<Vec<KycEntity>>, JsonApiError> {
    let found = state.entities.find_by_middle_name(&name).await?;
    info!(count = found.len(), "search by middle name");
    Ok(Json(found))
}

#[utoipa::path(
    get, path = "/api/entities/bysurname/{name}", tag = "search",
    params(("name" = String, Path, description = "Case-insensitive substring of the surname")),
    responses(
        (status = 200, description = "Matches", body = [crate::openapi::KycEntityDoc]),
        (status = 404, description = "No entity matched", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn by_surname(State(state): State<ServerState>, Path(name): Path<String>) -> Result<Json<Vec<KycEntity>>, JsonApiError> {
    let found = state.entities.find_by_surname(&name).await?;
    info!(count = found.len(), "search by surname");
    Ok(Json(found))
}
