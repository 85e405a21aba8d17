//! Handlers for the `/clients` resource.
//!
//! Create and update take the body as raw `serde_json::Value` rather
//! than a typed DTO: the required-field check must distinguish "field
//! absent or wrong type" (a 400 with per-field messages) from "body not
//! JSON at all" (a 400 with a single `Invalid JSON` message), which a
//! typed extractor would collapse into one rejection.
//!
//! The `Json` extractor also rejects bodies sent without a
//! `Content-Type: application/json` header; those map to the same
//! `Invalid JSON` response.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use annuaire_core::error::CoreError;
use annuaire_core::types::DbId;
use annuaire_core::validation::validate_required_fields;
use annuaire_db::models::client::{Client, CreateClient};
use annuaire_db::repositories::ClientRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/clients
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Client>>> {
    let clients = ClientRepo::list(&state.pool).await?;
    Ok(Json(clients))
}

/// GET /api/clients/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Client>> {
    let client = ClientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;
    Ok(Json(client))
}

/// POST /api/clients
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Client>)> {
    let input = parse_client_body(body)?;
    let client = ClientRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

/// PUT /api/clients/{id}
///
/// The lookup runs before the body is inspected, so an unknown id
/// returns 404 even when the body is malformed.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<Client>> {
    ClientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;

    let input = parse_client_body(body)?;
    let client = ClientRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;
    Ok(Json(client))
}

/// DELETE /api/clients/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ClientRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))
    }
}

/// Turn a raw JSON body into a validated [`CreateClient`].
///
/// Errors are detected before any write is attempted: a parse failure
/// maps to [`AppError::InvalidJson`], missing/blank/non-string fields
/// map to [`CoreError::Validation`] with all failing fields collected.
fn parse_client_body(body: Result<Json<Value>, JsonRejection>) -> Result<CreateClient, AppError> {
    let Json(data) = body.map_err(|_| AppError::InvalidJson)?;

    let errors = validate_required_fields(&data);
    if !errors.is_empty() {
        return Err(AppError::Core(CoreError::Validation(errors)));
    }

    // Validation guarantees the six fields are present non-blank strings.
    serde_json::from_value(data).map_err(|_| AppError::InvalidJson)
}
