//! Item handlers: list, create, update, delete.

use crate::error::AppError;
use crate::model::ItemPayload;
use crate::response::{created, ok};
use crate::service::ItemService;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Only integer ids are routable; anything else is an unknown item.
fn parse_id(id: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    id.map(|Path(id)| id).map_err(|_| AppError::item_not_found())
}

/// Oversized bodies keep their 413; every other rejection is a 400.
fn parse_body(body: Result<Json<ItemPayload>, JsonRejection>) -> Result<ItemPayload, AppError> {
    body.map(|Json(p)| p).map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(rejection.body_text())
        } else {
            AppError::Validation(rejection.body_text())
        }
    })
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let items = ItemService::list(&state).await?;
    Ok(ok(items))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = parse_body(body)?;
    let item = ItemService::create(&state, payload).await?;
    Ok(created(item))
}

pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(id)?;
    let item = ItemService::update(&state, id, parse_body(body)).await?;
    Ok(ok(item))
}

pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(id)?;
    let message = ItemService::delete(&state, id).await?;
    Ok(ok(message))
}
