use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use registry_core::models::{Trainer, TrainerDraft};
use serde_json::Value;
use uuid::Uuid;

use super::ApiResult;
use crate::AppState;

pub async fn list(State(state): State<AppState>) -> Json<Vec<Trainer>> {
    Json(state.controller.trainers().await)
}

pub async fn register(
    State(state): State<AppState>,
    Json(draft): Json<TrainerDraft>,
) -> ApiResult<(StatusCode, Json<Trainer>)> {
    let trainer = state.controller.register(&draft).await?;
    Ok((StatusCode::CREATED, Json(trainer)))
}

/// Accepts a raw JSON patch; unknown and immutable fields are stripped
/// downstream, so clients may echo a whole record back.
pub async fn amend(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<Value>,
) -> ApiResult<Json<Trainer>> {
    let trainer = state.controller.amend(id, patch).await?;
    Ok(Json(trainer))
}

pub async fn revoke(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.controller.revoke(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn sync(State(state): State<AppState>) -> ApiResult<StatusCode> {
    state.controller.load().await?;
    Ok(StatusCode::NO_CONTENT)
}
