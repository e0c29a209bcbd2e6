use axum::extract::{Path, State};
use axum::Json;
use registry_core::models::{EmailLog, NotificationType};
use registry_service::EmailDraft;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ApiResult;
use crate::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftRequest {
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub additional_info: Option<String>,
}

#[derive(Serialize)]
pub struct DraftResponse {
    /// Absent when generation produced nothing usable; the client falls back
    /// to manual composition.
    pub draft: Option<EmailDraft>,
}

pub async fn draft(
    State(state): State<AppState>,
    Path(trainer_id): Path<Uuid>,
    Json(request): Json<DraftRequest>,
) -> ApiResult<Json<DraftResponse>> {
    let draft = state
        .controller
        .draft_notification(
            trainer_id,
            request.notification_type,
            request.additional_info.as_deref(),
        )
        .await?;
    Ok(Json(DraftResponse { draft }))
}

#[derive(Deserialize)]
pub struct SendRequest {
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub subject: String,
    pub body: String,
}

/// Returns the attempt log either way; check `status` for the outcome.
pub async fn send(
    State(state): State<AppState>,
    Path(trainer_id): Path<Uuid>,
    Json(request): Json<SendRequest>,
) -> ApiResult<Json<EmailLog>> {
    let log = state
        .controller
        .send_notification(
            trainer_id,
            request.notification_type,
            &request.subject,
            &request.body,
        )
        .await?;
    Ok(Json(log))
}

pub async fn logs(State(state): State<AppState>) -> Json<Vec<EmailLog>> {
    Json(state.controller.email_logs().await)
}
