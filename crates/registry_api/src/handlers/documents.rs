use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use registry_core::error::Error;
use registry_service::documents::UploadedDocument;
use serde::Deserialize;
use uuid::Uuid;

use super::ApiResult;
use crate::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    pub file_name: String,
    /// Base64 file contents, with or without a data-URI prefix.
    pub data: String,
}

pub async fn upload(
    State(state): State<AppState>,
    Path(trainer_id): Path<Uuid>,
    Json(request): Json<UploadRequest>,
) -> ApiResult<(StatusCode, Json<UploadedDocument>)> {
    let raw = request
        .data
        .split_once(',')
        .map(|(_, b64)| b64)
        .unwrap_or(&request.data);
    let bytes = BASE64
        .decode(raw.as_bytes())
        .map_err(|_| Error::Validation("File data is not valid base64".to_string()))?;

    let uploaded = state
        .controller
        .attach_document(trainer_id, &request.file_name, bytes)
        .await?;
    Ok((StatusCode::CREATED, Json(uploaded)))
}
