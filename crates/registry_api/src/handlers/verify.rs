use axum::extract::{Query, State};
use axum::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use registry_core::models::Trainer;
use serde::{Deserialize, Serialize};

use crate::AppState;

#[derive(Deserialize)]
pub struct VerifyParams {
    /// The credential to look up, under the portal's query key.
    pub verify: String,
    /// When set, a successful match also returns a spoken confirmation.
    #[serde(default)]
    pub speak: bool,
}

#[derive(Serialize)]
pub struct VerifyResponse {
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trainer: Option<Trainer>,
    /// Base64 PCM audio, present only when requested and TTS succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
}

/// Public endpoint, no session required. Misses are a normal 200 with
/// `verified: false`; not-found here is an answer, not an error.
pub async fn verify(
    State(state): State<AppState>,
    Query(params): Query<VerifyParams>,
) -> Json<VerifyResponse> {
    let trainer = state.controller.verify(&params.verify).await;

    let audio = match (&trainer, params.speak) {
        (Some(t), true) => state
            .controller
            .service()
            .speak_verification(&t.full_name, t.status)
            .await
            .map(|bytes| BASE64.encode(bytes)),
        _ => None,
    };

    Json(VerifyResponse {
        verified: trainer.is_some(),
        trainer,
        audio,
    })
}
