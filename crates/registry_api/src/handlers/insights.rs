use axum::extract::State;
use axum::Json;
use registry_service::insights::CertificateScan;
use serde::{Deserialize, Serialize};

use crate::AppState;

#[derive(Serialize)]
pub struct SummaryResponse {
    /// Absent until the first background refresh has completed.
    pub summary: Option<String>,
}

pub async fn summary(State(state): State<AppState>) -> Json<SummaryResponse> {
    Json(SummaryResponse {
        summary: state.controller.executive_summary().await,
    })
}

pub async fn refresh_summary(State(state): State<AppState>) -> Json<SummaryResponse> {
    state.controller.spawn_summary_refresh();
    Json(SummaryResponse {
        summary: state.controller.executive_summary().await,
    })
}

#[derive(Deserialize)]
pub struct ImagePayload {
    /// Base64 image data, with or without a data-URI prefix.
    pub image: String,
}

#[derive(Serialize)]
pub struct ScanResponse {
    pub scan: Option<CertificateScan>,
}

pub async fn scan_certificate(
    State(state): State<AppState>,
    Json(payload): Json<ImagePayload>,
) -> Json<ScanResponse> {
    Json(ScanResponse {
        scan: state
            .controller
            .service()
            .analyze_certificate_image(&payload.image)
            .await,
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardScanResponse {
    pub certification_id: Option<String>,
}

pub async fn scan_card(
    State(state): State<AppState>,
    Json(payload): Json<ImagePayload>,
) -> Json<CardScanResponse> {
    Json(CardScanResponse {
        certification_id: state
            .controller
            .service()
            .extract_id_from_card(&payload.image)
            .await,
    })
}

#[derive(Deserialize)]
pub struct BioRequest {
    pub name: String,
    #[serde(default)]
    pub specialties: Vec<String>,
}

#[derive(Serialize)]
pub struct BioResponse {
    pub bio: Option<String>,
}

pub async fn generate_bio(
    State(state): State<AppState>,
    Json(request): Json<BioRequest>,
) -> Json<BioResponse> {
    Json(BioResponse {
        bio: state
            .controller
            .service()
            .generate_trainer_bio(&request.name, &request.specialties)
            .await,
    })
}
