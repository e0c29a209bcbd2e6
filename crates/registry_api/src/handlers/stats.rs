use axum::extract::State;
use axum::Json;
use registry_core::models::DashboardStats;
use registry_service::{ActivityEntry, AppMode};
use serde::Serialize;

use crate::AppState;

pub async fn dashboard(State(state): State<AppState>) -> Json<DashboardStats> {
    Json(state.controller.stats().await)
}

#[derive(Serialize)]
pub struct ActivityResponse {
    pub entries: Vec<ActivityEntry>,
    pub mode: AppMode,
    pub setup_required: bool,
}

pub async fn activity(State(state): State<AppState>) -> Json<ActivityResponse> {
    Json(ActivityResponse {
        entries: state.controller.recent_activity(),
        mode: state.controller.mode(),
        setup_required: state.controller.setup_required(),
    })
}
