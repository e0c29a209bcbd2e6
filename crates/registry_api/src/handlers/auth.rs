use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use registry_service::Session;
use serde::Deserialize;

use super::ApiResult;
use crate::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<Session>> {
    state.controller.begin_login();
    let session = match state.auth.login(&request.email, &request.password).await {
        Ok(session) => session,
        Err(e) => {
            // Failed attempts drop back to the public surface.
            state.controller.on_session_change(false);
            return Err(e.into());
        }
    };
    state.controller.on_session_change(true);
    Ok(Json(session))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequest {
    pub access_token: String,
}

pub async fn logout(
    State(state): State<AppState>,
    Json(request): Json<LogoutRequest>,
) -> ApiResult<StatusCode> {
    // The local session ends even if the remote revocation fails.
    let revoked = state.auth.logout(&request.access_token).await;
    state.controller.on_session_change(false);
    revoked?;
    Ok(StatusCode::NO_CONTENT)
}
