use axum::routing::{delete, get, patch, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::AppState;

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Public portal
        .route("/api/verify", get(handlers::verify::verify))
        // Registry administration
        .route("/api/trainers", get(handlers::trainers::list))
        .route("/api/trainers", post(handlers::trainers::register))
        .route("/api/trainers/:id", patch(handlers::trainers::amend))
        .route("/api/trainers/:id", delete(handlers::trainers::revoke))
        .route("/api/trainers/:id/documents", post(handlers::documents::upload))
        .route("/api/sync", post(handlers::trainers::sync))
        // Notifications
        .route(
            "/api/trainers/:id/notifications/draft",
            post(handlers::notifications::draft),
        )
        .route(
            "/api/trainers/:id/notifications/send",
            post(handlers::notifications::send),
        )
        .route("/api/notifications/logs", get(handlers::notifications::logs))
        // Dashboard
        .route("/api/stats", get(handlers::stats::dashboard))
        .route("/api/activity", get(handlers::stats::activity))
        .route("/api/insights/summary", get(handlers::insights::summary))
        .route("/api/insights/summary", post(handlers::insights::refresh_summary))
        .route("/api/insights/bio", post(handlers::insights::generate_bio))
        .route("/api/insights/certificate", post(handlers::insights::scan_certificate))
        .route("/api/insights/card", post(handlers::insights::scan_card))
        // Sessions
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/auth/logout", post(handlers::auth::logout))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
