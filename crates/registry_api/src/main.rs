use std::sync::Arc;

use registry_api::routes::app_router;
use registry_api::AppState;
use registry_service::config::Config;
use registry_service::{s3_client_from_config, AuthClient, RegistryController, RegistryService};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {:#}", e);
            std::process::exit(1);
        }
    };

    let pool = match PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("Failed to connect to the database: {}", e);
            std::process::exit(1);
        }
    };

    let s3 = s3_client_from_config(&config).await;
    let controller = Arc::new(RegistryController::new(RegistryService::new(
        pool, s3, &config,
    )));

    // Warm the caches. A missing schema is survivable: the portal reports
    // setup_required until `registry rebuild` has run.
    if let Err(e) = controller.load().await {
        tracing::warn!("initial sync failed: {}", e);
    }

    let state = AppState {
        controller,
        auth: AuthClient::new(&config.auth_url, &config.auth_anon_key),
    };
    let app = app_router(state);

    let listener = TcpListener::bind("0.0.0.0:3000").await.unwrap();
    tracing::info!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}
