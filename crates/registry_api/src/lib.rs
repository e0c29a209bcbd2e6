pub mod handlers;
pub mod routes;

use std::sync::Arc;

use registry_service::{AuthClient, RegistryController};

#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<RegistryController>,
    pub auth: AuthClient,
}
