pub mod ai;
pub mod auth;
pub mod config;
pub mod controller;
pub mod documents;
pub mod insights;
pub mod mailer;
pub mod notifications;
pub mod trainers;

use aws_config::meta::region::RegionProviderChain;
use aws_sdk_s3::{config::Region, Client as S3Client};
use sqlx::PgPool;

use crate::ai::GenAiClient;
use crate::config::Config;
use crate::mailer::MailDispatcher;

// Convenience re-exports (keeps call-sites clean)
pub use auth::{AuthClient, AuthUser, Session};
pub use controller::{ActivityEntry, AppMode, RegistryController};
pub use notifications::EmailDraft;

#[derive(Clone)]
pub struct RegistryService {
    pub pool: PgPool,
    pub s3: S3Client,
    pub bucket: String,
    s3_public_base: String,
    ai: GenAiClient,
    mailer: MailDispatcher,
}

impl RegistryService {
    pub fn new(pool: PgPool, s3: S3Client, config: &Config) -> Self {
        Self {
            pool,
            s3,
            bucket: config.s3_bucket.clone(),
            s3_public_base: config.s3_endpoint.clone(),
            ai: GenAiClient::new(&config.genai_endpoint, &config.genai_api_key),
            mailer: MailDispatcher::new(&config.mail_function_url, &config.auth_anon_key),
        }
    }
}

/// Builds the object-storage client. We must force "Path Style" addressing
/// for MinIO (localhost compatibility).
pub async fn s3_client_from_config(config: &Config) -> S3Client {
    let region_provider =
        RegionProviderChain::default_provider().or_else(Region::new(config.s3_region.clone()));
    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await;
    let s3_config = aws_sdk_s3::config::Builder::from(&aws_config)
        .force_path_style(true)
        .endpoint_url(&config.s3_endpoint)
        .build();
    S3Client::from_conf(s3_config)
}
