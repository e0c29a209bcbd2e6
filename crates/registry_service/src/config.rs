use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub s3_endpoint: String,
    pub s3_bucket: String,
    pub s3_region: String,
    pub mail_function_url: String,
    pub genai_endpoint: String,
    pub genai_api_key: String,
    pub auth_url: String,
    pub auth_anon_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok(); // Load .env if present

        Ok(Config {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,

            s3_endpoint: env::var("S3_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:9000".to_string()),

            s3_bucket: env::var("S3_BUCKET").unwrap_or_else(|_| "trainer-vault".to_string()),

            s3_region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),

            mail_function_url: env::var("MAIL_FUNCTION_URL").unwrap_or_else(|_| {
                "http://localhost:54321/functions/v1/send-email".to_string()
            }),

            genai_endpoint: env::var("GENAI_ENDPOINT")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string()),

            // AI features degrade to placeholders without a key, so this is
            // optional on purpose.
            genai_api_key: env::var("GENAI_API_KEY").unwrap_or_default(),

            auth_url: env::var("AUTH_URL")
                .unwrap_or_else(|_| "http://localhost:54321/auth/v1".to_string()),

            auth_anon_key: env::var("AUTH_ANON_KEY").unwrap_or_default(),
        })
    }
}
