//! Password authentication against the hosted identity service.
//!
//! Tokens are opaque bearer strings; nothing here inspects or refreshes
//! them. Admin-only surfaces check for a live session, not for roles.

use registry_core::error::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user: AuthUser,
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

impl AuthClient {
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        }
    }

    /// Exchanges credentials for a session. Bad credentials and an
    /// unreachable identity service both surface as an auth failure; the
    /// caller has nothing useful to do differently.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let url = format!("{}/token?grant_type=password", self.base_url);
        let response = self
            .http
            .post(&url)
            .header("apikey", &self.anon_key)
            .json(&PasswordGrant { email, password })
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "identity service unreachable");
                Error::Auth
            })?;

        if !response.status().is_success() {
            return Err(Error::Auth);
        }

        response.json::<Session>().await.map_err(|e| {
            tracing::warn!(error = %e, "malformed session response");
            Error::Auth
        })
    }

    /// Revokes the token server-side. A failure here still ends the local
    /// session, so the error is reported but non-fatal to callers.
    pub async fn logout(&self, access_token: &str) -> Result<()> {
        let url = format!("{}/logout", self.base_url);
        self.http
            .post(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "logout call failed");
                Error::Auth
            })?;
        Ok(())
    }

    /// Resolves a bearer token back to its user, or `None` when the token is
    /// expired, revoked or garbage.
    pub async fn current_user(&self, access_token: &str) -> Option<AuthUser> {
        let url = format!("{}/user", self.base_url);
        let response = self
            .http
            .get(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .ok()?;

        if !response.status().is_success() {
            return None;
        }
        response.json::<AuthUser>().await.ok()
    }
}
