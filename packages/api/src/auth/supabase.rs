//! # Hosted auth API (Supabase GoTrue)
//!
//! Password verification stays with the auth provider. [`SupabaseAuth`]
//! exchanges an email and password for the provider's user record via
//! `POST {supabase.url}/auth/v1/token?grant_type=password`, authenticated with
//! the project's public `apikey`. Only the user id and email are kept; the
//! access token is not needed because rows are read straight from Postgres.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Viewer;
use crate::settings::Settings;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid settings: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("auth API key is not configured")]
    MissingKey,

    #[error("auth request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Rejected(String),
}

/// The part of the provider's user object we keep.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
}

impl AuthUser {
    pub fn into_viewer(self) -> Viewer {
        Viewer {
            user_id: self.id,
            email: self.email,
        }
    }
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    user: AuthUser,
}

/// Error payloads differ between GoTrue versions.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

impl ErrorBody {
    fn reason(self, status: StatusCode) -> String {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .or(self.error)
            .unwrap_or_else(|| format!("sign-in rejected ({status})"))
    }
}

/// Client for the hosted auth API.
pub struct SupabaseAuth {
    http: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseAuth {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Create a client from `supabase.url` and `supabase.key`.
    pub fn from_settings() -> Result<Self, AuthError> {
        let settings = Settings::new()?;
        if settings.supabase.key.is_empty() {
            return Err(AuthError::MissingKey);
        }
        Ok(Self::new(settings.supabase.url, settings.supabase.key))
    }

    fn token_url(&self) -> String {
        format!(
            "{}/auth/v1/token?grant_type=password",
            self.base_url.trim_end_matches('/')
        )
    }

    /// Verify credentials with the provider and return its user record.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthUser, AuthError> {
        let response = self
            .http
            .post(self.token_url())
            .header("apikey", &self.api_key)
            .json(&PasswordGrant { email, password })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body: ErrorBody = response.json().await.unwrap_or_default();
            return Err(AuthError::Rejected(body.reason(status)));
        }

        let token: TokenResponse = response.json().await?;
        Ok(token.user)
    }
}
