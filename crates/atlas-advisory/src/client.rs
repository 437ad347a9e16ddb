//! Minimal HTTP client for the generative language API.

use crate::error::AdvisoryError;
use crate::types::{GenerateRequest, GenerateResponse};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

// ─── GenerativeClient ───────────────────────────────────────────────────────

/// One configured connection to a `generateContent` endpoint. The request
/// timeout here is a transport bound; callers that must never block on the
/// advisory wrap the call in their own deadline as well.
#[derive(Debug, Clone)]
pub struct GenerativeClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GenerativeClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, AdvisoryError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
        })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Points the client at a different endpoint; used by tests to target a
    /// local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut url = base_url.into();
        if !url.ends_with('/') {
            url.push('/');
        }
        self.base_url = url;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, AdvisoryError> {
        let url = format!("{}models/{}:generateContent", self.base_url, self.model);
        tracing::debug!(%url, "sending advisory request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AdvisoryError::Status {
                code: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
