//! Google Gemini REST API integration
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

use super::types::{ApiErrorEnvelope, GenerateContentRequest, GenerateContentResponse};
use super::GenerativeModel;
use crate::config::Config;
use crate::error::{GatewayError, Result};

pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Keeps the key out of request URLs, and so out of error text and logs
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini API client authenticated with an API key
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    /// Create a client against the public endpoint with no request timeout
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_API_BASE_URL, None)
    }

    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        config
            .validate()
            .map_err(|e| GatewayError::Configuration(e.to_string()))?;

        Self::with_base_url(
            config.resolved_api_key(),
            config.gemini_api_base_url.clone(),
            config.request_timeout(),
        )
    }

    /// Check if an API key is present
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

/// Pull the provider's own message out of an error body, if it has one
fn provider_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        info!(model = %model, "Calling Gemini generateContent");
        let start = Instant::now();

        let response = self
            .client
            .post(self.endpoint(model))
            .header(API_KEY_HEADER, &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(model = %model, "Gemini request failed");
                GatewayError::from(e)
            })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = provider_error_message(&body);
            error!(
                model = %model,
                status = %status,
                error = %message,
                "Gemini API returned error"
            );
            return Err(GatewayError::provider(Some(status.as_u16()), message));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;

        debug!(
            model = %model,
            elapsed_ms = start.elapsed().as_millis(),
            candidates = parsed.candidates.len(),
            "Gemini response received"
        );

        Ok(parsed)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
