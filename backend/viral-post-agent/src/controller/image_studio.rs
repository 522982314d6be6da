//! Thumbnail generation panel
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use super::generation::GenerationCounter;
use super::RequestOutcome;
use crate::error::{GatewayError, Result};
use crate::gateway::AiGateway;
use crate::key_selection::KeySelector;
use crate::models::ImageSize;

pub const KEY_ERROR_MESSAGE: &str = "API Key Error. Please re-select your key.";

pub const IMAGE_FAILURE_MESSAGE: &str = "Failed to generate image.";

pub fn default_image_prompt(topic: &str) -> String {
    format!(
        "A high-retention social media thumbnail for {topic}, vibrant colors, emotional face, attention-grabbing text overlay"
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageStudioState {
    pub prompt: String,
    pub size: ImageSize,
    pub image_url: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

struct ImageStudioInner {
    state: ImageStudioState,
    generations: GenerationCounter,
}

pub struct ImageStudio {
    gateway: Arc<AiGateway>,
    key_selector: Option<Arc<dyn KeySelector>>,
    inner: RwLock<ImageStudioInner>,
}

fn failure_message(err: &GatewayError) -> String {
    match err {
        GatewayError::Provider { message, .. } if message.trim().is_empty() => {
            IMAGE_FAILURE_MESSAGE.to_string()
        }
        other => other.user_message(),
    }
}

impl ImageStudio {
    pub fn new(gateway: Arc<AiGateway>, topic: &str) -> Self {
        Self {
            gateway,
            key_selector: None,
            inner: RwLock::new(ImageStudioInner {
                state: ImageStudioState {
                    prompt: default_image_prompt(topic),
                    size: ImageSize::default(),
                    image_url: None,
                    loading: false,
                    error: None,
                },
                generations: GenerationCounter::default(),
            }),
        }
    }

    pub fn with_key_selector(mut self, selector: Arc<dyn KeySelector>) -> Self {
        self.key_selector = Some(selector);
        self
    }

    pub async fn set_prompt(&self, prompt: impl Into<String>) {
        self.inner.write().await.state.prompt = prompt.into();
    }

    pub async fn set_size(&self, size: ImageSize) {
        self.inner.write().await.state.size = size;
    }

    pub async fn snapshot(&self) -> ImageStudioState {
        self.inner.read().await.state.clone()
    }

    /// Generate a thumbnail for the current prompt and size.
    ///
    /// When the host can select keys and none is active, the user is asked to
    /// pick one and no image is generated on this call.
    pub async fn generate(&self) -> Result<RequestOutcome> {
        if let Some(selector) = &self.key_selector {
            if !selector.has_active_key().await {
                info!("No active API key, requesting key selection");
                selector.request_key_selection().await?;
                return Ok(RequestOutcome::KeySelectionRequested);
            }
        }

        let (generation, prompt, size) = {
            let mut inner = self.inner.write().await;
            let generation = inner.generations.issue();
            inner.state.loading = true;
            inner.state.error = None;
            (generation, inner.state.prompt.clone(), inner.state.size)
        };

        let result = self.gateway.generate_image(&prompt, size).await;

        let reselect_key = {
            let mut inner = self.inner.write().await;
            if !inner.generations.is_current(generation) {
                debug!(generation = generation.value(), "Discarding stale image result");
                return Ok(RequestOutcome::Stale);
            }

            inner.state.loading = false;
            match result {
                Ok(uri) => {
                    inner.state.image_url = Some(uri);
                    return Ok(RequestOutcome::Applied);
                }
                Err(e) if e.is_entity_not_found() => {
                    error!(error = %e, "Image generation rejected the active key");
                    inner.state.error = Some(KEY_ERROR_MESSAGE.to_string());
                    true
                }
                Err(e) => {
                    error!(error = %e, "Image generation failed");
                    inner.state.error = Some(failure_message(&e));
                    false
                }
            }
        };

        if reselect_key {
            if let Some(selector) = &self.key_selector {
                if let Err(e) = selector.request_key_selection().await {
                    warn!(error = %e, "Key selection failed");
                }
            }
        }

        Ok(RequestOutcome::Failed)
    }
}
