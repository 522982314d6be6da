//! AI gateway: the single boundary between the application and the model
//!
//! Each operation builds a prompt, performs exactly one model call, and maps
//! the reply into domain values. The gateway holds no mutable state and can be
//! shared freely between tasks.

pub mod parsing;
pub mod prompts;
pub mod session;

use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{GatewayError, Result};
use crate::models::{ChatMessage, GeneratedPost, ImageSize};
use crate::providers::{
    GeminiClient, GenerateContentRequest, GenerationConfig, GenerativeModel, ImageConfig,
    ThinkingConfig,
};

pub use session::ChatSession;

/// Model names and tuning used per operation
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSettings {
    pub posts_model: String,
    pub refine_model: String,
    pub image_model: String,
    pub analysis_model: String,
    pub chat_model: String,
    pub thinking_budget: u32,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Config::default().model_settings()
    }
}

pub struct AiGateway {
    backend: Arc<dyn GenerativeModel>,
    settings: ModelSettings,
}

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GatewayError::InvalidInput(format!("{} must not be empty", field)));
    }
    Ok(())
}

impl AiGateway {
    pub fn new(backend: Arc<dyn GenerativeModel>, settings: ModelSettings) -> Self {
        Self { backend, settings }
    }

    /// Build a gateway backed by the Gemini REST API
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = GeminiClient::from_config(config)?;
        info!(
            posts_model = %config.gemini_posts_model,
            image_model = %config.gemini_image_model,
            "AI gateway initialized"
        );
        Ok(Self::new(Arc::new(client), config.model_settings()))
    }

    /// Build a gateway from `.env` and the process environment
    pub fn from_env() -> Result<Self> {
        let config = Config::from_env()?;
        Self::from_config(&config)
    }

    pub fn settings(&self) -> &ModelSettings {
        &self.settings
    }

    /// Generate one post per platform for a campaign
    pub async fn generate_posts(&self, topic: &str, description: &str) -> Result<Vec<GeneratedPost>> {
        require_non_empty("topic", topic)?;

        let request = GenerateContentRequest::from_prompt(prompts::campaign_prompt(topic, description))
            .with_generation_config(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(parsing::campaign_response_schema()),
                ..Default::default()
            });

        let start = Instant::now();
        let response = self
            .backend
            .generate_content(&self.settings.posts_model, &request)
            .await?;

        let posts = parsing::parse_campaign_posts(&response.text())?;

        info!(
            provider = self.backend.name(),
            posts = posts.len(),
            elapsed_ms = start.elapsed().as_millis(),
            "Campaign posts generated"
        );

        Ok(posts)
    }

    /// Generate a 16:9 thumbnail and return it as a PNG data URI
    pub async fn generate_image(&self, prompt: &str, size: ImageSize) -> Result<String> {
        require_non_empty("prompt", prompt)?;

        let request = GenerateContentRequest::from_prompt(prompts::thumbnail_prompt(prompt))
            .with_generation_config(GenerationConfig {
                image_config: Some(ImageConfig {
                    aspect_ratio: prompts::THUMBNAIL_ASPECT_RATIO.to_string(),
                    image_size: size,
                }),
                ..Default::default()
            });

        let start = Instant::now();
        let response = self
            .backend
            .generate_content(&self.settings.image_model, &request)
            .await?;

        let uri = parsing::image_data_uri(&response).map_err(|e| {
            if matches!(e, GatewayError::NoImageReturned) {
                warn!(
                    block_reason = response.block_reason().unwrap_or("none"),
                    "Image response contained no inline data"
                );
            }
            e
        })?;

        info!(
            size = size.as_str(),
            elapsed_ms = start.elapsed().as_millis(),
            "Thumbnail generated"
        );

        Ok(uri)
    }

    /// Strategic teardown of a post, using an elevated thinking budget
    pub async fn deep_analyze(&self, content: &str) -> Result<String> {
        require_non_empty("content", content)?;

        let request = GenerateContentRequest::from_prompt(prompts::teardown_prompt(content))
            .with_generation_config(GenerationConfig {
                thinking_config: Some(ThinkingConfig {
                    thinking_budget: self.settings.thinking_budget,
                }),
                ..Default::default()
            });

        let response = self
            .backend
            .generate_content(&self.settings.analysis_model, &request)
            .await?;

        let text = response.text();
        if text.trim().is_empty() {
            return Ok(prompts::NO_ANALYSIS_FALLBACK.to_string());
        }
        Ok(text)
    }

    /// Rewrite a post following free-text feedback.
    ///
    /// An empty reply leaves the original content unchanged.
    pub async fn refine(&self, content: &str, feedback: &str) -> Result<String> {
        require_non_empty("content", content)?;
        require_non_empty("feedback", feedback)?;

        let request = GenerateContentRequest::from_prompt(prompts::refine_prompt(content, feedback));

        let response = self
            .backend
            .generate_content(&self.settings.refine_model, &request)
            .await?;

        let text = response.text();
        if text.trim().is_empty() {
            return Ok(content.to_string());
        }
        Ok(text)
    }

    /// Reply to the latest user message of a conversation
    pub async fn chat(&self, history: &[ChatMessage]) -> Result<String> {
        let (prior, latest) = session::split_latest_user_turn(history)?;

        let session = ChatSession::new(
            self.backend.as_ref(),
            &self.settings.chat_model,
            prompts::STRATEGIST_SYSTEM_INSTRUCTION,
            prior,
        );

        let response = session.send_message(latest).await?;

        let text = response.text();
        if text.trim().is_empty() {
            return Ok(prompts::CHAT_FALLBACK.to_string());
        }
        Ok(text)
    }
}
