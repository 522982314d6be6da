//! Configuration for the viral post agent
use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::time::Duration;

use crate::gateway::ModelSettings;
use crate::providers::gemini::DEFAULT_API_BASE_URL;

/// Main configuration struct, loaded from environment variables
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Gemini API key
    #[serde(default)]
    pub api_key: String,

    /// Alternative name for the key, used when `API_KEY` is unset
    #[serde(default)]
    pub gemini_api_key: String,

    /// Base URL of the Generative Language REST API
    #[serde(default = "default_api_base_url")]
    pub gemini_api_base_url: String,

    /// Model used for campaign post generation
    #[serde(default = "default_flash_model")]
    pub gemini_posts_model: String,

    /// Model used for post refinement
    #[serde(default = "default_flash_model")]
    pub gemini_refine_model: String,

    /// Model used for thumbnail generation
    #[serde(default = "default_image_model")]
    pub gemini_image_model: String,

    /// Model used for deep analysis
    #[serde(default = "default_pro_model")]
    pub gemini_analysis_model: String,

    /// Model used by the strategist chat
    #[serde(default = "default_pro_model")]
    pub gemini_chat_model: String,

    /// Thinking budget requested for deep analysis
    #[serde(default = "default_thinking_budget")]
    pub gemini_thinking_budget: u32,

    /// Per-request timeout; unset means requests wait indefinitely
    #[serde(default)]
    pub gemini_request_timeout_secs: Option<u64>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_flash_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_image_model() -> String {
    "gemini-3-pro-image-preview".to_string()
}

fn default_pro_model() -> String {
    "gemini-3-pro-preview".to_string()
}

fn default_thinking_budget() -> u32 {
    32768
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            gemini_api_key: String::new(),
            gemini_api_base_url: default_api_base_url(),
            gemini_posts_model: default_flash_model(),
            gemini_refine_model: default_flash_model(),
            gemini_image_model: default_image_model(),
            gemini_analysis_model: default_pro_model(),
            gemini_chat_model: default_pro_model(),
            gemini_thinking_budget: default_thinking_budget(),
            gemini_request_timeout_secs: None,
        }
    }
}

impl Config {
    /// Load configuration from `.env` and the process environment
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// `API_KEY`, falling back to `GEMINI_API_KEY`
    pub fn resolved_api_key(&self) -> &str {
        if self.api_key.trim().is_empty() {
            self.gemini_api_key.trim()
        } else {
            self.api_key.trim()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.resolved_api_key().is_empty() {
            return Err(anyhow!("API_KEY or GEMINI_API_KEY is required"));
        }

        if self.gemini_api_base_url.trim().is_empty() {
            return Err(anyhow!("Gemini API base URL is required"));
        }

        if self.gemini_request_timeout_secs == Some(0) {
            return Err(anyhow!("Request timeout must be greater than 0 when set"));
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.gemini_request_timeout_secs.map(Duration::from_secs)
    }

    pub fn model_settings(&self) -> ModelSettings {
        ModelSettings {
            posts_model: self.gemini_posts_model.clone(),
            refine_model: self.gemini_refine_model.clone(),
            image_model: self.gemini_image_model.clone(),
            analysis_model: self.gemini_analysis_model.clone(),
            chat_model: self.gemini_chat_model.clone(),
            thinking_budget: self.gemini_thinking_budget,
        }
    }
}
