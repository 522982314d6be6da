//! Generative model provider implementations

pub mod gemini;
pub mod types;

use async_trait::async_trait;

use crate::error::Result;

pub use gemini::GeminiClient;
pub use types::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    ImageConfig, InlineData, Part, PromptFeedback, ThinkingConfig,
};

/// A backend able to serve `generateContent` calls.
///
/// Implementations perform exactly one network call per invocation and keep
/// no per-call state, so one instance can be shared across tasks.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse>;

    /// Provider name, for logging
    fn name(&self) -> &str;
}
