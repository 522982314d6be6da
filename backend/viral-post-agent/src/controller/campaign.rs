//! Campaign state: topic, description and the generated posts
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

use super::generation::GenerationCounter;
use super::RequestOutcome;
use crate::error::{GatewayError, Result};
use crate::gateway::AiGateway;
use crate::models::GeneratedPost;

pub const DEFAULT_TOPIC: &str = "LETSGETITAI";

pub const DEFAULT_DESCRIPTION: &str = "An AI accountability coach that prevents people from quitting their fitness goals in February. It uses 3AM text nudges and behavioral science.";

pub const EMPTY_CAMPAIGN_MESSAGE: &str = "No content was generated. Please try again.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampaignState {
    pub topic: String,
    pub description: String,
    pub posts: Vec<GeneratedPost>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for CampaignState {
    fn default() -> Self {
        Self {
            topic: DEFAULT_TOPIC.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            posts: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

#[derive(Default)]
struct CampaignInner {
    state: CampaignState,
    generations: GenerationCounter,
}

/// Sequences campaign generation and captures its errors for display
pub struct CampaignController {
    gateway: Arc<AiGateway>,
    inner: RwLock<CampaignInner>,
}

impl CampaignController {
    pub fn new(gateway: Arc<AiGateway>) -> Self {
        Self {
            gateway,
            inner: RwLock::new(CampaignInner::default()),
        }
    }

    pub fn with_brief(
        gateway: Arc<AiGateway>,
        topic: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let state = CampaignState {
            topic: topic.into(),
            description: description.into(),
            ..Default::default()
        };
        Self {
            gateway,
            inner: RwLock::new(CampaignInner {
                state,
                generations: GenerationCounter::default(),
            }),
        }
    }

    pub async fn set_topic(&self, topic: impl Into<String>) {
        self.inner.write().await.state.topic = topic.into();
    }

    pub async fn set_description(&self, description: impl Into<String>) {
        self.inner.write().await.state.description = description.into();
    }

    pub async fn dismiss_error(&self) {
        self.inner.write().await.state.error = None;
    }

    pub async fn snapshot(&self) -> CampaignState {
        self.inner.read().await.state.clone()
    }

    /// Generate posts for the current brief.
    ///
    /// A blank topic is rejected before any model call and leaves state
    /// untouched. Failures are captured in `error`, not returned.
    pub async fn generate(&self) -> Result<RequestOutcome> {
        let (generation, topic, description) = {
            let mut inner = self.inner.write().await;
            if inner.state.topic.trim().is_empty() {
                return Err(GatewayError::InvalidInput(
                    "topic must not be empty".to_string(),
                ));
            }

            let generation = inner.generations.issue();
            inner.state.loading = true;
            inner.state.error = None;
            (
                generation,
                inner.state.topic.clone(),
                inner.state.description.clone(),
            )
        };

        info!(generation = generation.value(), topic = %topic, "Generating campaign");
        let result = self.gateway.generate_posts(&topic, &description).await;

        let mut inner = self.inner.write().await;
        if !inner.generations.is_current(generation) {
            debug!(generation = generation.value(), "Discarding stale campaign result");
            return Ok(RequestOutcome::Stale);
        }

        inner.state.loading = false;
        match result {
            Ok(posts) if !posts.is_empty() => {
                inner.state.posts = posts;
                Ok(RequestOutcome::Applied)
            }
            Ok(_) => {
                inner.state.error = Some(EMPTY_CAMPAIGN_MESSAGE.to_string());
                Ok(RequestOutcome::Failed)
            }
            Err(e) => {
                error!(error = %e, "Campaign generation failed");
                inner.state.error = Some(e.user_message());
                Ok(RequestOutcome::Failed)
            }
        }
    }
}
