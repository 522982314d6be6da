//! Per-post state: refinement and deep analysis of one card
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error};

use super::generation::GenerationCounter;
use super::RequestOutcome;
use crate::gateway::AiGateway;
use crate::models::GeneratedPost;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostCardState {
    pub post: GeneratedPost,
    pub refining: bool,
    pub analyzing: bool,
    pub analysis: Option<String>,
}

struct PostCardInner {
    state: PostCardState,
    refinements: GenerationCounter,
    analyses: GenerationCounter,
}

pub struct PostCard {
    gateway: Arc<AiGateway>,
    inner: RwLock<PostCardInner>,
}

impl PostCard {
    pub fn new(gateway: Arc<AiGateway>, post: GeneratedPost) -> Self {
        Self {
            gateway,
            inner: RwLock::new(PostCardInner {
                state: PostCardState {
                    post,
                    refining: false,
                    analyzing: false,
                    analysis: None,
                },
                refinements: GenerationCounter::default(),
                analyses: GenerationCounter::default(),
            }),
        }
    }

    pub async fn snapshot(&self) -> PostCardState {
        self.inner.read().await.state.clone()
    }

    pub async fn content(&self) -> String {
        self.inner.read().await.state.post.content.clone()
    }

    /// Rewrite the card's content. Blank feedback is a no-op.
    pub async fn refine(&self, feedback: &str) -> RequestOutcome {
        if feedback.trim().is_empty() {
            return RequestOutcome::Skipped;
        }

        let (generation, content) = {
            let mut inner = self.inner.write().await;
            let generation = inner.refinements.issue();
            inner.state.refining = true;
            (generation, inner.state.post.content.clone())
        };

        let result = self.gateway.refine(&content, feedback).await;

        let mut inner = self.inner.write().await;
        if !inner.refinements.is_current(generation) {
            debug!(generation = generation.value(), "Discarding stale refinement");
            return RequestOutcome::Stale;
        }

        inner.state.refining = false;
        match result {
            Ok(refined) => {
                inner.state.post.content = refined;
                RequestOutcome::Applied
            }
            Err(e) => {
                error!(platform = %inner.state.post.platform, error = %e, "Refinement failed");
                RequestOutcome::Failed
            }
        }
    }

    /// Run a deep teardown of the card's current content
    pub async fn deep_analyze(&self) -> RequestOutcome {
        let (generation, content) = {
            let mut inner = self.inner.write().await;
            let generation = inner.analyses.issue();
            inner.state.analyzing = true;
            (generation, inner.state.post.content.clone())
        };

        let result = self.gateway.deep_analyze(&content).await;

        let mut inner = self.inner.write().await;
        if !inner.analyses.is_current(generation) {
            debug!(generation = generation.value(), "Discarding stale analysis");
            return RequestOutcome::Stale;
        }

        inner.state.analyzing = false;
        match result {
            Ok(analysis) => {
                inner.state.analysis = Some(analysis);
                RequestOutcome::Applied
            }
            Err(e) => {
                error!(platform = %inner.state.post.platform, error = %e, "Deep analysis failed");
                RequestOutcome::Failed
            }
        }
    }
}
