//! Host capability for interactive API-key selection
use async_trait::async_trait;

use crate::error::Result;

/// Optional capability exposed by hosts that let the user pick an API key.
///
/// Only consulted before image generation.
#[async_trait]
pub trait KeySelector: Send + Sync {
    async fn has_active_key(&self) -> bool;

    /// Prompt the user to select a key, resolving once they have.
    async fn request_key_selection(&self) -> Result<()>;
}
