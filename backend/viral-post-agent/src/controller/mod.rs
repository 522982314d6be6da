//! Application state controllers
//!
//! Each controller owns one piece of UI-facing state behind an async lock and
//! sequences gateway calls against it. Locks are never held across a model
//! call; results are applied only if their request is still the latest one.

pub mod campaign;
pub mod chat_panel;
pub mod generation;
pub mod image_studio;
pub mod post_card;

pub use campaign::{CampaignController, CampaignState};
pub use chat_panel::{ChatPanel, ChatPanelState};
pub use generation::{Generation, GenerationCounter};
pub use image_studio::{ImageStudio, ImageStudioState};
pub use post_card::{PostCard, PostCardState};

/// What happened to a controller request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// The result was written into state
    Applied,
    /// The call failed; the failure was captured in state or logged
    Failed,
    /// A newer request was issued meanwhile; the result was dropped
    Stale,
    /// Nothing to do (blank input or a request already pending)
    Skipped,
    /// The user was asked to select an API key instead
    KeySelectionRequested,
}
