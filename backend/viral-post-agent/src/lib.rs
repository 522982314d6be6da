//! Viral Post Agent - Gemini-backed campaign generation core
//!
//! This crate provides:
//! - Static platform profiles (TikTok, Instagram, YouTube, X)
//! - An AI gateway for campaign posts, thumbnails, deep analysis, refinement and chat
//! - A Gemini REST client behind the `GenerativeModel` trait
//! - State controllers that sequence gateway calls and discard stale results

pub mod config;
pub mod controller;
pub mod error;
pub mod gateway;
pub mod key_selection;
pub mod models;
pub mod providers;
pub mod telemetry;

pub use config::Config;
pub use controller::{
    CampaignController, CampaignState, ChatPanel, ImageStudio, PostCard, RequestOutcome,
};
pub use error::{GatewayError, Result};
pub use gateway::{AiGateway, ModelSettings};
pub use key_selection::KeySelector;
pub use models::{ChatMessage, ChatRole, Conversation, GeneratedPost, ImageSize, Platform};
pub use providers::{GeminiClient, GenerativeModel};
