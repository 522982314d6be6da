//! Domain types shared by the gateway and the controllers

pub mod chat;
pub mod image;
pub mod platform;
pub mod post;

pub use chat::{ChatMessage, ChatRole, Conversation};
pub use image::ImageSize;
pub use platform::{Platform, PlatformProfile};
pub use post::GeneratedPost;
