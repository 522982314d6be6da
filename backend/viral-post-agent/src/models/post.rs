use serde::{Deserialize, Serialize};

use super::Platform;

/// A campaign post for one platform, enriched with its profile metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPost {
    pub platform: Platform,
    /// Display name copied from the platform profile
    pub name: String,
    pub icon: String,
    /// Mechanics summary copied from the platform profile
    pub algorithm: String,
    pub content: String,
    /// One-line strategic explanation of why the post should perform
    pub explanation: String,
    /// Model-assigned score, nominally 0-100 but not bounded
    pub virality_score: f64,
}

impl GeneratedPost {
    pub fn from_profile(
        platform: Platform,
        content: String,
        explanation: String,
        virality_score: f64,
    ) -> Self {
        let profile = platform.profile();
        Self {
            platform,
            name: profile.name.to_string(),
            icon: profile.icon.to_string(),
            algorithm: profile.mechanics.to_string(),
            content,
            explanation,
            virality_score,
        }
    }
}
