//! Supported platforms and their engagement mechanics
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Social platform a post is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Tiktok,
    Instagram,
    Youtube,
    X,
}

/// Static display metadata describing one platform's algorithm
#[derive(Debug, PartialEq, Eq)]
pub struct PlatformProfile {
    pub name: &'static str,
    pub icon: &'static str,
    pub mechanics: &'static str,
    pub rules: &'static [&'static str],
}

static TIKTOK_PROFILE: PlatformProfile = PlatformProfile {
    name: "TikTok",
    icon: "🎵",
    mechanics: "3-sec hook + pattern interrupt + curiosity gap + sound design",
    rules: &[
        "First 3 seconds determine 90% of completion",
        "Use contrarian/relatable opening",
        "Trending audio or silence break",
        "CTA at 80% through (hold till end)",
    ],
};

static INSTAGRAM_PROFILE: PlatformProfile = PlatformProfile {
    name: "Instagram",
    icon: "📸",
    mechanics: "Visual hook + story progression + emotional arc + hashtag strategy",
    rules: &[
        "First line is EVERYTHING (hook in 5 words)",
        "Build tension through carousel/caption",
        "Emotional climax = save/share trigger",
        "Strategic hashtag selection",
    ],
};

static YOUTUBE_PROFILE: PlatformProfile = PlatformProfile {
    name: "YouTube",
    icon: "▶️",
    mechanics: "Title/thumbnail CTR + retention curve + pattern breaks",
    rules: &[
        "Title: curiosity gap + number + benefit",
        "Hook first 15 seconds = watch time retention",
        "Pattern interrupt every 20 seconds",
        "Thumbnail: high contrast + face/emotion",
    ],
};

static X_PROFILE: PlatformProfile = PlatformProfile {
    name: "X",
    icon: "𝕏",
    mechanics: "Quote-tweet bait + contrarian data + emotional hit",
    rules: &[
        "Lead with controversial/counterintuitive take",
        "Back with 1 data point (specificity > vagueness)",
        "End with question or CTA that triggers replies",
        "Thread potential",
    ],
};

impl Platform {
    /// All platforms, in campaign order
    pub const ALL: [Platform; 4] = [
        Platform::Tiktok,
        Platform::Instagram,
        Platform::Youtube,
        Platform::X,
    ];

    /// Platform used when the model returns an identifier we don't know
    pub const FALLBACK: Platform = Platform::Tiktok;

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Tiktok => "tiktok",
            Platform::Instagram => "instagram",
            Platform::Youtube => "youtube",
            Platform::X => "x",
        }
    }

    pub fn profile(&self) -> &'static PlatformProfile {
        match self {
            Platform::Tiktok => &TIKTOK_PROFILE,
            Platform::Instagram => &INSTAGRAM_PROFILE,
            Platform::Youtube => &YOUTUBE_PROFILE,
            Platform::X => &X_PROFILE,
        }
    }

    /// Case-insensitive lookup of a platform identifier
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "tiktok" => Some(Platform::Tiktok),
            "instagram" => Some(Platform::Instagram),
            "youtube" => Some(Platform::Youtube),
            "x" => Some(Platform::X),
            _ => None,
        }
    }

    /// Lookup that never fails: unknown identifiers map to [`Platform::FALLBACK`]
    pub fn resolve(key: &str) -> Self {
        Self::from_key(key).unwrap_or_else(|| {
            warn!(
                platform = %key,
                fallback = Self::FALLBACK.as_str(),
                "Unknown platform in model output, using fallback profile"
            );
            Self::FALLBACK
        })
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
