use serde::{Deserialize, Serialize};

/// Resolution tier passed through to image generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ImageSize {
    #[default]
    #[serde(rename = "1K")]
    OneK,
    #[serde(rename = "2K")]
    TwoK,
    #[serde(rename = "4K")]
    FourK,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::OneK => "1K",
            ImageSize::TwoK => "2K",
            ImageSize::FourK => "4K",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_wire_names() {
        assert_eq!(serde_json::to_string(&ImageSize::FourK).unwrap(), "\"4K\"");
        assert_eq!(ImageSize::default(), ImageSize::OneK);
        assert_eq!(ImageSize::TwoK.as_str(), "2K");
    }
}
