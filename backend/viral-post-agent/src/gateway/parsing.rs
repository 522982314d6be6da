//! Schema for campaign output and strict parsing of model replies
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::error::{GatewayError, Result};
use crate::models::{GeneratedPost, Platform};
use crate::providers::GenerateContentResponse;

const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// One post as the model returns it, before profile enrichment.
///
/// Every field is required; nulls and wrong types are rejected.
#[derive(Debug, Deserialize)]
struct PostDraft {
    platform: String,
    content: String,
    explanation: String,
    virality_score: f64,
}

/// Response schema requested for campaign generation
pub fn campaign_response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "platform": { "type": "STRING" },
                "content": { "type": "STRING" },
                "explanation": { "type": "STRING" },
                "virality_score": { "type": "NUMBER" }
            },
            "propertyOrdering": ["platform", "content", "explanation", "virality_score"],
            "required": ["platform", "content", "explanation", "virality_score"]
        }
    })
}

/// Strip a surrounding markdown code fence, if the model added one
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Parse campaign JSON into posts, enriching each with its platform profile
pub fn parse_campaign_posts(text: &str) -> Result<Vec<GeneratedPost>> {
    let body = strip_code_fence(text);
    let body = if body.is_empty() { "[]" } else { body };

    let drafts: Vec<PostDraft> = serde_json::from_str(body).map_err(|e| {
        warn!(error = %e, "Campaign output did not match the requested schema");
        GatewayError::MalformedResponse(format!("Failed to parse campaign posts: {}", e))
    })?;

    Ok(drafts
        .into_iter()
        .map(|draft| {
            GeneratedPost::from_profile(
                Platform::resolve(&draft.platform),
                draft.content,
                draft.explanation,
                draft.virality_score,
            )
        })
        .collect())
}

/// Find the image payload in a response and wrap it as a PNG data URI
pub fn image_data_uri(response: &GenerateContentResponse) -> Result<String> {
    let inline = response
        .first_inline_data()
        .ok_or(GatewayError::NoImageReturned)?;

    STANDARD.decode(inline.data.as_bytes()).map_err(|e| {
        GatewayError::MalformedResponse(format!("Image payload is not valid base64: {}", e))
    })?;

    Ok(format!("{}{}", PNG_DATA_URI_PREFIX, inline.data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_enriches_with_profile() {
        let posts = parse_campaign_posts(
            r#"[{"platform":"YouTube","content":"C","explanation":"E","virality_score":91.5}]"#,
        )
        .unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].platform, Platform::Youtube);
        assert_eq!(posts[0].name, "YouTube");
        assert_eq!(posts[0].virality_score, 91.5);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let err = parse_campaign_posts(r#"[{"platform":"x","content":"C","explanation":"E"}]"#)
            .unwrap_err();
        assert!(matches!(err, GatewayError::MalformedResponse(_)));
    }

    #[test]
    fn test_null_platform_is_rejected() {
        let err = parse_campaign_posts(
            r#"[{"platform":null,"content":"C","explanation":"E","virality_score":3}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, GatewayError::MalformedResponse(_)));
    }

    #[test]
    fn test_string_score_is_rejected() {
        let err = parse_campaign_posts(
            r#"[{"platform":"x","content":"C","explanation":"E","virality_score":"high"}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, GatewayError::MalformedResponse(_)));
    }

    #[test]
    fn test_empty_text_is_empty_campaign() {
        assert!(parse_campaign_posts("").unwrap().is_empty());
        assert!(parse_campaign_posts("  []  ").unwrap().is_empty());
    }

    #[test]
    fn test_code_fence_is_stripped() {
        let text = "```json\n[{\"platform\":\"x\",\"content\":\"C\",\"explanation\":\"E\",\"virality_score\":1}]\n```";
        let posts = parse_campaign_posts(text).unwrap();
        assert_eq!(posts[0].platform, Platform::X);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let posts = parse_campaign_posts(
            r##"[{"platform":"instagram","content":"C","explanation":"E","virality_score":5,"hashtags":["#a"]}]"##,
        )
        .unwrap();
        assert_eq!(posts[0].platform, Platform::Instagram);
    }

    #[test]
    fn test_schema_requires_all_fields() {
        let schema = campaign_response_schema();
        assert_eq!(schema["type"], "ARRAY");
        assert_eq!(
            schema["items"]["required"],
            json!(["platform", "content", "explanation", "virality_score"])
        );
    }

    #[test]
    fn test_invalid_base64_image_is_malformed() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": [
                {"inlineData": {"mimeType": "image/png", "data": "not base64!"}}
            ]}}]
        }))
        .unwrap();

        assert!(matches!(
            image_data_uri(&response),
            Err(GatewayError::MalformedResponse(_))
        ));
    }
}
