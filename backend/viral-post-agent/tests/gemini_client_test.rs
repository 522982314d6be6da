// Wire-level tests for the Gemini REST client against a mock server

use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio_test::{assert_err, assert_ok};
use viral_post_agent::error::GENERIC_FAILURE_MESSAGE;
use viral_post_agent::{
    AiGateway, CampaignController, GatewayError, GeminiClient, ImageSize, ModelSettings,
    Platform, RequestOutcome,
};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-api-key";

fn gateway_for(server: &MockServer) -> AiGateway {
    let client = GeminiClient::with_base_url(
        API_KEY,
        format!("{}/v1beta", server.uri()),
        Some(Duration::from_secs(5)),
    )
    .unwrap();
    AiGateway::new(Arc::new(client), ModelSettings::default())
}

fn text_reply(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }],
        "usageMetadata": {"promptTokenCount": 42, "candidatesTokenCount": 128}
    })
}

#[tokio::test]
async fn test_generate_posts_over_http() {
    let server = MockServer::start().await;
    let posts_json = r#"[{"platform":"tiktok","content":"C1","explanation":"E1","virality_score":87}]"#;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-3-flash-preview:generateContent"))
        .and(header("x-goog-api-key", API_KEY))
        .and(body_partial_json(json!({
            "generationConfig": {"responseMimeType": "application/json"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_reply(posts_json)))
        .expect(1)
        .mount(&server)
        .await;

    let posts = assert_ok!(gateway_for(&server).generate_posts("LETSGETITAI", "AI coach").await);

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].platform, Platform::Tiktok);
    assert_eq!(posts[0].icon, "🎵");
}

#[tokio::test]
async fn test_provider_error_message_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-3-pro-image-preview:generateContent"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "code": 404,
                "message": "Requested entity was not found.",
                "status": "NOT_FOUND"
            }
        })))
        .mount(&server)
        .await;

    let err = assert_err!(
        gateway_for(&server)
            .generate_image("gym comeback", ImageSize::OneK)
            .await
    );

    assert!(err.is_entity_not_found());
    match err {
        GatewayError::Provider { status, message } => {
            assert_eq!(status, Some(404));
            assert_eq!(message, "Requested entity was not found.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_error_body_is_kept_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let err = assert_err!(gateway_for(&server).deep_analyze("post").await);
    assert_eq!(err.user_message(), "upstream unavailable");
}

#[tokio::test]
async fn test_undecodable_success_body_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
        .mount(&server)
        .await;

    let err = assert_err!(gateway_for(&server).refine("post", "shorter").await);
    assert!(matches!(err, GatewayError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_image_payload_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-3-pro-image-preview:generateContent"))
        .and(body_partial_json(json!({
            "generationConfig": {"imageConfig": {"aspectRatio": "16:9", "imageSize": "1K"}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"parts": [
                    {"inlineData": {"mimeType": "image/png", "data": "iVBORw0KGgo="}}
                ]}
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uri = assert_ok!(
        gateway_for(&server)
            .generate_image("gym comeback", ImageSize::OneK)
            .await
    );
    assert_eq!(uri, "data:image/png;base64,iVBORw0KGgo=");
}

#[tokio::test]
async fn test_chat_sends_system_instruction() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-3-pro-preview:generateContent"))
        .and(body_partial_json(json!({
            "systemInstruction": {"parts": [{
                "text": "You are the ViralPostAgent AI Strategist. You help users refine their social media game with behavioral science and algorithm insights."
            }]}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_reply("Use a pattern interrupt.")))
        .expect(1)
        .mount(&server)
        .await;

    let reply = assert_ok!(
        gateway_for(&server)
            .chat(&[viral_post_agent::ChatMessage::user("How do I hook viewers?")])
            .await
    );
    assert_eq!(reply, "Use a pattern interrupt.");
}

#[tokio::test]
async fn test_api_key_is_not_sent_in_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_reply("ok")))
        .mount(&server)
        .await;

    assert_ok!(gateway_for(&server).refine("post", "shorter").await);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].url.as_str().contains(API_KEY));
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_transport_failure_does_not_expose_api_key() {
    // Nothing listens on port 1, so the request fails before any response
    let client =
        GeminiClient::with_base_url("SECRET-KEY-123", "http://127.0.0.1:1/v1beta", None).unwrap();
    let gateway = Arc::new(AiGateway::new(Arc::new(client), ModelSettings::default()));
    let controller = CampaignController::new(gateway);

    let outcome = assert_ok!(controller.generate().await);
    assert_eq!(outcome, RequestOutcome::Failed);

    let shown = controller.snapshot().await.error.unwrap();
    assert!(!shown.contains("SECRET-KEY-123"));
    assert_eq!(shown, GENERIC_FAILURE_MESSAGE);
}
