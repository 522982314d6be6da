// Shared fixtures for integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use viral_post_agent::providers::{GenerateContentRequest, GenerateContentResponse};
use viral_post_agent::{AiGateway, GatewayError, GenerativeModel, ModelSettings, Result};

/// A call the stub received: model name and the serialized request body
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub model: String,
    pub body: Value,
}

struct ScriptedReply {
    result: Result<GenerateContentResponse>,
    gate: Option<oneshot::Receiver<()>>,
}

/// Model stub that replays queued replies in order and records every call
#[derive(Default)]
pub struct ScriptedModel {
    replies: Mutex<VecDeque<ScriptedReply>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedModel {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_response(&self, response: GenerateContentResponse) {
        self.push(Ok(response), None);
    }

    pub fn push_text(&self, text: &str) {
        self.push_response(GenerateContentResponse::from_text(text));
    }

    pub fn push_error(&self, err: GatewayError) {
        self.push(Err(err), None);
    }

    /// Queue a reply that is held back until the returned sender fires
    pub fn push_gated_response(&self, response: GenerateContentResponse) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.push(Ok(response), Some(rx));
        tx
    }

    pub fn push_gated_text(&self, text: &str) -> oneshot::Sender<()> {
        self.push_gated_response(GenerateContentResponse::from_text(text))
    }

    fn push(&self, result: Result<GenerateContentResponse>, gate: Option<oneshot::Receiver<()>>) {
        self.replies
            .lock()
            .unwrap()
            .push_back(ScriptedReply { result, gate });
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl GenerativeModel for ScriptedModel {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        self.calls.lock().unwrap().push(RecordedCall {
            model: model.to_string(),
            body: serde_json::to_value(request).unwrap(),
        });

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted reply left");

        if let Some(gate) = reply.gate {
            gate.await.expect("gate sender dropped");
        }
        reply.result
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

pub fn gateway_with(model: Arc<ScriptedModel>) -> Arc<AiGateway> {
    Arc::new(AiGateway::new(model, ModelSettings::default()))
}

/// Campaign JSON with one post per entry of (platform, content, score)
pub fn campaign_json(posts: &[(&str, &str, f64)]) -> String {
    let items: Vec<Value> = posts
        .iter()
        .map(|(platform, content, score)| {
            json!({
                "platform": platform,
                "content": content,
                "explanation": format!("why {}", content),
                "virality_score": score
            })
        })
        .collect();
    Value::Array(items).to_string()
}

/// Smallest valid base64 payload: the PNG signature
pub const PNG_SIGNATURE_B64: &str = "iVBORw0KGgo=";

pub fn image_response(data: &str) -> GenerateContentResponse {
    serde_json::from_value(json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [
                    {"text": "Here is your thumbnail."},
                    {"inlineData": {"mimeType": "image/png", "data": data}}
                ]
            },
            "finishReason": "STOP"
        }]
    }))
    .unwrap()
}
