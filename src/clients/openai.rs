use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::OpenAiSettings;
use crate::error::{AppError, Result};

pub const TEMPERATURE: f32 = 0.2;

#[derive(Serialize, Debug)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize, Debug)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Deserialize, Debug, Default)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug)]
struct ChatChoice {
    message: Option<ChatChoiceMessage>,
}

#[derive(Deserialize, Debug)]
struct ChatChoiceMessage {
    content: Option<String>,
}

pub struct OpenAiClient {
    http: Client,
    settings: OpenAiSettings,
}

impl OpenAiClient {
    pub fn new(settings: OpenAiSettings) -> Self {
        Self { http: Client::new(), settings }
    }

    /// Sends a system + user conversation and returns the first choice's text.
    /// A success body without any content yields an empty string.
    pub async fn complete(&self, system: &str, user: &str) -> Result<String> {
        debug_log_preview(&self.settings, system, user);
        let body = ChatRequest {
            model: &self.settings.model,
            messages: vec![
                ChatMessage { role: "system", content: system },
                ChatMessage { role: "user", content: user },
            ],
            temperature: TEMPERATURE,
        };

        let resp = self
            .http
            .post(self.settings.completions_url())
            .bearer_auth(&self.settings.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("completion request failed: {e}"))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| anyhow::anyhow!("reading completion response failed: {e}"))?;

        if !status.is_success() {
            return Err(AppError::Upstream {
                status: status.as_u16(),
                detail: upstream_detail(&text),
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow::anyhow!("completion response is not valid JSON: {e}"))?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .unwrap_or_default();

        if self.settings.debug_raw {
            tracing::debug!(raw = %content, "completion reply");
        }
        Ok(content)
    }
}

/// Prefers OpenAI's `{"error":{"message":...}}` shape, then the raw text.
fn upstream_detail(body: &str) -> Option<String> {
    let from_json = serde_json::from_str::<Value>(body).ok().and_then(|v| {
        v.get("error").and_then(|e| {
            e.get("message")
                .and_then(Value::as_str)
                .or_else(|| e.as_str())
                .map(str::to_string)
        })
    });
    from_json.or_else(|| {
        let trimmed = body.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

fn debug_log_preview(settings: &OpenAiSettings, system: &str, user: &str) {
    if settings.debug_raw {
        tracing::debug!(
            model = %settings.model,
            system_len = system.len(),
            user_len = user.len(),
            system_preview = %system.chars().take(80).collect::<String>(),
            user_preview = %user.chars().take(80).collect::<String>(),
            "completion request"
        );
    }
}
