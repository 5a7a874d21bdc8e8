//! Anthropic Messages API client

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clients::traits::ChatProvider;
use crate::error::{Result, ScholarLensError};

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";

pub struct AnthropicClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    max_tokens: u32,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

impl AnthropicClient {
    pub fn new(api_key: String, model: String, max_tokens: u32) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|e| ScholarLensError::Internal {
                message: format!("Failed to build HTTP client: {}", e),
            })?;
        Ok(Self {
            client,
            api_key,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
            max_tokens,
        })
    }

    /// Override the API endpoint, mainly so tests can point at a stub
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl ChatProvider for AnthropicClient {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String> {
        debug!(
            model = %self.model,
            prompt_chars = prompt.len(),
            "sending assessment request"
        );

        let body = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            // Deterministic scoring: same prompt should score the same way
            temperature: 0.0,
            system,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        let url = format!("{}/v1/messages", self.base_url.trim_end_matches('/'));
        let resp = self
            .client
            .post(url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body_text = resp
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());
            return Err(ScholarLensError::Provider {
                status: status.as_u16(),
                body: body_text,
            });
        }

        let parsed: MessagesResponse =
            resp.json().await.map_err(|e| ScholarLensError::Provider {
                status: status.as_u16(),
                body: format!("unreadable response body: {}", e),
            })?;

        parsed
            .content
            .into_iter()
            .next()
            .map(|block| block.text)
            .ok_or_else(|| ScholarLensError::Provider {
                status: status.as_u16(),
                body: "response contained no content blocks".to_string(),
            })
    }
}
