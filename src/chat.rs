//! OpenAI-compatible chat-completion client.

use std::error::Error;
use std::fmt;
use std::{env, time::Duration};

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[derive(Debug)]
pub enum ChatError {
    Request(reqwest::Error),
    Api { status: u16, body: String },
    Parse(reqwest::Error),
    EmptyChoices,
}

impl fmt::Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(err) => write!(f, "failed to send chat completion request: {err}"),
            Self::Api { status, body } => {
                write!(f, "chat completion request failed ({status}): {body}")
            }
            Self::Parse(err) => write!(f, "failed to parse chat completion response: {err}"),
            Self::EmptyChoices => write!(f, "chat completion response contained no choices"),
        }
    }
}

impl Error for ChatError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Request(err) | Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    api_base: String,
    model: String,
}

impl ChatClient {
    pub fn new(api_base: impl Into<String>, model: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            http,
            api_base: api_base.into(),
            model: model.into(),
        }
    }

    pub fn from_env() -> Self {
        let api_base = env::var("CHAT_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let model = env::var("CHAT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::new(api_base, model)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// One round trip per submission: no retry, no streaming, temperature
    /// pinned to 0.
    pub async fn ask(&self, api_key: &str, messages: Vec<ChatMessage>) -> Result<String, ChatError> {
        let url = format!("{}/chat/completions", self.api_base);
        let body = ChatRequest {
            model: self.model.clone(),
            messages,
            temperature: 0.0,
        };

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(ChatError::Request)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response body>".to_string());
            return Err(ChatError::Api { status, body });
        }

        let parsed: ChatResponse = response.json().await.map_err(ChatError::Parse)?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(ChatError::EmptyChoices)
    }
}
