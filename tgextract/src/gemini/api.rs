use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::GeminiConfig;
use crate::error::{Result, TgExtractError};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1";

/// The two supported upstream variants. They share one request pipeline and
/// differ only in model name, declared MIME type, and fallback text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Audio,
}

impl MediaKind {
    /// Parses the wire tag. Only the exact strings "image" and "audio" are
    /// recognized.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "image" => Some(MediaKind::Image),
            "audio" => Some(MediaKind::Audio),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            MediaKind::Image => "image/jpeg",
            MediaKind::Audio => "audio/mp3",
        }
    }

    /// Returned when the upstream responds successfully but produces no
    /// usable candidate. This is a defined result, not an error.
    pub fn fallback_text(&self) -> &'static str {
        match self {
            MediaKind::Image => "No text found in image.",
            MediaKind::Audio => "No text found in audio.",
        }
    }
}

// Outbound payload, reproduced field-for-field from the generateContent
// contract: {"contents":[{"parts":[{"inline_data":{"mime_type":..,"url":..}}]}]}
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    inline_data: InlineData,
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    url: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Clone, Debug)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    image_model: String,
    audio_model: String,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| TgExtractError::Gemini("API key required for Gemini".to_string()))?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TgExtractError::Gemini(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url,
            image_model: config.image_model.clone(),
            audio_model: config.audio_model.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self, kind: MediaKind) -> &str {
        match kind {
            MediaKind::Image => &self.image_model,
            MediaKind::Audio => &self.audio_model,
        }
    }

    /// Asks the upstream model to extract text from the file behind
    /// `file_url`. One outbound call, no retry.
    ///
    /// A successful response with no usable candidate resolves to the kind's
    /// fallback string. Transport failures, non-2xx statuses, and unparseable
    /// bodies are errors and propagate to the caller.
    pub async fn extract(&self, file_url: &str, kind: MediaKind) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    inline_data: InlineData {
                        mime_type: kind.mime_type().to_string(),
                        url: file_url.to_string(),
                    },
                }],
            }],
        };

        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url,
                self.model(kind)
            ))
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TgExtractError::Gemini(format!(
                "API request failed: {status} - {body}"
            )));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| TgExtractError::Gemini(format!("Failed to parse response: {e}")))?;

        Ok(parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| kind.fallback_text().to_string()))
    }
}
