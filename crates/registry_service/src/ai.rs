//! Thin client for the hosted generative-model API.
//!
//! Every caller treats a failure here as "feature unavailable": the methods
//! return `Result` so call-sites can log, but nothing above the insights
//! layer ever sees these errors.

use anyhow::{anyhow, Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

const TEXT_MODEL: &str = "gemini-3-flash-preview";
const TTS_MODEL: &str = "gemini-2.5-flash-preview-tts";

#[derive(Clone)]
pub struct GenAiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<Value>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Default)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Serialize, Deserialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenAiClient {
    pub fn new(endpoint: &str, api_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    async fn generate(
        &self,
        model: &str,
        parts: Vec<Part>,
        generation_config: Option<Value>,
    ) -> Result<GenerateResponse> {
        let url = format!("{}/v1beta/models/{}:generateContent", self.endpoint, model);
        let request = GenerateRequest {
            contents: vec![Content { parts }],
            generation_config,
        };

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .context("Generation request failed to send")?
            .error_for_status()
            .context("Generation service rejected the request")?;

        response
            .json::<GenerateResponse>()
            .await
            .context("Generation response was not valid JSON")
    }

    fn first_text(response: GenerateResponse) -> Result<String> {
        let text: String = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(anyhow!("Generation response contained no text"));
        }
        Ok(text)
    }

    pub async fn generate_text(&self, prompt: &str) -> Result<String> {
        let response = self
            .generate(
                TEXT_MODEL,
                vec![Part {
                    text: Some(prompt.to_string()),
                    ..Default::default()
                }],
                None,
            )
            .await?;
        Self::first_text(response)
    }

    /// Prompt + image (OCR-style calls). Accepts a bare base64 payload or a
    /// full data URI; the prefix is stripped either way.
    pub async fn generate_text_with_image(
        &self,
        prompt: &str,
        mime_type: &str,
        image_base64: &str,
    ) -> Result<String> {
        let response = self
            .generate(
                TEXT_MODEL,
                vec![
                    Part {
                        inline_data: Some(InlineData {
                            mime_type: mime_type.to_string(),
                            data: strip_data_uri(image_base64).to_string(),
                        }),
                        ..Default::default()
                    },
                    Part {
                        text: Some(prompt.to_string()),
                        ..Default::default()
                    },
                ],
                None,
            )
            .await?;
        Self::first_text(response)
    }

    /// Structured extraction: asks for strict JSON and parses the reply.
    pub async fn generate_json(
        &self,
        prompt: &str,
        mime_type: &str,
        image_base64: &str,
        response_schema: Value,
    ) -> Result<Value> {
        let response = self
            .generate(
                TEXT_MODEL,
                vec![
                    Part {
                        inline_data: Some(InlineData {
                            mime_type: mime_type.to_string(),
                            data: strip_data_uri(image_base64).to_string(),
                        }),
                        ..Default::default()
                    },
                    Part {
                        text: Some(prompt.to_string()),
                        ..Default::default()
                    },
                ],
                Some(json!({
                    "responseMimeType": "application/json",
                    "responseSchema": response_schema,
                })),
            )
            .await?;

        let text = Self::first_text(response)?;
        serde_json::from_str(&text).context("Generation reply was not the requested JSON")
    }

    /// Text-to-speech. Returns raw PCM bytes decoded from the inline payload.
    pub async fn synthesize_speech(&self, text: &str) -> Result<Vec<u8>> {
        let response = self
            .generate(
                TTS_MODEL,
                vec![Part {
                    text: Some(text.to_string()),
                    ..Default::default()
                }],
                Some(json!({
                    "responseModalities": ["AUDIO"],
                    "speechConfig": {
                        "voiceConfig": { "prebuiltVoiceConfig": { "voiceName": "Kore" } }
                    },
                })),
            )
            .await?;

        let encoded = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|p| p.inline_data)
            .map(|d| d.data)
            .ok_or_else(|| anyhow!("TTS response carried no audio payload"))?;

        BASE64
            .decode(encoded.as_bytes())
            .context("TTS audio payload was not valid base64")
    }
}

fn strip_data_uri(payload: &str) -> &str {
    payload.split_once(',').map(|(_, b64)| b64).unwrap_or(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_uri_prefixes_are_stripped() {
        assert_eq!(strip_data_uri("data:image/jpeg;base64,AAAA"), "AAAA");
        assert_eq!(strip_data_uri("AAAA"), "AAAA");
    }

    #[test]
    fn blank_replies_are_errors_not_empty_drafts() {
        let response = GenerateResponse {
            candidates: vec![Candidate {
                content: Some(Content {
                    parts: vec![Part {
                        text: Some("   ".into()),
                        ..Default::default()
                    }],
                }),
            }],
        };
        assert!(GenAiClient::first_text(response).is_err());
    }
}
