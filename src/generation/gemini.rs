// src/generation/gemini.rs

use super::{GenerationRequest, TextGenerator};
use crate::error::ServiceError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Cliente bloqueante del endpoint `generateContent`.
pub struct GeminiClient {
    http: reqwest::blocking::Client,
    api_base: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_base: &str, api_key: &str, timeout: Duration) -> Result<Self, ServiceError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("BrainstormBakery/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.api_base, model)
    }
}

impl TextGenerator for GeminiClient {
    fn generate(&self, request: &GenerationRequest) -> Result<String, ServiceError> {
        let body = build_body(request);
        let response = self
            .http
            .post(self.endpoint(&request.model))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body: format!("{} {}", status.canonical_reason().unwrap_or(""), body.trim())
                    .trim()
                    .to_string(),
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .map_err(|e| ServiceError::Payload(e.to_string()))?;
        response_text(parsed)
    }
}

fn build_body(request: &GenerationRequest) -> GenerateContentRequest<'_> {
    GenerateContentRequest {
        system_instruction: Content {
            parts: vec![Part {
                text: &request.system_instruction,
            }],
        },
        contents: vec![Content {
            parts: vec![Part {
                text: &request.prompt,
            }],
        }],
    }
}

fn response_text(response: GenerateContentResponse) -> Result<String, ServiceError> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| content.parts.into_iter().map(|p| p.text).collect())
        .unwrap_or_default();
    if text.trim().is_empty() {
        return Err(ServiceError::Payload("response contained no text".into()));
    }
    Ok(text)
}
