//! Wire formats for the supported providers and parsing of the model's JSON
//! verdict.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::ClassificationResult;

use super::CloudError;

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

pub const DEFAULT_CONFIDENCE: f64 = 0.8;
const TEMPERATURE: f32 = 0.2;
const MAX_OUTPUT_TOKENS: i32 = 400;

pub fn build_chat_request(model: String, prompt: &str) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model,
        messages: vec![ChatMessage {
            role: "user".into(),
            content: prompt.to_string(),
        }],
        temperature: TEMPERATURE,
        max_tokens: MAX_OUTPUT_TOKENS,
        response_format: ResponseFormat {
            r#type: "json_object".into(),
        },
    }
}

pub fn build_gemini_request(prompt: &str) -> GeminiRequest {
    GeminiRequest {
        contents: vec![GeminiContent {
            parts: vec![GeminiPart {
                text: Some(prompt.to_string()),
            }],
        }],
        generation_config: GenerationConfig {
            temperature: TEMPERATURE,
            max_output_tokens: MAX_OUTPUT_TOKENS,
            response_mime_type: "application/json".into(),
        },
    }
}

pub fn chat_content(completion: ChatCompletionResponse) -> Result<String, CloudError> {
    completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|msg| msg.content)
        .ok_or_else(|| CloudError::MalformedResponse("missing choices[0].message.content".into()))
}

pub fn gemini_content(response: GeminiResponse) -> Result<String, CloudError> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .ok_or_else(|| {
            CloudError::MalformedResponse("missing candidates[0].content.parts[0].text".into())
        })
}

/// Parses the model's JSON answer. Confidence and reasoning are taken as
/// reported; absent fields get defaults.
pub fn parse_verdict(text: &str) -> Result<ClassificationResult, CloudError> {
    let verdict: ModelVerdict = serde_json::from_str(text.trim())?;
    Ok(ClassificationResult {
        category: verdict.category.filter(|c| !c.trim().is_empty()),
        confidence: verdict.confidence.unwrap_or(DEFAULT_CONFIDENCE),
        reasoning: verdict.reasoning.unwrap_or_default(),
        alternative_categories: verdict.alternative_categories.unwrap_or_default(),
        scores: BTreeMap::new(),
    })
}

#[derive(Debug, Deserialize)]
struct ModelVerdict {
    category: Option<String>,
    confidence: Option<f64>,
    reasoning: Option<String>,
    alternative_categories: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: i32,
    pub response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub r#type: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: Option<ChatCompletionMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionMessage {
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiContent {
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiPart {
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: i32,
    pub response_mime_type: String,
}

#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiCandidate {
    pub content: Option<GeminiContent>,
}
