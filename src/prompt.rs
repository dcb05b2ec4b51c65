//! Prompt template and the Anthropic-on-Bedrock request/response shapes.

use serde::Serialize;
use serde_json::Value;

use crate::core::config::AnalysisConfig;
use crate::errors::AnalysisError;

pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

/// Instructions placed ahead of the log file contents.
pub const ANALYSIS_INSTRUCTIONS: &str = "As an expert in log file analysis, \
analyze the following log file. Summarize what the user did in the session \
and identify any suspicious activity that might need to be checked:";

pub fn build_prompt(content: &str) -> String {
    format!("{ANALYSIS_INSTRUCTIONS}\n\n{content}")
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelRequest {
    pub anthropic_version: &'static str,
    pub max_tokens: u32,
    pub temperature: f64,
    pub messages: Vec<ModelMessage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelMessage {
    pub role: &'static str,
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: String,
}

impl ModelRequest {
    /// A single user-turn request carrying `prompt`.
    pub fn new(prompt: String, config: &AnalysisConfig) -> Self {
        Self {
            anthropic_version: ANTHROPIC_VERSION,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            messages: vec![ModelMessage {
                role: "user",
                content: vec![ContentBlock {
                    kind: "text",
                    text: prompt,
                }],
            }],
        }
    }

    /// # Errors
    ///
    /// Returns `SerializationError` if the request cannot be encoded.
    pub fn to_body(&self) -> Result<String, AnalysisError> {
        serde_json::to_string(self).map_err(|e| AnalysisError::SerializationError(e.to_string()))
    }
}

/// Pulls `content[0].text` out of an invoke-model response body.
///
/// # Errors
///
/// Returns `ResponseFormatError` if the body is not JSON or has no text in
/// its first content block.
pub fn extract_response_text(body: &[u8]) -> Result<String, AnalysisError> {
    let response: Value = serde_json::from_slice(body)
        .map_err(|e| AnalysisError::ResponseFormatError(format!("invalid JSON: {e}")))?;

    response["content"][0]["text"]
        .as_str()
        .map(String::from)
        .ok_or_else(|| {
            AnalysisError::ResponseFormatError("missing content[0].text".to_string())
        })
}
