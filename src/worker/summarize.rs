use tracing::info;

use crate::clients::ModelInvoker;
use crate::core::config::AnalysisConfig;
use crate::errors::AnalysisError;
use crate::prompt::{ModelRequest, build_prompt, extract_response_text};

/// Asks the configured model to analyze `content` and returns its answer.
///
/// # Errors
///
/// Returns `BedrockError` if the call fails and `ResponseFormatError` if
/// the reply has no text.
pub async fn summarize_content(
    model: &dyn ModelInvoker,
    config: &AnalysisConfig,
    content: &str,
) -> Result<String, AnalysisError> {
    let prompt = build_prompt(content);

    #[cfg(feature = "debug-logs")]
    info!("Using Bedrock prompt:\n{}", prompt);

    #[cfg(not(feature = "debug-logs"))]
    info!(
        model_id = %config.model_id,
        prompt_chars = prompt.chars().count(),
        "Invoking Bedrock model [prompt masked, enable debug-logs feature to view]"
    );

    let body = ModelRequest::new(prompt, config).to_body()?;
    let response = model.invoke_model(&config.model_id, body).await?;
    extract_response_text(&response)
}

/// Text delivered in place of the model's answer when inference fails.
pub fn inference_failure_text(err: &AnalysisError) -> String {
    format!("Error invoking Bedrock model. Error: {err}")
}
