use std::env;
use std::str::FromStr;

use crate::errors::AnalysisError;

pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-haiku-20240307-v1:0";
pub const DEFAULT_BEDROCK_REGION: &str = "us-east-1";
pub const DEFAULT_TOPIC_ARN: &str = "arn:aws:sns:us-east-1:533267053787:Bedrock-POC";
pub const DEFAULT_SUBJECT: &str = "Session Manager Log File Analysis by Amazon Bedrock";
pub const DEFAULT_MAX_TOKENS: u32 = 512;
pub const DEFAULT_TEMPERATURE: f64 = 0.5;

/// Settings for one deployment of the analysis function.
///
/// Every field has a default, and each can be overridden through the
/// environment variable named next to it.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// `BEDROCK_MODEL_ID`
    pub model_id: String,
    /// `BEDROCK_REGION`
    pub bedrock_region: String,
    /// `SNS_TOPIC_ARN`
    pub topic_arn: String,
    /// `NOTIFICATION_SUBJECT`
    pub notification_subject: String,
    /// `BEDROCK_MAX_TOKENS`
    pub max_tokens: u32,
    /// `BEDROCK_TEMPERATURE`, must be within `0.0..=1.0`
    pub temperature: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            model_id: DEFAULT_MODEL_ID.to_string(),
            bedrock_region: DEFAULT_BEDROCK_REGION.to_string(),
            topic_arn: DEFAULT_TOPIC_ARN.to_string(),
            notification_subject: DEFAULT_SUBJECT.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl AnalysisConfig {
    /// # Errors
    ///
    /// Returns `ConfigError` if a numeric override cannot be parsed or the
    /// temperature is out of range.
    pub fn from_env() -> Result<Self, AnalysisError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from defaults plus whatever `lookup` returns for
    /// each override key.
    ///
    /// # Errors
    ///
    /// Same as [`AnalysisConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AnalysisError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            model_id: lookup("BEDROCK_MODEL_ID").unwrap_or(defaults.model_id),
            bedrock_region: lookup("BEDROCK_REGION").unwrap_or(defaults.bedrock_region),
            topic_arn: lookup("SNS_TOPIC_ARN").unwrap_or(defaults.topic_arn),
            notification_subject: lookup("NOTIFICATION_SUBJECT")
                .unwrap_or(defaults.notification_subject),
            max_tokens: parse_override(&lookup, "BEDROCK_MAX_TOKENS")?
                .unwrap_or(defaults.max_tokens),
            temperature: parse_override(&lookup, "BEDROCK_TEMPERATURE")?
                .unwrap_or(defaults.temperature),
        };

        if !(0.0..=1.0).contains(&config.temperature) {
            return Err(AnalysisError::ConfigError(format!(
                "BEDROCK_TEMPERATURE: {} is outside 0.0..=1.0",
                config.temperature
            )));
        }

        Ok(config)
    }
}

fn parse_override<F, T>(lookup: &F, key: &str) -> Result<Option<T>, AnalysisError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| AnalysisError::ConfigError(format!("{key}: {e}")))
        })
        .transpose()
}
