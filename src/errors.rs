use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Failed to parse trigger event: {0}")]
    InvalidEvent(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to read object from S3: {0}")]
    StorageError(String),

    #[error("Object content is not valid UTF-8: {0}")]
    DecodeError(String),

    #[error("Failed to invoke Bedrock model: {0}")]
    BedrockError(String),

    #[error("Unexpected Bedrock response: {0}")]
    ResponseFormatError(String),

    #[error("Failed to serialize model request: {0}")]
    SerializationError(String),

    #[error("Failed to publish to SNS topic: {0}")]
    SnsError(String),
}

impl From<std::string::FromUtf8Error> for AnalysisError {
    fn from(error: std::string::FromUtf8Error) -> Self {
        AnalysisError::DecodeError(error.to_string())
    }
}
