use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::errors::AnalysisError;

/// Stands in for the object key when the event does not carry one.
pub const UNKNOWN_KEY: &str = "Unknown";

/// The slice of an EventBridge S3 (CloudTrail) event the handler reads.
#[derive(Debug, Deserialize)]
pub struct TriggerEvent {
    pub detail: EventDetail,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    pub request_parameters: RequestParameters,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestParameters {
    pub bucket_name: String,
    /// Kept loose so a malformed key fails the fetch instead of the event.
    #[serde(default)]
    pub key: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLocation {
    pub bucket: String,
    pub key: String,
    /// Set when the event carried a key that is not a string. `key` then
    /// holds its JSON text.
    pub key_error: Option<String>,
}

impl ObjectLocation {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            key_error: None,
        }
    }
}

impl From<TriggerEvent> for ObjectLocation {
    fn from(event: TriggerEvent) -> Self {
        let params = event.detail.request_parameters;
        match params.key {
            None | Some(Value::Null) => Self::new(params.bucket_name, UNKNOWN_KEY),
            Some(Value::String(key)) => Self::new(params.bucket_name, key),
            Some(other) => Self {
                bucket: params.bucket_name,
                key: other.to_string(),
                key_error: Some(format!("object key must be a string, got {other}")),
            },
        }
    }
}

impl fmt::Display for ObjectLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}

/// # Errors
///
/// Returns `InvalidEvent` when `detail.requestParameters.bucketName` is
/// missing or not a string.
pub fn parse_trigger_event(payload: &Value) -> Result<ObjectLocation, AnalysisError> {
    TriggerEvent::deserialize(payload)
        .map(ObjectLocation::from)
        .map_err(|e| AnalysisError::InvalidEvent(e.to_string()))
}
