//! The acknowledgment returned to the Lambda runtime.

use serde::Serialize;
use serde_json::json;

pub const SUCCESS_MESSAGE: &str = "Function executed successfully!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    /// `{"statusCode": 200, "body": "\"Function executed successfully!\""}`.
    /// The body is the message encoded as a JSON string.
    #[must_use]
    pub fn success() -> Self {
        Self {
            status_code: 200,
            body: json!(SUCCESS_MESSAGE).to_string(),
        }
    }
}
