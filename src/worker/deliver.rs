use tracing::{error, info};

use crate::clients::Notifier;
use crate::core::config::AnalysisConfig;
use crate::core::models::ObjectLocation;
use crate::errors::AnalysisError;

pub const RESPONSE_PREAMBLE: &str = "Bedrock model response:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    pub subject: String,
    pub body: String,
}

pub fn compose_notification(
    location: &ObjectLocation,
    response_text: &str,
    subject: &str,
) -> NotificationMessage {
    let body = format!(
        "A log file with key '{}' was uploaded to the S3 bucket '{}'.\n\n{}\n{}",
        location.key, location.bucket, RESPONSE_PREAMBLE, response_text
    );

    NotificationMessage {
        subject: subject.to_string(),
        body,
    }
}

/// Publishes `message` to the configured topic.
///
/// # Errors
///
/// Returns `SnsError` if the publish call fails. The failure is logged here.
pub async fn publish_notification(
    notifier: &dyn Notifier,
    config: &AnalysisConfig,
    message: &NotificationMessage,
) -> Result<Option<String>, AnalysisError> {
    match notifier
        .publish(&config.topic_arn, &message.subject, &message.body)
        .await
    {
        Ok(message_id) => {
            info!(
                topic_arn = %config.topic_arn,
                message_id = message_id.as_deref().unwrap_or(""),
                "Notification sent successfully!"
            );
            Ok(message_id)
        }
        Err(e) => {
            error!("Error publishing to SNS topic. Error: {}", e);
            Err(e)
        }
    }
}
