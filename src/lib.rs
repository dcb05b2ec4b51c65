//! Session Analysis - a Lambda function that reviews AWS Session Manager logs
//! with a Bedrock-hosted model.
//!
//! When a session log lands in S3, EventBridge invokes the function with the
//! upload event. The function:
//! 1. Reads the log file from S3
//! 2. Asks an Anthropic model on Amazon Bedrock to summarize the session and
//!    point out suspicious activity
//! 3. Publishes the model's answer to an SNS topic
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - aws-sdk-s3, aws-sdk-bedrockruntime and aws-sdk-sns for the three services
//! - Tokio for async runtime
//!
//! Every step after event parsing is best-effort: a failed fetch or model
//! call is replaced by an error description that is still delivered, and the
//! function acknowledges with a 200 either way.
//!
//! # Example
//!
//! ```no_run
//! use session_analysis::worker::SessionAnalysisHandler;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     session_analysis::setup_logging();
//!
//!     let handler = SessionAnalysisHandler::from_env().await?;
//!     let event = serde_json::json!({
//!         "detail": {
//!             "requestParameters": {
//!                 "bucketName": "session-logs",
//!                 "key": "i-0abc123/session.log"
//!             }
//!         }
//!     });
//!
//!     let outcome = handler.analyze(&event).await?;
//!     println!("{}", outcome.notification.body);
//!     Ok(())
//! }
//! ```

pub mod clients;
pub mod core;
pub mod errors;
pub mod prompt;
pub mod response;
pub mod worker;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch`
/// Logs. The level comes from `RUST_LOG` and defaults to `info`. Calling it
/// more than once keeps the first subscriber.
///
/// # Example
///
/// ```
/// session_analysis::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
