use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::deliver::{self, NotificationMessage};
use super::fetch;
use super::summarize;
use crate::clients::{AwsClients, ModelInvoker, Notifier, ObjectStore};
use crate::core::config::AnalysisConfig;
use crate::core::models::{ObjectLocation, parse_trigger_event};
use crate::errors::AnalysisError;
use crate::response::HandlerResponse;

/// What one invocation did. Failed steps carry their sentinel text in
/// `content` / `response_text`.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub location: ObjectLocation,
    pub content: String,
    pub response_text: String,
    pub notification: NotificationMessage,
    pub message_id: Option<String>,
    pub fetch_ok: bool,
    pub inference_ok: bool,
    pub published: bool,
}

/// Handles S3 upload events: fetch the log file, have Bedrock analyze it,
/// publish the analysis to SNS.
///
/// The service clients are built once and shared across invocations.
pub struct SessionAnalysisHandler {
    config: AnalysisConfig,
    store: Arc<dyn ObjectStore>,
    model: Arc<dyn ModelInvoker>,
    notifier: Arc<dyn Notifier>,
}

impl SessionAnalysisHandler {
    pub fn new(
        config: AnalysisConfig,
        store: Arc<dyn ObjectStore>,
        model: Arc<dyn ModelInvoker>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            config,
            store,
            model,
            notifier,
        }
    }

    /// Builds the config from the environment and the SDK clients from the
    /// ambient AWS credentials.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an invalid environment override.
    pub async fn from_env() -> Result<Self, AnalysisError> {
        let config = AnalysisConfig::from_env()?;
        info!(
            model_id = %config.model_id,
            bedrock_region = %config.bedrock_region,
            topic_arn = %config.topic_arn,
            "Loaded analysis config"
        );
        let clients = AwsClients::load(&config).await;

        Ok(Self::new(
            config,
            Arc::new(clients.store),
            Arc::new(clients.model),
            Arc::new(clients.notifier),
        ))
    }

    /// Runs the fetch, summarize and deliver steps for one event.
    ///
    /// A failing step never aborts the run: fetch and inference failures are
    /// replaced by sentinel text that flows into the next step, and a publish
    /// failure is only recorded.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEvent` if the event has no bucket name. This is the
    /// only failure surfaced to the caller.
    pub async fn analyze(&self, payload: &Value) -> Result<AnalysisOutcome, AnalysisError> {
        let location = parse_trigger_event(payload)?;
        info!(%location, "Analyzing uploaded log file");

        let (content, fetch_ok) = match fetch::fetch_content(self.store.as_ref(), &location).await
        {
            Ok(content) => (content, true),
            Err(e) => {
                let text = fetch::fetch_failure_text(&location, &e);
                error!("{}", text);
                (text, false)
            }
        };

        let (response_text, inference_ok) =
            match summarize::summarize_content(self.model.as_ref(), &self.config, &content).await
            {
                Ok(text) => (text, true),
                Err(e) => {
                    let text = summarize::inference_failure_text(&e);
                    error!("{}", text);
                    (text, false)
                }
            };

        let notification = deliver::compose_notification(
            &location,
            &response_text,
            &self.config.notification_subject,
        );

        let (message_id, published) =
            match deliver::publish_notification(self.notifier.as_ref(), &self.config, &notification)
                .await
            {
                Ok(message_id) => (message_id, true),
                Err(_) => (None, false),
            };

        Ok(AnalysisOutcome {
            location,
            content,
            response_text,
            notification,
            message_id,
            fetch_ok,
            inference_ok,
            published,
        })
    }

    /// Lambda entry point. Always acknowledges with a 200 once the event
    /// parses, whatever happened in the individual steps.
    ///
    /// # Errors
    ///
    /// Fails the invocation when the event is missing its bucket name.
    #[tracing::instrument(level = "info", skip_all, fields(request_id = %event.context.request_id))]
    pub async fn handle(&self, event: LambdaEvent<Value>) -> Result<HandlerResponse, Error> {
        info!("Received event: {:?}", event.payload);

        let outcome = self.analyze(&event.payload).await.map_err(|e| {
            error!("Rejecting event: {}", e);
            Error::from(e)
        })?;

        info!(
            location = %outcome.location,
            fetch_ok = outcome.fetch_ok,
            inference_ok = outcome.inference_ok,
            published = outcome.published,
            "Function executed"
        );

        Ok(HandlerResponse::success())
    }
}
