//! Client modules for the AWS services the handler talks to.
//!
//! Each service sits behind a small trait so the analysis steps can run
//! against the real SDK clients or against in-memory doubles.

pub mod bedrock_client;
pub mod s3_client;
pub mod sns_client;

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};

use crate::core::config::AnalysisConfig;
use crate::errors::AnalysisError;

pub use bedrock_client::BedrockModelInvoker;
pub use s3_client::S3ObjectStore;
pub use sns_client::SnsNotifier;

/// Read access to stored objects.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Returns the full body of `bucket/key`.
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, AnalysisError>;
}

/// A hosted model that takes a JSON request body and returns a JSON body.
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    async fn invoke_model(&self, model_id: &str, body: String) -> Result<Vec<u8>, AnalysisError>;
}

/// A pub/sub topic. Returns the service-assigned message id when there is one.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn publish(
        &self,
        topic_arn: &str,
        subject: &str,
        message: &str,
    ) -> Result<Option<String>, AnalysisError>;
}

/// The three SDK-backed clients, built once per process.
pub struct AwsClients {
    pub store: S3ObjectStore,
    pub model: BedrockModelInvoker,
    pub notifier: SnsNotifier,
}

impl AwsClients {
    /// Loads the shared AWS config from the environment. S3 and SNS use the
    /// ambient region; Bedrock is pinned to `config.bedrock_region`.
    pub async fn load(config: &AnalysisConfig) -> Self {
        let shared_config = aws_config::defaults(BehaviorVersion::latest()).load().await;

        let bedrock_config = aws_sdk_bedrockruntime::config::Builder::from(&shared_config)
            .region(Region::new(config.bedrock_region.clone()))
            .build();

        Self {
            store: S3ObjectStore::new(aws_sdk_s3::Client::new(&shared_config)),
            model: BedrockModelInvoker::new(aws_sdk_bedrockruntime::Client::from_conf(
                bedrock_config,
            )),
            notifier: SnsNotifier::new(aws_sdk_sns::Client::new(&shared_config)),
        }
    }
}
