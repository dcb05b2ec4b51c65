use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::DisplayErrorContext;
use tracing::debug;

use super::ObjectStore;
use crate::errors::AnalysisError;

pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, AnalysisError> {
        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| AnalysisError::StorageError(DisplayErrorContext(&e).to_string()))?;

        let bytes = output
            .body
            .collect()
            .await
            .map_err(|e| AnalysisError::StorageError(format!("failed to read body: {e}")))?
            .into_bytes();

        debug!(bucket, key, size = bytes.len(), "Fetched object from S3");
        Ok(bytes.to_vec())
    }
}
