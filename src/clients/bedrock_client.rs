use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::primitives::Blob;

use super::ModelInvoker;
use crate::errors::AnalysisError;

pub struct BedrockModelInvoker {
    client: Client,
}

impl BedrockModelInvoker {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ModelInvoker for BedrockModelInvoker {
    async fn invoke_model(&self, model_id: &str, body: String) -> Result<Vec<u8>, AnalysisError> {
        let response = self
            .client
            .invoke_model()
            .model_id(model_id)
            .body(Blob::new(body))
            .content_type("application/json")
            .accept("application/json")
            .send()
            .await
            .map_err(|e| AnalysisError::BedrockError(DisplayErrorContext(&e).to_string()))?;

        Ok(response.body.into_inner())
    }
}
