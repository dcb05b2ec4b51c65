use tracing::debug;

use crate::clients::ObjectStore;
use crate::core::models::ObjectLocation;
use crate::errors::AnalysisError;

/// Reads the object and decodes it as UTF-8 text.
///
/// # Errors
///
/// Returns `StorageError` if S3 rejects the read, `DecodeError` if the body
/// is not valid UTF-8 or the event's key was not a string.
pub async fn fetch_content(
    store: &dyn ObjectStore,
    location: &ObjectLocation,
) -> Result<String, AnalysisError> {
    if let Some(reason) = &location.key_error {
        return Err(AnalysisError::StorageError(reason.clone()));
    }

    let bytes = store.get_object(&location.bucket, &location.key).await?;
    let content = String::from_utf8(bytes)?;
    debug!(%location, chars = content.chars().count(), "Decoded object content");
    Ok(content)
}

/// Text passed to the model in place of the log when the fetch fails.
pub fn fetch_failure_text(location: &ObjectLocation, err: &AnalysisError) -> String {
    format!(
        "Error reading object {} from bucket {}. Error: {}",
        location.key, location.bucket, err
    )
}
