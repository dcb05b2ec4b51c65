use session_analysis::core::models::ObjectLocation;
use session_analysis::errors::AnalysisError;
use session_analysis::worker::deliver::{RESPONSE_PREAMBLE, compose_notification};
use session_analysis::worker::fetch::fetch_failure_text;
use session_analysis::worker::summarize::inference_failure_text;

fn location() -> ObjectLocation {
    ObjectLocation::new("ssm-logs", "bob/session.log")
}

#[test]
fn test_compose_notification() {
    let message = compose_notification(&location(), "Nothing suspicious.", "Session review");

    assert_eq!(message.subject, "Session review");
    assert_eq!(
        message.body,
        "A log file with key 'bob/session.log' was uploaded to the S3 bucket 'ssm-logs'.\n\n\
         Bedrock model response:\nNothing suspicious."
    );
    assert!(message.body.contains(RESPONSE_PREAMBLE));
}

#[test]
fn test_fetch_failure_text() {
    let err = AnalysisError::StorageError("AccessDenied".into());
    assert_eq!(
        fetch_failure_text(&location(), &err),
        "Error reading object bob/session.log from bucket ssm-logs. \
         Error: Failed to read object from S3: AccessDenied"
    );
}

#[test]
fn test_inference_failure_text() {
    let err = AnalysisError::ResponseFormatError("missing content[0].text".into());
    assert_eq!(
        inference_failure_text(&err),
        "Error invoking Bedrock model. Error: Unexpected Bedrock response: missing content[0].text"
    );
}
