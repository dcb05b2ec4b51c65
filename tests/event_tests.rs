use serde_json::json;
use session_analysis::core::models::{ObjectLocation, UNKNOWN_KEY, parse_trigger_event};
use session_analysis::errors::AnalysisError;

#[test]
fn test_parse_cloudtrail_put_object_event() {
    let event = json!({
        "version": "0",
        "detail-type": "AWS API Call via CloudTrail",
        "source": "aws.s3",
        "region": "us-east-1",
        "detail": {
            "eventName": "PutObject",
            "requestParameters": {
                "bucketName": "ssm-session-logs",
                "Host": "ssm-session-logs.s3.us-east-1.amazonaws.com",
                "key": "sessions/alice-0a1b2c3d.log"
            }
        }
    });

    let location = parse_trigger_event(&event).unwrap();
    assert_eq!(
        location,
        ObjectLocation::new("ssm-session-logs", "sessions/alice-0a1b2c3d.log")
    );
    assert_eq!(
        location.to_string(),
        "s3://ssm-session-logs/sessions/alice-0a1b2c3d.log"
    );
}

#[test]
fn test_missing_or_null_key_uses_placeholder() {
    for params in [
        json!({ "bucketName": "logs" }),
        json!({ "bucketName": "logs", "key": null }),
    ] {
        let event = json!({ "detail": { "requestParameters": params } });
        let location = parse_trigger_event(&event).unwrap();
        assert_eq!(location.bucket, "logs");
        assert_eq!(location.key, UNKNOWN_KEY);
    }
}

#[test]
fn test_missing_bucket_name_is_rejected() {
    let events = [
        json!({}),
        json!({ "detail": {} }),
        json!({ "detail": { "requestParameters": { "key": "a.log" } } }),
        json!({ "detail": { "requestParameters": { "bucketName": 42, "key": "a.log" } } }),
    ];

    for event in &events {
        match parse_trigger_event(event) {
            Err(AnalysisError::InvalidEvent(_)) => {}
            other => panic!("Expected InvalidEvent for {event}, got {other:?}"),
        }
    }
}

#[test]
fn test_non_string_key_is_kept_as_text() {
    let event = json!({ "detail": { "requestParameters": { "bucketName": "logs", "key": 42 } } });

    let location = parse_trigger_event(&event).unwrap();
    assert_eq!(location.bucket, "logs");
    assert_eq!(location.key, "42");
    assert!(location.key_error.unwrap().contains("must be a string"));

    let event = json!({
        "detail": { "requestParameters": { "bucketName": "logs", "key": { "path": "a.log" } } }
    });
    let location = parse_trigger_event(&event).unwrap();
    assert_eq!(location.key, r#"{"path":"a.log"}"#);
    assert!(location.key_error.is_some());
}

#[test]
fn test_empty_key_is_kept() {
    let event = json!({ "detail": { "requestParameters": { "bucketName": "logs", "key": "" } } });

    let location = parse_trigger_event(&event).unwrap();
    assert_eq!(location, ObjectLocation::new("logs", ""));
}
