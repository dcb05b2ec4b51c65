use std::collections::HashMap;

use session_analysis::core::config::{
    AnalysisConfig, DEFAULT_MODEL_ID, DEFAULT_SUBJECT, DEFAULT_TOPIC_ARN,
};
use session_analysis::errors::AnalysisError;

fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_defaults() {
    let config = AnalysisConfig::default();

    assert_eq!(config.model_id, DEFAULT_MODEL_ID);
    assert_eq!(config.bedrock_region, "us-east-1");
    assert_eq!(config.topic_arn, DEFAULT_TOPIC_ARN);
    assert_eq!(
        config.notification_subject,
        "Session Manager Log File Analysis by Amazon Bedrock"
    );
    assert_eq!(config.notification_subject, DEFAULT_SUBJECT);
    assert_eq!(config.max_tokens, 512);
    assert!((config.temperature - 0.5).abs() < f64::EPSILON);
}

#[test]
fn test_empty_environment_gives_defaults() {
    let config = AnalysisConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config, AnalysisConfig::default());
}

#[test]
fn test_overrides() {
    let config = AnalysisConfig::from_lookup(lookup_from(&[
        ("BEDROCK_MODEL_ID", "anthropic.claude-3-5-sonnet-20240620-v1:0"),
        ("BEDROCK_REGION", "eu-west-1"),
        ("SNS_TOPIC_ARN", "arn:aws:sns:eu-west-1:111122223333:alerts"),
        ("NOTIFICATION_SUBJECT", "Session review"),
        ("BEDROCK_MAX_TOKENS", " 2048 "),
        ("BEDROCK_TEMPERATURE", "0"),
    ]))
    .unwrap();

    assert_eq!(config.model_id, "anthropic.claude-3-5-sonnet-20240620-v1:0");
    assert_eq!(config.bedrock_region, "eu-west-1");
    assert_eq!(config.topic_arn, "arn:aws:sns:eu-west-1:111122223333:alerts");
    assert_eq!(config.notification_subject, "Session review");
    assert_eq!(config.max_tokens, 2048);
    assert!(config.temperature.abs() < f64::EPSILON);
}

#[test]
fn test_invalid_numbers_are_rejected() {
    let err = AnalysisConfig::from_lookup(lookup_from(&[("BEDROCK_MAX_TOKENS", "lots")]))
        .unwrap_err();
    match err {
        AnalysisError::ConfigError(msg) => assert!(msg.starts_with("BEDROCK_MAX_TOKENS")),
        other => panic!("Unexpected error type: {other:?}"),
    }

    let err = AnalysisConfig::from_lookup(lookup_from(&[("BEDROCK_TEMPERATURE", "1.5")]))
        .unwrap_err();
    assert!(matches!(err, AnalysisError::ConfigError(_)));
}
