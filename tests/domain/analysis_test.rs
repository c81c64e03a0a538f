use cribsense::domain::AnalysisOutcome;

const STRUCTURED_FIXTURE: &str = r#"{
    "is_baby_cry": true,
    "cause": "Hunger",
    "confidence": 92,
    "actions": ["Feed the baby", "Check the diaper"],
    "message": "Crying detected"
}"#;

#[test]
fn given_schema_shaped_json_when_normalizing_then_returns_structured() {
    let outcome = AnalysisOutcome::from_model_text(STRUCTURED_FIXTURE);

    let AnalysisOutcome::Structured(analysis) = outcome else {
        panic!("expected structured outcome");
    };
    assert!(analysis.is_baby_cry);
    assert_eq!(analysis.cause, "Hunger");
    assert_eq!(analysis.confidence.as_u64(), Some(92));
    assert_eq!(
        analysis.actions,
        vec!["Feed the baby".to_string(), "Check the diaper".to_string()]
    );
    assert_eq!(analysis.message.as_deref(), Some("Crying detected"));
}

#[test]
fn given_json_without_optional_message_when_normalizing_then_returns_structured() {
    let text = r#"{"is_baby_cry": false, "cause": "None", "confidence": 5, "actions": []}"#;

    let outcome = AnalysisOutcome::from_model_text(text);

    let AnalysisOutcome::Structured(analysis) = outcome else {
        panic!("expected structured outcome");
    };
    assert!(!analysis.is_baby_cry);
    assert!(analysis.message.is_none());
}

#[test]
fn given_structured_outcome_when_serializing_then_round_trip_is_lossless() {
    let outcome = AnalysisOutcome::from_model_text(STRUCTURED_FIXTURE);

    let serialized = serde_json::to_value(&outcome).unwrap();
    let original: serde_json::Value = serde_json::from_str(STRUCTURED_FIXTURE).unwrap();

    assert_eq!(serialized, original);
}

#[test]
fn given_integer_confidence_when_serializing_then_integer_is_preserved() {
    let text = r#"{"is_baby_cry": true, "cause": "Hunger", "confidence": 87, "actions": []}"#;

    let outcome = AnalysisOutcome::from_model_text(text);

    let serialized = serde_json::to_string(&outcome).unwrap();
    assert!(serialized.contains("\"confidence\":87"));
    assert!(!serialized.contains("87.0"));
}

#[test]
fn given_prose_when_normalizing_then_returns_raw_envelope() {
    let text = "The audio appears to contain a baby crying, likely from hunger.";

    let outcome = AnalysisOutcome::from_model_text(text);

    assert_eq!(
        outcome,
        AnalysisOutcome::Raw {
            raw: text.to_string()
        }
    );
}

#[test]
fn given_json_with_wrong_field_types_when_normalizing_then_returns_raw_envelope() {
    let text = r#"{"is_baby_cry": "yes", "cause": 1, "confidence": "high", "actions": "none"}"#;

    let outcome = AnalysisOutcome::from_model_text(text);

    assert!(matches!(outcome, AnalysisOutcome::Raw { .. }));
}

#[test]
fn given_raw_outcome_when_serializing_then_uses_raw_field() {
    let outcome = AnalysisOutcome::Raw {
        raw: "not json".to_string(),
    };

    let serialized = serde_json::to_value(&outcome).unwrap();

    assert_eq!(serialized, serde_json::json!({"raw": "not json"}));
}
