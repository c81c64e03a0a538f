use cribsense::infrastructure::observability::sanitize_for_log;

#[test]
fn given_empty_text_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_for_log(""), "[EMPTY]");
    assert_eq!(sanitize_for_log("   "), "[EMPTY]");
}

#[test]
fn given_short_text_when_sanitizing_then_returns_unchanged() {
    let text = "cry-recording-morning.wav";
    assert_eq!(sanitize_for_log(text), text);
}

#[test]
fn given_long_text_when_sanitizing_then_truncates_with_length() {
    let text = "a".repeat(200);
    let result = sanitize_for_log(&text);
    assert!(result.starts_with(&"a".repeat(120)));
    assert!(result.contains("... (200 chars total)"));
}

#[test]
fn given_multibyte_text_when_sanitizing_then_truncates_on_char_boundary() {
    let text = "é".repeat(200);
    let result = sanitize_for_log(&text);
    assert!(result.starts_with(&"é".repeat(120)));
    assert!(result.contains("... (200 chars total)"));
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacts_it() {
    let result = sanitize_for_log("Authorization: Bearer sk-abc123xyz");
    assert!(result.contains("Bearer [REDACTED]"));
    assert!(!result.contains("sk-abc123xyz"));
}

#[test]
fn given_api_key_when_sanitizing_then_redacts_it() {
    let result = sanitize_for_log("please use api_key=secret123 for this");
    assert!(result.contains("api_key=[REDACTED]"));
    assert!(!result.contains("secret123"));
}

#[test]
fn given_whitespace_padded_text_when_sanitizing_then_trims() {
    assert_eq!(sanitize_for_log("  hello world  "), "hello world");
}
