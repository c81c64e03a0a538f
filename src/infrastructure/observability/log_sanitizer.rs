const MAX_VISIBLE_LENGTH: usize = 120;

/// Truncates and redacts caller-supplied text before it reaches a log
/// line. Upload filenames and chat messages go through here.
pub fn sanitize_for_log(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let visible_end = trimmed
        .char_indices()
        .take(MAX_VISIBLE_LENGTH)
        .last()
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(trimmed.len());

    let clipped = if visible_end < trimmed.len() {
        format!(
            "{}... ({} chars total)",
            &trimmed[..visible_end],
            trimmed.chars().count()
        )
    } else {
        trimmed.to_string()
    };

    redact_credentials(&clipped)
}

fn redact_credentials(text: &str) -> String {
    let markers = ["api_key=", "token=", "secret=", "Bearer "];

    let mut result = text.to_string();
    for marker in markers {
        if let Some(start) = result.find(marker) {
            let value_start = start + marker.len();
            let value_end = result[value_start..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"')
                .map(|i| value_start + i)
                .unwrap_or(result.len());
            result.replace_range(value_start..value_end, "[REDACTED]");
        }
    }

    result
}
