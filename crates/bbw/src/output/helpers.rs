//! Common helper functions for output formatting.

use serde_json::Value;

/// Truncates a string to a maximum number of characters.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

/// Renders an item value for a table cell.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("exactly10!", 10), "exactly10!");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate_str("a long label here", 10), "a long ...");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate_str("ÄÖÜäöüßÄÖÜ€", 6), "ÄÖÜ...");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!(null)), "");
        assert_eq!(format_value(&json!("abc")), "abc");
        assert_eq!(format_value(&json!(42)), "42");
        assert_eq!(format_value(&json!({"a": 1})), r#"{"a":1}"#);
    }
}
