use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct FormatError {
    pub message: String,
}

/// Parse `raw` as JSON and re-serialize it with two-space indentation.
///
/// Object keys keep their source order, so the same input always yields the
/// same bytes. Numbers print in serde_json's form, so `1.0` stays `1.0`.
pub fn format_structured(raw: &str) -> Result<String, FormatError> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(|err| FormatError {
        message: err.to_string(),
    })?;
    serde_json::to_string_pretty(&value).map_err(|err| FormatError {
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_key_order_and_indents_by_two() {
        let pretty = format_structured(r#"{"b":1,"a":[true,null]}"#).unwrap();
        assert_eq!(
            pretty,
            "{\n  \"b\": 1,\n  \"a\": [\n    true,\n    null\n  ]\n}"
        );
    }

    #[test]
    fn same_input_formats_to_identical_bytes() {
        let raw = r#"{"run":{"id":"r-1","scores":[0.5,1.0,2e3]},"steps":[{"ok":true},{"ok":false,"note":null}],"z":-7}"#;
        let first = format_structured(raw).unwrap();
        let second = format_structured(raw).unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
        assert!(first.contains("      1.0,\n"), "{first}");
        assert!(first.starts_with("{\n  \"run\": {\n    \"id\": \"r-1\""), "{first}");
    }

    #[test]
    fn scalar_documents_are_valid() {
        assert_eq!(format_structured("\"ok\"").unwrap(), "\"ok\"");
        assert_eq!(format_structured("  42 ").unwrap(), "42");
    }

    #[test]
    fn parse_failure_carries_parser_message() {
        let err = format_structured("not json").unwrap_err();
        assert!(err.message.contains("line 1 column 2"), "{}", err.message);
    }

    #[test]
    fn empty_input_is_an_error() {
        let err = format_structured("").unwrap_err();
        assert!(err.message.contains("EOF"), "{}", err.message);
    }
}
