// src/config.rs
use tracing::warn;

use crate::constants::{DEFAULT_CLASS_PREFIX, DEFAULT_CONTAINER_TAG, DEFAULT_LINE_BREAK};
use crate::error::{ConvertError, ConvertResult};

/// How tokens are turned into markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkupConfig {
    /// Prepended to every style tag name to form a CSS class (`ansi-bold`).
    pub class_prefix: String,
    /// Element wrapped around styled runs.
    pub container_tag: String,
    /// Emitted in place of each `\n`.
    pub line_break: String,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            container_tag: DEFAULT_CONTAINER_TAG.to_string(),
            line_break: DEFAULT_LINE_BREAK.to_string(),
        }
    }
}

impl MarkupConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class_prefix(mut self, prefix: &str) -> Self {
        self.class_prefix = prefix.to_string();
        self
    }

    pub fn with_container_tag(mut self, tag: &str) -> Self {
        self.container_tag = tag.to_string();
        self
    }

    pub fn with_line_break(mut self, marker: &str) -> Self {
        self.line_break = marker.to_string();
        self
    }

    /// Checks that every field can be emitted verbatim into markup.
    pub fn validate(&self) -> ConvertResult<()> {
        if !is_valid_class_prefix(&self.class_prefix) {
            return Err(invalid("class_prefix", &self.class_prefix));
        }
        if !is_valid_tag_name(&self.container_tag) {
            return Err(invalid("container_tag", &self.container_tag));
        }
        Ok(())
    }
}

fn invalid(field: &str, value: &str) -> ConvertError {
    warn!("rejecting markup config: {} = {:?}", field, value);
    ConvertError::ConfigurationError {
        field: field.to_string(),
        value: value.to_string(),
    }
}

// The prefix lands inside a quoted class attribute.
fn is_valid_class_prefix(prefix: &str) -> bool {
    !prefix
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '<' | '>' | '&'))
}

fn is_valid_tag_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = MarkupConfig::default();
        assert_eq!(config.class_prefix, "ansi-");
        assert_eq!(config.container_tag, "span");
        assert_eq!(config.line_break, "<br>");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_methods() {
        let config = MarkupConfig::new()
            .with_class_prefix("term-")
            .with_container_tag("code")
            .with_line_break("<br/>");
        assert_eq!(config.class_prefix, "term-");
        assert_eq!(config.container_tag, "code");
        assert_eq!(config.line_break, "<br/>");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_prefix_is_allowed() {
        assert!(MarkupConfig::new().with_class_prefix("").validate().is_ok());
    }

    #[test]
    fn rejects_prefix_breaking_attribute() {
        for bad in ["a b", "x\"", "'", "<p", "a&b", "tab\t"] {
            let err = MarkupConfig::new().with_class_prefix(bad).validate().unwrap_err();
            assert_eq!(
                err,
                ConvertError::ConfigurationError {
                    field: "class_prefix".into(),
                    value: bad.into(),
                }
            );
        }
    }

    #[test]
    fn rejects_bad_tag_names() {
        for bad in ["", "1span", "sp an", "span>", "-x", "spän"] {
            let result = MarkupConfig::new().with_container_tag(bad).validate();
            assert!(
                matches!(result, Err(ConvertError::ConfigurationError { ref field, .. }) if field == "container_tag"),
                "{bad:?} should be rejected"
            );
        }
        assert!(MarkupConfig::new().with_container_tag("x-run").validate().is_ok());
        assert!(MarkupConfig::new().with_container_tag("h1").validate().is_ok());
    }

    #[test]
    fn error_message() {
        let err = MarkupConfig::new().with_container_tag("").validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid configuration: container_tag = \"\"");
    }
}
