//! Error types for form helpers.

use thiserror::Error;

/// Errors raised while rendering form markup.
///
/// Every variant is terminal: a helper either returns the complete fragment
/// or one of these, never partial output.
#[derive(Debug, Error)]
pub enum HelperError {
    /// The helper was given an element of the wrong kind.
    #[error("{helper} requires an element of kind {expected}, got {actual}")]
    InvalidElementType {
        helper: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    /// The element has no name but the markup needs a `name` attribute.
    #[error("{helper} requires that the element has an assigned name; none discovered")]
    MissingName { helper: &'static str },

    /// Neither explicit content nor an element label is available.
    #[error("{helper} expects either label content as the second argument, or that the element provided has a label attribute; neither found")]
    MissingLabel { helper: &'static str },

    /// A label cannot determine its `for` target.
    #[error("label requires that the element has an id or a name; neither found")]
    MissingLabelTarget,

    /// A list value was given to a select that does not allow multiple values.
    #[error("select \"{name}\" does not allow specifying multiple selected values when the element does not have a multiple attribute set to a boolean true")]
    MultipleValuesNotAllowed { name: String },

    /// The element value could not be read as a date.
    #[error("invalid date value for \"{name}\": {value}")]
    InvalidDate { name: String, value: String },

    /// A partial template was requested but no renderer is configured.
    #[error("partial \"{0}\" requested but no partial renderer is configured")]
    MissingPartialRenderer(String),

    /// The partial renderer failed.
    #[error("partial \"{name}\" failed: {message}")]
    Partial { name: String, message: String },

    /// Helper configuration could not be read.
    #[error("invalid helper configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

/// Result type alias for helper operations.
pub type Result<T> = std::result::Result<T, HelperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_helper() {
        let err = HelperError::MissingName {
            helper: "FormSelect",
        };
        assert!(err.to_string().starts_with("FormSelect requires"));

        let err = HelperError::InvalidElementType {
            helper: "FormCheckbox",
            expected: "Checkbox",
            actual: "Input(text)",
        };
        assert_eq!(
            err.to_string(),
            "FormCheckbox requires an element of kind Checkbox, got Input(text)"
        );
    }

    #[test]
    fn test_config_error_conversion() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: HelperError = parse.into();
        assert!(matches!(err, HelperError::InvalidConfig(_)));
    }
}
