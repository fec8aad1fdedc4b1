//! Element checks run before any markup is produced.

use crate::element::Element;
use crate::error::{HelperError, Result};

/// Returns the element name, failing when it is absent or empty.
pub fn require_name<'a>(element: &'a Element, helper: &'static str) -> Result<&'a str> {
    match element.name.as_deref() {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(HelperError::MissingName { helper }),
    }
}

/// Builds the error for an element of the wrong kind.
pub fn invalid_kind(element: &Element, helper: &'static str, expected: &'static str) -> HelperError {
    HelperError::InvalidElementType {
        helper,
        expected,
        actual: element.kind.kind_name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementKind;

    #[test]
    fn test_require_name() {
        assert_eq!(require_name(&Element::text("a"), "X").unwrap(), "a");
        assert!(matches!(
            require_name(&Element::new(ElementKind::Hidden), "X"),
            Err(HelperError::MissingName { helper: "X" })
        ));
        assert!(require_name(&Element::text(""), "X").is_err());
    }

    #[test]
    fn test_invalid_kind_names_both_kinds() {
        let err = invalid_kind(&Element::text("a"), "FormSelect", "Select");
        assert!(matches!(
            err,
            HelperError::InvalidElementType {
                expected: "Select",
                actual: "Input",
                ..
            }
        ));
    }
}
