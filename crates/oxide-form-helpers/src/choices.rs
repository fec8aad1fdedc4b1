//! Value options for selects, radios and multi-checkboxes.

use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;

/// A single selectable option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    /// Marks the option selected regardless of the element value.
    pub selected: bool,
    pub disabled: bool,
    pub attributes: Attributes,
    /// Emits the label without HTML escaping.
    pub disable_html_escape: bool,
}

impl SelectOption {
    /// Creates an option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            ..Default::default()
        }
    }

    /// Marks the option selected.
    #[must_use]
    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }

    /// Marks the option disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Sets an extra attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(key, value);
        self
    }

    /// Emits the label verbatim.
    #[must_use]
    pub fn raw_label(mut self) -> Self {
        self.disable_html_escape = true;
        self
    }
}

/// A labelled group of options, rendered as `<optgroup>`.
///
/// `options` is required when deserializing, so an entry without it reads as
/// a [`SelectOption`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionGroup {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub attributes: Attributes,
    pub options: Vec<SelectOption>,
}

impl OptionGroup {
    /// Creates a group.
    pub fn new(label: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self {
            label: label.into(),
            options,
            ..Default::default()
        }
    }

    /// Marks the whole group disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// An entry in a value-options list: a leaf option or one level of grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValueOption {
    Group(OptionGroup),
    Option(SelectOption),
}

impl From<SelectOption> for ValueOption {
    fn from(option: SelectOption) -> Self {
        Self::Option(option)
    }
}

impl From<OptionGroup> for ValueOption {
    fn from(group: OptionGroup) -> Self {
        Self::Group(group)
    }
}

impl<V: Into<String>, L: Into<String>> From<(V, L)> for ValueOption {
    fn from((value, label): (V, L)) -> Self {
        Self::Option(SelectOption::new(value, label))
    }
}

/// Builds a flat options list from `(value, label)` pairs.
pub fn options_from_pairs<V, L>(pairs: impl IntoIterator<Item = (V, L)>) -> Vec<ValueOption>
where
    V: Into<String>,
    L: Into<String>,
{
    pairs.into_iter().map(ValueOption::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_from_pairs() {
        let options = options_from_pairs([("a", "Alpha"), ("b", "Beta")]);
        assert_eq!(options.len(), 2);
        assert_eq!(
            options[1],
            ValueOption::Option(SelectOption::new("b", "Beta"))
        );
    }

    #[test]
    fn test_deserialize_group_and_option() {
        let options: Vec<ValueOption> = serde_json::from_str(
            r#"[
                {"value": "x", "label": "X", "disabled": true},
                {"label": "Group", "options": [{"value": "y", "label": "Y"}]}
            ]"#,
        )
        .unwrap();
        assert!(matches!(&options[0], ValueOption::Option(o) if o.disabled));
        assert!(matches!(&options[1], ValueOption::Group(g) if g.options.len() == 1));
    }

    #[test]
    fn test_entries_without_options_are_leaves() {
        let options: Vec<ValueOption> = serde_json::from_str(
            r#"[{"label": "Pick one"}, {"label": "No", "disabled": true}, {"label": "Empty", "options": []}]"#,
        )
        .unwrap();
        assert_eq!(
            options[0],
            ValueOption::Option(SelectOption::new("", "Pick one"))
        );
        assert!(matches!(&options[1], ValueOption::Option(o) if o.disabled && o.label == "No"));
        assert!(matches!(&options[2], ValueOption::Group(g) if g.options.is_empty()));
    }
}
