//! Layout and label options.

use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;

/// Row layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Label column next to a control column.
    Horizontal,
    /// Label stacked above the control.
    #[default]
    Vertical,
    /// Fields laid out in one line with hidden labels.
    Inline,
}

/// Where a label goes relative to its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    /// Label before the content.
    Prepend,
    /// Label after the content.
    Append,
}

/// Per-element label options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelOptions {
    /// Emit the label (and messages) without HTML escaping.
    pub disable_html_escape: bool,
    /// Wrap the label text in a `<span>`.
    pub always_wrap: bool,
    /// Overrides the helper's label position.
    pub label_position: Option<LabelPosition>,
}

/// Per-element rendering options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementOptions {
    pub layout: Option<Layout>,
    /// Help text shown below the control.
    pub help_content: Option<String>,
    /// Attributes of the outer row container.
    pub row_attributes: Attributes,
    /// Attributes of the control column in horizontal layout.
    pub col_attributes: Attributes,
    /// Attributes of the label column in horizontal layout.
    pub label_col_attributes: Attributes,
    /// Floating label for text-like inputs in vertical layout.
    pub floating: bool,
    /// Adds the `required` class to labels of required elements.
    pub show_required_mark: bool,
    /// Renders checkboxes as switches.
    pub switch: bool,
}
