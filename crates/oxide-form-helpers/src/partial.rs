//! External partial templates for form rows.

use crate::attributes::Attributes;
use crate::element::Element;
use crate::error::Result;
use crate::options::LabelPosition;

/// Parameters handed to a partial template in place of the built-in row layout.
#[derive(Debug, Clone)]
pub struct PartialParams<'a> {
    pub element: &'a Element,
    pub label: Option<String>,
    pub label_attributes: Attributes,
    pub label_position: LabelPosition,
    pub render_errors: bool,
    pub indent: String,
}

/// Renders named partial templates.
pub trait PartialRenderer: Send + Sync {
    /// Renders the partial `name` with `params`.
    fn render(&self, name: &str, params: &PartialParams<'_>) -> Result<String>;
}
