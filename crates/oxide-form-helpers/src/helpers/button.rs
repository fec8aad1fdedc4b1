//! Buttons.

use tracing::debug;

use super::guard::{invalid_kind, require_name};
use super::ElementHelper;
use crate::context::RenderContext;
use crate::element::{Element, ElementKind};
use crate::error::{HelperError, Result};
use crate::markup::Markup;

const BUTTON_TYPES: [&str; 3] = ["button", "submit", "reset"];

/// Renders `<button>` elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormButton;

impl FormButton {
    /// Renders the opening tag only.
    ///
    /// The `type` attribute defaults to `submit` unless the element sets
    /// `button` or `reset`.
    pub fn open_tag(&self, ctx: &RenderContext, element: &Element) -> Result<String> {
        if !matches!(element.kind, ElementKind::Button) {
            return Err(invalid_kind(element, "FormButton", "Button"));
        }
        let name = require_name(element, "FormButton")?;

        let mut attrs = element.attributes.clone();
        attrs.set("name", name);
        let button_type = attrs
            .get("type")
            .filter(|t| BUTTON_TYPES.contains(t))
            .unwrap_or("submit")
            .to_string();
        attrs.set("type", button_type);
        if let Some(value) = element.scalar_value() {
            attrs.set("value", value);
        }
        Ok(ctx.open_tag("button", &attrs))
    }

    /// Renders the closing tag.
    pub fn close_tag(&self) -> &'static str {
        "</button>"
    }

    /// Renders the full button.
    ///
    /// `content` falls back to the element label. Either one goes through
    /// translation and escaping.
    pub fn render_with_content(
        &self,
        ctx: &RenderContext,
        element: &Element,
        content: Option<&str>,
    ) -> Result<String> {
        let open = self.open_tag(ctx, element)?;
        let raw = content
            .or(element.label.as_deref())
            .ok_or(HelperError::MissingLabel {
                helper: "FormButton",
            })?;
        debug!(name = element.name.as_deref(), "rendering button");
        let content = ctx.text(raw, element.label_options.disable_html_escape);
        Ok(format!("{open}{content}{}", self.close_tag()))
    }
}

impl ElementHelper for FormButton {
    fn markup(&self, ctx: &RenderContext, element: &Element) -> Result<Markup> {
        Ok(Markup::from_line(self.render_with_content(ctx, element, None)?))
    }
}
