//! Hidden inputs.

use tracing::debug;

use super::guard::{invalid_kind, require_name};
use super::ElementHelper;
use crate::attributes::Attributes;
use crate::context::RenderContext;
use crate::element::{Element, ElementKind};
use crate::error::Result;
use crate::markup::Markup;

/// Renders `<input type="hidden">`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormHidden;

impl FormHidden {
    /// Renders a standalone hidden input, used for unchecked/unselected companions.
    pub fn companion(&self, ctx: &RenderContext, name: &str, value: &str) -> String {
        let attrs = Attributes::new()
            .with("type", "hidden")
            .with("name", name)
            .with("value", value);
        ctx.void_tag("input", &attrs)
    }
}

impl ElementHelper for FormHidden {
    fn markup(&self, ctx: &RenderContext, element: &Element) -> Result<Markup> {
        if !matches!(element.kind, ElementKind::Hidden) {
            return Err(invalid_kind(element, "FormHidden", "Hidden"));
        }
        let name = require_name(element, "FormHidden")?;
        debug!(name, "rendering hidden input");

        let mut attrs = element.attributes.clone();
        attrs.set("name", name);
        attrs.set("type", "hidden");
        if let Some(value) = element.scalar_value() {
            attrs.set("value", value);
        }
        Ok(Markup::from_line(ctx.void_tag("input", &attrs)))
    }
}
