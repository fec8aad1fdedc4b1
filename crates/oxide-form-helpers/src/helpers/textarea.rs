//! Textareas.

use tracing::debug;

use super::guard::{invalid_kind, require_name};
use super::ElementHelper;
use crate::context::RenderContext;
use crate::element::{Element, ElementKind};
use crate::error::Result;
use crate::markup::Markup;

/// Renders `<textarea>` with the escaped value as content.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormTextarea;

impl ElementHelper for FormTextarea {
    fn markup(&self, ctx: &RenderContext, element: &Element) -> Result<Markup> {
        if !matches!(element.kind, ElementKind::Textarea) {
            return Err(invalid_kind(element, "FormTextarea", "Textarea"));
        }
        let name = require_name(element, "FormTextarea")?;
        debug!(name, "rendering textarea");

        let mut attrs = element.attributes.clone();
        attrs.merge_class("form-control");
        attrs.set("name", name);
        attrs.remove("value");
        let content = element
            .scalar_value()
            .map(|value| ctx.escape_html(&value))
            .unwrap_or_default();
        let mut markup = Markup::new();
        markup.verbatim(ctx.to_html("textarea", &attrs, &content));
        Ok(markup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textarea() {
        let ctx = RenderContext::new();
        let element = Element::textarea("content")
            .attr("rows", "6")
            .value("<Hello>");
        assert_eq!(
            FormTextarea.render(&ctx, &element).unwrap(),
            r#"<textarea rows="6" class="form-control" name="content">&lt;Hello&gt;</textarea>"#
        );
    }

    #[test]
    fn test_empty_textarea() {
        let ctx = RenderContext::new().with_indent(2);
        let element = Element::textarea("notes");
        assert_eq!(
            FormTextarea.render(&ctx, &element).unwrap(),
            r#"  <textarea class="form-control" name="notes"></textarea>"#
        );
    }
}
