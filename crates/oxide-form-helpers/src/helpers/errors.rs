//! Validation message lists.

use tracing::debug;

use super::guard::require_name;
use super::ElementHelper;
use crate::attributes::Attributes;
use crate::context::RenderContext;
use crate::element::Element;
use crate::error::Result;
use crate::markup::Markup;

/// Renders the element's messages as an `invalid-feedback` list.
///
/// ```text
/// <div class="invalid-feedback" id="{id}Feedback">
///     <ul>
///         <li>message</li>
///     </ul>
/// </div>
/// ```
///
/// Renders nothing when no non-blank message is left.
#[derive(Debug, Clone, Default)]
pub struct FormElementErrors {
    attributes: Attributes,
}

impl FormElementErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds attributes to the container; classes are merged.
    #[must_use]
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }
}

/// Id of the feedback container for an element id.
pub fn feedback_id(id: &str) -> String {
    format!("{id}Feedback")
}

impl ElementHelper for FormElementErrors {
    fn markup(&self, ctx: &RenderContext, element: &Element) -> Result<Markup> {
        let name = require_name(element, "FormElementErrors")?;
        let messages = element.flat_messages();
        if messages.is_empty() {
            return Ok(Markup::new());
        }
        debug!(name, count = messages.len(), "rendering element errors");

        let mut items = Markup::new();
        for message in messages {
            let text = ctx.text(message, element.label_options.disable_html_escape);
            items.line(format!("<li>{text}</li>"));
        }

        let mut attrs = Attributes::new().with("class", "invalid-feedback");
        for (key, value) in self.attributes.iter() {
            if key == "class" {
                attrs.add_class(value);
            } else {
                attrs.set(key, value);
            }
        }
        if let Some(id) = element.id_attr() {
            attrs.set("id", feedback_id(id));
        }

        let list = Markup::wrap("<ul>", items, "</ul>");
        Ok(Markup::wrap(ctx.open_tag("div", &attrs), list, "</div>"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_list_with_feedback_id() {
        let ctx = RenderContext::new();
        let element = Element::text("email")
            .id("email")
            .message("Invalid <email>")
            .message_group(["", "Too long"]);
        assert_eq!(
            FormElementErrors::new().render(&ctx, &element).unwrap(),
            "<div class=\"invalid-feedback\" id=\"emailFeedback\">\n    <ul>\n        <li>Invalid &lt;email&gt;</li>\n        <li>Too long</li>\n    </ul>\n</div>"
        );
    }

    #[test]
    fn test_blank_messages_render_nothing() {
        let ctx = RenderContext::new().with_indent(4);
        let element = Element::text("a").message("").message_group([" ", ""]);
        assert_eq!(FormElementErrors::new().render(&ctx, &element).unwrap(), "");
    }

    #[test]
    fn test_extra_attributes_and_raw_messages() {
        let ctx = RenderContext::new();
        let element = Element::text("a")
            .message("<b>bad</b>")
            .disable_html_escape();
        let helper =
            FormElementErrors::new().with_attributes(Attributes::new().with("class", "d-block"));
        let html = helper.render(&ctx, &element).unwrap();
        assert!(html.starts_with(r#"<div class="invalid-feedback d-block">"#));
        assert!(html.contains("<li><b>bad</b></li>"));
    }
}
