//! Generic `<input>` elements.

use tracing::debug;

use super::guard::{invalid_kind, require_name};
use super::ElementHelper;
use crate::context::RenderContext;
use crate::element::{Element, ElementKind, InputType};
use crate::error::Result;
use crate::markup::Markup;

/// Renders text-like, range, color and submit inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormInput;

impl ElementHelper for FormInput {
    fn markup(&self, ctx: &RenderContext, element: &Element) -> Result<Markup> {
        let ElementKind::Input { input_type } = element.kind else {
            return Err(invalid_kind(element, "FormInput", "Input"));
        };
        let name = require_name(element, "FormInput")?;
        debug!(name, input_type = input_type.as_str(), "rendering input");

        let mut attrs = element.attributes.clone();
        if let Some(class) = input_type.css_class() {
            attrs.merge_class(class);
        }
        attrs.set("name", name);
        attrs.set("type", input_type.as_str());
        if input_type == InputType::Password {
            attrs.remove("value");
        } else if let Some(value) = element.scalar_value() {
            attrs.set("value", value);
        }
        Ok(Markup::from_line(ctx.void_tag("input", &attrs)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input() {
        let ctx = RenderContext::new();
        let element = Element::text("username").id("username").value("a\"b");
        assert_eq!(
            FormInput.render(&ctx, &element).unwrap(),
            r#"<input id="username" class="form-control" name="username" type="text" value="a&quot;b">"#
        );
    }

    #[test]
    fn test_password_drops_value() {
        let ctx = RenderContext::new();
        let element = Element::input(InputType::Password, "pw")
            .attr("value", "secret")
            .value("secret");
        let html = FormInput.render(&ctx, &element).unwrap();
        assert!(html.contains(r#"type="password""#));
        assert!(!html.contains("secret"));
    }

    #[test]
    fn test_type_specific_classes() {
        let ctx = RenderContext::new();
        let range = FormInput
            .render(&ctx, &Element::input(InputType::Range, "r"))
            .unwrap();
        assert!(range.starts_with(r#"<input class="form-range""#));

        let color = FormInput
            .render(&ctx, &Element::input(InputType::Color, "c").attr("class", "x"))
            .unwrap();
        assert!(color.contains(r#"class="form-control form-control-color x""#));

        let submit = FormInput
            .render(&ctx, &Element::input(InputType::Submit, "go"))
            .unwrap();
        assert_eq!(submit, r#"<input name="go" type="submit">"#);
    }

    #[test]
    fn test_missing_name() {
        let ctx = RenderContext::new();
        let element = Element::new(ElementKind::Input {
            input_type: InputType::Email,
        });
        assert!(matches!(
            FormInput.render(&ctx, &element),
            Err(crate::HelperError::MissingName { .. })
        ));
    }
}
