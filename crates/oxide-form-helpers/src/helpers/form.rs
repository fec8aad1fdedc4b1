//! Whole forms.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::row::FormRow;
use super::ElementHelper;
use crate::attributes::Attributes;
use crate::context::RenderContext;
use crate::element::Element;
use crate::error::Result;
use crate::markup::Markup;
use crate::options::Layout;

const INLINE_FORM_CLASS: &str = "row row-cols-lg-auto g-3 align-items-center";

/// A form: its tag attributes, its elements and a default layout.
///
/// Deserializes from JSON so forms can be described as data:
///
/// ```
/// use oxide_form_helpers::{Form, FormSpec, RenderContext};
///
/// let spec: FormSpec = serde_json::from_str(r#"{
///     "attributes": [["method", "post"]],
///     "elements": [
///         {"kind": {"type": "input", "input_type": "email"}, "name": "email", "label": "Email"},
///         {"kind": {"type": "button"}, "name": "send", "label": "Send"}
///     ]
/// }"#).unwrap();
///
/// let html = Form::new().render(&RenderContext::new(), &spec).unwrap();
/// assert!(html.starts_with(r#"<form method="post">"#));
/// assert!(html.ends_with("</form>"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSpec {
    pub attributes: Attributes,
    pub elements: Vec<Element>,
    pub layout: Option<Layout>,
}

impl FormSpec {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(key, value);
        self
    }

    #[must_use]
    pub fn element(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    #[must_use]
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }

    fn form_attributes(&self) -> Attributes {
        let mut attrs = self.attributes.clone();
        if self.layout == Some(Layout::Inline) {
            attrs.merge_class(INLINE_FORM_CLASS);
        }
        attrs
    }
}

/// Renders a `<form>` with one [`FormRow`] per element.
#[derive(Debug, Clone, Default)]
pub struct Form {
    row: FormRow,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `row` for every element, e.g. one delegating to a partial.
    #[must_use]
    pub fn with_row(mut self, row: FormRow) -> Self {
        self.row = row;
        self
    }

    pub fn open_tag(&self, ctx: &RenderContext, spec: &FormSpec) -> String {
        ctx.open_tag("form", &spec.form_attributes())
    }

    pub fn close_tag(&self) -> &'static str {
        "</form>"
    }

    pub fn markup(&self, ctx: &RenderContext, spec: &FormSpec) -> Result<Markup> {
        debug!(elements = spec.elements.len(), layout = ?spec.layout, "rendering form");
        let mut rows = Markup::new();
        for element in &spec.elements {
            let row = match (spec.layout, element.options.layout) {
                (Some(layout), None) => self.row.markup(ctx, &element.clone().layout(layout))?,
                _ => self.row.markup(ctx, element)?,
            };
            rows.append(row);
        }
        Ok(Markup::wrap(self.open_tag(ctx, spec), rows, self.close_tag()))
    }

    pub fn render(&self, ctx: &RenderContext, spec: &FormSpec) -> Result<String> {
        Ok(self.markup(ctx, spec)?.render(ctx.indent()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_rows() {
        let ctx = RenderContext::new();
        let spec = FormSpec::new()
            .attr("method", "post")
            .element(Element::text("q").label("Search"))
            .element(Element::button("go").label("Go"));
        assert_eq!(
            Form::new().render(&ctx, &spec).unwrap(),
            concat!(
                "<form method=\"post\">\n",
                "    <div class=\"mb-3\">\n",
                "        <label class=\"form-label\" for=\"q\">Search</label>\n",
                "        <input class=\"form-control\" name=\"q\" type=\"text\">\n",
                "    </div>\n",
                "    <button name=\"go\" type=\"submit\">Go</button>\n",
                "</form>"
            )
        );
    }

    #[test]
    fn test_inline_layout_reaches_elements() {
        let ctx = RenderContext::new();
        let spec = FormSpec::new()
            .layout(Layout::Inline)
            .element(Element::text("q").label("Search"))
            .element(Element::text("other").label("Other").layout(Layout::Vertical));
        let html = Form::new().render(&ctx, &spec).unwrap();
        assert!(html.starts_with(r#"<form class="row row-cols-lg-auto g-3 align-items-center">"#));
        assert!(html.contains(r#"<label class="visually-hidden" for="q">Search</label>"#));
        assert!(html.contains(r#"<label class="form-label" for="other">Other</label>"#));
    }

    #[test]
    fn test_indent_applies_to_every_line() {
        let ctx = RenderContext::new().with_indent(2);
        let spec = FormSpec::new().element(Element::text("q"));
        let html = Form::new().render(&ctx, &spec).unwrap();
        assert!(html.lines().all(|line| line.starts_with("  ")));
    }
}
