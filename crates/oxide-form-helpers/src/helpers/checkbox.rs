//! Single checkboxes and the shared `form-check` block.

use tracing::{debug, trace};

use super::guard::{invalid_kind, require_name};
use super::hidden::FormHidden;
use super::label::label_text;
use super::ElementHelper;
use crate::attributes::Attributes;
use crate::context::RenderContext;
use crate::element::{Element, ElementKind};
use crate::error::Result;
use crate::markup::Markup;
use crate::options::{LabelPosition, Layout};

/// One input inside a `form-check` wrapper.
pub(crate) struct CheckItem {
    pub input: String,
    pub id: Option<String>,
    pub label: Option<String>,
    pub label_attributes: Attributes,
}

/// Classes of the `form-check` wrapper for an element.
pub(crate) fn wrapper_class(element: &Element) -> String {
    let mut class = String::from("form-check");
    if element.options.layout == Some(Layout::Inline) {
        class.push_str(" form-check-inline");
    }
    if element.options.switch {
        class.push_str(" form-switch");
    }
    class
}

/// Renders the `form-check` block around one input.
///
/// With an id the label follows the input as a `form-check-label`; without
/// one a bare `<label>` wraps the input and a `<span>` with the text.
pub(crate) fn check_block(
    ctx: &RenderContext,
    wrapper_class: &str,
    companion: Option<String>,
    item: CheckItem,
    position: LabelPosition,
) -> Markup {
    let mut inner = Markup::new();
    if let Some(hidden) = companion {
        inner.line(hidden);
    }

    match (item.label, item.id) {
        (None, _) => {
            inner.line(item.input);
        }
        (Some(label), Some(id)) => {
            let mut attrs = item.label_attributes;
            attrs.merge_class("form-check-label");
            attrs.set("for", id);
            let label_line = ctx.to_html("label", &attrs, &label);
            match position {
                LabelPosition::Prepend => {
                    inner.line(label_line);
                    inner.line(item.input);
                }
                LabelPosition::Append => {
                    inner.line(item.input);
                    inner.line(label_line);
                }
            }
        }
        (Some(label), None) => {
            let span = format!("<span>{label}</span>");
            let mut wrapped = Markup::new();
            match position {
                LabelPosition::Prepend => {
                    wrapped.line(span);
                    wrapped.line(item.input);
                }
                LabelPosition::Append => {
                    wrapped.line(item.input);
                    wrapped.line(span);
                }
            }
            inner.append(Markup::wrap(
                ctx.open_tag("label", &item.label_attributes),
                wrapped,
                "</label>",
            ));
        }
    }

    let wrapper = Attributes::new().with("class", wrapper_class);
    Markup::wrap(ctx.open_tag("div", &wrapper), inner, "</div>")
}

/// Renders a single checkbox in a Bootstrap `form-check` wrapper.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormCheckbox;

impl ElementHelper for FormCheckbox {
    fn markup(&self, ctx: &RenderContext, element: &Element) -> Result<Markup> {
        let ElementKind::Checkbox(spec) = &element.kind else {
            return Err(invalid_kind(element, "FormCheckbox", "Checkbox"));
        };
        let name = require_name(element, "FormCheckbox")?;
        let checked = element
            .scalar_value()
            .is_some_and(|value| value == spec.checked_value);
        debug!(name, checked, "rendering checkbox");

        let mut attrs = element.attributes.clone();
        attrs.merge_class("form-check-input");
        attrs.set("name", name);
        attrs.set("type", "checkbox");
        if element.options.switch {
            attrs.set("role", "switch");
        }
        attrs.set("value", spec.checked_value.as_str());
        if checked {
            attrs.set("checked", "checked");
        }

        let companion = spec.use_hidden_element.then(|| {
            trace!(name, "adding unchecked companion");
            FormHidden.companion(ctx, name, &spec.unchecked_value)
        });
        let item = CheckItem {
            input: ctx.void_tag("input", &attrs),
            id: element.id_attr().map(str::to_string),
            label: label_text(ctx, element),
            label_attributes: element.label_attributes.clone(),
        };
        let position = ctx.label_position_for(&element.label_options, LabelPosition::Append);
        Ok(check_block(
            ctx,
            &wrapper_class(element),
            companion,
            item,
            position,
        ))
    }
}
