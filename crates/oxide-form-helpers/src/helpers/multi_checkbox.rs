//! Checkbox groups and radio groups.

use tracing::debug;

use super::checkbox::{check_block, wrapper_class, CheckItem};
use super::guard::{invalid_kind, require_name};
use super::hidden::FormHidden;
use super::ElementHelper;
use crate::choices::{SelectOption, ValueOption};
use crate::context::RenderContext;
use crate::element::{Element, ElementKind};
use crate::error::Result;
use crate::markup::Markup;
use crate::options::LabelPosition;

/// Renders one `form-check` block per value option.
///
/// Checkbox groups submit `name[]`; radio groups submit `name`. Options
/// inside groups are rendered flat, since checks have no grouping markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormMultiCheckbox;

/// Radio variant of [`FormMultiCheckbox`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FormRadio;

fn leaf_options(options: &[ValueOption]) -> Vec<&SelectOption> {
    options
        .iter()
        .flat_map(|entry| match entry {
            ValueOption::Option(option) => vec![option],
            ValueOption::Group(group) => group.options.iter().collect(),
        })
        .collect()
}

fn render_choices(
    ctx: &RenderContext,
    element: &Element,
    helper: &'static str,
    input_type: &'static str,
) -> Result<Markup> {
    let (ElementKind::MultiCheckbox(spec) | ElementKind::Radio(spec)) = &element.kind else {
        return Err(invalid_kind(element, helper, "MultiCheckbox or Radio"));
    };
    let name = require_name(element, helper)?;
    debug!(name, input_type, "rendering choice group");

    let input_name = if input_type == "checkbox" && !name.ends_with("[]") {
        format!("{name}[]")
    } else {
        name.to_string()
    };
    let selected = element.value_list();
    let class = wrapper_class(element);
    let position = ctx.label_position_for(&element.label_options, LabelPosition::Append);

    let mut markup = Markup::new();
    if spec.use_hidden_element {
        markup.line(FormHidden.companion(ctx, name, &spec.unchecked_value));
    }
    for (index, option) in leaf_options(&spec.value_options).into_iter().enumerate() {
        let mut attrs = element.attributes.clone();
        let id = element.id_attr().map(|id| {
            if index == 0 {
                id.to_string()
            } else {
                format!("{id}-{index}")
            }
        });
        match &id {
            Some(id) => attrs.set("id", id.as_str()),
            None => {
                attrs.remove("id");
            }
        }
        attrs.merge_class("form-check-input");
        attrs.set("name", input_name.as_str());
        attrs.set("type", input_type);
        attrs.set("value", option.value.as_str());
        attrs.merge(&option.attributes);
        if option.selected || selected.contains(&option.value) {
            attrs.set("checked", "checked");
        }
        if option.disabled {
            attrs.set("disabled", "disabled");
        }

        let label = ctx.text(
            &option.label,
            element.label_options.disable_html_escape || option.disable_html_escape,
        );
        let item = CheckItem {
            input: ctx.void_tag("input", &attrs),
            id,
            label: (!label.is_empty()).then_some(label),
            label_attributes: element.label_attributes.clone(),
        };
        markup.append(check_block(ctx, &class, None, item, position));
    }
    Ok(markup)
}

impl ElementHelper for FormMultiCheckbox {
    fn markup(&self, ctx: &RenderContext, element: &Element) -> Result<Markup> {
        if !matches!(element.kind, ElementKind::MultiCheckbox(_)) {
            return Err(invalid_kind(element, "FormMultiCheckbox", "MultiCheckbox"));
        }
        render_choices(ctx, element, "FormMultiCheckbox", "checkbox")
    }
}

impl ElementHelper for FormRadio {
    fn markup(&self, ctx: &RenderContext, element: &Element) -> Result<Markup> {
        if !matches!(element.kind, ElementKind::Radio(_)) {
            return Err(invalid_kind(element, "FormRadio", "Radio"));
        }
        render_choices(ctx, element, "FormRadio", "radio")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choices::{options_from_pairs, OptionGroup};
    use crate::options::Layout;
    use serde_json::json;

    #[test]
    fn test_multi_checkbox_membership() {
        let ctx = RenderContext::new();
        let element = Element::multi_checkbox("tags", options_from_pairs([("a", "A"), ("b", "B")]))
            .value(json!(["b"]));
        assert_eq!(
            FormMultiCheckbox.render(&ctx, &element).unwrap(),
            concat!(
                "<div class=\"form-check\">\n",
                "    <label>\n",
                "        <input class=\"form-check-input\" name=\"tags[]\" type=\"checkbox\" value=\"a\">\n",
                "        <span>A</span>\n",
                "    </label>\n",
                "</div>\n",
                "<div class=\"form-check\">\n",
                "    <label>\n",
                "        <input class=\"form-check-input\" name=\"tags[]\" type=\"checkbox\" value=\"b\" checked=\"checked\">\n",
                "        <span>B</span>\n",
                "    </label>\n",
                "</div>"
            )
        );
    }

    #[test]
    fn test_radio_ids_and_inline() {
        let ctx = RenderContext::new();
        let element = Element::radio(
            "size",
            vec![
                ("s", "Small").into(),
                OptionGroup::new("Large", vec![SelectOption::new("l", "Large").disabled()]).into(),
            ],
        )
        .id("size")
        .layout(Layout::Inline)
        .value("s");
        let html = FormRadio.render(&ctx, &element).unwrap();
        assert_eq!(html.matches("form-check form-check-inline").count(), 2);
        assert!(html.contains(r#"<input id="size" class="form-check-input" name="size" type="radio" value="s" checked="checked">"#));
        assert!(html.contains(r#"<label class="form-check-label" for="size-1">Large</label>"#));
        assert!(html.contains(r#"disabled="disabled""#));
    }

    #[test]
    fn test_hidden_companion_once() {
        let ctx = RenderContext::new();
        let element = Element::multi_checkbox("t", options_from_pairs([("a", "A"), ("b", "B")]))
            .use_hidden_element(true)
            .unchecked_value("none");
        let html = FormMultiCheckbox.render(&ctx, &element).unwrap();
        assert!(html.starts_with(r#"<input type="hidden" name="t" value="none">"#));
        assert_eq!(html.matches("type=\"hidden\"").count(), 1);
    }

    #[test]
    fn test_kind_mismatch() {
        let ctx = RenderContext::new();
        let radio = Element::radio("r", vec![]);
        assert!(FormMultiCheckbox.render(&ctx, &radio).is_err());
        assert!(FormRadio.render(&ctx, &radio).is_ok());
    }
}
