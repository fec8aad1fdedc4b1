//! Selects with flat and grouped options.

use tracing::{debug, trace};

use super::guard::{invalid_kind, require_name};
use super::hidden::FormHidden;
use super::ElementHelper;
use crate::attributes::Attributes;
use crate::choices::{OptionGroup, SelectOption, ValueOption};
use crate::context::RenderContext;
use crate::element::{Element, ElementKind};
use crate::error::{HelperError, Result};
use crate::markup::Markup;
use serde_json::Value;

/// Renders `<select>` with `<option>` and `<optgroup>` children.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormSelect;

impl FormSelect {
    /// Renders the `<option>` lines for `options` against the selected values.
    pub fn render_options(
        &self,
        ctx: &RenderContext,
        options: &[ValueOption],
        selected: &[String],
        disable_html_escape: bool,
    ) -> Markup {
        let mut markup = Markup::new();
        for entry in options {
            match entry {
                ValueOption::Option(option) => {
                    markup.line(option_line(ctx, option, selected, disable_html_escape));
                }
                ValueOption::Group(group) => {
                    markup.append(group_markup(ctx, group, selected, disable_html_escape));
                }
            }
        }
        markup
    }
}

fn option_line(
    ctx: &RenderContext,
    option: &SelectOption,
    selected: &[String],
    disable_html_escape: bool,
) -> String {
    let mut attrs = Attributes::new().with("value", option.value.as_str());
    attrs.merge(&option.attributes);
    if option.selected || selected.contains(&option.value) {
        attrs.set("selected", "selected");
    }
    if option.disabled {
        attrs.set("disabled", "disabled");
    }
    let label = ctx.text(
        &option.label,
        disable_html_escape || option.disable_html_escape,
    );
    ctx.to_html("option", &attrs, &label)
}

fn group_markup(
    ctx: &RenderContext,
    group: &OptionGroup,
    selected: &[String],
    disable_html_escape: bool,
) -> Markup {
    let mut attrs = group.attributes.clone();
    attrs.set("label", ctx.translate(&group.label));
    if group.disabled {
        attrs.set("disabled", "disabled");
    }
    let mut options = Markup::new();
    for option in &group.options {
        options.line(option_line(ctx, option, selected, disable_html_escape));
    }
    Markup::wrap(ctx.open_tag("optgroup", &attrs), options, "</optgroup>")
}

impl ElementHelper for FormSelect {
    fn markup(&self, ctx: &RenderContext, element: &Element) -> Result<Markup> {
        let ElementKind::Select(spec) = &element.kind else {
            return Err(invalid_kind(element, "FormSelect", "Select"));
        };
        let name = require_name(element, "FormSelect")?;
        let multiple = element.is_multiple();
        if matches!(element.value, Some(Value::Array(_))) && !multiple {
            return Err(HelperError::MultipleValuesNotAllowed {
                name: name.to_string(),
            });
        }
        debug!(name, multiple, "rendering select");

        let mut attrs = element.attributes.clone();
        attrs.merge_class("form-select");
        if multiple && !name.ends_with("[]") {
            attrs.set("name", format!("{name}[]"));
        } else {
            attrs.set("name", name);
        }
        attrs.remove("value");

        let selected = element.value_list();
        let escape_disabled = element.label_options.disable_html_escape;
        let mut options = Markup::new();
        if let Some(empty) = &spec.empty_option {
            let label = ctx.text(empty, escape_disabled);
            options.line(format!(r#"<option value="">{label}</option>"#));
        }
        options.append(self.render_options(ctx, &spec.value_options, &selected, escape_disabled));

        let mut markup = Markup::new();
        if spec.use_hidden_element {
            trace!(name, "adding unselected companion");
            markup.line(FormHidden.companion(ctx, name, &spec.unselected_value));
        }
        markup.append(Markup::wrap(ctx.open_tag("select", &attrs), options, "</select>"));
        Ok(markup)
    }
}
