//! Form rows: label, control, errors and help text in one layout.
//!
//! The structure depends on two things: what kind of control the element
//! is ([`RowKind`]) and the row [`Layout`]. Each combination is one match arm
//! in `FormRow::compose`.

use ironhtml::html;
use tracing::debug;

use super::errors::{feedback_id, FormElementErrors};
use super::form_element::FormElement;
use super::guard::require_name;
use super::label::{label_text, FormLabel};
use super::ElementHelper;
use crate::attributes::Attributes;
use crate::context::RenderContext;
use crate::element::{Element, ElementKind, InputType};
use crate::error::{HelperError, Result};
use crate::markup::{close_tag, Markup};
use crate::options::{LabelPosition, Layout};
use crate::partial::PartialParams;

const DEFAULT_LABEL_COL: &str = "col-sm-2";
const DEFAULT_COL: &str = "col-sm-10";
const DEFAULT_OFFSET_COL: &str = "col-sm-10 offset-sm-2";

/// How a row treats its control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Hidden inputs: no label, no wrapper.
    Hidden,
    /// Buttons and submit inputs: no separate label.
    Button,
    /// Single checkboxes carry their own label.
    Check,
    /// Radio and checkbox groups: `fieldset` with a `legend`.
    Choices,
    /// Everything else: a `label` pointing at the control.
    Control,
}

impl RowKind {
    pub fn of(kind: &ElementKind) -> Self {
        match kind {
            ElementKind::Hidden => Self::Hidden,
            ElementKind::Button
            | ElementKind::Input {
                input_type: InputType::Submit | InputType::Reset,
            } => Self::Button,
            ElementKind::Checkbox(_) => Self::Check,
            ElementKind::MultiCheckbox(_) | ElementKind::Radio(_) => Self::Choices,
            _ => Self::Control,
        }
    }
}

/// Id of the help block for an element id.
pub fn help_id(id: &str) -> String {
    format!("{id}Help")
}

/// The rendered pieces a layout arranges.
struct RowParts<'a> {
    element: &'a Element,
    control: Markup,
    errors: Markup,
    help: Option<String>,
    label_attributes: Attributes,
    position: LabelPosition,
}

impl RowParts<'_> {
    /// Control, errors and help, in that order.
    fn body(self) -> Markup {
        let mut body = self.control;
        body.append(self.errors);
        if let Some(help) = self.help {
            body.line(help);
        }
        body
    }

    fn label(&self, ctx: &RenderContext, classes: &str) -> Result<Option<String>> {
        if label_text(ctx, self.element).is_none() {
            return Ok(None);
        }
        let mut attrs = self.label_attributes.clone();
        if !classes.is_empty() {
            attrs.merge_class(classes);
        }
        FormLabel
            .render_with_attributes(ctx, self.element, attrs, None)
            .map(Some)
    }

    fn legend(&self, ctx: &RenderContext, classes: &str) -> Option<String> {
        let text = label_text(ctx, self.element)?;
        let mut attrs = self.label_attributes.clone();
        attrs.merge_class(classes);
        Some(ctx.to_html("legend", &attrs, &text))
    }
}

fn container(
    ctx: &RenderContext,
    tag: &str,
    default_class: &str,
    overrides: &Attributes,
    inner: Markup,
) -> Markup {
    let mut attrs = Attributes::new().with("class", default_class);
    attrs.merge(overrides);
    Markup::wrap(ctx.open_tag(tag, &attrs), inner, close_tag(tag))
}

fn help_block(ctx: &RenderContext, element: &Element) -> Option<String> {
    let content = element
        .options
        .help_content
        .as_deref()
        .filter(|c| !c.trim().is_empty())?;
    let text = ctx.text(content, element.label_options.disable_html_escape);
    let block = html! { div.class("form-text") };
    let block = match element.id_attr() {
        Some(id) => block.attr("id", &help_id(id)),
        None => block,
    };
    Some(block.raw(&text).render())
}

/// Renders a complete form row.
///
/// With a partial name set, the row is delegated to the context's
/// [`crate::PartialRenderer`] and its output returned verbatim.
#[derive(Debug, Clone, Default)]
pub struct FormRow {
    partial: Option<String>,
}

impl FormRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delegates rows to the named partial template.
    #[must_use]
    pub fn with_partial(mut self, partial: impl Into<String>) -> Self {
        self.partial = Some(partial.into());
        self
    }

    fn render_partial(
        &self,
        ctx: &RenderContext,
        element: &Element,
        partial: &str,
    ) -> Result<String> {
        let renderer = ctx
            .partial_renderer()
            .ok_or_else(|| HelperError::MissingPartialRenderer(partial.to_string()))?;
        let params = PartialParams {
            element,
            label: element.label.as_deref().map(|label| ctx.translate(label)),
            label_attributes: element.label_attributes.clone(),
            label_position: ctx
                .label_position_for(&element.label_options, LabelPosition::Prepend),
            render_errors: ctx.render_errors(),
            indent: ctx.indent().to_string(),
        };
        debug!(name = element.name.as_deref(), partial, "delegating row to partial");
        renderer.render(partial, &params)
    }

    fn compose(
        ctx: &RenderContext,
        parts: RowParts<'_>,
        kind: RowKind,
        layout: Layout,
    ) -> Result<Markup> {
        let element = parts.element;
        let options = &element.options;
        let row_attributes = &options.row_attributes;
        let markup = match (kind, layout) {
            (RowKind::Hidden, _) => parts.body(),
            (RowKind::Button, Layout::Vertical | Layout::Inline) => parts.control,
            (RowKind::Button | RowKind::Check, Layout::Horizontal) => {
                let col = container(
                    ctx,
                    "div",
                    DEFAULT_OFFSET_COL,
                    &options.col_attributes,
                    parts.body(),
                );
                container(ctx, "div", "row mb-3", row_attributes, col)
            }
            (RowKind::Check, Layout::Vertical) => {
                container(ctx, "div", "mb-3", row_attributes, parts.body())
            }
            (RowKind::Check, Layout::Inline) => {
                container(ctx, "div", "col-12", row_attributes, parts.body())
            }
            (RowKind::Choices, Layout::Horizontal) => {
                let label_col = label_col_class(element);
                let legend = parts.legend(ctx, &format!("col-form-label {label_col} pt-0"));
                let mut inner = Markup::new();
                if let Some(legend) = legend {
                    inner.line(legend);
                }
                let col = container(ctx, "div", DEFAULT_COL, &options.col_attributes, parts.body());
                inner.append(col);
                container(ctx, "fieldset", "row mb-3", row_attributes, inner)
            }
            (RowKind::Choices, Layout::Vertical | Layout::Inline) => {
                let mut inner = Markup::new();
                if let Some(legend) = parts.legend(ctx, "form-label") {
                    inner.line(legend);
                }
                inner.append(parts.body());
                container(ctx, "fieldset", "mb-3", row_attributes, inner)
            }
            (RowKind::Control, Layout::Horizontal) => {
                let label_col = label_col_class(element);
                let label = parts.label(ctx, &format!("col-form-label {label_col}"))?;
                let mut inner = Markup::new();
                let col_class = match label {
                    Some(label) => {
                        inner.line(label);
                        DEFAULT_COL
                    }
                    None => DEFAULT_OFFSET_COL,
                };
                let col = container(ctx, "div", col_class, &options.col_attributes, parts.body());
                inner.append(col);
                container(ctx, "div", "row mb-3", row_attributes, inner)
            }
            (RowKind::Control, Layout::Vertical) if is_floating(element) => {
                let label = parts.label(ctx, "")?;
                let mut inner = parts.control;
                if let Some(label) = label {
                    inner.line(label);
                }
                inner.append(parts.errors);
                if let Some(help) = parts.help {
                    inner.line(help);
                }
                container(ctx, "div", "form-floating mb-3", row_attributes, inner)
            }
            (RowKind::Control, Layout::Vertical) => {
                let label = parts.label(ctx, "form-label")?;
                let position = parts.position;
                let mut inner = Markup::new();
                match (label, position) {
                    (Some(label), LabelPosition::Prepend) => {
                        inner.line(label);
                        inner.append(parts.body());
                    }
                    (Some(label), LabelPosition::Append) => {
                        inner.append(parts.control);
                        inner.line(label);
                        inner.append(parts.errors);
                        if let Some(help) = parts.help {
                            inner.line(help);
                        }
                    }
                    (None, _) => {
                        inner.append(parts.body());
                    }
                }
                container(ctx, "div", "mb-3", row_attributes, inner)
            }
            (RowKind::Control, Layout::Inline) => {
                let mut inner = Markup::new();
                if let Some(label) = parts.label(ctx, "visually-hidden")? {
                    inner.line(label);
                }
                inner.append(parts.body());
                container(ctx, "div", "col-12", row_attributes, inner)
            }
        };
        Ok(markup)
    }
}

fn label_col_class(element: &Element) -> String {
    element
        .options
        .label_col_attributes
        .get("class")
        .unwrap_or(DEFAULT_LABEL_COL)
        .to_string()
}

fn is_floating(element: &Element) -> bool {
    element.options.floating
        && match element.kind {
            ElementKind::Input { input_type } => input_type.is_text_like(),
            ElementKind::Textarea | ElementKind::Select(_) => true,
            _ => false,
        }
}

impl ElementHelper for FormRow {
    fn markup(&self, ctx: &RenderContext, element: &Element) -> Result<Markup> {
        let name = require_name(element, "FormRow")?;
        if let Some(partial) = &self.partial {
            return Ok(Markup::from_text(&self.render_partial(ctx, element, partial)?));
        }

        let layout = element.options.layout.unwrap_or_default();
        let kind = RowKind::of(&element.kind);
        debug!(name, ?layout, ?kind, "rendering form row");

        let show_errors = ctx.render_errors() && element.has_messages();
        let help = help_block(ctx, element);

        let mut control = element.clone();
        if show_errors {
            control.attributes.add_class("is-invalid");
        }
        if let Some(id) = element.id_attr() {
            if show_errors {
                control
                    .attributes
                    .append_token("aria-describedby", &feedback_id(id));
            }
            if help.is_some() {
                control.attributes.append_token("aria-describedby", &help_id(id));
            }
        }
        if element.options.show_required_mark && element.attributes.has("required") {
            control.label_attributes.add_class("required");
        }
        let floating = layout == Layout::Vertical && is_floating(element);
        if floating && !control.attributes.has("placeholder") {
            if let Some(label) = element.label.as_deref() {
                control.attributes.set("placeholder", ctx.translate(label));
            }
        }

        let errors = if show_errors {
            FormElementErrors::new().markup(ctx, &control)?
        } else {
            Markup::new()
        };
        let parts = RowParts {
            element: &control,
            control: FormElement.markup(ctx, &control)?,
            errors,
            help,
            label_attributes: control.label_attributes.clone(),
            position: ctx.label_position_for(&element.label_options, LabelPosition::Prepend),
        };
        Self::compose(ctx, parts, kind, layout)
    }

    fn render(&self, ctx: &RenderContext, element: &Element) -> Result<String> {
        if let Some(partial) = &self.partial {
            require_name(element, "FormRow")?;
            return self.render_partial(ctx, element, partial);
        }
        Ok(self.markup(ctx, element)?.render(ctx.indent()))
    }
}
