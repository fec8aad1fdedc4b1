//! Labels.

use tracing::debug;

use crate::attributes::Attributes;
use crate::context::RenderContext;
use crate::element::Element;
use crate::error::{HelperError, Result};
use crate::options::LabelPosition;

/// Renders `<label>` elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormLabel;

impl FormLabel {
    /// Renders an opening tag with the given attributes.
    pub fn open_tag(&self, ctx: &RenderContext, attrs: &Attributes) -> String {
        ctx.open_tag("label", attrs)
    }

    /// Renders the closing tag.
    pub fn close_tag(&self) -> &'static str {
        "</label>"
    }

    /// Renders the element label, combined with `content` if given.
    ///
    /// With both present the element label goes before `content` for
    /// [`LabelPosition::Prepend`] and after it for [`LabelPosition::Append`].
    /// `content` is inserted verbatim.
    pub fn render(
        &self,
        ctx: &RenderContext,
        element: &Element,
        content: Option<&str>,
    ) -> Result<String> {
        self.render_with_attributes(ctx, element, element.label_attributes.clone(), content)
    }

    /// Like [`FormLabel::render`] with label attributes other than the element's.
    pub fn render_with_attributes(
        &self,
        ctx: &RenderContext,
        element: &Element,
        mut attrs: Attributes,
        content: Option<&str>,
    ) -> Result<String> {
        if !attrs.has("for") {
            let target = element
                .id_attr()
                .or(element.name.as_deref().filter(|n| !n.is_empty()))
                .ok_or(HelperError::MissingLabelTarget)?;
            attrs.set("for", target);
        }

        let label = label_text(ctx, element);
        let position = ctx.label_position_for(&element.label_options, LabelPosition::Prepend);
        let inner = match (label, content) {
            (Some(label), Some(content)) => match position {
                LabelPosition::Prepend => format!("{label}{content}"),
                LabelPosition::Append => format!("{content}{label}"),
            },
            (Some(label), None) => label,
            (None, Some(content)) => content.to_string(),
            (None, None) => return Err(HelperError::MissingLabel { helper: "FormLabel" }),
        };
        debug!(label_for = attrs.get("for"), "rendering label");
        Ok(format!(
            "{}{inner}{}",
            self.open_tag(ctx, &attrs),
            self.close_tag()
        ))
    }
}

/// Returns the translated, escaped and optionally wrapped element label.
pub(crate) fn label_text(ctx: &RenderContext, element: &Element) -> Option<String> {
    let raw = element.label.as_deref().filter(|l| !l.is_empty())?;
    let text = ctx.text(raw, element.label_options.disable_html_escape);
    if element.label_options.always_wrap {
        Some(format!("<span>{text}</span>"))
    } else {
        Some(text)
    }
}
