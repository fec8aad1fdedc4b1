//! Generic element rendering.

use tracing::trace;

use super::{
    ElementHelper, FormButton, FormCheckbox, FormDateSelect, FormFile, FormHidden, FormInput,
    FormMonthSelect, FormMultiCheckbox, FormRadio, FormSelect, FormTextarea,
};
use crate::context::RenderContext;
use crate::element::{Element, ElementKind};
use crate::error::Result;
use crate::markup::Markup;

/// Renders any element through the helper for its kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormElement;

impl FormElement {
    fn helper_for(kind: &ElementKind) -> &'static dyn ElementHelper {
        match kind {
            ElementKind::Input { .. } => &FormInput,
            ElementKind::Hidden => &FormHidden,
            ElementKind::File => &FormFile,
            ElementKind::Textarea => &FormTextarea,
            ElementKind::Button => &FormButton,
            ElementKind::Checkbox(_) => &FormCheckbox,
            ElementKind::MultiCheckbox(_) => &FormMultiCheckbox,
            ElementKind::Radio(_) => &FormRadio,
            ElementKind::Select(_) => &FormSelect,
            ElementKind::DateSelect(_) => &FormDateSelect,
            ElementKind::MonthSelect(_) => &FormMonthSelect,
        }
    }
}

impl ElementHelper for FormElement {
    fn markup(&self, ctx: &RenderContext, element: &Element) -> Result<Markup> {
        trace!(kind = element.kind.kind_name(), "dispatching element");
        Self::helper_for(&element.kind).markup(ctx, element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choices::options_from_pairs;

    #[test]
    fn test_dispatches_by_kind() {
        let ctx = RenderContext::new();
        let text = FormElement.render(&ctx, &Element::text("a")).unwrap();
        assert!(text.starts_with("<input class=\"form-control\""));

        let select = FormElement
            .render(&ctx, &Element::select("s", options_from_pairs([("1", "One")])))
            .unwrap();
        assert!(select.starts_with("<select"));

        let button = FormElement
            .render(&ctx, &Element::button("b").label("Send"))
            .unwrap();
        assert_eq!(button, r#"<button name="b" type="submit">Send</button>"#);
    }

    #[test]
    fn test_propagates_missing_name() {
        let ctx = RenderContext::new();
        let element = Element::new(ElementKind::Textarea);
        assert!(FormElement.render(&ctx, &element).is_err());
    }
}
