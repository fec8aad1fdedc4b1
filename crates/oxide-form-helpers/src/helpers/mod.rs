//! View helpers that render elements as Bootstrap 5 markup.

mod button;
mod checkbox;
mod date_select;
mod errors;
mod file;
mod form;
mod form_element;
mod guard;
mod hidden;
mod input;
mod label;
mod multi_checkbox;
mod row;
mod select;
mod textarea;

pub use button::FormButton;
pub use checkbox::FormCheckbox;
pub use date_select::{default_pattern, month_name, FormDateSelect, FormMonthSelect};
pub use errors::{feedback_id, FormElementErrors};
pub use file::FormFile;
pub use form::{Form, FormSpec};
pub use form_element::FormElement;
pub use hidden::FormHidden;
pub use input::FormInput;
pub use label::FormLabel;
pub use multi_checkbox::{FormMultiCheckbox, FormRadio};
pub use row::{help_id, FormRow, RowKind};
pub use select::FormSelect;
pub use textarea::FormTextarea;

use crate::context::RenderContext;
use crate::element::Element;
use crate::error::Result;
use crate::markup::Markup;

/// Trait for helpers that render a single element.
pub trait ElementHelper: Send + Sync {
    /// Renders the element as indentable lines.
    ///
    /// # Errors
    /// Fails when the element has the wrong kind for this helper, has no
    /// name, or lacks data the helper needs (such as a button label).
    fn markup(&self, ctx: &RenderContext, element: &Element) -> Result<Markup>;

    /// Renders the element as HTML, every line prefixed with the context indent.
    fn render(&self, ctx: &RenderContext, element: &Element) -> Result<String> {
        Ok(self.markup(ctx, element)?.render(ctx.indent()))
    }
}
