//! # oxide-form-helpers
//!
//! View helpers that render form elements as Bootstrap 5 markup.
//!
//! This crate provides:
//! - Element descriptors for inputs, selects, checkboxes, radios and date selects
//! - Helpers for labels, controls, validation messages and complete rows
//! - Horizontal, vertical and inline row layouts
//! - Pluggable escaping, translation and partial rendering
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_form_helpers::{Element, ElementHelper, FormRow, RenderContext};
//!
//! let ctx = RenderContext::new();
//! let element = Element::text("email")
//!     .id("email")
//!     .label("Email address")
//!     .message("Value is required");
//!
//! let html = FormRow::new().render(&ctx, &element).unwrap();
//! assert!(html.starts_with(r#"<div class="mb-3">"#));
//! assert!(html.contains(r#"class="form-control is-invalid""#));
//! assert!(html.contains("<li>Value is required</li>"));
//! ```
//!
//! ## Selects and Checkboxes
//!
//! ```rust
//! use oxide_form_helpers::{
//!     options_from_pairs, Element, ElementHelper, FormCheckbox, FormSelect, RenderContext,
//! };
//!
//! let ctx = RenderContext::new();
//!
//! let select = Element::select("color", options_from_pairs([("r", "Red"), ("g", "Green")]))
//!     .value("g");
//! let html = FormSelect.render(&ctx, &select).unwrap();
//! assert!(html.contains(r#"<option value="g" selected="selected">Green</option>"#));
//!
//! let checkbox = Element::checkbox("terms").label("I agree").checked(true);
//! let html = FormCheckbox.render(&ctx, &checkbox).unwrap();
//! assert!(html.contains(r#"checked="checked""#));
//! ```
//!
//! ## Configuration
//!
//! Rendering settings load from JSON through [`HelperConfig`]:
//!
//! ```rust
//! use oxide_form_helpers::HelperConfig;
//!
//! let ctx = HelperConfig::from_json(r#"{"indent": 4, "render_errors": false}"#)
//!     .unwrap()
//!     .into_context();
//! assert!(!ctx.render_errors());
//! ```
//!
//! ## Helpers
//!
//! - `FormInput`, `FormHidden`, `FormFile`, `FormTextarea` - Single controls
//! - `FormButton` - Buttons with label content
//! - `FormCheckbox`, `FormMultiCheckbox`, `FormRadio` - Checks
//! - `FormSelect` - Selects with option groups
//! - `FormDateSelect`, `FormMonthSelect` - Composite date selects
//! - `FormLabel`, `FormElementErrors` - Labels and message lists
//! - `FormElement` - Dispatch by element kind
//! - `FormRow`, `Form` - Rows and whole forms

mod attributes;
mod choices;
mod context;
mod element;
mod error;
mod escape;
pub mod helpers;
pub mod markup;
mod options;
mod partial;
mod translate;

pub use attributes::{is_valid_attribute_name, Attributes};
pub use choices::{options_from_pairs, OptionGroup, SelectOption, ValueOption};
pub use context::{HelperConfig, RenderContext, DEFAULT_TEXT_DOMAIN};
pub use element::{
    scalar_to_string, CheckboxSpec, ChoiceSpec, DateSelectSpec, Element, ElementKind, InputType,
    Message, SelectSpec,
};
pub use error::{HelperError, Result};
pub use escape::{html_escape, Escaper, HtmlEscaper};
pub use helpers::{
    ElementHelper, Form, FormButton, FormCheckbox, FormDateSelect, FormElement,
    FormElementErrors, FormFile, FormHidden, FormInput, FormLabel, FormMonthSelect,
    FormMultiCheckbox, FormRadio, FormRow, FormSelect, FormSpec, FormTextarea,
};
pub use markup::{Doctype, Indent, Markup};
pub use options::{ElementOptions, LabelOptions, LabelPosition, Layout};
pub use partial::{PartialParams, PartialRenderer};
pub use translate::{MessageCatalog, Translator};
