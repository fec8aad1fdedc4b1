//! File inputs.

use serde_json::Value;
use tracing::debug;

use super::guard::{invalid_kind, require_name};
use super::ElementHelper;
use crate::context::RenderContext;
use crate::element::{scalar_to_string, Element, ElementKind};
use crate::error::Result;
use crate::markup::Markup;

/// Renders `<input type="file">`.
///
/// A `multiple` element submits `name[]`. An uploaded-file value given as a
/// map contributes its `value` or `name` key.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormFile;

fn file_value(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Object(map) => map
            .get("value")
            .or_else(|| map.get("name"))
            .and_then(scalar_to_string),
        other => scalar_to_string(other),
    }
}

impl ElementHelper for FormFile {
    fn markup(&self, ctx: &RenderContext, element: &Element) -> Result<Markup> {
        if !matches!(element.kind, ElementKind::File) {
            return Err(invalid_kind(element, "FormFile", "File"));
        }
        let name = require_name(element, "FormFile")?;
        debug!(name, "rendering file input");

        let mut attrs = element.attributes.clone();
        attrs.merge_class("form-control");
        if element.is_multiple() && !name.ends_with("[]") {
            attrs.set("name", format!("{name}[]"));
        } else {
            attrs.set("name", name);
        }
        attrs.set("type", "file");
        if let Some(value) = file_value(element.value.as_ref()) {
            attrs.set("value", value);
        }
        Ok(Markup::from_line(ctx.void_tag("input", &attrs)))
    }
}
