//! Render context and helper configuration.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use tracing::warn;

use crate::attributes::Attributes;
use crate::error::Result;
use crate::escape::{Escaper, HtmlEscaper};
use crate::markup::{self, Doctype, Indent};
use crate::options::{LabelOptions, LabelPosition};
use crate::partial::PartialRenderer;
use crate::translate::Translator;

/// Text domain used when none is configured.
pub const DEFAULT_TEXT_DOMAIN: &str = "default";

/// Everything a helper reads at render time.
///
/// The context is immutable; the `with_*` methods return a modified copy.
/// Collaborators are shared behind `Arc`, so copies are cheap.
#[derive(Clone)]
pub struct RenderContext {
    indent: Indent,
    doctype: Doctype,
    escaper: Arc<dyn Escaper>,
    translator: Option<Arc<dyn Translator>>,
    text_domain: String,
    locale: Option<String>,
    render_errors: bool,
    label_position: Option<LabelPosition>,
    partial_renderer: Option<Arc<dyn PartialRenderer>>,
}

impl fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext")
            .field("indent", &self.indent)
            .field("doctype", &self.doctype)
            .field("has_translator", &self.translator.is_some())
            .field("text_domain", &self.text_domain)
            .field("locale", &self.locale)
            .field("render_errors", &self.render_errors)
            .field("label_position", &self.label_position)
            .finish_non_exhaustive()
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            indent: Indent::none(),
            doctype: Doctype::Html5,
            escaper: Arc::new(HtmlEscaper),
            translator: None,
            text_domain: DEFAULT_TEXT_DOMAIN.to_string(),
            locale: None,
            render_errors: true,
            label_position: None,
            partial_renderer: None,
        }
    }
}

impl RenderContext {
    /// Creates a context with HTML5 output, no indentation and no translator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation: a width in spaces or a literal prefix.
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<Indent>) -> Self {
        self.indent = indent.into();
        self
    }

    #[must_use]
    pub fn with_doctype(mut self, doctype: Doctype) -> Self {
        self.doctype = doctype;
        self
    }

    #[must_use]
    pub fn with_escaper(mut self, escaper: Arc<dyn Escaper>) -> Self {
        self.escaper = escaper;
        self
    }

    #[must_use]
    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = Some(translator);
        self
    }

    #[must_use]
    pub fn with_text_domain(mut self, text_domain: impl Into<String>) -> Self {
        self.text_domain = text_domain.into();
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Enables or disables the error block in rows.
    #[must_use]
    pub fn with_render_errors(mut self, render_errors: bool) -> Self {
        self.render_errors = render_errors;
        self
    }

    /// Overrides the default label position of every helper.
    #[must_use]
    pub fn with_label_position(mut self, position: LabelPosition) -> Self {
        self.label_position = Some(position);
        self
    }

    #[must_use]
    pub fn with_partial_renderer(mut self, renderer: Arc<dyn PartialRenderer>) -> Self {
        self.partial_renderer = Some(renderer);
        self
    }

    pub fn indent(&self) -> &Indent {
        &self.indent
    }

    pub fn doctype(&self) -> Doctype {
        self.doctype
    }

    pub fn escaper(&self) -> &dyn Escaper {
        self.escaper.as_ref()
    }

    pub fn text_domain(&self) -> &str {
        &self.text_domain
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    pub fn render_errors(&self) -> bool {
        self.render_errors
    }

    pub fn partial_renderer(&self) -> Option<&dyn PartialRenderer> {
        self.partial_renderer.as_deref()
    }

    /// Resolves the label position: element option, then context, then `fallback`.
    pub fn label_position_for(
        &self,
        options: &LabelOptions,
        fallback: LabelPosition,
    ) -> LabelPosition {
        options
            .label_position
            .or(self.label_position)
            .unwrap_or(fallback)
    }

    /// Translates `message` if a translator is configured.
    pub fn translate(&self, message: &str) -> String {
        match &self.translator {
            Some(translator) => {
                if self.locale.is_none() {
                    warn!("translating without a configured locale");
                }
                translator.translate(message, &self.text_domain, self.locale.as_deref())
            }
            None => message.to_string(),
        }
    }

    /// Escapes text content.
    pub fn escape_html(&self, value: &str) -> String {
        self.escaper.escape_html(value)
    }

    /// Runs the content pipeline: translate, then escape unless disabled.
    pub fn text(&self, raw: &str, disable_html_escape: bool) -> String {
        let translated = self.translate(raw);
        if disable_html_escape {
            translated
        } else {
            self.escape_html(&translated)
        }
    }

    /// Renders an opening tag with escaped attributes.
    pub fn open_tag(&self, tag: &str, attrs: &Attributes) -> String {
        markup::open_tag(tag, attrs, self.escaper())
    }

    /// Renders a void element honoring the doctype.
    pub fn void_tag(&self, tag: &str, attrs: &Attributes) -> String {
        markup::void_tag(tag, attrs, self.escaper(), self.doctype)
    }

    /// Renders `<tag attrs>content</tag>`; `content` is inserted verbatim.
    pub fn to_html(&self, tag: &str, attrs: &Attributes, content: &str) -> String {
        markup::to_html(tag, attrs, content, self.escaper())
    }
}

/// Serializable helper configuration.
///
/// ```
/// use oxide_form_helpers::HelperConfig;
///
/// let config = HelperConfig::from_json(r#"{"indent": 4, "label_position": "append"}"#).unwrap();
/// let ctx = config.into_context();
/// assert_eq!(ctx.indent().as_str(), "    ");
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HelperConfig {
    /// Width in spaces or a literal prefix.
    pub indent: Indent,
    pub text_domain: String,
    pub render_errors: bool,
    pub label_position: Option<LabelPosition>,
    pub doctype: Doctype,
    pub locale: Option<String>,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            indent: Indent::none(),
            text_domain: DEFAULT_TEXT_DOMAIN.to_string(),
            render_errors: true,
            label_position: None,
            doctype: Doctype::Html5,
            locale: None,
        }
    }
}

impl HelperConfig {
    /// Reads a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds a render context with the default escaper and no translator.
    pub fn into_context(self) -> RenderContext {
        let mut ctx = RenderContext::new()
            .with_indent(self.indent)
            .with_doctype(self.doctype)
            .with_text_domain(self.text_domain)
            .with_render_errors(self.render_errors);
        if let Some(position) = self.label_position {
            ctx = ctx.with_label_position(position);
        }
        if let Some(locale) = self.locale {
            ctx = ctx.with_locale(locale);
        }
        ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HelperError;
    use crate::translate::MessageCatalog;

    #[test]
    fn test_text_pipeline_without_translator() {
        let ctx = RenderContext::new();
        assert_eq!(ctx.text("<b>", false), "&lt;b&gt;");
        assert_eq!(ctx.text("<b>", true), "<b>");
    }

    #[test]
    fn test_text_pipeline_translates_first() {
        let catalog = MessageCatalog::new("de").with("forms", "Name", "<Name>");
        let ctx = RenderContext::new()
            .with_translator(Arc::new(catalog))
            .with_text_domain("forms")
            .with_locale("de");
        assert_eq!(ctx.text("Name", false), "&lt;Name&gt;");
    }

    #[test]
    fn test_label_position_resolution() {
        let ctx = RenderContext::new();
        let mut options = LabelOptions::default();
        assert_eq!(
            ctx.label_position_for(&options, LabelPosition::Append),
            LabelPosition::Append
        );
        let ctx = ctx.with_label_position(LabelPosition::Prepend);
        assert_eq!(
            ctx.label_position_for(&options, LabelPosition::Append),
            LabelPosition::Prepend
        );
        options.label_position = Some(LabelPosition::Append);
        assert_eq!(
            ctx.label_position_for(&options, LabelPosition::Prepend),
            LabelPosition::Append
        );
    }

    #[test]
    fn test_config_from_json() {
        let config = HelperConfig::from_json(
            r#"{"indent": "\t", "doctype": "xhtml5", "render_errors": false, "locale": "de"}"#,
        )
        .unwrap();
        let ctx = config.into_context();
        assert_eq!(ctx.indent().as_str(), "\t");
        assert!(ctx.doctype().is_xhtml());
        assert!(!ctx.render_errors());
        assert_eq!(ctx.locale(), Some("de"));
        assert_eq!(ctx.text_domain(), DEFAULT_TEXT_DOMAIN);
    }

    #[test]
    fn test_config_rejects_wrong_shapes() {
        let err = HelperConfig::from_json(r#"{"render_errors": "yes"}"#).unwrap_err();
        assert!(matches!(err, HelperError::InvalidConfig(_)));
        let err = HelperConfig::from_json(r#"{"indentation": 4}"#).unwrap_err();
        assert!(matches!(err, HelperError::InvalidConfig(_)));
    }
}
