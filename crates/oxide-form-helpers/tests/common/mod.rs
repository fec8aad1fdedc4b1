#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use oxide_form_helpers::{
    html_escape, Escaper, HelperError, PartialParams, PartialRenderer, RenderContext, Result,
    Translator,
};

/// Escaper that records every input it sees.
#[derive(Debug, Default)]
pub struct RecordingEscaper {
    pub seen: Mutex<Vec<String>>,
}

impl RecordingEscaper {
    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl Escaper for RecordingEscaper {
    fn escape_html(&self, value: &str) -> String {
        self.seen.lock().unwrap().push(value.to_string());
        html_escape(value)
    }
}

/// Translator that marks every message with its domain.
#[derive(Debug, Default)]
pub struct SentinelTranslator;

impl Translator for SentinelTranslator {
    fn translate(&self, message: &str, text_domain: &str, _locale: Option<&str>) -> String {
        format!("<{text_domain}>{message}")
    }
}

/// Partial renderer that echoes the template name and parameters.
#[derive(Debug, Default)]
pub struct EchoPartial;

impl PartialRenderer for EchoPartial {
    fn render(&self, name: &str, params: &PartialParams<'_>) -> Result<String> {
        if name == "broken" {
            return Err(HelperError::Partial {
                name: name.to_string(),
                message: "template not found".to_string(),
            });
        }
        Ok(format!(
            "[{name}|{}|{}|{:?}|{}]",
            params.element.name.as_deref().unwrap_or_default(),
            params.label.as_deref().unwrap_or_default(),
            params.label_position,
            params.render_errors,
        ))
    }
}

pub fn recording_context() -> (RenderContext, Arc<RecordingEscaper>) {
    let escaper = Arc::new(RecordingEscaper::default());
    let ctx = RenderContext::new().with_escaper(escaper.clone());
    (ctx, escaper)
}

pub fn translating_context() -> RenderContext {
    RenderContext::new()
        .with_translator(Arc::new(SentinelTranslator))
        .with_locale("en")
        .with_text_domain("forms")
}
