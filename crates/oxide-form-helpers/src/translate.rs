//! Message translation.

use std::collections::HashMap;

/// Translates labels, messages and option texts.
pub trait Translator: Send + Sync {
    /// Translates `message` within `text_domain` for `locale`.
    ///
    /// Implementations return the message unchanged when no translation
    /// exists.
    fn translate(&self, message: &str, text_domain: &str, locale: Option<&str>) -> String;
}

/// An in-memory translation table keyed by text domain.
///
/// # Example
/// ```
/// use oxide_form_helpers::{MessageCatalog, Translator};
///
/// let mut catalog = MessageCatalog::new("de");
/// catalog.add("default", "Name", "Name");
/// catalog.add("default", "Required", "Pflichtfeld");
///
/// assert_eq!(catalog.translate("Required", "default", None), "Pflichtfeld");
/// assert_eq!(catalog.translate("Required", "admin", None), "Required");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    locale: String,
    domains: HashMap<String, HashMap<String, String>>,
}

impl MessageCatalog {
    /// Creates an empty catalog for the given locale.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            domains: HashMap::new(),
        }
    }

    /// Returns the catalog locale.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Adds a translation to a text domain.
    pub fn add(
        &mut self,
        text_domain: impl Into<String>,
        message: impl Into<String>,
        translation: impl Into<String>,
    ) {
        self.domains
            .entry(text_domain.into())
            .or_default()
            .insert(message.into(), translation.into());
    }

    /// Builder variant of [`MessageCatalog::add`].
    #[must_use]
    pub fn with(
        mut self,
        text_domain: impl Into<String>,
        message: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        self.add(text_domain, message, translation);
        self
    }

    /// Looks up a translation without falling back.
    pub fn get(&self, text_domain: &str, message: &str) -> Option<&String> {
        self.domains.get(text_domain)?.get(message)
    }
}

impl Translator for MessageCatalog {
    fn translate(&self, message: &str, text_domain: &str, locale: Option<&str>) -> String {
        if locale.is_some_and(|l| l != self.locale) {
            return message.to_string();
        }
        self.get(text_domain, message)
            .cloned()
            .unwrap_or_else(|| message.to_string())
    }
}
