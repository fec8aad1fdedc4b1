//! Line-based markup assembly with indentation.
//!
//! Helpers build a [`Markup`] of lines at relative depths and render it once
//! with the context [`Indent`]. Nesting another helper's markup shifts it one
//! level deeper, so indentation never has to be threaded by hand.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::escape::Escaper;

/// Width of one nesting level.
pub const INDENT_STEP: &str = "    ";

/// Prefix applied to every emitted line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "IndentSpec")]
pub struct Indent(String);

/// Indentation as written in configuration: a width or a literal prefix.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum IndentSpec {
    Width(usize),
    Literal(String),
}

impl From<IndentSpec> for Indent {
    fn from(spec: IndentSpec) -> Self {
        match spec {
            IndentSpec::Width(width) => Self::from(width),
            IndentSpec::Literal(prefix) => Self(prefix),
        }
    }
}

impl From<usize> for Indent {
    fn from(width: usize) -> Self {
        Self(" ".repeat(width))
    }
}

impl From<&str> for Indent {
    fn from(prefix: &str) -> Self {
        Self(prefix.to_string())
    }
}

impl From<String> for Indent {
    fn from(prefix: String) -> Self {
        Self(prefix)
    }
}

impl Indent {
    /// No indentation.
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns the prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Line {
    depth: usize,
    text: String,
}

/// An ordered list of markup lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup {
    lines: Vec<Line>,
}

impl Markup {
    /// Creates empty markup.
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Creates markup holding a single line.
    pub fn from_line(text: impl Into<String>) -> Self {
        let mut markup = Self::new();
        markup.line(text);
        markup
    }

    /// Splits pre-rendered text into lines at the current depth.
    pub fn from_text(text: &str) -> Self {
        let mut markup = Self::new();
        for line in text.lines() {
            markup.line(line);
        }
        markup
    }

    /// Appends a line at depth zero.
    ///
    /// Text containing newlines becomes several lines, each indented.
    pub fn line(&mut self, text: impl Into<String>) -> &mut Self {
        let text = text.into();
        if !text.contains('\n') {
            self.lines.push(Line { depth: 0, text });
            return self;
        }
        for part in text.split('\n') {
            self.lines.push(Line {
                depth: 0,
                text: part.to_string(),
            });
        }
        self
    }

    /// Appends a line whose embedded newlines are kept as they are.
    ///
    /// Only the first line is indented; the rest is content such as a
    /// textarea value, where added whitespace would change the value.
    pub fn verbatim(&mut self, text: impl Into<String>) -> &mut Self {
        self.lines.push(Line {
            depth: 0,
            text: text.into(),
        });
        self
    }

    /// Appends `other` at the same depth.
    pub fn append(&mut self, other: Self) -> &mut Self {
        self.lines.extend(other.lines);
        self
    }

    /// Appends `child` one level deeper.
    pub fn nest(&mut self, child: Self) -> &mut Self {
        self.lines.extend(child.lines.into_iter().map(|line| Line {
            depth: line.depth + 1,
            text: line.text,
        }));
        self
    }

    /// Surrounds `inner` with an opening and closing line.
    pub fn wrap(open: impl Into<String>, inner: Self, close: impl Into<String>) -> Self {
        let mut markup = Self::from_line(open);
        markup.nest(inner);
        markup.line(close);
        markup
    }

    /// Renders every line prefixed with `indent` plus its nesting.
    pub fn render(&self, indent: &Indent) -> String {
        self.lines
            .iter()
            .map(|line| {
                format!(
                    "{indent}{}{}",
                    INDENT_STEP.repeat(line.depth),
                    line.text
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// How void elements are closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Doctype {
    /// HTML5, `<input ...>`.
    #[default]
    Html5,
    /// XHTML 1.0 Strict, `<input ... />`.
    Xhtml1Strict,
    /// XHTML5, `<input ... />`.
    Xhtml5,
}

impl Doctype {
    /// Returns whether void elements self-close.
    pub fn is_xhtml(self) -> bool {
        matches!(self, Self::Xhtml1Strict | Self::Xhtml5)
    }

    /// Returns the closing bracket for void elements.
    pub fn void_close(self) -> &'static str {
        if self.is_xhtml() {
            " />"
        } else {
            ">"
        }
    }
}

/// Renders an opening tag.
pub fn open_tag(tag: &str, attrs: &Attributes, escaper: &dyn Escaper) -> String {
    format!("<{tag}{}>", attrs.render(escaper))
}

/// Renders a closing tag.
pub fn close_tag(tag: &str) -> String {
    format!("</{tag}>")
}

/// Renders a void element such as `<input>`.
pub fn void_tag(tag: &str, attrs: &Attributes, escaper: &dyn Escaper, doctype: Doctype) -> String {
    format!("<{tag}{}{}", attrs.render(escaper), doctype.void_close())
}

/// Renders `<tag attrs>content</tag>` on one line. `content` is inserted verbatim.
pub fn to_html(tag: &str, attrs: &Attributes, content: &str, escaper: &dyn Escaper) -> String {
    format!("{}{content}{}", open_tag(tag, attrs, escaper), close_tag(tag))
}
