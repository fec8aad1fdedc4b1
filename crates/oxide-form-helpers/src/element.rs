//! Form element descriptors.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::attributes::Attributes;
use crate::choices::ValueOption;
use crate::options::{ElementOptions, LabelOptions, LabelPosition, Layout};

/// HTML input types rendered by [`crate::helpers::FormInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputType {
    Text,
    Email,
    Password,
    Number,
    Url,
    Tel,
    Search,
    Color,
    Range,
    Date,
    DatetimeLocal,
    Month,
    Week,
    Time,
    Submit,
    Reset,
}

impl InputType {
    /// Returns the `type` attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Url => "url",
            Self::Tel => "tel",
            Self::Search => "search",
            Self::Color => "color",
            Self::Range => "range",
            Self::Date => "date",
            Self::DatetimeLocal => "datetime-local",
            Self::Month => "month",
            Self::Week => "week",
            Self::Time => "time",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }

    /// Returns the Bootstrap classes for this input type.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Self::Submit | Self::Reset => None,
            Self::Range => Some("form-range"),
            Self::Color => Some("form-control form-control-color"),
            _ => Some("form-control"),
        }
    }

    /// Returns whether the input accepts typed text and can float its label.
    pub fn is_text_like(self) -> bool {
        !matches!(self, Self::Submit | Self::Reset | Self::Range | Self::Color)
    }
}

/// Checkbox-specific settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckboxSpec {
    pub checked_value: String,
    pub unchecked_value: String,
    /// Renders a hidden input carrying the unchecked value.
    pub use_hidden_element: bool,
}

impl Default for CheckboxSpec {
    fn default() -> Self {
        Self {
            checked_value: "1".to_string(),
            unchecked_value: "0".to_string(),
            use_hidden_element: true,
        }
    }
}

/// Settings for radio groups and multi-checkboxes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChoiceSpec {
    pub value_options: Vec<ValueOption>,
    pub use_hidden_element: bool,
    pub unchecked_value: String,
}

/// Select-specific settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectSpec {
    pub value_options: Vec<ValueOption>,
    /// Label of a leading option with an empty value.
    pub empty_option: Option<String>,
    pub use_hidden_element: bool,
    pub unselected_value: String,
}

/// Settings for the composite date and month selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateSelectSpec {
    pub min_year: i32,
    pub max_year: i32,
    pub create_empty_option: bool,
    pub render_delimiters: bool,
    /// Date pattern such as `dd. MMMM y`; derived from the locale when absent.
    pub pattern: Option<String>,
    pub day_attributes: Attributes,
    pub month_attributes: Attributes,
    pub year_attributes: Attributes,
}

impl Default for DateSelectSpec {
    fn default() -> Self {
        let year = chrono::Local::now().year();
        Self {
            min_year: year - 100,
            max_year: year,
            create_empty_option: false,
            render_delimiters: true,
            pattern: None,
            day_attributes: Attributes::new(),
            month_attributes: Attributes::new(),
            year_attributes: Attributes::new(),
        }
    }
}

/// The kind of form element, with its kind-specific settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementKind {
    Input { input_type: InputType },
    Hidden,
    File,
    Textarea,
    Button,
    Checkbox(CheckboxSpec),
    MultiCheckbox(ChoiceSpec),
    Radio(ChoiceSpec),
    Select(SelectSpec),
    DateSelect(DateSelectSpec),
    MonthSelect(DateSelectSpec),
}

impl ElementKind {
    /// Returns a short name used in error messages and logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Input { .. } => "Input",
            Self::Hidden => "Hidden",
            Self::File => "File",
            Self::Textarea => "Textarea",
            Self::Button => "Button",
            Self::Checkbox(_) => "Checkbox",
            Self::MultiCheckbox(_) => "MultiCheckbox",
            Self::Radio(_) => "Radio",
            Self::Select(_) => "Select",
            Self::DateSelect(_) => "DateSelect",
            Self::MonthSelect(_) => "MonthSelect",
        }
    }
}

/// A validation message: a single text or a group from a composite field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Message {
    Text(String),
    Group(Vec<String>),
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// A form element descriptor consulted by the helpers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub kind: ElementKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub label_attributes: Attributes,
    #[serde(default)]
    pub label_options: LabelOptions,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub options: ElementOptions,
}

impl Element {
    /// Creates an unnamed element of the given kind.
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            name: None,
            value: None,
            attributes: Attributes::new(),
            label: None,
            label_attributes: Attributes::new(),
            label_options: LabelOptions::default(),
            messages: Vec::new(),
            options: ElementOptions::default(),
        }
    }

    /// Creates a named `<input>` element.
    pub fn input(input_type: InputType, name: impl Into<String>) -> Self {
        Self::new(ElementKind::Input { input_type }).name(name)
    }

    /// Creates a named text input.
    pub fn text(name: impl Into<String>) -> Self {
        Self::input(InputType::Text, name)
    }

    /// Creates a named hidden input.
    pub fn hidden(name: impl Into<String>) -> Self {
        Self::new(ElementKind::Hidden).name(name)
    }

    /// Creates a named file input.
    pub fn file(name: impl Into<String>) -> Self {
        Self::new(ElementKind::File).name(name)
    }

    /// Creates a named textarea.
    pub fn textarea(name: impl Into<String>) -> Self {
        Self::new(ElementKind::Textarea).name(name)
    }

    /// Creates a named button.
    pub fn button(name: impl Into<String>) -> Self {
        Self::new(ElementKind::Button).name(name)
    }

    /// Creates a named checkbox with checked value `1` and unchecked value `0`.
    pub fn checkbox(name: impl Into<String>) -> Self {
        Self::new(ElementKind::Checkbox(CheckboxSpec::default())).name(name)
    }

    /// Creates a named checkbox group.
    pub fn multi_checkbox(name: impl Into<String>, value_options: Vec<ValueOption>) -> Self {
        Self::new(ElementKind::MultiCheckbox(ChoiceSpec {
            value_options,
            ..Default::default()
        }))
        .name(name)
    }

    /// Creates a named radio group.
    pub fn radio(name: impl Into<String>, value_options: Vec<ValueOption>) -> Self {
        Self::new(ElementKind::Radio(ChoiceSpec {
            value_options,
            ..Default::default()
        }))
        .name(name)
    }

    /// Creates a named select.
    pub fn select(name: impl Into<String>, value_options: Vec<ValueOption>) -> Self {
        Self::new(ElementKind::Select(SelectSpec {
            value_options,
            ..Default::default()
        }))
        .name(name)
    }

    /// Creates a named day/month/year selector.
    pub fn date_select(name: impl Into<String>, spec: DateSelectSpec) -> Self {
        Self::new(ElementKind::DateSelect(spec)).name(name)
    }

    /// Creates a named month/year selector.
    pub fn month_select(name: impl Into<String>, spec: DateSelectSpec) -> Self {
        Self::new(ElementKind::MonthSelect(spec)).name(name)
    }

    /// Sets the name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the value.
    #[must_use]
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets an attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(key, value);
        self
    }

    /// Sets the `id` attribute.
    #[must_use]
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Marks the element required.
    #[must_use]
    pub fn required(self) -> Self {
        self.attr("required", "required")
    }

    /// Allows multiple values.
    #[must_use]
    pub fn multiple(self) -> Self {
        self.attr("multiple", "multiple")
    }

    /// Sets the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets a label attribute.
    #[must_use]
    pub fn label_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.label_attributes.set(key, value);
        self
    }

    /// Emits the label and messages without HTML escaping.
    #[must_use]
    pub fn disable_html_escape(mut self) -> Self {
        self.label_options.disable_html_escape = true;
        self
    }

    /// Wraps the label text in a `<span>`.
    #[must_use]
    pub fn always_wrap(mut self) -> Self {
        self.label_options.always_wrap = true;
        self
    }

    /// Sets the label position for this element.
    #[must_use]
    pub fn label_position(mut self, position: LabelPosition) -> Self {
        self.label_options.label_position = Some(position);
        self
    }

    /// Adds a validation message.
    #[must_use]
    pub fn message(mut self, message: impl Into<Message>) -> Self {
        self.messages.push(message.into());
        self
    }

    /// Adds a group of validation messages.
    #[must_use]
    pub fn message_group<S: Into<String>>(mut self, messages: impl IntoIterator<Item = S>) -> Self {
        self.messages
            .push(Message::Group(messages.into_iter().map(Into::into).collect()));
        self
    }

    /// Sets the row layout.
    #[must_use]
    pub fn layout(mut self, layout: Layout) -> Self {
        self.options.layout = Some(layout);
        self
    }

    /// Sets the help text.
    #[must_use]
    pub fn help(mut self, content: impl Into<String>) -> Self {
        self.options.help_content = Some(content.into());
        self
    }

    /// Uses a floating label.
    #[must_use]
    pub fn floating(mut self) -> Self {
        self.options.floating = true;
        self
    }

    /// Renders a checkbox as a switch.
    #[must_use]
    pub fn switch(mut self) -> Self {
        self.options.switch = true;
        self
    }

    /// Adds the required mark to the label of a required element.
    #[must_use]
    pub fn show_required_mark(mut self) -> Self {
        self.options.show_required_mark = true;
        self
    }

    /// Sets the checked value of a checkbox.
    #[must_use]
    pub fn checked_value(mut self, value: impl Into<String>) -> Self {
        if let ElementKind::Checkbox(spec) = &mut self.kind {
            spec.checked_value = value.into();
        }
        self
    }

    /// Sets the unchecked value of a checkbox or choice group.
    #[must_use]
    pub fn unchecked_value(mut self, value: impl Into<String>) -> Self {
        match &mut self.kind {
            ElementKind::Checkbox(spec) => spec.unchecked_value = value.into(),
            ElementKind::MultiCheckbox(spec) | ElementKind::Radio(spec) => {
                spec.unchecked_value = value.into();
            }
            _ => {}
        }
        self
    }

    /// Sets the value a select submits when nothing is selected.
    #[must_use]
    pub fn unselected_value(mut self, value: impl Into<String>) -> Self {
        if let ElementKind::Select(spec) = &mut self.kind {
            spec.unselected_value = value.into();
        }
        self
    }

    /// Sets the leading empty option of a select.
    #[must_use]
    pub fn empty_option(mut self, label: impl Into<String>) -> Self {
        if let ElementKind::Select(spec) = &mut self.kind {
            spec.empty_option = Some(label.into());
        }
        self
    }

    /// Enables or disables the hidden companion input.
    #[must_use]
    pub fn use_hidden_element(mut self, enabled: bool) -> Self {
        match &mut self.kind {
            ElementKind::Checkbox(spec) => spec.use_hidden_element = enabled,
            ElementKind::Select(spec) => spec.use_hidden_element = enabled,
            ElementKind::MultiCheckbox(spec) | ElementKind::Radio(spec) => {
                spec.use_hidden_element = enabled;
            }
            _ => {}
        }
        self
    }

    /// Checks or unchecks a checkbox by setting its value.
    #[must_use]
    pub fn checked(mut self, checked: bool) -> Self {
        if let ElementKind::Checkbox(spec) = &self.kind {
            let value = if checked {
                spec.checked_value.clone()
            } else {
                spec.unchecked_value.clone()
            };
            self.value = Some(Value::String(value));
        }
        self
    }

    /// Returns the `id` attribute.
    pub fn id_attr(&self) -> Option<&str> {
        self.attributes.get("id").filter(|id| !id.is_empty())
    }

    /// Returns whether the `multiple` attribute is set.
    pub fn is_multiple(&self) -> bool {
        self.attributes
            .get("multiple")
            .is_some_and(|v| !matches!(v, "" | "false" | "0"))
    }

    /// Returns the value as a scalar string, if it is one.
    pub fn scalar_value(&self) -> Option<String> {
        self.value.as_ref().and_then(scalar_to_string)
    }

    /// Returns the value as a list of strings; scalars become a one-item list.
    pub fn value_list(&self) -> Vec<String> {
        match &self.value {
            Some(Value::Array(items)) => items.iter().filter_map(scalar_to_string).collect(),
            Some(value) => scalar_to_string(value).into_iter().collect(),
            None => Vec::new(),
        }
    }

    /// Returns the non-blank messages, flattened one level.
    pub fn flat_messages(&self) -> Vec<&str> {
        self.messages
            .iter()
            .flat_map(|message| match message {
                Message::Text(text) => vec![text.as_str()],
                Message::Group(texts) => texts.iter().map(String::as_str).collect(),
            })
            .filter(|text| !text.trim().is_empty())
            .collect()
    }

    /// Returns whether any non-blank message exists.
    pub fn has_messages(&self) -> bool {
        !self.flat_messages().is_empty()
    }
}

/// Converts a scalar JSON value to its attribute form.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("1".to_string()),
        Value::Bool(false) => Some(String::new()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
