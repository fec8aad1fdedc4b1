//! Composite day/month/year selectors.

use chrono::{Datelike, NaiveDate};
use serde_json::Value;
use tracing::{debug, trace};

use super::guard::{invalid_kind, require_name};
use super::select::FormSelect;
use super::ElementHelper;
use crate::attributes::Attributes;
use crate::choices::{SelectOption, ValueOption};
use crate::context::RenderContext;
use crate::element::{scalar_to_string, DateSelectSpec, Element, ElementKind, SelectSpec};
use crate::error::{HelperError, Result};
use crate::markup::Markup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Day,
    Month,
    Year,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Field(Field, usize),
    Literal(String),
}

/// Splits a date pattern such as `dd. MMMM y` into fields and literals.
///
/// Text inside single quotes is literal.
fn parse_pattern(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();
    let mut quoted = false;

    while let Some(c) = chars.next() {
        if c == '\'' {
            quoted = !quoted;
            continue;
        }
        let field = match c {
            'd' if !quoted => Some(Field::Day),
            'M' | 'L' if !quoted => Some(Field::Month),
            'y' | 'Y' if !quoted => Some(Field::Year),
            _ => None,
        };
        let Some(field) = field else {
            literal.push(c);
            continue;
        };
        let mut width = 1;
        while chars.peek() == Some(&c) {
            chars.next();
            width += 1;
        }
        if !literal.is_empty() {
            tokens.push(Token::Literal(std::mem::take(&mut literal)));
        }
        tokens.push(Token::Field(field, width));
    }
    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }
    tokens
}

/// Drops the day field and the delimiter that belongs to it.
fn without_day(tokens: Vec<Token>) -> Vec<Token> {
    let Some(index) = tokens
        .iter()
        .position(|t| matches!(t, Token::Field(Field::Day, _)))
    else {
        return tokens;
    };
    let mut tokens = tokens;
    tokens.remove(index);
    if matches!(tokens.get(index), Some(Token::Literal(_))) {
        tokens.remove(index);
    } else if index > 0 && matches!(tokens.get(index - 1), Some(Token::Literal(_))) {
        tokens.remove(index - 1);
    }
    tokens
}

fn language(locale: Option<&str>) -> String {
    locale
        .and_then(|l| l.split(['_', '-']).next())
        .unwrap_or("en")
        .to_ascii_lowercase()
}

/// Returns the medium date pattern for a locale.
pub fn default_pattern(locale: Option<&str>) -> &'static str {
    match language(locale).as_str() {
        "de" => "dd. MMMM y",
        "fr" | "es" | "it" | "nl" | "pt" => "d MMMM y",
        _ => "MMMM d, y",
    }
}

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];
const MONTHS_EN_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const MONTHS_DE: [&str; 12] = [
    "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
    "Oktober", "November", "Dezember",
];
const MONTHS_DE_SHORT: [&str; 12] = [
    "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.",
    "Dez.",
];
const MONTHS_FR: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
    "octobre", "novembre", "décembre",
];
const MONTHS_FR_SHORT: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];
const MONTHS_ES: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
    "octubre", "noviembre", "diciembre",
];
const MONTHS_IT: [&str; 12] = [
    "gennaio", "febbraio", "marzo", "aprile", "maggio", "giugno", "luglio", "agosto",
    "settembre", "ottobre", "novembre", "dicembre",
];
const MONTHS_NL: [&str; 12] = [
    "januari", "februari", "maart", "april", "mei", "juni", "juli", "augustus", "september",
    "oktober", "november", "december",
];

/// Returns the localized month name, `short` for the abbreviated form.
pub fn month_name(locale: Option<&str>, month: u32, short: bool) -> String {
    let index = (month.clamp(1, 12) - 1) as usize;
    let lang = language(locale);
    let (full, abbreviated): (&[&str; 12], Option<&[&str; 12]>) = match lang.as_str() {
        "de" => (&MONTHS_DE, Some(&MONTHS_DE_SHORT)),
        "fr" => (&MONTHS_FR, Some(&MONTHS_FR_SHORT)),
        "es" => (&MONTHS_ES, None),
        "it" => (&MONTHS_IT, None),
        "nl" => (&MONTHS_NL, None),
        _ => (&MONTHS_EN, Some(&MONTHS_EN_SHORT)),
    };
    match (short, abbreviated) {
        (false, _) => full[index].to_string(),
        (true, Some(names)) => names[index].to_string(),
        (true, None) => full[index].chars().take(3).collect(),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct DateParts {
    day: Option<u32>,
    month: Option<u32>,
    year: Option<i32>,
}

impl From<NaiveDate> for DateParts {
    fn from(date: NaiveDate) -> Self {
        Self {
            day: Some(date.day()),
            month: Some(date.month()),
            year: Some(date.year()),
        }
    }
}

fn parse_value(name: &str, value: Option<&Value>) -> Result<DateParts> {
    let invalid = |value: &Value| HelperError::InvalidDate {
        name: name.to_string(),
        value: value.to_string(),
    };
    match value {
        None | Some(Value::Null) => Ok(DateParts::default()),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(DateParts::default()),
        Some(v @ Value::String(s)) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d"))
            .map(DateParts::from)
            .map_err(|_| invalid(v)),
        Some(v @ Value::Object(map)) => {
            let part = |key: &str| -> Result<Option<i64>> {
                match map.get(key).and_then(scalar_to_string) {
                    None => Ok(None),
                    Some(s) if s.is_empty() => Ok(None),
                    Some(s) => s.parse::<i64>().map(Some).map_err(|_| invalid(v)),
                }
            };
            let day = part("day")?;
            let month = part("month")?;
            let year = part("year")?;
            let in_range = day.map_or(true, |d| (1..=31).contains(&d))
                && month.map_or(true, |m| (1..=12).contains(&m));
            if !in_range {
                return Err(invalid(v));
            }
            Ok(DateParts {
                day: day.and_then(|d| u32::try_from(d).ok()),
                month: month.and_then(|m| u32::try_from(m).ok()),
                year: year.and_then(|y| i32::try_from(y).ok()),
            })
        }
        Some(other) => Err(invalid(other)),
    }
}

fn field_options(
    field: Field,
    width: usize,
    spec: &DateSelectSpec,
    locale: Option<&str>,
) -> Vec<ValueOption> {
    match field {
        Field::Day => (1..=31)
            .map(|d| {
                let label = if width == 1 {
                    d.to_string()
                } else {
                    format!("{d:02}")
                };
                SelectOption::new(format!("{d:02}"), label).into()
            })
            .collect(),
        Field::Month => (1..=12u32)
            .map(|m| {
                let label = match width {
                    1 => m.to_string(),
                    2 => format!("{m:02}"),
                    3 => month_name(locale, m, true),
                    _ => month_name(locale, m, false),
                };
                SelectOption::new(format!("{m:02}"), label).into()
            })
            .collect(),
        Field::Year => (spec.min_year..=spec.max_year)
            .rev()
            .map(|y| {
                let label = if width == 2 {
                    format!("{:02}", y.rem_euclid(100))
                } else {
                    y.to_string()
                };
                SelectOption::new(y.to_string(), label).into()
            })
            .collect(),
    }
}

/// Builds the select element for one field of the composite.
fn field_element(
    element: &Element,
    name: &str,
    spec: &DateSelectSpec,
    field: Field,
    options: Vec<ValueOption>,
    parts: DateParts,
) -> Element {
    let (part, part_attrs, value) = match field {
        Field::Day => ("day", &spec.day_attributes, parts.day.map(|d| format!("{d:02}"))),
        Field::Month => (
            "month",
            &spec.month_attributes,
            parts.month.map(|m| format!("{m:02}")),
        ),
        Field::Year => ("year", &spec.year_attributes, parts.year.map(|y| y.to_string())),
    };

    let mut attrs: Attributes = element.attributes.clone();
    attrs.remove("id");
    attrs.remove("multiple");
    attrs.merge(part_attrs);

    let mut select = Element::new(ElementKind::Select(SelectSpec {
        value_options: options,
        empty_option: spec.create_empty_option.then(String::new),
        ..Default::default()
    }))
    .name(format!("{name}[{part}]"));
    select.attributes = attrs;
    select.label_options = element.label_options.clone();
    select.value = value.map(Value::String);
    select
}

fn render_composite(
    ctx: &RenderContext,
    element: &Element,
    helper: &'static str,
    month_only: bool,
) -> Result<Markup> {
    let spec = match (&element.kind, month_only) {
        (ElementKind::DateSelect(spec), false) | (ElementKind::MonthSelect(spec), true) => spec,
        (_, false) => return Err(invalid_kind(element, helper, "DateSelect")),
        (_, true) => return Err(invalid_kind(element, helper, "MonthSelect")),
    };
    let name = require_name(element, helper)?;
    let parts = parse_value(name, element.value.as_ref())?;

    let pattern = spec
        .pattern
        .as_deref()
        .unwrap_or_else(|| default_pattern(ctx.locale()));
    let mut tokens = parse_pattern(pattern);
    if month_only {
        tokens = without_day(tokens);
    }
    debug!(name, pattern, month_only, "rendering date selector");

    let mut markup = Markup::new();
    for token in tokens {
        match token {
            Token::Field(field, width) => {
                let options = field_options(field, width, spec, ctx.locale());
                let select = field_element(element, name, spec, field, options, parts);
                trace!(name = select.name.as_deref(), "delegating to select");
                markup.append(FormSelect.markup(ctx, &select)?);
            }
            Token::Literal(literal) => {
                if spec.render_delimiters && !literal.is_empty() {
                    markup.line(ctx.escape_html(&literal));
                }
            }
        }
    }
    Ok(markup)
}

/// Renders day, month and year selects for a date element.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormDateSelect;

/// Renders month and year selects for a month element.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormMonthSelect;

impl ElementHelper for FormDateSelect {
    fn markup(&self, ctx: &RenderContext, element: &Element) -> Result<Markup> {
        render_composite(ctx, element, "FormDateSelect", false)
    }
}

impl ElementHelper for FormMonthSelect {
    fn markup(&self, ctx: &RenderContext, element: &Element) -> Result<Markup> {
        render_composite(ctx, element, "FormMonthSelect", true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn spec(min_year: i32, max_year: i32) -> DateSelectSpec {
        DateSelectSpec {
            min_year,
            max_year,
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_pattern() {
        assert_eq!(
            parse_pattern("dd. MMMM y"),
            vec![
                Token::Field(Field::Day, 2),
                Token::Literal(". ".to_string()),
                Token::Field(Field::Month, 4),
                Token::Literal(" ".to_string()),
                Token::Field(Field::Year, 1),
            ]
        );
        assert_eq!(
            parse_pattern("d 'de' MMMM"),
            vec![
                Token::Field(Field::Day, 1),
                Token::Literal(" de ".to_string()),
                Token::Field(Field::Month, 4),
            ]
        );
    }

    #[test]
    fn test_without_day() {
        assert_eq!(
            without_day(parse_pattern("MMMM d, y")),
            parse_pattern("MMMM y")
        );
        assert_eq!(
            without_day(parse_pattern("dd. MMMM y")),
            parse_pattern("MMMM y")
        );
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(Some("de_DE"), 3, false), "März");
        assert_eq!(month_name(None, 9, true), "Sep");
        assert_eq!(month_name(Some("es"), 1, true), "ene");
    }

    #[test]
    fn test_german_date_with_delimiters() {
        let ctx = RenderContext::new().with_locale("de_DE");
        let element = Element::date_select("birth", spec(2023, 2024)).value("2024-03-05");
        let html = FormDateSelect.render(&ctx, &element).unwrap();
        let lines: Vec<&str> = html.lines().collect();

        assert_eq!(lines[0], r#"<select class="form-select" name="birth[day]">"#);
        assert_eq!(lines[1], r#"    <option value="01">01</option>"#);
        assert!(lines.contains(&r#"    <option value="05" selected="selected">05</option>"#));
        assert_eq!(lines[32], "</select>");
        assert_eq!(lines[33], ". ");
        assert_eq!(lines[34], r#"<select class="form-select" name="birth[month]">"#);
        assert!(lines.contains(&r#"    <option value="03" selected="selected">März</option>"#));
        assert_eq!(lines[47], "</select>");
        assert_eq!(lines[48], " ");
        assert_eq!(lines[49], r#"<select class="form-select" name="birth[year]">"#);
        assert_eq!(lines[50], r#"    <option value="2024" selected="selected">2024</option>"#);
        assert_eq!(lines[51], r#"    <option value="2023">2023</option>"#);
        assert_eq!(lines[52], "</select>");
        assert_eq!(lines.len(), 53);
    }

    #[test]
    fn test_english_order_without_delimiters() {
        let ctx = RenderContext::new();
        let element = Element::date_select(
            "d",
            DateSelectSpec {
                render_delimiters: false,
                create_empty_option: true,
                ..spec(2000, 2000)
            },
        );
        let html = FormDateSelect.render(&ctx, &element).unwrap();
        let month = html.find("d[month]").unwrap();
        let day = html.find("d[day]").unwrap();
        let year = html.find("d[year]").unwrap();
        assert!(month < day && day < year);
        assert!(!html.lines().any(|l| l == ","));
        assert_eq!(html.matches(r#"<option value=""></option>"#).count(), 3);
        assert!(html.contains(r#"<option value="01">January</option>"#));
        assert!(html.contains(r#"<option value="01">1</option>"#));
    }

    #[test]
    fn test_month_select() {
        let ctx = RenderContext::new().with_locale("de").with_indent(2);
        let element = Element::month_select("m", spec(2024, 2024))
            .value(json!({"month": "12", "year": 2024}));
        let html = FormMonthSelect.render(&ctx, &element).unwrap();
        assert!(!html.contains("m[day]"));
        assert!(html.starts_with(r#"  <select class="form-select" name="m[month]">"#));
        assert!(html.contains(r#"      <option value="12" selected="selected">Dezember</option>"#));
        assert!(html.ends_with("  </select>"));
    }

    #[test]
    fn test_month_select_space_delimiter() {
        let ctx = RenderContext::new();
        let element = Element::month_select("m", spec(2024, 2024));
        let with = FormMonthSelect.render(&ctx, &element).unwrap();

        let element = Element::month_select(
            "m",
            DateSelectSpec {
                render_delimiters: false,
                ..spec(2024, 2024)
            },
        );
        let without = FormMonthSelect.render(&ctx, &element).unwrap();

        assert_ne!(with, without);
        assert!(with.contains("</select>\n \n<select class=\"form-select\" name=\"m[year]\">"));
        assert!(without.contains("</select>\n<select class=\"form-select\" name=\"m[year]\">"));
    }

    #[test]
    fn test_invalid_values() {
        let ctx = RenderContext::new();
        let element = Element::date_select("d", spec(2000, 2001)).value("yesterday");
        assert!(matches!(
            FormDateSelect.render(&ctx, &element),
            Err(HelperError::InvalidDate { .. })
        ));
        let element = Element::date_select("d", spec(2000, 2001)).value(json!({"month": 13}));
        assert!(FormDateSelect.render(&ctx, &element).is_err());
    }

    #[test]
    fn test_kind_guard() {
        let ctx = RenderContext::new();
        let element = Element::month_select("m", spec(2000, 2001));
        assert!(matches!(
            FormDateSelect.render(&ctx, &element),
            Err(HelperError::InvalidElementType { .. })
        ));
    }
}
