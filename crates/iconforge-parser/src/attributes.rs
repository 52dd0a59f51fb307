//! Attribute extraction and normalization.

use iconforge_core::vocabulary::{attribute_kind, canonical_attribute_name};
use iconforge_core::{AttributeKind, AttributeValue, Attributes};
use nom::combinator::all_consuming;
use nom::number::complete::recognize_float;
use nom::IResult;
use regex::Regex;
use std::sync::OnceLock;

/// `name="..."`, `name='...'` or `name=bare`, with optional spaces around `=`.
fn attribute_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+))"#)
            .expect("valid attribute pattern")
    })
}

/// Parse the attribute section of a tag into a normalized, ordered map.
///
/// Fragments that don't look like `name=value` are skipped. A repeated name
/// keeps its first position and takes the last value.
pub fn parse_attributes(raw: &str) -> Attributes {
    let mut attributes = Attributes::new();

    for caps in attribute_pattern().captures_iter(raw) {
        let Some(name) = caps.get(1) else {
            continue;
        };
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map_or("", |m| m.as_str());

        let name = canonical_attribute_name(name.as_str()).into_owned();
        let value = normalize_value(&name, value);
        attributes.insert(name, value);
    }

    attributes
}

/// Coerce a raw value according to the class of its canonical name.
pub fn normalize_value(canonical_name: &str, raw: &str) -> AttributeValue {
    match attribute_kind(canonical_name) {
        AttributeKind::Number => match parse_number(raw) {
            Some(n) => AttributeValue::Number(n),
            None => AttributeValue::String(raw.to_string()),
        },
        AttributeKind::Boolean => AttributeValue::Boolean(!raw.trim().eq_ignore_ascii_case("false")),
        AttributeKind::String => AttributeValue::String(raw.to_string()),
    }
}

/// Parse a complete decimal literal. Units, `NaN` and `inf` are rejected.
fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let recognized: IResult<&str, &str> = all_consuming(recognize_float)(trimmed);
    let (_, literal) = recognized.ok()?;
    literal.parse::<f64>().ok().filter(|n| n.is_finite())
}
