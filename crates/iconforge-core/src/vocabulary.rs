//! Static SVG vocabulary: attribute spellings, value classes and element sets.

use crate::types::AttributeKind;
use std::borrow::Cow;

/// Known source spellings (lowercase or kebab-case) and their canonical form.
const ATTRIBUTE_NAMES: &[(&str, &str)] = &[
    ("viewbox", "viewBox"),
    ("preserveaspectratio", "preserveAspectRatio"),
    ("stroke-width", "strokeWidth"),
    ("stroke-linecap", "strokeLinecap"),
    ("stroke-linejoin", "strokeLinejoin"),
    ("stroke-dasharray", "strokeDasharray"),
    ("stroke-dashoffset", "strokeDashoffset"),
    ("stroke-miterlimit", "strokeMiterlimit"),
    ("stroke-opacity", "strokeOpacity"),
    ("fill-rule", "fillRule"),
    ("fill-opacity", "fillOpacity"),
    ("clip-rule", "clipRule"),
    ("clip-path", "clipPath"),
    ("stop-color", "stopColor"),
    ("stop-opacity", "stopOpacity"),
    ("font-size", "fontSize"),
    ("font-family", "fontFamily"),
    ("font-weight", "fontWeight"),
    ("text-anchor", "textAnchor"),
    ("xlink:href", "xlinkHref"),
];

const NUMERIC_ATTRIBUTES: &[&str] = &[
    "width",
    "height",
    "x",
    "y",
    "cx",
    "cy",
    "r",
    "rx",
    "ry",
    "strokeWidth",
    "strokeDashoffset",
    "opacity",
    "fillOpacity",
    "strokeOpacity",
];

const BOOLEAN_ATTRIBUTES: &[&str] = &["hidden", "disabled"];

/// Attributes the generated component drives through props.
const PAINT_ATTRIBUTES: &[&str] = &["fill", "stroke"];

/// Elements that never carry children or text.
const VOID_ELEMENTS: &[&str] = &[
    // SVG shapes
    "circle", "ellipse", "line", "path", "polygon", "polyline", "rect", "use",
    // HTML void elements
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

const RECOGNIZED_ELEMENTS: &[&str] = &[
    // Structural
    "svg", "g", "defs", "symbol", "use", "switch", "a", "view", "foreignObject",
    "title", "desc", "metadata", "style",
    // Graphic
    "path", "circle", "ellipse", "line", "polygon", "polyline", "rect", "image",
    // Paint servers and clipping
    "linearGradient", "radialGradient", "stop", "pattern", "clipPath", "mask", "marker",
    // Filters
    "filter", "feBlend", "feColorMatrix", "feComposite", "feDropShadow", "feFlood",
    "feGaussianBlur", "feMerge", "feMergeNode", "feMorphology", "feOffset",
    "feTurbulence", "feDisplacementMap",
    // Animation
    "animate", "animateMotion", "animateTransform", "set", "mpath",
    // Text
    "text", "tspan", "textPath",
];

/// Canonical name for a source attribute name.
///
/// Lookup ignores ASCII case; names missing from the table are returned
/// unchanged.
pub fn canonical_attribute_name(name: &str) -> Cow<'_, str> {
    ATTRIBUTE_NAMES
        .iter()
        .find(|(source, _)| source.eq_ignore_ascii_case(name))
        .map(|(_, canonical)| Cow::Borrowed(*canonical))
        .unwrap_or(Cow::Borrowed(name))
}

/// SVG markup spelling for a canonical attribute name.
///
/// Reverses the kebab-case and namespaced entries of the normalization table.
/// `viewBox` and `preserveAspectRatio` are already markup spellings.
pub fn markup_attribute_name(canonical: &str) -> &str {
    ATTRIBUTE_NAMES
        .iter()
        .filter(|(source, _)| source.contains(['-', ':']))
        .find(|(_, name)| *name == canonical)
        .map(|(source, _)| *source)
        .unwrap_or(canonical)
}

/// Value class of a canonical attribute name.
pub fn attribute_kind(canonical: &str) -> AttributeKind {
    if NUMERIC_ATTRIBUTES.contains(&canonical) {
        AttributeKind::Number
    } else if BOOLEAN_ATTRIBUTES.contains(&canonical) {
        AttributeKind::Boolean
    } else {
        AttributeKind::String
    }
}

pub fn is_paint_attribute(name: &str) -> bool {
    PAINT_ATTRIBUTES.contains(&name)
}

pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

pub fn is_recognized_element(tag: &str) -> bool {
    RECOGNIZED_ELEMENTS.contains(&tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names() {
        assert_eq!(canonical_attribute_name("stroke-width"), "strokeWidth");
        assert_eq!(canonical_attribute_name("viewbox"), "viewBox");
        assert_eq!(canonical_attribute_name("viewBox"), "viewBox");
        assert_eq!(canonical_attribute_name("FILL-RULE"), "fillRule");
        assert_eq!(canonical_attribute_name("data-name"), "data-name");
        assert_eq!(canonical_attribute_name("d"), "d");
    }

    #[test]
    fn test_markup_names() {
        assert_eq!(markup_attribute_name("strokeWidth"), "stroke-width");
        assert_eq!(markup_attribute_name("xlinkHref"), "xlink:href");
        assert_eq!(markup_attribute_name("viewBox"), "viewBox");
        assert_eq!(markup_attribute_name("preserveAspectRatio"), "preserveAspectRatio");
        assert_eq!(markup_attribute_name("d"), "d");
    }

    #[test]
    fn test_attribute_kinds() {
        assert_eq!(attribute_kind("cx"), AttributeKind::Number);
        assert_eq!(attribute_kind("strokeWidth"), AttributeKind::Number);
        assert_eq!(attribute_kind("stroke-width"), AttributeKind::String);
        assert_eq!(attribute_kind("hidden"), AttributeKind::Boolean);
        assert_eq!(attribute_kind("fillRule"), AttributeKind::String);
    }

    #[test]
    fn test_element_sets() {
        assert!(is_void_element("circle"));
        assert!(is_void_element("br"));
        assert!(!is_void_element("g"));
        assert!(is_recognized_element("linearGradient"));
        assert!(!is_recognized_element("unknown-element"));
        assert!(is_paint_attribute("fill"));
        assert!(!is_paint_attribute("fillRule"));
    }
}
