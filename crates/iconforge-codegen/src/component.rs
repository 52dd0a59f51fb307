//! Per-icon generation metadata.

use crate::config::GenerationConfig;
use crate::error::Result;
use convert_case::{Case, Casing};
use iconforge_core::{AttributeValue, ParsedDocument};

pub const DEFAULT_VIEW_BOX: &str = "0 0 24 24";
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Root attributes the component wrapper always controls itself.
const WRAPPER_ATTRIBUTES: &[&str] = &[
    "xmlns", "viewBox", "width", "height", "fill", "stroke", "class", "className", "style",
];

/// Which prop-driven features a component exposes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitFeatures {
    pub animation: bool,
    pub theming: bool,
    pub custom_class: bool,
    pub custom_style: bool,
    pub rtl: bool,
}

/// Everything a backend needs besides the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentMeta {
    pub component_name: String,
    pub view_box: String,
    pub features: EmitFeatures,
    pub typescript: bool,
    pub default_size: String,
    pub default_color: String,
    pub class_prefix: String,
}

impl ComponentMeta {
    /// Metadata with default props and no optional features.
    pub fn new(component_name: impl Into<String>) -> Self {
        Self {
            component_name: component_name.into(),
            view_box: DEFAULT_VIEW_BOX.to_string(),
            features: EmitFeatures::default(),
            typescript: true,
            default_size: "24".to_string(),
            default_color: "currentColor".to_string(),
            class_prefix: "icon".to_string(),
        }
    }

    /// Resolve metadata for one icon from the batch configuration.
    pub fn for_icon(config: &GenerationConfig, icon_name: &str, doc: &ParsedDocument) -> Result<Self> {
        let component_name = config.naming.component_name(icon_name)?;
        Ok(Self {
            component_name,
            view_box: doc.view_box().unwrap_or_else(|| DEFAULT_VIEW_BOX.to_string()),
            features: EmitFeatures {
                animation: config.features.animation,
                theming: config.features.theming,
                custom_class: config.defaults.custom_class,
                custom_style: config.defaults.custom_style,
                rtl: config.features.rtl,
            },
            typescript: config.typescript,
            default_size: config.defaults.default_size.clone(),
            default_color: config.defaults.default_color.clone(),
            class_prefix: config.class_prefix.clone(),
        })
    }

    pub fn with_view_box(mut self, view_box: impl Into<String>) -> Self {
        self.view_box = view_box.into();
        self
    }

    pub fn with_features(mut self, features: EmitFeatures) -> Self {
        self.features = features;
        self
    }

    pub fn javascript(mut self) -> Self {
        self.typescript = false;
        self
    }

    /// Default size as a JS literal: bare when a finite number, quoted otherwise.
    pub fn size_literal(&self) -> String {
        let numeric = self
            .default_size
            .parse::<f64>()
            .map_or(false, f64::is_finite);
        if numeric {
            self.default_size.clone()
        } else {
            crate::escape::js_string(&self.default_size)
        }
    }

    /// Custom element tag; always contains a hyphen.
    pub fn element_tag(&self) -> String {
        let tag = self.component_name.to_case(Case::Kebab);
        if tag.contains('-') {
            tag
        } else {
            format!("{}-icon", tag)
        }
    }

    pub fn class(&self, modifier: &str) -> String {
        format!("{}-{}", self.class_prefix, modifier)
    }

    /// Classes applied unconditionally to the root.
    pub fn static_classes(&self) -> Vec<String> {
        let mut classes = vec![self.class_prefix.clone()];
        if self.features.rtl {
            classes.push(self.class("rtl"));
        }
        classes
    }
}

/// Which paint attribute the resolved color drives on the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintMode {
    Fill,
    Stroke,
}

impl PaintMode {
    /// Outline icons declare `fill="none"` on the root; everything else is filled.
    pub fn detect(doc: &ParsedDocument) -> Self {
        match doc.attribute("fill").and_then(AttributeValue::as_str) {
            Some(fill) if fill.trim() == "none" => PaintMode::Stroke,
            _ => PaintMode::Fill,
        }
    }

    pub fn attribute(&self) -> &'static str {
        match self {
            PaintMode::Fill => "fill",
            PaintMode::Stroke => "stroke",
        }
    }
}

/// Root attributes passed through unchanged (stroke width, line caps, ...).
pub fn passthrough_root_attributes(doc: &ParsedDocument) -> Vec<(&str, &AttributeValue)> {
    doc.attributes
        .iter()
        .filter(|(name, _)| !WRAPPER_ATTRIBUTES.contains(&name.as_str()))
        .filter(|(name, _)| !name.starts_with("xmlns:"))
        .map(|(name, value)| (name.as_str(), value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GenerationConfig, Naming};

    fn doc(attrs: &[(&str, AttributeValue)]) -> ParsedDocument {
        let mut doc = ParsedDocument::default();
        for (k, v) in attrs {
            doc.attributes.insert(k.to_string(), v.clone());
        }
        doc
    }

    #[test]
    fn test_for_icon_uses_view_box_from_document() {
        let mut config = GenerationConfig::default();
        config.naming = Naming {
            prefix: String::new(),
            suffix: "Icon".to_string(),
        };
        config.features.animation = true;

        let meta = ComponentMeta::for_icon(&config, "home", &doc(&[("viewBox", "0 0 16 16".into())])).unwrap();
        assert_eq!(meta.component_name, "HomeIcon");
        assert_eq!(meta.view_box, "0 0 16 16");
        assert!(meta.features.animation);
        assert!(!meta.features.theming);

        let meta = ComponentMeta::for_icon(&config, "home", &doc(&[])).unwrap();
        assert_eq!(meta.view_box, DEFAULT_VIEW_BOX);
    }

    #[test]
    fn test_size_literal() {
        let mut meta = ComponentMeta::new("Home");
        assert_eq!(meta.size_literal(), "24");
        meta.default_size = "1em".to_string();
        assert_eq!(meta.size_literal(), "'1em'");
        meta.default_size = "1.5".to_string();
        assert_eq!(meta.size_literal(), "1.5");
    }

    #[test]
    fn test_non_finite_size_is_quoted() {
        let mut meta = ComponentMeta::new("Home");
        for size in ["inf", "-infinity", "NaN"] {
            meta.default_size = size.to_string();
            assert_eq!(meta.size_literal(), format!("'{}'", size));
        }
    }

    #[test]
    fn test_element_tag() {
        assert_eq!(ComponentMeta::new("HomeIcon").element_tag(), "home-icon");
        assert_eq!(ComponentMeta::new("Home").element_tag(), "home-icon");
    }

    #[test]
    fn test_paint_mode() {
        assert_eq!(PaintMode::detect(&doc(&[("fill", "none".into())])), PaintMode::Stroke);
        assert_eq!(PaintMode::detect(&doc(&[("fill", "#000".into())])), PaintMode::Fill);
        assert_eq!(PaintMode::detect(&doc(&[])), PaintMode::Fill);
    }

    #[test]
    fn test_passthrough_root_attributes() {
        let d = doc(&[
            ("xmlns", SVG_NAMESPACE.into()),
            ("xmlns:xlink", "http://www.w3.org/1999/xlink".into()),
            ("viewBox", "0 0 24 24".into()),
            ("fill", "none".into()),
            ("strokeWidth", 2.0.into()),
            ("strokeLinecap", "round".into()),
        ]);
        let names: Vec<_> = passthrough_root_attributes(&d).into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["strokeWidth", "strokeLinecap"]);
    }

    #[test]
    fn test_static_classes() {
        let meta = ComponentMeta::new("Home").with_features(EmitFeatures {
            rtl: true,
            ..Default::default()
        });
        assert_eq!(meta.static_classes(), ["icon", "icon-rtl"]);
    }
}
