//! React code generator: one function component per icon with a JSX body.

use super::{class_parts, color_expression, markup_node, prop_signatures, theme_import, theme_type_import};
use super::{CodeGenerator, NodeBody, NodeEmitter};
use crate::component::{passthrough_root_attributes, ComponentMeta, PaintMode, SVG_NAMESPACE};
use crate::config::Target;
use crate::error::Result;
use crate::escape::{html_attribute, js_string};
use convert_case::{Case, Casing};
use iconforge_core::{AttributeValue, ParsedDocument};

/// React code generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReactGenerator;

impl ReactGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Props interface body, shared by `.tsx` output and `.d.ts` declarations.
    fn props_interface(&self, meta: &ComponentMeta) -> Vec<String> {
        let mut lines = vec![format!("export interface {}Props {{", meta.component_name)];
        for prop in prop_signatures(meta) {
            lines.push(format!("  {}", prop));
        }
        if meta.features.custom_class {
            lines.push("  className?: string;".to_string());
        }
        if meta.features.custom_style {
            lines.push("  style?: React.CSSProperties;".to_string());
        }
        lines.push("}".to_string());
        lines
    }

    fn jsx_attribute(&self, name: &str, value: &AttributeValue) -> String {
        let name = jsx_attribute_name(name);
        match value {
            AttributeValue::String(s) if name == "style" => format!("style={{{}}}", style_object(s)),
            AttributeValue::String(s) => format!("{}=\"{}\"", name, html_attribute(s)),
            AttributeValue::Number(_) => format!("{}={{{}}}", name, value),
            AttributeValue::Boolean(b) => format!("{}={{{}}}", name, b),
        }
    }
}

/// JSX spelling of a canonical attribute name.
fn jsx_attribute_name(name: &str) -> String {
    match name {
        "class" => "className".to_string(),
        "for" => "htmlFor".to_string(),
        _ if name.contains(':') => {
            let mut out = String::with_capacity(name.len());
            let mut upper = false;
            for c in name.chars() {
                if c == ':' {
                    upper = true;
                } else if upper {
                    out.extend(c.to_uppercase());
                    upper = false;
                } else {
                    out.push(c);
                }
            }
            out
        }
        _ => name.to_string(),
    }
}

/// Inline CSS text as a JSX style object literal.
fn style_object(css: &str) -> String {
    let entries: Vec<String> = css
        .split(';')
        .filter_map(|declaration| {
            let (property, value) = declaration.split_once(':')?;
            let (property, value) = (property.trim(), value.trim());
            if property.is_empty() || value.is_empty() {
                return None;
            }
            let key = if property.starts_with("--") {
                js_string(property)
            } else {
                property.to_case(Case::Camel)
            };
            Some(format!("{}: {}", key, js_string(value)))
        })
        .collect();

    if entries.is_empty() {
        "{}".to_string()
    } else {
        format!("{{ {} }}", entries.join(", "))
    }
}

impl NodeEmitter for ReactGenerator {
    fn format_attributes(&self, attributes: &[(&str, &AttributeValue)]) -> String {
        attributes
            .iter()
            .map(|(name, value)| self.jsx_attribute(name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn format_node(&self, tag: &str, attributes: &str, body: NodeBody<'_>, depth: usize) -> String {
        markup_node(tag, attributes, body, depth, |text| format!("{{{}}}", js_string(text)))
    }
}

impl CodeGenerator for ReactGenerator {
    fn target(&self) -> Target {
        Target::React
    }

    fn extension(&self, typescript: bool) -> &'static str {
        if typescript {
            "tsx"
        } else {
            "jsx"
        }
    }

    fn body_depth(&self) -> usize {
        3
    }

    fn wrap_component(&self, doc: &ParsedDocument, meta: &ComponentMeta, children: &[String]) -> Result<String> {
        let name = &meta.component_name;
        let features = meta.features;
        let mut lines = Vec::new();

        // Imports
        lines.push("import React from 'react';".to_string());
        if let Some(import) = theme_import(meta) {
            lines.push(import);
        }
        lines.push(String::new());

        if meta.typescript {
            lines.extend(self.props_interface(meta));
            lines.push(String::new());
        }

        // Props destructuring with defaults
        let mut params = vec![
            format!("size = {}", meta.size_literal()),
            format!("color = {}", js_string(&meta.default_color)),
        ];
        if features.animation {
            params.push("spin = false".to_string());
            params.push("pulse = false".to_string());
        }
        if features.theming {
            params.push("theme".to_string());
        }
        if features.custom_class {
            params.push("className".to_string());
        }
        if features.custom_style {
            params.push("style".to_string());
        }

        lines.push(format!("export function {}({{", name));
        for param in &params {
            lines.push(format!("  {},", param));
        }
        if meta.typescript {
            lines.push(format!("}}: {}Props) {{", name));
        } else {
            lines.push("}) {".to_string());
        }

        let class_attribute = if features.animation || features.theming || features.custom_class {
            let mut parts = class_parts(meta, str::to_string);
            if features.custom_class {
                parts.push("className".to_string());
            }
            lines.push(format!("  const classes = [{}].filter(Boolean).join(' ');", parts.join(", ")));
            "className={classes}".to_string()
        } else {
            format!("className=\"{}\"", html_attribute(&meta.static_classes().join(" ")))
        };

        // Root element
        let paint = color_expression(meta, "color", "theme");
        let mut root = vec![
            format!("xmlns=\"{}\"", SVG_NAMESPACE),
            "width={size}".to_string(),
            "height={size}".to_string(),
            format!("viewBox=\"{}\"", html_attribute(&meta.view_box)),
        ];
        match PaintMode::detect(doc) {
            PaintMode::Fill => root.push(format!("fill={{{}}}", paint)),
            PaintMode::Stroke => {
                root.push("fill=\"none\"".to_string());
                root.push(format!("stroke={{{}}}", paint));
            }
        }
        for (attr, value) in passthrough_root_attributes(doc) {
            root.push(self.jsx_attribute(attr, value));
        }
        root.push(class_attribute);
        if features.custom_style {
            root.push("style={style}".to_string());
        }

        lines.push("  return (".to_string());
        lines.push("    <svg".to_string());
        for attr in root {
            lines.push(format!("      {}", attr));
        }
        if children.is_empty() {
            lines.push("    />".to_string());
        } else {
            lines.push("    >".to_string());
            lines.extend(children.iter().cloned());
            lines.push("    </svg>".to_string());
        }
        lines.push("  );".to_string());
        lines.push("}".to_string());
        lines.push(String::new());
        lines.push(format!("export default {};", name));
        lines.push(String::new());

        Ok(lines.join("\n"))
    }

    fn declaration(&self, meta: &ComponentMeta) -> Option<String> {
        let mut lines = vec!["import React from 'react';".to_string()];
        if let Some(import) = theme_type_import(meta) {
            lines.push(import);
        }
        lines.push(String::new());
        lines.extend(self.props_interface(meta));
        lines.push(String::new());
        lines.push(format!(
            "export declare function {0}(props: {0}Props): React.JSX.Element;",
            meta.component_name
        ));
        lines.push(format!("export default {};", meta.component_name));
        lines.push(String::new());
        Some(lines.join("\n"))
    }
}
