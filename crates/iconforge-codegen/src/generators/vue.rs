//! Vue 3 code generator: `defineComponent` with an `h()` render function.

use super::{class_parts, color_expression, indent, prop_signatures, theme_import, theme_type_import};
use super::{CodeGenerator, NodeBody, NodeEmitter};
use crate::component::{passthrough_root_attributes, ComponentMeta, PaintMode, SVG_NAMESPACE};
use crate::config::Target;
use crate::error::Result;
use crate::escape::{js_string, object_key};
use iconforge_core::vocabulary::markup_attribute_name;
use iconforge_core::{AttributeValue, ParsedDocument};

/// Vue code generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct VueGenerator;

impl VueGenerator {
    pub fn new() -> Self {
        Self
    }

    /// `key: value` entry of a vnode props object.
    fn prop_entry(&self, name: &str, value: &AttributeValue) -> String {
        let key = object_key(markup_attribute_name(name));
        let value = match value {
            AttributeValue::String(s) => js_string(s),
            AttributeValue::Number(_) => value.to_string(),
            AttributeValue::Boolean(b) => b.to_string(),
        };
        format!("{}: {}", key, value)
    }
}

impl NodeEmitter for VueGenerator {
    fn format_attributes(&self, attributes: &[(&str, &AttributeValue)]) -> String {
        if attributes.is_empty() {
            return String::new();
        }
        let entries: Vec<String> = attributes
            .iter()
            .map(|(name, value)| self.prop_entry(name, value))
            .collect();
        format!("{{ {} }}", entries.join(", "))
    }

    fn format_node(&self, tag: &str, attributes: &str, body: NodeBody<'_>, depth: usize) -> String {
        let pad = indent(depth);
        let props = if attributes.is_empty() { "null" } else { attributes };

        match body {
            NodeBody::Empty if attributes.is_empty() => format!("{}h({})", pad, js_string(tag)),
            NodeBody::Empty => format!("{}h({}, {})", pad, js_string(tag), props),
            NodeBody::Text(text) => format!("{}h({}, {}, {})", pad, js_string(tag), props, js_string(text)),
            NodeBody::Children(children) => format!(
                "{}h({}, {}, [\n{},\n{}])",
                pad,
                js_string(tag),
                props,
                children.join(",\n"),
                pad
            ),
        }
    }
}

impl CodeGenerator for VueGenerator {
    fn target(&self) -> Target {
        Target::Vue
    }

    fn extension(&self, typescript: bool) -> &'static str {
        if typescript {
            "ts"
        } else {
            "js"
        }
    }

    fn body_depth(&self) -> usize {
        5
    }

    fn wrap_component(&self, doc: &ParsedDocument, meta: &ComponentMeta, children: &[String]) -> Result<String> {
        let name = &meta.component_name;
        let features = meta.features;
        let ts = meta.typescript;
        let mut lines = Vec::new();

        // Imports
        if ts && features.theming {
            lines.push("import { defineComponent, h, type PropType } from 'vue';".to_string());
        } else {
            lines.push("import { defineComponent, h } from 'vue';".to_string());
        }
        if let Some(import) = theme_import(meta) {
            lines.push(import);
        }
        lines.push(String::new());

        lines.push(format!("export const {} = defineComponent({{", name));
        lines.push(format!("  name: {},", js_string(name)));
        lines.push("  inheritAttrs: false,".to_string());

        // Props
        lines.push("  props: {".to_string());
        lines.push(format!(
            "    size: {{ type: [Number, String], default: {} }},",
            meta.size_literal()
        ));
        lines.push(format!(
            "    color: {{ type: String, default: {} }},",
            js_string(&meta.default_color)
        ));
        if features.animation {
            lines.push("    spin: { type: Boolean, default: false },".to_string());
            lines.push("    pulse: { type: Boolean, default: false },".to_string());
        }
        if features.theming {
            if ts {
                lines.push("    theme: { type: String as PropType<IconTheme>, default: undefined },".to_string());
            } else {
                lines.push("    theme: { type: String, default: undefined },".to_string());
            }
        }
        lines.push("  },".to_string());

        // Render function
        let uses_attrs = features.custom_class || features.custom_style;
        if uses_attrs {
            lines.push("  setup(props, { attrs }) {".to_string());
        } else {
            lines.push("  setup(props) {".to_string());
        }
        lines.push("    return () => {".to_string());

        let mut parts = class_parts(meta, |prop| format!("props.{}", prop));
        if features.custom_class {
            parts.push("attrs.class".to_string());
        }
        lines.push(format!("      const classes = [{}].filter(Boolean).join(' ');", parts.join(", ")));

        let paint = color_expression(meta, "props.color", "props.theme");
        let mut root = vec![
            format!("xmlns: {}", js_string(SVG_NAMESPACE)),
            "width: props.size".to_string(),
            "height: props.size".to_string(),
            format!("viewBox: {}", js_string(&meta.view_box)),
        ];
        match PaintMode::detect(doc) {
            PaintMode::Fill => root.push(format!("fill: {}", paint)),
            PaintMode::Stroke => {
                root.push("fill: 'none'".to_string());
                root.push(format!("stroke: {}", paint));
            }
        }
        for (attr, value) in passthrough_root_attributes(doc) {
            root.push(self.prop_entry(attr, value));
        }
        root.push("class: classes".to_string());
        if features.custom_style {
            root.push("style: attrs.style".to_string());
        }

        lines.push("      return h(".to_string());
        lines.push("        'svg',".to_string());
        lines.push("        {".to_string());
        for entry in root {
            lines.push(format!("          {},", entry));
        }
        lines.push("        },".to_string());
        if children.is_empty() {
            lines.push("        [],".to_string());
        } else {
            lines.push("        [".to_string());
            for child in children {
                lines.push(format!("{},", child));
            }
            lines.push("        ],".to_string());
        }
        lines.push("      );".to_string());
        lines.push("    };".to_string());
        lines.push("  },".to_string());
        lines.push("});".to_string());
        lines.push(String::new());
        lines.push(format!("export default {};", name));
        lines.push(String::new());

        Ok(lines.join("\n"))
    }

    fn declaration(&self, meta: &ComponentMeta) -> Option<String> {
        let mut lines = vec!["import type { DefineComponent } from 'vue';".to_string()];
        if let Some(import) = theme_type_import(meta) {
            lines.push(import);
        }
        lines.push(String::new());
        lines.push(format!("export interface {}Props {{", meta.component_name));
        for prop in prop_signatures(meta) {
            lines.push(format!("  {}", prop));
        }
        lines.push("}".to_string());
        lines.push(String::new());
        lines.push(format!(
            "export declare const {0}: DefineComponent<{0}Props>;",
            meta.component_name
        ));
        lines.push(format!("export default {};", meta.component_name));
        lines.push(String::new());
        Some(lines.join("\n"))
    }
}
