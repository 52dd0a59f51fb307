//! Svelte code generator: a single-file component with plain SVG markup.

use super::{class_parts, color_expression, markup_node, theme_import};
use super::{CodeGenerator, NodeBody, NodeEmitter};
use crate::component::{passthrough_root_attributes, ComponentMeta, PaintMode, SVG_NAMESPACE};
use crate::config::Target;
use crate::error::Result;
use crate::escape::{html_attribute, html_text, js_string};
use iconforge_core::vocabulary::markup_attribute_name;
use iconforge_core::{AttributeValue, ParsedDocument};

/// Svelte code generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct SvelteGenerator;

impl SvelteGenerator {
    pub fn new() -> Self {
        Self
    }

    fn markup_attribute(&self, name: &str, value: &AttributeValue) -> String {
        format!(
            "{}=\"{}\"",
            markup_attribute_name(name),
            html_attribute(&value.to_string())
        )
    }
}

impl NodeEmitter for SvelteGenerator {
    fn format_attributes(&self, attributes: &[(&str, &AttributeValue)]) -> String {
        attributes
            .iter()
            .map(|(name, value)| self.markup_attribute(name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn format_node(&self, tag: &str, attributes: &str, body: NodeBody<'_>, depth: usize) -> String {
        markup_node(tag, attributes, body, depth, html_text)
    }
}

impl CodeGenerator for SvelteGenerator {
    fn target(&self) -> Target {
        Target::Svelte
    }

    fn extension(&self, _typescript: bool) -> &'static str {
        "svelte"
    }

    fn body_depth(&self) -> usize {
        1
    }

    fn wrap_component(&self, doc: &ParsedDocument, meta: &ComponentMeta, children: &[String]) -> Result<String> {
        let features = meta.features;
        let ts = meta.typescript;
        let mut lines = Vec::new();

        // Script block
        let script = if ts { "<script lang=\"ts\">" } else { "<script>" };
        lines.push(script.to_string());
        if let Some(import) = theme_import(meta) {
            lines.push(format!("  {}", import));
            lines.push(String::new());
        }

        if ts {
            lines.push(format!("  export let size: number | string = {};", meta.size_literal()));
            lines.push(format!("  export let color: string = {};", js_string(&meta.default_color)));
        } else {
            lines.push(format!("  export let size = {};", meta.size_literal()));
            lines.push(format!("  export let color = {};", js_string(&meta.default_color)));
        }
        if features.animation {
            lines.push("  export let spin = false;".to_string());
            lines.push("  export let pulse = false;".to_string());
        }
        if features.theming {
            if ts {
                lines.push("  export let theme: IconTheme | undefined = undefined;".to_string());
            } else {
                lines.push("  export let theme = undefined;".to_string());
            }
        }
        if features.custom_class {
            lines.push("  let className = '';".to_string());
            lines.push("  export { className as class };".to_string());
        }
        if features.custom_style {
            lines.push("  export let style = '';".to_string());
        }
        lines.push(String::new());

        let mut parts = class_parts(meta, str::to_string);
        if features.custom_class {
            parts.push("className".to_string());
        }
        lines.push(format!("  $: classes = [{}].filter(Boolean).join(' ');", parts.join(", ")));
        lines.push(format!("  $: paint = {};", color_expression(meta, "color", "theme")));
        lines.push("</script>".to_string());
        lines.push(String::new());

        // Markup
        let mut root = vec![
            format!("xmlns=\"{}\"", SVG_NAMESPACE),
            "width={size}".to_string(),
            "height={size}".to_string(),
            format!("viewBox=\"{}\"", html_attribute(&meta.view_box)),
        ];
        match PaintMode::detect(doc) {
            PaintMode::Fill => root.push("fill={paint}".to_string()),
            PaintMode::Stroke => {
                root.push("fill=\"none\"".to_string());
                root.push("stroke={paint}".to_string());
            }
        }
        for (attr, value) in passthrough_root_attributes(doc) {
            root.push(self.markup_attribute(attr, value));
        }
        root.push("class={classes}".to_string());
        if features.custom_style {
            root.push("{style}".to_string());
        }

        lines.push("<svg".to_string());
        for attr in root {
            lines.push(format!("  {}", attr));
        }
        lines.push(">".to_string());
        lines.extend(children.iter().cloned());
        lines.push("</svg>".to_string());
        lines.push(String::new());

        Ok(lines.join("\n"))
    }
}
