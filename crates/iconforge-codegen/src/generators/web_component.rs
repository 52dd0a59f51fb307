//! Custom element generator: a framework-free `HTMLElement` subclass that
//! renders its SVG into `innerHTML` whenever an observed attribute changes.

use super::{class_parts, color_expression, markup_node, theme_import};
use super::{CodeGenerator, NodeBody, NodeEmitter};
use crate::component::{passthrough_root_attributes, ComponentMeta, PaintMode, SVG_NAMESPACE};
use crate::config::Target;
use crate::error::Result;
use crate::escape::{html_attribute, html_text, js_string, template_literal};
use iconforge_core::vocabulary::markup_attribute_name;
use iconforge_core::{AttributeValue, ParsedDocument};

/// Host attributes carrying the pass-through class and style.
const CLASS_ATTRIBUTE: &str = "icon-class";
const STYLE_ATTRIBUTE: &str = "icon-style";

/// Web Component code generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebComponentGenerator;

impl WebComponentGenerator {
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

    fn observed_attributes(&self, meta: &ComponentMeta) -> Vec<&'static str> {
        let mut observed = vec!["size", "color"];
        if meta.features.animation {
            observed.extend(["spin", "pulse"]);
        }
        if meta.features.theming {
            observed.push("theme");
        }
        if meta.features.custom_class {
            observed.push(CLASS_ATTRIBUTE);
        }
        if meta.features.custom_style {
            observed.push(STYLE_ATTRIBUTE);
        }
        observed
    }
}

impl NodeEmitter for WebComponentGenerator {
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

impl CodeGenerator for WebComponentGenerator {
    fn target(&self) -> Target {
        Target::WebComponent
    }

    fn extension(&self, typescript: bool) -> &'static str {
        if typescript {
            "ts"
        } else {
            "js"
        }
    }

    fn body_depth(&self) -> usize {
        1
    }

    fn wrap_component(&self, doc: &ParsedDocument, meta: &ComponentMeta, children: &[String]) -> Result<String> {
        let name = &meta.component_name;
        let tag = meta.element_tag();
        let features = meta.features;
        let ts = meta.typescript;
        let annotate = |annotation: &'static str| if ts { annotation } else { "" };
        let mut lines = Vec::new();

        if let Some(import) = theme_import(meta) {
            lines.push(import);
            lines.push(String::new());
        }

        // Static markup
        if children.is_empty() {
            lines.push("const template = ``;".to_string());
        } else {
            lines.push("const template = `".to_string());
            lines.push(template_literal(&children.join("\n")));
            lines.push("`;".to_string());
        }
        lines.push(String::new());

        lines.push(format!("function escapeAttribute(value{}){} {{", annotate(": string"), annotate(": string")));
        lines.push(
            "  return value.replace(/&/g, '&amp;').replace(/\"/g, '&quot;').replace(/</g, '&lt;');".to_string(),
        );
        lines.push("}".to_string());
        lines.push(String::new());

        // Element class
        let observed: Vec<String> = self
            .observed_attributes(meta)
            .into_iter()
            .map(js_string)
            .collect();
        lines.push(format!("export class {} extends HTMLElement {{", name));
        lines.push(format!("  static get observedAttributes(){} {{", annotate(": string[]")));
        lines.push(format!("    return [{}];", observed.join(", ")));
        lines.push("  }".to_string());
        lines.push(String::new());
        lines.push(format!("  connectedCallback(){} {{", annotate(": void")));
        lines.push("    this.render();".to_string());
        lines.push("  }".to_string());
        lines.push(String::new());
        lines.push(format!("  attributeChangedCallback(){} {{", annotate(": void")));
        lines.push("    this.render();".to_string());
        lines.push("  }".to_string());
        lines.push(String::new());
        lines.push(format!("  {}render(){} {{", annotate("private "), annotate(": void")));

        lines.push(format!(
            "    const size = escapeAttribute(this.getAttribute('size') ?? {});",
            js_string(&meta.default_size)
        ));
        lines.push(format!(
            "    const color = this.getAttribute('color') ?? {};",
            js_string(&meta.default_color)
        ));
        if features.animation {
            lines.push("    const spin = this.hasAttribute('spin');".to_string());
            lines.push("    const pulse = this.hasAttribute('pulse');".to_string());
        }
        if features.theming {
            if ts {
                lines.push("    const theme = (this.getAttribute('theme') ?? undefined) as IconTheme | undefined;".to_string());
            } else {
                lines.push("    const theme = this.getAttribute('theme') ?? undefined;".to_string());
            }
        }
        if features.custom_class {
            lines.push(format!("    const className = this.getAttribute('{}');", CLASS_ATTRIBUTE));
        }
        if features.custom_style {
            lines.push(format!("    const style = this.getAttribute('{}');", STYLE_ATTRIBUTE));
        }

        let mut parts = class_parts(meta, str::to_string);
        if features.custom_class {
            parts.push("className".to_string());
        }
        lines.push(format!(
            "    const classes = escapeAttribute([{}].filter(Boolean).join(' '));",
            parts.join(", ")
        ));
        lines.push(format!(
            "    const paint = escapeAttribute({});",
            color_expression(meta, "color", "theme")
        ));

        let mut root = vec![
            format!("xmlns=\"{}\"", SVG_NAMESPACE),
            "width=\"${size}\"".to_string(),
            "height=\"${size}\"".to_string(),
            format!("viewBox=\"{}\"", template_literal(&html_attribute(&meta.view_box))),
        ];
        match PaintMode::detect(doc) {
            PaintMode::Fill => root.push("fill=\"${paint}\"".to_string()),
            PaintMode::Stroke => {
                root.push("fill=\"none\"".to_string());
                root.push("stroke=\"${paint}\"".to_string());
            }
        }
        for (attr, value) in passthrough_root_attributes(doc) {
            root.push(template_literal(&self.markup_attribute(attr, value)));
        }
        root.push("class=\"${classes}\"".to_string());

        let style = if features.custom_style {
            "${style === null ? '' : ` style=\"${escapeAttribute(style)}\"`}"
        } else {
            ""
        };
        lines.push(format!(
            "    this.innerHTML = `<svg {}{}>${{template}}</svg>`;",
            root.join(" "),
            style
        ));
        lines.push("  }".to_string());
        lines.push("}".to_string());
        lines.push(String::new());

        // Registration
        lines.push(format!("if (!customElements.get({})) {{", js_string(&tag)));
        lines.push(format!("  customElements.define({}, {});", js_string(&tag), name));
        lines.push("}".to_string());
        lines.push(String::new());
        lines.push(format!("export default {};", name));
        lines.push(String::new());

        Ok(lines.join("\n"))
    }

    fn declaration(&self, meta: &ComponentMeta) -> Option<String> {
        let name = &meta.component_name;
        let lines = [
            format!("export declare class {} extends HTMLElement {{", name),
            "  static get observedAttributes(): string[];".to_string(),
            "  connectedCallback(): void;".to_string(),
            "  attributeChangedCallback(): void;".to_string(),
            "}".to_string(),
            String::new(),
            "declare global {".to_string(),
            "  interface HTMLElementTagNameMap {".to_string(),
            format!("    {}: {};", js_string(&meta.element_tag()), name),
            "  }".to_string(),
            "}".to_string(),
            String::new(),
            format!("export default {};", name),
            String::new(),
        ];
        Some(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::EmitFeatures;
    use iconforge_parser::parse;

    fn emit(source: &str, meta: &ComponentMeta) -> String {
        WebComponentGenerator::new()
            .emit(&parse(source).unwrap(), meta)
            .unwrap()
    }

    #[test]
    fn test_home_icon_shape() {
        let code = emit(
            r#"<svg viewBox="0 0 24 24"><circle cx="12" cy="12" r="10" fill="red"/></svg>"#,
            &ComponentMeta::new("HomeIcon"),
        );

        assert!(code.contains("const template = `\n  <circle cx=\"12\" cy=\"12\" r=\"10\" />\n`;"));
        assert!(code.contains("export class HomeIcon extends HTMLElement {"));
        assert!(code.contains("    return ['size', 'color'];"));
        assert!(code.contains("this.getAttribute('size') ?? '24'"));
        assert!(code.contains("this.getAttribute('color') ?? 'currentColor'"));
        assert!(code.contains(" fill=\"${paint}\" "));
        assert!(code.contains("  private render(): void {"));
        assert!(code.contains("if (!customElements.get('home-icon')) {"));
        assert!(code.contains("  customElements.define('home-icon', HomeIcon);"));
        assert!(!code.contains("red"));
    }

    #[test]
    fn test_template_literal_content_is_escaped() {
        let code = emit(
            "<svg><text>cost: ${price} `x`</text></svg>",
            &ComponentMeta::new("Price").javascript(),
        );
        assert!(code.contains(r"<text>cost: $&#123;price&#125; \`x\`</text>"));
        assert!(code.contains("  render() {"));
        assert!(code.contains("function escapeAttribute(value) {"));
    }

    #[test]
    fn test_feature_attributes() {
        let meta = ComponentMeta::new("Home").with_features(EmitFeatures {
            animation: true,
            theming: true,
            custom_class: true,
            custom_style: true,
            rtl: true,
        });
        let code = emit(r#"<svg fill="none" stroke-linecap="round"/>"#, &meta);

        assert!(code.contains("    return ['size', 'color', 'spin', 'pulse', 'theme', 'icon-class', 'icon-style'];"));
        assert!(code.contains("    const paint = escapeAttribute(resolveIconColor(color, theme));"));
        assert!(code.contains(" fill=\"none\" stroke=\"${paint}\" stroke-linecap=\"round\" class=\"${classes}\""));
        assert!(code.contains("'icon', 'icon-rtl', spin && 'icon-spin'"));
        assert!(code.contains("customElements.define('home-icon', Home);"));
        assert!(code.contains("const template = ``;"));
    }

    #[test]
    fn test_declaration() {
        let meta = ComponentMeta::new("HomeIcon").javascript();
        let dts = WebComponentGenerator::new().declaration(&meta).unwrap();
        assert!(dts.contains("export declare class HomeIcon extends HTMLElement {"));
        assert!(dts.contains("    'home-icon': HomeIcon;"));
    }
}
