//! Code generators for the supported UI frameworks.
//!
//! Every backend walks the tree the same way (see [`emit_element`]); they
//! differ only in how one node and its attribute list are spelled, which is
//! what [`NodeEmitter`] captures.

#[cfg(feature = "react")]
mod react;
#[cfg(feature = "svelte")]
mod svelte;
#[cfg(feature = "vue")]
mod vue;
#[cfg(feature = "web-component")]
mod web_component;

pub(crate) mod templates;

#[cfg(feature = "react")]
pub use react::ReactGenerator;
#[cfg(feature = "svelte")]
pub use svelte::SvelteGenerator;
#[cfg(feature = "vue")]
pub use vue::VueGenerator;
#[cfg(feature = "web-component")]
pub use web_component::WebComponentGenerator;

pub use templates::TemplateEngine;

use crate::component::ComponentMeta;
use crate::config::Target;
use crate::error::{CodegenError, Result};
use iconforge_core::vocabulary::is_paint_attribute;
use iconforge_core::{AttributeValue, Element, ParsedDocument};
use tracing::trace;

/// Content of one node, after its children have been emitted.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeBody<'a> {
    Empty,
    Text(&'a str),
    Children(Vec<String>),
}

/// Per-target spelling of a single node.
pub trait NodeEmitter {
    /// Format an attribute list. Paint attributes are already filtered out.
    fn format_attributes(&self, attributes: &[(&str, &AttributeValue)]) -> String;

    /// Format one node around its already-formatted attributes and body.
    fn format_node(&self, tag: &str, attributes: &str, body: NodeBody<'_>, depth: usize) -> String;
}

/// Emit one element and its subtree.
///
/// Children win over text when an element has both.
pub fn emit_element<E: NodeEmitter + ?Sized>(emitter: &E, element: &Element, depth: usize) -> String {
    let attributes: Vec<(&str, &AttributeValue)> = element
        .attributes
        .iter()
        .filter(|(name, _)| !is_paint_attribute(name))
        .map(|(name, value)| (name.as_str(), value))
        .collect();
    let attributes = emitter.format_attributes(&attributes);

    let body = if element.has_children() {
        NodeBody::Children(
            element
                .children
                .iter()
                .map(|child| emit_element(emitter, child, depth + 1))
                .collect(),
        )
    } else if let Some(text) = element.text() {
        NodeBody::Text(text)
    } else {
        NodeBody::Empty
    };

    emitter.format_node(&element.tag, &attributes, body, depth)
}

/// Emit every child of the document root at `depth`.
pub fn emit_children<E: NodeEmitter + ?Sized>(emitter: &E, doc: &ParsedDocument, depth: usize) -> Vec<String> {
    doc.children
        .iter()
        .map(|child| emit_element(emitter, child, depth))
        .collect()
}

/// Indentation for a nesting depth.
pub(crate) fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

/// Markup spelling shared by the template-based targets.
pub(crate) fn markup_node(
    tag: &str,
    attributes: &str,
    body: NodeBody<'_>,
    depth: usize,
    escape_text: impl Fn(&str) -> String,
) -> String {
    let pad = indent(depth);
    let open = if attributes.is_empty() {
        format!("<{}", tag)
    } else {
        format!("<{} {}", tag, attributes)
    };

    match body {
        NodeBody::Empty => format!("{}{} />", pad, open),
        NodeBody::Text(text) => format!("{}{}>{}</{}>", pad, open, escape_text(text), tag),
        NodeBody::Children(children) => {
            format!("{}{}>\n{}\n{}</{}>", pad, open, children.join("\n"), pad, tag)
        }
    }
}

/// What a generated file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Component,
    Declaration,
    Stylesheet,
    Theme,
}

/// A generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Target the file belongs to; `None` for shared runtime files.
    pub target: Option<Target>,
    /// File name, relative to the target's output directory.
    pub path: String,
    pub content: String,
    pub kind: FileKind,
}

/// A framework backend.
pub trait CodeGenerator: NodeEmitter + Send + Sync {
    fn target(&self) -> Target;

    /// Component file extension for the given language mode.
    fn extension(&self, typescript: bool) -> &'static str;

    /// Depth at which root children are emitted inside the wrapper.
    fn body_depth(&self) -> usize;

    /// Wrap the emitted root children in a component definition.
    fn wrap_component(&self, doc: &ParsedDocument, meta: &ComponentMeta, children: &[String]) -> Result<String>;

    /// Type declarations for JavaScript output, if the target has any.
    fn declaration(&self, _meta: &ComponentMeta) -> Option<String> {
        None
    }

    /// Emit the component source for one icon.
    fn emit(&self, doc: &ParsedDocument, meta: &ComponentMeta) -> Result<String> {
        let children = emit_children(self, doc, self.body_depth());
        self.wrap_component(doc, meta, &children)
    }

    /// Emit the component file plus its declaration when requested.
    fn generate(&self, doc: &ParsedDocument, meta: &ComponentMeta, declarations: bool) -> Result<Vec<GeneratedFile>> {
        let mut files = vec![GeneratedFile {
            target: Some(self.target()),
            path: format!("{}.{}", meta.component_name, self.extension(meta.typescript)),
            content: self.emit(doc, meta)?,
            kind: FileKind::Component,
        }];

        if declarations && !meta.typescript {
            if let Some(content) = self.declaration(meta) {
                files.push(GeneratedFile {
                    target: Some(self.target()),
                    path: format!("{}.d.ts", meta.component_name),
                    content,
                    kind: FileKind::Declaration,
                });
            }
        }

        trace!(
            backend = %self.target(),
            component = %meta.component_name,
            files = files.len(),
            "generated component"
        );
        Ok(files)
    }
}

/// Construct the backend for a target.
pub fn generator_for(target: Target) -> Result<Box<dyn CodeGenerator>> {
    match target {
        #[cfg(feature = "react")]
        Target::React => Ok(Box::new(ReactGenerator::new())),
        #[cfg(feature = "vue")]
        Target::Vue => Ok(Box::new(VueGenerator::new())),
        #[cfg(feature = "svelte")]
        Target::Svelte => Ok(Box::new(SvelteGenerator::new())),
        #[cfg(feature = "web-component")]
        Target::WebComponent => Ok(Box::new(WebComponentGenerator::new())),
        #[allow(unreachable_patterns)]
        other => Err(CodegenError::TargetDisabled(other.to_string())),
    }
}

/// `['icon', 'icon-rtl', spin && 'icon-spin', ...]` style class expression
/// parts shared by the script-based wrappers. `prop` maps a prop name to the
/// expression that reads it.
pub(crate) fn class_parts(meta: &ComponentMeta, prop: impl Fn(&str) -> String) -> Vec<String> {
    let mut parts: Vec<String> = meta
        .static_classes()
        .iter()
        .map(|c| crate::escape::js_string(c))
        .collect();

    if meta.features.animation {
        parts.push(format!("{} && {}", prop("spin"), crate::escape::js_string(&meta.class("spin"))));
        parts.push(format!("{} && {}", prop("pulse"), crate::escape::js_string(&meta.class("pulse"))));
    }
    if meta.features.theming {
        let theme = prop("theme");
        parts.push(format!("{} && `{}-${{{}}}`", theme, meta.class("theme"), theme));
    }
    parts
}

/// Module the generated components import the theme accessor from.
pub(crate) const THEME_MODULE: &str = "./theme";

/// TypeScript prop signatures common to every typed wrapper and declaration.
pub(crate) fn prop_signatures(meta: &ComponentMeta) -> Vec<String> {
    let mut props = vec![
        "size?: number | string;".to_string(),
        "color?: string;".to_string(),
    ];
    if meta.features.animation {
        props.push("spin?: boolean;".to_string());
        props.push("pulse?: boolean;".to_string());
    }
    if meta.features.theming {
        props.push("theme?: IconTheme;".to_string());
    }
    props
}

/// Import of the theme accessor, when theming is on.
pub(crate) fn theme_import(meta: &ComponentMeta) -> Option<String> {
    if !meta.features.theming {
        return None;
    }
    Some(if meta.typescript {
        format!("import {{ resolveIconColor, type IconTheme }} from '{}';", THEME_MODULE)
    } else {
        format!("import {{ resolveIconColor }} from '{}';", THEME_MODULE)
    })
}

/// Type-only import of the theme union for declaration files.
pub(crate) fn theme_type_import(meta: &ComponentMeta) -> Option<String> {
    meta.features
        .theming
        .then(|| format!("import type {{ IconTheme }} from '{}';", THEME_MODULE))
}

/// Expression that resolves the paint color from the `color`/`theme` props.
pub(crate) fn color_expression(meta: &ComponentMeta, color: &str, theme: &str) -> String {
    if meta.features.theming {
        format!("resolveIconColor({}, {})", color, theme)
    } else {
        color.to_string()
    }
}
