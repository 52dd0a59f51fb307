//! Batch-level runtime glue: the shared stylesheet and theme accessor.
//!
//! Emitted once per batch, never per icon, and only when a feature that
//! needs it is switched on.

use crate::config::GenerationConfig;
use crate::error::Result;
use crate::generators::{FileKind, GeneratedFile, TemplateEngine};
use serde::Serialize;
use tracing::debug;

/// Theme names and their fallback colors.
pub const THEMES: &[(&str, &str)] = &[
    ("primary", "#3b82f6"),
    ("secondary", "#64748b"),
    ("success", "#22c55e"),
    ("warning", "#f59e0b"),
    ("danger", "#ef4444"),
];

pub const STYLESHEET_FILE: &str = "icons.css";

const STYLESHEET_TEMPLATE: &str = r#".{{prefix}} {
  display: inline-block;
  vertical-align: middle;
  flex-shrink: 0;
}
{{#if animation}}

@keyframes {{prefix}}-spin {
  from { transform: rotate(0deg); }
  to { transform: rotate(360deg); }
}

@keyframes {{prefix}}-pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.5; }
}

.{{prefix}}-spin {
  animation: {{prefix}}-spin 1s linear infinite;
}

.{{prefix}}-pulse {
  animation: {{prefix}}-pulse 2s ease-in-out infinite;
}
{{/if}}
{{#if theming}}
{{#each themes}}

.{{../prefix}}-theme-{{kebab_case name}} {
  color: var(--{{../prefix}}-{{kebab_case name}}, {{color}});
}
{{/each}}
{{/if}}
{{#if rtl}}

[dir="rtl"] .{{prefix}}-rtl {
  transform: scaleX(-1);
}
{{/if}}
"#;

const THEME_TEMPLATE: &str = r#"{{#if typescript}}
export type IconTheme = {{join theme_literals " | "}};

export const ICON_THEME_COLORS: Record<IconTheme, string> = {
{{else}}
export const ICON_THEME_COLORS = {
{{/if}}
{{#each themes}}
  {{name}}: {{js_string value}},
{{/each}}
};

{{#if typescript}}
export function resolveIconColor(color: string, theme?: IconTheme): string {
{{else}}
export function resolveIconColor(color, theme) {
{{/if}}
  return theme && theme in ICON_THEME_COLORS ? ICON_THEME_COLORS[theme] : color;
}
"#;

#[derive(Serialize)]
struct ThemeEntry {
    name: &'static str,
    color: &'static str,
    /// CSS value read by the accessor: the custom property with its fallback.
    value: String,
}

#[derive(Serialize)]
struct RuntimeContext {
    prefix: String,
    animation: bool,
    theming: bool,
    rtl: bool,
    typescript: bool,
    themes: Vec<ThemeEntry>,
    theme_literals: Vec<String>,
}

impl RuntimeContext {
    fn new(config: &GenerationConfig) -> Self {
        let prefix = config.class_prefix.clone();
        let themes = THEMES
            .iter()
            .map(|&(name, color)| ThemeEntry {
                name,
                color,
                value: format!("var(--{}-{}, {})", prefix, name, color),
            })
            .collect();

        Self {
            animation: config.features.animation,
            theming: config.features.theming,
            rtl: config.features.rtl,
            typescript: config.typescript,
            themes,
            theme_literals: THEMES
                .iter()
                .map(|(name, _)| crate::escape::js_string(name))
                .collect(),
            prefix,
        }
    }
}

/// Shared runtime artifacts for one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeGlue {
    pub stylesheet: String,
    pub theme: String,
    /// File name of the theme accessor (`theme.ts` or `theme.js`).
    pub theme_file: String,
}

impl RuntimeGlue {
    /// Render the glue for a batch, or `None` when no feature needs it.
    pub fn render(config: &GenerationConfig) -> Result<Option<Self>> {
        if !config.needs_runtime() {
            debug!("no feature needs runtime glue");
            return Ok(None);
        }

        let mut engine = TemplateEngine::new();
        engine.register_template("stylesheet", STYLESHEET_TEMPLATE)?;
        engine.register_template("theme", THEME_TEMPLATE)?;

        let context = RuntimeContext::new(config);
        let extension = if config.typescript { "ts" } else { "js" };
        debug!(themes = THEMES.len(), extension, "rendering runtime glue");

        Ok(Some(Self {
            stylesheet: engine.render("stylesheet", &context)?,
            theme: engine.render("theme", &context)?,
            theme_file: format!("theme.{}", extension),
        }))
    }

    /// The glue as output files.
    pub fn files(&self) -> Vec<GeneratedFile> {
        vec![
            GeneratedFile {
                target: None,
                path: STYLESHEET_FILE.to_string(),
                content: self.stylesheet.clone(),
                kind: FileKind::Stylesheet,
            },
            GeneratedFile {
                target: None,
                path: self.theme_file.clone(),
                content: self.theme.clone(),
                kind: FileKind::Theme,
            },
        ]
    }
}
