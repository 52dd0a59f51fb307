//! Generation configuration.
//!
//! Loading and merging configuration files is left to the caller; these
//! types only describe the settled configuration and deserialize from any
//! serde format.

use crate::error::{CodegenError, Result};
use convert_case::{Case, Casing};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Output framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Target {
    React,
    Vue,
    Svelte,
    WebComponent,
}

impl Target {
    pub const ALL: [Target; 4] = [
        Target::React,
        Target::Vue,
        Target::Svelte,
        Target::WebComponent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Target::React => "react",
            Target::Vue => "vue",
            Target::Svelte => "svelte",
            Target::WebComponent => "web-component",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self> {
        Target::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CodegenError::UnknownTarget(s.to_string()))
    }
}

/// Feature switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    /// `spin`/`pulse` props plus keyframes in the shared stylesheet.
    pub animation: bool,
    /// `theme` prop plus the shared theme accessor.
    pub theming: bool,
    /// Mirror icons inside right-to-left containers.
    pub rtl: bool,
    /// Consumed by the preview/manifest tooling, not by code generation.
    pub preview: bool,
    /// Emit `.d.ts` declarations next to JavaScript output.
    pub dts: bool,
    /// Consumed by the barrel-file tooling, not by code generation.
    pub treeshaking: bool,
}

/// Defaults baked into every generated component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComponentDefaults {
    /// Default `size` prop; numeric strings are emitted as numbers.
    pub default_size: String,
    pub default_color: String,
    /// Accept a pass-through `class` prop.
    pub custom_class: bool,
    /// Accept a pass-through `style` prop.
    pub custom_style: bool,
}

impl Default for ComponentDefaults {
    fn default() -> Self {
        Self {
            default_size: "24".to_string(),
            default_color: "currentColor".to_string(),
            custom_class: false,
            custom_style: false,
        }
    }
}

/// Component naming rules. Naming never affects the parsed tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Naming {
    pub prefix: String,
    pub suffix: String,
}

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("valid identifier pattern"))
}

/// True if `name` is a plain JavaScript identifier.
pub fn is_identifier(name: &str) -> bool {
    identifier_pattern().is_match(name)
}

impl Naming {
    /// Resolve the component name for an icon: `prefix + PascalCase + suffix`.
    pub fn component_name(&self, icon_name: &str) -> Result<String> {
        let name = format!(
            "{}{}{}",
            self.prefix,
            icon_name.to_case(Case::Pascal),
            self.suffix
        );

        if !is_identifier(&name) {
            return Err(CodegenError::InvalidComponentName {
                icon: icon_name.to_string(),
                name,
            });
        }
        Ok(name)
    }
}

/// Complete generation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationConfig {
    pub targets: Vec<Target>,
    pub typescript: bool,
    pub features: FeatureFlags,
    pub defaults: ComponentDefaults,
    pub naming: Naming,
    /// Base CSS class; modifiers become `<prefix>-spin`, `<prefix>-theme-primary`, ...
    pub class_prefix: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            targets: vec![Target::React],
            typescript: true,
            features: FeatureFlags::default(),
            defaults: ComponentDefaults::default(),
            naming: Naming::default(),
            class_prefix: "icon".to_string(),
        }
    }
}

impl GenerationConfig {
    /// Whether the batch needs the shared stylesheet and theme accessor.
    pub fn needs_runtime(&self) -> bool {
        self.features.animation || self.features.theming || self.features.rtl
    }

    /// Whether JavaScript output should get `.d.ts` companions.
    pub fn emit_declarations(&self) -> bool {
        self.features.dts && !self.typescript
    }
}
