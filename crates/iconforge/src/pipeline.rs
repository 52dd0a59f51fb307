//! Single-icon pipeline: parse, validate, generate for every target.

use crate::error::Result;
use iconforge_codegen::{generator_for, CodeGenerator, ComponentMeta, GeneratedFile, GenerationConfig, RuntimeGlue, Target};
use iconforge_parser::parse_and_validate;
use tracing::{debug, instrument, warn};

/// One icon to compile: its logical name and raw SVG text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSource {
    pub name: String,
    pub svg: String,
}

impl IconSource {
    pub fn new(name: impl Into<String>, svg: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            svg: svg.into(),
        }
    }
}

/// Output for one icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledIcon {
    pub name: String,
    pub component_name: String,
    /// Hash of the source text, for callers that cache by content.
    pub content_hash: u64,
    /// Structural warnings; they never block generation.
    pub warnings: Vec<String>,
    /// Component files (and declarations) for every requested target.
    pub files: Vec<GeneratedFile>,
}

impl CompiledIcon {
    /// Files generated for one target.
    pub fn files_for(&self, target: Target) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter().filter(move |f| f.target == Some(target))
    }
}

/// Compiles icons against one configuration. Shared read-only across threads.
pub struct Compiler {
    config: GenerationConfig,
    generators: Vec<Box<dyn CodeGenerator>>,
}

impl Compiler {
    /// Build the backends for every configured target. Repeated targets are
    /// generated once.
    pub fn new(config: GenerationConfig) -> Result<Self> {
        let mut targets: Vec<Target> = Vec::with_capacity(config.targets.len());
        for &target in &config.targets {
            if !targets.contains(&target) {
                targets.push(target);
            }
        }

        let generators = targets
            .into_iter()
            .map(generator_for)
            .collect::<iconforge_codegen::Result<Vec<_>>>()?;

        Ok(Self { config, generators })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn targets(&self) -> Vec<Target> {
        self.generators.iter().map(|g| g.target()).collect()
    }

    /// Compile one icon for every target.
    #[instrument(level = "debug", skip(self, source), fields(icon = %source.name))]
    pub fn compile(&self, source: &IconSource) -> Result<CompiledIcon> {
        let (doc, report) = parse_and_validate(&source.svg)?;
        for warning in &report.warnings {
            warn!(icon = %source.name, "{}", warning);
        }

        let meta = ComponentMeta::for_icon(&self.config, &source.name, &doc)?;
        let declarations = self.config.emit_declarations();

        let mut files = Vec::new();
        for generator in &self.generators {
            files.extend(generator.generate(&doc, &meta, declarations)?);
        }
        debug!(component = %meta.component_name, files = files.len(), "generated");

        Ok(CompiledIcon {
            name: source.name.clone(),
            component_name: meta.component_name,
            content_hash: doc.content_hash(),
            warnings: report.warnings,
            files,
        })
    }

    /// Shared runtime glue for a batch compiled with this configuration.
    pub fn runtime(&self) -> Result<Option<RuntimeGlue>> {
        Ok(RuntimeGlue::render(&self.config)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IconError;
    use iconforge_codegen::FileKind;
    use iconforge_core::ParseError;

    const HOME: &str = r#"<svg viewBox="0 0 24 24"><circle cx="12" cy="12" r="10"/></svg>"#;

    fn config(targets: &[Target]) -> GenerationConfig {
        GenerationConfig {
            targets: targets.to_vec(),
            ..Default::default()
        }
    }

    #[test]
    fn test_compile_all_targets() {
        let compiler = Compiler::new(config(&Target::ALL)).unwrap();
        let icon = compiler.compile(&IconSource::new("home", HOME)).unwrap();

        assert_eq!(icon.component_name, "Home");
        assert!(icon.warnings.is_empty());
        assert_eq!(icon.files.len(), 4);
        assert!(icon.files.iter().all(|f| f.kind == FileKind::Component));
        assert_eq!(icon.files_for(Target::Vue).next().unwrap().path, "Home.ts");
    }

    #[test]
    fn test_duplicate_targets_generated_once() {
        let compiler = Compiler::new(config(&[Target::React, Target::Svelte, Target::React])).unwrap();
        assert_eq!(compiler.targets(), [Target::React, Target::Svelte]);
    }

    #[test]
    fn test_warnings_do_not_block_generation() {
        let compiler = Compiler::new(config(&[Target::React])).unwrap();
        let icon = compiler
            .compile(&IconSource::new("odd", "<svg><unknown-element/></svg>"))
            .unwrap();

        assert_eq!(icon.warnings.len(), 2);
        assert!(icon.warnings.iter().any(|w| w.contains("viewBox")));
        assert!(icon.warnings.iter().any(|w| w.contains("unknown-element")));
        assert_eq!(icon.files.len(), 1);
    }

    #[test]
    fn test_compile_errors() {
        let compiler = Compiler::new(config(&[Target::React])).unwrap();

        let err = compiler.compile(&IconSource::new("div", "<div>x</div>")).unwrap_err();
        assert!(matches!(err, IconError::Parse(ParseError::RootElement { .. })));

        let err = compiler.compile(&IconSource::new("24-hours", HOME)).unwrap_err();
        assert!(matches!(err, IconError::Codegen(_)));
    }

    #[test]
    fn test_content_hash_tracks_source() {
        let compiler = Compiler::new(config(&[Target::React])).unwrap();
        let a = compiler.compile(&IconSource::new("a", HOME)).unwrap();
        let b = compiler.compile(&IconSource::new("b", HOME)).unwrap();
        let c = compiler
            .compile(&IconSource::new("c", HOME.replace("10", "11")))
            .unwrap();

        assert_eq!(a.content_hash, b.content_hash);
        assert_ne!(a.content_hash, c.content_hash);
    }
}
