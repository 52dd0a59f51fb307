//! # iconforge
//!
//! Compiles SVG icon sources into framework components.
//!
//! The pipeline per icon is pure and synchronous: preprocess, tokenize,
//! build the tree, validate, then emit one component per configured target.
//! [`Batch`] fans icons out over a rayon pool and isolates per-icon failures.
//!
//! ```
//! use iconforge::{Batch, GenerationConfig, IconSource, Target};
//!
//! let config = GenerationConfig {
//!     targets: vec![Target::React, Target::Vue],
//!     ..Default::default()
//! };
//! let report = Batch::new(config)?.run(&[
//!     IconSource::new("home", r#"<svg viewBox="0 0 24 24"><circle cx="12" cy="12" r="10"/></svg>"#),
//!     IconSource::new("broken", "<div/>"),
//! ])?;
//!
//! assert_eq!(report.icons.len(), 1);
//! assert_eq!(report.failures[0].icon_name(), Some("broken"));
//! # Ok::<(), iconforge::IconError>(())
//! ```
//!
//! Logging goes through `tracing`; install a subscriber to see it.

pub mod batch;
pub mod error;
pub mod pipeline;

pub use batch::{Batch, BatchReport};
pub use error::{IconError, Result};
pub use pipeline::{CompiledIcon, Compiler, IconSource};

pub use iconforge_codegen::{
    ComponentDefaults, FeatureFlags, FileKind, GeneratedFile, GenerationConfig, Naming, RuntimeGlue, Target,
};
pub use iconforge_core::{AttributeValue, Element, ParseError, ParsedDocument};
pub use iconforge_parser::{parse, validate, ValidationReport};

/// Compile a single icon with the given configuration.
pub fn compile_icon(name: &str, svg: &str, config: &GenerationConfig) -> Result<CompiledIcon> {
    Compiler::new(config.clone())?.compile(&IconSource::new(name, svg))
}
