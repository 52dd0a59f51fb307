//! Component code generation for parsed SVG icons.
//!
//! Each backend implements [`CodeGenerator`] and shares one tree walk
//! ([`generators::emit_element`]); the backends only differ in how a node
//! is spelled. Per-icon output is a component file (plus an optional
//! `.d.ts`); per-batch output is the [`RuntimeGlue`].
//!
//! # Example
//!
//! ```
//! use iconforge_codegen::{generator_for, ComponentMeta, Target};
//! use iconforge_core::{Element, ParsedDocument};
//!
//! let mut doc = ParsedDocument::default();
//! doc.children.push(Element::new("circle").with_attribute("r", 10.0));
//!
//! let react = generator_for(Target::React)?;
//! let code = react.emit(&doc, &ComponentMeta::new("DotIcon"))?;
//! assert!(code.contains("<circle r={10} />"));
//! # Ok::<(), iconforge_codegen::CodegenError>(())
//! ```

pub mod component;
pub mod config;
pub mod error;
pub mod escape;
pub mod generators;
pub mod runtime;

pub use component::{ComponentMeta, EmitFeatures, PaintMode};
pub use config::{ComponentDefaults, FeatureFlags, GenerationConfig, Naming, Target};
pub use error::{CodegenError, Result};
pub use generators::{generator_for, CodeGenerator, FileKind, GeneratedFile, NodeBody, NodeEmitter};
pub use runtime::RuntimeGlue;

#[cfg(feature = "react")]
pub use generators::ReactGenerator;
#[cfg(feature = "svelte")]
pub use generators::SvelteGenerator;
#[cfg(feature = "vue")]
pub use generators::VueGenerator;
#[cfg(feature = "web-component")]
pub use generators::WebComponentGenerator;
