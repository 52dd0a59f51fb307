//! Core types for the iconforge SVG-to-component compiler.
//!
//! This crate provides the foundational types shared by the parser and the
//! code generators:
//! - The immutable element tree (`Element`, `ParsedDocument`)
//! - Typed attribute values and the attribute/element vocabulary tables
//! - Parse error types

pub mod ast;
pub mod errors;
pub mod types;
pub mod vocabulary;

pub use ast::*;
pub use errors::*;
pub use types::*;
