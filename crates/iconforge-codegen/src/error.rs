//! Error types for code generation.

use thiserror::Error;

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur during code generation.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// Target identifier not known to this build.
    #[error("Unknown target framework: {0}")]
    UnknownTarget(String),

    /// Target known but compiled out via cargo features.
    #[error("Target '{0}' is not enabled in this build")]
    TargetDisabled(String),

    /// Resolved component name is not a usable identifier.
    #[error("Invalid component name '{name}' for icon '{icon}'")]
    InvalidComponentName { icon: String, name: String },

    /// Template rendering error.
    #[error("Template error: {0}")]
    TemplateError(#[from] handlebars::RenderError),

    /// Invalid template.
    #[error("Invalid template: {0}")]
    InvalidTemplate(#[from] handlebars::TemplateError),
}
