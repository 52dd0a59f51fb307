//! Top-level error type.

use iconforge_codegen::CodegenError;
use iconforge_core::ParseError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IconError>;

/// Any failure while compiling icons.
#[derive(Error, Debug)]
pub enum IconError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Codegen(#[from] CodegenError),

    /// A failure attributed to one icon of a batch.
    #[error("icon '{name}': {source}")]
    Icon {
        name: String,
        #[source]
        source: Box<IconError>,
    },
}

impl IconError {
    /// Attach the icon name, unless it is already attached.
    pub fn for_icon(self, name: &str) -> Self {
        match self {
            IconError::Icon { .. } => self,
            other => IconError::Icon {
                name: name.to_string(),
                source: Box::new(other),
            },
        }
    }

    /// Name of the offending icon, when known.
    pub fn icon_name(&self) -> Option<&str> {
        match self {
            IconError::Icon { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Offset into the preprocessed source, for parse errors that carry one.
    pub fn offset(&self) -> Option<usize> {
        match self.root_cause() {
            IconError::Parse(err) => err.offset(),
            _ => None,
        }
    }

    /// The underlying error without the icon attribution.
    pub fn root_cause(&self) -> &IconError {
        match self {
            IconError::Icon { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_icon_wraps_once() {
        let err = IconError::from(ParseError::UnclosedTag { offset: 5 })
            .for_icon("clock")
            .for_icon("other");

        assert_eq!(err.icon_name(), Some("clock"));
        assert_eq!(err.to_string(), "icon 'clock': Unclosed tag starting at offset 5 in preprocessed source");
        assert!(matches!(
            err.root_cause(),
            IconError::Parse(ParseError::UnclosedTag { offset: 5 })
        ));
        assert_eq!(err.offset(), Some(5));
    }

    #[test]
    fn test_transparent_messages() {
        let err = IconError::from(ParseError::EmptyInput);
        assert_eq!(err.to_string(), ParseError::EmptyInput.to_string());
        assert_eq!(err.icon_name(), None);
        assert_eq!(err.offset(), None);
    }
}
