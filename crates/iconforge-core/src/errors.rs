//! Error types for the iconforge front end.

use thiserror::Error;

/// Fatal errors raised while turning SVG source into a tree.
///
/// Each of these aborts generation for the offending icon only; batch
/// drivers are expected to record the failure and move on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("SVG source is empty")]
    EmptyInput,

    /// `offset` is a byte offset into the preprocessed source.
    #[error("Unclosed tag starting at offset {offset} in preprocessed source")]
    UnclosedTag { offset: usize },

    /// Raised before the tree gets deep enough to exhaust the stack.
    #[error("Element nesting exceeds {depth} levels at offset {offset} in preprocessed source")]
    NestingTooDeep { depth: usize, offset: usize },

    #[error("Root element must be <svg>, found <{found}>")]
    RootElement { found: String },
}

impl ParseError {
    /// Source offset carried by the error, if any.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::UnclosedTag { offset } | ParseError::NestingTooDeep { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unclosed_tag_message_has_offset() {
        let err = ParseError::UnclosedTag { offset: 17 };
        assert_eq!(
            err.to_string(),
            "Unclosed tag starting at offset 17 in preprocessed source"
        );
        assert_eq!(err.offset(), Some(17));
    }

    #[test]
    fn test_nesting_too_deep_message() {
        let err = ParseError::NestingTooDeep { depth: 512, offset: 1540 };
        assert_eq!(
            err.to_string(),
            "Element nesting exceeds 512 levels at offset 1540 in preprocessed source"
        );
        assert_eq!(err.offset(), Some(1540));
    }

    #[test]
    fn test_root_element_message() {
        let err = ParseError::RootElement {
            found: "div".to_string(),
        };
        assert_eq!(err.to_string(), "Root element must be <svg>, found <div>");
        assert_eq!(err.offset(), None);
    }
}
