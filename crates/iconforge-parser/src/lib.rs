//! Front end of the iconforge compiler.
//!
//! Turns raw SVG text into a [`ParsedDocument`] in four forward-only stages:
//! preprocessing, tokenizing (with attribute normalization per tag), tree
//! building and, separately, structural validation.
//!
//! # Example
//!
//! ```
//! use iconforge_parser::{parse, validate};
//!
//! let doc = parse(r#"<svg viewBox="0 0 24 24"><circle cx="12" cy="12" r="10"/></svg>"#)?;
//! assert_eq!(doc.children.len(), 1);
//! assert!(validate(&doc).valid);
//! # Ok::<(), iconforge_core::ParseError>(())
//! ```

pub mod attributes;
pub mod builder;
pub mod lexer;
pub mod preprocess;
pub mod validator;

pub use attributes::parse_attributes;
pub use builder::{build, MAX_NESTING_DEPTH};
pub use lexer::{tokenize, Token};
pub use preprocess::preprocess;
pub use validator::{validate, ValidationReport};

use iconforge_core::{ParseError, ParsedDocument};
use tracing::{debug, instrument};

/// Parse SVG source into a document.
///
/// Fails on empty input, an unterminated tag, a root other than `<svg>`,
/// or nesting deeper than [`MAX_NESTING_DEPTH`].
#[instrument(level = "debug", skip(source), fields(len = source.len()))]
pub fn parse(source: &str) -> Result<ParsedDocument, ParseError> {
    if source.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let clean = preprocess(source);
    if clean.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let tokens = tokenize(&clean)?;
    debug!(tokens = tokens.len(), "tokenized");

    let root = build(&tokens)?;
    debug!(children = root.children.len(), "built tree");

    Ok(ParsedDocument {
        attributes: root.attributes,
        children: root.children,
        raw_content: source.to_string(),
    })
}

/// Parse and validate in one call.
pub fn parse_and_validate(source: &str) -> Result<(ParsedDocument, ValidationReport), ParseError> {
    let doc = parse(source)?;
    let report = validate(&doc);
    Ok((doc, report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_raw_content() {
        let source = "<svg>\n  <circle r=\"1\"/>\n</svg>\n";
        let doc = parse(source).unwrap();
        assert_eq!(doc.raw_content, source);
        assert_eq!(doc.children.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse("").unwrap_err(), ParseError::EmptyInput);
        assert_eq!(parse("   ").unwrap_err(), ParseError::EmptyInput);
        assert_eq!(parse("<!-- nothing -->").unwrap_err(), ParseError::EmptyInput);
    }

    #[test]
    fn test_parse_and_validate() {
        let (doc, report) = parse_and_validate("<svg><blink/></svg>").unwrap();
        assert_eq!(doc.children.len(), 1);
        assert_eq!(report.warnings.len(), 2);
    }
}
