//! Tokenizer for preprocessed SVG source.

use crate::attributes::parse_attributes;
use iconforge_core::{Attributes, ParseError};
use nom::bytes::complete::take_till1;
use nom::IResult;

/// A lexical unit of markup. `position` is the byte offset into the
/// preprocessed source where the token starts.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    StartTag {
        name: String,
        attributes: Attributes,
        position: usize,
    },
    EndTag {
        name: String,
        position: usize,
    },
    SelfClosingTag {
        name: String,
        attributes: Attributes,
        position: usize,
    },
    Text {
        content: String,
        position: usize,
    },
}

impl Token {
    pub fn position(&self) -> usize {
        match self {
            Token::StartTag { position, .. }
            | Token::EndTag { position, .. }
            | Token::SelfClosingTag { position, .. }
            | Token::Text { position, .. } => *position,
        }
    }

    /// Tag name, or `None` for text.
    pub fn name(&self) -> Option<&str> {
        match self {
            Token::StartTag { name, .. }
            | Token::EndTag { name, .. }
            | Token::SelfClosingTag { name, .. } => Some(name),
            Token::Text { .. } => None,
        }
    }
}

/// Split a tag body into its name and the raw attribute section.
fn split_tag(body: &str) -> (&str, &str) {
    let body = body.trim();
    let parsed: IResult<&str, &str> = take_till1(|c: char| c.is_whitespace())(body);
    match parsed {
        Ok((rest, name)) => (name, rest.trim_start()),
        Err(_) => ("", ""),
    }
}

/// Scan cleaned source into tokens in one forward pass.
///
/// Fails only when a `<` has no closing `>`.
pub fn tokenize(clean: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < clean.len() {
        let rest = &clean[pos..];

        if rest.starts_with('<') {
            let close = rest
                .find('>')
                .ok_or(ParseError::UnclosedTag { offset: pos })?;
            let body = &rest[1..close];
            tokens.push(tag_token(body, pos));
            pos += close + 1;
        } else {
            let run_len = rest.find('<').unwrap_or(rest.len());
            let content = rest[..run_len].trim();
            if !content.is_empty() {
                tokens.push(Token::Text {
                    content: content.to_string(),
                    position: pos,
                });
            }
            pos += run_len;
        }
    }

    Ok(tokens)
}

fn tag_token(body: &str, position: usize) -> Token {
    if let Some(name) = body.strip_prefix('/') {
        return Token::EndTag {
            name: name.trim().to_string(),
            position,
        };
    }

    if let Some(inner) = body.trim_end().strip_suffix('/') {
        let (name, raw_attributes) = split_tag(inner);
        return Token::SelfClosingTag {
            name: name.to_string(),
            attributes: parse_attributes(raw_attributes),
            position,
        };
    }

    let (name, raw_attributes) = split_tag(body);
    Token::StartTag {
        name: name.to_string(),
        attributes: parse_attributes(raw_attributes),
        position,
    }
}
