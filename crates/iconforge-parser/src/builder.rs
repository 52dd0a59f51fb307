//! Tree building from a token stream.
//!
//! Recursive descent over the token slice with a single forward cursor.
//! End tags are matched by name against the element currently being filled;
//! there is no open-element stack, so malformed nesting is absorbed rather
//! than reported. Nesting is capped at [`MAX_NESTING_DEPTH`] so hostile
//! input fails the icon instead of overflowing the stack.

use crate::lexer::Token;
use iconforge_core::{Attributes, Element, ParseError};
use tracing::trace;

/// Deepest element nesting accepted, counting the root `<svg>` as level 1.
pub const MAX_NESTING_DEPTH: usize = 512;

/// Build the element tree rooted at the first token, which must be `<svg>`.
pub fn build(tokens: &[Token]) -> Result<Element, ParseError> {
    let mut builder = TreeBuilder::new(tokens);
    builder.build_root()
}

/// Cursor over the token list.
struct TreeBuilder<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl<'a> TreeBuilder<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Get current token, if any.
    fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Advance to next token.
    fn advance(&mut self) {
        self.pos += 1;
    }

    fn build_root(&mut self) -> Result<Element, ParseError> {
        let first = self.current().ok_or(ParseError::EmptyInput)?;

        let root = match first {
            Token::StartTag {
                name, attributes, ..
            } if name == "svg" => self.parse_element(name, attributes, false)?,
            Token::SelfClosingTag {
                name, attributes, ..
            } if name == "svg" => self.parse_element(name, attributes, true)?,
            other => {
                let found = other.name().unwrap_or("text");
                return Err(ParseError::RootElement {
                    found: found.to_string(),
                });
            }
        };

        if self.pos < self.tokens.len() {
            trace!(
                ignored = self.tokens.len() - self.pos,
                "ignoring tokens after root element"
            );
        }

        Ok(root)
    }

    /// Parse the element opened by the current token.
    fn parse_element(
        &mut self,
        name: &'a str,
        attributes: &'a Attributes,
        self_closing: bool,
    ) -> Result<Element, ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            let offset = self.current().map_or(0, Token::position);
            return Err(ParseError::NestingTooDeep {
                depth: MAX_NESTING_DEPTH,
                offset,
            });
        }
        self.advance();

        let mut element = Element {
            tag: name.to_string(),
            attributes: attributes.clone(),
            ..Default::default()
        };

        if self_closing || element.is_void() {
            return Ok(element);
        }

        self.depth += 1;
        let mut text: Vec<&str> = Vec::new();

        while let Some(next) = self.current() {
            match next {
                Token::Text { content, .. } => {
                    text.push(content);
                    self.advance();
                }
                Token::StartTag {
                    name: child_name,
                    attributes: child_attributes,
                    ..
                } => {
                    let child = self.parse_element(child_name, child_attributes, false)?;
                    element.children.push(child);
                }
                Token::SelfClosingTag {
                    name: child_name,
                    attributes: child_attributes,
                    ..
                } => {
                    let child = self.parse_element(child_name, child_attributes, true)?;
                    element.children.push(child);
                }
                Token::EndTag {
                    name: end_name,
                    position,
                } => {
                    self.advance();
                    if end_name == name {
                        break;
                    }
                    trace!(
                        open = %name,
                        end = %end_name,
                        position,
                        "ignoring unmatched end tag"
                    );
                }
            }
        }
        self.depth -= 1;

        if !text.is_empty() {
            element.text_content = Some(text.join(" "));
        }

        Ok(element)
    }
}
