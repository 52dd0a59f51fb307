//! Tree types for parsed SVG documents.
//!
//! The tree is built once per icon and then shared read-only with every
//! generator, so nothing here exposes interior mutability.

use crate::types::AttributeValue;
use crate::vocabulary;
use indexmap::IndexMap;
use rustc_hash::FxHasher;
use smallvec::SmallVec;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Attribute map in source order. Keys are canonical names.
pub type Attributes = IndexMap<String, AttributeValue>;

/// A single markup element.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    pub tag: String,
    pub attributes: Attributes,
    pub children: Vec<Element>,
    pub text_content: Option<String>,
}

impl Element {
    /// Create an element with no attributes, children or text.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Add an attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Add a child element.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Set the text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text_content = Some(text.into());
        self
    }

    /// Get an attribute value.
    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Text content, if present and non-empty.
    pub fn text(&self) -> Option<&str> {
        self.text_content.as_deref().filter(|t| !t.is_empty())
    }

    pub fn is_void(&self) -> bool {
        vocabulary::is_void_element(&self.tag)
    }

    /// Number of elements in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Element::subtree_len).sum::<usize>()
    }
}

/// Root of a parsed icon: the `<svg>` attributes and its children.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedDocument {
    pub attributes: Attributes,
    pub children: Vec<Element>,
    /// Original, unprocessed source text.
    pub raw_content: String,
}

impl ParsedDocument {
    /// The root `viewBox`, if present.
    pub fn view_box(&self) -> Option<String> {
        self.attributes.get("viewBox").map(ToString::to_string)
    }

    /// Get a root attribute value.
    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// True when the root has no child elements.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of elements below the root.
    pub fn element_count(&self) -> usize {
        self.children.iter().map(Element::subtree_len).sum()
    }

    /// Hash of the raw source, stable within one build of the crate.
    pub fn content_hash(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.raw_content.hash(&mut hasher);
        hasher.finish()
    }
}

/// One step of an [`ElementPath`]: a tag and its index among its siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    pub tag: String,
    pub index: usize,
}

/// Location of an element below the root, rendered as `svg/g[0]/circle[1]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ElementPath(pub SmallVec<[PathSegment; 8]>);

impl ElementPath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of the child at `index` with the given tag.
    pub fn child(&self, tag: &str, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment {
            tag: tag.to_string(),
            index,
        });
        Self(segments)
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for ElementPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("svg")?;
        for segment in &self.0 {
            write!(f, "/{}[{}]", segment.tag, segment.index)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_builders() {
        let circle = Element::new("circle")
            .with_attribute("cx", 12.0)
            .with_attribute("fill", "none");

        assert_eq!(circle.attribute("cx"), Some(&AttributeValue::Number(12.0)));
        assert!(circle.is_void());
        assert!(!circle.has_children());

        let group = Element::new("g").with_child(circle).with_text("");
        assert_eq!(group.subtree_len(), 2);
        assert_eq!(group.text(), None);
    }

    #[test]
    fn test_attribute_order_is_insertion_order() {
        let el = Element::new("rect")
            .with_attribute("y", 1.0)
            .with_attribute("x", 2.0)
            .with_attribute("width", 3.0);
        let keys: Vec<_> = el.attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, ["y", "x", "width"]);
    }

    #[test]
    fn test_document_helpers() {
        let mut doc = ParsedDocument {
            raw_content: "<svg/>".to_string(),
            ..Default::default()
        };
        assert!(doc.is_empty());
        assert_eq!(doc.view_box(), None);

        doc.attributes
            .insert("viewBox".to_string(), AttributeValue::from("0 0 24 24"));
        doc.children
            .push(Element::new("g").with_child(Element::new("path")));
        assert_eq!(doc.view_box().as_deref(), Some("0 0 24 24"));
        assert_eq!(doc.element_count(), 2);
    }

    #[test]
    fn test_content_hash_tracks_source() {
        let a = ParsedDocument {
            raw_content: "<svg><circle/></svg>".to_string(),
            ..Default::default()
        };
        let b = a.clone();
        let c = ParsedDocument {
            raw_content: "<svg><rect/></svg>".to_string(),
            ..Default::default()
        };
        assert_eq!(a.content_hash(), b.content_hash());
        assert_ne!(a.content_hash(), c.content_hash());
    }

    #[test]
    fn test_element_path_display() {
        let path = ElementPath::root().child("g", 0).child("circle", 1);
        assert_eq!(path.to_string(), "svg/g[0]/circle[1]");
        assert_eq!(path.depth(), 2);
        assert_eq!(ElementPath::root().to_string(), "svg");
    }
}
