//! Structural checks over a parsed document.
//!
//! Validation never fails; everything it finds is reported as a warning so
//! that code generation can proceed.

use crate::builder::MAX_NESTING_DEPTH;
use iconforge_core::vocabulary::is_recognized_element;
use iconforge_core::{Element, ElementPath, ParsedDocument};

/// Outcome of [`validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    /// Conditions a caller may treat as hard failures. Parsed input never
    /// raises these; only hand-built trees nested past
    /// [`MAX_NESTING_DEPTH`] do.
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Walk the document and collect structural warnings.
pub fn validate(doc: &ParsedDocument) -> ValidationReport {
    let mut warnings = Vec::new();
    let mut errors = Vec::new();

    if doc.attribute("viewBox").is_none() {
        warnings.push("Missing viewBox attribute on root <svg>".to_string());
    }

    let root = ElementPath::root();
    for (index, child) in doc.children.iter().enumerate() {
        check_element(child, &root.child(&child.tag, index), &mut warnings, &mut errors);
    }

    ValidationReport {
        valid: errors.is_empty(),
        errors,
        warnings,
    }
}

fn check_element(element: &Element, path: &ElementPath, warnings: &mut Vec<String>, errors: &mut Vec<String>) {
    // The root <svg> is level 1, so a path of MAX_NESTING_DEPTH segments is one level past the cap.
    if path.depth() >= MAX_NESTING_DEPTH {
        errors.push(format!(
            "Element <{}> is nested deeper than {} levels; its subtree was not checked",
            element.tag, MAX_NESTING_DEPTH
        ));
        return;
    }

    if !is_recognized_element(&element.tag) {
        warnings.push(format!(
            "Unrecognized element <{}> at {}",
            element.tag, path
        ));
    }

    if element.has_children() && element.text().is_some() {
        warnings.push(format!(
            "Element <{}> at {} has both children and text; only the children are rendered",
            element.tag, path
        ));
    }

    for (index, child) in element.children.iter().enumerate() {
        check_element(child, &path.child(&child.tag, index), warnings, errors);
    }
}
