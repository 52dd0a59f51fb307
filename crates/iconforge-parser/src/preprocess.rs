//! Source cleanup ahead of tokenizing.

use regex::Regex;
use std::sync::OnceLock;

struct Patterns {
    processing_instruction: Regex,
    doctype: Regex,
    comment: Regex,
    cdata: Regex,
    whitespace: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        processing_instruction: Regex::new(r"(?s)<\?.*?\?>").expect("valid processing instruction pattern"),
        doctype: Regex::new(r"(?i)<!DOCTYPE[^>]*>").expect("valid doctype pattern"),
        comment: Regex::new(r"(?s)<!--.*?-->").expect("valid comment pattern"),
        cdata: Regex::new(r"(?s)<!\[CDATA\[(.*?)\]\]>").expect("valid cdata pattern"),
        whitespace: Regex::new(r"\s+").expect("valid whitespace pattern"),
    })
}

/// Strip declarations, comments and CDATA wrappers, then collapse whitespace.
///
/// Removal order: XML declarations and other processing instructions,
/// DOCTYPE, comments, CDATA (keeping its inner text). Every whitespace run
/// becomes one space and the result is trimmed. Never fails.
pub fn preprocess(raw: &str) -> String {
    let p = patterns();
    let cleaned = p.processing_instruction.replace_all(raw, "");
    let cleaned = p.doctype.replace_all(&cleaned, "");
    let cleaned = p.comment.replace_all(&cleaned, "");
    let cleaned = p.cdata.replace_all(&cleaned, "$1");
    let cleaned = p.whitespace.replace_all(&cleaned, " ");
    cleaned.trim().to_string()
}
