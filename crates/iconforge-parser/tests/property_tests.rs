//! Property tests for the parser front end.

use iconforge_parser::{parse, preprocess, tokenize};
use proptest::prelude::*;

fn shape() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["circle", "rect", "path", "line", "ellipse"]),
        0u32..100,
        0u32..100,
    )
        .prop_map(|(tag, a, b)| format!(r#"<{} x="{}" cy="{}" d="M{} {}"/>"#, tag, a, b, a, b))
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(shape(), 0..20).prop_map(|shapes| {
        format!(
            r#"<svg viewBox="0 0 24 24"><g>{}</g></svg>"#,
            shapes.concat()
        )
    })
}

proptest! {
    #[test]
    fn parse_is_deterministic(source in document()) {
        let first = parse(&source).unwrap();
        let second = parse(&source).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn generated_shapes_are_all_children(shapes in prop::collection::vec(shape(), 0..20)) {
        let source = format!("<svg>{}</svg>", shapes.concat());
        let doc = parse(&source).unwrap();
        prop_assert_eq!(doc.children.len(), shapes.len());
    }

    #[test]
    fn preprocess_never_panics(input in ".*") {
        let cleaned = preprocess(&input);
        prop_assert_eq!(cleaned.trim(), cleaned.as_str());
    }

    #[test]
    fn tokenize_never_panics(input in ".*") {
        let _ = tokenize(&preprocess(&input));
    }
}
