//! Cross-backend checks on parsed icons.

use iconforge_codegen::{generator_for, ComponentMeta, GenerationConfig, RuntimeGlue, Target};
use iconforge_parser::parse;

const HOME: &str = r#"<svg viewBox="0 0 24 24"><circle cx="12" cy="12" r="10" fill="black" stroke="white"/></svg>"#;

#[test]
fn test_every_backend_declares_component_with_size_and_color() {
    let doc = parse(HOME).unwrap();
    let meta = ComponentMeta::new("HomeIcon");

    for target in Target::ALL {
        let code = generator_for(target).unwrap().emit(&doc, &meta).unwrap();

        assert!(code.contains("HomeIcon") || target == Target::Svelte, "{target}: no component name");
        assert!(code.contains("size"), "{target}: no size prop");
        assert!(code.contains("color"), "{target}: no color prop");
        assert!(code.contains("circle"), "{target}: circle missing");
        assert!(code.contains("0 0 24 24"), "{target}: viewBox missing");
        assert!(!code.contains("black"), "{target}: literal fill leaked");
        assert!(!code.contains("white"), "{target}: literal stroke leaked");
    }
}

#[test]
fn test_circle_attributes_per_backend() {
    let doc = parse(HOME).unwrap();
    let meta = ComponentMeta::new("HomeIcon");
    let emit = |target| generator_for(target).unwrap().emit(&doc, &meta).unwrap();

    assert!(emit(Target::React).contains("<circle cx={12} cy={12} r={10} />"));
    assert!(emit(Target::Vue).contains("h('circle', { cx: 12, cy: 12, r: 10 })"));
    assert!(emit(Target::Svelte).contains("<circle cx=\"12\" cy=\"12\" r=\"10\" />"));
    assert!(emit(Target::WebComponent).contains("<circle cx=\"12\" cy=\"12\" r=\"10\" />"));
}

#[test]
fn test_empty_document_still_emits_component() {
    let doc = parse("<svg></svg>").unwrap();
    assert!(doc.is_empty());

    for target in Target::ALL {
        let code = generator_for(target)
            .unwrap()
            .emit(&doc, &ComponentMeta::new("Blank"))
            .unwrap();
        assert!(!code.is_empty(), "{target}");
        assert!(code.contains("svg"), "{target}");
    }
}

#[test]
fn test_emission_leaves_document_untouched() {
    let doc = parse(HOME).unwrap();
    let before = doc.clone();
    for target in Target::ALL {
        generator_for(target)
            .unwrap()
            .emit(&doc, &ComponentMeta::new("HomeIcon"))
            .unwrap();
    }
    assert_eq!(doc, before);
}

#[test]
fn test_generate_from_config() {
    let mut config = GenerationConfig::default();
    config.naming.suffix = "Icon".to_string();
    config.typescript = false;
    config.features.dts = true;
    config.features.animation = true;

    let doc = parse(HOME).unwrap();
    let meta = ComponentMeta::for_icon(&config, "home", &doc).unwrap();

    let mut paths = Vec::new();
    for target in Target::ALL {
        let files = generator_for(target)
            .unwrap()
            .generate(&doc, &meta, config.emit_declarations())
            .unwrap();
        paths.extend(files.into_iter().map(|f| format!("{}/{}", f.target.unwrap(), f.path)));
    }

    assert_eq!(
        paths,
        [
            "react/HomeIcon.jsx",
            "react/HomeIcon.d.ts",
            "vue/HomeIcon.js",
            "vue/HomeIcon.d.ts",
            "svelte/HomeIcon.svelte",
            "web-component/HomeIcon.js",
            "web-component/HomeIcon.d.ts",
        ]
    );

    let glue = RuntimeGlue::render(&config).unwrap().unwrap();
    assert!(glue.stylesheet.contains(".icon-spin"));
    assert_eq!(glue.theme_file, "theme.js");
}
