use iconforge::{compile_icon, Batch, FileKind, GenerationConfig, IconError, IconSource, ParseError, Target};

const HOME: &str = r#"<svg viewBox="0 0 24 24"><circle cx="12" cy="12" r="10"/></svg>"#;
const CLOCK: &str = r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
  <circle cx="12" cy="12" r="10"/>
  <path d="M12 6v6l4 2"/>
</svg>"#;

fn all_targets() -> GenerationConfig {
    GenerationConfig {
        targets: Target::ALL.to_vec(),
        ..Default::default()
    }
}

#[test]
fn test_failures_are_isolated_per_icon() {
    let sources = vec![
        IconSource::new("home", HOME),
        IconSource::new("empty", "   "),
        IconSource::new("clock", CLOCK),
        IconSource::new("unclosed", "<svg><circle"),
        IconSource::new("div", "<div>x</div>"),
    ];

    let report = Batch::new(all_targets()).unwrap().run(&sources).unwrap();

    let names: Vec<_> = report.icons.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["home", "clock"]);
    assert!(!report.is_success());

    let failed: Vec<_> = report.failures.iter().filter_map(IconError::icon_name).collect();
    assert_eq!(failed, ["empty", "unclosed", "div"]);

    assert!(matches!(
        report.failures[0].root_cause(),
        IconError::Parse(ParseError::EmptyInput)
    ));
    assert!(matches!(
        report.failures[1].root_cause(),
        IconError::Parse(ParseError::UnclosedTag { offset: 5 })
    ));
    assert!(report.failures[1].to_string().contains("offset 5"));
    assert_eq!(report.failures[1].offset(), Some(5));
    assert!(matches!(
        report.failures[2].root_cause(),
        IconError::Parse(ParseError::RootElement { .. })
    ));
}

#[test]
fn test_deeply_nested_icon_fails_alone() {
    let deep = format!("<svg>{}</svg>", "<g>".repeat(5_000));
    let sources = [IconSource::new("deep", deep), IconSource::new("home", HOME)];

    let report = Batch::new(all_targets()).unwrap().run(&sources).unwrap();

    assert_eq!(report.icons.len(), 1);
    assert_eq!(report.icons[0].name, "home");
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].icon_name(), Some("deep"));
    assert!(matches!(
        report.failures[0].root_cause(),
        IconError::Parse(ParseError::NestingTooDeep { depth: 512, .. })
    ));
}

#[test]
fn test_large_batch_keeps_input_order() {
    let sources: Vec<IconSource> = (0..200)
        .map(|i| IconSource::new(format!("icon-{}", i), HOME))
        .collect();

    let report = Batch::new(all_targets()).unwrap().run(&sources).unwrap();

    assert!(report.is_success());
    assert_eq!(report.icons.len(), 200);
    for (i, icon) in report.icons.iter().enumerate() {
        assert_eq!(icon.component_name, format!("Icon{}", i));
        assert_eq!(icon.files.len(), 4);
    }
}

#[test]
fn test_runtime_glue_once_per_batch() {
    let mut config = all_targets();
    let sources = [IconSource::new("home", HOME), IconSource::new("clock", CLOCK)];

    let report = Batch::new(config.clone()).unwrap().run(&sources).unwrap();
    assert!(report.runtime.is_none());
    assert_eq!(report.files().len(), 8);

    config.features.theming = true;
    config.features.animation = true;
    let report = Batch::new(config).unwrap().run(&sources).unwrap();

    let runtime = report.runtime.as_ref().unwrap();
    assert!(runtime.stylesheet.contains("@keyframes icon-spin"));
    assert!(runtime.theme.contains("resolveIconColor"));

    let files = report.files();
    assert_eq!(files.len(), 10);
    assert_eq!(files.iter().filter(|f| f.kind == FileKind::Stylesheet).count(), 1);
    assert_eq!(files.iter().filter(|f| f.kind == FileKind::Theme).count(), 1);
}

#[test]
fn test_warnings_are_reported_not_fatal() {
    let report = Batch::new(all_targets())
        .unwrap()
        .run(&[IconSource::new("bare", "<svg><circle r=\"1\"/></svg>")])
        .unwrap();

    assert!(report.is_success());
    assert_eq!(report.warning_count(), 1);
    assert!(report.icons[0].warnings[0].contains("viewBox"));
}

#[test]
fn test_config_from_json_drives_output() {
    let config: GenerationConfig = serde_json::from_str(
        r#"{
            "targets": ["react", "web-component"],
            "typescript": false,
            "features": { "dts": true, "rtl": true },
            "naming": { "prefix": "Ui", "suffix": "Icon" }
        }"#,
    )
    .unwrap();

    let icon = compile_icon("clock", CLOCK, &config).unwrap();
    assert_eq!(icon.component_name, "UiClockIcon");

    let paths: Vec<_> = icon.files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(
        paths,
        ["UiClockIcon.jsx", "UiClockIcon.d.ts", "UiClockIcon.js", "UiClockIcon.d.ts"]
    );

    let react = &icon.files[0].content;
    assert!(react.contains("stroke={color}"));
    assert!(react.contains("strokeWidth={2}"));
    assert!(react.contains("className=\"icon icon-rtl\""));

    let element = &icon.files[2].content;
    assert!(element.contains("customElements.define('ui-clock-icon', UiClockIcon);"));
}

#[test]
fn test_invalid_name_fails_only_that_icon() {
    let report = Batch::new(all_targets())
        .unwrap()
        .run(&[IconSource::new("123", HOME), IconSource::new("home", HOME)])
        .unwrap();

    assert_eq!(report.icons.len(), 1);
    assert_eq!(report.failures.len(), 1);
    assert!(matches!(report.failures[0].root_cause(), IconError::Codegen(_)));
}
