use crate::config::{CompilerOptions, parse_config, resolve_checker_options};
use crate::tracing_config::LogFormat;
use gx_checker::CheckerOptions;

#[test]
fn test_empty_config_uses_defaults() {
    let config = parse_config("{}").unwrap();
    assert!(config.compiler_options.is_none());
    assert!(config.include.is_none());
    assert_eq!(config.checker_options(), CheckerOptions::default());
}

#[test]
fn test_compiler_options_are_camel_case() {
    let config = parse_config(
        r#"{
            "compilerOptions": { "strictConditions": false },
            "include": ["triggers/**/*.galaxy"],
            "exclude": ["triggers/generated"]
        }"#,
    )
    .unwrap();
    let options = config.compiler_options.as_ref().unwrap();
    assert_eq!(options.strict_conditions, Some(false));
    assert_eq!(options.report_duplicate_declarations, None);
    assert_eq!(
        config.include.as_deref(),
        Some(&["triggers/**/*.galaxy".to_string()][..])
    );

    let resolved = config.checker_options();
    assert!(!resolved.strict_conditions);
    assert!(resolved.report_duplicate_declarations);
}

#[test]
fn test_boolean_options_accept_strings() {
    let config = parse_config(
        r#"{"compilerOptions": {"strictConditions": "off", "reportDuplicateDeclarations": "yes"}}"#,
    )
    .unwrap();
    let options = config.compiler_options.unwrap();
    assert_eq!(options.strict_conditions, Some(false));
    assert_eq!(options.report_duplicate_declarations, Some(true));
}

#[test]
fn test_invalid_boolean_string_is_an_error() {
    let err = parse_config(r#"{"compilerOptions": {"strictConditions": "maybe"}}"#).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("invalid boolean value: 'maybe'"), "{chain}");
}

#[test]
fn test_malformed_json_is_an_error() {
    assert!(parse_config("{ compilerOptions: ").is_err());
}

#[test]
fn test_resolve_without_options() {
    assert_eq!(resolve_checker_options(None), CheckerOptions::default());
    let options = CompilerOptions {
        strict_conditions: None,
        report_duplicate_declarations: Some(false),
    };
    let resolved = resolve_checker_options(Some(&options));
    assert!(resolved.strict_conditions);
    assert!(!resolved.report_duplicate_declarations);
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
    assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
    assert_eq!(LogFormat::parse("text"), LogFormat::Text);
    assert_eq!(LogFormat::parse(""), LogFormat::Text);
}
