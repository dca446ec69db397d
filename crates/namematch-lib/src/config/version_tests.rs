use super::{BuildConfiguration, Version};
use crate::Error;

#[test]
fn parse_and_display() {
    let version = Version::parse("5.10.1").unwrap();
    assert_eq!(version.components(), &[5, 10, 1]);
    insta::assert_snapshot!(version.to_string(), @"5.10.1");
}

#[test]
fn missing_components_compare_as_zero() {
    assert_eq!(Version::parse("5.9").unwrap(), Version::parse("5.9.0").unwrap());
    assert!(Version::parse("5.10").unwrap() > Version::parse("5.9").unwrap());
    assert!(Version::parse("6").unwrap() > Version::parse("5.99.99").unwrap());
}

#[test]
fn rejects_malformed_versions() {
    for text in ["", "5.", "five", "5..9", "-1"] {
        let err = Version::parse(text).unwrap_err();
        assert!(matches!(err, Error::InvalidVersion(ref t) if t == text), "{text}");
    }
}

#[test]
fn default_configuration() {
    let config = BuildConfiguration::default();
    assert!(config.custom_conditions.is_empty());
    assert_eq!(config.language_version, Version::new([6, 0]));
    assert_eq!(config.target_os, None);
}

#[test]
fn configuration_from_json() {
    let config = BuildConfiguration::from_json(
        r#"{
            "customConditions": ["DEBUG", "BETA"],
            "targetOs": "iOS",
            "languageVersion": "5.9"
        }"#,
    )
    .unwrap();

    let conditions: Vec<&str> = config.custom_conditions.iter().map(String::as_str).collect();
    assert_eq!(conditions, ["DEBUG", "BETA"]);
    assert_eq!(config.target_os.as_deref(), Some("iOS"));
    assert_eq!(config.language_version, Version::new([5, 9]));
    assert_eq!(config.compiler_version, Version::default());
}

#[test]
fn configuration_json_round_trip_keeps_camel_case() {
    let config = BuildConfiguration::new()
        .with_condition("DEBUG")
        .with_target_arch("arm64");
    let json = config.to_json().unwrap();
    insta::assert_snapshot!(json, @r#"{"customConditions":["DEBUG"],"importableModules":[],"targetOs":null,"targetArch":"arm64","targetEnvironment":null,"languageVersion":"6.0","compilerVersion":"6.0"}"#);
    assert_eq!(BuildConfiguration::from_json(&json).unwrap(), config);
}

#[test]
fn configuration_rejects_bad_version() {
    let err = BuildConfiguration::from_json(r#"{"languageVersion": "x"}"#).unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration(_)));
    let message = err.to_string();
    assert!(message.starts_with("invalid build configuration: invalid version `x`"), "{message}");
}

#[test]
fn configuration_rejects_unknown_shape() {
    let err = BuildConfiguration::from_json(r#"{"customConditions": "DEBUG"}"#).unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration(_)));
}
