use super::*;

#[test]
fn default_matches_page_markup() {
    let config = Config::default();
    assert_eq!(config.storage_key, "pg-theme");
    assert_eq!(config.toggle_id, "theme-toggle");
    assert_eq!(config.toggle_dark_class, "is-dark");
    assert_eq!(config.default_theme, Theme::Light);
    assert!(config.validate().is_ok());
}

#[test]
fn empty_object_yields_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = Config::from_json(r#"{"storage_key":"site-theme","default_theme":"dark"}"#).unwrap();
    assert_eq!(config.storage_key, "site-theme");
    assert_eq!(config.default_theme, Theme::Dark);
    assert_eq!(config.active_class, "active");
}

#[test]
fn unknown_field_is_rejected() {
    let err = Config::from_json(r#"{"storage_kee":"x"}"#).unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
}

#[test]
fn malformed_json_is_rejected() {
    assert!(matches!(Config::from_json("{"), Err(Error::ConfigParse(_))));
}

#[test]
fn empty_storage_key_is_rejected() {
    let err = Config::from_json(r#"{"storage_key":""}"#).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn class_with_css_syntax_is_rejected() {
    let err = Config::from_json(r#"{"active_class":"is active"}"#).unwrap_err();
    assert!(matches!(err, Error::Config(msg) if msg.contains("active_class")));
    assert!(Config::from_json(r#"{"swatch_row_class":"row]"}"#).is_err());
    assert!(Config::from_json(r#"{"role_link_attribute":"1link"}"#).is_err());
}

#[test]
fn group_selector_combines_link_and_group() {
    let config = Config::default();
    assert_eq!(config.role_link_in_group("nav").to_css(), "[data-role-link][data-role-group=\"nav\"]");
    assert_eq!(config.swatch_row().to_css(), ".swatch-row");
    assert_eq!(config.swatch_trigger().to_css(), "[data-card-theme-trigger]");
}
