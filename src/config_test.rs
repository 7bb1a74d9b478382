#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_config_matches_stock_markup() {
    let config = PageConfig::default();
    assert_eq!(config.storage_key, "ct-portfolio-theme");
    assert_eq!(config.nav_breakpoint_px, 768.0);
    assert_eq!(config.reveal_threshold, 0.2);
    assert_eq!(config.timings.invalid_clear_ms, 3000);
    assert_eq!(config.timings.sent_clear_ms, 4000);
    assert_eq!(config.selectors.nav_link, ".nav-links a");
    assert_eq!(config.selectors.submit_button, "button[type=\"submit\"]");
}

#[test]
fn empty_object_yields_defaults() {
    let config = PageConfig::from_json("{}").expect("empty object should parse");
    assert_eq!(config, PageConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let raw = r#"{ "nav_breakpoint_px": 900, "selectors": { "year": ".copyright-year" } }"#;
    let config = PageConfig::from_json(raw).expect("override should parse");
    assert_eq!(config.nav_breakpoint_px, 900.0);
    assert_eq!(config.selectors.year, ".copyright-year");
    assert_eq!(config.selectors.nav_toggle, ".nav-toggle");
    assert_eq!(config.storage_key, "ct-portfolio-theme");
}

#[test]
fn malformed_json_is_an_error() {
    let err = PageConfig::from_json("{ not json").expect_err("should fail");
    assert!(err.to_string().starts_with("invalid page config"));
}
