use std::io::Write;

use overlay::{
    DEFAULT_NAME, DEFAULT_PORT, DEFAULT_RATE, OverlayError, ServerConfig, ServerPatch, load_layers,
    parse_patch,
};
use tempfile::NamedTempFile;

fn patch_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(json.as_bytes()).expect("write patch");
    file
}

#[test]
fn empty_config_has_no_explicit_fields() {
    let config = ServerConfig::default();
    assert!(config.explicit_fields().is_empty());

    let encoded = serde_json::to_value(config.to_patch()).expect("encode");
    assert_eq!(encoded, serde_json::json!({}));
}

#[test]
fn later_layers_win() {
    let base = parse_patch(r#"{ "name": "api", "port": 9000 }"#).expect("parse base");
    let local = parse_patch(r#"{ "port": 9001, "tls": true }"#).expect("parse local");

    let config = ServerConfig::default().apply(&base).apply(&local);
    assert_eq!(config.name.value(), "api");
    assert_eq!(config.port.value(), 9001);
    assert!(config.tls.value());
    assert!(!config.limits.is_set());
    assert_eq!(config.explicit_fields(), ["name", "port", "tls"]);
}

#[test]
fn omitted_fields_leave_config_alone() {
    let config = ServerConfig::default().apply(&ServerPatch {
        port: Some(7000),
        ..ServerPatch::default()
    });
    let config = config.apply(&ServerPatch::default());
    assert_eq!(config.port.value(), 7000);
    assert!(!config.name.is_set());
}

#[test]
fn defaults_fill_only_unset_fields() {
    let patch = parse_patch(r#"{ "port": 0, "tls": false }"#).expect("parse");
    let config = ServerConfig::default().apply(&patch).with_defaults();

    // explicit zero and false survive the fallback pass
    assert_eq!(config.port.value(), 0);
    assert!(!config.tls.value());
    assert_eq!(config.name.value(), DEFAULT_NAME);
    assert_eq!(config.limits.value().rate, DEFAULT_RATE);
}

#[test]
fn defaults_on_empty_config() {
    let config = ServerConfig::default().with_defaults();
    assert_eq!(config.port.value(), DEFAULT_PORT);
    assert_eq!(config.explicit_fields(), ["name", "port", "tls", "limits"]);
}

#[test]
fn empty_name_clears_earlier_layer() {
    let base = parse_patch(r#"{ "name": "api" }"#).expect("parse base");
    let reset = parse_patch(r#"{ "name": "" }"#).expect("parse reset");

    let config = ServerConfig::default().apply(&base).apply(&reset);
    assert!(!config.name.is_set());
    assert_eq!(config.with_defaults().name.value(), DEFAULT_NAME);
}

#[test]
fn limits_round_trip_through_patch() {
    let patch = parse_patch(r#"{ "limits": { "rate": 2.5, "per_route": { "/login": 5 } } }"#)
        .expect("parse");
    let config = ServerConfig::default().apply(&patch);
    assert!(config.limits.is_set());

    let encoded = serde_json::to_value(config.to_patch()).expect("encode");
    assert_eq!(
        encoded,
        serde_json::json!({ "limits": { "rate": 2.5, "per_route": { "/login": 5 } } })
    );
}

#[test]
fn load_layers_from_files() {
    let base = patch_file(r#"{ "name": "api", "port": 9000 }"#);
    let local = patch_file(r#"{ "port": 9100 }"#);

    let config = load_layers(&[base.path(), local.path()]).expect("load layers");
    assert_eq!(config.name.value(), "api");
    assert_eq!(config.port.value(), 9100);
}

#[test]
fn load_layers_reports_bad_json() {
    let bad = patch_file(r#"{ "port": "not a number" }"#);
    let err = load_layers(&[bad.path()]).expect_err("bad json must fail");
    assert!(matches!(err, OverlayError::Json(_)));
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(matches!(
        parse_patch(r#"{ "prot": 80 }"#),
        Err(OverlayError::Json(_))
    ));
}

#[test]
fn load_layers_reports_missing_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let missing = dir.path().join("missing.json");
    let err = load_layers(&[missing]).expect_err("missing file must fail");
    assert!(matches!(err, OverlayError::Io(_)));
    assert!(err.to_string().starts_with("read failed"));
}
