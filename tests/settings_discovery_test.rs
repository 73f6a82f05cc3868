//! Settings found on disk drive resource resolution

use std::fs;
use tempfile::TempDir;
use wiquery::{EmissionDecider, ResourceReference, Settings};

#[test]
fn test_nearest_config_wins() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let nested = root.join("app").join("pages");
    fs::create_dir_all(&nested).unwrap();

    fs::write(root.join("wiquery.json"), r#"{ "minified_resources": true }"#).unwrap();
    let found = Settings::discover(&nested).unwrap();
    assert!(found.minified_resources);

    fs::write(
        root.join("app").join(".wiquery.json"),
        serde_json::to_string_pretty(&serde_json::json!({
            "auto_import_jquery_resource": false,
            "jquery_core_resource": {
                "kind": "javascript",
                "scope": "cdn",
                "name": "jquery-1.4.4.js"
            }
        }))
        .unwrap(),
    )
    .unwrap();
    let found = Settings::discover(&nested).unwrap();
    assert!(!found.auto_import_jquery_resource);
    assert!(!found.minified_resources);
    assert_eq!(
        EmissionDecider::new(found).jquery_core_reference(),
        ResourceReference::javascript("cdn", "jquery-1.4.4.js")
    );
}

#[test]
fn test_malformed_config_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".wiquery.json"), "{ not json").unwrap();

    let err = Settings::discover(temp_dir.path()).unwrap_err();
    assert!(err.to_string().contains(".wiquery.json"));
}

#[test]
fn test_saved_settings_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".wiquery.json");
    let settings = Settings {
        enable_resources_merging: true,
        ..Settings::default()
    };
    settings.save_to_file(&path).unwrap();
    assert_eq!(Settings::load_from_file(&path).unwrap(), settings);
}
