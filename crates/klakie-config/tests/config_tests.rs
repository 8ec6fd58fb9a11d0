use std::fs;

use klakie_config::{ConfigError, ConfigManager, InvoiceConfig};
use tempfile::tempdir;

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("invoice_config.json"));

    let cfg = manager.load().expect("load defaults");

    assert_eq!(cfg, InvoiceConfig::default());
    assert_eq!(cfg.tax_percent, 2.0);
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().join("nested")).expect("manager");

    let cfg = InvoiceConfig {
        name: "Juan Dela Cruz".into(),
        bank_name: "BPI".into(),
        hourly_rate: 500.0,
        tax_percent: 12.0,
        ..InvoiceConfig::default()
    };

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
    assert!(!manager.config_path().with_extension("json.tmp").exists());
}

#[test]
fn reads_camel_case_record_with_missing_fields() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("invoice_config.json");
    fs::write(&path, r#"{ "name": "Ana", "hourlyRate": 450, "taxPercent": 8 }"#)
        .expect("write fixture");

    let cfg = ConfigManager::new(path).load().expect("load config");

    assert_eq!(cfg.name, "Ana");
    assert_eq!(cfg.hourly_rate, 450.0);
    assert_eq!(cfg.tax_percent, 8.0);
    assert!(cfg.bank_account.is_empty());
}

#[test]
fn corrupt_file_reports_serialization_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("invoice_config.json");
    fs::write(&path, "{ not json").expect("write fixture");

    let err = ConfigManager::new(path).load().expect_err("corrupt config");

    assert!(matches!(err, ConfigError::Serde { .. }), "unexpected error: {err}");
}

#[test]
fn save_refuses_invalid_values() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("invoice_config.json"));
    let cfg = InvoiceConfig {
        tax_percent: -5.0,
        ..InvoiceConfig::default()
    };

    let err = manager.save(&cfg).expect_err("negative tax");

    assert!(matches!(err, ConfigError::InvalidValue { field: "taxPercent", .. }));
    assert!(!manager.config_path().exists());
}
