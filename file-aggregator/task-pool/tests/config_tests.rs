// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use file_aggregator_core::ConfigError;
use file_aggregator_task_pool::{AggregatorConfig, ConfigFileError};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_liveness_load_full_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "workers": 3, "timeout_ms": 1500 }"#).unwrap();

    let config = AggregatorConfig::load(&path).unwrap();

    assert_eq!(
        config,
        AggregatorConfig {
            workers: 3,
            timeout_ms: 1500
        }
    );
    let pool = config.pool_config().unwrap();
    assert_eq!(pool.workers(), 3);
    assert_eq!(pool.timeout(), Duration::from_millis(1500));
}

#[test]
fn test_liveness_missing_fields_use_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "workers": 8 }"#).unwrap();

    let config = AggregatorConfig::load(&path).unwrap();

    assert_eq!(config.workers, 8);
    assert_eq!(config.timeout_ms, AggregatorConfig::default().timeout_ms);
}

#[test]
fn test_liveness_overrides_take_precedence() {
    let config = AggregatorConfig::default().with_overrides(Some(2), None);

    assert_eq!(config.workers, 2);
    assert_eq!(config.timeout_ms, 2_000);
}

#[test]
fn test_safety_zero_workers_rejected() {
    let config = AggregatorConfig::default().with_overrides(Some(0), None);

    assert_eq!(config.pool_config(), Err(ConfigError::ZeroWorkers));
}

#[test]
fn test_safety_malformed_config_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ workers: ").unwrap();

    let result = AggregatorConfig::load(&path);

    assert!(matches!(result, Err(ConfigFileError::Parse { .. })));
}

#[test]
fn test_safety_missing_config_is_reported() {
    let dir = TempDir::new().unwrap();

    let result = AggregatorConfig::load(&dir.path().join("absent.json"));

    assert!(matches!(result, Err(ConfigFileError::Read { .. })));
}

#[test]
fn test_liveness_resolve_without_path_uses_defaults() {
    assert_eq!(AggregatorConfig::resolve(None), AggregatorConfig::default());
}

#[test]
fn test_liveness_resolve_missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();

    let config = AggregatorConfig::resolve(Some(dir.path().join("absent.json").as_path()));

    assert_eq!(config, AggregatorConfig::default());
    assert_eq!(config.workers, 4);
    assert_eq!(config.timeout_ms, 2_000);
}

#[test]
fn test_liveness_resolve_malformed_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "not json").unwrap();

    let config = AggregatorConfig::resolve(Some(path.as_path()));

    assert_eq!(config, AggregatorConfig::default());
}

#[test]
fn test_liveness_resolve_reads_existing_file_then_overrides() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "workers": 6, "timeout_ms": 900 }"#).unwrap();

    let config = AggregatorConfig::resolve(Some(path.as_path())).with_overrides(None, Some(300));

    assert_eq!(
        config,
        AggregatorConfig {
            workers: 6,
            timeout_ms: 300
        }
    );
}
