//! Config layering: file, environment and command-line flags.

use std::fs;

use covidash::cli::parse_args;
use covidash::config::{DashConfig, ENV_API_URL, ENV_LOG, ENV_TIMELINE_DAYS, ENV_TIMEOUT_SECS};
use covidash::error::ConfigError;
use serial_test::serial;
use tempfile::TempDir;

fn clear_env() {
    for key in [ENV_API_URL, ENV_TIMEOUT_SECS, ENV_TIMELINE_DAYS, ENV_LOG] {
        std::env::remove_var(key);
    }
}

fn args(list: &[&str]) -> Vec<String> {
    std::iter::once("covidash")
        .chain(list.iter().copied())
        .map(String::from)
        .collect()
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"timeline_days": 60, "log_level": "debug"}"#).unwrap();

    let config = DashConfig::from_file(&path).unwrap();
    assert_eq!(config.timeline_days, 60);
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.api_base_url, DashConfig::default().api_base_url);
    assert_eq!(config.request_timeout_secs, 15);
}

#[test]
fn test_missing_file_is_default() {
    let dir = TempDir::new().unwrap();
    let config = DashConfig::from_file(&dir.path().join("absent.json")).unwrap();
    assert_eq!(config, DashConfig::default());
}

#[test]
fn test_broken_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();

    let err = DashConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.json"));
}

#[test]
fn test_round_trips_through_serde() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    let config = DashConfig::new()
        .with_timeline_days(7)
        .with_log_file(dir.path().join("dash.log"));
    fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

    assert_eq!(DashConfig::from_file(&path).unwrap(), config);
}

#[test]
#[serial]
fn test_env_overrides_file_values() {
    clear_env();
    std::env::set_var(ENV_API_URL, "http://localhost:8080");
    std::env::set_var(ENV_TIMELINE_DAYS, "14");
    std::env::set_var(ENV_TIMEOUT_SECS, "  ");

    let config = DashConfig::new().with_timeline_days(60).apply_env().unwrap();
    clear_env();

    assert_eq!(config.api_base_url, "http://localhost:8080");
    assert_eq!(config.timeline_days, 14);
    // Blank variables are ignored
    assert_eq!(config.request_timeout_secs, 15);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_env_rejects_non_numeric_days() {
    clear_env();
    std::env::set_var(ENV_TIMELINE_DAYS, "a week");

    let result = DashConfig::new().apply_env();
    clear_env();

    match result {
        Err(ConfigError::InvalidValue { key, .. }) => assert_eq!(key, ENV_TIMELINE_DAYS),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
#[serial]
fn test_flags_win_over_env() {
    clear_env();
    std::env::set_var(ENV_TIMELINE_DAYS, "14");
    let from_env = DashConfig::new().apply_env().unwrap();
    clear_env();

    let cli = parse_args(args(&["--days", "90", "--api-url", "https://example.org"]).into_iter()).unwrap();
    let config = cli.apply_to(from_env);
    assert_eq!(config.timeline_days, 90);
    assert_eq!(config.api_base_url, "https://example.org");
}

#[test]
fn test_validate_rejects_out_of_range_flags() {
    let cli = parse_args(args(&["--days", "5000"]).into_iter()).unwrap();
    assert!(cli.apply_to(DashConfig::default()).validate().is_err());
}
