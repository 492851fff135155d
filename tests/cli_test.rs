//! Command-line parsing and the headless snapshot.

mod common;

use common::*;
use covidash::cli::{load_snapshot, parse_args, render_snapshot, version_string, ArgsError, CliCommand, USAGE};
use covidash::models::{IsoCode, Selection};

fn parse(list: &[&str]) -> Result<covidash::cli::CliArgs, ArgsError> {
    let mut all = vec!["covidash".to_string()];
    all.extend(list.iter().map(|s| s.to_string()));
    parse_args(all.into_iter())
}

#[test]
fn test_snapshot_flag_variants() {
    assert_eq!(parse(&["--snapshot"]).unwrap().command, CliCommand::Snapshot(Selection::Global));
    assert_eq!(
        parse(&["--snapshot", "br", "--days", "10"]).unwrap().command,
        CliCommand::Snapshot(Selection::Country(IsoCode::parse("BR").unwrap()))
    );
    // A following flag is not taken as the selection
    let args = parse(&["--snapshot", "--days", "10"]).unwrap();
    assert_eq!(args.command, CliCommand::Snapshot(Selection::Global));
    assert_eq!(args.days, Some(10));
}

#[test]
fn test_bad_arguments() {
    assert_eq!(parse(&["--days"]), Err(ArgsError::MissingValue("--days")));
    assert_eq!(
        parse(&["--days", "many"]),
        Err(ArgsError::InvalidValue {
            flag: "--days",
            value: "many".to_string()
        })
    );
    assert_eq!(parse(&["--frobnicate"]), Err(ArgsError::Unknown("--frobnicate".to_string())));
}

#[test]
fn test_usage_and_version() {
    assert!(USAGE.contains("--snapshot"));
    assert!(USAGE.contains("--api-url"));
    assert_eq!(parse(&["-V"]).unwrap().command, CliCommand::Version);
    assert_eq!(parse(&["--help"]).unwrap().command, CliCommand::Help);
    assert!(version_string().starts_with("covidash "));
}

#[tokio::test]
async fn test_global_snapshot() {
    let api = MockApi::new()
        .with_countries(&[peru(), brazil(), chile()])
        .with_global_history(1000);

    let state = load_snapshot(api.client(), Selection::Global, 30).await.unwrap();
    let text = render_snapshot(&state);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "COVID-19 · Worldwide");
    assert!(text.contains("4,000"));
    let brazil_line = lines.iter().position(|l| l.contains("Brazil")).unwrap();
    let chile_line = lines.iter().position(|l| l.contains("Chile")).unwrap();
    assert!(brazil_line < chile_line);
    assert!(lines[brazil_line].trim_start().starts_with("1. Brazil"));
    assert!(lines[brazil_line].ends_with("3,000,000"));
}

#[tokio::test]
async fn test_snapshot_unknown_country_fails() {
    let api = MockApi::new().with_countries(&[peru()]);
    let result = load_snapshot(api.client(), Selection::Country(IsoCode::parse("ZZ").unwrap()), 30).await;
    assert!(result.is_err());
    assert_eq!(api.http().request_count(&MockApi::url("/countries/")), 0);
}

#[tokio::test]
async fn test_snapshot_list_failure_propagates() {
    let api = MockApi::new().with_status("/countries", 500, "down");
    let err = load_snapshot(api.client(), Selection::Global, 30).await.unwrap_err();
    assert!(err.is_retryable());
}
