//! CLI parse tests.

use super::{resolve_policy, Cli, CliCommand};
use clap::Parser;
use refetch_core::config::RetryConfig;
use std::time::Duration;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_fetch_defaults() {
    match parse(&["refetch", "fetch", "id=1"]) {
        CliCommand::Fetch {
            params,
            attempts,
            wait_ms,
            flaky,
            json,
        } => {
            assert_eq!(params, vec!["id=1".to_string()]);
            assert!(attempts.is_none());
            assert!(wait_ms.is_none());
            assert_eq!(flaky, 0);
            assert!(!json);
        }
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_fetch_with_flags() {
    match parse(&[
        "refetch", "fetch", "id=1", "--attempts", "3", "--wait-ms", "250", "--flaky", "2",
        "--json",
    ]) {
        CliCommand::Fetch {
            attempts,
            wait_ms,
            flaky,
            json,
            ..
        } => {
            assert_eq!(attempts, Some(3));
            assert_eq!(wait_ms, Some(250));
            assert_eq!(flaky, 2);
            assert!(json);
        }
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_fetch_no_params() {
    match parse(&["refetch", "fetch"]) {
        CliCommand::Fetch { params, .. } => assert!(params.is_empty()),
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_demo() {
    match parse(&["refetch", "demo", "--attempts", "5"]) {
        CliCommand::Demo { attempts, wait_ms } => {
            assert_eq!(attempts, Some(5));
            assert!(wait_ms.is_none());
        }
        _ => panic!("expected Demo"),
    }
}

#[test]
fn resolve_policy_flags_override_config() {
    let cfg = RetryConfig {
        max_attempts: 7,
        wait_interval_secs: 2.0,
    };
    let policy = resolve_policy(Some(&cfg), Some(3), Some(100)).unwrap();
    assert_eq!(policy.max_attempts(), 3);
    assert_eq!(policy.wait_interval(), Duration::from_millis(100));
}

#[test]
fn resolve_policy_falls_back_to_config_then_default() {
    let cfg = RetryConfig {
        max_attempts: 7,
        wait_interval_secs: 2.0,
    };
    let policy = resolve_policy(Some(&cfg), None, None).unwrap();
    assert_eq!(policy.max_attempts(), 7);
    assert_eq!(policy.wait_interval(), Duration::from_secs(2));

    let policy = resolve_policy(None, None, None).unwrap();
    assert_eq!(policy.max_attempts(), 5);
    assert_eq!(policy.wait_interval(), Duration::from_secs(1));
}

#[test]
fn resolve_policy_rejects_zero_attempts() {
    assert!(resolve_policy(None, Some(0), None).is_err());
}
