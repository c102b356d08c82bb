//! Tests for features and log.

use super::parse;
use crate::cli::CliCommand;

#[test]
fn cli_parse_features() {
    match parse(&["ztgate", "features", "http://free-prizes.xyz"]) {
        CliCommand::Features { url } => assert_eq!(url, "http://free-prizes.xyz"),
        _ => panic!("expected Features"),
    }
}

#[test]
fn cli_parse_log_default_limit() {
    match parse(&["ztgate", "log"]) {
        CliCommand::Log { limit } => assert_eq!(limit, 20),
        _ => panic!("expected Log"),
    }
}

#[test]
fn cli_parse_log_limit() {
    match parse(&["ztgate", "log", "--limit", "5"]) {
        CliCommand::Log { limit } => assert_eq!(limit, 5),
        _ => panic!("expected Log"),
    }
}
