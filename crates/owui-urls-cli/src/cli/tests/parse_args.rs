use super::parse;
use crate::cli::Cli;
use clap::Parser;

#[test]
fn cli_parse_no_address() {
    let cli = parse(&["owui-urls"]);
    assert!(cli.address.is_none());
    assert!(cli.ignored.is_empty());
}

#[test]
fn cli_parse_address() {
    let cli = parse(&["owui-urls", "chat.example.com:8080"]);
    assert_eq!(cli.address.as_deref(), Some("chat.example.com:8080"));
}

#[test]
fn cli_rejects_format_flag() {
    assert!(Cli::try_parse_from(["owui-urls", "--format", "2", "chat.example.com"]).is_err());
}

#[test]
fn cli_ignores_arguments_after_address() {
    let cli = parse(&["owui-urls", "a.example.com", "b.example.com", "--verbose"]);
    assert_eq!(cli.address.as_deref(), Some("a.example.com"));
    assert_eq!(cli.ignored, ["b.example.com", "--verbose"]);
}
