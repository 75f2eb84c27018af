use std::path::PathBuf;

use clap::Parser;
use gocheat::cli::{Cli, Command};

#[test]
fn no_subcommand_defaults_to_snippets() {
    let cli = Cli::try_parse_from(["gocheat"]).expect("cli parse should work");
    assert!(cli.command.is_none());
    assert!(!cli.json);
    assert_eq!(cli.verbose, 0);
}

#[test]
fn parses_snippets() {
    let cli = Cli::try_parse_from(["gocheat", "snippets"]).expect("cli parse should work");
    assert!(matches!(cli.command, Some(Command::Snippets)));
}

#[test]
fn parses_profile_with_path() {
    let cli = Cli::try_parse_from(["gocheat", "profile", "/tmp/cpu.out"])
        .expect("cli parse should work");
    match cli.command {
        Some(Command::Profile(args)) => {
            assert_eq!(args.path, Some(PathBuf::from("/tmp/cpu.out")));
        }
        _ => panic!("expected profile command"),
    }
}

#[test]
fn parses_profile_without_path() {
    let cli = Cli::try_parse_from(["gocheat", "profile"]).expect("cli parse should work");
    match cli.command {
        Some(Command::Profile(args)) => assert!(args.path.is_none()),
        _ => panic!("expected profile command"),
    }
}

#[test]
fn parses_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "gocheat",
        "profile",
        "--json",
        "-vv",
        "--config-dir",
        "/etc/gocheat",
    ])
    .expect("cli parse should work");
    assert!(cli.json);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.config_dir, Some(PathBuf::from("/etc/gocheat")));
}

#[test]
fn rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["gocheat", "pprof"]).is_err());
}
