//! Flag-level tests: everything here checks what clap hands back,
//! before any merging or validation happens.

use clap::Parser;

use super::cli::{Cli, Command};

fn parse(args: &[&str]) -> Cli {
    Cli::parse_from(std::iter::once("apiwatch").chain(args.iter().copied()))
}

mod flags {
    use super::*;

    #[test]
    fn url_flag_is_captured_verbatim() {
        let cli = parse(&["--url", "https://api.example.com/status"]);

        assert_eq!(cli.url.as_deref(), Some("https://api.example.com/status"));
    }

    #[test]
    fn request_shaping_flags_parse() {
        let cli = parse(&[
            "--url",
            "https://api.example.com",
            "--method",
            "post",
            "--header",
            "X-Api-Key=k-4f1d",
            "--header",
            "Accept: application/json",
            "--query",
            "page=1",
            "--bearer",
            "dev-token-1",
            "--body",
            r#"{"scope":"status"}"#,
        ]);

        assert_eq!(cli.method.as_deref(), Some("post"));
        assert_eq!(cli.headers, ["X-Api-Key=k-4f1d", "Accept: application/json"]);
        assert_eq!(cli.query, ["page=1"]);
        assert_eq!(cli.bearer.as_deref(), Some("dev-token-1"));
        assert_eq!(cli.body.as_deref(), Some(r#"{"scope":"status"}"#));
    }

    #[test]
    fn cadence_flags_parse() {
        let cli = parse(&["--interval", "2.5", "--timeout", "10"]);

        assert_eq!(cli.interval, Some(2.5));
        assert_eq!(cli.timeout, Some(10));
    }

    #[test]
    fn interval_takes_fractional_seconds() {
        let cli = parse(&["--interval", "0.25"]);

        assert_eq!(cli.interval, Some(0.25));
    }

    #[test]
    fn client_flags_parse() {
        let cli = parse(&["--proxy", "http://proxy.local:8080", "--insecure"]);

        assert_eq!(cli.proxy.as_deref(), Some("http://proxy.local:8080"));
        assert!(cli.insecure);
    }

    #[test]
    fn config_and_verbose_parse() {
        let cli = parse(&["--config", "conf/watch.toml", "--verbose"]);

        assert_eq!(cli.config.as_ref().unwrap().to_str(), Some("conf/watch.toml"));
        assert!(cli.verbose);
    }

    #[test]
    fn bare_invocation_leaves_every_flag_unset() {
        let cli = parse(&[]);

        assert!(cli.url.is_none());
        assert!(cli.method.is_none());
        assert!(cli.interval.is_none());
        assert!(cli.timeout.is_none());
        assert!(cli.bearer.is_none());
        assert!(cli.body.is_none());
        assert!(cli.proxy.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.insecure);
        assert!(!cli.verbose);
        assert!(cli.headers.is_empty());
        assert!(cli.query.is_empty());
    }
}

mod init {
    use super::*;
    use std::path::Path;

    #[test]
    fn init_defaults_to_apiwatch_toml() {
        let cli = parse(&["init"]);

        match cli.command {
            Some(Command::Init { output }) => assert_eq!(output, Path::new("apiwatch.toml")),
            _ => panic!("init should select the Init subcommand"),
        }
    }

    #[test]
    fn init_takes_a_custom_output_path() {
        let cli = parse(&["init", "--output", "/etc/apiwatch.toml"]);

        match cli.command {
            Some(Command::Init { output }) => {
                assert_eq!(output, Path::new("/etc/apiwatch.toml"));
            }
            _ => panic!("init should select the Init subcommand"),
        }
    }

    #[test]
    fn no_subcommand_means_run_mode() {
        let cli = parse(&["--url", "https://api.example.com"]);

        assert!(cli.command.is_none());
    }
}
