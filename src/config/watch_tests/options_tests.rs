//! Tests for runtime settings: interval, client options, verbosity.

use std::time::Duration;

use super::*;

mod interval {
    use super::*;

    #[test]
    fn unset_means_one_minute() {
        let cli = cli_args(&["--url", "https://api.example.com/v1/items"]);
        let config = WatchConfig::from_sources(&cli, None).unwrap();

        assert_eq!(config.interval, Duration::from_secs(60));
    }

    #[test]
    fn flag_value_is_used() {
        let cli = cli_args(&["--url", "https://api.example.com/v1/items", "--interval", "120"]);
        let config = WatchConfig::from_sources(&cli, None).unwrap();

        assert_eq!(config.interval, Duration::from_secs(120));
    }

    #[test]
    fn fractions_of_a_second_work() {
        let cli = cli_args(&["--url", "https://api.example.com/v1/items", "--interval", "0.25"]);
        let config = WatchConfig::from_sources(&cli, None).unwrap();

        assert_eq!(config.interval, Duration::from_millis(250));
    }

    #[test]
    fn file_value_beats_the_default() {
        let cli = cli_args(&["--url", "https://api.example.com/v1/items"]);
        let toml = toml_doc(
            r"
            [monitor]
            interval = 300
        ",
        );
        let config = WatchConfig::from_sources(&cli, Some(&toml)).unwrap();

        assert_eq!(config.interval, Duration::from_secs(300));
    }

    #[test]
    fn zero_is_rejected() {
        let cli = cli_args(&["--url", "https://api.example.com/v1/items", "--interval", "0"]);
        let result = WatchConfig::from_sources(&cli, None);

        assert!(matches!(
            result,
            Err(ConfigError::BadDuration {
                field: "interval",
                ..
            })
        ));
    }

    #[test]
    fn negative_is_rejected() {
        let cli = cli_args(&["--url", "https://api.example.com/v1/items", "--interval=-5"]);
        let result = WatchConfig::from_sources(&cli, None);

        assert!(matches!(
            result,
            Err(ConfigError::BadDuration {
                field: "interval",
                ..
            })
        ));
    }

    #[test]
    fn nan_is_rejected() {
        let cli = cli_args(&["--url", "https://api.example.com/v1/items", "--interval", "NaN"]);
        let result = WatchConfig::from_sources(&cli, None);

        assert!(matches!(
            result,
            Err(ConfigError::BadDuration {
                field: "interval",
                ..
            })
        ));
    }

    #[test]
    fn infinity_is_rejected() {
        let cli = cli_args(&["--url", "https://api.example.com/v1/items", "--interval", "inf"]);
        let result = WatchConfig::from_sources(&cli, None);

        assert!(matches!(
            result,
            Err(ConfigError::BadDuration {
                field: "interval",
                ..
            })
        ));
    }

    #[test]
    fn overflow_is_rejected() {
        // Finite and positive, but too large for Duration
        let cli = cli_args(&["--url", "https://api.example.com/v1/items", "--interval", "1e300"]);
        let result = WatchConfig::from_sources(&cli, None);

        assert!(matches!(
            result,
            Err(ConfigError::BadDuration {
                field: "interval",
                ..
            })
        ));
    }
}

mod client_options {
    use super::*;

    #[test]
    fn tls_verification_on_by_default() {
        let cli = cli_args(&["--url", "https://api.example.com/v1/items"]);
        let config = WatchConfig::from_sources(&cli, None).unwrap();

        assert!(config.verify_tls);
    }

    #[test]
    fn insecure_flag_disables_verification() {
        let cli = cli_args(&["--url", "https://api.example.com/v1/items", "--insecure"]);
        let config = WatchConfig::from_sources(&cli, None).unwrap();

        assert!(!config.verify_tls);
    }

    #[test]
    fn toml_can_disable_verification() {
        let cli = cli_args(&["--url", "https://api.example.com/v1/items"]);
        let toml = toml_doc(
            r"
            [client]
            verify_tls = false
        ",
        );
        let config = WatchConfig::from_sources(&cli, Some(&toml)).unwrap();

        assert!(!config.verify_tls);
    }

    #[test]
    fn insecure_flag_wins_over_toml_true() {
        // The flag can only disable verification, never enable it
        let cli = cli_args(&["--url", "https://api.example.com/v1/items", "--insecure"]);
        let toml = toml_doc(
            r"
            [client]
            verify_tls = true
        ",
        );
        let config = WatchConfig::from_sources(&cli, Some(&toml)).unwrap();

        assert!(!config.verify_tls);
    }

    #[test]
    fn redirects_followed_by_default() {
        let cli = cli_args(&["--url", "https://api.example.com/v1/items"]);
        let config = WatchConfig::from_sources(&cli, None).unwrap();

        assert!(config.follow_redirects);
    }

    #[test]
    fn toml_can_disable_redirects() {
        let cli = cli_args(&["--url", "https://api.example.com/v1/items"]);
        let toml = toml_doc(
            r"
            [client]
            follow_redirects = false
        ",
        );
        let config = WatchConfig::from_sources(&cli, Some(&toml)).unwrap();

        assert!(!config.follow_redirects);
    }

    #[test]
    fn unparseable_proxy_is_rejected() {
        let cli = cli_args(&[
            "--url",
            "https://api.example.com/v1/items",
            "--proxy",
            "not a proxy",
        ]);
        let result = WatchConfig::from_sources(&cli, None);

        assert!(matches!(result, Err(ConfigError::BadProxy { .. })));
    }

    #[test]
    fn proxy_from_toml() {
        let cli = cli_args(&["--url", "https://api.example.com/v1/items"]);
        let toml = toml_doc(
            r#"
            [client]
            proxy = "socks5://127.0.0.1:1080"
        "#,
        );
        let config = WatchConfig::from_sources(&cli, Some(&toml)).unwrap();

        assert_eq!(
            config.proxy.as_ref().map(url::Url::scheme),
            Some("socks5")
        );
    }
}

mod verbose {
    use super::*;

    #[test]
    fn flag_turns_it_on() {
        let cli = cli_args(&["--url", "https://api.example.com/v1/items", "--verbose"]);
        let config = WatchConfig::from_sources(&cli, None).unwrap();

        assert!(config.verbose);
    }

    #[test]
    fn off_by_default() {
        let cli = cli_args(&["--url", "https://api.example.com/v1/items"]);
        let config = WatchConfig::from_sources(&cli, None).unwrap();

        assert!(!config.verbose);
    }
}

mod display {
    use super::*;

    #[test]
    fn display_shows_key_settings() {
        let cli = cli_args(&[
            "--url",
            "https://api.example.com/status",
            "--interval",
            "30",
            "--timeout",
            "10",
        ]);
        let config = WatchConfig::from_sources(&cli, None).unwrap();

        let display = config.to_string();

        assert!(display.contains("https://api.example.com/status"));
        assert!(display.contains("GET"));
        assert!(display.contains("interval: 30s"));
        assert!(display.contains("timeout: 10s"));
        assert!(display.contains("verify_tls: true"));
    }

    #[test]
    fn display_shows_none_for_absent_options() {
        let cli = cli_args(&["--url", "https://api.example.com/v1/items"]);
        let config = WatchConfig::from_sources(&cli, None).unwrap();

        let display = config.to_string();

        assert!(display.contains("timeout: none"));
        assert!(display.contains("proxy: none"));
    }
}
