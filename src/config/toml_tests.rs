//! Tests for the watch-file schema and the starter template.

use super::{ConfigError, TomlConfig, config_template};

mod schema {
    use super::*;

    #[test]
    fn url_alone_is_a_complete_document() {
        let config = TomlConfig::parse(
            r#"
            [request]
            url = "https://api.example.com/status"
            "#,
        )
        .unwrap();

        assert_eq!(config.request.url.as_deref(), Some("https://api.example.com/status"));
        assert!(config.request.method.is_none());
    }

    #[test]
    fn every_request_key_deserializes() {
        let config = TomlConfig::parse(
            r#"
            [request]
            url = "https://api.example.com/v2/items"
            method = "POST"
            bearer = "file-tok"
            body = '{"page": 1}'
            timeout = 15

            [request.headers]
            X-Env = "staging"

            [request.query]
            page = "1"
            "#,
        )
        .unwrap();

        let request = config.request;
        assert_eq!(request.url.as_deref(), Some("https://api.example.com/v2/items"));
        assert_eq!(request.method.as_deref(), Some("POST"));
        assert_eq!(request.bearer.as_deref(), Some("file-tok"));
        assert_eq!(request.body.as_deref(), Some(r#"{"page": 1}"#));
        assert_eq!(request.timeout, Some(15));
        assert_eq!(request.headers.get("X-Env").map(String::as_str), Some("staging"));
        assert_eq!(request.query.get("page").map(String::as_str), Some("1"));
    }

    #[test]
    fn query_keys_come_back_sorted() {
        let config = TomlConfig::parse(
            r#"
            [request.query]
            b = "2"
            a = "1"
            c = "3"
            "#,
        )
        .unwrap();

        let keys: Vec<_> = config.request.query.keys().cloned().collect();
        assert_eq!(keys, ["a", "b", "c"]);
    }

    #[test]
    fn interval_reads_as_float() {
        let config = TomlConfig::parse("[monitor]\ninterval = 2.5").unwrap();

        assert_eq!(config.monitor.interval, Some(2.5));
    }

    #[test]
    fn interval_accepts_a_whole_number() {
        let config = TomlConfig::parse("[monitor]\ninterval = 60").unwrap();

        assert_eq!(config.monitor.interval, Some(60.0));
    }

    #[test]
    fn client_table_deserializes() {
        let config = TomlConfig::parse(
            r#"
            [client]
            follow_redirects = false
            verify_tls = false
            proxy = "http://proxy.internal:3128"
            "#,
        )
        .unwrap();

        assert_eq!(config.client.follow_redirects, Some(false));
        assert_eq!(config.client.verify_tls, Some(false));
        assert_eq!(config.client.proxy.as_deref(), Some("http://proxy.internal:3128"));
    }

    #[test]
    fn empty_document_is_all_defaults() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.request.url.is_none());
        assert!(config.request.headers.is_empty());
        assert!(config.monitor.interval.is_none());
        assert!(config.client.proxy.is_none());
    }

    #[test]
    fn unknown_key_is_rejected() {
        let result = TomlConfig::parse("[monitor]\nretries = 3");

        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_table_is_rejected() {
        let result = TomlConfig::parse("[alerts]\nchannel = \"ops\"");

        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }
}

mod template {
    use super::*;

    #[test]
    fn starter_file_parses_back() {
        let template = config_template();

        let result = TomlConfig::parse(&template);
        assert!(result.is_ok(), "starter config no longer parses: {:?}", result.err());
    }

    #[test]
    fn starter_file_names_every_table() {
        let template = config_template();

        for table in ["[request]", "[monitor]", "[client]"] {
            assert!(template.contains(table), "starter config lost its {table} table");
        }
    }

    #[test]
    fn starter_file_mentions_url_and_interval() {
        let template = config_template();

        assert!(template.contains("url"));
        assert!(template.contains("interval"));
    }
}

mod loading {
    use std::io::Write;
    use std::path::Path;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn reads_a_file_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[request]\nurl = \"https://api.example.com/status\"").unwrap();

        let config = TomlConfig::load(file.path()).unwrap();

        assert_eq!(config.request.url.as_deref(), Some("https://api.example.com/status"));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let result = TomlConfig::load(Path::new("missing-watch.toml"));

        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn bad_syntax_is_a_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "interval = = 60").unwrap();

        let result = TomlConfig::load(file.path());

        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }
}
