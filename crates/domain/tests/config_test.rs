use dohgate_domain::{Config, ConfigError, DohDialect, LogFormat};

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.server.web_port, 8080);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.doh.timeout_ms, 10_000);
    assert_eq!(config.doh.default_resolver, "cloudflare");
    assert!(config.doh.user_agent.starts_with("dohgate/"));
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Text);
    assert!(config.resolvers.is_empty());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_from_partial_toml() {
    let config = Config::from_toml(
        r#"
        [server]
        web_port = 9090

        [logging]
        format = "json"
        "#,
    )
    .unwrap();

    assert_eq!(config.server.web_port, 9090);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.doh.timeout_ms, 10_000);
}

#[test]
fn test_config_resolver_entries_extend_registry() {
    let config = Config::from_toml(
        r#"
        [[resolvers]]
        name = "adguard"
        url = "https://dns.adguard-dns.com/resolve"

        [[resolvers]]
        name = "local"
        url = "http://127.0.0.1:8053/dns-query"
        dialect = "dns-message"
        "#,
    )
    .unwrap();

    let registry = config.resolver_registry().unwrap();

    assert_eq!(
        registry.names(),
        vec!["adguard", "cloudflare", "google", "local", "quad9"]
    );
    assert_eq!(
        registry.endpoint_for("adguard").unwrap().dialect,
        DohDialect::DnsJson
    );
    assert_eq!(
        registry.endpoint_for("local").unwrap().dialect,
        DohDialect::DnsMessage
    );
}

#[test]
fn test_config_rejects_unknown_dialect() {
    let result = Config::from_toml(
        r#"
        [[resolvers]]
        name = "odd"
        url = "https://odd.example/dns"
        dialect = "xml"
        "#,
    );

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_validate_rejects_invalid_resolver_url() {
    let config = Config::from_toml(
        r#"
        [[resolvers]]
        name = "broken"
        url = "dns.example/dns-query"
        "#,
    )
    .unwrap();

    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_unregistered_default_resolver() {
    let config = Config::from_toml(
        r#"
        [doh]
        default_resolver = "nextdns"
        "#,
    )
    .unwrap();

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("nextdns"));
}

#[test]
fn test_validate_rejects_zero_timeout_and_port() {
    let mut config = Config::default();
    config.doh.timeout_ms = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.server.web_port = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_load_applies_cli_overrides() {
    let path = std::env::temp_dir().join(format!("dohgate-config-{}.toml", std::process::id()));
    std::fs::write(&path, "[server]\nweb_port = 9000\n").unwrap();

    let config = Config::load(
        path.to_str(),
        dohgate_domain::CliOverrides {
            web_port: Some(9100),
            bind_address: Some("127.0.0.1".to_string()),
            log_level: Some("debug".to_string()),
        },
    )
    .unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.server.web_port, 9100);
    assert_eq!(config.server.bind_address, "127.0.0.1");
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_config_load_missing_file_fails() {
    let result = Config::load(
        Some("/nonexistent/dohgate.toml"),
        dohgate_domain::CliOverrides::default(),
    );
    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}
