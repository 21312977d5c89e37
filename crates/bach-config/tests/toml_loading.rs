//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use bach_config::{BachConfig, ConfigError};
use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_server_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
base_url = "http://bach.lan:8080"
timeout_secs = 3
"#,
        )?;

        let config: BachConfig = Figment::from(Serialized::defaults(BachConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.server.base_url, "http://bach.lan:8080");
        assert_eq!(config.server.timeout_secs, 3);
        assert!(config.server.user_agent.starts_with("bach-cli/"));
        Ok(())
    });
}

#[test]
fn loads_full_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
base_url = "https://bach.example.org/"

[dashboard]
refresh_interval_secs = 10
recent_tasks = 8
title_max_chars = 40

[preferences]
path = "prefs.json"
"#,
        )?;

        let config: BachConfig = Figment::from(Serialized::defaults(BachConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.server.normalized_base_url(), "https://bach.example.org");
        assert_eq!(config.dashboard.refresh_interval_secs, 10);
        assert_eq!(config.dashboard.recent_tasks, 8);
        assert_eq!(config.dashboard.title_max_chars, 40);
        assert_eq!(
            config.preferences.resolved_path(),
            Some(std::path::PathBuf::from("prefs.json"))
        );
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
base_url = "http://from-toml:8000"
"#,
        )?;
        jail.set_env("BACH_SERVER__BASE_URL", "http://from-env:8000");

        let config: BachConfig = Figment::from(Serialized::defaults(BachConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("BACH_").split("__"))
            .extract()?;

        assert_eq!(config.server.base_url, "http://from-env:8000");
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".bach")?;
        jail.create_file(
            ".bach/config.toml",
            r#"
[dashboard]
recent_tasks = 3
"#,
        )?;

        let config = BachConfig::load().expect("config loads");
        assert_eq!(config.dashboard.recent_tasks, 3);
        Ok(())
    });
}

#[test]
fn invalid_values_are_rejected_on_load() {
    Jail::expect_with(|jail| {
        jail.set_env("BACH_DASHBOARD__REFRESH_INTERVAL_SECS", "0");

        let err = BachConfig::load().expect_err("zero interval must fail");
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "dashboard.refresh_interval_secs"
        ));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".bach")?;
        jail.create_file(".bach/config.toml", "[server\nbase_url = ")?;

        let err = BachConfig::load().expect_err("malformed toml must fail");
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
