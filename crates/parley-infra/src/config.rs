//! Service configuration loader for Parley.
//!
//! Reads an optional TOML file and deserializes it into [`ServiceConfig`].
//! A missing file means defaults. A file that exists but cannot be read or
//! parsed is an error: a config the operator pointed at must be valid.

use std::path::Path;

use parley_core::session::window::TranscriptWindow;
use parley_types::config::ServiceConfig;
use parley_types::error::ConfigError;

/// Load configuration from `path`, or defaults when `path` is `None` or
/// names a file that does not exist.
pub async fn load_config(path: Option<&Path>) -> Result<ServiceConfig, ConfigError> {
    let Some(path) = path else {
        tracing::debug!("no config file given, using defaults");
        return Ok(ServiceConfig::default());
    };

    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("config file {} not found, using defaults", path.display());
            return Ok(ServiceConfig::default());
        }
        Err(err) => {
            return Err(ConfigError::Read {
                path: path.display().to_string(),
                message: err.to_string(),
            });
        }
    };

    let config: ServiceConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate(&config)?;
    tracing::info!(path = %path.display(), "configuration loaded");
    Ok(config)
}

/// Apply environment overrides on top of the file.
///
/// `lookup` is `std::env::var(..).ok()` in production.
pub fn apply_env_overrides(
    config: &mut ServiceConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<(), ConfigError> {
    if let Some(port) = lookup("PORT") {
        config.server.port = port
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("PORT must be a port number, got '{port}'")))?;
    }
    Ok(())
}

/// Reject values the service cannot run with.
pub fn validate(config: &ServiceConfig) -> Result<(), ConfigError> {
    TranscriptWindow::from_config(&config.session)?;

    if config.model.timeout_secs == 0 {
        return Err(ConfigError::Invalid(
            "model.timeout_secs must be greater than zero".to_string(),
        ));
    }
    if !(0.0..=2.0).contains(&config.model.temperature) {
        return Err(ConfigError::Invalid(format!(
            "model.temperature must be within 0.0..=2.0, got {}",
            config.model.temperature
        )));
    }
    if config.model.base_url.trim().is_empty() {
        return Err(ConfigError::Invalid("model.base_url must not be empty".to_string()));
    }
    if config.model.api_key_env.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "model.api_key_env must name an environment variable".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn no_path_returns_default() {
        let config = load_config(None).await.unwrap();
        assert_eq!(config.server.port, 5000);
    }

    #[tokio::test]
    async fn missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(Some(&tmp.path().join("parley.toml")))
            .await
            .unwrap();
        assert_eq!(config.model.max_tokens, 250);
    }

    #[tokio::test]
    async fn valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("parley.toml");
        tokio::fs::write(
            &path,
            r#"
[server]
port = 8080

[session]
idle_timeout_secs = 120
max_turns = 5
keep_tail = 4
"#,
        )
        .await
        .unwrap();

        let config = load_config(Some(&path)).await.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.session.idle_timeout_secs, 120);
        assert_eq!(config.session.max_turns, 5);
        assert_eq!(config.model.timeout_secs, 15);
    }

    #[tokio::test]
    async fn invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("parley.toml");
        tokio::fs::write(&path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let err = load_config(Some(&path)).await.unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[tokio::test]
    async fn inconsistent_window_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("parley.toml");
        tokio::fs::write(&path, "[session]\nmax_turns = 4\nkeep_tail = 8\n")
            .await
            .unwrap();

        let err = load_config(Some(&path)).await.unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = ServiceConfig::default();
        config.model.timeout_secs = 0;
        assert!(matches!(validate(&config), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn port_override_applies() {
        let mut config = ServiceConfig::default();
        apply_env_overrides(&mut config, |key| (key == "PORT").then(|| "8081".to_string()))
            .unwrap();
        assert_eq!(config.server.port, 8081);
    }

    #[test]
    fn bad_port_override_is_error() {
        let mut config = ServiceConfig::default();
        let err = apply_env_overrides(&mut config, |_| Some("eighty".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn no_overrides_leaves_config_untouched() {
        let mut config = ServiceConfig::default();
        apply_env_overrides(&mut config, |_| None).unwrap();
        assert_eq!(config.server.port, 5000);
    }
}
