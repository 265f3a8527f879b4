//! API credential resolution from the environment.

use secrecy::SecretString;

use parley_types::error::ConfigError;

/// Read the API key from the environment variable `env_name`.
///
/// Unset, empty, or non-Unicode values are a [`ConfigError::MissingCredential`].
pub fn resolve_api_key(env_name: &str) -> Result<SecretString, ConfigError> {
    resolve_api_key_with(env_name, |key| std::env::var(key).ok())
}

/// Same as [`resolve_api_key`] with an injectable lookup.
pub fn resolve_api_key_with(
    env_name: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<SecretString, ConfigError> {
    match lookup(env_name) {
        Some(value) if !value.trim().is_empty() => Ok(SecretString::from(value.trim().to_string())),
        _ => Err(ConfigError::MissingCredential(env_name.to_string())),
    }
}
