//! Provider credential resolution.
//!
//! The only secret budgie needs is the Mistral API key. It is read from
//! the environment once at startup and wrapped in [`SecretString`]
//! immediately; absence is a fatal configuration error surfaced by the
//! binary. The key never appears in config files, Debug output, or logs.

use secrecy::SecretString;

use budgie_types::error::SecretError;

/// Environment variable holding the Mistral API key.
pub const API_KEY_ENV: &str = "MISTRAL_API_KEY";

/// Resolve the provider credential from the environment.
///
/// A present-but-non-unicode value is treated as missing: credentials must
/// be valid strings.
pub fn resolve_api_key() -> Result<SecretString, SecretError> {
    match std::env::var(API_KEY_ENV) {
        Ok(value) if !value.is_empty() => Ok(SecretString::from(value)),
        Ok(_) => Err(SecretError::Missing(API_KEY_ENV.to_string())),
        Err(std::env::VarError::NotPresent) => Err(SecretError::Missing(API_KEY_ENV.to_string())),
        Err(std::env::VarError::NotUnicode(_)) => {
            Err(SecretError::Missing(API_KEY_ENV.to_string()))
        }
    }
}
