//! Runtime configuration: API key and endpoint overrides.

use std::path::Path;

use crate::error::BannerError;

/// Environment variable holding the OpenFEC API key.
pub const API_KEY_ENV: &str = "OPENFEC_API_KEY";

/// Environment variable that points the client at another OpenFEC host.
pub const BASE_URL_ENV: &str = "OPENFEC_BASE_URL";

/// Key file read when the environment variable is unset.
pub const DEFAULT_API_KEY_FILE: &str = "api_key.txt";

/// Loads the API key from `OPENFEC_API_KEY`, falling back to `key_file`.
pub fn load_api_key(key_file: &Path) -> Result<String, BannerError> {
    resolve_api_key(std::env::var(API_KEY_ENV).ok(), key_file)
}

/// Picks the API key from an already-read environment value or the key file.
///
/// A blank environment value counts as unset.
pub fn resolve_api_key(env_value: Option<String>, key_file: &Path) -> Result<String, BannerError> {
    if let Some(key) = env_value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
        tracing::debug!("Using API key from {}", API_KEY_ENV);
        return Ok(key);
    }
    read_api_key_file(key_file)
}

/// Reads and trims a key file. Missing, unreadable, or blank files are errors.
pub fn read_api_key_file(path: &Path) -> Result<String, BannerError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        BannerError::ApiKey(format!(
            "set {} or create {} ({})",
            API_KEY_ENV,
            path.display(),
            e
        ))
    })?;
    let key = contents.trim();
    if key.is_empty() {
        return Err(BannerError::ApiKey(format!(
            "{} is empty; set {} or write the key into the file",
            path.display(),
            API_KEY_ENV
        )));
    }
    tracing::debug!("Using API key from {}", path.display());
    Ok(key.to_string())
}

/// Base URL override from `OPENFEC_BASE_URL`, if set and non-blank.
pub fn base_url_override() -> Option<String> {
    std::env::var(BASE_URL_ENV)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
