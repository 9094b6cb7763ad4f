//! Error types for the library layer.

use thiserror::Error;

/// Errors produced while loading configuration, fetching totals, or laying
/// out the banner. A render aborts on the first one.
#[derive(Error, Debug)]
pub enum BannerError {
    /// The committee name had no words to lay out.
    #[error("Committee name is empty")]
    EmptyName,
    /// The glyph font could not produce art for the given text.
    #[error("Cannot render banner text {0:?}")]
    Glyph(String),
    /// The glyph font failed to load.
    #[error("Failed to load banner font: {0}")]
    Font(String),
    /// No usable OpenFEC API key was found.
    #[error("API key unavailable: {0}")]
    ApiKey(String),
    /// User-provided input failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// An error from the underlying OpenFEC client.
    #[error("OpenFEC API error: {0}")]
    Api(#[from] openfec_api::Error),
}
