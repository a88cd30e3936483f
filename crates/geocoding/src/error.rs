//! Geocoding error types.

use thiserror::Error;

/// Errors from place lookups.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Network or protocol failure talking to the geocoding service.
    #[error("geocoding request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered but with an unusable payload.
    #[error("invalid geocoding response: {0}")]
    InvalidResponse(String),
}
