//! Error types for the revgeo library.

use thiserror::Error;

/// Errors that can occur when building or sending a geocoding request.
#[derive(Error, Debug)]
pub enum GeocodeError {
    /// The request specified neither a nonzero coordinate pair nor a place ID.
    ///
    /// Raised by validation before any network call is made.
    #[error("a nonzero lat/lng pair or a place ID is required")]
    MissingLocator,

    /// Network or connection failure from the underlying HTTP client.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote service answered with a non-200 HTTP status.
    #[error("bad response {code}: {body}")]
    HttpStatus {
        /// HTTP status code of the response.
        code: u16,
        /// Raw response body, included verbatim for debugging.
        body: String,
    },

    /// The response body was not valid JSON matching the response shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A well-formed response whose status field was not `"OK"`.
    #[error("API error {status}: {}", .message.as_deref().unwrap_or("(no message)"))]
    Api {
        /// Status string returned by the API (e.g. "ZERO_RESULTS").
        status: String,
        /// Optional human-readable detail accompanying the status.
        message: Option<String>,
    },
}

/// Result type alias using [`GeocodeError`].
pub type Result<T> = std::result::Result<T, GeocodeError>;
