use reqwest::StatusCode;
use thiserror::Error;

/// Failures talking to the remote collection API.
///
/// These never reach request handlers. `CollectionClient` logs them and substitutes an
/// empty result, so a broken upstream degrades a page instead of failing it.
#[derive(Error, Debug)]
pub enum CollectionError {
    /// The API answered with a non-success status code.
    #[error("Collection API returned HTTP {status} for {url}")]
    Status {
        /// Status code returned by the API
        status: StatusCode,
        /// Full request URL including the encoded query string
        url: String,
    },

    /// The request could not be sent or the body could not be read.
    #[error("Collection API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("Collection API returned malformed JSON: {0}")]
    Decode(#[from] serde_json::Error),
}
