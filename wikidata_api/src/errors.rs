//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or invalid URL).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The API rejected the request with an error envelope.
    #[error("API error {code}: {info}")]
    Api { code: String, info: String },
    /// The response body could not be decoded, including claim values of an
    /// unrecognized shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
