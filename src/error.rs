//! Error Types
//!
//! Failures of the catalog client. They never reach the UI: the client logs
//! them and hands callers `None`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no browser window available")]
    NoWindow,
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("could not read body of {url}: {message}")]
    Body { url: String, message: String },
    #[error("unexpected payload from {url}: {message}")]
    Decode { url: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CatalogError::Status { url: "https://x/api/plants".to_string(), status: 503 };
        assert_eq!(err.to_string(), "https://x/api/plants answered with HTTP 503");

        let err = CatalogError::Decode { url: "u".to_string(), message: "missing field `price`".to_string() };
        assert_eq!(err.to_string(), "unexpected payload from u: missing field `price`");
    }
}
