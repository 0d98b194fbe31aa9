//! Unified error type for all client operations.

use serde::Serialize;
use thiserror::Error;

/// Error type for [`DomainsClient`](crate::DomainsClient) operations.
///
/// HTTP error statuses are deliberately **not** an error variant: the GoDaddy
/// API returns a JSON error body (`code`/`message` fields) for non-2xx
/// responses, and that body is decoded and handed back to the caller like any
/// other response. Only transport failures and undecodable bodies surface
/// here.
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code")]
pub enum ClientError {
    /// The client was constructed with unusable credentials.
    #[error("Configuration error: {detail}")]
    Configuration {
        /// What was wrong with the configuration.
        detail: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, TLS failure, etc.).
    #[error("Network error: {detail}")]
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The response body was not parseable JSON.
    #[error("Parse error: {detail}")]
    Parse {
        /// Details about the parse failure.
        detail: String,
    },

    /// A request body could not be serialized.
    #[error("Serialization error: {detail}")]
    Serialization {
        /// Details about the serialization failure.
        detail: String,
    },
}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;
