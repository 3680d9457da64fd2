//! Error handling types and utilities.

/// A specialized Result type for setup code (configuration, CLI).
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Why a single request to the index backend produced no usable value.
///
/// The client converts every variant into the endpoint's default; the variants
/// exist so failure paths can be inspected and logged.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The request never produced a response (connection refused, DNS, offline).
    #[error("request to {path} failed: {message}")]
    Network { path: String, message: String },

    /// A response arrived but its body could not be read.
    #[error("failed to read response body from {path}: {message}")]
    Read { path: String, message: String },

    /// The body was read but is not valid JSON of the expected shape.
    #[error("malformed response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl TransportError {
    /// Short machine-friendly name of the failure class, used as a log field.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Encode(_) => "encode",
            Self::Network { .. } => "network",
            Self::Read { .. } => "read",
            Self::Decode { .. } => "decode",
        }
    }
}
