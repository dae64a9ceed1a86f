//! Error types for the charts plugin.
//!
//! Every failure is local to one request: nothing here is fatal and nothing
//! triggers a retry. The plugin reports errors to the host as an empty
//! terminal payload and logs the details.

/// Plugin-wide result type.
pub type Result<T> = std::result::Result<T, ChartError>;

/// Errors that can occur while handling a chart request.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// The host handed us an input payload we can't interpret, or a
    /// required criteria field is missing.
    #[error("Invalid request input: {0}")]
    InvalidInput(String),

    /// No usable network transport is available right now.
    #[error("Network transport unavailable")]
    TransportUnavailable,

    /// HTTP-level failure talking to the chart provider.
    #[error("Network error: {0}")]
    Network(String),

    /// The provider answered, but the body wasn't the JSON we expect.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}
