use serde_json::Value;
use thiserror::Error;

/// Failure delivered to a completion handler
///
/// Native-layer rejections are passed through verbatim; the bridge never
/// interprets or rewrites them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DispatchFailure {
    /// Error payload produced by the native SDK, forwarded untouched
    #[error("native layer failure: {0}")]
    Native(Value),

    /// The host runtime could not route the call into the native layer
    #[error("native runtime unavailable: {0}")]
    RuntimeUnavailable(String),
}
