// Error kinds surfaced by failed assertions.

use crate::model::ActionRef;

/// Failure of a cache assertion, or misuse of the harness.
///
/// Every error is surfaced synchronously; the harness never continues past
/// the first violated target.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// The block ran to completion without dispatching any request, so there
    /// is no controller to derive keys against.
    #[error("no request was dispatched while executing the block")]
    NoRequestInBlock,

    /// Integration-mode targets must name a controller explicitly.
    #[error("no controller given in target {0} in integration mode")]
    NoControllerInTarget(ActionRef),

    /// `assert_cache_pages` was called without a block and no request driver
    /// is installed on the context.
    #[error("no request driver installed for implicit page retrieval")]
    MissingRequestDriver,

    /// The target was expected in the write record and was not found.
    #[error("{target} is not cached after executing block")]
    NotCached { target: String },

    /// The target was expected in the delete record and was not found.
    #[error("{target} is not expired after executing block")]
    NotExpired { target: String },

    /// A driver-issued implicit retrieval failed.
    #[error("implicit retrieval of {path} failed")]
    RequestFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
