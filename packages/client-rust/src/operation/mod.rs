//! Store operation variants: one stateless singleton per verb.
//!
//! Each variant binds one [`Verb`] to the matching `StoreServiceClient`
//! method and folds the raw transport outcome into an [`OperationResult`].
//! Variants hold no state, are constructed once as process-wide statics, and
//! are safe for unsynchronized concurrent use.

mod batch_get;
mod batch_put;
mod delete;
mod get;
mod put;
mod scan;

use std::fmt;

use async_trait::async_trait;

use crate::context::OperationContext;
use crate::result::OperationResult;
use crate::service::StoreServiceClient;
use crate::types::TableId;

pub use batch_get::BatchGetOperation;
pub use batch_put::BatchPutOperation;
pub use delete::DeleteOperation;
pub use get::GetOperation;
pub use put::PutOperation;
pub use scan::ScanOperation;

/// The closed set of store verbs a dispatcher can route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Put,
    Get,
    Delete,
    BatchPut,
    BatchGet,
    Scan,
}

impl Verb {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Put => "put",
            Self::Get => "get",
            Self::Delete => "delete",
            Self::BatchPut => "batch_put",
            Self::BatchGet => "batch_get",
            Self::Scan => "scan",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced by `dispatch`/`execute`, distinct from failure-as-data.
///
/// A transport call that completes with a failure outcome is *not* an error
/// here; it folds into an `OperationResult` with a negative status. These
/// variants cover the two classes above that contract: a verb nobody
/// registered (programming/configuration error) and a fault raised by the
/// service client itself.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("unsupported verb: {verb}")]
    UnsupportedVerb { verb: Verb },
    #[error("service client fault: {0}")]
    ClientFault(#[from] anyhow::Error),
}

/// Polymorphic unit of work over the store verbs.
///
/// Contract: invoke exactly one verb-specific method on `client`, passing
/// `table`, the context's region, and the payload. No retries, no batch
/// splitting, no payload inspection beyond what the transport call requires.
/// An empty payload short-circuits to a trivial success without a remote
/// call. The context is consumed; it is never reused across calls.
#[async_trait]
pub trait StoreOperation: Send + Sync {
    /// The verb this variant handles.
    fn verb(&self) -> Verb;

    /// Execute the operation against one region and fold the outcome.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::ClientFault` when the service client itself
    /// raises a fault. Transport-reported failures are returned as data, not
    /// as errors.
    async fn execute(
        &self,
        table: &TableId,
        client: &dyn StoreServiceClient,
        ctx: OperationContext,
    ) -> Result<OperationResult, DispatchError>;
}
