use async_trait::async_trait;

use super::{DispatchError, StoreOperation, Verb};
use crate::context::OperationContext;
use crate::result::OperationResult;
use crate::service::StoreServiceClient;
use crate::types::TableId;

/// Write-path variant: hands the context's record list to `kv_put`.
#[derive(Debug)]
pub struct PutOperation(());

static INSTANCE: PutOperation = PutOperation(());

impl PutOperation {
    /// The process-wide shared instance. Construction is private; there is no
    /// state to diverge, and the contract guarantees it by construction.
    #[must_use]
    pub fn instance() -> &'static Self {
        &INSTANCE
    }
}

#[async_trait]
impl StoreOperation for PutOperation {
    fn verb(&self) -> Verb {
        Verb::Put
    }

    async fn execute(
        &self,
        table: &TableId,
        client: &dyn StoreServiceClient,
        ctx: OperationContext,
    ) -> Result<OperationResult, DispatchError> {
        if ctx.records.is_empty() {
            tracing::trace!(table = %table, "put with empty payload, skipping remote call");
            return Ok(OperationResult::success());
        }
        let is_success = client.kv_put(table, ctx.region_id, ctx.records).await?;
        Ok(OperationResult::from_outcome(is_success))
    }
}
