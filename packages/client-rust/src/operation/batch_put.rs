use async_trait::async_trait;

use super::{DispatchError, StoreOperation, Verb};
use crate::context::OperationContext;
use crate::result::OperationResult;
use crate::service::StoreServiceClient;
use crate::types::TableId;

/// Bulk write variant: hands the context's record list to `kv_batch_put`.
///
/// The core does not split the batch; region grouping and chunking happen in
/// the session layer before dispatch.
#[derive(Debug)]
pub struct BatchPutOperation(());

static INSTANCE: BatchPutOperation = BatchPutOperation(());

impl BatchPutOperation {
    #[must_use]
    pub fn instance() -> &'static Self {
        &INSTANCE
    }
}

#[async_trait]
impl StoreOperation for BatchPutOperation {
    fn verb(&self) -> Verb {
        Verb::BatchPut
    }

    async fn execute(
        &self,
        table: &TableId,
        client: &dyn StoreServiceClient,
        ctx: OperationContext,
    ) -> Result<OperationResult, DispatchError> {
        if ctx.records.is_empty() {
            return Ok(OperationResult::success());
        }
        let is_success = client
            .kv_batch_put(table, ctx.region_id, ctx.records)
            .await?;
        Ok(OperationResult::from_outcome(is_success))
    }
}
