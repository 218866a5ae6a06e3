use async_trait::async_trait;

use super::{DispatchError, StoreOperation, Verb};
use crate::context::OperationContext;
use crate::result::OperationResult;
use crate::service::StoreServiceClient;
use crate::types::TableId;

/// Bulk read variant: resolves the context's keys via `kv_batch_get`.
#[derive(Debug)]
pub struct BatchGetOperation(());

static INSTANCE: BatchGetOperation = BatchGetOperation(());

impl BatchGetOperation {
    #[must_use]
    pub fn instance() -> &'static Self {
        &INSTANCE
    }
}

#[async_trait]
impl StoreOperation for BatchGetOperation {
    fn verb(&self) -> Verb {
        Verb::BatchGet
    }

    async fn execute(
        &self,
        table: &TableId,
        client: &dyn StoreServiceClient,
        ctx: OperationContext,
    ) -> Result<OperationResult, DispatchError> {
        if ctx.keys.is_empty() {
            return Ok(OperationResult::success());
        }
        let records = client.kv_batch_get(table, ctx.region_id, ctx.keys).await?;
        Ok(OperationResult::with_records(records))
    }
}
