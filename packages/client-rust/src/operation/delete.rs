use async_trait::async_trait;

use super::{DispatchError, StoreOperation, Verb};
use crate::context::OperationContext;
use crate::result::OperationResult;
use crate::service::StoreServiceClient;
use crate::types::TableId;

/// Delete variant: hands the context's key list to `kv_delete`.
#[derive(Debug)]
pub struct DeleteOperation(());

static INSTANCE: DeleteOperation = DeleteOperation(());

impl DeleteOperation {
    #[must_use]
    pub fn instance() -> &'static Self {
        &INSTANCE
    }
}

#[async_trait]
impl StoreOperation for DeleteOperation {
    fn verb(&self) -> Verb {
        Verb::Delete
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
        let is_success = client.kv_delete(table, ctx.region_id, ctx.keys).await?;
        Ok(OperationResult::from_outcome(is_success))
    }
}
