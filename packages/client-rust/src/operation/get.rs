use async_trait::async_trait;

use super::{DispatchError, StoreOperation, Verb};
use crate::context::OperationContext;
use crate::result::OperationResult;
use crate::service::StoreServiceClient;
use crate::types::TableId;

/// Point-read variant: resolves the context's keys via `kv_get` and carries
/// the returned records in the result.
#[derive(Debug)]
pub struct GetOperation(());

static INSTANCE: GetOperation = GetOperation(());

impl GetOperation {
    #[must_use]
    pub fn instance() -> &'static Self {
        &INSTANCE
    }
}

#[async_trait]
impl StoreOperation for GetOperation {
    fn verb(&self) -> Verb {
        Verb::Get
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
        let records = client.kv_get(table, ctx.region_id, ctx.keys).await?;
        Ok(OperationResult::with_records(records))
    }
}
