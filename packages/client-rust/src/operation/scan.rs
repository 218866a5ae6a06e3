use async_trait::async_trait;

use super::{DispatchError, StoreOperation, Verb};
use crate::context::OperationContext;
use crate::result::OperationResult;
use crate::service::StoreServiceClient;
use crate::types::TableId;

/// Range-read variant: hands the context's key range to `kv_scan`.
///
/// A context without a range is treated like an empty payload: trivial
/// success, no remote call. The region serving the call returns only the
/// subset of the range it owns; multi-region fan-out is the session's job.
#[derive(Debug)]
pub struct ScanOperation(());

static INSTANCE: ScanOperation = ScanOperation(());

impl ScanOperation {
    #[must_use]
    pub fn instance() -> &'static Self {
        &INSTANCE
    }
}

#[async_trait]
impl StoreOperation for ScanOperation {
    fn verb(&self) -> Verb {
        Verb::Scan
    }

    async fn execute(
        &self,
        table: &TableId,
        client: &dyn StoreServiceClient,
        ctx: OperationContext,
    ) -> Result<OperationResult, DispatchError> {
        let Some(range) = ctx.range else {
            return Ok(OperationResult::success());
        };
        let records = client.kv_scan(table, ctx.region_id, range).await?;
        Ok(OperationResult::with_records(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStoreClient;
    use crate::types::RegionId;

    #[tokio::test]
    async fn missing_range_is_a_trivial_success() {
        let client = MemoryStoreClient::new();
        let table = TableId::new("users");
        // with_keys leaves range unset
        let ctx = OperationContext::with_keys(RegionId(1), Vec::new());

        let result = ScanOperation::instance()
            .execute(&table, &client, ctx)
            .await
            .unwrap();

        assert!(result.is_ok());
        assert!(result.records().is_empty());
        assert_eq!(client.call_count(Verb::Scan), 0);
    }
}
