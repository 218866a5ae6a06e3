//! Verb routing: selects the `StoreOperation` singleton for a requested verb.

use std::collections::HashMap;

use crate::context::OperationContext;
use crate::operation::{
    BatchGetOperation, BatchPutOperation, DeleteOperation, DispatchError, GetOperation,
    PutOperation, ScanOperation, StoreOperation, Verb,
};
use crate::result::OperationResult;
use crate::service::StoreServiceClient;
use crate::types::TableId;

/// Read-only registry from verb to operation singleton.
///
/// Populated at construction and never mutated afterward; share it behind an
/// `Arc` and dispatch from any number of tasks without locking. The
/// dispatcher adds no logic of its own beyond lookup: per-verb behavior is
/// fully owned by each variant.
pub struct Dispatcher {
    operations: HashMap<Verb, &'static dyn StoreOperation>,
}

impl Dispatcher {
    /// Dispatcher with all built-in verbs registered.
    #[must_use]
    pub fn new() -> Self {
        let mut dispatcher = Self::empty();
        dispatcher.register(PutOperation::instance());
        dispatcher.register(GetOperation::instance());
        dispatcher.register(DeleteOperation::instance());
        dispatcher.register(BatchPutOperation::instance());
        dispatcher.register(BatchGetOperation::instance());
        dispatcher.register(ScanOperation::instance());
        dispatcher
    }

    /// Dispatcher with no verbs registered. Exists for future extension and
    /// for exercising the unsupported-verb path; production callers want
    /// [`Dispatcher::new`].
    #[must_use]
    pub fn empty() -> Self {
        Self {
            operations: HashMap::new(),
        }
    }

    /// Register an operation under its own verb. Registration happens during
    /// construction only; the registry is read-only once the dispatcher is
    /// shared.
    pub fn register(&mut self, operation: &'static dyn StoreOperation) {
        self.operations.insert(operation.verb(), operation);
    }

    /// Route one operation call to the variant registered for `verb` and
    /// return its result unchanged.
    ///
    /// # Errors
    ///
    /// - `DispatchError::UnsupportedVerb` when no variant is registered for
    ///   `verb`. Never silently folded into a failure status: this is a
    ///   programming/configuration error, not a runtime condition.
    /// - `DispatchError::ClientFault` when the service client raises a fault.
    pub async fn dispatch(
        &self,
        verb: Verb,
        table: &TableId,
        client: &dyn StoreServiceClient,
        ctx: OperationContext,
    ) -> Result<OperationResult, DispatchError> {
        let Some(operation) = self.operations.get(&verb) else {
            return Err(DispatchError::UnsupportedVerb { verb });
        };
        tracing::debug!(%verb, table = %table, region = %ctx.region_id, "dispatching store operation");
        operation.execute(table, client, ctx).await
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bytes::Bytes;

    use super::*;
    use crate::memory::MemoryStoreClient;
    use crate::result::{STATUS_FAILED, STATUS_OK};
    use crate::types::{KeyRange, KeyValue, RegionId};

    fn put_ctx(records: Vec<KeyValue>) -> OperationContext {
        OperationContext::with_records(RegionId(7), records)
    }

    #[tokio::test]
    async fn put_success_maps_to_status_zero() {
        let dispatcher = Dispatcher::new();
        let client = MemoryStoreClient::new();
        let table = TableId::new("table-x");
        let ctx = put_ctx(vec![
            KeyValue::new(&b"k1"[..], &b"v1"[..]),
            KeyValue::new(&b"k2"[..], &b"v2"[..]),
        ]);

        let result = dispatcher
            .dispatch(Verb::Put, &table, &client, ctx)
            .await
            .unwrap();

        assert_eq!(result.status(), STATUS_OK);
        assert_eq!(result.message(), "");
        assert_eq!(client.call_count(Verb::Put), 1);
    }

    #[tokio::test]
    async fn put_transport_failure_maps_to_status_minus_one() {
        let dispatcher = Dispatcher::new();
        let client = MemoryStoreClient::new();
        client.fail_writes(true);
        let table = TableId::new("table-x");
        let ctx = put_ctx(vec![KeyValue::new(&b"k1"[..], &b"v1"[..])]);

        let result = dispatcher
            .dispatch(Verb::Put, &table, &client, ctx)
            .await
            .unwrap();

        assert_eq!(result.status(), STATUS_FAILED);
        assert_eq!(result.message(), "");
    }

    #[tokio::test]
    async fn delete_success_maps_to_status_zero() {
        let dispatcher = Dispatcher::new();
        let client = MemoryStoreClient::new();
        let table = TableId::new("table-x");
        let ctx = OperationContext::with_keys(RegionId(7), vec![Bytes::from_static(b"k1")]);

        let result = dispatcher
            .dispatch(Verb::Delete, &table, &client, ctx)
            .await
            .unwrap();

        assert_eq!(result.status(), STATUS_OK);
        assert_eq!(result.message(), "");
    }

    #[tokio::test]
    async fn unregistered_verb_names_the_verb() {
        let dispatcher = Dispatcher::empty();
        let client = MemoryStoreClient::new();
        let table = TableId::new("table-x");
        let ctx = put_ctx(vec![KeyValue::new(&b"k"[..], &b"v"[..])]);

        let err = dispatcher
            .dispatch(Verb::Put, &table, &client, ctx)
            .await
            .unwrap_err();

        assert!(matches!(err, DispatchError::UnsupportedVerb { verb: Verb::Put }));
        assert!(err.to_string().contains("put"));
        assert_eq!(client.call_count(Verb::Put), 0);
    }

    #[tokio::test]
    async fn outcome_mapping_is_identical_across_write_verbs() {
        let dispatcher = Dispatcher::new();
        let table = TableId::new("table-x");

        for verb in [Verb::Put, Verb::BatchPut] {
            for fail in [false, true] {
                let client = MemoryStoreClient::new();
                client.fail_writes(fail);
                let ctx = put_ctx(vec![KeyValue::new(&b"k"[..], &b"v"[..])]);
                let result = dispatcher.dispatch(verb, &table, &client, ctx).await.unwrap();
                let expected = if fail { STATUS_FAILED } else { STATUS_OK };
                assert_eq!(result.status(), expected, "verb {verb}, fail={fail}");
                assert_eq!(result.message(), "");
            }
        }
    }

    #[tokio::test]
    async fn empty_batch_returns_success_without_remote_calls() {
        let dispatcher = Dispatcher::new();
        let client = MemoryStoreClient::new();
        let table = TableId::new("table-x");

        for verb in [Verb::Put, Verb::BatchPut] {
            let result = dispatcher
                .dispatch(verb, &table, &client, put_ctx(Vec::new()))
                .await
                .unwrap();
            assert!(result.is_ok());
        }
        for verb in [Verb::Get, Verb::BatchGet, Verb::Delete] {
            let ctx = OperationContext::with_keys(RegionId(7), Vec::new());
            let result = dispatcher.dispatch(verb, &table, &client, ctx).await.unwrap();
            assert!(result.is_ok());
            assert!(result.records().is_empty());
        }

        assert_eq!(client.total_calls(), 0);
    }

    #[tokio::test]
    async fn read_verbs_carry_their_payload() {
        let dispatcher = Dispatcher::new();
        let client = MemoryStoreClient::new();
        let table = TableId::new("table-x");

        let seed = put_ctx(vec![
            KeyValue::new(&b"a"[..], &b"1"[..]),
            KeyValue::new(&b"b"[..], &b"2"[..]),
            KeyValue::new(&b"c"[..], &b"3"[..]),
        ]);
        dispatcher
            .dispatch(Verb::BatchPut, &table, &client, seed)
            .await
            .unwrap();

        let ctx = OperationContext::with_keys(
            RegionId(7),
            vec![Bytes::from_static(b"a"), Bytes::from_static(b"c")],
        );
        let result = dispatcher
            .dispatch(Verb::BatchGet, &table, &client, ctx)
            .await
            .unwrap();
        assert!(result.is_ok());
        assert_eq!(result.records().len(), 2);

        let ctx = OperationContext::with_range(
            RegionId(7),
            KeyRange::new(&b"a"[..], &b"c"[..]),
        );
        let result = dispatcher
            .dispatch(Verb::Scan, &table, &client, ctx)
            .await
            .unwrap();
        let keys: Vec<&[u8]> = result.records().iter().map(|r| r.key.as_ref()).collect();
        assert_eq!(keys, vec![&b"a"[..], &b"b"[..]]);
    }

    #[tokio::test]
    async fn client_fault_propagates_as_error_not_result() {
        let dispatcher = Dispatcher::new();
        let client = MemoryStoreClient::new();
        client.inject_fault("connection reset");
        let table = TableId::new("table-x");
        let ctx = put_ctx(vec![KeyValue::new(&b"k"[..], &b"v"[..])]);

        let err = dispatcher
            .dispatch(Verb::Put, &table, &client, ctx)
            .await
            .unwrap_err();

        assert!(matches!(err, DispatchError::ClientFault(_)));
        assert!(err.to_string().contains("connection reset"));
    }

    #[tokio::test]
    async fn concurrent_dispatches_are_independent() {
        let dispatcher = Arc::new(Dispatcher::new());
        let client = Arc::new(MemoryStoreClient::new());
        let table = TableId::new("table-x");

        let mut handles = Vec::new();
        for i in 0..32u32 {
            let dispatcher = dispatcher.clone();
            let client = client.clone();
            let table = table.clone();
            handles.push(tokio::spawn(async move {
                let key = Bytes::from(format!("key-{i}"));
                let value = Bytes::from(format!("value-{i}"));
                let ctx = OperationContext::with_records(
                    RegionId(u64::from(i % 4)),
                    vec![KeyValue::new(key.clone(), value.clone())],
                );
                let put = dispatcher
                    .dispatch(Verb::Put, &table, client.as_ref(), ctx)
                    .await
                    .unwrap();
                assert!(put.is_ok());

                let ctx = OperationContext::with_keys(RegionId(u64::from(i % 4)), vec![key]);
                let got = dispatcher
                    .dispatch(Verb::Get, &table, client.as_ref(), ctx)
                    .await
                    .unwrap();
                assert_eq!(got.records().len(), 1);
                assert_eq!(got.records()[0].value, value);
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(client.call_count(Verb::Put), 32);
        assert_eq!(client.call_count(Verb::Get), 32);
    }
}
