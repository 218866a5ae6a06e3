use crate::types::KeyValue;

/// Status code for a successful operation.
pub const STATUS_OK: i32 = 0;

/// Status code for a transport-reported failure.
///
/// The only failure code this core emits. The transport's richer error codes
/// are deliberately folded down to this single sentinel; distinguishing
/// failure causes at the status level is left to the transport's diagnostic
/// message, which passes through verbatim when offered.
pub const STATUS_FAILED: i32 = -1;

/// Uniform outcome of one store operation, regardless of verb.
///
/// Immutable value object: status, message, and payload are set at
/// construction and never change. `status` is `0` on success and negative on
/// failure; `message` is empty unless the transport supplied a diagnostic;
/// `records` carries the payload of read verbs and is empty for writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationResult {
    status: i32,
    message: String,
    records: Vec<KeyValue>,
}

impl OperationResult {
    /// Successful result with no payload.
    #[must_use]
    pub fn success() -> Self {
        Self {
            status: STATUS_OK,
            message: String::new(),
            records: Vec::new(),
        }
    }

    /// Failed result. `message` is the transport's diagnostic, or empty when
    /// the transport gave none.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_FAILED,
            message: message.into(),
            records: Vec::new(),
        }
    }

    /// Fold a boolean transport outcome into a result.
    ///
    /// `true` -> status `0`, `false` -> status `-1`, empty message either
    /// way. The single mapping point for all write verbs.
    #[must_use]
    pub fn from_outcome(is_success: bool) -> Self {
        if is_success {
            Self::success()
        } else {
            Self::failure("")
        }
    }

    /// Successful result carrying a read payload.
    #[must_use]
    pub fn with_records(records: Vec<KeyValue>) -> Self {
        Self {
            status: STATUS_OK,
            message: String::new(),
            records,
        }
    }

    #[must_use]
    pub fn status(&self) -> i32 {
        self.status
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn records(&self) -> &[KeyValue] {
        &self.records
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Consume the result, yielding the read payload.
    #[must_use]
    pub fn into_records(self) -> Vec<KeyValue> {
        self.records
    }
}
