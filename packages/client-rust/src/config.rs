/// Client-level configuration for the session layer.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Maximum number of records or keys handed to a single wire call.
    /// Batches larger than this are chunked per region before dispatch.
    pub max_records_per_call: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            max_records_per_call: 1024,
        }
    }
}
