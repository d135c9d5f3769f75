use crate::domain::error::FetchError;
use async_trait::async_trait;

/// Where the raw settlement markup comes from.
///
/// Implementations perform a single attempt; retry policy, if any, belongs
/// to a wrapper around this trait.
#[async_trait]
pub trait TableSource: Send + Sync {
    /// Human-readable name of this source, for logging.
    fn name(&self) -> &str;

    /// Fetch the page body as opaque bytes.
    async fn fetch_raw_table(&self) -> Result<Vec<u8>, FetchError>;
}
