//! The zone operations a DNS-01 reconciler needs.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{FetchedRecords, RecordFilter, TxtRecord};

/// Fetch, add, edit and remove records in a hosted zone
///
/// Every call resolves to exactly one `Ok` or `Err`; implementations must
/// fold any API-level failure into the `Err` side.
#[async_trait]
pub trait ZoneEditor: Send + Sync {
    /// Fetch records of `zone` matching `filter`
    ///
    /// With a name in the filter the result is [`FetchedRecords::Single`] or
    /// [`FetchedRecords::None`], otherwise [`FetchedRecords::Many`].
    async fn fetch_records(&self, zone: &str, filter: &RecordFilter) -> Result<FetchedRecords>;

    /// Add a TXT record
    async fn add_record(&self, zone: &str, record: &TxtRecord) -> Result<()>;

    /// Replace the record at `line` with `record`
    async fn edit_record(&self, zone: &str, line: u32, record: &TxtRecord) -> Result<()>;

    /// Remove the record at `line`
    async fn remove_record(&self, zone: &str, line: u32) -> Result<()>;
}
