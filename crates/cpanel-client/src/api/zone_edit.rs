//! ZoneEdit module functions.

use async_trait::async_trait;
use cpanel_core::{
    fully_qualified, CpanelError, FetchedRecords, RecordFilter, Result, TxtRecord, ZoneEditor,
    ZoneRecord, TXT,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::envelope::text;
use crate::CpanelClient;

const MODULE: &str = "ZoneEdit";

const FETCH: &str = "fetchzone_records";
const ADD: &str = "add_zone_record";
const EDIT: &str = "edit_zone_record";
const REMOVE: &str = "remove_zone_record";

/// ZoneEdit module functions
pub struct ZoneEditApi<'a> {
    client: &'a CpanelClient,
}

impl<'a> ZoneEditApi<'a> {
    pub(crate) fn new(client: &'a CpanelClient) -> Self {
        Self { client }
    }

    /// Fetch records from a zone
    #[must_use]
    pub fn fetch(&self, zone: impl Into<String>) -> FetchRequestBuilder<'a> {
        FetchRequestBuilder::new(self.client, zone.into())
    }

    /// Add a TXT record to a zone
    pub async fn add_record(&self, zone: &str, record: &TxtRecord) -> Result<()> {
        let name = fully_qualified(&record.name);
        let ttl = record.ttl.to_string();
        debug!(zone, name = %name, "adding TXT record");

        self.client
            .call(
                MODULE,
                ADD,
                &[
                    ("domain", zone),
                    ("name", name.as_str()),
                    ("type", TXT),
                    ("txtdata", record.data.as_str()),
                    ("ttl", ttl.as_str()),
                ],
            )
            .await
            .map(drop)
    }

    /// Replace the record at `line` with a TXT record
    ///
    /// `line` must come from a fetch of the same zone that has not been
    /// followed by another change.
    pub async fn edit_record(&self, zone: &str, line: u32, record: &TxtRecord) -> Result<()> {
        let name = fully_qualified(&record.name);
        let line = line.to_string();
        let ttl = record.ttl.to_string();
        debug!(zone, name = %name, line = %line, "editing TXT record");

        self.client
            .call(
                MODULE,
                EDIT,
                &[
                    ("line", line.as_str()),
                    ("domain", zone),
                    ("name", name.as_str()),
                    ("type", TXT),
                    ("txtdata", record.data.as_str()),
                    ("ttl", ttl.as_str()),
                ],
            )
            .await
            .map(drop)
    }

    /// Remove the record at `line`
    pub async fn remove_record(&self, zone: &str, line: u32) -> Result<()> {
        let line = line.to_string();
        debug!(zone, line = %line, "removing record");

        self.client
            .call(MODULE, REMOVE, &[("line", line.as_str()), ("domain", zone)])
            .await
            .map(drop)
    }
}

/// Builder for zone fetch requests
pub struct FetchRequestBuilder<'a> {
    client: &'a CpanelClient,
    zone: String,
    filter: RecordFilter,
}

impl<'a> FetchRequestBuilder<'a> {
    fn new(client: &'a CpanelClient, zone: String) -> Self {
        Self {
            client,
            zone,
            filter: RecordFilter::all(),
        }
    }

    /// Narrow the fetch to one record name
    ///
    /// The trailing dot is added if missing.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.filter.name = Some(name.into());
        self
    }

    /// Filter by record type (TXT, A, CNAME, ...)
    #[must_use]
    pub fn record_type(mut self, rtype: impl Into<String>) -> Self {
        self.filter.record_type = Some(rtype.into());
        self
    }

    /// Replace the whole filter
    #[must_use]
    pub fn filter(mut self, filter: RecordFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Execute the request
    pub async fn send(self) -> Result<FetchedRecords> {
        let name = self.filter.name.as_deref().map(fully_qualified);

        let mut params = vec![("domain", self.zone.as_str())];
        if let Some(ref name) = name {
            params.push(("name", name.as_str()));
        }
        if let Some(ref rtype) = self.filter.record_type {
            params.push(("type", rtype.as_str()));
        }

        debug!(zone = %self.zone, name = ?name, "fetching zone records");
        let data = self.client.call(MODULE, FETCH, &params).await?;
        let records = parse_records(data)?;

        match name {
            // The API filters by name already; matching again keeps a
            // server that ignores the filter from handing back some other line
            Some(name) => Ok(records
                .into_iter()
                .find(|r| {
                    r.has_name(&name)
                        && self
                            .filter
                            .record_type
                            .as_deref()
                            .map_or(true, |t| r.record_type.eq_ignore_ascii_case(t))
                })
                .map_or(FetchedRecords::None, FetchedRecords::Single)),
            None => Ok(FetchedRecords::Many(records)),
        }
    }
}

/// A record as `fetchzone_records` returns it
///
/// Numbers arrive as JSON numbers or strings depending on the cPanel
/// version, and non-record lines (comments, `$TTL`) carry no name.
#[derive(Debug, Deserialize)]
struct WireRecord {
    #[serde(default)]
    line: Option<Value>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default, rename = "type")]
    record_type: Option<String>,
    #[serde(default)]
    txtdata: Option<Value>,
    #[serde(default)]
    record: Option<Value>,
    #[serde(default)]
    ttl: Option<Value>,
}

impl WireRecord {
    fn into_record(self) -> Option<ZoneRecord> {
        let line = self.line.as_ref().and_then(as_u32)?;
        let data = self
            .txtdata
            .or(self.record)
            .map(|v| text(&v))
            .unwrap_or_default();

        Some(ZoneRecord {
            line,
            name: self.name.unwrap_or_default(),
            record_type: self.record_type.unwrap_or_default(),
            data,
            ttl: self.ttl.as_ref().and_then(as_u32).unwrap_or_default(),
        })
    }
}

fn as_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn parse_records(data: Value) -> Result<Vec<ZoneRecord>> {
    let items = match data {
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => items,
        object @ Value::Object(_) => vec![object],
        other => {
            return Err(CpanelError::InvalidResponse {
                function: FETCH.to_string(),
                message: format!("expected a list of records, got {other}"),
            })
        }
    };

    let mut records = Vec::with_capacity(items.len());
    for item in items {
        let wire: WireRecord = serde_json::from_value(item)?;
        match wire.into_record() {
            Some(record) => records.push(record),
            None => debug!("skipping zone entry without a line number"),
        }
    }
    Ok(records)
}

#[async_trait]
impl ZoneEditor for CpanelClient {
    async fn fetch_records(&self, zone: &str, filter: &RecordFilter) -> Result<FetchedRecords> {
        self.zone_edit().fetch(zone).filter(filter.clone()).send().await
    }

    async fn add_record(&self, zone: &str, record: &TxtRecord) -> Result<()> {
        self.zone_edit().add_record(zone, record).await
    }

    async fn edit_record(&self, zone: &str, line: u32, record: &TxtRecord) -> Result<()> {
        self.zone_edit().edit_record(zone, line, record).await
    }

    async fn remove_record(&self, zone: &str, line: u32) -> Result<()> {
        self.zone_edit().remove_record(zone, line).await
    }
}
