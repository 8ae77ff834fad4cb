use serde::{Deserialize, Serialize};

/// Record type used for DNS-01 validation records
pub const TXT: &str = "TXT";

/// A single record from a cPanel-hosted zone
///
/// `line` is the record's position in the zone file and is the only handle
/// the API accepts for edit and remove. It is only valid until the zone
/// changes, so it must come from a fetch made just before the mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRecord {
    /// 1-based line in the zone file
    pub line: u32,

    /// Fully-qualified record name, ending in `.`
    pub name: String,

    /// Record type (TXT, A, CNAME, ...)
    #[serde(rename = "type")]
    pub record_type: String,

    /// Record value
    pub data: String,

    /// Time to live in seconds
    pub ttl: u32,
}

impl ZoneRecord {
    /// Returns true if this is a TXT record
    #[must_use]
    pub fn is_txt(&self) -> bool {
        self.record_type.eq_ignore_ascii_case(TXT)
    }

    /// Returns true if the record name matches `name`, with or without the
    /// trailing dot
    #[must_use]
    pub fn has_name(&self, name: &str) -> bool {
        self.name.trim_end_matches('.').eq_ignore_ascii_case(name.trim_end_matches('.'))
    }
}

/// Outcome of a zone fetch
///
/// A name-filtered fetch yields [`FetchedRecords::Single`] or
/// [`FetchedRecords::None`]; an unfiltered fetch yields [`FetchedRecords::Many`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchedRecords {
    /// No record matched the filter
    None,
    /// The record matching a name filter
    Single(ZoneRecord),
    /// Every record in the zone that matched the type filter
    Many(Vec<ZoneRecord>),
}

impl FetchedRecords {
    /// Take the single matching record, if any
    ///
    /// For a [`FetchedRecords::Many`] result this is the first record.
    #[must_use]
    pub fn into_single(self) -> Option<ZoneRecord> {
        match self {
            Self::None => None,
            Self::Single(record) => Some(record),
            Self::Many(records) => records.into_iter().next(),
        }
    }

    /// Flatten into a list of records
    #[must_use]
    pub fn into_vec(self) -> Vec<ZoneRecord> {
        match self {
            Self::None => Vec::new(),
            Self::Single(record) => vec![record],
            Self::Many(records) => records,
        }
    }

    /// Number of records fetched
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Single(_) => 1,
            Self::Many(records) => records.len(),
        }
    }

    /// Returns true if nothing was fetched
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Filter for a zone fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Fully-qualified record name; narrows the result to a single record
    pub name: Option<String>,

    /// Record type
    pub record_type: Option<String>,
}

impl RecordFilter {
    /// Filter matching every record in the zone
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter for the TXT record called `name`
    #[must_use]
    pub fn txt(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            record_type: Some(TXT.to_string()),
        }
    }

    /// Restrict to a record name
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Restrict to a record type
    #[must_use]
    pub fn record_type(mut self, rtype: impl Into<String>) -> Self {
        self.record_type = Some(rtype.into());
        self
    }
}

/// Contents of a TXT record to add or write over an existing line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxtRecord {
    /// Fully-qualified record name, ending in `.`
    pub name: String,

    /// TXT content
    pub data: String,

    /// Time to live in seconds
    pub ttl: u32,
}

impl TxtRecord {
    /// Create a TXT record
    pub fn new(name: impl Into<String>, data: impl Into<String>, ttl: u32) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
            ttl,
        }
    }
}

/// Append the trailing dot of a fully-qualified name if it is missing
#[must_use]
pub fn fully_qualified(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(line: u32, name: &str, data: &str) -> ZoneRecord {
        ZoneRecord {
            line,
            name: name.to_string(),
            record_type: TXT.to_string(),
            data: data.to_string(),
            ttl: 10,
        }
    }

    #[test]
    fn test_has_name_ignores_trailing_dot_and_case() {
        let r = record(12, "_acme-challenge.example.com.", "abc");
        assert!(r.has_name("_acme-challenge.example.com"));
        assert!(r.has_name("_ACME-challenge.example.com."));
        assert!(!r.has_name("example.com."));
        assert!(r.is_txt());
    }

    #[test]
    fn test_fetched_records_into_single() {
        assert_eq!(FetchedRecords::None.into_single(), None);

        let single = FetchedRecords::Single(record(3, "a.example.com.", "x"));
        assert_eq!(single.len(), 1);
        assert_eq!(single.into_single().map(|r| r.line), Some(3));

        let many = FetchedRecords::Many(vec![
            record(4, "a.example.com.", "x"),
            record(9, "b.example.com.", "y"),
        ]);
        assert_eq!(many.len(), 2);
        assert_eq!(many.clone().into_vec().len(), 2);
        assert_eq!(many.into_single().map(|r| r.line), Some(4));
        assert!(FetchedRecords::Many(Vec::new()).is_empty());
    }

    #[test]
    fn test_record_filter_builders() {
        let filter = RecordFilter::txt("_acme-challenge.example.com.");
        assert_eq!(filter.name.as_deref(), Some("_acme-challenge.example.com."));
        assert_eq!(filter.record_type.as_deref(), Some("TXT"));

        let filter = RecordFilter::all().record_type("A");
        assert_eq!(filter.name, None);
        assert_eq!(filter.record_type.as_deref(), Some("A"));
    }

    #[test]
    fn test_fully_qualified() {
        assert_eq!(fully_qualified("example.com"), "example.com.");
        assert_eq!(fully_qualified("example.com."), "example.com.");
    }
}
