use serde::{Deserialize, Serialize};

use super::zone::fully_qualified;

/// ACME challenge record label
pub const ACME_CHALLENGE_RECORD: &str = "_acme-challenge";

/// A DNS-01 challenge as handed over by the certificate client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeRequest {
    /// Domain being validated (may be a wildcard)
    pub domain: String,

    /// Record name the challenge must be published at, without trailing dot
    pub validation_name: String,

    /// Expected TXT content
    pub validation_value: String,
}

impl ChallengeRequest {
    /// Create a challenge request with an explicit record name
    pub fn new(
        domain: impl Into<String>,
        validation_name: impl Into<String>,
        validation_value: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            validation_name: validation_name.into(),
            validation_value: validation_value.into(),
        }
    }

    /// Create a challenge request published at `_acme-challenge.<domain>`
    ///
    /// A leading `*.` is dropped, so a wildcard and its base domain share
    /// one validation record.
    pub fn acme(domain: impl Into<String>, validation_value: impl Into<String>) -> Self {
        let domain = domain.into();
        let validation_name = challenge_record_name(&domain);
        Self {
            domain,
            validation_name,
            validation_value: validation_value.into(),
        }
    }

    /// Zone the record lives in
    #[must_use]
    pub fn zone(&self) -> &str {
        apex_zone(&self.domain)
    }

    /// Record name with the trailing dot the zone API expects
    #[must_use]
    pub fn record_fqdn(&self) -> String {
        fully_qualified(&self.validation_name)
    }
}

/// Build `_acme-challenge.<domain>`, dropping a wildcard prefix
#[must_use]
pub fn challenge_record_name(domain: &str) -> String {
    let base = domain.strip_prefix("*.").unwrap_or(domain).trim_end_matches('.');
    format!("{ACME_CHALLENGE_RECORD}.{base}")
}

/// Zone for a domain: its last two dot-separated labels
///
/// Wrong for multi-label public suffixes (`www.example.co.uk` gives `co.uk`).
/// Getting those right needs a public suffix list.
#[must_use]
pub fn apex_zone(domain: &str) -> &str {
    let domain = domain.trim_end_matches('.');
    let mut dots = domain.rmatch_indices('.');
    match (dots.next(), dots.next()) {
        (Some(_), Some((idx, _))) => &domain[idx + 1..],
        _ => domain,
    }
}
