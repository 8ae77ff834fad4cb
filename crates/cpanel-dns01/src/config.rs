//! Authenticator configuration types.

use std::time::Duration;

/// TTL given to validation records
pub const DEFAULT_TTL: u32 = 10;

/// Time to wait after publishing before validation may start
pub const DEFAULT_PROPAGATION: Duration = Duration::from_secs(10);

/// What cleanup does when the validation record is already gone
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingRecordPolicy {
    /// Log a warning and report success
    #[default]
    Ignore,
    /// Fail the cleanup
    Fail,
}

/// Settings for an [`Authenticator`](crate::Authenticator)
#[derive(Debug, Clone)]
pub struct AuthenticatorConfig {
    /// TTL for created or updated records, in seconds
    pub ttl: u32,

    /// Propagation wait after all records are in place
    pub propagation: Duration,

    /// Cleanup behaviour when no record is found
    pub missing_record: MissingRecordPolicy,
}

impl Default for AuthenticatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthenticatorConfig {
    /// Create a configuration with default settings
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ttl: DEFAULT_TTL,
            propagation: DEFAULT_PROPAGATION,
            missing_record: MissingRecordPolicy::Ignore,
        }
    }

    /// Set the record TTL
    #[must_use]
    pub const fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    /// Set the propagation wait
    #[must_use]
    pub const fn propagation(mut self, wait: Duration) -> Self {
        self.propagation = wait;
        self
    }

    /// Set the propagation wait in whole seconds
    #[must_use]
    pub const fn propagation_seconds(self, seconds: u64) -> Self {
        self.propagation(Duration::from_secs(seconds))
    }

    /// Set the missing-record policy for cleanup
    #[must_use]
    pub const fn missing_record(mut self, policy: MissingRecordPolicy) -> Self {
        self.missing_record = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AuthenticatorConfig::default();
        assert_eq!(config.ttl, 10);
        assert_eq!(config.propagation, Duration::from_secs(10));
        assert_eq!(config.missing_record, MissingRecordPolicy::Ignore);
    }

    #[test]
    fn test_builder_setters() {
        let config = AuthenticatorConfig::new()
            .ttl(300)
            .propagation_seconds(30)
            .missing_record(MissingRecordPolicy::Fail);
        assert_eq!(config.ttl, 300);
        assert_eq!(config.propagation, Duration::from_secs(30));
        assert_eq!(config.missing_record, MissingRecordPolicy::Fail);
    }
}
