use cpanel_core::{ChallengeRequest, CpanelError};
use std::fmt;
use thiserror::Error;

/// Shown whenever the credentials cannot be loaded
pub const SETUP_INSTRUCTIONS: &str = "To use certbot-dns-cpanel configure credentials in \
    ~/.cpanel/config. The file should be a JSON formatted object with \"domain\", \"user\", \
    and \"token\" keys";

/// Result type alias for challenge operations
pub type PluginResult<T> = std::result::Result<T, PluginError>;

/// Challenge lifecycle phase an error occurred in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Publishing the validation record
    Perform,
    /// Removing the validation record
    Cleanup,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Perform => f.write_str("perform"),
            Self::Cleanup => f.write_str("cleanup"),
        }
    }
}

/// Errors surfaced to the certificate client
#[derive(Error, Debug)]
pub enum PluginError {
    /// Credentials could not be loaded; nothing can run
    #[error("{message}\n{instructions}", instructions = SETUP_INSTRUCTIONS)]
    Setup {
        /// What went wrong while loading
        message: String,
    },

    /// A zone operation failed during a challenge
    #[error("{phase} of {record_name} for {domain} failed: {source}")]
    Challenge {
        /// Lifecycle phase
        phase: Phase,
        /// Domain being validated
        domain: String,
        /// Validation record name
        record_name: String,
        /// The failed zone operation
        #[source]
        source: CpanelError,
    },

    /// Cleanup found no validation record under the strict missing-record policy
    #[error("cleanup of {record_name} for {domain} failed: no TXT record found")]
    RecordMissing {
        /// Domain being validated
        domain: String,
        /// Validation record name
        record_name: String,
    },
}

impl PluginError {
    /// Wrap a credential or client construction failure
    pub fn setup(err: impl fmt::Display) -> Self {
        Self::Setup {
            message: err.to_string(),
        }
    }

    pub(crate) fn challenge(phase: Phase, request: &ChallengeRequest, source: CpanelError) -> Self {
        Self::Challenge {
            phase,
            domain: request.domain.clone(),
            record_name: request.validation_name.clone(),
            source,
        }
    }

    /// Returns true if the failure happened while loading credentials
    #[must_use]
    pub const fn is_setup(&self) -> bool {
        matches!(self, Self::Setup { .. })
    }

    /// The underlying API error, if there was one
    #[must_use]
    pub const fn remote(&self) -> Option<&CpanelError> {
        match self {
            Self::Challenge { source, .. } => Some(source),
            _ => None,
        }
    }
}
