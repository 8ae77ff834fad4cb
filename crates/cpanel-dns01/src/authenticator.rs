//! DNS-01 challenge lifecycle.
//!
//! Perform converges the zone to "validation record present with the
//! expected value"; cleanup converges it to "validation record absent".
//! Each phase fetches the record itself, since a `line` seen earlier may
//! point elsewhere by now.

use std::path::Path;

use cpanel_client::{CpanelClient, CredentialsFile};
use cpanel_core::{ChallengeRequest, RecordFilter, TxtRecord, ZoneEditor, ZoneRecord};
use tracing::{debug, error, info, warn};

use crate::config::{AuthenticatorConfig, MissingRecordPolicy};
use crate::error::{Phase, PluginError, PluginResult};

/// Plugin description shown by the certificate client
pub const DESCRIPTION: &str =
    "Obtain certificates using a DNS TXT record (if you are using cPanel ZoneEdit for DNS).";

/// What a perform or cleanup did to the zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No record existed; one was added
    Created,
    /// A record with another value was overwritten in place
    Updated {
        /// Line that was edited
        line: u32,
    },
    /// The record already held the expected value
    Unchanged {
        /// Line of the existing record
        line: u32,
    },
    /// The record was removed
    Removed {
        /// Line that was removed
        line: u32,
    },
    /// Cleanup found nothing to remove
    AlreadyAbsent,
}

/// Solves DNS-01 challenges through a [`ZoneEditor`]
#[derive(Debug)]
pub struct Authenticator<E = CpanelClient> {
    editor: E,
    config: AuthenticatorConfig,
}

impl Authenticator<CpanelClient> {
    /// Create an authenticator from a credentials file
    ///
    /// Any failure here is fatal for the session and carries the setup
    /// instructions.
    pub fn from_credentials_file(path: &Path, config: AuthenticatorConfig) -> PluginResult<Self> {
        let credentials = CredentialsFile::load(path).map_err(PluginError::setup)?;
        let client = CpanelClient::new(credentials).map_err(PluginError::setup)?;
        Ok(Self::new(client, config))
    }

    /// Create an authenticator from `~/.cpanel/config`
    pub fn from_default_credentials(config: AuthenticatorConfig) -> PluginResult<Self> {
        let path = CredentialsFile::default_path().map_err(PluginError::setup)?;
        Self::from_credentials_file(&path, config)
    }
}

impl<E: ZoneEditor> Authenticator<E> {
    /// Create an authenticator on top of a zone editor
    pub const fn new(editor: E, config: AuthenticatorConfig) -> Self {
        Self { editor, config }
    }

    /// The zone editor in use
    pub const fn editor(&self) -> &E {
        &self.editor
    }

    /// The active configuration
    pub const fn config(&self) -> &AuthenticatorConfig {
        &self.config
    }

    /// Publish the validation record for one challenge
    ///
    /// Creates the record, rewrites it if it holds another value, or leaves
    /// it alone if it already matches. Does not wait for propagation.
    pub async fn perform(&self, request: &ChallengeRequest) -> PluginResult<Outcome> {
        let zone = request.zone();
        let name = request.record_fqdn();
        debug!(domain = %request.domain, zone, name = %name, "perform");

        let existing = self.find_record(Phase::Perform, request, &name).await?;
        let record = TxtRecord::new(name, request.validation_value.clone(), self.config.ttl);

        match existing {
            None => {
                info!(zone, name = %record.name, "creating validation record");
                self.editor
                    .add_record(zone, &record)
                    .await
                    .map_err(|e| PluginError::challenge(Phase::Perform, request, e))?;
                Ok(Outcome::Created)
            }
            Some(current) if current.data == request.validation_value => {
                debug!(zone, name = %record.name, line = current.line, "validation record already up to date");
                Ok(Outcome::Unchanged { line: current.line })
            }
            Some(current) => {
                info!(zone, name = %record.name, line = current.line, "updating stale validation record");
                self.editor
                    .edit_record(zone, current.line, &record)
                    .await
                    .map_err(|e| PluginError::challenge(Phase::Perform, request, e))?;
                Ok(Outcome::Updated { line: current.line })
            }
        }
    }

    /// Remove the validation record for one challenge
    pub async fn cleanup(&self, request: &ChallengeRequest) -> PluginResult<Outcome> {
        let zone = request.zone();
        let name = request.record_fqdn();
        debug!(domain = %request.domain, zone, name = %name, "cleanup");

        let Some(current) = self.find_record(Phase::Cleanup, request, &name).await? else {
            return match self.config.missing_record {
                MissingRecordPolicy::Ignore => {
                    warn!(zone, name = %name, "validation record not found, nothing to remove");
                    Ok(Outcome::AlreadyAbsent)
                }
                MissingRecordPolicy::Fail => Err(PluginError::RecordMissing {
                    domain: request.domain.clone(),
                    record_name: request.validation_name.clone(),
                }),
            };
        };

        info!(zone, name = %name, line = current.line, "removing validation record");
        self.editor
            .remove_record(zone, current.line)
            .await
            .map_err(|e| PluginError::challenge(Phase::Cleanup, request, e))?;
        Ok(Outcome::Removed { line: current.line })
    }

    /// Perform every challenge in order, then wait for propagation once
    ///
    /// Stops at the first failure. Records already published for earlier
    /// challenges stay in place; `cleanup_all` removes them.
    pub async fn perform_all(&self, requests: &[ChallengeRequest]) -> PluginResult<Vec<Outcome>> {
        let mut outcomes = Vec::with_capacity(requests.len());
        for request in requests {
            outcomes.push(self.perform(request).await?);
        }

        if !requests.is_empty() {
            self.wait_for_propagation().await;
        }
        Ok(outcomes)
    }

    /// Clean up every challenge, even after a failure
    ///
    /// Returns the first error once all cleanups have been attempted.
    pub async fn cleanup_all(&self, requests: &[ChallengeRequest]) -> PluginResult<Vec<Outcome>> {
        let mut outcomes = Vec::with_capacity(requests.len());
        let mut first_error = None;

        for request in requests {
            match self.cleanup(request).await {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => {
                    error!(domain = %request.domain, error = %e, "cleanup failed");
                    first_error.get_or_insert(e);
                }
            }
        }

        first_error.map_or(Ok(outcomes), Err)
    }

    async fn find_record(
        &self,
        phase: Phase,
        request: &ChallengeRequest,
        name: &str,
    ) -> PluginResult<Option<ZoneRecord>> {
        self.editor
            .fetch_records(request.zone(), &RecordFilter::txt(name))
            .await
            .map(cpanel_core::FetchedRecords::into_single)
            .map_err(|e| PluginError::challenge(phase, request, e))
    }

    async fn wait_for_propagation(&self) {
        if self.config.propagation.is_zero() {
            return;
        }
        info!(
            seconds = self.config.propagation.as_secs(),
            "waiting for DNS propagation"
        );
        tokio::time::sleep(self.config.propagation).await;
    }
}
