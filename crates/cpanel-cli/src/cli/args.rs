//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use cpanel_dns01::{
    AuthenticatorConfig, ChallengeRequest, MissingRecordPolicy, DEFAULT_PROPAGATION, DEFAULT_TTL,
};

use crate::output::OutputFormat;

/// DNS-01 challenge hooks for zones hosted on cPanel
///
/// Publishes and removes `_acme-challenge` TXT records through the cPanel
/// ZoneEdit API. Credentials are read from ~/.cpanel/config, a JSON object
/// with "domain", "user" and "token" keys.
#[derive(Parser, Debug)]
#[command(name = "certbot-dns-cpanel")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Credentials file (defaults to ~/.cpanel/config)
    #[arg(short, long, env = "CPANEL_CREDENTIALS", global = true)]
    pub credentials: Option<String>,

    /// Seconds to wait for DNS propagation after publishing
    #[arg(long, global = true, default_value_t = DEFAULT_PROPAGATION.as_secs())]
    pub propagation_seconds: u64,

    /// TTL of the validation record
    #[arg(long, global = true, default_value_t = DEFAULT_TTL)]
    pub ttl: u32,

    /// Fail cleanup when the validation record is already gone
    #[arg(long, global = true)]
    pub strict_cleanup: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Authenticator settings from the global flags
    pub fn authenticator_config(&self) -> AuthenticatorConfig {
        let missing_record = if self.strict_cleanup {
            MissingRecordPolicy::Fail
        } else {
            MissingRecordPolicy::Ignore
        };

        AuthenticatorConfig::new()
            .ttl(self.ttl)
            .propagation_seconds(self.propagation_seconds)
            .missing_record(missing_record)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Publish the validation record and wait for propagation
    Perform(ChallengeArgs),

    /// Remove the validation record
    Cleanup(ChallengeArgs),

    /// List records in a zone
    Records(RecordsArgs),
}

// ============================================================================
// Perform / cleanup
// ============================================================================

#[derive(Args, Debug)]
pub struct ChallengeArgs {
    /// Domain being validated
    #[arg(short, long, env = "CERTBOT_DOMAIN")]
    pub domain: String,

    /// Validation token to publish
    #[arg(long, env = "CERTBOT_VALIDATION")]
    pub validation: String,

    /// Record name (defaults to _acme-challenge.<domain>)
    #[arg(long)]
    pub validation_name: Option<String>,
}

impl ChallengeArgs {
    /// Turn the arguments into a challenge request
    pub fn into_request(self) -> ChallengeRequest {
        match self.validation_name {
            Some(name) => ChallengeRequest::new(
                self.domain,
                name.trim_end_matches('.'),
                self.validation,
            ),
            None => ChallengeRequest::acme(self.domain, self.validation),
        }
    }
}

// ============================================================================
// Records
// ============================================================================

#[derive(Args, Debug)]
pub struct RecordsArgs {
    /// Zone to list
    #[arg(short, long)]
    pub zone: String,

    /// Only the record with this name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Filter by record type (A, CNAME, MX, TXT, ...)
    #[arg(short = 't', long = "type")]
    pub record_type: Option<String>,
}
