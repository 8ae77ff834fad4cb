//! DNS-01 challenge automation for zones hosted on cPanel.
//!
//! The [`Authenticator`] publishes the `_acme-challenge` TXT record through
//! the ZoneEdit API and removes it again after validation:
//!
//! ```rust,ignore
//! use cpanel_dns01::{Authenticator, AuthenticatorConfig, ChallengeRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), cpanel_dns01::PluginError> {
//!     let auth = Authenticator::from_default_credentials(AuthenticatorConfig::default())?;
//!     let challenges = [ChallengeRequest::acme("example.com", "gfj9Xq...Rg85nM")];
//!
//!     auth.perform_all(&challenges).await?;
//!     // ... ask the ACME server to validate ...
//!     auth.cleanup_all(&challenges).await?;
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/cpanel-dns01/1.0.1")]

mod authenticator;
mod config;
mod error;

pub use authenticator::{Authenticator, Outcome, DESCRIPTION};
pub use config::{AuthenticatorConfig, MissingRecordPolicy, DEFAULT_PROPAGATION, DEFAULT_TTL};
pub use error::{Phase, PluginError, PluginResult, SETUP_INSTRUCTIONS};

pub use cpanel_client::{CpanelClient, CredentialsFile};
pub use cpanel_core::{ChallengeRequest, Credentials, ZoneEditor};
