//! Command implementations.

pub mod cleanup;
pub mod perform;
pub mod records;

use std::path::PathBuf;

use cpanel_dns01::{Authenticator, AuthenticatorConfig};

use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Credentials file given on the command line
    pub credentials: Option<String>,

    /// Authenticator settings
    pub config: AuthenticatorConfig,

    /// Output format
    pub output_format: OutputFormat,

    /// Verbose output
    pub verbose: bool,
}

impl Context {
    /// Credentials file to read, with `~` and environment variables expanded
    pub fn credentials_path(&self) -> anyhow::Result<Option<PathBuf>> {
        self.credentials
            .as_deref()
            .map(|path| {
                shellexpand::full(path)
                    .map(|expanded| PathBuf::from(expanded.as_ref()))
                    .map_err(|e| anyhow::anyhow!("invalid credentials path '{path}': {e}"))
            })
            .transpose()
    }

    /// Create an authenticator from the configured credentials.
    pub fn authenticator(&self) -> anyhow::Result<Authenticator> {
        let auth = match self.credentials_path()? {
            Some(path) => Authenticator::from_credentials_file(&path, self.config.clone())?,
            None => Authenticator::from_default_credentials(self.config.clone())?,
        };
        Ok(auth)
    }
}
