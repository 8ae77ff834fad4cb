//! Credential file loading.

use cpanel_core::{Credentials, CpanelError, Result};
use directories::BaseDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory under the home directory holding the credentials file
const CONFIG_DIR: &str = ".cpanel";

/// Credentials file name
const CONFIG_FILE: &str = "config";

/// The per-user credentials file, `~/.cpanel/config`
///
/// The file is a JSON object with `host` (or `domain`), `user` and `token`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialsFile;

impl CredentialsFile {
    /// Location of the credentials file for the current user
    pub fn default_path() -> Result<PathBuf> {
        let dirs = BaseDirs::new()
            .ok_or_else(|| CpanelError::Config("could not determine home directory".to_string()))?;

        Ok(dirs.home_dir().join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load credentials from the default location
    pub fn load_default() -> Result<Credentials> {
        Self::load(&Self::default_path()?)
    }

    /// Load credentials from `path`
    pub fn load(path: &Path) -> Result<Credentials> {
        #[cfg(unix)]
        warn_if_shared(path);

        let content = std::fs::read_to_string(path).map_err(|e| {
            CpanelError::Config(format!("failed to read '{}': {e}", path.display()))
        })?;

        let credentials = Self::parse(&content)
            .map_err(|e| CpanelError::Config(format!("'{}': {e}", path.display())))?;

        debug!(path = %path.display(), host = %credentials.host, user = %credentials.user, "loaded credentials");
        Ok(credentials)
    }

    /// Parse credentials from the file's JSON content
    pub fn parse(content: &str) -> std::result::Result<Credentials, String> {
        let credentials: Credentials =
            serde_json::from_str(content).map_err(|e| format!("invalid credentials JSON: {e}"))?;

        let blank = credentials.blank_fields();
        if !blank.is_empty() {
            return Err(format!("empty value for {}", blank.join(", ")));
        }

        Ok(credentials)
    }
}

#[cfg(unix)]
fn warn_if_shared(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    if let Ok(metadata) = std::fs::metadata(path) {
        let mode = metadata.permissions().mode() & 0o777;
        if mode & 0o077 != 0 {
            tracing::warn!(
                path = %path.display(),
                mode = format!("{mode:o}"),
                "credentials file is readable by other users (should be 0600)"
            );
        }
    }
}
