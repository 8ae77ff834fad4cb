use serde::{Deserialize, Serialize};
use std::fmt;

/// API token credentials for a cPanel account with ZoneEdit access
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Host running cPanel (the panel is reached on port 2083)
    #[serde(alias = "domain")]
    pub host: String,

    /// cPanel account name
    pub user: String,

    /// API token generated for the account
    pub token: String,
}

impl Credentials {
    /// Create credentials
    pub fn new(host: impl Into<String>, user: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            user: user.into(),
            token: token.into(),
        }
    }

    /// Value of the `Authorization` header for API token auth
    #[must_use]
    pub fn authorization(&self) -> String {
        format!("cpanel {}:{}", self.user, self.token)
    }

    /// Names of required fields that are empty
    #[must_use]
    pub fn blank_fields(&self) -> Vec<&'static str> {
        [("host", &self.host), ("user", &self.user), ("token", &self.token)]
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("token", &"<redacted>")
            .finish()
    }
}
