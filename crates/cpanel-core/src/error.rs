use thiserror::Error;

/// Result type alias for cPanel operations
pub type Result<T> = std::result::Result<T, CpanelError>;

/// Errors that can occur when talking to the cPanel ZoneEdit API
#[derive(Error, Debug)]
pub enum CpanelError {
    /// Credentials file missing, unreadable or malformed
    #[error("configuration error: {0}")]
    Config(String),

    /// The panel rejected the user/token pair
    #[error("authentication failed: {message}")]
    Unauthorized {
        /// Message returned by the panel, if any
        message: String,
    },

    /// The API reported a failure, either through a non-2xx status or an
    /// embedded status message in a successful response
    #[error("cPanel {function} failed: {message}")]
    Remote {
        /// ZoneEdit function that was called
        function: String,
        /// HTTP status code, when the failure was signalled by status
        status: Option<u16>,
        /// Error message from the API
        message: String,
    },

    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The response envelope did not have the expected shape
    #[error("unexpected response from {function}: {message}")]
    InvalidResponse {
        /// ZoneEdit function that was called
        function: String,
        /// What was wrong with the response
        message: String,
    },
}

impl CpanelError {
    /// Build a remote error for a ZoneEdit function
    pub fn remote(function: impl Into<String>, status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Remote {
            function: function.into(),
            status,
            message: message.into(),
        }
    }

    /// Returns true if the error is due to authentication
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Returns true if the error came from the credentials file
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Returns the HTTP status code if the failure carried one
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => *status,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_display() {
        let err = CpanelError::remote("add_zone_record", None, "zone is locked");
        assert_eq!(err.to_string(), "cPanel add_zone_record failed: zone is locked");
        assert_eq!(err.status_code(), None);

        let err = CpanelError::remote("fetchzone_records", Some(500), "boom");
        assert_eq!(err.status_code(), Some(500));
    }

    #[test]
    fn test_error_classification() {
        let err = CpanelError::Unauthorized {
            message: "Access denied".to_string(),
        };
        assert!(err.is_auth_error());
        assert!(!err.is_config_error());

        let err = CpanelError::Config("missing token".to_string());
        assert!(err.is_config_error());
        assert!(err.to_string().contains("missing token"));
    }
}
