//! Main cPanel API client implementation.

use crate::api::ZoneEditApi;
use crate::envelope;
use cpanel_core::{Credentials, CpanelError, Result};
use reqwest::header::AUTHORIZATION;
use reqwest::Client as HttpClient;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Port cPanel serves its user-level API on
const DEFAULT_PORT: u16 = 2083;

/// Path of the JSON API endpoint
const API_PATH: &str = "/json-api/cpanel";

/// API 2 is the version the ZoneEdit module lives in
const API_VERSION: &str = "2";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// cPanel API client
///
/// Holds nothing but the credentials and a connection pool; every call
/// carries its own `Authorization` header.
#[derive(Clone)]
pub struct CpanelClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    credentials: Credentials,
    base_url: String,
}

impl std::fmt::Debug for CpanelClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpanelClient")
            .field("base_url", &self.inner.base_url)
            .field("credentials", &self.inner.credentials)
            .finish_non_exhaustive()
    }
}

impl CpanelClient {
    /// Create a new client for the given credentials using default settings
    pub fn new(credentials: Credentials) -> Result<Self> {
        CpanelClientBuilder::new(credentials).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(credentials: Credentials) -> CpanelClientBuilder {
        CpanelClientBuilder::new(credentials)
    }

    /// Access ZoneEdit module functions
    #[must_use]
    pub fn zone_edit(&self) -> ZoneEditApi<'_> {
        ZoneEditApi::new(self)
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Call an API 2 function and return the `data` member of its result
    ///
    /// Failures reported by status code, by `cpanelresult.error` or by an
    /// embedded `statusmsg` all come back as `Err`.
    pub(crate) async fn call(
        &self,
        module: &str,
        function: &str,
        params: &[(&str, &str)],
    ) -> Result<Value> {
        let url = self.build_url(module, function, params)?;
        debug!(module, function, host = %self.inner.credentials.host, "GET request");

        let response = self
            .inner
            .http
            .get(url)
            .header(AUTHORIZATION, self.inner.credentials.authorization())
            .send()
            .await
            .map_err(|e| CpanelError::Http(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| CpanelError::Http(e.to_string()))?;

        debug!(function, status, "response received");
        envelope::into_data(function, status, &body)
    }

    /// Build the request URL with the module selector and call parameters
    fn build_url(&self, module: &str, function: &str, params: &[(&str, &str)]) -> Result<url::Url> {
        let mut url = url::Url::parse(&format!("{}{}", self.inner.base_url, API_PATH))
            .map_err(|e| CpanelError::InvalidUrl(format!("{}: {e}", self.inner.base_url)))?;

        url.query_pairs_mut()
            .append_pair("cpanel_jsonapi_module", module)
            .append_pair("cpanel_jsonapi_func", function)
            .append_pair("cpanel_jsonapi_version", API_VERSION)
            .extend_pairs(params.iter().copied());

        Ok(url)
    }
}

/// Builder for configuring a [`CpanelClient`]
pub struct CpanelClientBuilder {
    credentials: Credentials,
    base_url: Option<String>,
    timeout: Duration,
    user_agent: String,
}

impl CpanelClientBuilder {
    /// Create a new builder for the given credentials
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("cpanel-dns01/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the base URL (useful for testing)
    ///
    /// Defaults to `https://<host>:2083`.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client
    pub fn build(self) -> Result<CpanelClient> {
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| CpanelError::Http(format!("failed to build HTTP client: {e}")))?;

        let base_url = self
            .base_url
            .unwrap_or_else(|| format!("https://{}:{DEFAULT_PORT}", self.credentials.host))
            .trim_end_matches('/')
            .to_string();

        Ok(CpanelClient {
            inner: Arc::new(ClientInner {
                http,
                credentials: self.credentials,
                base_url,
            }),
        })
    }
}
