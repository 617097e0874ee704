//! ipgeolocation.io Client
//!
//! Implements GeolocationProvider over the `/ipgeo` HTTP endpoint.
//! Each lookup is a single GET authenticated by an `apiKey` query
//! parameter; the JSON answer is decoded into a GeolocationResult.
//!
//! See: https://ipgeolocation.io/documentation/ip-geolocation-api.html

use crate::config::{Config, DEFAULT_BASE_URL};
use crate::domain::entities::GeolocationResult;
use crate::domain::ports::GeolocationProvider;
use crate::error::GeolocationError;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use url::Url;

/// Bound applied to connect, TLS handshake, keep-alive, idle connections
/// and the wait for response headers.
const TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the ipgeolocation.io API.
///
/// The underlying reqwest client pools connections, so one instance
/// should be shared (e.g. behind an `Arc`) rather than rebuilt per lookup.
pub struct GeolocationClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
    header_timeout: Duration,
    verbose: AtomicBool,
}

impl GeolocationClient {
    /// Create a client for the production endpoint.
    pub fn new(api_key: impl Into<String>) -> Result<Self, GeolocationError> {
        Self::with_timeout(api_key, TIMEOUT)
    }

    /// Create a client from loaded configuration.
    pub fn from_config(cfg: &Config) -> Result<Self, GeolocationError> {
        Ok(Self::new(cfg.api_key.clone())?
            .with_base_url(cfg.base_url.clone())
            .with_verbose(cfg.verbose))
    }

    pub(crate) fn with_timeout(
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GeolocationError> {
        // connect_timeout covers TCP connect and the TLS handshake. No
        // request-wide timeout: the header wait is bounded per call and
        // the body is read without a deadline.
        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .tcp_keepalive(timeout)
            .pool_idle_timeout(timeout)
            .build()?;

        Ok(Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client,
            header_timeout: timeout,
            verbose: AtomicBool::new(false),
        })
    }

    /// Point the client at another endpoint (a mock server, a proxy).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_verbose(self, verbose: bool) -> Self {
        self.set_verbose(verbose);
        self
    }

    /// Toggle logging of raw response bodies.
    pub fn set_verbose(&self, verbose: bool) {
        self.verbose.store(verbose, Ordering::Relaxed);
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose.load(Ordering::Relaxed)
    }

    /// Build the lookup URL. The `ip` parameter is left out entirely
    /// when no address is given.
    pub fn request_url(&self, ip: Option<&str>) -> Result<Url, GeolocationError> {
        let mut url = Url::parse(&self.base_url)?;
        url.set_query(None);
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("apiKey", &self.api_key);
            if let Some(ip) = ip.filter(|ip| !ip.is_empty()) {
                query.append_pair("ip", ip);
            }
        }
        Ok(url)
    }

    /// Fetch the geolocation of `ip`, or of this machine's public
    /// address when `ip` is `None` or empty.
    pub async fn fetch_geolocation(
        &self,
        ip: Option<&str>,
    ) -> Result<GeolocationResult, GeolocationError> {
        let url = self.request_url(ip)?;
        let target = ip.filter(|ip| !ip.is_empty()).unwrap_or("<self>");

        // Errors carry the request URL, which holds the API key.
        let mut response = tokio::time::timeout(self.header_timeout, self.client.get(url).send())
            .await
            .map_err(|_| GeolocationError::HeaderTimeout(self.header_timeout))?
            .map_err(|e| GeolocationError::Transport(e.without_url()))?;

        let status = response.status();

        // Keep whatever arrived before a read failure so it can be dumped.
        let mut body = Vec::new();
        let read = loop {
            match response.chunk().await {
                Ok(Some(chunk)) => body.extend_from_slice(&chunk),
                Ok(None) => break Ok(()),
                Err(e) => break Err(e),
            }
        };

        tracing::debug!(
            "geolocation lookup ip={} status={} bytes={}",
            target,
            status.as_u16(),
            body.len()
        );

        if self.is_verbose() {
            log_raw_body(&body);
        }

        read.map_err(|e| GeolocationError::Transport(e.without_url()))?;

        if status != StatusCode::OK {
            return Err(GeolocationError::Api {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

/// Dump a response body as text, or as a byte list when it is not UTF-8.
fn log_raw_body(body: &[u8]) {
    match std::str::from_utf8(body) {
        Ok(text) => tracing::info!("[verbose] geolocation response: {}", text),
        Err(_) => tracing::info!("[verbose] geolocation response: {:?}", body),
    }
}

impl fmt::Debug for GeolocationClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeolocationClient")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("verbose", &self.is_verbose())
            .finish()
    }
}

#[async_trait]
impl GeolocationProvider for GeolocationClient {
    async fn fetch_geolocation(
        &self,
        ip: Option<&str>,
    ) -> Result<GeolocationResult, GeolocationError> {
        GeolocationClient::fetch_geolocation(self, ip).await
    }
}
