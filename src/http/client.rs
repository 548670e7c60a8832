use std::sync::Arc;
use std::time::Duration;

use log::debug;
use tokio::time::sleep;
use url::Url;

use super::transport::{RawResponse, ReqwestTransport, Transport};
use super::HttpResponse;
use crate::config::HttpScheme;
use crate::core::{ClientError, ClientResult};

pub const DEFAULT_TIMEOUT_MS: u64 = 2000;

/// HTTP client bound to a fixed scheme/host/port, racing every request
/// against a timer.
pub struct HttpClient {
    scheme: HttpScheme,
    host: String,
    port: u16,
    timeout: Duration,
    transport: Arc<dyn Transport>,
}

impl HttpClient {
    pub fn new(
        scheme: HttpScheme,
        host: impl Into<String>,
        port: u16,
        timeout_ms: u64,
    ) -> ClientResult<Self> {
        Ok(Self::with_transport(
            scheme,
            host,
            port,
            timeout_ms,
            Arc::new(ReqwestTransport::new()?),
        ))
    }

    pub fn with_transport(
        scheme: HttpScheme,
        host: impl Into<String>,
        port: u16,
        timeout_ms: u64,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            scheme,
            host: host.into(),
            port,
            timeout: Duration::from_millis(timeout_ms),
            transport,
        }
    }

    /// Fetch with the default 2000ms upper bound.
    pub async fn fetch(&self, url: Url) -> ClientResult<RawResponse> {
        self.fetch_with_timeout(url, Duration::from_millis(DEFAULT_TIMEOUT_MS))
            .await
    }

    /// Race the transport fetch against a timer.
    ///
    /// The fetch runs as a detached task: when the timer wins, the request
    /// is abandoned rather than aborted. The losing side is dropped either
    /// way, so no timer outlives the call.
    pub async fn fetch_with_timeout(
        &self,
        url: Url,
        timeout: Duration,
    ) -> ClientResult<RawResponse> {
        let transport = Arc::clone(&self.transport);
        let fetch = tokio::spawn(async move { transport.fetch(url).await });

        tokio::select! {
            joined = fetch => joined?,
            _ = sleep(timeout) => Err(ClientError::Timeout),
        }
    }

    /// Perform a GET against the client's base address and decode the body
    /// as JSON. An empty `query` produces a URL with no query string.
    /// Timeout, transport, and decode errors propagate unchanged.
    pub async fn get(&self, path: &str, query: &[(&str, &str)]) -> ClientResult<HttpResponse> {
        let mut url = Url::parse(&format!("{}://{}:{}", self.scheme, self.host, self.port))?;
        url.set_path(path);

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        debug!("GET {}", url);
        let raw = self.fetch_with_timeout(url, self.timeout).await?;
        let response_data = serde_json::from_str(&raw.body)?;

        Ok(HttpResponse {
            url: raw.url,
            status_code: raw.status,
            response_data,
        })
    }
}
