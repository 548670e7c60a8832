use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::core::ClientResult;

const USER_AGENT: &str = concat!("ipwatch-client/", env!("CARGO_PKG_VERSION"));

/// Raw result of a transport fetch, before JSON decoding.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// Final URL after any redirects.
    pub url: String,
    pub status: u16,
    pub body: String,
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, url: Url) -> ClientResult<RawResponse>;
}

#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> ClientResult<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn fetch(&self, url: Url) -> ClientResult<RawResponse> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let body = response.text().await?;

        Ok(RawResponse { url, status, body })
    }
}
