use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;
use url::Url;

use super::transport::{RawResponse, Transport};
use crate::core::{ClientError, ClientResult};

#[derive(Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay: Option<Duration>,
}

/// Scripted transport for tests. Cycles through the configured responses,
/// sleeping for the scripted delay first. Any URL containing "timeout"
/// simulates a transport rejection instead of responding.
#[derive(Clone)]
pub struct MockTransport {
    responses: Arc<Vec<MockResponse>>,
    current_response: Arc<AtomicUsize>,
}

impl MockTransport {
    pub fn new(responses: Vec<MockResponse>) -> Self {
        Self {
            responses: Arc::new(responses),
            current_response: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn single(status: u16, body: impl Into<String>) -> Self {
        Self::new(vec![MockResponse {
            status,
            body: body.into(),
            delay: None,
        }])
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn fetch(&self, url: Url) -> ClientResult<RawResponse> {
        if url.as_str().contains("timeout") {
            return Err(ClientError::Transport(
                "Request timed out [mocked]".to_string(),
            ));
        }

        let index = self.current_response.fetch_add(1, Ordering::SeqCst);
        let response = &self.responses[index % self.responses.len()];

        if let Some(delay) = response.delay {
            sleep(delay).await;
        }

        Ok(RawResponse {
            url: url.to_string(),
            status: response.status,
            body: response.body.clone(),
        })
    }
}
