use serde_json::Value;

/// Normalized response handed back by [`HttpClient::get`].
///
/// Only produced when the fetch side of the timeout race completed;
/// a timed-out request never yields a status code or body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub url: String,
    pub status_code: u16,
    pub response_data: Value,
}
