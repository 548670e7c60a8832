use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::ClientResult;

/// Raw provider shape, 1:1 with the backend's `response` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpAddrInfoResponse {
    pub status: String,
    pub message: Option<String>,
    pub continent: Option<String>,
    pub continent_code: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub region: Option<String>,
    pub region_name: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub zip: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub timezone: Option<String>,
    pub offset: Option<i64>,
    pub isp: Option<String>,
    pub org: Option<String>,
    #[serde(rename = "as")]
    pub autonomous_system: Option<String>,
    pub asname: Option<String>,
    pub mobile: Option<bool>,
    pub proxy: Option<bool>,
    pub hosting: Option<bool>,
    pub query: Option<String>,
    pub reverse: Option<String>,
}

/// Repackaged snake-case shape the backend derives from the provider reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpAddrInfoData {
    pub queried_ip_addr: String,
    pub query_status: Option<String>,
    pub query_message: Option<String>,
    pub continent: Option<String>,
    pub continent_code: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub region: Option<String>,
    pub region_name: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub zip: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub timezone: Option<String>,
    pub offset: Option<i64>,
    pub isp: Option<String>,
    pub org: Option<String>,
    #[serde(rename = "as")]
    pub autonomous_system: Option<String>,
    pub as_name: Option<String>,
    pub is_mobile: Option<bool>,
    pub is_proxy: Option<bool>,
    pub is_hosting: Option<bool>,
    pub reverse: Option<String>,
}

/// Lookup result body. The two timestamps travel as RFC 3339 strings and
/// come out as typed values here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpAddrInfoResult {
    pub success: bool,
    pub status_code: Option<u16>,
    pub url: Option<String>,
    pub query_start_at: Option<DateTime<Utc>>,
    pub query_stop_at: Option<DateTime<Utc>>,
    pub query_ms: Option<f64>,
    #[serde(default)]
    pub errors: Vec<String>,
    pub exception: Option<Value>,
    pub stack_trace: Option<String>,
    pub response: Option<IpAddrInfoResponse>,
    pub data: Option<IpAddrInfoData>,
}

impl IpAddrInfoResult {
    /// Decode a lookup body, converting the wire-format timestamp strings.
    /// Pure and separate from the fetch so it can be tested in isolation.
    pub fn from_value(value: Value) -> ClientResult<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

/// What [`HttpApiClient::lookup_ip`] hands back to callers.
///
/// [`HttpApiClient::lookup_ip`]: crate::api::HttpApiClient::lookup_ip
#[derive(Debug, Clone)]
pub struct IpLookup {
    pub url: String,
    pub status_code: u16,
    pub result: IpAddrInfoResult,
}
