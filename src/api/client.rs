use std::sync::Arc;

use log::error;
use serde_json::Value;

use super::types::{IpAddrInfoResult, IpLookup};
use crate::config::ApiConfig;
use crate::core::ClientResult;
use crate::http::{HttpClient, HttpResponse, Transport};

/// Client for the IP lookup HTTP API, fixed to one backend address.
pub struct HttpApiClient {
    http: HttpClient,
}

impl HttpApiClient {
    pub fn new(config: ApiConfig) -> ClientResult<Self> {
        Ok(Self {
            http: HttpClient::new(config.scheme, config.host, config.port, config.timeout_ms)?,
        })
    }

    /// Build a client from the environment (see [`ApiConfig::from_env`]).
    pub fn from_env() -> ClientResult<Self> {
        Self::new(ApiConfig::from_env())
    }

    pub fn with_transport(config: ApiConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            http: HttpClient::with_transport(
                config.scheme,
                config.host,
                config.port,
                config.timeout_ms,
                transport,
            ),
        }
    }

    /// Health probe against `/`. Never fails: anything short of a 200 with
    /// `success: true` in the body reads as unhealthy.
    pub async fn check_health(&self) -> bool {
        match self.http.get("/", &[]).await {
            Ok(response) => {
                response.status_code == 200
                    && response.response_data.get("success").and_then(Value::as_bool)
                        == Some(true)
            }
            Err(err) => {
                error!("Exception caught when attempting to check HTTP API health: {err}");
                false
            }
        }
    }

    /// Look up geolocation/ISP metadata for `ip_address`, restricted to the
    /// given provider fields. Unlike [`Self::check_health`], failures are
    /// logged and propagated to the caller.
    pub async fn lookup_ip(&self, ip_address: &str, fields: &[&str]) -> ClientResult<IpLookup> {
        let path = format!("/lookup-ip/{ip_address}");
        let fields = fields.join(",");

        let outcome: ClientResult<IpLookup> = async {
            let HttpResponse {
                url,
                status_code,
                response_data,
            } = self.http.get(&path, &[("fields", &fields)]).await?;

            let result = IpAddrInfoResult::from_value(response_data)?;

            Ok(IpLookup {
                url,
                status_code,
                result,
            })
        }
        .await;

        outcome.inspect_err(|err| {
            error!("Exception caught when attempting to lookup IP {ip_address}: {err}");
        })
    }
}
