pub mod api;
pub mod config;
pub mod core;
pub mod http;

pub use crate::core::{ClientError, ClientResult};
pub use api::HttpApiClient;
pub use config::{ApiConfig, HttpScheme};
pub use http::{HttpClient, HttpResponse};
