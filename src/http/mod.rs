mod client;
mod response;
pub mod mock_transport;
pub mod transport;


pub use client::{HttpClient, DEFAULT_TIMEOUT_MS};
pub use response::HttpResponse;
pub use transport::{RawResponse, ReqwestTransport, Transport};
