mod client;
mod fields;
mod types;


pub use client::HttpApiClient;
pub use fields::{ALL_FIELDS, DEFAULT_FIELDS};
pub use types::{IpAddrInfoData, IpAddrInfoResponse, IpAddrInfoResult, IpLookup};
