use std::env;
use std::process;

use ipwatch_client::api::{ALL_FIELDS, DEFAULT_FIELDS};
use ipwatch_client::{ApiConfig, ClientResult, HttpApiClient};
use log::warn;

#[tokio::main]
async fn main() -> ClientResult<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut args = env::args().skip(1);
    let Some(ip_address) = args.next() else {
        eprintln!("usage: ipwatch <ip-address> [--all-fields]");
        process::exit(2);
    };
    let all_fields = args.any(|arg| arg == "--all-fields");

    let client = HttpApiClient::new(ApiConfig::from_env())?;

    if !client.check_health().await {
        warn!("HTTP API health check failed, attempting lookup anyway");
    }

    let fields: &[&str] = if all_fields {
        &ALL_FIELDS
    } else {
        &DEFAULT_FIELDS
    };
    let lookup = client.lookup_ip(&ip_address, fields).await?;

    for error in &lookup.result.errors {
        eprintln!("{error}");
    }

    println!("{}", serde_json::to_string_pretty(&lookup.result)?);

    Ok(())
}
