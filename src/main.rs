//! ipgeolocation - command line lookup
//!
//! Usage: `ipgeolocation [IP]`. Without an address, the machine's own
//! public IP is resolved. The result is printed as JSON.

use ipgeolocation::{load_config, GeolocationClient, GeolocationProvider};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let cfg = load_config()?;

    // Setup logging
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let ip = std::env::args().nth(1);

    tracing::debug!(
        "looking up {} via {}",
        ip.as_deref().unwrap_or("own address"),
        cfg.base_url
    );

    let provider: Arc<dyn GeolocationProvider> = Arc::new(GeolocationClient::from_config(&cfg)?);

    let result = provider.fetch_geolocation(ip.as_deref()).await?;

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
