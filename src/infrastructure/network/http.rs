// HTTP client utilities
use crate::domain::error::TlxError;
use crate::infrastructure::config::NetworkConfig;
use reqwest::Client;
use std::time::Duration;

/// Create an HTTP client for one translation endpoint
///
/// The timeout bounds each attempt, not the whole retry loop.
pub fn create_client(network: &NetworkConfig, http_proxy: Option<&str>) -> Result<Client, TlxError> {
    let mut builder = Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(30))
        .timeout(Duration::from_secs(network.timeout_secs))
        .user_agent(network.user_agent.as_str());

    if let Some(proxy) = http_proxy.map(str::trim).filter(|p| !p.is_empty()) {
        builder = builder.proxy(reqwest::Proxy::all(proxy)?);
    }

    Ok(builder.build()?)
}
