//! HTTP client construction for GitHub interactions

use reqwest::blocking::Client;
use std::time::Duration;

/// User agent sent with every request (the GitHub API rejects requests without one)
pub const USER_AGENT: &str = concat!("solcup/", env!("CARGO_PKG_VERSION"));

/// Upper bound on a whole listing request, on top of the per-read timeout
pub const LISTING_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the release listing
///
/// `read_timeout` bounds each read and resets after every successful one, so
/// a slow but live server can stream a large listing. A stalled one fails
/// after `read_timeout` of silence and the catalog falls back to the cache.
pub fn build_catalog_client(
    connect_timeout: Duration,
    read_timeout: Duration,
) -> Result<Client, reqwest::Error> {
    let builder = reqwest::ClientBuilder::new()
        .user_agent(USER_AGENT)
        .connect_timeout(connect_timeout)
        .read_timeout(read_timeout);

    reqwest::blocking::ClientBuilder::from(builder)
        .timeout(LISTING_REQUEST_TIMEOUT)
        .build()
}

/// Client for compiler downloads (large bodies, generous timeout)
pub fn build_download_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_clients() {
        assert!(build_catalog_client(Duration::from_millis(200), Duration::from_secs(1)).is_ok());
        assert!(build_download_client(Duration::from_secs(300)).is_ok());
    }

    #[test]
    fn test_user_agent_names_crate() {
        assert!(USER_AGENT.starts_with("solcup/"));
    }
}
