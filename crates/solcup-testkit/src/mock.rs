//! mockito helpers for the release endpoint and binary downloads

use mockito::{Mock, ServerGuard};

/// Serves `body` as the release listing at `GET /releases`
///
/// Returns the mock and the full endpoint URL.
pub fn mock_releases_endpoint(server: &mut ServerGuard, status: usize, body: &str) -> (Mock, String) {
    let mock = server
        .mock("GET", "/releases")
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create();
    (mock, format!("{}/releases", server.url()))
}

/// Serves `bytes` at `GET path`, expecting exactly `expected_hits` requests
pub fn mock_download(
    server: &mut ServerGuard,
    path: &str,
    bytes: &[u8],
    expected_hits: usize,
) -> (Mock, String) {
    let mock = server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "application/octet-stream")
        .with_body(bytes)
        .expect(expected_hits)
        .create();
    (mock, format!("{}{}", server.url(), path))
}
