//! Generic download functionality for GitHub resources

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use std::io::{self, Write};
use thiserror::Error;
use url::Url;

/// Download error types
#[derive(Debug, Error)]
pub enum DownloadError {
    /// Request could not be sent or the body could not be read
    #[error("request to {url} failed: {source}")]
    Request {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    HttpStatus {
        url: Url,
        status: reqwest::StatusCode,
    },

    /// Writing the body failed
    #[error("I/O error while downloading {url}: {source}")]
    Io {
        url: Url,
        #[source]
        source: io::Error,
    },
}

/// GETs `url` and returns the body as text, asking for JSON
pub fn fetch_text(client: &Client, url: &Url) -> Result<String, DownloadError> {
    let response = client
        .get(url.as_str())
        .header(ACCEPT, "application/json")
        .send()
        .map_err(|source| DownloadError::Request {
            url: url.clone(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(DownloadError::HttpStatus {
            url: url.clone(),
            status,
        });
    }

    response.text().map_err(|source| DownloadError::Request {
        url: url.clone(),
        source,
    })
}

/// Streams the body of `url` into `writer`, returning the number of bytes written
pub fn download_to_writer<W: Write>(
    client: &Client,
    url: &Url,
    writer: &mut W,
) -> Result<u64, DownloadError> {
    let mut response = client
        .get(url.as_str())
        .send()
        .map_err(|source| DownloadError::Request {
            url: url.clone(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(DownloadError::HttpStatus {
            url: url.clone(),
            status,
        });
    }

    let written = io::copy(&mut response, writer).map_err(|source| DownloadError::Io {
        url: url.clone(),
        source,
    })?;
    writer.flush().map_err(|source| DownloadError::Io {
        url: url.clone(),
        source,
    })?;

    log::debug!("downloaded {} bytes from {}", written, url);
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::build_download_client;
    use mockito::Server;
    use std::time::Duration;

    fn client() -> Client {
        build_download_client(Duration::from_secs(10)).unwrap()
    }

    #[test]
    fn test_download_to_writer_streams_body() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/solc-static-linux")
            .with_status(200)
            .with_body(b"\x7fELF fake compiler")
            .create();

        let url = Url::parse(&format!("{}/solc-static-linux", server.url())).unwrap();
        let mut buffer = Vec::new();
        let written = download_to_writer(&client(), &url, &mut buffer).unwrap();

        mock.assert();
        assert_eq!(written, buffer.len() as u64);
        assert_eq!(buffer, b"\x7fELF fake compiler");
    }

    #[test]
    fn test_download_reports_http_status() {
        let mut server = Server::new();
        let _mock = server.mock("GET", "/missing").with_status(404).create();

        let url = Url::parse(&format!("{}/missing", server.url())).unwrap();
        let mut buffer = Vec::new();
        let err = download_to_writer(&client(), &url, &mut buffer).unwrap_err();

        match err {
            DownloadError::HttpStatus { status, .. } => assert_eq!(status.as_u16(), 404),
            other => panic!("Expected HttpStatus, got {:?}", other),
        }
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_fetch_text_sends_accept_header() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/releases")
            .match_header("accept", "application/json")
            .match_header("user-agent", mockito::Matcher::Regex("^solcup/".to_string()))
            .with_status(200)
            .with_body("[]")
            .create();

        let url = Url::parse(&format!("{}/releases", server.url())).unwrap();
        assert_eq!(fetch_text(&client(), &url).unwrap(), "[]");
        mock.assert();
    }

    #[test]
    fn test_unreachable_host_is_request_error() {
        // Port 9 (discard) on localhost is closed in test environments
        let url = Url::parse("http://127.0.0.1:9/releases").unwrap();
        let err = fetch_text(&client(), &url).unwrap_err();
        assert!(matches!(err, DownloadError::Request { .. }));
    }
}
