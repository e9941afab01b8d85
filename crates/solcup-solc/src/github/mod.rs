//! HTTP plumbing shared by the release catalog and the installer
//!
//! - client construction with a user agent and explicit timeouts
//! - streaming downloads into any writer

pub mod client;
pub mod download;

pub use client::{USER_AGENT, build_catalog_client, build_download_client};
pub use download::{DownloadError, download_to_writer, fetch_text};
