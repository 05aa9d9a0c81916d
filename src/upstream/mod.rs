//! ZX-Art upstream gateway
//!
//! Thin client over the archive's JSON export and raw file endpoints. One
//! GET per operation, fixed 10-second timeout, no retries: any transport
//! failure or non-success status surfaces as a single `UpstreamError` and
//! the handlers decide what the legacy client gets to see.

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONNECTION, USER_AGENT};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

use crate::core::query;
use crate::models::{Envelope, Release};

/// The archive rejects or rate-limits default client user agents on the
/// file endpoint, so downloads masquerade as a desktop browser.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Failure of a single upstream call
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream returned status {0}")]
    Status(StatusCode),
}

/// Gateway to the ZX-Art archive API
///
/// Constructed once at startup and shared read-only across handlers;
/// holds no mutable state.
#[derive(Debug, Clone)]
pub struct ZxArt {
    client: Client,
    base_url: String,
}

impl ZxArt {
    pub fn new(base_url: impl Into<String>) -> Result<Self, UpstreamError> {
        let client = Client::builder().timeout(UPSTREAM_TIMEOUT).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// Run a release search with an already-built filter query.
    pub async fn search_releases(&self, filter: &str) -> Result<Vec<Release>, UpstreamError> {
        let url = format!("{}/{}", self.base_url, filter);
        let envelope = self.get_envelope(&url).await?;
        Ok(envelope.response_data.zx_release)
    }

    /// Look a single release up by id. `Ok(None)` means the archive has no
    /// such release, which is not an upstream failure.
    pub async fn lookup_release(&self, release_id: u64) -> Result<Option<Release>, UpstreamError> {
        let url = format!("{}/{}", self.base_url, query::lookup_filter(release_id));
        let envelope = self.get_envelope(&url).await?;
        Ok(envelope.response_data.zx_release.into_iter().next())
    }

    /// Fetch the raw bytes of one file. The payload is buffered fully in
    /// memory; the legacy protocol needs an exact Content-Length anyway.
    pub async fn fetch_file(
        &self,
        release_id: u64,
        file_id: u64,
        file_name: &str,
    ) -> Result<Bytes, UpstreamError> {
        let url = self.file_url(release_id, file_id, file_name);

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));

        let response = self.client.get(&url).headers(headers).send().await?;
        if !response.status().is_success() {
            return Err(UpstreamError::Status(response.status()));
        }

        Ok(response.bytes().await?)
    }

    fn file_url(&self, release_id: u64, file_id: u64, file_name: &str) -> String {
        format!(
            "{}/zxfile/id:{}/fileId:{}/{}",
            self.base_url,
            release_id,
            file_id,
            urlencoding::encode(file_name)
        )
    }

    async fn get_envelope(&self, url: &str) -> Result<Envelope, UpstreamError> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(UpstreamError::Status(response.status()));
        }
        Ok(response.json::<Envelope>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let gateway = ZxArt::new("https://zxart.ee/").unwrap();
        let url = gateway.file_url(5, 9, "elite.tap");
        assert_eq!(url, "https://zxart.ee/zxfile/id:5/fileId:9/elite.tap");
    }

    #[test]
    fn test_file_url_encodes_file_name() {
        let gateway = ZxArt::new("https://zxart.ee").unwrap();
        let url = gateway.file_url(12, 34, "my game (final).tap");
        assert_eq!(
            url,
            "https://zxart.ee/zxfile/id:12/fileId:34/my%20game%20%28final%29.tap"
        );
    }
}
