use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::app::{HisnError, Result};
use crate::fetcher::{FetchResult, Fetcher};

/// Fetches corpus documents relative to a base URL.
pub struct HttpFetcher {
    client: Client,
    base: Url,
}

impl HttpFetcher {
    pub fn new(base: &str) -> Result<Self> {
        // A trailing slash makes `join` append instead of replacing the last segment.
        let base = if base.ends_with('/') {
            Url::parse(base)?
        } else {
            Url::parse(&format!("{}/", base))?
        };

        if base.cannot_be_a_base() || base.host_str().is_none() {
            return Err(HisnError::Config(format!("Not a usable base URL: {}", base)));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .gzip(true)
            .brotli(true)
            .user_agent(concat!("hisn/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base })
    }

    pub fn url_for(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path)?)
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, path: &str) -> Result<FetchResult> {
        let url = self.url_for(path)?;
        let response = self.client.get(url.clone()).send().await?;

        if !response.status().is_success() {
            tracing::debug!("{} answered {}", url, response.status());
            return Ok(FetchResult::Missing);
        }

        let body = response.bytes().await?.to_vec();
        Ok(FetchResult::Content { body })
    }
}
