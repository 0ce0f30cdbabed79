pub mod fs_fetcher;
pub mod http_fetcher;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;

use crate::app::Result;

pub use fs_fetcher::FsFetcher;
pub use http_fetcher::HttpFetcher;
pub use memory::MemoryFetcher;

#[derive(Debug)]
pub enum FetchResult {
    /// Document bytes retrieved
    Content { body: Vec<u8> },
    /// Nothing at this location (missing file, HTTP 404 and friends)
    Missing,
}

/// Retrieves corpus documents by path relative to the corpus root.
///
/// `Missing` means the location holds no document and the caller should
/// try elsewhere. `Err` is an unexpected transport failure.
#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, path: &str) -> Result<FetchResult>;
}

/// Pick a fetcher for a corpus source: `http(s)://` bases go over the
/// network, anything else is read as a local directory.
pub fn for_source(source: &str) -> Result<Arc<dyn Fetcher + Send + Sync>> {
    if source.starts_with("http://") || source.starts_with("https://") {
        Ok(Arc::new(HttpFetcher::new(source)?))
    } else {
        Ok(Arc::new(FsFetcher::new(source)))
    }
}
