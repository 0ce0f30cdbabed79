use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::app::Result;
use crate::fetcher::{FetchResult, Fetcher};

/// Reads corpus documents from a local directory.
pub struct FsFetcher {
    root: PathBuf,
}

impl FsFetcher {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl Fetcher for FsFetcher {
    async fn fetch(&self, path: &str) -> Result<FetchResult> {
        let full = self.root.join(path);
        match tokio::fs::read(&full).await {
            Ok(body) => Ok(FetchResult::Content { body }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No document at {}", full.display());
                Ok(FetchResult::Missing)
            }
            Err(e) => Err(e.into()),
        }
    }
}
