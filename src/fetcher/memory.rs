use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::app::{HisnError, Result};
use crate::fetcher::{FetchResult, Fetcher};

/// Serves documents held in memory. Counts every fetch, which makes it
/// useful for embedding a small corpus and for observing cache behaviour.
#[derive(Default)]
pub struct MemoryFetcher {
    documents: HashMap<String, Vec<u8>>,
    delay: Option<Duration>,
    failures: HashMap<String, AtomicUsize>,
    fetches: AtomicUsize,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, path: &str, body: impl Into<Vec<u8>>) -> Self {
        self.documents.insert(path.to_string(), body.into());
        self
    }

    /// Simulated latency applied to every fetch.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Fail the first `times` fetches of `path` with a transport error.
    pub fn with_failure(mut self, path: &str, times: usize) -> Self {
        self.failures.insert(path.to_string(), AtomicUsize::new(times));
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for MemoryFetcher {
    async fn fetch(&self, path: &str) -> Result<FetchResult> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(left) = self.failures.get(path) {
            if left
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok()
            {
                return Err(HisnError::Io(io::Error::new(
                    io::ErrorKind::ConnectionReset,
                    format!("connection reset fetching {}", path),
                )));
            }
        }

        Ok(match self.documents.get(path) {
            Some(body) => FetchResult::Content { body: body.clone() },
            None => FetchResult::Missing,
        })
    }
}
