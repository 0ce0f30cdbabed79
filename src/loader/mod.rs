use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::OnceCell;

use crate::app::{HisnError, Result};
use crate::domain::{CollectionGroup, RawBook};
use crate::fetcher::{FetchResult, Fetcher};
use crate::normalizer::Normalizer;

type BookSlot = Arc<OnceCell<Option<Arc<RawBook>>>>;

/// Where the index gets its books from.
#[async_trait]
pub trait BookSource {
    async fn load_book(&self, code: &str) -> Result<Option<Arc<RawBook>>>;
}

/// Loads book documents and keeps them for the loader's lifetime.
///
/// Each book code gets one slot. Concurrent callers for the same code share
/// a single in-flight fetch; absence is cached just like a loaded book.
/// A location that fails in transport is skipped like a missing one. If no
/// location yields a book and one of them failed, the book is reported
/// absent but its slot stays empty, so a later call retries.
pub struct CorpusLoader {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    normalizer: Normalizer,
    books: Mutex<HashMap<String, BookSlot>>,
}

impl CorpusLoader {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        Self {
            fetcher,
            normalizer: Normalizer::new(),
            books: Mutex::new(HashMap::new()),
        }
    }

    /// Load a book by code.
    ///
    /// Returns `Ok(None)` when no candidate location holds a valid document.
    /// `Err` means the book cache itself is unusable.
    pub async fn load_book(&self, code: &str) -> Result<Option<Arc<RawBook>>> {
        let slot = self.slot(code)?;
        match slot.get_or_try_init(|| self.fetch_book(code)).await {
            Ok(book) => Ok(book.clone()),
            Err(e) => {
                // Left unsettled so the next call tries again.
                tracing::warn!("Book {} unavailable for now: {}", code, e);
                Ok(None)
            }
        }
    }

    /// Number of codes with a settled slot, loaded or absent.
    pub fn cached_count(&self) -> usize {
        self.books
            .lock()
            .map(|books| books.values().filter(|slot| slot.initialized()).count())
            .unwrap_or(0)
    }

    fn slot(&self, code: &str) -> Result<BookSlot> {
        let mut books = self
            .books
            .lock()
            .map_err(|e| HisnError::Other(format!("book cache poisoned: {}", e)))?;
        Ok(books.entry(code.to_string()).or_default().clone())
    }

    /// `Ok(None)` when every location is missing or unusable. `Err` when no
    /// location produced a book and at least one failed in transport.
    async fn fetch_book(&self, code: &str) -> Result<Option<Arc<RawBook>>> {
        let mut failure = None;

        for group in CollectionGroup::SEARCH_ORDER {
            let path = group.path_for(code);

            match self.fetcher.fetch(&path).await {
                Ok(FetchResult::Missing) => {
                    tracing::debug!("{} not found", path);
                }
                Ok(FetchResult::Content { body }) => match self.normalizer.normalize(code, &body) {
                    Ok(book) => {
                        tracing::debug!(
                            "Loaded {} from {} ({} hadiths)",
                            code,
                            path,
                            book.hadiths.len()
                        );
                        return Ok(Some(Arc::new(book)));
                    }
                    Err(e) => {
                        tracing::warn!("{} is not a usable book document: {}", path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to fetch {}: {}", path, e);
                    failure = Some(e);
                }
            }
        }

        match failure {
            Some(e) => Err(e),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl BookSource for CorpusLoader {
    async fn load_book(&self, code: &str) -> Result<Option<Arc<RawBook>>> {
        CorpusLoader::load_book(self, code).await
    }
}
