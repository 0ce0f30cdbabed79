//! The in-memory corpus index.
//!
//! One scan over every book produces both entity collections. The scan runs
//! at most once per [`CorpusIndex`]; the collections and the category
//! taxonomy derived from them are cached for the index's lifetime.

mod fallback;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tokio::sync::OnceCell;

use crate::classifier::classify;
use crate::converter::{to_remembrance, to_supplication};
use crate::domain::{all_book_codes, slugify, Category, CorpusEntity, EntityKind, RawBook, Remembrance, Supplication};
use crate::loader::BookSource;

pub use fallback::{
    example_remembrances, example_supplications, placeholder_remembrance, placeholder_supplication,
};

pub const DEFAULT_WORKERS: usize = 4;

/// Where a served collection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Extracted from the corpus.
    Corpus { books_loaded: usize, books_missing: usize },
    /// The corpus yielded nothing of this kind; built-in examples are served.
    Fallback,
    /// The scan failed; a single placeholder is served.
    Placeholder,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::Corpus {
                books_loaded,
                books_missing,
            } => write!(
                f,
                "corpus ({} books loaded, {} unavailable)",
                books_loaded, books_missing
            ),
            Provenance::Fallback => f.write_str("built-in examples"),
            Provenance::Placeholder => f.write_str("placeholder"),
        }
    }
}

struct Snapshot {
    supplications: Arc<Vec<Supplication>>,
    remembrances: Arc<Vec<Remembrance>>,
    supplication_source: Provenance,
    remembrance_source: Provenance,
}

impl Snapshot {
    fn placeholder() -> Self {
        Self {
            supplications: Arc::new(vec![placeholder_supplication()]),
            remembrances: Arc::new(vec![placeholder_remembrance()]),
            supplication_source: Provenance::Placeholder,
            remembrance_source: Provenance::Placeholder,
        }
    }
}

pub struct CorpusIndex {
    loader: Arc<dyn BookSource + Send + Sync>,
    workers: usize,
    snapshot: OnceCell<Snapshot>,
    categories: OnceCell<Vec<Category>>,
}

impl CorpusIndex {
    pub fn new(loader: Arc<dyn BookSource + Send + Sync>) -> Self {
        Self::with_workers(loader, DEFAULT_WORKERS)
    }

    /// `workers` bounds how many book loads are in flight during the scan.
    pub fn with_workers(loader: Arc<dyn BookSource + Send + Sync>, workers: usize) -> Self {
        Self {
            loader,
            workers: workers.max(1),
            snapshot: OnceCell::new(),
            categories: OnceCell::new(),
        }
    }

    pub async fn supplications(&self) -> Arc<Vec<Supplication>> {
        self.snapshot().await.supplications.clone()
    }

    pub async fn remembrances(&self) -> Arc<Vec<Remembrance>> {
        self.snapshot().await.remembrances.clone()
    }

    pub async fn provenance(&self, kind: EntityKind) -> Provenance {
        let snapshot = self.snapshot().await;
        match kind {
            EntityKind::Supplication => snapshot.supplication_source,
            EntityKind::Remembrance => snapshot.remembrance_source,
        }
    }

    /// Categories of one kind, in order of first appearance.
    pub async fn categories(&self, kind: EntityKind) -> Vec<Category> {
        let all = self
            .categories
            .get_or_init(|| async {
                let snapshot = self.snapshot().await;
                let mut all = derive_categories(snapshot.supplications.as_slice());
                all.extend(derive_categories(snapshot.remembrances.as_slice()));
                all
            })
            .await;

        all.iter()
            .filter(|c| c.id.starts_with(kind.category_prefix()))
            .cloned()
            .collect()
    }

    async fn snapshot(&self) -> &Snapshot {
        self.snapshot.get_or_init(|| self.scan()).await
    }

    async fn scan(&self) -> Snapshot {
        // `buffered` keeps results in book order however loads interleave.
        let loads: Vec<_> = stream::iter(all_book_codes())
            .map(|code| async move { (code, self.loader.load_book(code).await) })
            .buffered(self.workers)
            .collect()
            .await;

        let mut supplications = Vec::new();
        let mut remembrances = Vec::new();
        let mut books_loaded = 0;
        let mut books_missing = 0;

        for (code, result) in loads {
            match result {
                Ok(Some(book)) => {
                    books_loaded += 1;
                    index_book(&book, &mut supplications, &mut remembrances);
                }
                Ok(None) => {
                    books_missing += 1;
                    tracing::warn!("Book {} is unavailable, skipping", code);
                }
                Err(e) => {
                    tracing::error!(
                        "Corpus scan failed while loading {}: {}; serving placeholders",
                        code,
                        e
                    );
                    return Snapshot::placeholder();
                }
            }
        }

        let corpus = Provenance::Corpus {
            books_loaded,
            books_missing,
        };

        let supplication_source = if supplications.is_empty() {
            supplications = example_supplications();
            tracing::warn!(
                "No supplications extracted from {} books; serving {} built-in examples",
                books_loaded,
                supplications.len()
            );
            Provenance::Fallback
        } else {
            tracing::info!(
                "Indexed {} supplications from {} books",
                supplications.len(),
                books_loaded
            );
            corpus
        };

        let remembrance_source = if remembrances.is_empty() {
            remembrances = example_remembrances();
            tracing::warn!(
                "No remembrances extracted from {} books; serving {} built-in examples",
                books_loaded,
                remembrances.len()
            );
            Provenance::Fallback
        } else {
            tracing::info!(
                "Indexed {} remembrances from {} books",
                remembrances.len(),
                books_loaded
            );
            corpus
        };

        Snapshot {
            supplications: Arc::new(supplications),
            remembrances: Arc::new(remembrances),
            supplication_source,
            remembrance_source,
        }
    }
}

/// Classify every usable hadith of a book once, then convert it into zero,
/// one or two entities. A hadith matching both buckets yields both.
pub fn index_book(
    book: &RawBook,
    supplications: &mut Vec<Supplication>,
    remembrances: &mut Vec<Remembrance>,
) {
    for hadith in book.hadiths.iter().filter(|h| h.is_usable()) {
        let classification = classify(&hadith.combined_text());
        if classification.is_empty() {
            continue;
        }

        let chapter_title = book.chapter_title(hadith.chapter_id.as_deref());

        if classification.supplication {
            supplications.push(to_supplication(hadith, book, chapter_title));
        }
        if classification.remembrance {
            remembrances.push(to_remembrance(hadith, book, chapter_title));
        }
    }
}

/// One category per distinct category id. Names that slugify alike, such as
/// `Self-Purification` and `self purification`, share one category named by
/// the first spelling seen.
pub fn derive_categories<T: CorpusEntity>(entities: &[T]) -> Vec<Category> {
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for entity in entities {
        let key = slugify(entity.category());
        match positions.get(&key) {
            Some(&pos) => order[pos].1 += 1,
            None => {
                positions.insert(key, order.len());
                order.push((entity.category().to_string(), 1));
            }
        }
    }

    order
        .into_iter()
        .map(|(name, count)| Category::new(T::KIND, &name, count))
        .collect()
}
