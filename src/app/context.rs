use std::path::PathBuf;
use std::sync::Arc;

use crate::app::error::{HisnError, Result};
use crate::config::Config;
use crate::fetcher::{self, Fetcher};
use crate::index::{CorpusIndex, DEFAULT_WORKERS};
use crate::loader::CorpusLoader;
use crate::query::QueryService;
use crate::store::{Favorites, SqliteStore};

pub struct AppContext {
    pub loader: Arc<CorpusLoader>,
    pub index: Arc<CorpusIndex>,
    pub favorites: Favorites,
    pub query: QueryService,
}

impl AppContext {
    pub fn new(config: &Config) -> Result<Self> {
        let db_path = match &config.favorites.db_path {
            Some(p) => p.clone(),
            None => Self::default_db_path()?,
        };

        let fetcher = fetcher::for_source(&config.corpus.source)?;
        let store = Arc::new(SqliteStore::new(&db_path)?);
        tracing::debug!(
            "Corpus source {}, favorites at {}",
            config.corpus.source,
            db_path.display()
        );

        Ok(Self::assemble(fetcher, Favorites::new(store), config.corpus.workers))
    }

    /// A context over any fetcher with favorites held in memory.
    pub fn in_memory(fetcher: Arc<dyn Fetcher + Send + Sync>) -> Result<Self> {
        Self::in_memory_with_workers(fetcher, DEFAULT_WORKERS)
    }

    pub fn in_memory_with_workers(
        fetcher: Arc<dyn Fetcher + Send + Sync>,
        workers: usize,
    ) -> Result<Self> {
        let store = Arc::new(SqliteStore::in_memory()?);
        Ok(Self::assemble(fetcher, Favorites::new(store), workers))
    }

    fn assemble(
        fetcher: Arc<dyn Fetcher + Send + Sync>,
        favorites: Favorites,
        workers: usize,
    ) -> Self {
        let loader = Arc::new(CorpusLoader::new(fetcher));
        let index = Arc::new(CorpusIndex::with_workers(loader.clone(), workers));
        let query = QueryService::new(index.clone(), favorites.clone());

        Self {
            loader,
            index,
            favorites,
            query,
        }
    }

    fn default_db_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| HisnError::Config("Could not find data directory".into()))?;
        let hisn_dir = data_dir.join("hisn");
        std::fs::create_dir_all(&hisn_dir)?;
        Ok(hisn_dir.join("hisn.db"))
    }
}
