//! Search and filtering over already-built collections.
//!
//! Nothing here loads books or triggers a scan except the `get_*` methods
//! of [`QueryService`], which go through the cached [`CorpusIndex`].

use std::sync::Arc;

use crate::domain::{unslugify, Category, CorpusEntity, EntityKind, Remembrance, Supplication};
use crate::index::{CorpusIndex, Provenance};
use crate::store::Favorites;

/// Entities with any searchable field containing `query`, case-insensitively.
/// A blank query returns the input unchanged.
pub fn search<T: CorpusEntity>(query: &str, entities: &[T]) -> Vec<T> {
    let raw = query.trim();
    if raw.is_empty() {
        return entities.to_vec();
    }

    let needle = raw.to_lowercase();
    entities
        .iter()
        .filter(|e| e.matches(&needle, raw))
        .cloned()
        .collect()
}

/// Entities whose category matches a category id or name.
///
/// An id of this entity kind (`dua-cat-...`) is turned back into a name with
/// [`unslugify`]; anything else is treated as a name. Comparison is
/// case-insensitive. `None` or a blank selector returns the input unchanged.
pub fn filter_by_category<T: CorpusEntity>(entities: &[T], category: Option<&str>) -> Vec<T> {
    let selector = match category.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return entities.to_vec(),
    };

    let name = category_name(T::KIND, selector).to_lowercase();
    entities
        .iter()
        .filter(|e| e.category().to_lowercase() == name)
        .cloned()
        .collect()
}

/// Resolve a category selector into the name it stands for.
pub fn category_name(kind: EntityKind, selector: &str) -> String {
    match selector.strip_prefix(kind.category_prefix()) {
        Some(slug) => unslugify(slug),
        None => selector.to_string(),
    }
}

/// Public query surface: cached collections with favorites stamped on.
pub struct QueryService {
    index: Arc<CorpusIndex>,
    favorites: Favorites,
}

impl QueryService {
    pub fn new(index: Arc<CorpusIndex>, favorites: Favorites) -> Self {
        Self { index, favorites }
    }

    /// All supplications. `language_hint` is accepted for interface
    /// compatibility; the corpus has a single English rendering.
    pub async fn get_duas(&self, language_hint: Option<&str>) -> Vec<Supplication> {
        log_language_hint(language_hint);
        let duas = self.index.supplications().await;
        self.with_favorites(duas.as_slice())
    }

    /// All remembrances. `language_hint` is ignored, see [`Self::get_duas`].
    pub async fn get_azkar(&self, language_hint: Option<&str>) -> Vec<Remembrance> {
        log_language_hint(language_hint);
        let azkar = self.index.remembrances().await;
        self.with_favorites(azkar.as_slice())
    }

    pub async fn get_categories(&self, kind: EntityKind) -> Vec<Category> {
        self.index.categories(kind).await
    }

    pub async fn provenance(&self, kind: EntityKind) -> Provenance {
        self.index.provenance(kind).await
    }

    pub fn search_duas(&self, query: &str, duas: &[Supplication]) -> Vec<Supplication> {
        search(query, duas)
    }

    pub fn search_azkar(&self, query: &str, azkar: &[Remembrance]) -> Vec<Remembrance> {
        search(query, azkar)
    }

    pub fn filter_duas(&self, duas: &[Supplication], category: Option<&str>) -> Vec<Supplication> {
        filter_by_category(duas, category)
    }

    pub fn filter_azkar(&self, azkar: &[Remembrance], category: Option<&str>) -> Vec<Remembrance> {
        filter_by_category(azkar, category)
    }

    pub fn is_favorite(&self, kind: EntityKind, id: &str) -> bool {
        self.favorites.is_favorite(kind, id)
    }

    pub fn toggle_favorite(&self, kind: EntityKind, id: &str) -> bool {
        self.favorites.toggle_favorite(kind, id)
    }

    fn with_favorites<T: CorpusEntity>(&self, entities: &[T]) -> Vec<T> {
        let ids = self.favorites.ids(T::KIND);
        entities
            .iter()
            .cloned()
            .map(|mut e| {
                let is_favorite = ids.contains(e.id());
                e.set_favorite(is_favorite);
                e
            })
            .collect()
    }
}

fn log_language_hint(language_hint: Option<&str>) {
    if let Some(hint) = language_hint {
        tracing::debug!("Language hint '{}' ignored: corpus has no localized variants", hint);
    }
}
