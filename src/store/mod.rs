pub mod sqlite;

use std::collections::HashSet;
use std::sync::Arc;

use crate::app::Result;
use crate::domain::EntityKind;

pub use sqlite::SqliteStore;

/// Key-value persistence of favorite entity ids, one set per namespace.
pub trait FavoritesStore {
    fn is_favorite(&self, namespace: &str, entity_id: &str) -> Result<bool>;
    fn set_favorite(&self, namespace: &str, entity_id: &str, is_favorite: bool) -> Result<()>;
    fn favorites(&self, namespace: &str) -> Result<Vec<String>>;
}

/// The favorites contract the rest of the crate relies on.
///
/// Persistence failures never reach the caller: reads fall back to
/// "not a favorite" and a failed toggle leaves the state unchanged.
#[derive(Clone)]
pub struct Favorites {
    store: Arc<dyn FavoritesStore + Send + Sync>,
}

impl Favorites {
    pub fn new(store: Arc<dyn FavoritesStore + Send + Sync>) -> Self {
        Self { store }
    }

    pub fn is_favorite(&self, kind: EntityKind, id: &str) -> bool {
        match self.store.is_favorite(kind.favorites_namespace(), id) {
            Ok(is_favorite) => is_favorite,
            Err(e) => {
                tracing::warn!("Failed to read favorite state of {}: {}", id, e);
                false
            }
        }
    }

    /// Flip the favorite state of an entity and return the new state.
    pub fn toggle_favorite(&self, kind: EntityKind, id: &str) -> bool {
        let current = self.is_favorite(kind, id);
        match self
            .store
            .set_favorite(kind.favorites_namespace(), id, !current)
        {
            Ok(()) => !current,
            Err(e) => {
                tracing::warn!("Failed to toggle favorite {}: {}", id, e);
                current
            }
        }
    }

    /// All favorite ids of a kind; empty when the store cannot be read.
    pub fn ids(&self, kind: EntityKind) -> HashSet<String> {
        match self.store.favorites(kind.favorites_namespace()) {
            Ok(ids) => ids.into_iter().collect(),
            Err(e) => {
                tracing::warn!("Failed to read {} favorites: {}", kind, e);
                HashSet::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::HisnError;

    struct BrokenStore;

    impl FavoritesStore for BrokenStore {
        fn is_favorite(&self, _namespace: &str, _entity_id: &str) -> Result<bool> {
            Err(HisnError::Other("storage unavailable".into()))
        }

        fn set_favorite(&self, _namespace: &str, _entity_id: &str, _is_favorite: bool) -> Result<()> {
            Err(HisnError::Other("storage unavailable".into()))
        }

        fn favorites(&self, _namespace: &str) -> Result<Vec<String>> {
            Err(HisnError::Other("storage unavailable".into()))
        }
    }

    #[test]
    fn test_toggle_round_trip() {
        let favorites = Favorites::new(Arc::new(SqliteStore::in_memory().unwrap()));

        assert!(favorites.toggle_favorite(EntityKind::Supplication, "dua-morning-1"));
        assert!(favorites.is_favorite(EntityKind::Supplication, "dua-morning-1"));
        assert!(!favorites.is_favorite(EntityKind::Remembrance, "dua-morning-1"));

        assert!(!favorites.toggle_favorite(EntityKind::Supplication, "dua-morning-1"));
        assert!(!favorites.is_favorite(EntityKind::Supplication, "dua-morning-1"));
    }

    #[test]
    fn test_ids() {
        let favorites = Favorites::new(Arc::new(SqliteStore::in_memory().unwrap()));
        favorites.toggle_favorite(EntityKind::Remembrance, "zikr-morning-1");
        favorites.toggle_favorite(EntityKind::Remembrance, "zikr-evening-1");

        let ids = favorites.ids(EntityKind::Remembrance);
        assert_eq!(ids.len(), 2);
        assert!(ids.contains("zikr-evening-1"));
        assert!(favorites.ids(EntityKind::Supplication).is_empty());
    }

    #[test]
    fn test_failures_are_not_propagated() {
        let favorites = Favorites::new(Arc::new(BrokenStore));

        assert!(!favorites.is_favorite(EntityKind::Supplication, "dua-morning-1"));
        assert!(!favorites.toggle_favorite(EntityKind::Supplication, "dua-morning-1"));
        assert!(favorites.ids(EntityKind::Remembrance).is_empty());
    }
}
