use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use rusqlite::{params, Connection};
use rusqlite_migration::{Migrations, M};

use crate::app::{HisnError, Result};
use crate::store::FavoritesStore;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.run_migrations()?;
        Ok(store)
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.run_migrations()?;
        Ok(store)
    }

    fn run_migrations(&self) -> Result<()> {
        let migrations = Migrations::new(vec![M::up(include_str!(
            "../../migrations/001-initial/up.sql"
        ))]);

        let mut conn = self.lock()?;
        migrations
            .to_latest(&mut conn)
            .map_err(|e| HisnError::Other(format!("migration failed: {}", e)))?;

        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|e| {
            HisnError::Database(rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(1),
                Some(e.to_string()),
            ))
        })
    }
}

impl FavoritesStore for SqliteStore {
    fn is_favorite(&self, namespace: &str, entity_id: &str) -> Result<bool> {
        let conn = self.lock()?;

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM favorites WHERE namespace = ?1 AND entity_id = ?2",
            params![namespace, entity_id],
            |row| row.get(0),
        )?;

        Ok(count > 0)
    }

    fn set_favorite(&self, namespace: &str, entity_id: &str, is_favorite: bool) -> Result<()> {
        let conn = self.lock()?;

        if is_favorite {
            conn.execute(
                "INSERT OR IGNORE INTO favorites (namespace, entity_id, created_at)
                 VALUES (?1, ?2, ?3)",
                params![namespace, entity_id, Utc::now().to_rfc3339()],
            )?;
        } else {
            conn.execute(
                "DELETE FROM favorites WHERE namespace = ?1 AND entity_id = ?2",
                params![namespace, entity_id],
            )?;
        }

        Ok(())
    }

    fn favorites(&self, namespace: &str) -> Result<Vec<String>> {
        let conn = self.lock()?;

        let mut stmt = conn.prepare(
            "SELECT entity_id FROM favorites WHERE namespace = ?1
             ORDER BY created_at DESC, entity_id",
        )?;

        let ids = stmt
            .query_map(params![namespace], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;

        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUAS: &str = "hisn.favorite-duas";
    const AZKAR: &str = "hisn.favorite-azkar";

    #[test]
    fn test_set_and_clear_favorite() {
        let store = SqliteStore::in_memory().unwrap();
        assert!(!store.is_favorite(DUAS, "dua-bukhari-6306").unwrap());

        store.set_favorite(DUAS, "dua-bukhari-6306", true).unwrap();
        assert!(store.is_favorite(DUAS, "dua-bukhari-6306").unwrap());

        store.set_favorite(DUAS, "dua-bukhari-6306", false).unwrap();
        assert!(!store.is_favorite(DUAS, "dua-bukhari-6306").unwrap());
    }

    #[test]
    fn test_set_favorite_twice_is_idempotent() {
        let store = SqliteStore::in_memory().unwrap();
        store.set_favorite(DUAS, "dua-morning-1", true).unwrap();
        store.set_favorite(DUAS, "dua-morning-1", true).unwrap();
        assert_eq!(store.favorites(DUAS).unwrap(), vec!["dua-morning-1"]);
    }

    #[test]
    fn test_namespaces_are_separate() {
        let store = SqliteStore::in_memory().unwrap();
        store.set_favorite(DUAS, "shared-id", true).unwrap();

        assert!(store.is_favorite(DUAS, "shared-id").unwrap());
        assert!(!store.is_favorite(AZKAR, "shared-id").unwrap());
        assert!(store.favorites(AZKAR).unwrap().is_empty());
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hisn.db");

        {
            let store = SqliteStore::new(&path).unwrap();
            store.set_favorite(AZKAR, "zikr-muslim-2691", true).unwrap();
        }

        let store = SqliteStore::new(&path).unwrap();
        assert!(store.is_favorite(AZKAR, "zikr-muslim-2691").unwrap());
    }
}
