use serde::{Deserialize, Serialize};

use crate::domain::{CorpusEntity, EntityKind};

/// A repeatable glorification formula extracted from a hadith.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Remembrance {
    pub id: String,
    pub arabic: String,
    pub description: String,
    pub reference: String,
    pub category: String,
    /// How many times the formula is recited.
    pub count: u32,
    pub book: String,
    pub number: String,
    #[serde(default)]
    pub is_favorite: bool,
}

impl CorpusEntity for Remembrance {
    const KIND: EntityKind = EntityKind::Remembrance;

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn set_favorite(&mut self, is_favorite: bool) {
        self.is_favorite = is_favorite;
    }

    fn matches(&self, needle: &str, raw: &str) -> bool {
        self.category.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.arabic.contains(raw)
    }
}
