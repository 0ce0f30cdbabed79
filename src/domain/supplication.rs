use serde::{Deserialize, Serialize};

use crate::domain::{CorpusEntity, EntityKind};

/// A petition extracted from a hadith.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplication {
    pub id: String,
    pub title: String,
    pub arabic: String,
    /// Not present in the source corpus; always empty for extracted entries.
    pub transliteration: String,
    pub translation: String,
    pub reference: String,
    pub category: String,
    pub tags: Vec<String>,
    pub benefits: String,
    /// Code of the source book.
    pub book: String,
    /// Hadith number within the source book.
    pub number: String,
    /// Stamped at query time, never cached.
    #[serde(default)]
    pub is_favorite: bool,
}

impl Supplication {
    pub fn has_benefits(&self) -> bool {
        !self.benefits.is_empty()
    }
}

impl CorpusEntity for Supplication {
    const KIND: EntityKind = EntityKind::Supplication;

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
        self.title.to_lowercase().contains(needle)
            || self.translation.to_lowercase().contains(needle)
            || self.transliteration.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
            || self.arabic.contains(raw)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}
