pub mod book;
pub mod category;
pub mod remembrance;
pub mod supplication;

pub use book::{all_book_codes, CollectionGroup, RawBook, RawChapter, RawHadith};
pub use category::{slugify, unslugify, Category, EntityKind};
pub use remembrance::Remembrance;
pub use supplication::Supplication;

/// Behaviour shared by the normalized entity types.
pub trait CorpusEntity: Clone {
    const KIND: EntityKind;

    fn id(&self) -> &str;
    fn category(&self) -> &str;
    fn set_favorite(&mut self, is_favorite: bool);

    /// Whether any searchable field contains the query.
    ///
    /// `needle` is the lowercased query, matched against Latin-script fields;
    /// `raw` is the trimmed query as typed, matched against Arabic text.
    fn matches(&self, needle: &str, raw: &str) -> bool;
}
