use serde::{Deserialize, Serialize};

/// The nine canonical collections.
pub const CORE_BOOKS: [&str; 9] = [
    "bukhari", "muslim", "nasai", "abudawud", "tirmidhi", "ibnmajah", "malik", "ahmed", "darimi",
];

/// Short compiled "forty hadith" collections.
pub const FORTIES_BOOKS: [&str; 3] = ["nawawi40", "qudsi40", "shahwaliullah40"];

/// Supplementary collections.
pub const SUPPLEMENTARY_BOOKS: [&str; 5] = [
    "aladab_almufrad",
    "bulugh_almaram",
    "mishkat_almasabih",
    "riyad_assalihin",
    "shamail_muhammadiyah",
];

/// Every book code in scan order: core, short compiled, supplementary.
pub fn all_book_codes() -> impl Iterator<Item = &'static str> {
    CORE_BOOKS
        .iter()
        .chain(FORTIES_BOOKS.iter())
        .chain(SUPPLEMENTARY_BOOKS.iter())
        .copied()
}

/// Directory groups a book document may live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionGroup {
    Core,
    Supplementary,
    Forties,
}

impl CollectionGroup {
    /// Order in which locations are tried when loading a book.
    pub const SEARCH_ORDER: [CollectionGroup; 3] = [
        CollectionGroup::Core,
        CollectionGroup::Supplementary,
        CollectionGroup::Forties,
    ];

    pub fn dir(&self) -> &'static str {
        match self {
            CollectionGroup::Core => "the_9_books",
            CollectionGroup::Supplementary => "other_books",
            CollectionGroup::Forties => "forties",
        }
    }

    /// Relative path of a book's document inside this group.
    pub fn path_for(&self, code: &str) -> String {
        format!("{}/{}.json", self.dir(), code)
    }

    /// The group a known book code is listed under.
    pub fn of(code: &str) -> Option<Self> {
        if CORE_BOOKS.contains(&code) {
            Some(CollectionGroup::Core)
        } else if SUPPLEMENTARY_BOOKS.contains(&code) {
            Some(CollectionGroup::Supplementary)
        } else if FORTIES_BOOKS.contains(&code) {
            Some(CollectionGroup::Forties)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawChapter {
    pub id: String,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawHadith {
    pub id: String,
    pub book_id: Option<String>,
    pub chapter_id: Option<String>,
    /// Number of the hadith within its book; falls back to `id`.
    pub id_in_book: String,
    pub arabic: String,
    pub english: String,
    pub narrator: Option<String>,
}

impl RawHadith {
    /// Arabic and English joined, as seen by the classifier.
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.arabic, self.english)
    }

    /// Hadiths without Arabic text are never classified.
    pub fn is_usable(&self) -> bool {
        !self.arabic.trim().is_empty()
    }
}

/// A loaded book. Immutable once built by the normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBook {
    pub code: String,
    pub title: Option<String>,
    pub arabic_title: Option<String>,
    pub chapters: Vec<RawChapter>,
    pub hadiths: Vec<RawHadith>,
}

impl RawBook {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.code)
    }

    /// English title of the chapter a hadith belongs to, if the book lists it.
    pub fn chapter_title(&self, chapter_id: Option<&str>) -> Option<&str> {
        let chapter_id = chapter_id?;
        self.chapters
            .iter()
            .find(|c| c.id == chapter_id)
            .and_then(|c| c.title.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> RawBook {
        RawBook {
            code: "nawawi40".into(),
            title: None,
            arabic_title: None,
            chapters: vec![
                RawChapter {
                    id: "1".into(),
                    title: Some("Intentions".into()),
                },
                RawChapter {
                    id: "2".into(),
                    title: None,
                },
            ],
            hadiths: Vec::new(),
        }
    }

    #[test]
    fn test_reference_corpus_has_seventeen_books() {
        assert_eq!(all_book_codes().count(), 17);
        assert_eq!(CORE_BOOKS.len(), 9);
        assert_eq!(FORTIES_BOOKS.len(), 3);
        assert_eq!(SUPPLEMENTARY_BOOKS.len(), 5);
        assert_eq!(all_book_codes().next(), Some("bukhari"));
        assert_eq!(all_book_codes().last(), Some("shamail_muhammadiyah"));
    }

    #[test]
    fn test_search_order_paths() {
        let paths: Vec<String> = CollectionGroup::SEARCH_ORDER
            .iter()
            .map(|g| g.path_for("malik"))
            .collect();
        assert_eq!(
            paths,
            vec![
                "the_9_books/malik.json",
                "other_books/malik.json",
                "forties/malik.json"
            ]
        );
    }

    #[test]
    fn test_group_of_code() {
        assert_eq!(CollectionGroup::of("muslim"), Some(CollectionGroup::Core));
        assert_eq!(CollectionGroup::of("qudsi40"), Some(CollectionGroup::Forties));
        assert_eq!(
            CollectionGroup::of("riyad_assalihin"),
            Some(CollectionGroup::Supplementary)
        );
        assert_eq!(CollectionGroup::of("unknown"), None);
    }

    #[test]
    fn test_chapter_title_lookup() {
        let book = book();
        assert_eq!(book.chapter_title(Some("1")), Some("Intentions"));
        assert_eq!(book.chapter_title(Some("2")), None);
        assert_eq!(book.chapter_title(Some("9")), None);
        assert_eq!(book.chapter_title(None), None);
    }

    #[test]
    fn test_display_title_falls_back_to_code() {
        let mut book = book();
        assert_eq!(book.display_title(), "nawawi40");
        book.title = Some("The Forty Hadith of Imam Nawawi".into());
        assert_eq!(book.display_title(), "The Forty Hadith of Imam Nawawi");
    }
}
