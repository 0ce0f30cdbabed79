//! Per-book JSON documents come in slightly different shapes. Everything is
//! coerced here, once, into [`RawBook`] so nothing downstream re-checks for
//! missing fields.

use html_escape::decode_html_entities;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::app::{HisnError, Result};
use crate::domain::{RawBook, RawChapter, RawHadith};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireId {
    Number(i64),
    Text(String),
}

impl WireId {
    fn into_string(self) -> String {
        match self {
            WireId::Number(n) => n.to_string(),
            WireId::Text(s) => s.trim().to_string(),
        }
    }
}

/// Titles are sometimes plain strings, sometimes `{ "title": ... }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireTitle {
    Plain(String),
    Titled {
        #[serde(default)]
        title: Option<String>,
    },
}

impl WireTitle {
    fn into_title(self) -> Option<String> {
        match self {
            WireTitle::Plain(s) => Some(s),
            WireTitle::Titled { title } => title,
        }
    }
}

/// English narration: `{ "narrator": ..., "text": ... }` or a bare string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireEnglish {
    Plain(String),
    Narrated {
        #[serde(default)]
        narrator: Option<String>,
        #[serde(default)]
        text: Option<String>,
    },
}

#[derive(Debug, Default, Deserialize)]
struct WireMetadata {
    #[serde(default)]
    english: Option<WireTitle>,
    #[serde(default)]
    arabic: Option<WireTitle>,
}

#[derive(Debug, Deserialize)]
struct WireChapter {
    id: WireId,
    #[serde(default)]
    english: Option<WireTitle>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireHadith {
    #[serde(default)]
    id: Option<WireId>,
    #[serde(default)]
    book_id: Option<WireId>,
    #[serde(default)]
    chapter_id: Option<WireId>,
    #[serde(default)]
    id_in_book: Option<WireId>,
    #[serde(default)]
    arabic: Option<String>,
    #[serde(default)]
    english: Option<WireEnglish>,
}

/// Sections are kept as raw values so one malformed record only costs
/// itself, not the whole book.
#[derive(Debug, Deserialize)]
struct WireBook {
    #[serde(default)]
    metadata: Option<Value>,
    #[serde(default)]
    chapters: Option<Vec<Value>>,
    #[serde(default)]
    hadiths: Option<Vec<Value>>,
}

#[derive(Clone)]
pub struct Normalizer;

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    /// Parse one book document. A document without a `hadiths` list is
    /// rejected as structurally invalid; records that do not fit the
    /// expected shape are skipped with a warning.
    pub fn normalize(&self, code: &str, body: &[u8]) -> Result<RawBook> {
        let wire: WireBook = serde_json::from_slice(body)?;

        let hadiths = wire.hadiths.ok_or_else(|| {
            HisnError::Other(format!("{}: document has no hadith list", code))
        })?;

        let metadata: WireMetadata = match wire.metadata {
            Some(value) => serde_json::from_value(value).unwrap_or_else(|e| {
                tracing::warn!("{}: ignoring malformed metadata: {}", code, e);
                WireMetadata::default()
            }),
            None => WireMetadata::default(),
        };

        let chapters = lenient::<WireChapter>(code, "chapter", wire.chapters.unwrap_or_default())
            .into_iter()
            .map(|c| RawChapter {
                id: c.id.into_string(),
                title: c.english.and_then(WireTitle::into_title).and_then(clean_title),
            })
            .collect();

        let total = hadiths.len();
        let hadiths: Vec<RawHadith> = lenient::<WireHadith>(code, "hadith", hadiths)
            .into_iter()
            .filter_map(Self::normalize_hadith)
            .collect();
        if hadiths.len() < total {
            tracing::warn!(
                "{}: kept {} of {} hadith records",
                code,
                hadiths.len(),
                total
            );
        }

        Ok(RawBook {
            code: code.to_string(),
            title: metadata.english.and_then(WireTitle::into_title).and_then(clean_title),
            arabic_title: metadata.arabic.and_then(WireTitle::into_title).and_then(clean_title),
            chapters,
            hadiths,
        })
    }

    /// `None` when the record carries neither `id` nor `idInBook`.
    fn normalize_hadith(wire: WireHadith) -> Option<RawHadith> {
        let id = wire.id.map(WireId::into_string).filter(|s| !s.is_empty());
        let id_in_book = wire
            .id_in_book
            .map(WireId::into_string)
            .filter(|s| !s.is_empty());
        let (id, id_in_book) = match (id, id_in_book) {
            (Some(id), Some(n)) => (id, n),
            (Some(id), None) => (id.clone(), id),
            (None, Some(n)) => (n.clone(), n),
            (None, None) => return None,
        };

        let (narrator, english) = match wire.english {
            Some(WireEnglish::Plain(text)) => (None, Some(text)),
            Some(WireEnglish::Narrated { narrator, text }) => (narrator, text),
            None => (None, None),
        };

        Some(RawHadith {
            id,
            id_in_book,
            book_id: wire.book_id.map(WireId::into_string),
            chapter_id: wire.chapter_id.map(WireId::into_string),
            arabic: wire.arabic.unwrap_or_default().trim().to_string(),
            english: english.and_then(clean).unwrap_or_default(),
            narrator: narrator.and_then(clean),
        })
    }
}

/// Deserialize each record on its own, dropping the ones that fail.
fn lenient<T: DeserializeOwned>(code: &str, what: &str, values: Vec<Value>) -> Vec<T> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(i, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("{}: skipping malformed {} #{}: {}", code, what, i, e);
                None
            }
        })
        .collect()
}

/// Decode HTML entities and trim; blank strings become `None`.
fn clean(s: String) -> Option<String> {
    let decoded = decode_html_entities(&s);
    let trimmed = decoded.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Like [`clean`], also collapsing whitespace runs so equal titles compare equal.
fn clean_title(s: String) -> Option<String> {
    clean(s).map(|t| t.split_whitespace().collect::<Vec<_>>().join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOOK_SAMPLE: &str = r#"{
        "id": 1,
        "metadata": {
            "id": 1,
            "length": 2,
            "arabic": { "title": "صحيح البخاري", "author": "", "introduction": "" },
            "english": { "title": "Sahih al-Bukhari", "author": "", "introduction": "" }
        },
        "chapters": [
            { "id": 80, "bookId": 1, "arabic": "كتاب الدعوات", "english": "Invocations" }
        ],
        "hadiths": [
            {
                "id": 5947,
                "idInBook": 6306,
                "chapterId": 80,
                "bookId": 1,
                "arabic": "اللَّهُمَّ أَنْتَ رَبِّي",
                "english": { "narrator": "Narrated Shaddad bin Aus:", "text": "O Allah! You are my Lord &amp; none has the right to be worshipped but You." }
            },
            { "id": 5948, "chapterId": 80, "bookId": 1, "arabic": "", "english": { "text": "" } }
        ]
    }"#;

    #[test]
    fn test_normalize_book() {
        let book = Normalizer::new()
            .normalize("bukhari", BOOK_SAMPLE.as_bytes())
            .unwrap();

        assert_eq!(book.code, "bukhari");
        assert_eq!(book.title, Some("Sahih al-Bukhari".into()));
        assert_eq!(book.arabic_title, Some("صحيح البخاري".into()));
        assert_eq!(book.chapters.len(), 1);
        assert_eq!(book.chapters[0].id, "80");
        assert_eq!(book.chapters[0].title, Some("Invocations".into()));
        assert_eq!(book.hadiths.len(), 2);

        let first = &book.hadiths[0];
        assert_eq!(first.id, "5947");
        assert_eq!(first.id_in_book, "6306");
        assert_eq!(first.chapter_id, Some("80".into()));
        assert_eq!(first.narrator, Some("Narrated Shaddad bin Aus:".into()));
        assert!(first.english.contains("Lord & none"));
    }

    #[test]
    fn test_missing_in_book_id_falls_back_to_id() {
        let book = Normalizer::new()
            .normalize("bukhari", BOOK_SAMPLE.as_bytes())
            .unwrap();
        let second = &book.hadiths[1];
        assert_eq!(second.id_in_book, "5948");
        assert!(!second.is_usable());
        assert_eq!(second.english, "");
    }

    #[test]
    fn test_optional_sections_default() {
        let body = r#"{ "hadiths": [ { "id": "7", "arabic": "سبحان الله", "english": "Glory be to Allah" } ] }"#;
        let book = Normalizer::new().normalize("qudsi40", body.as_bytes()).unwrap();

        assert_eq!(book.title, None);
        assert!(book.chapters.is_empty());
        assert_eq!(book.hadiths[0].id, "7");
        assert_eq!(book.hadiths[0].english, "Glory be to Allah");
        assert_eq!(book.hadiths[0].narrator, None);
        assert_eq!(book.hadiths[0].chapter_id, None);
    }

    #[test]
    fn test_titled_object_chapters() {
        let body = r#"{
            "chapters": [ { "id": "3", "english": { "title": "Morning  and\nEvening" } } ],
            "hadiths": []
        }"#;
        let book = Normalizer::new().normalize("riyad_assalihin", body.as_bytes()).unwrap();
        assert_eq!(book.chapters[0].title, Some("Morning and Evening".into()));
    }

    #[test]
    fn test_malformed_record_does_not_drop_book() {
        let body = r#"{
            "hadiths": [
                { "id": 1, "idInBook": 5, "arabic": "اللهم اهدني", "english": "O Allah, guide me" },
                { "chapterId": 2, "arabic": "no ids at all" },
                { "id": 3, "arabic": 42, "english": "Arabic is not text" },
                { "idInBook": 9, "arabic": "سبحان الله", "english": "Glory be to Allah" }
            ]
        }"#;
        let book = Normalizer::new().normalize("muslim", body.as_bytes()).unwrap();

        let numbers: Vec<&str> = book.hadiths.iter().map(|h| h.id_in_book.as_str()).collect();
        assert_eq!(numbers, vec!["5", "9"]);
        assert_eq!(book.hadiths[1].id, "9");
    }

    #[test]
    fn test_malformed_chapter_and_metadata_are_skipped() {
        let body = r#"{
            "metadata": { "english": 7 },
            "chapters": [ { "english": "No id" }, { "id": 4, "english": "Travel" } ],
            "hadiths": []
        }"#;
        let book = Normalizer::new().normalize("abudawud", body.as_bytes()).unwrap();

        assert_eq!(book.title, None);
        assert_eq!(book.chapters.len(), 1);
        assert_eq!(book.chapters[0].title, Some("Travel".into()));
    }

    #[test]
    fn test_document_without_hadiths_is_rejected() {
        let body = r#"{ "metadata": { "english": { "title": "Empty" } }, "chapters": [] }"#;
        assert!(Normalizer::new().normalize("malik", body.as_bytes()).is_err());
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(Normalizer::new().normalize("malik", b"{ not json").is_err());
        assert!(Normalizer::new().normalize("malik", b"[]").is_err());
    }
}
