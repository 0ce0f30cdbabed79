//! Maps a classified hadith into the normalized entity types.
//!
//! Every function here is pure and total: a hadith that passed
//! classification always converts.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{CorpusEntity, EntityKind, RawBook, RawHadith, Remembrance, Supplication};

const TITLE_MAX_CHARS: usize = 50;
const ELLIPSIS: &str = "...";

/// Topical substrings and the tag each one yields.
const TOPIC_TAGS: [(&[&str], &str); 6] = [
    (&["morning"], "morning"),
    (&["evening"], "evening"),
    (&["prayer", "salah"], "prayer"),
    (&["protection"], "protection"),
    (&["forgiveness"], "forgiveness"),
    (&["illness", "sick"], "healing"),
];

/// Benefit-announcing phrasings, tried in order.
static BENEFIT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\bwhoever (says|said|recites|recited|reads)\b[^.]*\.?",
        r"(?i)\b(his|her|their|your) sins (will|would) be (forgiven|wiped out)[^.]*\.?",
        r"(?i)\bwill (enter|be admitted (to|into)) paradise[^.]*\.?",
        r"(?i)\bnothing (will|shall) harm (him|her|you)[^.]*\.?",
        r"(?i)\b(protected|safeguarded) from\b[^.]*\.?",
        r"(?i)\b(reward|virtue|excellence) of\b[^.]*\.?",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

static REPETITION: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d+|one|two|three|four|five|six|seven|eight|nine|ten)\s+times\b").ok()
});

/// First candidate that is present and not blank, else `default`.
pub fn first_present<'a>(candidates: &[Option<&'a str>], default: &'a str) -> &'a str {
    candidates
        .iter()
        .filter_map(|c| *c)
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or(default)
}

/// Short title: the text itself up to 50 characters, otherwise the first
/// 47 characters followed by `...`.
pub fn synopsis(text: &str) -> String {
    if text.chars().count() > TITLE_MAX_CHARS {
        let cut: String = text
            .chars()
            .take(TITLE_MAX_CHARS - ELLIPSIS.len())
            .collect();
        format!("{}{}", cut, ELLIPSIS)
    } else {
        text.to_string()
    }
}

/// Topic tags found in the text, then one tag naming the book.
pub fn derive_tags(text: &str, book_title: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut tags: Vec<String> = TOPIC_TAGS
        .iter()
        .filter(|(needles, _)| needles.iter().any(|n| lower.contains(n)))
        .map(|(_, tag)| tag.to_string())
        .collect();
    tags.push(book_title.to_lowercase().replace(' ', "-"));
    tags
}

/// The first benefit-announcing passage in the text, or an empty string.
pub fn extract_benefits(text: &str) -> String {
    BENEFIT_PATTERNS
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Count from a "<number> times" phrase. Defaults to 1.
pub fn repetition_count(text: &str) -> u32 {
    let Some(re) = &*REPETITION else {
        return 1;
    };

    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| parse_count(m.as_str()))
        .filter(|n| *n > 0)
        .unwrap_or(1)
}

fn parse_count(word: &str) -> Option<u32> {
    let n = match word.to_lowercase().as_str() {
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        digits => return digits.parse().ok(),
    };
    Some(n)
}

pub fn reference(book_title: &str, chapter_title: Option<&str>, number: &str) -> String {
    match chapter_title.map(str::trim).filter(|c| !c.is_empty()) {
        Some(chapter) => format!("{}, {} ({})", book_title, chapter, number),
        None => format!("{} {}", book_title, number),
    }
}

/// Entity id: kind prefix, book code, hadith number.
pub fn entity_id(kind: EntityKind, book_code: &str, number: &str) -> String {
    format!("{}-{}-{}", kind.id_prefix(), book_code, number)
}

pub fn to_supplication(
    hadith: &RawHadith,
    book: &RawBook,
    chapter_title: Option<&str>,
) -> Supplication {
    let book_title = book.display_title();
    let category = first_present(
        &[chapter_title, book.title.as_deref()],
        Supplication::KIND.default_category(),
    );

    Supplication {
        id: entity_id(Supplication::KIND, &book.code, &hadith.id_in_book),
        title: synopsis(&hadith.english),
        arabic: hadith.arabic.clone(),
        transliteration: String::new(),
        translation: hadith.english.clone(),
        reference: reference(book_title, chapter_title, &hadith.id_in_book),
        category: category.to_string(),
        tags: derive_tags(&hadith.english, book_title),
        benefits: extract_benefits(&hadith.english),
        book: book.code.clone(),
        number: hadith.id_in_book.clone(),
        is_favorite: false,
    }
}

pub fn to_remembrance(
    hadith: &RawHadith,
    book: &RawBook,
    chapter_title: Option<&str>,
) -> Remembrance {
    let book_title = book.display_title();
    let category = first_present(
        &[chapter_title, book.title.as_deref()],
        Remembrance::KIND.default_category(),
    );

    Remembrance {
        id: entity_id(Remembrance::KIND, &book.code, &hadith.id_in_book),
        arabic: hadith.arabic.clone(),
        description: hadith.english.clone(),
        reference: reference(book_title, chapter_title, &hadith.id_in_book),
        category: category.to_string(),
        count: repetition_count(&hadith.english),
        book: book.code.clone(),
        number: hadith.id_in_book.clone(),
        is_favorite: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hadith(english: &str) -> RawHadith {
        RawHadith {
            id: "101".into(),
            book_id: Some("1".into()),
            chapter_id: Some("7".into()),
            id_in_book: "42".into(),
            arabic: "اللهم".into(),
            english: english.into(),
            narrator: None,
        }
    }

    fn book(title: Option<&str>) -> RawBook {
        RawBook {
            code: "riyad_assalihin".into(),
            title: title.map(String::from),
            arabic_title: None,
            chapters: Vec::new(),
            hadiths: Vec::new(),
        }
    }

    #[test]
    fn test_synopsis_exactly_fifty_is_untouched() {
        let text = "a".repeat(50);
        assert_eq!(synopsis(&text), text);
    }

    #[test]
    fn test_synopsis_fifty_one_is_truncated() {
        let text = "b".repeat(51);
        let title = synopsis(&text);
        assert_eq!(title.chars().count(), 50);
        assert!(title.ends_with("..."));
        assert_eq!(&title[..47], &text[..47]);
    }

    #[test]
    fn test_synopsis_counts_characters_not_bytes() {
        let text = "ع".repeat(60);
        let title = synopsis(&text);
        assert_eq!(title.chars().count(), 50);
    }

    #[test]
    fn test_repetition_count() {
        assert_eq!(repetition_count("it is repeated 7 times"), 7);
        assert_eq!(repetition_count("Say it three times"), 3);
        assert_eq!(repetition_count("Say it Ten times"), 10);
        assert_eq!(repetition_count("glorify Allah 33 times"), 33);
        assert_eq!(repetition_count("no count here"), 1);
        assert_eq!(repetition_count("0 times"), 1);
        assert_eq!(repetition_count("99999999999999 times"), 1);
    }

    #[test]
    fn test_first_present() {
        assert_eq!(first_present(&[Some("Chapter"), Some("Book")], "General"), "Chapter");
        assert_eq!(first_present(&[None, Some("Book")], "General"), "Book");
        assert_eq!(first_present(&[Some("  "), None], "General"), "General");
        assert_eq!(first_present(&[], "General"), "General");
    }

    #[test]
    fn test_derive_tags() {
        let tags = derive_tags(
            "In the Morning and evening, after prayer, seek protection and forgiveness when sick",
            "Riyad as-Salihin",
        );
        assert_eq!(
            tags,
            vec![
                "morning",
                "evening",
                "prayer",
                "protection",
                "forgiveness",
                "healing",
                "riyad-as-salihin"
            ]
        );
        assert_eq!(derive_tags("nothing topical", "Muwatta Malik"), vec!["muwatta-malik"]);
    }

    #[test]
    fn test_extract_benefits() {
        let text = "The Prophet said: Whoever says this in the morning will be protected. Then he left.";
        assert_eq!(
            extract_benefits(text),
            "Whoever says this in the morning will be protected."
        );
        assert_eq!(extract_benefits("O Allah, forgive me"), "");
    }

    #[test]
    fn test_benefit_patterns_are_ordered() {
        // Both the paradise and the whoever phrasings match; whoever wins.
        let text = "He will enter Paradise. Whoever says it sincerely is rewarded.";
        assert_eq!(extract_benefits(text), "Whoever says it sincerely is rewarded.");
    }

    #[test]
    fn test_reference() {
        assert_eq!(reference("Sahih Muslim", None, "2713"), "Sahih Muslim 2713");
        assert_eq!(
            reference("Sahih Muslim", Some("The Book of Dhikr"), "2713"),
            "Sahih Muslim, The Book of Dhikr (2713)"
        );
    }

    #[test]
    fn test_to_supplication() {
        let h = hadith("O Allah, forgive me in the morning");
        let b = book(Some("Riyad as-Salihin"));
        let dua = to_supplication(&h, &b, Some("Forgiveness"));

        assert_eq!(dua.id, "dua-riyad_assalihin-42");
        assert_eq!(dua.title, "O Allah, forgive me in the morning");
        assert_eq!(dua.transliteration, "");
        assert_eq!(dua.translation, h.english);
        assert_eq!(dua.reference, "Riyad as-Salihin, Forgiveness (42)");
        assert_eq!(dua.category, "Forgiveness");
        assert_eq!(dua.tags, vec!["morning", "riyad-as-salihin"]);
        assert!(!dua.is_favorite);
    }

    #[test]
    fn test_category_falls_back_to_book_then_default() {
        let h = hadith("Glory be to Allah, three times");

        let titled = book(Some("Riyad as-Salihin"));
        assert_eq!(to_remembrance(&h, &titled, None).category, "Riyad as-Salihin");
        assert_eq!(to_supplication(&h, &titled, None).category, "Riyad as-Salihin");

        let untitled = book(None);
        let zikr = to_remembrance(&h, &untitled, None);
        assert_eq!(zikr.category, "General Adhkar");
        assert_eq!(zikr.reference, "riyad_assalihin 42");
        assert_eq!(to_supplication(&h, &untitled, None).category, "General");
    }

    #[test]
    fn test_to_remembrance() {
        let h = hadith("Say Subhan Allah three times");
        let zikr = to_remembrance(&h, &book(Some("Riyad as-Salihin")), Some("Adhkar"));
        assert_eq!(zikr.id, "zikr-riyad_assalihin-42");
        assert_eq!(zikr.description, h.english);
        assert_eq!(zikr.count, 3);
        assert_eq!(zikr.category, "Adhkar");
    }
}
