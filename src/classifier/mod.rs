//! Heuristic classification of hadith text.
//!
//! Two tiers per bucket: plain keyword containment first, then regex phrase
//! patterns. Both run over the combined Arabic and English text after
//! lowercasing and Arabic normalization, so matching is case-insensitive and
//! insensitive to diacritics.

mod arabic;

use once_cell::sync::Lazy;
use regex::Regex;

pub use arabic::normalize_arabic;

/// Supplication keywords. `سبحان` is shared with the remembrance list on
/// purpose: some formulas are both.
pub static SUPPLICATION_KEYWORDS: Lazy<Vec<String>> = Lazy::new(|| {
    prepare_keywords(&[
        "o allah",
        "o lord",
        "our lord",
        "my lord",
        "invocation",
        "invoke",
        "forgive me",
        "forgive us",
        "have mercy on me",
        "seek refuge",
        "i ask you",
        "guide me",
        "protect me",
        "اللهم",
        "ربنا",
        "رب اغفر",
        "اغفر لي",
        "أسألك",
        "أعوذ",
        "سبحان",
    ])
});

pub static SUPPLICATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_patterns(&[
        r"\bo allah\b",
        r"\bdu'?as?\b",
        r"\bsupplicat(e|ed|es|ing|ion|ions)\b",
        r"\bwhen (entering|leaving|going out|going to bed|waking|travell?ing)\b",
        r"\bbefore (sleeping|sleep|eating|going to bed)\b",
        r"\bafter (the )?(prayer|eating|waking)\b",
        r"\bused to (say|invoke|supplicate)\b.*\ballah\b",
        r"\bgrant (me|us)\b",
    ])
});

pub static REMEMBRANCE_KEYWORDS: Lazy<Vec<String>> = Lazy::new(|| {
    prepare_keywords(&[
        "subhan",
        "glory be to allah",
        "glorified is allah",
        "alhamdulillah",
        "praise be to allah",
        "all praise is due to allah",
        "allahu akbar",
        "allah is the greatest",
        "allah is most great",
        "la ilaha illa",
        "none has the right to be worshipped",
        "there is no god but allah",
        "la hawla",
        "no might nor power",
        "astaghfirullah",
        "i seek allah's forgiveness",
        "remembrance",
        "dhikr",
        "tasbih",
        "takbir",
        "tahlil",
        "سبحان",
        "الحمد لله",
        "الله أكبر",
        "لا إله إلا الله",
        "أستغفر الله",
        "لا حول ولا قوة",
    ])
});

pub static REMEMBRANCE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_patterns(&[
        r"\brepeat\w*.*\btimes\b",
        r"\b(\d+|one|two|three|four|five|six|seven|eight|nine|ten|hundred)\s+times\b",
        r"\bremember(s|ed|ing)? allah\b",
        r"\bglorif(y|ies|ied|ying)\b",
        r"\bmorning and (the )?evening\b",
    ])
});

/// Which buckets a hadith falls into. Both may be set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classification {
    pub supplication: bool,
    pub remembrance: bool,
}

impl Classification {
    pub fn is_empty(&self) -> bool {
        !self.supplication && !self.remembrance
    }
}

/// Classify once; the index branches on the result.
pub fn classify(text: &str) -> Classification {
    let prepared = prepare_text(text);
    Classification {
        supplication: matches(&prepared, &SUPPLICATION_KEYWORDS, &SUPPLICATION_PATTERNS),
        remembrance: matches(&prepared, &REMEMBRANCE_KEYWORDS, &REMEMBRANCE_PATTERNS),
    }
}

pub fn is_supplication(text: &str) -> bool {
    matches(
        &prepare_text(text),
        &SUPPLICATION_KEYWORDS,
        &SUPPLICATION_PATTERNS,
    )
}

pub fn is_remembrance(text: &str) -> bool {
    matches(
        &prepare_text(text),
        &REMEMBRANCE_KEYWORDS,
        &REMEMBRANCE_PATTERNS,
    )
}

fn matches(text: &str, keywords: &[String], patterns: &[Regex]) -> bool {
    keywords.iter().any(|k| text.contains(k.as_str())) || patterns.iter().any(|p| p.is_match(text))
}

fn prepare_text(text: &str) -> String {
    normalize_arabic(text).to_lowercase()
}

fn prepare_keywords(keywords: &[&str]) -> Vec<String> {
    keywords.iter().map(|k| prepare_text(k)).collect()
}

fn compile_patterns(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|p| match Regex::new(&format!("(?i){}", p)) {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::warn!("Invalid classifier pattern '{}': {}", p, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_all_compile() {
        assert_eq!(SUPPLICATION_PATTERNS.len(), 8);
        assert_eq!(REMEMBRANCE_PATTERNS.len(), 5);
    }

    #[test]
    fn test_o_allah_forgive_me_is_only_a_supplication() {
        let text = "اللَّهُمَّ اغْفِرْ لِي O Allah, forgive me";
        assert!(is_supplication(text));
        assert!(!is_remembrance(text));
        assert_eq!(
            classify(text),
            Classification {
                supplication: true,
                remembrance: false
            }
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert!(is_supplication("o ALLAH, guide me"));
        assert!(is_remembrance("ALLAHU AKBAR"));
    }

    #[test]
    fn test_diacritics_do_not_block_arabic_keywords() {
        assert!(is_supplication("رَبَّنَا آتِنَا فِي الدُّنْيَا حَسَنَةً"));
        assert!(is_remembrance("الْحَمْدُ لِلَّهِ"));
        assert!(is_remembrance("اللَّهُ أَكْبَرُ"));
    }

    #[test]
    fn test_shared_keyword_matches_both() {
        let text = "سُبْحَانَكَ";
        let c = classify(text);
        assert!(c.supplication);
        assert!(c.remembrance);
    }

    #[test]
    fn test_temporal_trigger() {
        assert!(is_supplication("What he said when entering the mosque"));
        assert!(is_supplication("He would recite this before sleeping"));
    }

    #[test]
    fn test_repetition_marker() {
        assert!(is_remembrance("He repeated it 33 times"));
        assert!(is_remembrance("say it three times"));
        assert!(is_remembrance("Repeat this ten times after Fajr"));
    }

    #[test]
    fn test_neither() {
        let c = classify("The Prophet sold a camel at the market of Medina.");
        assert!(c.is_empty());
    }

    #[test]
    fn test_word_boundaries() {
        // "individual" contains "dua" but is not a du'a.
        assert!(!is_supplication("each individual was given a share"));
        assert!(is_supplication("he made du'a for them"));
    }
}
