/// Normalize Arabic text for matching: strips diacritics and folds
/// hamza/alif and Persian letter variants. Non-Arabic text passes through.
pub fn normalize_arabic(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            // Harakat, tanwin, shadda, sukun, superscript alif
            '\u{064B}'..='\u{065F}' | '\u{0670}' => None,
            // Tatweel
            '\u{0640}' => None,
            'أ' | 'إ' | 'آ' | 'ٱ' => Some('ا'),
            'ؤ' => Some('و'),
            'ئ' | 'ى' => Some('ي'),
            'ک' | 'گ' => Some('ك'),
            'ی' => Some('ي'),
            'ۃ' => Some('ة'),
            _ => Some(c),
        })
        .collect()
}
