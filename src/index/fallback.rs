//! Hand-authored entries served when the corpus yields nothing usable.

use crate::domain::{Remembrance, Supplication};

/// Served when a full scan produces no supplications.
pub fn example_supplications() -> Vec<Supplication> {
    vec![
        Supplication {
            id: "dua-morning-1".into(),
            title: "Morning Supplication".into(),
            arabic: "اللَّهُمَّ بِكَ أَصْبَحْنَا، وَبِكَ أَمْسَيْنَا، وَبِكَ نَحْيَا، وَبِكَ نَمُوتُ، وَإِلَيْكَ النُّشُورُ".into(),
            transliteration: "Allahumma bika asbahna, wa bika amsayna, wa bika nahya, wa bika namutu, wa ilaykan-nushur".into(),
            translation: "O Allah, by You we enter the morning and by You we enter the evening, by You we live and by You we die, and to You is the resurrection.".into(),
            reference: "Jami` at-Tirmidhi 3391".into(),
            category: "Morning".into(),
            tags: vec!["morning".into(), "jami`-at-tirmidhi".into()],
            benefits: String::new(),
            book: "tirmidhi".into(),
            number: "3391".into(),
            is_favorite: false,
        },
        Supplication {
            id: "dua-evening-1".into(),
            title: "Evening Supplication".into(),
            arabic: "اللَّهُمَّ بِكَ أَمْسَيْنَا، وَبِكَ أَصْبَحْنَا، وَبِكَ نَحْيَا، وَبِكَ نَمُوتُ، وَإِلَيْكَ الْمَصِيرُ".into(),
            transliteration: "Allahumma bika amsayna, wa bika asbahna, wa bika nahya, wa bika namutu, wa ilaykal-masir".into(),
            translation: "O Allah, by You we enter the evening and by You we enter the morning, by You we live and by You we die, and to You is the final return.".into(),
            reference: "Jami` at-Tirmidhi 3391".into(),
            category: "Evening".into(),
            tags: vec!["evening".into(), "jami`-at-tirmidhi".into()],
            benefits: String::new(),
            book: "tirmidhi".into(),
            number: "3391".into(),
            is_favorite: false,
        },
    ]
}

/// Served when a full scan produces no remembrances.
pub fn example_remembrances() -> Vec<Remembrance> {
    vec![
        Remembrance {
            id: "zikr-morning-1".into(),
            arabic: "سُبْحَانَ اللَّهِ وَبِحَمْدِهِ".into(),
            description: "Glory be to Allah and praise be to Him. Whoever says this one hundred times in the morning and evening, none will come on the Day of Resurrection with anything better.".into(),
            reference: "Sahih Muslim 2692".into(),
            category: "Morning Adhkar".into(),
            count: 100,
            book: "muslim".into(),
            number: "2692".into(),
            is_favorite: false,
        },
        Remembrance {
            id: "zikr-evening-1".into(),
            arabic: "لَا إِلَهَ إِلَّا اللَّهُ وَحْدَهُ لَا شَرِيكَ لَهُ، لَهُ الْمُلْكُ وَلَهُ الْحَمْدُ وَهُوَ عَلَى كُلِّ شَيْءٍ قَدِيرٌ".into(),
            description: "None has the right to be worshipped but Allah alone, without partner. His is the dominion and His is the praise, and He is able to do all things. Recited ten times.".into(),
            reference: "Sahih Muslim 2693".into(),
            category: "Evening Adhkar".into(),
            count: 10,
            book: "muslim".into(),
            number: "2693".into(),
            is_favorite: false,
        },
    ]
}

/// Served when the scan itself fails.
pub fn placeholder_supplication() -> Supplication {
    Supplication {
        id: "dua-placeholder".into(),
        title: "Supplications unavailable".into(),
        arabic: "رَبِّ زِدْنِي عِلْمًا".into(),
        transliteration: "Rabbi zidni 'ilma".into(),
        translation: "My Lord, increase me in knowledge.".into(),
        reference: "Quran 20:114".into(),
        category: "General".into(),
        tags: Vec::new(),
        benefits: String::new(),
        book: String::new(),
        number: String::new(),
        is_favorite: false,
    }
}

pub fn placeholder_remembrance() -> Remembrance {
    Remembrance {
        id: "zikr-placeholder".into(),
        arabic: "سُبْحَانَ اللَّهِ".into(),
        description: "Glory be to Allah.".into(),
        reference: String::new(),
        category: "General Adhkar".into(),
        count: 1,
        book: String::new(),
        number: String::new(),
        is_favorite: false,
    }
}
