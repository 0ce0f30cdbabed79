use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The two entity families the index produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Supplication,
    Remembrance,
}

impl EntityKind {
    /// Prefix of entity ids of this kind.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            EntityKind::Supplication => "dua",
            EntityKind::Remembrance => "zikr",
        }
    }

    /// Prefix of category ids of this kind. The two namespaces never overlap.
    pub fn category_prefix(&self) -> &'static str {
        match self {
            EntityKind::Supplication => "dua-cat-",
            EntityKind::Remembrance => "zikr-cat-",
        }
    }

    pub fn default_category(&self) -> &'static str {
        match self {
            EntityKind::Supplication => "General",
            EntityKind::Remembrance => "General Adhkar",
        }
    }

    /// Key-value namespace the favorites of this kind are stored under.
    pub fn favorites_namespace(&self) -> &'static str {
        match self {
            EntityKind::Supplication => "hisn.favorite-duas",
            EntityKind::Remembrance => "hisn.favorite-azkar",
        }
    }

    fn plural(&self) -> &'static str {
        match self {
            EntityKind::Supplication => "supplications",
            EntityKind::Remembrance => "remembrances",
        }
    }

    /// Kind of an entity id, judged by its prefix.
    pub fn of_entity_id(id: &str) -> Option<Self> {
        [EntityKind::Supplication, EntityKind::Remembrance]
            .into_iter()
            .find(|kind| id.starts_with(&format!("{}-", kind.id_prefix())))
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.plural())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dua" | "duas" | "supplication" | "supplications" => Ok(EntityKind::Supplication),
            "zikr" | "dhikr" | "azkar" | "adhkar" | "remembrance" | "remembrances" => {
                Ok(EntityKind::Remembrance)
            }
            other => Err(format!("unknown entity kind: {}", other)),
        }
    }
}

/// A derived taxonomy node grouping entities of one kind by category name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub count: usize,
    pub kind: EntityKind,
}

impl Category {
    pub fn new(kind: EntityKind, name: &str, count: usize) -> Self {
        Self {
            id: format!("{}{}", kind.category_prefix(), slugify(name)),
            name: name.to_string(),
            description: format!("{} {} from {}", count, kind, name),
            count,
            kind,
        }
    }
}

/// Lowercase and join whitespace-separated words with hyphens.
///
/// Lossy: case is folded and runs of whitespace collapse into one hyphen.
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Best-effort inverse of [`slugify`]: hyphens become spaces and every word
/// is title-cased. Names that contained hyphens or odd casing do not
/// round-trip exactly.
pub fn unslugify(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Morning Adhkar"), "morning-adhkar");
        assert_eq!(slugify("  Morning   Adhkar "), "morning-adhkar");
        assert_eq!(slugify("Prayer"), "prayer");
        assert_eq!(slugify("Du'a of Travel"), "du'a-of-travel");
    }

    #[test]
    fn test_unslugify() {
        assert_eq!(unslugify("morning-adhkar"), "Morning Adhkar");
        assert_eq!(unslugify("du'a-of-travel"), "Du'a Of Travel");
        assert_eq!(unslugify("a--b"), "A B");
        assert_eq!(unslugify(""), "");
    }

    #[test]
    fn test_hyphenated_names_do_not_round_trip() {
        let slug = slugify("Self-Purification");
        assert_eq!(slug, "self-purification");
        assert_eq!(unslugify(&slug), "Self Purification");
    }

    #[test]
    fn test_hyphen_and_space_share_a_slug() {
        assert_eq!(slugify("Self-Purification"), slugify("Self Purification"));
        assert_eq!(
            Category::new(EntityKind::Supplication, "Self-Purification", 1).id,
            Category::new(EntityKind::Supplication, "self purification", 1).id
        );
    }

    #[test]
    fn test_category_ids_are_namespaced() {
        let dua = Category::new(EntityKind::Supplication, "Prayer", 3);
        let zikr = Category::new(EntityKind::Remembrance, "Prayer", 5);
        assert_eq!(dua.id, "dua-cat-prayer");
        assert_eq!(zikr.id, "zikr-cat-prayer");
        assert_ne!(dua.id, zikr.id);
        assert_eq!(dua.description, "3 supplications from Prayer");
        assert_eq!(zikr.description, "5 remembrances from Prayer");
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("duas".parse::<EntityKind>(), Ok(EntityKind::Supplication));
        assert_eq!("Azkar".parse::<EntityKind>(), Ok(EntityKind::Remembrance));
        assert!("verses".parse::<EntityKind>().is_err());
    }

    #[test]
    fn test_kind_of_entity_id() {
        assert_eq!(
            EntityKind::of_entity_id("dua-bukhari-12"),
            Some(EntityKind::Supplication)
        );
        assert_eq!(
            EntityKind::of_entity_id("zikr-morning-1"),
            Some(EntityKind::Remembrance)
        );
        assert_eq!(EntityKind::of_entity_id("duality"), None);
    }
}
