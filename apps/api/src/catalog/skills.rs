use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::matching::MatchKind;

/// Category assigned to skills the catalog does not know.
pub const OTHER_CATEGORY: &str = "Other";
pub const DEFAULT_DEMAND: f64 = 5.0;
pub const DEFAULT_ICON: &str = "🔧";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    /// Market demand, 0 – 10.
    pub demand: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub icon: String,
    pub skills: Vec<SkillRecord>,
}

/// Skills grouped by category, in file order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillsCatalog {
    categories: IndexMap<String, SkillCategory>,
}

/// A skill resolved against the catalog (or defaulted to `Other`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillInfo {
    pub name: String,
    pub category: String,
    pub demand: f64,
    pub icon: String,
    pub matched_by: MatchKind,
}

/// Catalog dump entry for UI dropdowns.
#[derive(Debug, Clone, Serialize)]
pub struct SkillListing {
    pub icon: String,
    pub skills: Vec<String>,
}

impl SkillsCatalog {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Categories with their entries, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SkillCategory)> {
        self.categories.iter().map(|(name, cat)| (name.as_str(), cat))
    }

    /// Case-insensitive exact lookup on the trimmed name.
    pub fn lookup_exact(&self, name: &str) -> Option<SkillInfo> {
        let needle = name.trim().to_lowercase();
        self.iter().find_map(|(category, info)| {
            info.skills
                .iter()
                .find(|s| s.name.to_lowercase() == needle)
                .map(|s| SkillInfo {
                    name: s.name.clone(),
                    category: category.to_string(),
                    demand: s.demand,
                    icon: info.icon.clone(),
                    matched_by: MatchKind::Exact,
                })
        })
    }

    /// Exact lookup, falling back to the `Other` category at moderate demand.
    pub fn resolve(&self, name: &str) -> SkillInfo {
        self.lookup_exact(name).unwrap_or_else(|| SkillInfo {
            name: name.to_string(),
            category: OTHER_CATEGORY.to_string(),
            demand: DEFAULT_DEMAND,
            icon: DEFAULT_ICON.to_string(),
            matched_by: MatchKind::Default,
        })
    }

    pub fn listing(&self) -> IndexMap<String, SkillListing> {
        self.iter()
            .map(|(category, info)| {
                (
                    category.to_string(),
                    SkillListing {
                        icon: info.icon.clone(),
                        skills: info.skills.iter().map(|s| s.name.clone()).collect(),
                    },
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;

    #[test]
    fn test_lookup_exact_ignores_case_and_padding() {
        let catalog = fixtures::skills();
        let info = catalog.lookup_exact("  python ").unwrap();
        assert_eq!(info.name, "Python");
        assert_eq!(info.category, "Programming Languages");
        assert_eq!(info.matched_by, MatchKind::Exact);
    }

    #[test]
    fn test_unknown_skill_defaults_to_other() {
        let catalog = fixtures::skills();
        let info = catalog.resolve("Underwater Basket Weaving");
        assert_eq!(info.category, OTHER_CATEGORY);
        assert_eq!(info.demand, DEFAULT_DEMAND);
        assert_eq!(info.name, "Underwater Basket Weaving");
        assert_eq!(info.matched_by, MatchKind::Default);
    }

    #[test]
    fn test_listing_preserves_file_order() {
        let listing = fixtures::skills().listing();
        let first = listing.keys().next().unwrap();
        assert_eq!(first, "Programming Languages");
        assert!(listing["Cloud Computing"].skills.contains(&"AWS".to_string()));
    }

    #[test]
    fn test_names_are_case_insensitive_unique() {
        let catalog = fixtures::skills();
        let mut seen = std::collections::HashSet::new();
        for (_, cat) in catalog.iter() {
            for s in &cat.skills {
                assert!(seen.insert(s.name.to_lowercase()), "duplicate {}", s.name);
                assert!((0.0..=10.0).contains(&s.demand));
            }
        }
    }

    #[test]
    fn test_empty_catalog_resolves_everything_to_default() {
        let catalog = SkillsCatalog::default();
        assert_eq!(catalog.resolve("Python").category, OTHER_CATEGORY);
    }
}
