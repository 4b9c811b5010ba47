//! Text Analyzer: keyword-weighted scoring of free-form text.
//!
//! Keywords match by lowercase substring containment (not word boundaries).
//! The summed weight of every hit is normalised against a per-caller
//! saturation constant: `min(100, total / saturation * 100)`.

use serde::Serialize;

use crate::catalog::keywords::KeywordTable;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordHit {
    pub keyword: &'static str,
    pub weight: u32,
}

/// Why a text scored what it did: the normalised score, the hits, the length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordAnalysis {
    pub score: f64,
    pub keywords_found: Vec<KeywordHit>,
    pub word_count: usize,
}

impl KeywordAnalysis {
    pub fn total_weight(&self) -> u32 {
        self.keywords_found.iter().map(|h| h.weight).sum()
    }

    pub fn keywords(&self) -> Vec<&'static str> {
        self.keywords_found.iter().map(|h| h.keyword).collect()
    }
}

/// Whitespace-delimited word count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Scores `text` against `table`. `saturation` is the total weight that maps to 100.
pub fn analyze_keywords(text: &str, table: KeywordTable, saturation: f64) -> KeywordAnalysis {
    let lower = text.to_lowercase();

    let keywords_found: Vec<KeywordHit> = table
        .iter()
        .filter(|(keyword, _)| lower.contains(*keyword))
        .map(|&(keyword, weight)| KeywordHit { keyword, weight })
        .collect();

    let total: u32 = keywords_found.iter().map(|h| h.weight).sum();
    let score = (total as f64 / saturation * 100.0).min(100.0);

    KeywordAnalysis {
        score,
        keywords_found,
        word_count: word_count(&lower),
    }
}

/// Highest weight among the hits, or `None` if nothing matched.
pub fn max_keyword_weight(text: &str, table: KeywordTable) -> Option<u32> {
    let lower = text.to_lowercase();
    table
        .iter()
        .filter(|(keyword, _)| lower.contains(*keyword))
        .map(|(_, weight)| *weight)
        .max()
}
