//! Fuzzy Matcher: resolves free-text labels against ordered reference catalogs.
//!
//! Resolution order:
//! 1. case-insensitive exact name → `Exact`
//! 2. best similarity ratio over the whole catalog (first-seen wins on ties),
//!    with substring containment floored at 0.85 → `Fuzzy` when ≥ 0.6
//! 3. otherwise `Unmatched`; callers turn that into their default tier
//!
//! Linear in catalog size. Catalogs hold hundreds of names, no index needed.

pub mod certificate;

use serde::{Deserialize, Serialize};

/// Minimum similarity for a fuzzy match to be accepted.
pub const ACCEPTANCE_THRESHOLD: f64 = 0.6;

/// Ratio assigned when one label contains the other.
pub const CONTAINMENT_FLOOR: f64 = 0.85;

/// How a catalog match was produced. `Default` is the explicit no-match sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    Fuzzy,
    Document,
    Default,
}

/// Outcome of resolving one label against an ordered candidate list.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<T> {
    Exact(T),
    Fuzzy { candidate: T, ratio: f64 },
    Unmatched,
}

/// Normalized edit-distance similarity in [0, 1]. Symmetric.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b)
}

/// Similarity with containment treated as near-identity.
/// Both inputs are expected lowercased.
pub fn containment_ratio(a: &str, b: &str) -> f64 {
    let ratio = similarity_ratio(a, b);
    if a.contains(b) || b.contains(a) {
        ratio.max(CONTAINMENT_FLOOR)
    } else {
        ratio
    }
}

/// Resolves `label` against `candidates` (name, payload) in iteration order.
///
/// The label is trimmed and lowercased before comparison. An exact match
/// returns immediately; otherwise the strictly-greatest ratio seen across the
/// whole sequence is kept, so the first of several tied maxima wins.
pub fn resolve<'a, T, I>(label: &str, candidates: I) -> Resolution<T>
where
    I: IntoIterator<Item = (&'a str, T)>,
{
    let needle = label.trim().to_lowercase();
    let mut best: Option<(T, f64)> = None;

    for (name, payload) in candidates {
        let name_lower = name.to_lowercase();
        if name_lower == needle {
            return Resolution::Exact(payload);
        }

        let ratio = containment_ratio(&needle, &name_lower);
        let best_ratio = best.as_ref().map(|(_, r)| *r).unwrap_or(0.0);
        if ratio > best_ratio {
            best = Some((payload, ratio));
        }
    }

    match best {
        Some((candidate, ratio)) if ratio >= ACCEPTANCE_THRESHOLD => {
            Resolution::Fuzzy { candidate, ratio }
        }
        _ => Resolution::Unmatched,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: &[&str] = &[
        "AWS Solutions Architect",
        "Azure Fundamentals",
        "Certified Kubernetes Administrator",
    ];

    fn candidates() -> impl Iterator<Item = (&'static str, usize)> {
        NAMES.iter().copied().zip(0..)
    }

    #[test]
    fn test_exact_match_is_case_insensitive() {
        let res = resolve("  azure FUNDAMENTALS ", candidates());
        assert_eq!(res, Resolution::Exact(1));
    }

    #[test]
    fn test_substring_floors_ratio() {
        match resolve("aws", candidates()) {
            Resolution::Fuzzy { candidate, ratio } => {
                assert_eq!(candidate, 0);
                assert!(ratio >= CONTAINMENT_FLOOR, "ratio was {ratio}");
            }
            other => panic!("expected fuzzy match, got {other:?}"),
        }
    }

    #[test]
    fn test_close_typo_is_accepted() {
        match resolve("Certified Kubernetes Administrater", candidates()) {
            Resolution::Fuzzy { candidate, ratio } => {
                assert_eq!(candidate, 2);
                assert!(ratio > 0.9);
            }
            other => panic!("expected fuzzy match, got {other:?}"),
        }
    }

    #[test]
    fn test_nonsense_is_unmatched() {
        assert_eq!(resolve("qwxzv plorp", candidates()), Resolution::Unmatched);
    }

    #[test]
    fn test_tie_keeps_first_seen() {
        // Both names contain "cloud", both floor at 0.85.
        let names = [("cloud alpha", 'a'), ("cloud beta", 'b')];
        match resolve("cloud", names) {
            Resolution::Fuzzy { candidate, .. } => assert_eq!(candidate, 'a'),
            other => panic!("expected fuzzy match, got {other:?}"),
        }
    }

    #[test]
    fn test_similarity_ratio_is_symmetric() {
        let a = "terraform associate";
        let b = "terraform professional";
        assert_eq!(similarity_ratio(a, b), similarity_ratio(b, a));
        assert_eq!(similarity_ratio("", ""), 1.0);
    }
}
