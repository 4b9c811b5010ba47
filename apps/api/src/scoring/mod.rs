//! Component Scorers: one pure function per readiness input.
//!
//! Every scorer returns a [`ComponentResult`]: a 0–100 score, the sub-factors
//! that produced it, per-item details and ordered suggestions. Empty input is
//! never an error; it yields the zero result with exactly one suggestion.

pub mod certifications;
pub mod handlers;
pub mod internships;
pub mod projects;
pub mod resume;
pub mod skills;

use indexmap::IndexMap;
use serde::Serialize;

use crate::numeric::{clamp_score, round1};

/// Sub-factor name → value, in declaration order.
pub type Breakdown = IndexMap<&'static str, f64>;

/// (sub-factor, weight) pairs. Weights of one component sum to 1.
pub type Factors = &'static [(&'static str, f64)];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentResult<D> {
    pub score: f64,
    pub breakdown: Breakdown,
    pub details: Vec<D>,
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<D> ComponentResult<D> {
    /// Score 0, every sub-factor 0, one suggestion.
    pub fn empty(factors: Factors, suggestion: &str) -> Self {
        ComponentResult {
            score: 0.0,
            breakdown: factors.iter().map(|(name, _)| (*name, 0.0)).collect(),
            details: Vec::new(),
            suggestions: vec![suggestion.to_string()],
            error: None,
        }
    }

    /// Zero result for input that could not be read at all.
    pub fn failed(factors: Factors, error: &str, suggestion: &str) -> Self {
        ComponentResult {
            error: Some(error.to_string()),
            ..Self::empty(factors, suggestion)
        }
    }

    /// Combines raw sub-factor values (aligned with `factors`) into the result.
    ///
    /// The score is computed from the unrounded values; the published
    /// breakdown is rounded separately.
    pub fn weighted(
        factors: Factors,
        values: &[f64],
        details: Vec<D>,
        suggestions: Vec<String>,
    ) -> Self {
        debug_assert_eq!(factors.len(), values.len());

        let total: f64 = factors
            .iter()
            .zip(values)
            .map(|((_, weight), value)| value * weight)
            .sum();

        ComponentResult {
            score: clamp_score(round1(total)),
            breakdown: factors
                .iter()
                .zip(values)
                .map(|((name, _), value)| (*name, clamp_score(round1(*value))))
                .collect(),
            details,
            suggestions,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FACTORS: Factors = &[("a", 0.75), ("b", 0.25)];

    #[test]
    fn test_empty_zeroes_every_factor() {
        let r: ComponentResult<()> = ComponentResult::empty(FACTORS, "do something");
        assert_eq!(r.score, 0.0);
        assert_eq!(r.breakdown.keys().copied().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(r.breakdown.values().all(|v| *v == 0.0));
        assert_eq!(r.suggestions, vec!["do something"]);
        assert!(r.error.is_none());
    }

    #[test]
    fn test_weighted_rounds_after_combining() {
        let r: ComponentResult<()> =
            ComponentResult::weighted(FACTORS, &[33.33, 66.66], vec![], vec![]);
        // 24.9975 + 16.665 = 41.6625
        assert_eq!(r.score, 41.7);
        assert_eq!(r.breakdown["a"], 33.3);
        assert_eq!(r.breakdown["b"], 66.7);
    }

    #[test]
    fn test_failed_carries_error() {
        let r: ComponentResult<()> = ComponentResult::failed(FACTORS, "unreadable", "retry");
        assert_eq!(r.error.as_deref(), Some("unreadable"));
        assert_eq!(r.suggestions.len(), 1);
    }

    #[test]
    fn test_error_omitted_when_absent() {
        let r: ComponentResult<()> = ComponentResult::empty(FACTORS, "x");
        let json = serde_json::to_value(&r).unwrap();
        assert!(json.get("error").is_none());
    }
}
