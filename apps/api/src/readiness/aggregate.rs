use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::numeric::round1;
use crate::readiness::{Component, ComponentScores};

pub const MAX_SCORE: u32 = 100;

/// Letter grade with its display label and colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Grade {
    pub grade: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

// Inclusive lower bounds, highest first.
const GRADE_BANDS: &[(f64, Grade)] = &[
    (90.0, Grade { grade: "A+", label: "Exceptional", color: "#10b981" }),
    (80.0, Grade { grade: "A", label: "Excellent", color: "#22c55e" }),
    (70.0, Grade { grade: "B+", label: "Very Good", color: "#84cc16" }),
    (60.0, Grade { grade: "B", label: "Good", color: "#eab308" }),
    (50.0, Grade { grade: "C+", label: "Average", color: "#f97316" }),
    (40.0, Grade { grade: "C", label: "Below Average", color: "#ef4444" }),
    (30.0, Grade { grade: "D", label: "Needs Work", color: "#dc2626" }),
];

const FAILING: Grade = Grade {
    grade: "F",
    label: "Critical",
    color: "#991b1b",
};

impl Grade {
    pub fn for_score(score: f64) -> Grade {
        GRADE_BANDS
            .iter()
            .find(|(floor, _)| score >= *floor)
            .map(|(_, grade)| *grade)
            .unwrap_or(FAILING)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentEntry {
    pub raw_score: f64,
    pub weight: u32,
    pub weighted_score: f64,
    pub grade: Grade,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Area {
    pub name: Component,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    pub final_score: f64,
    pub max_score: u32,
    pub overall_grade: Grade,
    pub weights: IndexMap<Component, u32>,
    pub component_breakdown: IndexMap<Component, ComponentEntry>,
    pub strongest_areas: Vec<Area>,
    pub weakest_areas: Vec<Area>,
}

/// Weighted final score over all five components. Missing components count as 0.
pub fn aggregate(scores: &ComponentScores) -> AggregateResult {
    let mut weighted_sum = 0.0;
    let mut breakdown = IndexMap::with_capacity(Component::ALL.len());

    for component in Component::ALL {
        let raw = scores.get(component);
        let weight = component.weight();
        let contribution = raw * weight as f64 / 100.0;
        weighted_sum += contribution;
        breakdown.insert(
            component,
            ComponentEntry {
                raw_score: round1(raw),
                weight,
                weighted_score: round1(contribution),
                grade: Grade::for_score(raw),
            },
        );
    }

    let final_score = round1(weighted_sum);

    // stable: ties keep the fixed component order
    let mut ranked: Vec<Area> = breakdown
        .iter()
        .map(|(c, e)| Area {
            name: *c,
            score: e.raw_score,
        })
        .collect();
    ranked.sort_by(|a, b| a.score.total_cmp(&b.score));

    let weakest_areas = ranked.iter().take(2).cloned().collect();
    let strongest_areas = ranked.iter().rev().take(2).cloned().collect();

    debug!(final_score, "aggregate computed");

    AggregateResult {
        final_score,
        max_score: MAX_SCORE,
        overall_grade: Grade::for_score(final_score),
        weights: Component::ALL.iter().map(|c| (*c, c.weight())).collect(),
        component_breakdown: breakdown,
        strongest_areas,
        weakest_areas,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all(score: f64) -> ComponentScores {
        Component::ALL.iter().map(|c| (*c, score)).collect()
    }

    #[test]
    fn test_all_hundred_is_a_plus() {
        let r = aggregate(&all(100.0));
        assert_eq!(r.final_score, 100.0);
        assert_eq!(r.overall_grade.grade, "A+");
        assert_eq!(r.max_score, 100);
    }

    #[test]
    fn test_empty_scores_fail() {
        let r = aggregate(&ComponentScores::new());
        assert_eq!(r.final_score, 0.0);
        assert_eq!(r.overall_grade.grade, "F");
        assert_eq!(r.component_breakdown.len(), 5);
    }

    #[test]
    fn test_final_score_rounds_stored_contribution() {
        let r = aggregate(&ComponentScores::new().with(Component::Skills, 43.5));
        assert_eq!(r.component_breakdown[&Component::Skills].weighted_score, 13.1);
        assert_eq!(r.final_score, 13.1);

        let r = aggregate(&ComponentScores::new().with(Component::Skills, 44.5));
        assert_eq!(r.final_score, 13.3);
    }

    #[test]
    fn test_weighted_contributions() {
        let scores = ComponentScores::new()
            .with(Component::Skills, 80.0)
            .with(Component::Projects, 60.0)
            .with(Component::Resume, 50.0);
        let r = aggregate(&scores);
        // 24 + 15 + 5
        assert_eq!(r.final_score, 44.0);
        assert_eq!(r.overall_grade.grade, "C");
        assert_eq!(r.component_breakdown[&Component::Skills].weighted_score, 24.0);
        assert_eq!(r.component_breakdown[&Component::Skills].grade.grade, "A");
        assert_eq!(r.component_breakdown[&Component::Internships].raw_score, 0.0);
    }

    #[test]
    fn test_strongest_and_weakest_areas() {
        let scores = ComponentScores::new()
            .with(Component::Skills, 80.0)
            .with(Component::Certifications, 20.0)
            .with(Component::Projects, 60.0)
            .with(Component::Internships, 90.0)
            .with(Component::Resume, 20.0);
        let r = aggregate(&scores);
        let weakest: Vec<Component> = r.weakest_areas.iter().map(|a| a.name).collect();
        let strongest: Vec<Component> = r.strongest_areas.iter().map(|a| a.name).collect();
        assert_eq!(weakest, vec![Component::Certifications, Component::Resume]);
        assert_eq!(strongest, vec![Component::Internships, Component::Skills]);
    }

    #[test]
    fn test_monotonic_in_each_component() {
        let base = all(50.0);
        let before = aggregate(&base).final_score;
        for c in Component::ALL {
            let bumped: ComponentScores = Component::ALL
                .iter()
                .map(|x| (*x, if *x == c { 60.0 } else { 50.0 }))
                .collect();
            assert!(aggregate(&bumped).final_score >= before, "{c:?}");
        }
    }

    #[test]
    fn test_grade_bands_inclusive() {
        assert_eq!(Grade::for_score(90.0).grade, "A+");
        assert_eq!(Grade::for_score(89.9).grade, "A");
        assert_eq!(Grade::for_score(30.0).grade, "D");
        assert_eq!(Grade::for_score(29.9).grade, "F");
    }

    #[test]
    fn test_serializes_component_keys() {
        let json = serde_json::to_value(aggregate(&all(70.0))).unwrap();
        assert_eq!(json["weights"]["skills"], 30);
        assert_eq!(json["component_breakdown"]["resume"]["weight"], 10);
        assert!(json["strongest_areas"][0]["name"].is_string());
    }
}
