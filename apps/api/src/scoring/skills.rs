use indexmap::IndexSet;
use tracing::debug;

use crate::catalog::{SkillInfo, SkillsCatalog};
use crate::numeric::mean;
use crate::scoring::{ComponentResult, Factors};

pub const FACTORS: Factors = &[
    ("market_demand", 0.40),
    ("category_diversity", 0.30),
    ("skill_depth", 0.20),
    ("high_demand_bonus", 0.10),
];

/// Demand at or above this counts as a high-demand skill.
const HIGH_DEMAND: f64 = 8.5;
/// Diversity saturates at this many categories.
const EXPECTED_CATEGORIES: usize = 6;
const OPTIMAL_SKILLS: f64 = 20.0;

const AI_CATEGORY: &str = "Artificial Intelligence & ML";
const CLOUD_CATEGORY: &str = "Cloud Computing";
const DEVOPS_CATEGORY: &str = "DevOps & CI/CD";

pub type SkillsResult = ComponentResult<SkillInfo>;

/// Scores a list of skill names against the skills catalog.
pub fn score_skills(catalog: &SkillsCatalog, names: &[String]) -> SkillsResult {
    if names.is_empty() {
        return ComponentResult::empty(
            FACTORS,
            "Start by adding your technical skills to get scored.",
        );
    }

    let details: Vec<SkillInfo> = names.iter().map(|n| catalog.resolve(n)).collect();
    let categories: IndexSet<&str> = details.iter().map(|s| s.category.as_str()).collect();
    let demands: Vec<f64> = details.iter().map(|s| s.demand).collect();
    let high_demand = demands.iter().filter(|d| **d >= HIGH_DEMAND).count();
    let count = names.len();

    let avg_demand = mean(&demands);
    let market_demand = (avg_demand / 10.0 * 100.0).min(100.0);

    let divisor = catalog.category_count().min(EXPECTED_CATEGORIES).max(1);
    let diversity = (categories.len() as f64 / divisor as f64 * 100.0).min(100.0);

    let depth_raw = (count as f64 / OPTIMAL_SKILLS).min(1.5);
    let depth_bonus = if count >= 5 { 25.0 } else { 0.0 };
    let depth = (depth_raw * 75.0 + depth_bonus).min(100.0);

    let high_demand_bonus = (high_demand as f64 / count as f64 * 120.0).min(100.0);

    let mut suggestions = Vec::new();
    if count < 5 {
        suggestions.push("Add more skills — aim for at least 10-15 technical skills.");
    }
    if categories.len() < 3 {
        suggestions.push("Diversify your skillset across more technology categories.");
    }
    if high_demand < 3 {
        suggestions.push("Focus on learning high-demand skills like Python, React.js, AWS, or Docker.");
    }
    if avg_demand < 7.0 {
        suggestions.push("Consider upgrading to more in-demand technologies.");
    }
    if !categories.contains(AI_CATEGORY) {
        suggestions.push("AI/ML skills are extremely in-demand — consider adding some.");
    }
    if !categories.contains(CLOUD_CATEGORY) && !categories.contains(DEVOPS_CATEGORY) {
        suggestions.push("Cloud and DevOps skills significantly boost career readiness.");
    }

    debug!(count, categories = categories.len(), high_demand, "skills scored");

    ComponentResult::weighted(
        FACTORS,
        &[market_demand, diversity, depth, high_demand_bonus],
        details,
        suggestions.into_iter().map(String::from).collect(),
    )
}
