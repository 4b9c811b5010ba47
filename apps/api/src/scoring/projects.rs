use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::{analyze_keywords, word_count, KeywordHit};
use crate::catalog::keywords::{HIGH_DEMAND_TECHS, TECH_KEYWORDS};
use crate::numeric::{bucket, mean, round1};
use crate::scoring::{ComponentResult, Factors};

pub const FACTORS: Factors = &[
    ("technical_depth", 0.35),
    ("tech_stack_quality", 0.20),
    ("github_presence", 0.20),
    ("project_quantity", 0.25),
];

/// Total keyword weight that maps a description to 100.
const KEYWORD_SATURATION: f64 = 25.0;

const LENGTH_STEPS: &[(usize, f64)] = &[(100, 100.0), (50, 80.0), (25, 60.0), (10, 40.0)];
const STACK_STEPS: &[(usize, f64)] = &[(6, 100.0), (4, 80.0), (2, 60.0)];
const QUANTITY_STEPS: &[(usize, f64)] = &[(8, 100.0), (5, 85.0), (3, 70.0), (2, 55.0)];

static GITHUB_REPO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^https?://github\.com/[\w\-]+/[\w\-]+").expect("valid github regex")
});

fn untitled() -> String {
    "Untitled".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectRecord {
    #[serde(default = "untitled")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub github_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptionAnalysis {
    pub keyword_score: f64,
    pub length_score: f64,
    pub keywords_found: Vec<KeywordHit>,
    pub word_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackAnalysis {
    pub score: f64,
    pub diversity: usize,
    pub high_demand_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDetail {
    pub title: String,
    pub score: f64,
    pub description_analysis: DescriptionAnalysis,
    pub tech_stack_analysis: StackAnalysis,
    pub has_github: bool,
    pub github_url: String,
}

pub type ProjectsResult = ComponentResult<ProjectDetail>;

/// Technical depth and elaboration of one description.
pub fn analyze_description(description: &str) -> DescriptionAnalysis {
    if description.is_empty() {
        return DescriptionAnalysis {
            keyword_score: 0.0,
            length_score: 0.0,
            keywords_found: Vec::new(),
            word_count: 0,
        };
    }

    let analysis = analyze_keywords(description, TECH_KEYWORDS, KEYWORD_SATURATION);
    let words = word_count(description);
    DescriptionAnalysis {
        keyword_score: round1(analysis.score),
        length_score: round1(bucket(words, LENGTH_STEPS, 20.0)),
        keywords_found: analysis.keywords_found,
        word_count: words,
    }
}

/// Breadth and market demand of one tech stack.
pub fn analyze_stack(stack: &[String]) -> StackAnalysis {
    if stack.is_empty() {
        return StackAnalysis {
            score: 0.0,
            diversity: 0,
            high_demand_count: 0,
        };
    }

    let high_demand_count = stack
        .iter()
        .filter(|t| HIGH_DEMAND_TECHS.contains(&t.to_lowercase().as_str()))
        .count();
    let diversity = bucket(stack.len(), STACK_STEPS, 35.0);
    let demand = (high_demand_count as f64 / stack.len() as f64 * 110.0).min(100.0);

    StackAnalysis {
        score: round1(diversity * 0.5 + demand * 0.5),
        diversity: stack.len(),
        high_demand_count,
    }
}

pub fn is_github_repo(url: &str) -> bool {
    !url.is_empty() && GITHUB_REPO.is_match(url)
}

/// Scores a project portfolio.
pub fn score_projects(records: &[ProjectRecord]) -> ProjectsResult {
    if records.is_empty() {
        return ComponentResult::empty(
            FACTORS,
            "Start building projects to demonstrate your skills!",
        );
    }

    let details: Vec<ProjectDetail> = records.iter().map(project_detail).collect();

    let depth_scores: Vec<f64> = details
        .iter()
        .map(|d| d.description_analysis.keyword_score)
        .collect();
    let stack_scores: Vec<f64> = details.iter().map(|d| d.tech_stack_analysis.score).collect();
    let github_count = details.iter().filter(|d| d.has_github).count();
    let count = records.len();

    let avg_depth = mean(&depth_scores);
    let avg_stack = mean(&stack_scores);
    let github_presence = (github_count as f64 / count as f64 * 110.0).min(100.0);
    let quantity = bucket(count, QUANTITY_STEPS, 35.0);

    let mut suggestions = Vec::new();
    if count < 3 {
        suggestions.push("Build at least 3-5 diverse projects to showcase your abilities.");
    }
    if github_count < count {
        suggestions.push("Host all your projects on GitHub with proper README documentation.");
    }
    if avg_depth < 50.0 {
        suggestions.push("Work on more technically complex projects using advanced concepts (microservices, ML, etc.).");
    }
    if avg_stack < 50.0 {
        suggestions.push("Use high-demand technologies in your projects (React, Node.js, Docker, AWS, etc.).");
    }
    if count >= 3 && avg_depth >= 60.0 {
        suggestions.push("Great project portfolio! Consider contributing to open-source projects for extra impact.");
    }

    debug!(count, github_count, avg_depth, avg_stack, "projects scored");

    ComponentResult::weighted(
        FACTORS,
        &[avg_depth.min(100.0), avg_stack.min(100.0), github_presence, quantity],
        details,
        suggestions.into_iter().map(String::from).collect(),
    )
}

fn project_detail(record: &ProjectRecord) -> ProjectDetail {
    let description_analysis = analyze_description(&record.description);
    let tech_stack_analysis = analyze_stack(&record.tech_stack);
    let has_github = is_github_repo(&record.github_url);

    let github_points = if has_github { 100.0 } else { 20.0 };
    let score = description_analysis.keyword_score * 0.4
        + description_analysis.length_score * 0.2
        + tech_stack_analysis.score * 0.3
        + github_points * 0.1;

    ProjectDetail {
        title: record.title.clone(),
        score: round1(score),
        description_analysis,
        tech_stack_analysis,
        has_github,
        github_url: record.github_url.clone(),
    }
}
