use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::{analyze_keywords, max_keyword_weight};
use crate::catalog::keywords::{ACHIEVEMENT_KEYWORDS, ROLE_KEYWORDS};
use crate::catalog::{identify_company, CompanyMatch};
use crate::numeric::{bucket, mean, round1};
use crate::scoring::{ComponentResult, Factors};

pub const FACTORS: Factors = &[
    ("company_recognition", 0.30),
    ("role_relevance", 0.25),
    ("duration", 0.15),
    ("achievements", 0.20),
    ("quantity", 0.10),
];

/// Role with no recognisable keyword, blank included.
const UNRECOGNISED_ROLE_SCORE: f64 = 30.0;
const BLANK_ACHIEVEMENTS_SCORE: f64 = 15.0;
const ACHIEVEMENT_SATURATION: f64 = 20.0;
const CERTIFICATE_BONUS: f64 = 5.0;

const DURATION_STEPS: &[(i32, f64)] = &[
    (12, 100.0),
    (6, 90.0),
    (3, 70.0),
    (2, 55.0),
    (1, 40.0),
];
const QUANTITY_STEPS: &[(usize, f64)] = &[(4, 100.0), (3, 85.0), (2, 70.0)];

fn default_duration() -> i32 {
    1
}

#[derive(Debug, Clone, Deserialize)]
pub struct InternshipRecord {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    #[serde(default = "default_duration")]
    pub duration_months: i32,
    #[serde(default)]
    pub achievements: String,
    #[serde(default)]
    pub has_certificate: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementAnalysis {
    pub score: f64,
    pub keywords_found: Vec<&'static str>,
    pub word_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InternshipDetail {
    pub company: String,
    pub role: String,
    pub duration_months: i32,
    pub company_tier: CompanyMatch,
    pub role_score: f64,
    pub duration_score: f64,
    pub achievement_analysis: AchievementAnalysis,
    pub has_certificate: bool,
    pub individual_score: f64,
}

pub type InternshipsResult = ComponentResult<InternshipDetail>;

/// Best role-keyword weight × 10, capped at 100.
pub fn score_role(role: &str) -> f64 {
    match max_keyword_weight(role, ROLE_KEYWORDS) {
        Some(weight) => (weight as f64 * 10.0).min(100.0),
        None => UNRECOGNISED_ROLE_SCORE,
    }
}

pub fn score_duration(months: i32) -> f64 {
    bucket(months, DURATION_STEPS, 20.0)
}

/// Impact language plus a length bonus, over a base of 10.
pub fn analyze_achievements(text: &str) -> AchievementAnalysis {
    if text.is_empty() {
        return AchievementAnalysis {
            score: BLANK_ACHIEVEMENTS_SCORE,
            keywords_found: Vec::new(),
            word_count: 0,
        };
    }

    let analysis = analyze_keywords(text, ACHIEVEMENT_KEYWORDS, ACHIEVEMENT_SATURATION);
    let length_bonus = (analysis.word_count as f64 / 50.0 * 30.0).min(30.0);
    let score = (analysis.score * 0.7 + length_bonus + 10.0).min(100.0);

    AchievementAnalysis {
        score: round1(score),
        keywords_found: analysis.keywords(),
        word_count: analysis.word_count,
    }
}

/// Scores internship experience.
pub fn score_internships(records: &[InternshipRecord]) -> InternshipsResult {
    if records.is_empty() {
        return ComponentResult::empty(
            FACTORS,
            "Pursue internships to gain real-world experience and boost your career readiness.",
        );
    }

    let details: Vec<InternshipDetail> = records.iter().map(internship_detail).collect();

    let avg = |f: fn(&InternshipDetail) -> f64| {
        mean(&details.iter().map(f).collect::<Vec<_>>())
    };
    let avg_company = avg(|d| d.company_tier.tier_value * 10.0);
    let avg_role = avg(|d| d.role_score);
    let avg_duration = avg(|d| d.duration_score);
    let avg_achievement = avg(|d| d.achievement_analysis.score);
    let count = records.len();
    let quantity = bucket(count, QUANTITY_STEPS, 45.0);

    let mut suggestions = Vec::new();
    if count < 2 {
        suggestions.push("Aim for at least 2-3 internships before graduation.");
    }
    if avg_company < 60.0 {
        suggestions.push("Target internships at top-tier or well-known companies for higher impact.");
    }
    if avg_achievement < 50.0 {
        suggestions.push("Document your internship achievements with quantifiable metrics (e.g., 'improved performance by 30%').");
    }
    if avg_duration < 60.0 {
        suggestions.push("Longer internships (3-6 months) carry more weight than short ones.");
    }
    if records.iter().any(|r| !r.has_certificate) {
        suggestions.push("Obtain completion certificates for all internships.");
    }

    debug!(count, avg_company, avg_role, "internships scored");

    ComponentResult::weighted(
        FACTORS,
        &[avg_company, avg_role, avg_duration, avg_achievement, quantity],
        details,
        suggestions.into_iter().map(String::from).collect(),
    )
}

fn internship_detail(record: &InternshipRecord) -> InternshipDetail {
    let company_tier = identify_company(&record.company);
    let role_score = score_role(&record.role);
    let duration_score = score_duration(record.duration_months);
    let achievement_analysis = analyze_achievements(&record.achievements);

    let certificate = if record.has_certificate { CERTIFICATE_BONUS } else { 0.0 };
    let individual = company_tier.tier_value * 10.0 * 0.30
        + role_score * 0.25
        + duration_score * 0.15
        + achievement_analysis.score * 0.20
        + certificate;

    InternshipDetail {
        company: record.company.clone(),
        role: record.role.clone(),
        duration_months: record.duration_months,
        company_tier,
        role_score: round1(role_score),
        duration_score: round1(duration_score),
        achievement_analysis,
        has_certificate: record.has_certificate,
        individual_score: round1(individual),
    }
}
