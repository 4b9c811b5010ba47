use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{CertMatch, CertTier, CertificationsCatalog};
use crate::numeric::{bucket, mean};
use crate::scoring::{ComponentResult, Factors};

pub const FACTORS: Factors = &[
    ("tier_quality", 0.50),
    ("quantity_bonus", 0.20),
    ("tier_diversity", 0.15),
    ("premium_bonus", 0.15),
];

const QUANTITY_STEPS: &[(usize, f64)] = &[(8, 100.0), (5, 85.0), (3, 70.0), (2, 55.0)];
const PREMIUM_STEPS: &[(usize, f64)] = &[(3, 100.0), (2, 80.0), (1, 55.0)];

fn default_year() -> i32 {
    2024
}

/// One certification as entered by the candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct CertificationRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default = "default_year")]
    pub year: i32,
}

impl CertificationRecord {
    pub fn named(name: &str) -> Self {
        CertificationRecord {
            name: name.to_string(),
            issuer: String::new(),
            year: default_year(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CertificationDetail {
    pub input_name: String,
    pub issuer: String,
    pub year: i32,
    #[serde(flatten)]
    pub matched: CertMatch,
}

pub type CertificationsResult = ComponentResult<CertificationDetail>;

/// Scores certifications by the tiers they resolve to.
pub fn score_certifications(
    catalog: &CertificationsCatalog,
    records: &[CertificationRecord],
) -> CertificationsResult {
    if records.is_empty() {
        return ComponentResult::empty(
            FACTORS,
            "Obtain industry-recognized certifications to boost your score.",
        );
    }

    let details: Vec<CertificationDetail> = records
        .iter()
        .filter(|r| !r.name.trim().is_empty())
        .map(|r| CertificationDetail {
            input_name: r.name.clone(),
            issuer: r.issuer.clone(),
            year: r.year,
            matched: catalog.resolve(&r.name),
        })
        .collect();

    if details.is_empty() {
        return ComponentResult::empty(FACTORS, "Add valid certification names to get scored.");
    }

    let tier_values: Vec<f64> = details.iter().map(|d| d.matched.tier_value).collect();
    let tiers: BTreeSet<CertTier> = details.iter().map(|d| d.matched.tier).collect();
    let premium = details.iter().filter(|d| d.matched.tier.is_premium()).count();
    let count = details.len();

    let avg_tier = mean(&tier_values);
    let tier_quality = (avg_tier / 10.0 * 100.0).min(100.0);
    let quantity_bonus = bucket(count, QUANTITY_STEPS, 35.0);
    let tier_diversity = (tiers.len() as f64 / CertTier::COUNT as f64 * 100.0).min(100.0);
    let premium_bonus = bucket(premium, PREMIUM_STEPS, 15.0);

    let mut suggestions = Vec::new();
    if premium == 0 {
        suggestions.push("Pursue a Gold or Platinum-tier certification like AWS Solutions Architect or Google Cloud Professional.");
    }
    if count < 3 {
        suggestions.push("Aim for at least 3-5 certifications to demonstrate commitment to learning.");
    }
    if !tiers.contains(&CertTier::Platinum) {
        suggestions.push("A Platinum-tier certification (e.g., AWS Pro, CISSP, CKA) would significantly boost your profile.");
    }
    if avg_tier < 6.0 {
        suggestions.push("Focus on higher-tier certifications rather than accumulating entry-level ones.");
    }
    if tiers.len() < 2 {
        suggestions.push("Diversify your certifications across different tiers and domains.");
    }

    debug!(count, premium, tiers = tiers.len(), "certifications scored");

    ComponentResult::weighted(
        FACTORS,
        &[tier_quality, quantity_bonus, tier_diversity, premium_bonus],
        details,
        suggestions.into_iter().map(String::from).collect(),
    )
}
