use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::matching::{self, MatchKind, Resolution};
use crate::numeric::round2;

/// Certification quality tier. Declaration order is rank order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl CertTier {
    pub const LOWEST: CertTier = CertTier::Bronze;
    pub const COUNT: usize = 4;

    /// Gold and platinum count toward the premium bonus.
    pub fn is_premium(self) -> bool {
        matches!(self, CertTier::Gold | CertTier::Platinum)
    }
}

// Used when the catalog itself has no bronze entry (e.g. it failed to load).
const LOWEST_TIER_LABEL: &str = "Bronze - Entry Level / MOOC";
const LOWEST_TIER_VALUE: f64 = 3.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierRecord {
    pub label: String,
    /// Tier value, 0 – 10. Monotonic with tier rank.
    pub value: f64,
    pub certifications: Vec<String>,
}

/// Certification names grouped by tier, in file order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CertificationsCatalog {
    tiers: IndexMap<CertTier, TierRecord>,
}

/// A certification name resolved to a tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CertMatch {
    pub matched_name: String,
    pub tier: CertTier,
    pub tier_label: String,
    pub tier_value: f64,
    pub match_confidence: f64,
    pub matched_by: MatchKind,
}

impl CertificationsCatalog {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CertTier, &TierRecord)> {
        self.tiers.iter().map(|(tier, record)| (*tier, record))
    }

    /// Every (tier, name) pair in catalog order.
    pub fn names(&self) -> impl Iterator<Item = (CertTier, &str)> {
        self.iter().flat_map(|(tier, record)| {
            record.certifications.iter().map(move |name| (tier, name.as_str()))
        })
    }

    pub fn lookup_exact(&self, name: &str) -> Option<CertMatch> {
        let needle = name.trim().to_lowercase();
        self.names()
            .find(|(_, known)| known.to_lowercase() == needle)
            .map(|(tier, known)| self.make_match(tier, known, 1.0, MatchKind::Exact))
    }

    /// Fuzzy resolution; unknown names fall to the lowest tier with confidence 0.
    pub fn resolve(&self, name: &str) -> CertMatch {
        let candidates = self.names().map(|(tier, known)| (known, (tier, known)));
        match matching::resolve(name, candidates) {
            Resolution::Exact((tier, known)) => self.make_match(tier, known, 1.0, MatchKind::Exact),
            Resolution::Fuzzy {
                candidate: (tier, known),
                ratio,
            } => self.make_match(tier, known, round2(ratio), MatchKind::Fuzzy),
            Resolution::Unmatched => self.default_match(name),
        }
    }

    /// The lowest-tier sentinel for a name the catalog does not recognise.
    pub fn default_match(&self, name: &str) -> CertMatch {
        let (label, value) = match self.tiers.get(&CertTier::LOWEST) {
            Some(record) => (record.label.clone(), record.value),
            None => (LOWEST_TIER_LABEL.to_string(), LOWEST_TIER_VALUE),
        };
        CertMatch {
            matched_name: name.to_string(),
            tier: CertTier::LOWEST,
            tier_label: label,
            tier_value: value,
            match_confidence: 0.0,
            matched_by: MatchKind::Default,
        }
    }

    pub(crate) fn make_match(
        &self,
        tier: CertTier,
        name: &str,
        confidence: f64,
        matched_by: MatchKind,
    ) -> CertMatch {
        let (label, value) = self
            .tiers
            .get(&tier)
            .map(|r| (r.label.clone(), r.value))
            .unwrap_or_else(|| (LOWEST_TIER_LABEL.to_string(), LOWEST_TIER_VALUE));
        CertMatch {
            matched_name: name.to_string(),
            tier,
            tier_label: label,
            tier_value: value,
            match_confidence: confidence,
            matched_by,
        }
    }

    /// Catalog dump for UI population.
    pub fn listing(&self) -> IndexMap<CertTier, TierRecord> {
        self.tiers.clone()
    }
}
