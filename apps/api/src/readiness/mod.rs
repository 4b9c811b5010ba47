//! Readiness: combines the five component scores into a final grade,
//! ranks improvement suggestions, and runs a whole candidate profile.

pub mod aggregate;
pub mod handlers;
pub mod report;
pub mod suggestions;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use aggregate::{aggregate, AggregateResult, Grade};
pub use report::{evaluate, CandidateProfile, ReadinessReport};
pub use suggestions::{rank_suggestions, SuggestionReport};

/// The five scored inputs, in their fixed report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Skills,
    Certifications,
    Projects,
    Internships,
    Resume,
}

impl Component {
    pub const ALL: [Component; 5] = [
        Component::Skills,
        Component::Certifications,
        Component::Projects,
        Component::Internships,
        Component::Resume,
    ];

    /// Percentage weight in the final score. All five sum to 100.
    pub fn weight(self) -> u32 {
        match self {
            Component::Skills => 30,
            Component::Certifications => 15,
            Component::Projects => 25,
            Component::Internships => 20,
            Component::Resume => 10,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Component::Skills => "skills",
            Component::Certifications => "certifications",
            Component::Projects => "projects",
            Component::Internships => "internships",
            Component::Resume => "resume",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

/// Component → score in caller order. Unknown labels are dropped on the way in.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComponentScores(IndexMap<Component, f64>);

impl ComponentScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, component: Component, score: f64) -> Self {
        self.0.insert(component, score);
        self
    }

    /// Score for `component`; absent counts as 0.
    pub fn get(&self, component: Component) -> f64 {
        self.0.get(&component).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Component, f64)> + '_ {
        self.0.iter().map(|(c, s)| (*c, *s))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for ComponentScores {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = IndexMap::<String, f64>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(label, score)| Component::from_key(&label).map(|c| (c, score)))
            .collect())
    }
}

impl FromIterator<(Component, f64)> for ComponentScores {
    fn from_iter<I: IntoIterator<Item = (Component, f64)>>(iter: I) -> Self {
        ComponentScores(iter.into_iter().collect())
    }
}
