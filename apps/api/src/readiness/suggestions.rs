//! Suggestion Ranker: picks advice by how well each component scored and
//! orders it globally by impact, weakest components first.

use serde::Serialize;

use crate::readiness::{Component, ComponentScores};

const TOP_ACTIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

/// How well a component is doing, which selects the advice given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub fn for_score(score: f64) -> Level {
        if score >= 75.0 {
            Level::High
        } else if score >= 45.0 {
            Level::Medium
        } else {
            Level::Low
        }
    }
}

type Bank = &'static [(&'static str, Impact)];

fn bank(component: Component, level: Level) -> Bank {
    use Impact::*;
    match (component, level) {
        (Component::Skills, Level::High) => &[
            ("Excellent skill portfolio! Consider specializing deeper in one domain.", Low),
            ("Explore emerging technologies like Generative AI, Edge Computing, or Quantum Computing.", Medium),
        ],
        (Component::Skills, Level::Medium) => &[
            ("Learn at least one cloud platform (AWS/Azure/GCP) — cloud skills are essential.", High),
            ("Add DevOps tools (Docker, Kubernetes, CI/CD) to your skillset.", High),
            ("Diversify across categories: frontend + backend + cloud = full-stack readiness.", High),
            ("Focus on Python and JavaScript — the two most in-demand languages.", Medium),
        ],
        (Component::Skills, Level::Low) => &[
            ("Start with foundational programming languages: Python, JavaScript, or Java.", High),
            ("Learn web development basics: HTML, CSS, React or Angular.", High),
            ("Take structured courses on platforms like Coursera, Udemy, or freeCodeCamp.", High),
            ("Build a learning roadmap — aim for 10+ skills across 3+ categories.", High),
            ("Join coding communities (GitHub, Stack Overflow, Dev.to) to accelerate learning.", Medium),
        ],
        (Component::Certifications, Level::High) => &[
            ("Great certifications! Aim for a Platinum-tier cert (AWS Pro, CISSP, CKA).", Medium),
            ("Keep certifications current — renew before they expire.", Low),
        ],
        (Component::Certifications, Level::Medium) => &[
            ("Pursue at least one Gold-tier certification (AWS Associate, Azure, CompTIA Security+).", High),
            ("Prioritize vendor-neutral certs that are widely recognized across industries.", Medium),
            ("Get 3-5 certifications across different domains for maximum impact.", High),
        ],
        (Component::Certifications, Level::Low) => &[
            ("Start with AWS Cloud Practitioner or Azure Fundamentals — affordable and highly valued.", High),
            ("Complete Coursera/edX specializations from top universities for credibility.", High),
            ("Free certifications from Google, IBM, or Microsoft are great starting points.", High),
            ("Certifications demonstrate commitment — even entry-level ones matter.", Medium),
        ],
        (Component::Projects, Level::High) => &[
            ("Strong project portfolio! Contribute to open-source projects for extra impact.", Medium),
            ("Write detailed READMEs and documentation for each project.", Medium),
            ("Deploy projects live (Vercel, AWS, Heroku) so recruiters can see them in action.", Medium),
        ],
        (Component::Projects, Level::Medium) => &[
            ("Build 2-3 more projects using advanced concepts (microservices, ML, real-time).", High),
            ("Put ALL projects on GitHub with clean code, READMEs, and proper commit history.", High),
            ("Use modern tech stacks in projects: React + Node.js + Docker + AWS.", High),
            ("Include at least one full-stack project with frontend, backend, and database.", High),
        ],
        (Component::Projects, Level::Low) => &[
            ("Start building projects NOW — they're the #1 way to demonstrate capability.", High),
            ("Begin with 3 projects: a web app, an API, and a data/ML project.", High),
            ("Clone and improve popular open-source projects to learn best practices.", High),
            ("Create a GitHub profile README showcasing your best work.", Medium),
            ("Build a personal portfolio website — it IS a project too!", High),
        ],
        (Component::Internships, Level::High) => &[
            ("Excellent internship experience! Document achievements quantifiably on your resume.", Medium),
            ("Seek a return offer or full-time conversion from your best internship.", High),
        ],
        (Component::Internships, Level::Medium) => &[
            ("Apply to internships at top-tier companies (FAANG, top unicorns).", High),
            ("Aim for 3-6 month internships — they carry significantly more weight.", High),
            ("Document internship achievements with metrics: 'Reduced load time by 40%'.", High),
            ("Get LinkedIn recommendations from internship supervisors.", Medium),
        ],
        (Component::Internships, Level::Low) => &[
            ("Apply widely to internships — even small company internships build experience.", High),
            ("Explore virtual/remote internships — many top companies offer them.", High),
            ("Start with contributing to open source if internships are hard to find.", Medium),
            ("Participate in programs like Google Summer of Code, MLH Fellowship, or LFX.", High),
            ("Volunteer for tech projects at university clubs or local organizations.", Medium),
        ],
        (Component::Resume, Level::High) => &[
            ("Well-structured resume! Keep it updated with latest achievements.", Low),
            ("Tailor your resume for each job application using relevant keywords.", Medium),
        ],
        (Component::Resume, Level::Medium) => &[
            ("Add more action verbs: 'Developed', 'Architected', 'Optimized', 'Led'.", High),
            ("Include quantifiable results: numbers, percentages, and metrics.", High),
            ("Ensure all sections are present: Summary, Experience, Education, Skills, Projects.", High),
            ("Add LinkedIn and GitHub URLs to your contact section.", Medium),
        ],
        (Component::Resume, Level::Low) => &[
            ("Create a professional resume using a clean, ATS-friendly template.", High),
            ("Structure with clear sections: Contact → Summary → Experience → Education → Skills.", High),
            ("Use bullet points with action verbs for each experience entry.", High),
            ("Keep it to 1 page (students) or 2 pages (experienced) — no more.", High),
            ("Use a PDF format to preserve formatting across systems.", Medium),
        ],
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionItem {
    pub component: Component,
    pub score: f64,
    pub level: Level,
    pub text: &'static str,
    pub impact: Impact,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriorityEntry {
    pub component: Component,
    pub score: f64,
    pub level: Level,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionReport {
    pub all_suggestions: Vec<SuggestionItem>,
    pub top_priority_actions: Vec<SuggestionItem>,
    pub priority_order: Vec<PriorityEntry>,
    pub total_suggestions: usize,
}

/// Selects and ranks advice for every component present in `scores`.
pub fn rank_suggestions(scores: &ComponentScores) -> SuggestionReport {
    let mut visited: Vec<(Component, f64)> = scores.iter().collect();
    visited.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut all = Vec::new();
    let mut priority_order = Vec::with_capacity(visited.len());
    for (component, score) in visited {
        let level = Level::for_score(score);
        all.extend(bank(component, level).iter().map(|&(text, impact)| SuggestionItem {
            component,
            score,
            level,
            text,
            impact,
        }));
        priority_order.push(PriorityEntry {
            component,
            score,
            level,
        });
    }

    all.sort_by(|a, b| a.impact.cmp(&b.impact).then(a.score.total_cmp(&b.score)));

    let top_priority_actions = all
        .iter()
        .filter(|s| s.impact == Impact::High)
        .take(TOP_ACTIONS)
        .cloned()
        .collect();

    SuggestionReport {
        total_suggestions: all.len(),
        all_suggestions: all,
        top_priority_actions,
        priority_order,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_thresholds() {
        assert_eq!(Level::for_score(75.0), Level::High);
        assert_eq!(Level::for_score(74.9), Level::Medium);
        assert_eq!(Level::for_score(45.0), Level::Medium);
        assert_eq!(Level::for_score(44.9), Level::Low);
    }

    #[test]
    fn test_every_bank_entry_is_non_empty() {
        for c in Component::ALL {
            for level in [Level::Low, Level::Medium, Level::High] {
                assert!(!bank(c, level).is_empty(), "{c:?} {level:?}");
            }
        }
    }

    #[test]
    fn test_visits_weakest_first() {
        let scores = ComponentScores::new()
            .with(Component::Skills, 80.0)
            .with(Component::Resume, 30.0)
            .with(Component::Projects, 50.0);
        let r = rank_suggestions(&scores);
        let order: Vec<Component> = r.priority_order.iter().map(|p| p.component).collect();
        assert_eq!(
            order,
            vec![Component::Resume, Component::Projects, Component::Skills]
        );
        assert_eq!(r.priority_order[0].level, Level::Low);
        // 5 resume/low + 4 projects/medium + 2 skills/high
        assert_eq!(r.total_suggestions, 11);
    }

    #[test]
    fn test_sorted_by_impact_then_score() {
        let scores = ComponentScores::new()
            .with(Component::Skills, 80.0)
            .with(Component::Resume, 30.0)
            .with(Component::Projects, 50.0);
        let r = rank_suggestions(&scores);
        for pair in r.all_suggestions.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.impact < b.impact || (a.impact == b.impact && a.score <= b.score));
        }
        assert_eq!(r.top_priority_actions.len(), 5);
        assert!(r.top_priority_actions.iter().all(|s| s.impact == Impact::High));
        assert_eq!(r.top_priority_actions[0].component, Component::Resume);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let scores = ComponentScores::new()
            .with(Component::Internships, 40.0)
            .with(Component::Certifications, 40.0);
        let r = rank_suggestions(&scores);
        assert_eq!(r.priority_order[0].component, Component::Internships);
        assert_eq!(r.all_suggestions[0].component, Component::Internships);
    }

    #[test]
    fn test_empty_scores_give_empty_report() {
        let r = rank_suggestions(&ComponentScores::new());
        assert_eq!(r.total_suggestions, 0);
        assert!(r.top_priority_actions.is_empty());
    }

    #[test]
    fn test_impact_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Impact::High).unwrap(), "\"high\"");
        assert_eq!(serde_json::to_string(&Level::Medium).unwrap(), "\"medium\"");
    }
}
