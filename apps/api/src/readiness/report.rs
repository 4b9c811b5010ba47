use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::Catalogs;
use crate::readiness::{aggregate, rank_suggestions, AggregateResult, Component, ComponentScores, SuggestionReport};
use crate::scoring::certifications::{score_certifications, CertificationRecord, CertificationsResult};
use crate::scoring::internships::{score_internships, InternshipRecord, InternshipsResult};
use crate::scoring::projects::{score_projects, ProjectRecord, ProjectsResult};
use crate::scoring::resume::{self, score_resume, ResumeResult};
use crate::scoring::skills::{score_skills, SkillsResult};
use crate::scoring::ComponentResult;

/// Everything known about one candidate. Every field may be omitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CandidateProfile {
    pub skills: Vec<String>,
    pub certifications: Vec<CertificationRecord>,
    pub projects: Vec<ProjectRecord>,
    pub internships: Vec<InternshipRecord>,
    pub resume_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentResults {
    pub skills: SkillsResult,
    pub certifications: CertificationsResult,
    pub projects: ProjectsResult,
    pub internships: InternshipsResult,
    pub resume: ResumeResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadinessReport {
    #[serde(rename = "final")]
    pub final_result: AggregateResult,
    pub components: ComponentResults,
    pub suggestions: SuggestionReport,
}

/// Runs every scorer over `profile`, then aggregates and ranks.
pub fn evaluate(catalogs: &Catalogs, profile: &CandidateProfile) -> ReadinessReport {
    let resume = if profile.resume_text.is_empty() {
        ComponentResult::empty(resume::FACTORS, "Upload resume for scoring.")
    } else {
        score_resume(&profile.resume_text)
    };

    let components = ComponentResults {
        skills: score_skills(catalogs.skills(), &profile.skills),
        certifications: score_certifications(catalogs.certifications(), &profile.certifications),
        projects: score_projects(&profile.projects),
        internships: score_internships(&profile.internships),
        resume,
    };

    let scores = components.scores();
    let final_result = aggregate(&scores);
    let suggestions = rank_suggestions(&scores);

    info!(
        final_score = final_result.final_score,
        grade = final_result.overall_grade.grade,
        "readiness evaluated"
    );

    ReadinessReport {
        final_result,
        components,
        suggestions,
    }
}

impl ComponentResults {
    /// Component scores in the fixed report order.
    pub fn scores(&self) -> ComponentScores {
        ComponentScores::new()
            .with(Component::Skills, self.skills.score)
            .with(Component::Certifications, self.certifications.score)
            .with(Component::Projects, self.projects.score)
            .with(Component::Internships, self.internships.score)
            .with(Component::Resume, self.resume.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;

    #[test]
    fn test_empty_profile() {
        let report = evaluate(&fixtures::catalogs(), &CandidateProfile::default());
        assert_eq!(report.final_result.final_score, 0.0);
        assert_eq!(report.final_result.overall_grade.grade, "F");
        assert_eq!(
            report.components.resume.suggestions,
            vec!["Upload resume for scoring."]
        );
        // every component is in the low band
        assert_eq!(report.suggestions.priority_order.len(), 5);
        assert_eq!(report.suggestions.total_suggestions, 24);
    }

    #[test]
    fn test_profile_from_json_uses_defaults() {
        let profile: CandidateProfile = serde_json::from_str(
            r#"{
                "skills": ["Python", "AWS"],
                "certifications": [{"name": "CISSP"}],
                "internships": [{"company": "Google", "role": "Software Engineer Intern",
                                 "duration_months": 3, "achievements": "Built microservices",
                                 "has_certificate": true}]
            }"#,
        )
        .unwrap();
        assert_eq!(profile.certifications[0].year, 2024);
        assert!(profile.projects.is_empty());

        let report = evaluate(&fixtures::catalogs(), &profile);
        assert_eq!(report.components.internships.score, 73.6);
        let internships = &report.final_result.component_breakdown[&Component::Internships];
        assert_eq!(internships.raw_score, 73.6);
        assert_eq!(internships.weighted_score, 14.7);
        assert!(report.final_result.final_score > 0.0);
    }

    #[test]
    fn test_final_matches_component_scores() {
        let profile = CandidateProfile {
            skills: vec!["Rust".into(), "Docker".into()],
            resume_text: "Skills\nRust, Docker, Linux\n".into(),
            ..Default::default()
        };
        let report = evaluate(&fixtures::catalogs(), &profile);
        let direct = aggregate(&report.components.scores());
        assert_eq!(direct, report.final_result);
    }

    #[test]
    fn test_report_is_idempotent() {
        let profile = CandidateProfile {
            skills: vec!["Python".into()],
            resume_text: "Education\nB.Tech".into(),
            ..Default::default()
        };
        let catalogs = fixtures::catalogs();
        let a = serde_json::to_string(&evaluate(&catalogs, &profile)).unwrap();
        let b = serde_json::to_string(&evaluate(&catalogs, &profile)).unwrap();
        assert_eq!(a, b);
        assert!(a.contains("\"final\""));
    }
}
