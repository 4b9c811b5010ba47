//! Résumé scoring over extracted plain text.
//!
//! Eight sections, each 0–100: contact details by regex, six narrative
//! sections by header presence and quality keywords, and overall formatting.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::analysis::word_count;
use crate::catalog::keywords::{section_table, QUALITY_KEYWORDS, SECTION_HEADERS};
use crate::numeric::round1;
use crate::scoring::{ComponentResult, Factors};

pub const CONTACT: &str = "Contact Information";
pub const FORMATTING: &str = "Formatting & Structure";

/// Display name and weight of every section, in report order.
pub const FACTORS: Factors = &[
    (CONTACT, 0.10),
    ("Professional Summary", 0.15),
    ("Work Experience", 0.25),
    ("Education", 0.15),
    ("Skills", 0.15),
    ("Certifications", 0.05),
    ("Projects", 0.10),
    (FORMATTING, 0.05),
];

/// Narrative section display names → keys into the header/keyword tables.
const NARRATIVE_SECTIONS: &[(&str, &str)] = &[
    ("Professional Summary", "summary"),
    ("Work Experience", "experience"),
    ("Education", "education"),
    ("Skills", "skills"),
    ("Certifications", "certifications"),
    ("Projects", "projects"),
];

pub const UNREADABLE_ERROR: &str = "Could not extract text from PDF.";

const WEAK_SECTION: f64 = 60.0;
const BULLET_MARKERS: &[char] = &['•', '-', '●', '■', '→', '*'];
const MAX_QUALITY_DETAILS: usize = 8;

const CONTACT_PATTERNS: &[(&str, &str, u32)] = &[
    ("email", r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}", 25),
    ("phone", r"[\+]?[(]?[0-9]{1,4}[)]?[-\s\./0-9]{7,15}", 25),
    ("linkedin", r"linkedin\.com/in/[\w\-]+", 20),
    ("github", r"github\.com/[\w\-]+", 20),
    ("portfolio", r"https?://[\w\-\.]+\.\w{2,}", 10),
];

static CONTACT_CHECKS: Lazy<Vec<(&'static str, Regex, u32)>> = Lazy::new(|| {
    CONTACT_PATTERNS
        .iter()
        .map(|&(name, pattern, points)| {
            let re = Regex::new(&format!("(?i){pattern}")).expect("valid contact regex");
            (name, re, points)
        })
        .collect()
});

static METRIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+[%+]?").expect("valid metric regex"));

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionAnalysis {
    Contact {
        found: Vec<&'static str>,
        missing: Vec<&'static str>,
        feedback: String,
    },
    Narrative {
        section_found: bool,
        quality_indicators: usize,
        quality_details: Vec<&'static str>,
        feedback: String,
    },
    Formatting {
        total_words: usize,
        sections_detected: usize,
        bullet_points: usize,
        metrics_found: usize,
        feedback: Vec<&'static str>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeSection {
    pub name: &'static str,
    pub score: f64,
    pub weight: u32,
    pub analysis: SectionAnalysis,
}

impl ResumeSection {
    /// Score as shown in suggestions. Keyword-rated sections keep their
    /// decimal ("20.0"); point-based ones print as whole numbers ("45").
    fn score_label(&self) -> String {
        match self.analysis {
            SectionAnalysis::Narrative {
                section_found: true,
                ..
            } => format!("{:?}", self.score),
            _ => format!("{}", self.score),
        }
    }
}

pub type ResumeResult = ComponentResult<ResumeSection>;

/// Result for a document whose text could not be extracted.
pub fn unreadable_document() -> ResumeResult {
    ComponentResult::failed(FACTORS, UNREADABLE_ERROR, "Upload a text-based PDF.")
}

/// Scores résumé text.
pub fn score_resume(text: &str) -> ResumeResult {
    if text.trim().is_empty() {
        return ComponentResult::empty(FACTORS, "Upload your resume.");
    }

    let lower = text.to_lowercase();

    let mut sections = Vec::with_capacity(FACTORS.len());
    sections.push(score_contact(text));
    for &(name, key) in NARRATIVE_SECTIONS {
        sections.push(score_narrative(&lower, name, key));
    }
    sections.push(score_formatting(text, &lower));

    let scores: Vec<f64> = sections.iter().map(|s| s.score).collect();
    let overall: f64 = FACTORS
        .iter()
        .zip(&scores)
        .map(|((_, w), s)| s * w)
        .sum();

    let mut weak: Vec<&ResumeSection> =
        sections.iter().filter(|s| s.score < WEAK_SECTION).collect();
    weak.sort_by(|a, b| a.score.total_cmp(&b.score));

    let verdict = if round1(overall) >= 80.0 {
        "Excellent resume! Fine-tune weak sections."
    } else if round1(overall) >= 60.0 {
        "Good foundation. Focus on weak areas."
    } else {
        "Resume needs improvement. Address each section."
    };
    let mut suggestions = vec![verdict.to_string()];
    suggestions.extend(
        weak.iter()
            .map(|s| format!("Improve '{}' section (scored {}/100).", s.name, s.score_label())),
    );

    debug!(overall, weak = weak.len(), "resume scored");

    ComponentResult::weighted(FACTORS, &scores, sections, suggestions)
}

fn weight_of(name: &str) -> u32 {
    FACTORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, w)| (w * 100.0).round() as u32)
        .unwrap_or(0)
}

fn score_contact(text: &str) -> ResumeSection {
    let mut points = 0;
    let mut found = Vec::new();
    let mut missing = Vec::new();
    for (name, pattern, value) in CONTACT_CHECKS.iter() {
        if pattern.is_match(text) {
            points += value;
            found.push(*name);
        } else {
            missing.push(*name);
        }
    }

    let mut feedback = format!("Found {}/5 contact elements.", found.len());
    if missing.is_empty() {
        feedback.push_str(" Complete!");
    } else {
        feedback.push_str(&format!(" Missing: {}", missing.join(", ")));
    }

    ResumeSection {
        name: CONTACT,
        score: points.min(100) as f64,
        weight: weight_of(CONTACT),
        analysis: SectionAnalysis::Contact {
            found,
            missing,
            feedback,
        },
    }
}

fn score_narrative(lower: &str, name: &'static str, key: &str) -> ResumeSection {
    let headers = section_table(SECTION_HEADERS, key);
    let keywords = section_table(QUALITY_KEYWORDS, key);
    let found_keywords: Vec<&'static str> = keywords
        .iter()
        .copied()
        .filter(|k| lower.contains(k))
        .collect();

    let has_header = lower
        .lines()
        .any(|line| headers.iter().any(|h| line.trim().contains(h)));
    let present = has_header || found_keywords.len() > 2;

    if !present {
        let title = headers.first().map(|h| title_case(h)).unwrap_or_else(|| title_case(key));
        return ResumeSection {
            name,
            score: 0.0,
            weight: weight_of(name),
            analysis: SectionAnalysis::Narrative {
                section_found: false,
                quality_indicators: 0,
                quality_details: Vec::new(),
                feedback: format!("Add a '{title}' section to your resume."),
            },
        };
    }

    let ratio = found_keywords.len() as f64 / keywords.len().max(1) as f64;
    let score = (ratio * 80.0 + 20.0).min(100.0);
    let verdict = if score >= 70.0 { " Strong!" } else { " Add more detail." };

    ResumeSection {
        name,
        score: round1(score),
        weight: weight_of(name),
        analysis: SectionAnalysis::Narrative {
            section_found: true,
            quality_indicators: found_keywords.len(),
            feedback: format!("Found {} quality indicators.{verdict}", found_keywords.len()),
            quality_details: found_keywords.into_iter().take(MAX_QUALITY_DETAILS).collect(),
        },
    }
}

fn score_formatting(text: &str, lower: &str) -> ResumeSection {
    let mut points = 0;
    let mut feedback = Vec::new();

    let words = word_count(text);
    if (300..=1200).contains(&words) {
        points += 30;
        feedback.push("✅ Good length");
    } else if words < 300 {
        points += 10;
        feedback.push("⚠️ Too short");
    } else {
        points += 20;
        feedback.push("⚠️ May be too long");
    }

    let sections = SECTION_HEADERS
        .iter()
        .filter(|(_, headers)| headers.iter().any(|h| lower.contains(h)))
        .count();
    if sections >= 5 {
        points += 30;
        feedback.push("✅ Good sections");
    } else if sections >= 3 {
        points += 20;
        feedback.push("⚠️ Add more sections");
    } else {
        points += 10;
        feedback.push("❌ Missing sections");
    }

    let bullets = text
        .lines()
        .filter_map(|line| line.trim().chars().next())
        .filter(|c| BULLET_MARKERS.contains(c))
        .count();
    if bullets >= 5 {
        points += 20;
        feedback.push("✅ Good bullet points");
    } else if bullets >= 2 {
        points += 10;
        feedback.push("⚠️ More bullets needed");
    } else {
        points += 5;
        feedback.push("❌ Add bullet points");
    }

    let metrics = METRIC.find_iter(text).count();
    if metrics >= 5 {
        points += 20;
        feedback.push("✅ Good metrics");
    } else if metrics >= 2 {
        points += 10;
        feedback.push("⚠️ Add metrics");
    } else {
        feedback.push("❌ Add quantifiable results");
    }

    ResumeSection {
        name: FORMATTING,
        score: points.min(100) as f64,
        weight: weight_of(FORMATTING),
        analysis: SectionAnalysis::Formatting {
            total_words: words,
            sections_detected: sections,
            bullet_points: bullets,
            metrics_found: metrics,
            feedback,
        },
    }
}

fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Jane Doe\n\
        jane.doe@example.com | +1 415-555-0134 | linkedin.com/in/janedoe | github.com/janedoe\n\
        \n\
        Professional Summary\n\
        Passionate and skilled engineer, proficient in distributed systems.\n\
        \n\
        Work Experience\n\
        - Developed a billing service handling 2M requests per day\n\
        - Led migration that reduced latency by 40%\n\
        - Automated deployments, improved uptime to 99.9%\n\
        \n\
        Education\n\
        B.Tech, Example Institute of Technology, CGPA 9.1\n\
        \n\
        Skills\n\
        Python, Java, AWS, Docker, Kubernetes, SQL, Git, Linux\n\
        \n\
        Projects\n\
        - Built a web dashboard deployed on AWS\n\
        - Created a mobile app with 10+ users\n";

    fn section<'a>(r: &'a ResumeResult, name: &str) -> &'a ResumeSection {
        r.details.iter().find(|s| s.name == name).unwrap()
    }

    #[test]
    fn test_blank_text() {
        let r = score_resume("   \n\t");
        assert_eq!(r.score, 0.0);
        assert_eq!(r.suggestions, vec!["Upload your resume."]);
        assert!(r.details.is_empty());
    }

    #[test]
    fn test_unreadable_document() {
        let r = unreadable_document();
        assert_eq!(r.score, 0.0);
        assert_eq!(r.error.as_deref(), Some(UNREADABLE_ERROR));
        assert_eq!(r.suggestions, vec!["Upload a text-based PDF."]);
    }

    #[test]
    fn test_contact_detection() {
        let r = score_resume(SAMPLE);
        let contact = section(&r, CONTACT);
        // email, phone, linkedin, github; no portfolio url
        assert_eq!(contact.score, 90.0);
        match &contact.analysis {
            SectionAnalysis::Contact { missing, feedback, .. } => {
                assert_eq!(missing, &vec!["portfolio"]);
                assert_eq!(feedback, "Found 4/5 contact elements. Missing: portfolio");
            }
            other => panic!("unexpected analysis {other:?}"),
        }
    }

    #[test]
    fn test_missing_certifications_section() {
        let r = score_resume(SAMPLE);
        let certs = section(&r, "Certifications");
        assert_eq!(certs.score, 0.0);
        match &certs.analysis {
            SectionAnalysis::Narrative { section_found, feedback, .. } => {
                assert!(!section_found);
                assert_eq!(feedback, "Add a 'Certifications' section to your resume.");
            }
            other => panic!("unexpected analysis {other:?}"),
        }
        assert!(r
            .suggestions
            .contains(&"Improve 'Certifications' section (scored 0/100).".to_string()));
    }

    #[test]
    fn test_sections_report_in_fixed_order_with_weights() {
        let r = score_resume(SAMPLE);
        let names: Vec<&str> = r.details.iter().map(|s| s.name).collect();
        let expected: Vec<&str> = FACTORS.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, expected);
        let total: u32 = r.details.iter().map(|s| s.weight).sum();
        assert_eq!(total, 100);
        assert_eq!(section(&r, "Work Experience").weight, 25);
    }

    #[test]
    fn test_weak_sections_follow_verdict_in_ascending_order() {
        let r = score_resume(SAMPLE);
        assert_eq!(r.score, 60.4);
        assert_eq!(
            r.suggestions,
            vec![
                "Good foundation. Focus on weak areas.",
                "Improve 'Certifications' section (scored 0/100).",
                "Improve 'Education' section (scored 46.7/100).",
                "Improve 'Professional Summary' section (scored 54.3/100).",
            ]
        );
    }

    #[test]
    fn test_found_but_empty_section_keeps_decimal_in_suggestion() {
        let r = score_resume("Jane Doe\nCertifications\nNone yet\n");
        assert_eq!(section(&r, "Certifications").score, 20.0);
        assert_eq!(r.score, 2.2);
        assert_eq!(
            r.suggestions,
            vec![
                "Resume needs improvement. Address each section.",
                "Improve 'Contact Information' section (scored 0/100).",
                "Improve 'Professional Summary' section (scored 0/100).",
                "Improve 'Work Experience' section (scored 0/100).",
                "Improve 'Education' section (scored 0/100).",
                "Improve 'Skills' section (scored 0/100).",
                "Improve 'Projects' section (scored 0/100).",
                "Improve 'Certifications' section (scored 20.0/100).",
                "Improve 'Formatting & Structure' section (scored 25/100).",
            ]
        );
    }

    #[test]
    fn test_formatting_counts_bullets_and_metrics() {
        let r = score_resume(SAMPLE);
        match &section(&r, FORMATTING).analysis {
            SectionAnalysis::Formatting {
                bullet_points,
                metrics_found,
                sections_detected,
                ..
            } => {
                assert_eq!(*bullet_points, 5);
                assert!(*metrics_found >= 5);
                assert!(*sections_detected >= 5);
            }
            other => panic!("unexpected analysis {other:?}"),
        }
        // too short 10 + sections 30 + bullets 20 + metrics 20
        assert_eq!(section(&r, FORMATTING).score, 80.0);
    }

    #[test]
    fn test_keywords_alone_can_reveal_a_section() {
        let text = "I hold a bachelor degree from the state university with a GPA of 3.9";
        let r = score_resume(text);
        let edu = section(&r, "Education");
        assert!(edu.score > 0.0);
    }

    #[test]
    fn test_score_is_weighted_mean() {
        let r = score_resume(SAMPLE);
        let expected: f64 = r
            .details
            .iter()
            .map(|s| s.score * s.weight as f64 / 100.0)
            .sum();
        assert!((r.score - expected).abs() < 0.051, "{} vs {}", r.score, expected);
        assert!((0.0..=100.0).contains(&r.score));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("summary"), "Summary");
        assert_eq!(title_case("tech stack"), "Tech Stack");
    }
}
