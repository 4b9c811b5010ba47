//! Certificate-document matching: identifies which certification an uploaded
//! document is for, from its extracted text.
//!
//! Every catalog name is scored against the document by the larger of:
//! - the fraction of its significant words (> 2 chars) present in the text
//! - 1.5 × similarity between the name and the first 500 chars of the text
//!
//! The uncapped score is compared to the 0.3 threshold; the displayed
//! confidence is capped at 1.0. Below threshold, the first substantial line
//! (or the filename) goes through the regular catalog matcher instead.

use serde::Serialize;
use tracing::debug;

use crate::catalog::{CertMatch, CertificationsCatalog};
use crate::matching::{similarity_ratio, MatchKind};
use crate::numeric::round2;

const IDENTIFIED_THRESHOLD: f64 = 0.3;
const SIMILARITY_BOOST: f64 = 1.5;
const HEAD_CHARS: usize = 500;
const PREVIEW_CHARS: usize = 300;
const MIN_WORD_CHARS: usize = 2;
const MIN_LINE_CHARS: usize = 5;

pub const NO_TEXT_ERROR: &str = "Could not extract text from file. Ensure it is a text-based PDF.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CertificateScan {
    pub identified: bool,
    pub cert_name: String,
    #[serde(rename = "match")]
    pub matched: Option<CertMatch>,
    pub extracted_text_preview: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub auto_detected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CertificateScan {
    /// Result for a document that yielded no text at all.
    pub fn unreadable() -> Self {
        CertificateScan {
            identified: false,
            cert_name: String::new(),
            matched: None,
            extracted_text_preview: String::new(),
            auto_detected: false,
            error: Some(NO_TEXT_ERROR.to_string()),
        }
    }
}

/// Identifies the certification described by `text`.
///
/// `filename` is the last-resort label when the text has no usable line.
pub fn match_certificate_text(
    catalog: &CertificationsCatalog,
    text: &str,
    filename: &str,
) -> CertificateScan {
    if text.trim().is_empty() {
        return CertificateScan::unreadable();
    }

    let text_lower = text.to_lowercase();
    let head: String = text_lower.chars().take(HEAD_CHARS).collect();
    let preview: String = text.chars().take(PREVIEW_CHARS).collect::<String>().trim().to_string();

    let mut best: Option<(CertMatch, f64)> = None;
    for (tier, name) in catalog.names() {
        let score = document_score(name, &text_lower, &head);
        let best_score = best.as_ref().map(|(_, s)| *s).unwrap_or(0.0);
        if score > best_score {
            let confidence = round2(score.min(1.0));
            best = Some((
                catalog.make_match(tier, name, confidence, MatchKind::Document),
                score,
            ));
        }
    }

    if let Some((matched, score)) = best {
        if score >= IDENTIFIED_THRESHOLD {
            debug!(cert = %matched.matched_name, score, "certificate identified from document");
            return CertificateScan {
                identified: true,
                cert_name: matched.matched_name.clone(),
                matched: Some(matched),
                extracted_text_preview: preview,
                auto_detected: false,
                error: None,
            };
        }
    }

    let likely_name = text
        .lines()
        .map(str::trim)
        .find(|line| line.chars().count() > MIN_LINE_CHARS)
        .unwrap_or(filename)
        .to_string();
    debug!(label = %likely_name, "no catalog name in document, falling back to first line");

    let matched = catalog.resolve(&likely_name);
    CertificateScan {
        identified: true,
        cert_name: likely_name,
        matched: Some(matched),
        extracted_text_preview: preview,
        auto_detected: true,
        error: None,
    }
}

/// max(word fraction, 1.5 × head similarity) for one catalog name. Uncapped.
fn document_score(name: &str, text_lower: &str, head: &str) -> f64 {
    let name_lower = name.to_lowercase();
    let words: Vec<&str> = name_lower
        .split_whitespace()
        .filter(|w| w.chars().count() > MIN_WORD_CHARS)
        .collect();
    let hits = words.iter().filter(|w| text_lower.contains(**w)).count();
    let word_fraction = hits as f64 / words.len().max(1) as f64;

    let head_similarity = similarity_ratio(&name_lower, head);
    word_fraction.max(head_similarity * SIMILARITY_BOOST)
}
