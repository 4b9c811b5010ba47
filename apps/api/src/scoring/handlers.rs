use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use indexmap::IndexMap;
use serde::Deserialize;
use tracing::info;

use crate::catalog::certifications::TierRecord;
use crate::catalog::skills::SkillListing;
use crate::catalog::CertTier;
use crate::errors::AppError;
use crate::extract::pdf_text_blocking;
use crate::matching::certificate::{match_certificate_text, CertificateScan};
use crate::scoring::certifications::{score_certifications, CertificationRecord, CertificationsResult};
use crate::scoring::internships::{score_internships, InternshipRecord, InternshipsResult};
use crate::scoring::projects::{score_projects, ProjectRecord, ProjectsResult};
use crate::scoring::resume::{score_resume, unreadable_document, ResumeResult};
use crate::scoring::skills::{score_skills, SkillsResult};
use crate::state::AppState;

const UPLOAD_FIELD: &str = "file";

#[derive(Deserialize)]
pub struct SkillsRequest {
    pub skills: Vec<String>,
}

#[derive(Deserialize)]
pub struct CertificationsRequest {
    pub certifications: Vec<CertificationRecord>,
}

#[derive(Deserialize)]
pub struct ProjectsRequest {
    pub projects: Vec<ProjectRecord>,
}

#[derive(Deserialize)]
pub struct InternshipsRequest {
    pub internships: Vec<InternshipRecord>,
}

#[derive(Deserialize)]
pub struct ResumeTextRequest {
    pub resume_text: String,
}

struct Upload {
    filename: String,
    data: Bytes,
}

/// Pulls the `file` field out of a multipart body.
async fn read_upload(mut multipart: Multipart) -> Result<Upload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
        return Ok(Upload { filename, data });
    }
    Err(AppError::Validation(format!(
        "Missing multipart field '{UPLOAD_FIELD}'"
    )))
}

// ──────────────────────────────────────────────
// Catalogs
// ──────────────────────────────────────────────

/// GET /api/skills
pub async fn handle_list_skills(
    State(state): State<AppState>,
) -> Result<Json<IndexMap<String, SkillListing>>, AppError> {
    let catalog = state
        .catalogs
        .skills
        .loaded()
        .map_err(|reason| AppError::CatalogUnavailable(reason.to_string()))?;
    Ok(Json(catalog.listing()))
}

/// GET /api/certifications
pub async fn handle_list_certifications(
    State(state): State<AppState>,
) -> Result<Json<IndexMap<CertTier, TierRecord>>, AppError> {
    let catalog = state
        .catalogs
        .certifications
        .loaded()
        .map_err(|reason| AppError::CatalogUnavailable(reason.to_string()))?;
    Ok(Json(catalog.listing()))
}

// ──────────────────────────────────────────────
// Component scoring
// ──────────────────────────────────────────────

/// POST /api/score/skills
pub async fn handle_score_skills(
    State(state): State<AppState>,
    Json(req): Json<SkillsRequest>,
) -> Json<SkillsResult> {
    Json(score_skills(state.catalogs.skills(), &req.skills))
}

/// POST /api/score/certifications
pub async fn handle_score_certifications(
    State(state): State<AppState>,
    Json(req): Json<CertificationsRequest>,
) -> Json<CertificationsResult> {
    Json(score_certifications(
        state.catalogs.certifications(),
        &req.certifications,
    ))
}

/// POST /api/score/certifications/scan (multipart `file`)
pub async fn handle_scan_certificate(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<CertificateScan>, AppError> {
    let upload = read_upload(multipart).await?;
    info!(filename = %upload.filename, bytes = upload.data.len(), "certificate upload");

    // unreadable documents scan as empty text, which reports its own error
    let text = pdf_text_blocking(upload.data).await.unwrap_or_default();
    Ok(Json(match_certificate_text(
        state.catalogs.certifications(),
        &text,
        &upload.filename,
    )))
}

/// POST /api/score/projects
pub async fn handle_score_projects(Json(req): Json<ProjectsRequest>) -> Json<ProjectsResult> {
    Json(score_projects(&req.projects))
}

/// POST /api/score/internships
pub async fn handle_score_internships(
    Json(req): Json<InternshipsRequest>,
) -> Json<InternshipsResult> {
    Json(score_internships(&req.internships))
}

/// POST /api/score/resume (multipart `file`)
pub async fn handle_score_resume_file(multipart: Multipart) -> Result<Json<ResumeResult>, AppError> {
    let upload = read_upload(multipart).await?;
    info!(filename = %upload.filename, bytes = upload.data.len(), "resume upload");

    let result = match pdf_text_blocking(upload.data).await {
        Ok(text) if !text.is_empty() => score_resume(&text),
        _ => unreadable_document(),
    };
    Ok(Json(result))
}

/// POST /api/score/resume-text
pub async fn handle_score_resume_text(Json(req): Json<ResumeTextRequest>) -> Json<ResumeResult> {
    Json(score_resume(&req.resume_text))
}
