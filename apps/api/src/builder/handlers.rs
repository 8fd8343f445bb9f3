//! Axum route handlers for the resume builder session.

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::analysis::{analyze, AnalysisReport};
use crate::builder::export::{resolve_export_path, save_json, save_text, ExportFormat};
use crate::builder::forms::{EducationForm, ExperienceForm, PersonalInfoForm, SkillForm};
use crate::errors::AppError;
use crate::models::{PersonalInfo, Resume, Section};
use crate::render::{format_resume, ResumeDocument};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionAddedResponse {
    /// Zero-based position in the resume's section list.
    pub index: usize,
    #[serde(rename = "type")]
    pub section_type: &'static str,
    pub title: &'static str,
    pub rendered: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    #[serde(flatten)]
    pub report: AnalysisReport,
    pub text: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExportRequest {
    pub filename: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    pub format: ExportFormat,
    pub path: String,
    pub bytes_written: usize,
    pub saved_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/resume
///
/// Returns the structured resume in the same shape as the JSON export.
pub async fn handle_get_resume(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let resume = state.resume.read().await;
    Ok(Json(serde_json::to_value(ResumeDocument::from(&*resume))?))
}

/// DELETE /api/v1/resume
///
/// Discards the current resume and starts over with an empty one.
pub async fn handle_clear(State(state): State<AppState>) -> StatusCode {
    *state.resume.write().await = Resume::new();
    info!("Resume cleared");
    StatusCode::NO_CONTENT
}

/// PUT /api/v1/resume/personal-info
pub async fn handle_set_personal_info(
    State(state): State<AppState>,
    Json(form): Json<PersonalInfoForm>,
) -> Result<Json<PersonalInfo>, AppError> {
    let info = form.validate()?;
    state.resume.write().await.set_personal_info(info.clone());
    info!("Personal info set for {}", info.name);
    Ok(Json(info))
}

/// POST /api/v1/resume/education
pub async fn handle_add_education(
    State(state): State<AppState>,
    Json(form): Json<EducationForm>,
) -> Result<(StatusCode, Json<SectionAddedResponse>), AppError> {
    let section = form.validate()?;
    Ok(add_section(&state, section).await)
}

/// POST /api/v1/resume/experience
pub async fn handle_add_experience(
    State(state): State<AppState>,
    Json(form): Json<ExperienceForm>,
) -> Result<(StatusCode, Json<SectionAddedResponse>), AppError> {
    let section = form.validate()?;
    Ok(add_section(&state, section).await)
}

/// POST /api/v1/resume/skills
pub async fn handle_add_skill(
    State(state): State<AppState>,
    Json(form): Json<SkillForm>,
) -> Result<(StatusCode, Json<SectionAddedResponse>), AppError> {
    let section = form.validate()?;
    Ok(add_section(&state, section).await)
}

/// GET /api/v1/resume/preview
///
/// The boxed text resume, byte-identical to a TXT export.
pub async fn handle_preview(State(state): State<AppState>) -> String {
    format_resume(&*state.resume.read().await)
}

/// GET /api/v1/resume/analysis
///
/// Runs the checklist. Personal info must be set first.
pub async fn handle_analyze(
    State(state): State<AppState>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let resume = state.resume.read().await;
    if resume.personal_info().is_none() {
        return Err(AppError::Validation(
            "Please fill all personal information fields before analyzing the resume.".to_string(),
        ));
    }

    let report = analyze(&resume);
    info!("Resume analyzed: score {}/{}", report.score, report.total);
    let text = report.render();
    Ok(Json(AnalysisResponse { report, text }))
}

/// POST /api/v1/resume/export/text
///
/// The body is optional; without one the default file name is used.
pub async fn handle_export_text(
    State(state): State<AppState>,
    request: Option<Json<ExportRequest>>,
) -> Result<Json<ExportResponse>, AppError> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    export(&state, request, ExportFormat::Text).await
}

/// POST /api/v1/resume/export/json
pub async fn handle_export_json(
    State(state): State<AppState>,
    request: Option<Json<ExportRequest>>,
) -> Result<Json<ExportResponse>, AppError> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    export(&state, request, ExportFormat::Json).await
}

async fn add_section(state: &AppState, section: Section) -> (StatusCode, Json<SectionAddedResponse>) {
    let response = SectionAddedResponse {
        index: 0,
        section_type: section.type_name(),
        title: section.title(),
        rendered: section.to_string(),
    };

    let mut resume = state.resume.write().await;
    resume.add_section(section);
    let index = resume.sections().len() - 1;
    info!("Added {} section #{index}", response.section_type);

    (StatusCode::CREATED, Json(SectionAddedResponse { index, ..response }))
}

async fn export(
    state: &AppState,
    request: ExportRequest,
    format: ExportFormat,
) -> Result<Json<ExportResponse>, AppError> {
    let path = resolve_export_path(&state.config.export_dir, request.filename.as_deref(), format)?;
    let resume = state.resume.read().await.clone();

    let write_path = path.clone();
    let bytes_written = tokio::task::spawn_blocking(move || match format {
        ExportFormat::Text => save_text(&resume, &write_path),
        ExportFormat::Json => save_json(&resume, &write_path),
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))??;

    Ok(Json(ExportResponse {
        format,
        path: path.display().to_string(),
        bytes_written,
        saved_at: Utc::now(),
    }))
}
