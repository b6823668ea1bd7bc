//! Axum route handlers for the Analyzer and Interview Prep APIs.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{AppError, AppJson};
use crate::ingest::extract_text;
use crate::matching::insights::{
    build_action_plan, build_interview_prep, samples, skills_gap, ActionPlan, InterviewPrep,
    Samples, SkillsGap,
};
use crate::matching::{compute_match, extract_keywords, ExtractionResult, MatchReport};
use crate::state::AppState;

const JD_FIELD: &str = "jd_text";
const RESUME_FIELD: &str = "resume";
const MISSING_INPUT: &str = "Please provide both documents.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct KeywordsRequest {
    pub text: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AnalyzeTextRequest {
    pub jd_text: String,
    pub resume_text: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct InterviewRequest {
    pub jd_text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub report: MatchReport,
    pub band_label: &'static str,
    pub message: &'static str,
    pub skills_gap: SkillsGap,
    pub action_plan: ActionPlan,
    pub jd_keywords: ExtractionResult,
    pub resume_keywords: ExtractionResult,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/samples
pub async fn handle_samples() -> Json<Samples> {
    Json(samples())
}

/// POST /api/v1/keywords
///
/// Categorized skills found in a single text. Empty text yields empty categories.
pub async fn handle_keywords(
    State(state): State<AppState>,
    AppJson(request): AppJson<KeywordsRequest>,
) -> Result<Json<ExtractionResult>, AppError> {
    let keywords = run_blocking("keywords", move || {
        extract_keywords(&request.text, &state.matcher, &state.tagger)
    })
    .await?;
    Ok(Json(keywords))
}

/// POST /api/v1/analyze
///
/// Multipart form: `jd_text` (text) and `resume` (.pdf or .docx file).
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResponse>, AppError> {
    let mut jd_text: Option<String> = None;
    let mut resume: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(JD_FIELD) => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("invalid {JD_FIELD}: {e}")))?;
                jd_text = Some(text);
            }
            Some(RESUME_FIELD) => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("invalid {RESUME_FIELD}: {e}")))?;
                resume = Some((file_name, bytes));
            }
            _ => {}
        }
    }

    let jd_text = jd_text
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::Validation(MISSING_INPUT.to_string()))?;
    let (file_name, bytes) = resume
        .filter(|(_, bytes)| !bytes.is_empty())
        .ok_or_else(|| AppError::Validation(MISSING_INPUT.to_string()))?;

    info!("Analyzing '{}' ({} bytes)", file_name, bytes.len());
    let resume_text = tokio::task::spawn_blocking(move || extract_text(&file_name, &bytes))
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in extraction: {e}"))
        })??;

    let response =
        run_blocking("analysis", move || analyze(&state, &jd_text, &resume_text)).await?;
    Ok(Json(response))
}

/// POST /api/v1/analyze/text
///
/// Same analysis as `/analyze`, with the résumé supplied as plain text.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    AppJson(request): AppJson<AnalyzeTextRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    if request.jd_text.trim().is_empty() || request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(MISSING_INPUT.to_string()));
    }
    let response = run_blocking("analysis", move || {
        analyze(&state, &request.jd_text, &request.resume_text)
    })
    .await?;
    Ok(Json(response))
}

/// POST /api/v1/interview
///
/// Technical questions drawn from the JD's keywords plus standard behavioral questions.
pub async fn handle_interview(
    State(state): State<AppState>,
    AppJson(request): AppJson<InterviewRequest>,
) -> Result<Json<InterviewPrep>, AppError> {
    if request.jd_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Please paste a Job Description first.".to_string(),
        ));
    }
    let prep = run_blocking("interview prep", move || {
        build_interview_prep(&extract_keywords(
            &request.jd_text,
            &state.matcher,
            &state.tagger,
        ))
    })
    .await?;
    Ok(Json(prep))
}

/// Tagging and phrase scans are CPU-bound; keep them off the async workers.
async fn run_blocking<T, F>(label: &'static str, work: F) -> Result<T, AppError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in {label}: {e}")))
}

fn analyze(state: &AppState, jd_text: &str, resume_text: &str) -> AnalysisResponse {
    let jd_keywords = extract_keywords(jd_text, &state.matcher, &state.tagger);
    let resume_keywords = extract_keywords(resume_text, &state.matcher, &state.tagger);
    let report = compute_match(&jd_keywords, &resume_keywords);

    info!(
        "Match score {}% ({} of {} JD keywords)",
        report.score, report.total_matched, report.total_jd_keywords
    );

    AnalysisResponse {
        band_label: report.band.label(),
        message: report.band.message(),
        skills_gap: skills_gap(&report),
        action_plan: build_action_plan(&report),
        report,
        jd_keywords,
        resume_keywords,
    }
}
