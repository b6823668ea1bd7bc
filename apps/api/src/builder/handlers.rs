//! Axum route handlers for the résumé builder.

use axum::{
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::IntoResponse,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;

use crate::builder::{render_document, AccentColor, LayoutVariant, RenderOptions, ResumeDocument};
use crate::errors::{AppError, AppJson};

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub resume: ResumeDocument,
    /// `#rrggbb`; defaults to the builder's indigo accent.
    #[serde(default)]
    pub accent_color: Option<String>,
    /// `modern` (default) or `classic`.
    #[serde(default)]
    pub layout: Option<String>,
}

/// POST /api/v1/resumes/render
///
/// Renders the form fields to a PDF and returns it as a download.
pub async fn handle_render(
    AppJson(request): AppJson<RenderRequest>,
) -> Result<impl IntoResponse, AppError> {
    let accent = match request.accent_color.as_deref() {
        Some(hex) => AccentColor::from_hex(hex)?,
        None => AccentColor::default(),
    };
    let layout = match request.layout.as_deref() {
        Some(value) => LayoutVariant::parse(value)?,
        None => LayoutVariant::default(),
    };
    let options = RenderOptions { accent, layout };
    let resume = request.resume;
    resume.validate()?;

    let file_name = resume.download_file_name();
    let pdf = tokio::task::spawn_blocking(move || render_document(&resume, &options))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in render: {e}")))??;

    info!("Rendered resume PDF '{}' ({} bytes)", file_name, pdf.len());

    Ok((
        [
            (CONTENT_TYPE, "application/pdf".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        Bytes::from(pdf),
    ))
}
