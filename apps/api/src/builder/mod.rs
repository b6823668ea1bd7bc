// Résumé builder: form fields → laid-out pages → PDF bytes.
// Rendering is CPU-bound; handlers run it inside tokio::task::spawn_blocking.

pub mod font_metrics;
pub mod handlers;
pub mod layout;
pub mod models;
pub mod render;

use thiserror::Error;

pub use models::{AccentColor, LayoutVariant, RenderOptions, ResumeDocument};
pub use render::render_document;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("invalid accent color '{0}': expected 6 hex digits such as #6366f1")]
    InvalidAccentColor(String),

    #[error("invalid layout '{0}': expected modern or classic")]
    InvalidLayout(String),

    #[error("PDF generation failed: {0}")]
    Pdf(String),
}
