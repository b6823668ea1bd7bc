// Résumé upload ingestion: file-type detection and text extraction.
// Extraction is CPU-bound; handlers call it inside tokio::task::spawn_blocking.

pub mod extract;

pub use extract::{extract_text, ExtractionError};
