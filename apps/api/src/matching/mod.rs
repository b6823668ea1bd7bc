// Keyword matching engine.
// Implements: skill taxonomy, two-pass categorized extraction, match scoring, insights.
// Every operation here is synchronous and pure given its inputs plus the shared taxonomy.

pub mod extractor;
pub mod handlers;
pub mod insights;
pub mod scoring;
pub mod taxonomy;

pub use extractor::{extract_keywords, ExtractionResult, SkillMatcher};
pub use scoring::{compute_match, MatchReport};
pub use taxonomy::SkillTaxonomy;
