use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::matching::{SkillMatcher, SkillTaxonomy};
use crate::nlp::TaggerHandle;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Taxonomy plus its compiled phrase patterns.
    pub matcher: Arc<SkillMatcher>,
    /// Lazily initialized on the first analysis request.
    pub tagger: TaggerHandle,
}

impl AppState {
    pub fn from_config(config: Config) -> Result<Self> {
        let taxonomy = match &config.taxonomy_path {
            Some(path) => SkillTaxonomy::from_file(path)
                .with_context(|| format!("failed to load taxonomy from {}", path.display()))?,
            None => SkillTaxonomy::default(),
        };
        info!(
            "Skill taxonomy: {} categories, {} skills",
            taxonomy.categories().len(),
            taxonomy.skill_count()
        );

        let matcher = SkillMatcher::new(taxonomy).context("failed to compile skill patterns")?;
        let tagger = TaggerHandle::new(config.tagger_max_chars);

        Ok(AppState {
            config,
            matcher: Arc::new(matcher),
            tagger,
        })
    }
}
