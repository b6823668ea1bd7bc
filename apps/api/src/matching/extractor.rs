//! Categorized skill extraction.
//!
//! Two passes over a lower-cased text, reconciled through a single `found` set:
//! 1. Token pass: nominal, non-stop tokens longer than two characters that are taxonomy members.
//! 2. Phrase pass: every skill not yet found is searched as a whole phrase in the full text.
//!
//! A skill lands in at most one category, the first one (in taxonomy order) to claim it.

use std::collections::HashSet;

use regex::Regex;
use serde::ser::{Serialize, Serializer};
use tracing::{debug, warn};

use crate::matching::taxonomy::SkillTaxonomy;
use crate::nlp::{PosTagger, Token};

/// Per-category skill hits, in taxonomy order. Skills within a category keep discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    categories: Vec<(String, Vec<String>)>,
}

impl ExtractionResult {
    /// An empty result with one (empty) entry per taxonomy category.
    pub fn empty_for(taxonomy: &SkillTaxonomy) -> Self {
        Self {
            categories: taxonomy
                .category_names()
                .map(|name| (name.to_string(), Vec::new()))
                .collect(),
        }
    }

    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, skills)| skills.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(name, skills)| (name.as_str(), skills.as_slice()))
    }

    /// All skills across categories, in category order.
    pub fn flatten(&self) -> Vec<&str> {
        self.categories
            .iter()
            .flat_map(|(_, skills)| skills.iter().map(String::as_str))
            .collect()
    }

    pub fn total(&self) -> usize {
        self.categories.iter().map(|(_, skills)| skills.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    fn push(&mut self, index: usize, skill: String) {
        self.categories[index].1.push(skill);
    }
}

impl Serialize for ExtractionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.categories.iter().map(|(name, skills)| (name, skills)))
    }
}

/// A taxonomy plus one compiled whole-phrase pattern per skill. Build once, share via `Arc`.
pub struct SkillMatcher {
    taxonomy: SkillTaxonomy,
    patterns: Vec<Vec<Regex>>,
}

/// Matches `skill` only when the neighbouring characters are not word characters.
/// `\b` alone would refuse skills ending in a symbol, such as `c++` before a space.
fn phrase_pattern(skill: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?:^|\W){}(?:\W|$)", regex::escape(skill)))
}

impl SkillMatcher {
    pub fn new(taxonomy: SkillTaxonomy) -> Result<Self, regex::Error> {
        let patterns = taxonomy
            .categories()
            .iter()
            .map(|category| {
                category
                    .skills()
                    .iter()
                    .map(|skill| phrase_pattern(skill))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { taxonomy, patterns })
    }

    pub fn taxonomy(&self) -> &SkillTaxonomy {
        &self.taxonomy
    }

    /// Extracts categorized skills from `text`. Never fails: a tagger error drops the
    /// token pass and the phrase pass still runs.
    pub fn extract(&self, text: &str, tagger: &dyn PosTagger) -> ExtractionResult {
        let text_lower = text.to_lowercase();
        let tokens = match tagger.tag(&text_lower) {
            Ok(tokens) => tokens,
            Err(e) => {
                warn!("Tagger failed, falling back to phrase search only: {e}");
                Vec::new()
            }
        };

        let mut result = ExtractionResult::empty_for(&self.taxonomy);
        let mut found: HashSet<String> = HashSet::new();

        self.token_pass(&tokens, &mut result, &mut found);
        self.phrase_pass(&text_lower, &mut result, &mut found);

        debug!(
            "Extracted {} skills from {} tokens",
            result.total(),
            tokens.len()
        );
        result
    }

    fn token_pass(
        &self,
        tokens: &[Token],
        result: &mut ExtractionResult,
        found: &mut HashSet<String>,
    ) {
        for token in tokens {
            if !token.pos.is_nominal() || token.is_stop {
                continue;
            }
            let clean = token.surface.trim().to_lowercase();
            if clean.chars().count() <= 2 {
                continue;
            }
            for (index, category) in self.taxonomy.categories().iter().enumerate() {
                if category.contains(&clean) && !found.contains(&clean) {
                    found.insert(clean.clone());
                    result.push(index, clean.clone());
                }
            }
        }
    }

    fn phrase_pass(
        &self,
        text_lower: &str,
        result: &mut ExtractionResult,
        found: &mut HashSet<String>,
    ) {
        for (index, category) in self.taxonomy.categories().iter().enumerate() {
            for (skill, pattern) in category.skills().iter().zip(&self.patterns[index]) {
                if found.contains(skill) {
                    continue;
                }
                if pattern.is_match(text_lower) {
                    found.insert(skill.clone());
                    result.push(index, skill.clone());
                }
            }
        }
    }
}

/// Convenience wrapper over [`SkillMatcher::extract`].
pub fn extract_keywords(
    text: &str,
    matcher: &SkillMatcher,
    tagger: &dyn PosTagger,
) -> ExtractionResult {
    matcher.extract(text, tagger)
}
