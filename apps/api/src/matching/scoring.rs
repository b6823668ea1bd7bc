//! Match scoring — per-category intersection/difference between a job description's
//! extraction and a résumé's, plus the aggregate percentage score and its band.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::matching::extractor::ExtractionResult;

/// Qualitative band for a score. Thresholds: > 70 strong, > 40 moderate, else weak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchBand {
    Strong,
    Moderate,
    Weak,
}

impl MatchBand {
    pub fn from_score(score: u32) -> Self {
        if score > 70 {
            MatchBand::Strong
        } else if score > 40 {
            MatchBand::Moderate
        } else {
            MatchBand::Weak
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchBand::Strong => "strong match",
            MatchBand::Moderate => "moderate, needs improvement",
            MatchBand::Weak => "weak match",
        }
    }

    /// Message shown next to the score.
    pub fn message(self) -> &'static str {
        match self {
            MatchBand::Strong => "Great match!",
            MatchBand::Moderate => "Needs some improvement",
            MatchBand::Weak => "Low match - try adding more keywords",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMatch {
    pub category: String,
    /// JD ∩ résumé, sorted.
    pub matched: Vec<String>,
    /// JD − résumé, sorted.
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub categories: Vec<CategoryMatch>,
    pub total_jd_keywords: usize,
    pub total_matched: usize,
    pub score: u32, // 0 – 100
    pub band: MatchBand,
}

impl MatchReport {
    /// Missing keywords across categories, in category order.
    pub fn missing_flat(&self) -> Vec<&str> {
        self.categories
            .iter()
            .flat_map(|c| c.missing.iter().map(String::as_str))
            .collect()
    }

    pub fn total_missing(&self) -> usize {
        self.total_jd_keywords.saturating_sub(self.total_matched)
    }
}

/// Compares a job description's extraction against a résumé's.
///
/// Categories follow the JD side; a category the résumé side lacks counts as empty.
/// `total_matched` is computed over the flattened skill sets, so it ignores category.
pub fn compute_match(jd: &ExtractionResult, resume: &ExtractionResult) -> MatchReport {
    let mut categories = Vec::new();

    for (category, jd_skills) in jd.iter() {
        let resume_set: HashSet<&str> = resume
            .get(category)
            .map(|skills| skills.iter().map(String::as_str).collect())
            .unwrap_or_default();
        let jd_set: BTreeSet<&str> = jd_skills.iter().map(String::as_str).collect();

        let (matched, missing): (Vec<&str>, Vec<&str>) =
            jd_set.into_iter().partition(|s| resume_set.contains(s));

        categories.push(CategoryMatch {
            category: category.to_string(),
            matched: matched.into_iter().map(String::from).collect(),
            missing: missing.into_iter().map(String::from).collect(),
        });
    }

    let total_jd_keywords = jd.total();
    let jd_all: HashSet<&str> = jd.flatten().into_iter().collect();
    let resume_all: HashSet<&str> = resume.flatten().into_iter().collect();
    let total_matched = jd_all.intersection(&resume_all).count();

    let score = percentage(total_matched, total_jd_keywords);

    MatchReport {
        categories,
        total_jd_keywords,
        total_matched,
        score,
        band: MatchBand::from_score(score),
    }
}

/// `round(100 * part / whole)` with ties to even; 0 when `whole` is 0.
fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let ratio = part as f64 / whole as f64 * 100.0;
    (ratio.round_ties_even() as u32).min(100)
}
