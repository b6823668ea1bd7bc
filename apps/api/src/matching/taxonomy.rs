//! Skill taxonomy — ordered categories of canonical, lower-case skill strings.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("category name cannot be empty")]
    EmptyCategoryName,

    #[error("duplicate category '{0}'")]
    DuplicateCategory(String),

    #[error("taxonomy has no categories")]
    NoCategories,

    #[error("failed to read taxonomy file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid taxonomy JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One category of skills. `skills` keeps declaration order; `members` backs lookups.
#[derive(Debug, Clone)]
pub struct SkillCategory {
    name: String,
    skills: Vec<String>,
    members: HashSet<String>,
}

impl SkillCategory {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.members.contains(skill)
    }
}

/// On-disk shape of a taxonomy file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyDef {
    pub categories: Vec<CategoryDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDef {
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SkillTaxonomy {
    categories: Vec<SkillCategory>,
}

const DEFAULT_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Languages",
        &[
            "python", "javascript", "java", "c++", "sql", "typescript", "rust", "go", "html",
            "css",
        ],
    ),
    (
        "Frameworks",
        &[
            "react", "node.js", "angular", "vue", "django", "flask", "pytorch", "tensorflow",
            "spring", "express",
        ],
    ),
    (
        "Tools & Cloud",
        &[
            "docker", "kubernetes", "aws", "azure", "git", "linux", "terraform", "jenkins",
            "nosql", "mongodb", "postgresql", "rest api", "graphql", "devops", "cicd",
            "blockchain", "cybersecurity",
        ],
    ),
    (
        "Data & AI",
        &[
            "machine learning", "data science", "pandas", "numpy", "scikit-learn", "tableau",
            "power bi",
        ],
    ),
    (
        "Soft Skills",
        &[
            "agile", "scrum", "project management", "ui/ux", "figma", "communication",
            "leadership", "problem solving", "teamwork", "analytical", "critical thinking",
            "time management",
        ],
    ),
];

impl SkillTaxonomy {
    /// Builds a taxonomy, normalizing skills to trimmed lower-case and dropping empty or
    /// repeated skills within a category. A skill listed under several categories is kept
    /// everywhere; the matcher assigns it to the first category that finds it.
    pub fn new(def: TaxonomyDef) -> Result<Self, TaxonomyError> {
        if def.categories.is_empty() {
            return Err(TaxonomyError::NoCategories);
        }

        let mut categories: Vec<SkillCategory> = Vec::with_capacity(def.categories.len());
        let mut seen_anywhere: HashSet<String> = HashSet::new();

        for category in def.categories {
            let name = category.name.trim().to_string();
            if name.is_empty() {
                return Err(TaxonomyError::EmptyCategoryName);
            }
            if categories.iter().any(|c| c.name == name) {
                return Err(TaxonomyError::DuplicateCategory(name));
            }

            let mut skills = Vec::with_capacity(category.skills.len());
            let mut members = HashSet::new();
            for raw in category.skills {
                let skill = raw.trim().to_lowercase();
                if skill.is_empty() || !members.insert(skill.clone()) {
                    continue;
                }
                if !seen_anywhere.insert(skill.clone()) {
                    warn!("Skill '{skill}' appears in more than one category; first category wins");
                }
                skills.push(skill);
            }

            categories.push(SkillCategory {
                name,
                skills,
                members,
            });
        }

        Ok(Self { categories })
    }

    pub fn from_json(json: &str) -> Result<Self, TaxonomyError> {
        let def: TaxonomyDef = serde_json::from_str(json)?;
        Self::new(def)
    }

    pub fn from_file(path: &Path) -> Result<Self, TaxonomyError> {
        let json = std::fs::read_to_string(path)?;
        let taxonomy = Self::from_json(&json)?;
        info!(
            "Loaded skill taxonomy from {} ({} categories, {} skills)",
            path.display(),
            taxonomy.categories.len(),
            taxonomy.skill_count()
        );
        Ok(taxonomy)
    }

    pub fn categories(&self) -> &[SkillCategory] {
        &self.categories
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn skill_count(&self) -> usize {
        self.categories.iter().map(|c| c.skills.len()).sum()
    }
}

impl Default for SkillTaxonomy {
    fn default() -> Self {
        let categories = DEFAULT_CATEGORIES
            .iter()
            .map(|(name, skills)| SkillCategory {
                name: name.to_string(),
                skills: skills.iter().map(|s| s.to_string()).collect(),
                members: skills.iter().map(|s| s.to_string()).collect(),
            })
            .collect();
        Self { categories }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn taxonomy_def(categories: Vec<(&str, Vec<&str>)>) -> TaxonomyDef {
        TaxonomyDef {
            categories: categories
                .into_iter()
                .map(|(name, skills)| CategoryDef {
                    name: name.to_string(),
                    skills: skills.into_iter().map(String::from).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_default_taxonomy_order_and_size() {
        let taxonomy = SkillTaxonomy::default();
        let names: Vec<&str> = taxonomy.category_names().collect();
        assert_eq!(
            names,
            vec!["Languages", "Frameworks", "Tools & Cloud", "Data & AI", "Soft Skills"]
        );
        assert_eq!(taxonomy.skill_count(), 56);
        assert!(taxonomy.categories()[0].contains("c++"));
        assert!(taxonomy.categories()[3].contains("power bi"));
    }

    #[test]
    fn test_default_taxonomy_has_no_cross_category_duplicates() {
        let taxonomy = SkillTaxonomy::default();
        let mut seen = HashSet::new();
        for category in taxonomy.categories() {
            for skill in category.skills() {
                assert!(seen.insert(skill.clone()), "duplicate skill {skill}");
                assert_eq!(skill, &skill.to_lowercase());
            }
        }
    }

    #[test]
    fn test_new_normalizes_and_dedups_skills() {
        let taxonomy =
            SkillTaxonomy::new(taxonomy_def(vec![("Langs", vec![" Rust ", "rust", "", "Go"])])).unwrap();
        assert_eq!(taxonomy.categories()[0].skills(), &["rust", "go"]);
    }

    #[test]
    fn test_new_rejects_bad_categories() {
        assert!(matches!(
            SkillTaxonomy::new(taxonomy_def(vec![])),
            Err(TaxonomyError::NoCategories)
        ));
        assert!(matches!(
            SkillTaxonomy::new(taxonomy_def(vec![("  ", vec!["rust"])])),
            Err(TaxonomyError::EmptyCategoryName)
        ));
        assert!(matches!(
            SkillTaxonomy::new(taxonomy_def(vec![("A", vec!["rust"]), ("A", vec!["go"])])),
            Err(TaxonomyError::DuplicateCategory(name)) if name == "A"
        ));
    }

    #[test]
    fn test_overlapping_skills_are_accepted() {
        let taxonomy =
            SkillTaxonomy::new(taxonomy_def(vec![("A", vec!["docker"]), ("B", vec!["docker"])])).unwrap();
        assert!(taxonomy.categories()[0].contains("docker"));
        assert!(taxonomy.categories()[1].contains("docker"));
    }

    #[test]
    fn test_from_file_reads_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"categories":[{{"name":"Databases","skills":["Redis","SQLite"]}}]}}"#
        )
        .unwrap();

        let taxonomy = SkillTaxonomy::from_file(file.path()).unwrap();
        assert_eq!(taxonomy.categories()[0].name(), "Databases");
        assert_eq!(taxonomy.categories()[0].skills(), &["redis", "sqlite"]);
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(matches!(
            SkillTaxonomy::from_json("{not json"),
            Err(TaxonomyError::Json(_))
        ));
    }
}
