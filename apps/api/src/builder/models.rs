use serde::{Deserialize, Serialize};

use crate::builder::RenderError;

/// Résumé form fields. Every field is free text; blank sections are not rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeDocument {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// LinkedIn/GitHub profile URL.
    #[serde(alias = "linkedin")]
    pub link: String,
    pub summary: String,
    pub education: String,
    pub experience: String,
    pub skills: String,
    pub projects: String,
}

impl ResumeDocument {
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.name.trim().is_empty() {
            return Err(RenderError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(RenderError::MissingField("email"));
        }
        Ok(())
    }

    /// Labeled sections in render order, skipping blank ones.
    pub fn sections(&self) -> Vec<(&'static str, &str)> {
        [
            ("Professional Summary", self.summary.as_str()),
            ("Education", self.education.as_str()),
            ("Experience", self.experience.as_str()),
            ("Skills", self.skills.as_str()),
            ("Projects", self.projects.as_str()),
        ]
        .into_iter()
        .filter(|(_, body)| !body.trim().is_empty())
        .collect()
    }

    pub fn contact_line(&self) -> String {
        format!("{} | {} | {}", self.email, self.phone, self.location)
    }

    /// `Alex Johnson` → `Alex_Johnson_Resume.pdf`. Characters unsafe in a header are dropped.
    pub fn download_file_name(&self) -> String {
        let stem: String = self
            .name
            .trim()
            .chars()
            .filter_map(|c| match c {
                ' ' => Some('_'),
                c if c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.') => Some(c),
                _ => None,
            })
            .collect();
        format!("{stem}_Resume.pdf")
    }
}

/// RGB accent colour used for section headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl AccentColor {
    pub const DEFAULT_HEX: &'static str = "#6366f1";

    /// Parses `#rrggbb` or `rrggbb`.
    pub fn from_hex(hex: &str) -> Result<Self, RenderError> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(RenderError::InvalidAccentColor(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| RenderError::InvalidAccentColor(hex.to_string()))
        };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}

impl Default for AccentColor {
    fn default() -> Self {
        Self {
            r: 0x63,
            g: 0x66,
            b: 0xf1,
        }
    }
}

/// Modern: centered header, full-width dividers. Classic: left-aligned, half-width dividers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutVariant {
    #[default]
    #[serde(alias = "Modern")]
    Modern,
    #[serde(alias = "Classic")]
    Classic,
}

impl LayoutVariant {
    /// Case-insensitive `modern` / `classic`.
    pub fn parse(value: &str) -> Result<Self, RenderError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "modern" => Ok(LayoutVariant::Modern),
            "classic" => Ok(LayoutVariant::Classic),
            _ => Err(RenderError::InvalidLayout(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub accent: AccentColor,
    pub layout: LayoutVariant,
}
