//! Project records and the grid card view derived from them.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::block::ContentBlock;
use crate::error::CoreError;
use crate::recency::{parse_year_month, recency_key, RecencyKey};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Lowercase alphanumerics separated by single hyphens.
pub const SLUG_PATTERN: &str = r"^[a-z0-9]+(-[a-z0-9]+)*$";

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SLUG_PATTERN).expect("valid regex"));

/// Maximum length for a project slug in characters.
pub const MAX_SLUG_LENGTH: usize = 100;

/// Maximum length for a project title in characters.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Path prefix under which project detail pages live.
pub const PROJECT_HREF_PREFIX: &str = "/projects/";

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

/// One portfolio case study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub slug: String,
    pub title: String,
    /// Comma-separated role/category labels.
    pub tags: String,
    pub cover: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_image: Option<String>,
    pub alt: String,
    /// `"YYYY"` or `"YYYY-MM"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,
}

impl Project {
    pub fn recency_key(&self) -> RecencyKey {
        recency_key(self.date.as_deref())
    }

    /// Tags split on commas, trimmed, with empty entries dropped.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// First tag plus an ellipsis when there are several, otherwise the
    /// tag string as written.
    pub fn role_summary(&self) -> String {
        let tags = self.tag_list();
        if tags.len() > 1 {
            format!("{}...", tags[0])
        } else {
            self.tags.clone()
        }
    }

    /// The four-digit year of the project date, or `""` when undated.
    pub fn year(&self) -> &str {
        match self.date.as_deref() {
            Some(date) => date.get(..4).unwrap_or(date),
            None => "",
        }
    }

    /// The image shown in the grid: the dedicated card image if set,
    /// otherwise the cover.
    pub fn card_image(&self) -> &str {
        self.card_image.as_deref().unwrap_or(&self.cover)
    }

    pub fn href(&self) -> String {
        format!("{PROJECT_HREF_PREFIX}{}", self.slug)
    }

    /// Validate a single record. Uniqueness across the catalog is checked
    /// by the store.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_slug(&self.slug)?;
        validate_title(&self.title)?;

        if self.cover.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "Project '{}' has an empty cover image",
                self.slug
            )));
        }

        if let Some(date) = self.date.as_deref() {
            if parse_year_month(date).is_none() {
                return Err(CoreError::Validation(format!(
                    "Project '{}' has invalid date '{date}' (expected YYYY or YYYY-MM)",
                    self.slug
                )));
            }
        }

        for (index, block) in self.blocks.iter().enumerate() {
            block.validate().map_err(|e| match e {
                CoreError::Validation(msg) => CoreError::Validation(format!(
                    "Project '{}' block {index} ({}): {msg}",
                    self.slug,
                    block.kind()
                )),
                other => other,
            })?;
        }

        Ok(())
    }
}

/// Validate a project slug (non-empty, URL-safe, bounded length).
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".into()));
    }
    if slug.len() > MAX_SLUG_LENGTH {
        return Err(CoreError::Validation(format!(
            "Slug must be at most {MAX_SLUG_LENGTH} characters"
        )));
    }
    if !SLUG_RE.is_match(slug) {
        return Err(CoreError::Validation(format!(
            "Slug '{slug}' must contain only lowercase alphanumeric characters separated by single hyphens"
        )));
    }
    Ok(())
}

/// Validate a project title (non-empty, <= 200 chars).
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title must not be empty".into()));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Title must be at most {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Card view
// ---------------------------------------------------------------------------

/// Grid summary of a project, as shown on the home page and in the
/// related-projects strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    pub slug: String,
    pub title: String,
    pub role: String,
    pub role_summary: String,
    pub tags: Vec<String>,
    pub year: String,
    pub image: String,
    pub alt: String,
    pub href: String,
}

impl From<&Project> for ProjectCard {
    fn from(project: &Project) -> Self {
        Self {
            slug: project.slug.clone(),
            title: project.title.clone(),
            role: project.tags.clone(),
            role_summary: project.role_summary(),
            tags: project.tag_list().into_iter().map(String::from).collect(),
            year: project.year().to_string(),
            image: project.card_image().to_string(),
            alt: project.alt.clone(),
            href: project.href(),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::Project;

    /// Minimal valid project for tests.
    pub fn project(slug: &str, date: Option<&str>) -> Project {
        Project {
            slug: slug.to_string(),
            title: slug.to_uppercase(),
            tags: "Branding, Identity".to_string(),
            cover: format!("/images/projects/{slug}/cover.png"),
            card_image: None,
            alt: format!("{slug} cover"),
            date: date.map(String::from),
            draft: false,
            blocks: Vec::new(),
        }
    }

    pub fn draft(slug: &str, date: Option<&str>) -> Project {
        Project {
            draft: true,
            ..project(slug, date)
        }
    }
}
