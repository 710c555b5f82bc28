//! Immutable, validated project collection.
//!
//! A [`ProjectStore`] is built once from the full catalog (drafts included)
//! and precomputes the published ordering. After construction nothing in
//! it changes, so it can be shared behind an `Arc` without locking.

use std::collections::HashSet;

use crate::error::CoreError;
use crate::project::Project;
use crate::related::select_related;

#[derive(Debug, Clone)]
pub struct ProjectStore {
    /// Non-draft projects, most recent first. Ties keep catalog order.
    published: Vec<Project>,
    draft_count: usize,
}

impl ProjectStore {
    /// Validate every record and build the published ordering.
    ///
    /// Fails with [`CoreError::Conflict`] on a duplicate slug (drafts
    /// included) and [`CoreError::Validation`] on a malformed record.
    pub fn new(projects: Vec<Project>) -> Result<Self, CoreError> {
        let mut seen = HashSet::with_capacity(projects.len());
        for project in &projects {
            project.validate()?;
            if !seen.insert(project.slug.as_str()) {
                return Err(CoreError::Conflict(format!(
                    "Duplicate project slug '{}'",
                    project.slug
                )));
            }
        }

        let total = projects.len();
        let mut published: Vec<Project> = projects.into_iter().filter(|p| !p.draft).collect();
        // `sort_by_key` is stable.
        published.sort_by_key(|p| std::cmp::Reverse(p.recency_key()));
        let draft_count = total - published.len();

        Ok(Self {
            published,
            draft_count,
        })
    }

    /// All non-draft projects, most recent first.
    pub fn list_published(&self) -> &[Project] {
        &self.published
    }

    /// Look up a published project by slug. Drafts are never returned.
    pub fn get_project(&self, slug: &str) -> Option<&Project> {
        self.published.iter().find(|p| p.slug == slug)
    }

    /// Up to `count` projects related to `slug`; see [`select_related`].
    pub fn related(&self, slug: &str, count: usize) -> Vec<&Project> {
        select_related(&self.published, slug, count)
    }

    pub fn published_count(&self) -> usize {
        self.published.len()
    }

    /// Number of draft records that were loaded and withheld.
    pub fn draft_count(&self) -> usize {
        self.draft_count
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::project::fixtures::{draft, project};
    use crate::related::DEFAULT_RELATED_COUNT;

    fn store() -> ProjectStore {
        ProjectStore::new(vec![
            project("a", Some("2022-05")),
            draft("secret", Some("2030-01")),
            project("c", Some("2023-01")),
            project("e", Some("2025-11")),
            project("b", Some("2022-10")),
            draft("old-draft", None),
            project("d", Some("2024-11")),
        ])
        .unwrap()
    }

    fn slugs<'a>(projects: impl IntoIterator<Item = &'a Project>) -> Vec<&'a str> {
        projects.into_iter().map(|p| p.slug.as_str()).collect()
    }

    #[test]
    fn lists_published_newest_first() {
        let store = store();
        assert_eq!(slugs(store.list_published()), ["e", "d", "c", "b", "a"]);
        assert_eq!(store.published_count(), 5);
        assert_eq!(store.draft_count(), 2);
    }

    #[test]
    fn listing_never_contains_drafts() {
        let store = store();
        assert!(store.list_published().iter().all(|p| !p.draft));
    }

    #[test]
    fn listing_is_non_increasing_in_recency() {
        let store = store();
        assert!(store
            .list_published()
            .windows(2)
            .all(|w| w[0].recency_key() >= w[1].recency_key()));
    }

    #[test]
    fn ties_and_undated_keep_catalog_order() {
        let store = ProjectStore::new(vec![
            project("undated", None),
            project("registro-civil", Some("2025-11")),
            project("copec-immersive", Some("2025-11")),
            project("year-only", Some("2025")),
        ])
        .unwrap();
        assert_eq!(
            slugs(store.list_published()),
            ["registro-civil", "copec-immersive", "year-only", "undated"]
        );
    }

    #[test]
    fn get_project_finds_published() {
        let store = store();
        assert_eq!(store.get_project("c").map(|p| p.title.as_str()), Some("C"));
    }

    #[test]
    fn get_project_hides_unknown_and_drafts() {
        let store = store();
        assert!(store.get_project("nonexistent").is_none());
        assert!(store.get_project("secret").is_none());
        assert!(store.get_project("old-draft").is_none());
    }

    #[test]
    fn related_follows_chronological_neighbourhood() {
        let store = store();
        assert_eq!(slugs(store.related("c", DEFAULT_RELATED_COUNT)), ["d", "b", "a"]);
        assert_eq!(slugs(store.related("e", DEFAULT_RELATED_COUNT)), ["d", "c", "b"]);
        assert_eq!(slugs(store.related("a", DEFAULT_RELATED_COUNT)), ["b", "c", "d"]);
    }

    #[test]
    fn related_for_draft_falls_back_to_newest() {
        let store = store();
        let related = store.related("secret", 3);
        assert_eq!(slugs(related.iter().copied()), ["e", "d", "c"]);
        assert!(related.iter().all(|p| !p.draft));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let store = store();
        assert_eq!(store.list_published(), store.list_published());
        assert_eq!(store.related("b", 3), store.related("b", 3));
    }

    #[test]
    fn duplicate_slug_is_a_conflict() {
        let result = ProjectStore::new(vec![
            project("djavu", Some("2024-11")),
            draft("djavu", None),
        ]);
        assert_matches!(result, Err(CoreError::Conflict(msg)) if msg.contains("djavu"));
    }

    #[test]
    fn invalid_record_is_rejected() {
        let result = ProjectStore::new(vec![project("ok", Some("2024-99"))]);
        assert_matches!(result, Err(CoreError::Validation(_)));
    }

    #[test]
    fn empty_catalog_is_allowed() {
        let store = ProjectStore::new(Vec::new()).unwrap();
        assert!(store.list_published().is_empty());
        assert!(store.related("any", 3).is_empty());
    }
}
