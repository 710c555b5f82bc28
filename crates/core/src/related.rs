//! Related-project selection by chronological proximity.
//!
//! Given the published projects in descending recency, the selector prefers
//! the immediately newer neighbour of the current project, then older
//! projects in order, and only then reaches back into newer projects
//! (nearest first) to fill the requested count.

use crate::project::Project;

/// Number of related projects shown under a project page.
pub const DEFAULT_RELATED_COUNT: usize = 3;

/// Pick up to `count` projects related to `slug`.
///
/// `ordered` must be the published projects sorted most recent first. The
/// result never contains the current project. When `slug` is not in
/// `ordered` the first `count` projects are returned unchanged.
pub fn select_related<'a>(ordered: &'a [Project], slug: &str, count: usize) -> Vec<&'a Project> {
    if count == 0 {
        return Vec::new();
    }

    let Some(current) = ordered.iter().position(|p| p.slug == slug) else {
        return ordered.iter().take(count).collect();
    };

    let older = &ordered[current + 1..];
    // `count` comes from callers unchecked; the result can never exceed the pool.
    let mut related: Vec<&Project> = Vec::with_capacity(count.min(ordered.len()));

    // Newer candidates for backfill, nearest to `current` first. When a
    // newer neighbour exists it is seeded up front and excluded here.
    let newer_backfill = match current.checked_sub(1) {
        None => &ordered[..current],
        Some(next_newer) => {
            related.push(&ordered[next_newer]);
            &ordered[..next_newer]
        }
    };

    let room = count - related.len();
    related.extend(older.iter().take(room));

    let room = count.saturating_sub(related.len());
    related.extend(newer_backfill.iter().rev().take(room));

    related.truncate(count);
    related
}
