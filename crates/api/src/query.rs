//! Shared query parameter types for API handlers.

use folio_core::related::DEFAULT_RELATED_COUNT;
use serde::Deserialize;

/// Query parameters for the related-projects endpoint (`?count=`).
///
/// `count` is signed so that a negative value is accepted and yields an
/// empty list instead of a 400.
#[derive(Debug, Deserialize)]
pub struct RelatedParams {
    pub count: Option<i64>,
}

impl RelatedParams {
    /// Requested count clamped to `usize`: absent means the default,
    /// non-positive means zero.
    pub fn resolved_count(&self) -> usize {
        match self.count {
            None => DEFAULT_RELATED_COUNT,
            Some(n) => usize::try_from(n).unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_count_uses_default() {
        assert_eq!(RelatedParams { count: None }.resolved_count(), DEFAULT_RELATED_COUNT);
    }

    #[test]
    fn negative_count_is_zero() {
        assert_eq!(RelatedParams { count: Some(-4) }.resolved_count(), 0);
        assert_eq!(RelatedParams { count: Some(0) }.resolved_count(), 0);
    }

    #[test]
    fn positive_count_passes_through() {
        assert_eq!(RelatedParams { count: Some(5) }.resolved_count(), 5);
    }
}
