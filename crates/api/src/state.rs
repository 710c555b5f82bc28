use std::sync::Arc;

use folio_core::catalog;
use folio_core::error::CoreError;
use folio_core::profile::SiteProfile;
use folio_core::store::ProjectStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind `Arc` and never mutated after
/// startup.
#[derive(Clone)]
pub struct AppState {
    /// Validated project collection with the published ordering precomputed.
    pub store: Arc<ProjectStore>,
    /// Hero and about page content.
    pub profile: Arc<SiteProfile>,
}

impl AppState {
    /// Load the catalog and profile named by `config` (or the embedded
    /// defaults) and build the store.
    pub fn load(config: &ServerConfig) -> Result<Self, CoreError> {
        let projects = match &config.projects_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading project catalog from file");
                catalog::load_projects(path)?
            }
            None => catalog::builtin_projects()?,
        };
        let profile = match &config.profile_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading site profile from file");
                catalog::load_profile(path)?
            }
            None => catalog::builtin_profile()?,
        };

        let store = ProjectStore::new(projects)?;
        tracing::info!(
            published = store.published_count(),
            drafts = store.draft_count(),
            "Project store ready",
        );

        Ok(Self::new(store, profile))
    }

    pub fn new(store: ProjectStore, profile: SiteProfile) -> Self {
        Self {
            store: Arc::new(store),
            profile: Arc::new(profile),
        }
    }
}
