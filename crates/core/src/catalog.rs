//! Loading the project catalog and site profile.
//!
//! The published site content ships inside the binary as JSON. A file on
//! disk can be used instead (for previewing content changes locally); both
//! paths parse the same document shape.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::CoreError;
use crate::profile::SiteProfile;
use crate::project::Project;

const BUILTIN_PROJECTS: &str = include_str!("../content/projects.json");
const BUILTIN_PROFILE: &str = include_str!("../content/profile.json");

/// Projects compiled into the binary, drafts included.
pub fn builtin_projects() -> Result<Vec<Project>, CoreError> {
    parse_json(BUILTIN_PROJECTS, "builtin projects")
}

/// Site profile compiled into the binary.
pub fn builtin_profile() -> Result<SiteProfile, CoreError> {
    let profile: SiteProfile = parse_json(BUILTIN_PROFILE, "builtin profile")?;
    profile.validate()?;
    Ok(profile)
}

/// Read a JSON array of projects from `path`.
pub fn load_projects(path: &Path) -> Result<Vec<Project>, CoreError> {
    let raw = read_file(path)?;
    parse_json(&raw, &path.display().to_string())
}

/// Read and validate a site profile from `path`.
pub fn load_profile(path: &Path) -> Result<SiteProfile, CoreError> {
    let raw = read_file(path)?;
    let profile: SiteProfile = parse_json(&raw, &path.display().to_string())?;
    profile.validate()?;
    Ok(profile)
}

fn read_file(path: &Path) -> Result<String, CoreError> {
    std::fs::read_to_string(path).map_err(|e| {
        CoreError::Internal(format!("Failed to read {}: {e}", path.display()))
    })
}

fn parse_json<T: DeserializeOwned>(raw: &str, source: &str) -> Result<T, CoreError> {
    serde_json::from_str(raw)
        .map_err(|e| CoreError::Validation(format!("Invalid JSON in {source}: {e}")))
}
