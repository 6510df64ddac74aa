// crates/zet-core/src/repo.rs - Repository Registry
//
// A repository is a named on-disk folder that groups notes. Registration
// creates the folder (idempotently) and records it in the settings
// document under "zet_repos". Name → folder resolution and listing both
// key off that registry.
//
// NAME SANITIZATION:
// Spaces become underscores. Nothing else is normalized (case, unicode),
// which is a known limitation of the registry, not something to tighten
// here without changing the on-disk contract.

use serde_json::{json, Map};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::list::{list_notes, ListError};
use crate::settings::{Settings, SettingsError};

/// Errors that can occur during repository operations
#[derive(Error, Debug)]
pub enum RepoError {
    /// The requested name is not a key in the "zet_repos" registry
    #[error("Repository not registered: {0}")]
    NotFound(String),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    List(#[from] ListError),

    #[error("I/O error in repository operation: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Replace spaces with underscores; the only normalization applied to
/// repository names.
pub fn sanitize_name(name: &str) -> String {
    name.replace(' ', "_")
}

/// Create a repository folder and register it in the settings document
///
/// The folder is `<parent or install root>/<sanitized name>`. A
/// pre-existing folder is not an error; registration is last-write-wins
/// on the name. The repo's template defaults to the installation's
/// default template when none is given.
pub fn add_repo(
    settings: &mut Settings,
    install_root: &Path,
    name: &str,
    parent_path: Option<&Path>,
    template: Option<&str>,
) -> RepoResult<PathBuf> {
    let clean_name = sanitize_name(name);
    let folder = parent_path.unwrap_or(install_root).join(&clean_name);

    if !folder.exists() {
        fs::create_dir_all(&folder)?;
    }

    let template = match template {
        Some(t) => t.to_string(),
        None => settings.default_template()?.to_string(),
    };

    let mut entry = Map::new();
    entry.insert(
        clean_name.clone(),
        json!({
            "folder": folder.display().to_string(),
            "template": template,
        }),
    );
    settings.append("zet_repos", entry)?;

    debug!(repo = %clean_name, folder = %folder.display(), "registered repository");
    Ok(folder)
}

/// Resolve a registered repository name to its folder path
pub fn resolve_path(settings: &Settings, name: &str) -> RepoResult<PathBuf> {
    settings
        .repo_folder(name)
        .ok_or_else(|| RepoError::NotFound(name.to_string()))
}

/// List notes in one repository, or across every registered repository
///
/// With a name, lists that repo's tree. Without one, concatenates
/// per-repo results in repository name order; ordering across repos
/// beyond that is unspecified.
pub fn list(settings: &Settings, name: Option<&str>, full_path: bool) -> RepoResult<Vec<String>> {
    match name {
        Some(name) => {
            let folder = resolve_path(settings, name)?;
            Ok(list_notes(&folder, full_path)?)
        }
        None => {
            let mut entries = Vec::new();
            for name in settings.repo_names() {
                let folder = resolve_path(settings, &name)?;
                entries.extend(list_notes(&folder, full_path)?);
            }
            Ok(entries)
        }
    }
}
