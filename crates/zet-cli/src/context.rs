// crates/zet-cli/src/context.rs - Application context
//
// The context owns the install root and the loaded settings document and
// hands both to command handlers. Settings are loaded exactly once per
// invocation and passed down explicitly; nothing in the tool reads a
// global settings singleton.

use anyhow::{Context as AnyhowContext, Result};
use directories::ProjectDirs;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;
use zet_core::repo;
use zet_core::settings::{self, Settings};

/// Application context passed to every command handler
pub struct Context {
    install_root: PathBuf,
    pub settings: Settings,
}

impl Context {
    /// Resolve the install root and load (or bootstrap) the settings
    ///
    /// Precedence for the install root: `ZET_HOME` environment variable,
    /// then the platform data directory (~/.local/share/zet on Linux).
    /// A missing settings file is first-run behavior, not an error; the
    /// environment is bootstrapped in place.
    pub fn new() -> Result<Self> {
        let install_root = match env::var("ZET_HOME") {
            Ok(home) => PathBuf::from(home),
            Err(_) => ProjectDirs::from("", "", "zet")
                .map(|dirs| dirs.data_dir().to_path_buf())
                .context("could not determine an install root; set ZET_HOME")?,
        };

        let settings = settings::generate_env(&install_root)
            .with_context(|| format!("failed to load settings under {}", install_root.display()))?;

        debug!(install = %install_root.display(), "context ready");
        Ok(Self {
            install_root,
            settings,
        })
    }

    /// Install root for this invocation
    pub fn install_root(&self) -> &Path {
        &self.install_root
    }

    /// Resolve a repo name (or the configured default) to its folder
    pub fn repo_folder(&self, name: Option<&str>) -> Result<PathBuf> {
        let name = match name {
            Some(name) => name.to_string(),
            None => self.settings.default_repo()?.to_string(),
        };
        Ok(repo::resolve_path(&self.settings, &name)?)
    }
}
