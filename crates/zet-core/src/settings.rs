// crates/zet-core/src/settings.rs - Settings Store
//
// A single JSON document describes the whole installation: known note
// repositories, registered templates, and defaults (repo, template,
// editor command). It lives at <install>/.env/.local.json.
//
// DOCUMENT SHAPE:
// {
//   "defaults":  { "repo": "zets", "template": "default",
//                  "editor": { "command": "vim" } },
//   "zet_repos": { "<name>": { "folder": "...", "template": "..." } },
//   "templates": { "<name>": { "path": "..." } }
// }
//
// DESIGN NOTES:
// - The document is held in memory as a serde_json::Value and every
//   mutation rewrites the whole file. There are no partial writes and
//   no file locking; concurrent CLI invocations are last-writer-wins.
// - Key-path mutation is an explicit tree walk with a typed KeyError
//   for a missing parent container, not exception-driven control flow.
// - `refresh()` re-reads the file after an external mutation.

use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading or mutating the settings document
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The settings file does not exist and no bootstrap was requested
    #[error("Settings file not found: {0}")]
    NotFound(PathBuf),

    /// The settings file exists but is not valid JSON
    #[error("Settings file {file} is corrupt: {error}")]
    Corrupt { file: PathBuf, error: String },

    /// A requested key (or a parent container on an update path) is absent
    #[error("Settings key not found: {0}")]
    KeyError(String),

    /// A key on an update path exists but is not a JSON object
    #[error("Settings key is not an object: {0}")]
    NotAnObject(String),

    #[error("I/O error accessing settings: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Relative location of the settings document under the install root
pub const SETTINGS_FILE: &str = ".env/.local.json";

/// The example document written on first run, before the default
/// template path and default repo are filled in by `generate_env`.
const EXAMPLE_SETTINGS: &str = r#"{
  "defaults": {
    "repo": "zets",
    "template": "default",
    "editor": {
      "command": "vim"
    }
  },
  "zet_repos": {},
  "templates": {
    "default": {
      "path": ""
    }
  }
}
"#;

/// The built-in default note template. Placeholder tokens are literal
/// strings substituted during note creation; a template is free to omit
/// any of them.
pub const DEFAULT_TEMPLATE: &str = "+++
path: 'templatePath'
date: 'templateDate'
title: 'templateTitle'
clean_title: 'templateCleanTitle'
category: 'templateCategory'
tags: templateTags
+++

# templateTitle
";

/// The loaded settings document plus the path it came from
///
/// All repository and template lookups go through this type. It is
/// constructed once per CLI invocation and passed explicitly to the
/// components that need it.
pub struct Settings {
    path: PathBuf,
    document: Value,
}

impl Settings {
    /// Load the settings document from disk
    ///
    /// Fails with `NotFound` if the file is absent (callers that want
    /// first-run behavior should use `generate_env` instead) and with
    /// `Corrupt` if the file is not valid JSON.
    pub fn load(path: impl Into<PathBuf>) -> SettingsResult<Self> {
        let path = path.into();
        if !path.exists() {
            return Err(SettingsError::NotFound(path));
        }

        let raw = fs::read_to_string(&path)?;
        let document: Value = serde_json::from_str(&raw).map_err(|e| SettingsError::Corrupt {
            file: path.clone(),
            error: e.to_string(),
        })?;

        debug!(path = %path.display(), "loaded settings document");
        Ok(Self { path, document })
    }

    /// Re-read the document from disk, discarding the in-memory copy
    ///
    /// Needed after an external mutation (another process, or another
    /// Settings handle) rewrote the file.
    pub fn refresh(&mut self) -> SettingsResult<()> {
        let fresh = Self::load(self.path.clone())?;
        self.document = fresh.document;
        Ok(())
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The whole document
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Return the sub-tree at a top-level section ("defaults",
    /// "zet_repos", "templates")
    pub fn get(&self, section: &str) -> SettingsResult<&Value> {
        self.document
            .get(section)
            .ok_or_else(|| SettingsError::KeyError(section.to_string()))
    }

    /// Set the value at a key path, then persist the whole document
    ///
    /// Every intermediate key must already exist and be an object; only
    /// the terminal key is created (or overwritten). A missing parent
    /// container is a `KeyError`, not an implicit mkdir -p of the tree.
    pub fn update(&mut self, key_path: &[&str], value: Value) -> SettingsResult<()> {
        let (terminal, parents) = match key_path.split_last() {
            Some(split) => split,
            None => return Err(SettingsError::KeyError("<empty key path>".to_string())),
        };

        let mut cursor = &mut self.document;
        let mut walked = String::new();
        for key in parents {
            if !walked.is_empty() {
                walked.push('.');
            }
            walked.push_str(key);

            cursor = match cursor {
                Value::Object(map) => map
                    .get_mut(*key)
                    .ok_or_else(|| SettingsError::KeyError(walked.clone()))?,
                _ => return Err(SettingsError::NotAnObject(walked.clone())),
            };
        }

        match cursor {
            Value::Object(map) => {
                map.insert(terminal.to_string(), value);
            }
            _ => return Err(SettingsError::NotAnObject(walked)),
        }

        self.persist()
    }

    /// Merge an entry into the mapping at a top-level section, then persist
    ///
    /// Key collisions are last-write-wins, matching the observed behavior
    /// of re-registering a repo under an existing name.
    pub fn append(&mut self, section: &str, entry: Map<String, Value>) -> SettingsResult<()> {
        match self.document.get_mut(section) {
            Some(Value::Object(map)) => {
                for (key, value) in entry {
                    map.insert(key, value);
                }
            }
            Some(_) => return Err(SettingsError::NotAnObject(section.to_string())),
            None => return Err(SettingsError::KeyError(section.to_string())),
        }

        self.persist()
    }

    /// Rewrite the whole file from the in-memory document
    fn persist(&self) -> SettingsResult<()> {
        let raw = serde_json::to_string_pretty(&self.document).map_err(|e| {
            SettingsError::Corrupt {
                file: self.path.clone(),
                error: e.to_string(),
            }
        })?;
        fs::write(&self.path, raw)?;
        debug!(path = %self.path.display(), "persisted settings document");
        Ok(())
    }

    // --- Typed accessors -------------------------------------------------
    //
    // Thin views over the document used throughout the tool. They return
    // KeyError for anything missing or of the wrong shape so callers can
    // surface a settings problem rather than a generic panic.

    /// Name of the default repository (`defaults.repo`)
    pub fn default_repo(&self) -> SettingsResult<&str> {
        self.str_at(&["defaults", "repo"])
    }

    /// Name of the default template (`defaults.template`)
    pub fn default_template(&self) -> SettingsResult<&str> {
        self.str_at(&["defaults", "template"])
    }

    /// Configured editor command (`defaults.editor.command`)
    pub fn editor_command(&self) -> SettingsResult<&str> {
        self.str_at(&["defaults", "editor", "command"])
    }

    /// Folder of a registered repository, if that name is registered
    pub fn repo_folder(&self, name: &str) -> Option<PathBuf> {
        self.document
            .get("zet_repos")
            .and_then(|repos| repos.get(name))
            .and_then(|repo| repo.get("folder"))
            .and_then(Value::as_str)
            .map(PathBuf::from)
    }

    /// Template name configured for a registered repository
    pub fn repo_template(&self, name: &str) -> Option<&str> {
        self.document
            .get("zet_repos")
            .and_then(|repos| repos.get(name))
            .and_then(|repo| repo.get("template"))
            .and_then(Value::as_str)
    }

    /// Names of all registered repositories, in name order
    ///
    /// Sorted explicitly so listing order does not depend on the JSON
    /// map's internal ordering.
    pub fn repo_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .document
            .get("zet_repos")
            .and_then(Value::as_object)
            .map(|repos| repos.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }

    /// Path of a registered template file
    pub fn template_path(&self, name: &str) -> SettingsResult<PathBuf> {
        let path = self
            .document
            .get("templates")
            .and_then(|templates| templates.get(name))
            .and_then(|template| template.get("path"))
            .and_then(Value::as_str)
            .ok_or_else(|| SettingsError::KeyError(format!("templates.{}.path", name)))?;
        Ok(PathBuf::from(path))
    }

    fn str_at(&self, key_path: &[&str]) -> SettingsResult<&str> {
        let mut cursor = &self.document;
        for key in key_path {
            cursor = cursor
                .get(key)
                .ok_or_else(|| SettingsError::KeyError(key_path.join(".")))?;
        }
        cursor
            .as_str()
            .ok_or_else(|| SettingsError::KeyError(key_path.join(".")))
    }
}

/// Bootstrap a fresh installation under `install_root`
///
/// Idempotent: if the settings file already exists it is loaded as-is.
/// Otherwise this creates the `.env/` folder, writes the example settings
/// document, materializes the built-in default template at
/// `<install>/templates/default.md`, records its path under
/// `templates.default.path`, and registers the default repository folder.
pub fn generate_env(install_root: &Path) -> SettingsResult<Settings> {
    let settings_path = install_root.join(SETTINGS_FILE);
    if settings_path.exists() {
        return Settings::load(settings_path);
    }

    if let Some(env_folder) = settings_path.parent() {
        fs::create_dir_all(env_folder)?;
    }
    fs::write(&settings_path, EXAMPLE_SETTINGS)?;

    let mut settings = Settings::load(settings_path)?;

    // Materialize the built-in template and point the registry at it.
    let template_path = install_root.join("templates").join("default.md");
    if let Some(template_folder) = template_path.parent() {
        fs::create_dir_all(template_folder)?;
    }
    fs::write(&template_path, DEFAULT_TEMPLATE)?;
    settings.update(
        &["templates", "default", "path"],
        Value::String(template_path.display().to_string()),
    )?;

    // Register the default repository folder under the install root.
    let default_repo = settings.default_repo()?.to_string();
    crate::repo::add_repo(&mut settings, install_root, &default_repo, None, None)
        .map_err(|e| match e {
            crate::repo::RepoError::Settings(inner) => inner,
            crate::repo::RepoError::Io(inner) => SettingsError::Io(inner),
            other => SettingsError::KeyError(other.to_string()),
        })?;

    debug!(install = %install_root.display(), "bootstrapped new environment");
    Ok(settings)
}
