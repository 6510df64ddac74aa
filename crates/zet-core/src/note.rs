// crates/zet-core/src/note.rs - Note Factory
//
// Creates timestamped note files from templates. The destination path is
// derived deterministically from the title and a second-resolution local
// timestamp:
//
//   <repo>/<year>/<month>/<YYYYMMDDHHMMSS>/<slug>-<YYYYMMDDHHMMSS>.md
//
// where slug is the lowercased, hyphenated title. Template placeholder
// tokens (templatePath, templateDate, templateTitle, templateCleanTitle,
// templateCategory, templateTags) are literal strings substituted in a
// single in-memory pass over the template content.
//
// COLLISION POLICY:
// Second-resolution timestamps mean two notes with the same title inside
// the same wall-clock second compute the same directory. When the
// destination directory already exists, creation is a no-op that returns
// the pre-existing computed path without rewriting anything. Callers that
// need distinct notes wait at least one second between creations.

use chrono::{Datelike, Local};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::metadata::{parse_metadata, Metadata, MetadataError};
use crate::repo::{resolve_path, RepoError};
use crate::settings::{Settings, SettingsError};

/// Errors that can occur while creating or importing notes
#[derive(Error, Debug)]
pub enum NoteError {
    /// The resolved template file does not exist on disk
    #[error("Template file not found: {0}")]
    TemplateNotFound(PathBuf),

    #[error(transparent)]
    Repo(#[from] RepoError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("I/O error creating note: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for note operations
pub type NoteResult<T> = Result<T, NoteError>;

/// A single note on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Full path of the note file
    pub path: PathBuf,
}

impl Note {
    /// Re-open the note and parse its metadata block
    pub fn metadata(&self) -> Result<Metadata, MetadataError> {
        parse_metadata(&self.path)
    }
}

/// One file handled by a bulk import pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRecord {
    /// Where the file was found under the source folder
    pub original_path: PathBuf,
    /// Where the copy landed inside the repository
    pub new_path: PathBuf,
}

/// The second-resolution timestamp a note derives its path from
#[derive(Debug, Clone)]
struct Stamp {
    year: String,
    month: String,
    compact: String,
}

impl Stamp {
    /// Current local time. Month is rendered unpadded ("8", not "08"),
    /// matching the existing on-disk layout.
    fn now() -> Self {
        let now = Local::now();
        Self {
            year: now.year().to_string(),
            month: now.month().to_string(),
            compact: now.format("%Y%m%d%H%M%S").to_string(),
        }
    }
}

/// Create a new note in a repository
///
/// Resolution order for the template: explicit `template` name, else the
/// repo's configured template, else the installation default. The repo
/// defaults to `defaults.repo` when no name is given. Tags are a
/// comma-separated string ("some, tags") rendered into the metadata
/// block as a bracketed list.
pub fn create_note(
    settings: &Settings,
    title: &str,
    category: &str,
    tags: &str,
    repo: Option<&str>,
    template: Option<&str>,
) -> NoteResult<Note> {
    create_note_at(settings, title, category, tags, repo, template, &Stamp::now())
}

fn create_note_at(
    settings: &Settings,
    title: &str,
    category: &str,
    tags: &str,
    repo: Option<&str>,
    template: Option<&str>,
    stamp: &Stamp,
) -> NoteResult<Note> {
    let repo_name = match repo {
        Some(name) => name.to_string(),
        None => settings.default_repo()?.to_string(),
    };
    let repo_folder = resolve_path(settings, &repo_name)?;

    let template_name = match template {
        Some(name) => name.to_string(),
        None => settings
            .repo_template(&repo_name)
            .unwrap_or(settings.default_template()?)
            .to_string(),
    };
    let template_path = settings.template_path(&template_name)?;
    if !template_path.exists() {
        return Err(NoteError::TemplateNotFound(template_path));
    }

    let destination_dir = repo_folder
        .join(&stamp.year)
        .join(&stamp.month)
        .join(&stamp.compact);

    let slug = slugify(title);
    let filename = format!("{}-{}.md", slug, stamp.compact);
    let note_path = destination_dir.join(&filename);

    // Same-second collision: the directory already exists, so another
    // note claimed this bucket. Return the computed path untouched.
    if destination_dir.exists() {
        debug!(path = %note_path.display(), "destination bucket exists, skipping creation");
        return Ok(Note { path: note_path });
    }

    fs::create_dir_all(&destination_dir)?;

    // Metadata values for placeholder substitution. The path token is a
    // repo-relative locator, not a filesystem path, hence '/' joins.
    let token_path = format!("/{}/{}/{}-{}", stamp.year, stamp.month, slug, stamp.compact);
    let tags_list = render_tags(tags);

    let substitutions = [
        ("templatePath", token_path.as_str()),
        ("templateDate", stamp.compact.as_str()),
        ("templateTitle", title),
        ("templateCleanTitle", slug.as_str()),
        ("templateCategory", category),
        ("templateTags", tags_list.as_str()),
    ];

    let mut content = fs::read_to_string(&template_path)?;
    for (token, value) in substitutions {
        content = content.replace(token, value);
    }
    fs::write(&note_path, content)?;

    debug!(path = %note_path.display(), repo = %repo_name, "created note");
    Ok(Note { path: note_path })
}

/// Lowercase the title and replace spaces with hyphens
fn slugify(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}

/// Render a comma-separated tags string as a bracketed list of
/// single-quoted scalars: "some, tags" → ['some', 'tags']
fn render_tags(tags: &str) -> String {
    let items: Vec<String> = tags.split(", ").map(|t| format!("'{}'", t)).collect();
    format!("[{}]", items.join(", "))
}

/// Import every file under a source folder into a repository
///
/// Each file gets its own fresh timestamp and destination bucket, and is
/// copied byte-for-byte with no placeholder substitution; imported files
/// are opaque content, not templated notes. The destination name is the
/// lowercased, hyphenated original filename plus "-<timestamp>.md".
///
/// A pre-existing destination bucket is skipped without overwriting, so
/// the pass sleeps one second between files to keep each file in its own
/// second-resolution bucket.
pub fn bulk_import(
    settings: &Settings,
    source_folder: &Path,
    repo: Option<&str>,
) -> NoteResult<Vec<ImportRecord>> {
    let repo_name = match repo {
        Some(name) => name.to_string(),
        None => settings.default_repo()?.to_string(),
    };
    let repo_folder = resolve_path(settings, &repo_name)?;

    let mut records = Vec::new();
    for entry in walkdir::WalkDir::new(source_folder) {
        let entry = entry.map_err(|e| match e.into_io_error() {
            Some(io) => NoteError::Io(io),
            None => NoteError::Io(std::io::Error::other("walk error")),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let stamp = Stamp::now();
        let destination_dir = repo_folder
            .join(&stamp.year)
            .join(&stamp.month)
            .join(&stamp.compact);

        let clean_name = slugify(&entry.file_name().to_string_lossy());
        let new_path = destination_dir.join(format!("{}-{}.md", clean_name, stamp.compact));

        if !destination_dir.exists() {
            fs::create_dir_all(&destination_dir)?;
            fs::copy(entry.path(), &new_path)?;
            records.push(ImportRecord {
                original_path: entry.path().to_path_buf(),
                new_path,
            });
        } else {
            debug!(path = %new_path.display(), "destination bucket exists, file skipped");
        }

        // Keep the next file out of this file's second bucket.
        std::thread::sleep(std::time::Duration::from_secs(1));
    }

    debug!(count = records.len(), repo = %repo_name, "bulk import finished");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::MetaValue;
    use crate::settings::generate_env;
    use tempfile::TempDir;

    fn bootstrapped() -> (TempDir, Settings) {
        let temp = TempDir::new().unwrap();
        let settings = generate_env(temp.path()).unwrap();
        (temp, settings)
    }

    fn fixed_stamp() -> Stamp {
        Stamp {
            year: "2026".to_string(),
            month: "8".to_string(),
            compact: "20260824120000".to_string(),
        }
    }

    #[test]
    fn test_created_note_exists_at_derived_path() {
        let (temp, settings) = bootstrapped();
        let note = create_note_at(
            &settings,
            "some title",
            "some category",
            "some, tags",
            None,
            None,
            &fixed_stamp(),
        )
        .unwrap();

        assert!(note.path.exists());
        assert_eq!(
            note.path,
            temp.path()
                .join("zets")
                .join("2026")
                .join("8")
                .join("20260824120000")
                .join("some-title-20260824120000.md")
        );
    }

    #[test]
    fn test_metadata_round_trip() {
        let (_temp, settings) = bootstrapped();
        let note = create_note(
            &settings,
            "some title",
            "some category",
            "some, tags",
            None,
            None,
        )
        .unwrap();

        let metadata = note.metadata().unwrap();
        assert_eq!(
            metadata.get("title").unwrap().as_scalar().unwrap(),
            "some title"
        );
        assert_eq!(
            metadata.get("category").unwrap().as_scalar().unwrap(),
            "some category"
        );
        assert_eq!(
            metadata.get("tags").unwrap(),
            &MetaValue::List(vec!["some".to_string(), "tags".to_string()])
        );
    }

    #[test]
    fn test_no_placeholder_token_survives() {
        let (_temp, settings) = bootstrapped();
        let note = create_note(
            &settings,
            "some title",
            "some category",
            "some, tags",
            None,
            None,
        )
        .unwrap();

        let content = fs::read_to_string(&note.path).unwrap();
        for token in [
            "templatePath",
            "templateDate",
            "templateTitle",
            "templateCleanTitle",
            "templateCategory",
            "templateTags",
        ] {
            assert!(!content.contains(token), "token left behind: {}", token);
        }
    }

    #[test]
    fn test_same_second_creation_returns_existing_path_untouched() {
        let (_temp, settings) = bootstrapped();
        let stamp = fixed_stamp();

        let first = create_note_at(
            &settings, "some title", "cat", "a, b", None, None, &stamp,
        )
        .unwrap();
        let before = fs::read_to_string(&first.path).unwrap();

        // Same title, same second bucket: no error, no rewrite.
        let second = create_note_at(
            &settings, "some title", "other", "c, d", None, None, &stamp,
        )
        .unwrap();
        assert_eq!(first.path, second.path);
        assert_eq!(fs::read_to_string(&second.path).unwrap(), before);
    }

    #[test]
    fn test_notes_a_second_apart_are_distinct() {
        let (_temp, settings) = bootstrapped();

        let one = create_note(&settings, "some title", "c", "t", None, None).unwrap();
        std::thread::sleep(std::time::Duration::from_secs(1));
        let two = create_note(&settings, "some title", "c", "t", None, None).unwrap();

        assert_ne!(one.path, two.path);
        assert!(one.path.exists());
        assert!(two.path.exists());
    }

    #[test]
    fn test_unknown_repo_is_repo_not_found() {
        let (_temp, settings) = bootstrapped();
        let result = create_note(&settings, "t", "c", "", Some("missing"), None);
        assert!(matches!(result, Err(NoteError::Repo(RepoError::NotFound(_)))));
    }

    #[test]
    fn test_missing_template_file_is_template_not_found() {
        let (_temp, settings) = bootstrapped();
        fs::remove_file(settings.template_path("default").unwrap()).unwrap();

        let result = create_note(&settings, "t", "c", "", None, None);
        assert!(matches!(result, Err(NoteError::TemplateNotFound(_))));
    }

    #[test]
    fn test_bulk_import_preserves_content_verbatim() {
        let (_temp, settings) = bootstrapped();

        let source = TempDir::new().unwrap();
        let nested = source.path().join("some_folder");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("test_readme_0.md"), "some test text").unwrap();
        fs::write(source.path().join("Plain Name.txt"), "templateTitle stays").unwrap();

        let records = bulk_import(&settings, source.path(), None).unwrap();
        assert_eq!(records.len(), 2);
        for record in &records {
            assert!(record.original_path.exists());
            assert!(record.new_path.exists());
            assert_eq!(
                fs::read(&record.original_path).unwrap(),
                fs::read(&record.new_path).unwrap()
            );
        }

        // Imported filenames are lowercased and hyphenated.
        assert!(records.iter().any(|r| {
            r.new_path
                .file_name()
                .unwrap()
                .to_string_lossy()
                .starts_with("plain-name.txt-")
        }));
    }
}
