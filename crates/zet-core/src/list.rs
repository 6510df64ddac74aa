// crates/zet-core/src/list.rs - Note Lister
//
// Recursive walk of a repository tree. Returns every file under the
// tree exactly once, as bare filenames or full paths. Ordering is
// whatever the filesystem traversal yields; callers that need a stable
// order sort the result themselves.

use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

/// Errors that can occur while listing notes
#[derive(Error, Debug)]
pub enum ListError {
    #[error("I/O error walking {folder}: {source}")]
    Walk {
        folder: String,
        source: walkdir::Error,
    },
}

/// List all files under a repository folder
///
/// With `full_path` set, entries are the files' full paths; otherwise
/// they are bare filenames with no path separators. Directories are not
/// included. A missing or unreadable folder is an error, not an empty
/// listing.
pub fn list_notes(folder: &Path, full_path: bool) -> Result<Vec<String>, ListError> {
    let mut notes = Vec::new();

    for entry in WalkDir::new(folder) {
        let entry = entry.map_err(|e| ListError::Walk {
            folder: folder.display().to_string(),
            source: e,
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        if full_path {
            notes.push(entry.path().display().to_string());
        } else {
            notes.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    Ok(notes)
}
