// crates/zet-cli/src/services/editor.rs - Editor Integration Service
//
// Launches the user's text editor on a note path and blocks until it
// exits. Selection order: the EDITOR environment variable, then the
// command configured under defaults.editor.command in the settings
// document.

use anyhow::Result;
use std::env;
use std::path::Path;
use std::process::Command;

/// Handles text editor invocation
pub struct EditorService;

impl EditorService {
    /// Pick the editor command: `$EDITOR`, else the configured fallback
    pub fn editor_command(configured: &str) -> String {
        env::var("EDITOR").unwrap_or_else(|_| configured.to_string())
    }

    /// Open a file in the editor, blocking until the editor exits
    ///
    /// The path is the sole argument. Both a launch failure and a
    /// non-zero editor exit are errors, so the CLI exits non-zero
    /// whenever the editor did.
    pub fn open_file(path: &Path, configured: &str) -> Result<()> {
        let editor = Self::editor_command(configured);

        let status = Command::new(&editor).arg(path).status().map_err(|e| {
            anyhow::anyhow!(
                "failed to launch editor '{}': {}\nset EDITOR or defaults.editor.command",
                editor,
                e
            )
        })?;

        if !status.success() {
            anyhow::bail!("editor '{}' exited with {:?}", editor, status.code());
        }

        Ok(())
    }
}
