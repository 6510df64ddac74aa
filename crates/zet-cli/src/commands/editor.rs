// crates/zet-cli/src/commands/editor.rs - Open a note in the editor

use anyhow::Result;
use std::path::Path;

use crate::context::Context;
use crate::services::EditorService;

/// Open the given note path in the configured editor, blocking until
/// the editor exits
pub fn handle(ctx: &Context, path: &Path) -> Result<()> {
    let configured = ctx.settings.editor_command()?;
    EditorService::open_file(path, configured)
}
