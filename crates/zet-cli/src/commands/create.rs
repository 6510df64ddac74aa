// crates/zet-cli/src/commands/create.rs - Note creation command

use anyhow::Result;
use zet_core::note;

use crate::context::Context;

/// Create a note and print its path
///
/// The printed path is the note's computed location whether or not this
/// call created it: a same-second collision returns the pre-existing
/// path without rewriting the file.
pub fn handle(
    ctx: &Context,
    title: &str,
    category: &str,
    tags: &str,
    zet_repo: Option<&str>,
    template: Option<&str>,
) -> Result<()> {
    let created = note::create_note(&ctx.settings, title, category, tags, zet_repo, template)?;
    println!("{}", created.path.display());
    Ok(())
}
