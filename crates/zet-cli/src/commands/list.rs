// crates/zet-cli/src/commands/list.rs - Repository listing command

use anyhow::Result;
use zet_core::repo;

use crate::context::Context;

/// List notes, one per line, or as a JSON array with --json
pub fn handle(ctx: &Context, zet_repo: Option<&str>, full_path: bool, json: bool) -> Result<()> {
    let notes = repo::list(&ctx.settings, zet_repo, full_path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&notes)?);
    } else {
        for note in notes {
            println!("{}", note);
        }
    }

    Ok(())
}
