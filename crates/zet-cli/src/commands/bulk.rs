// crates/zet-cli/src/commands/bulk.rs - Bulk import command

use anyhow::Result;
use std::path::Path;
use zet_core::note;

use crate::context::Context;

/// Import every file under a folder, printing one old → new line per copy
///
/// Imports run at one file per second: each file needs its own
/// second-resolution destination bucket, and a file whose bucket already
/// exists is skipped rather than overwritten.
pub fn handle(ctx: &Context, folder: &Path, zet_repo: Option<&str>) -> Result<()> {
    let records = note::bulk_import(&ctx.settings, folder, zet_repo)?;

    for record in &records {
        println!(
            "{} -> {}",
            record.original_path.display(),
            record.new_path.display()
        );
    }
    println!("Imported {} file(s)", records.len());

    Ok(())
}
