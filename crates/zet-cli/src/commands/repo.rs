// crates/zet-cli/src/commands/repo.rs - Repository registration command

use anyhow::Result;
use std::path::Path;
use zet_core::repo;

use crate::context::Context;

/// Create a repo folder and register it in the settings document
pub fn handle(
    ctx: &mut Context,
    name: &str,
    folder: Option<&Path>,
    template: Option<&str>,
) -> Result<()> {
    let install_root = ctx.install_root().to_path_buf();
    let created = repo::add_repo(&mut ctx.settings, &install_root, name, folder, template)?;
    println!("Registered repo '{}' at {}", repo::sanitize_name(name), created.display());
    Ok(())
}
