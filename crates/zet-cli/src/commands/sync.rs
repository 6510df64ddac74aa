// crates/zet-cli/src/commands/sync.rs - Graph index rebuild

use anyhow::Result;
use zet_core::graph;

use crate::context::Context;

/// Rebuild the graph index from scratch across every registered repo
pub fn handle(ctx: &Context) -> Result<()> {
    let index = graph::sync(&ctx.settings, ctx.install_root())?;
    println!(
        "Indexed {} note(s), {} link(s)",
        index.nodes.len(),
        index.edges.len()
    );
    Ok(())
}
