// crates/zet-cli/src/main.rs - CLI application entry point
//
// Orchestration only: parse arguments, build the application context
// (install root + settings document, bootstrapped on first run), and
// dispatch to the command handlers. Every failure propagates here as an
// anyhow error, is printed, and exits the process non-zero.
//
// DESIGN PRINCIPLES:
// - Context is passed explicitly; no global settings state
// - Each command family lives in its own module under commands/
// - External collaborators (git, the editor) sit behind services/

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod context;
mod services;

use cli::{Cli, Commands};
use commands::git::GitAction;
use context::Context;

fn main() -> Result<()> {
    // Log level is controlled by ZET_LOG (e.g. ZET_LOG=debug); silent by
    // default so command output stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("ZET_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut ctx = Context::new()?;

    match cli.command {
        Commands::Create {
            title,
            category,
            tags,
            zet_repo,
            template,
        } => commands::create::handle(
            &ctx,
            &title,
            &category,
            &tags,
            zet_repo.as_deref(),
            template.as_deref(),
        ),
        Commands::List {
            zet_repo,
            full_path,
            json,
        } => commands::list::handle(&ctx, zet_repo.as_deref(), full_path, json),
        Commands::AddRepo {
            name,
            folder,
            template,
        } => commands::repo::handle(&mut ctx, &name, folder.as_deref(), template.as_deref()),
        Commands::Bulk { folder, zet_repo } => {
            commands::bulk::handle(&ctx, &folder, zet_repo.as_deref())
        }
        Commands::Init { zet_repo } => {
            commands::git::handle(&ctx, GitAction::Init, zet_repo.as_deref())
        }
        Commands::Add { zet_repo } => {
            commands::git::handle(&ctx, GitAction::Add, zet_repo.as_deref())
        }
        Commands::Commit { message, zet_repo } => commands::git::handle(
            &ctx,
            GitAction::Commit { message: &message },
            zet_repo.as_deref(),
        ),
        Commands::Push { zet_repo } => {
            commands::git::handle(&ctx, GitAction::Push, zet_repo.as_deref())
        }
        Commands::Pull { zet_repo } => {
            commands::git::handle(&ctx, GitAction::Pull, zet_repo.as_deref())
        }
        Commands::Editor { path } => commands::editor::handle(&ctx, &path),
        Commands::Sync => commands::sync::handle(&ctx),
    }
}
