// crates/zet-cli/src/commands/git.rs - Version-control commands
//
// Thin dispatch over the VCS bridge: resolve the repo folder, run the
// corresponding git command there, echo whatever git printed. A failing
// command propagates with its stderr and exits the CLI non-zero.

use anyhow::Result;

use crate::context::Context;
use crate::services::git::GitOutput;
use crate::services::GitService;

/// Which git operation to run against a repository folder
pub enum GitAction<'a> {
    Init,
    Add,
    Commit { message: &'a str },
    Push,
    Pull,
}

pub fn handle(ctx: &Context, action: GitAction, zet_repo: Option<&str>) -> Result<()> {
    let folder = ctx.repo_folder(zet_repo)?;

    let output = match action {
        GitAction::Init => GitService::init(&folder)?,
        GitAction::Add => GitService::add(&folder)?,
        GitAction::Commit { message } => GitService::commit(&folder, message)?,
        GitAction::Push => GitService::push(&folder)?,
        GitAction::Pull => GitService::pull(&folder)?,
    };

    echo(output);
    Ok(())
}

/// Print git's captured output without reformatting it
fn echo(output: GitOutput) {
    if !output.stdout.is_empty() {
        print!("{}", output.stdout);
    }
    if !output.stderr.is_empty() {
        eprint!("{}", output.stderr);
    }
}
