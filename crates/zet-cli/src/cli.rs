use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "zet")]
#[command(about = "Zettelkasten command line tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Create a new note from a template
    Create {
        /// Title of the note (also used for the filename slug)
        #[arg(short, long)]
        title: String,

        /// Category recorded in the note's metadata block
        #[arg(short, long, default_value = "")]
        category: String,

        /// Comma-separated tags, e.g. "some, tags"
        #[arg(long, default_value = "")]
        tags: String,

        /// Repository to create the note in (defaults to the configured default repo)
        #[arg(short = 'r', long = "zet-repo")]
        zet_repo: Option<String>,

        /// Template name to use instead of the repo's configured template
        #[arg(long)]
        template: Option<String>,
    },

    /// List notes in one repository, or across all of them
    List {
        /// Repository to list (omit to list every registered repo)
        #[arg(short = 'r', long = "zet-repo")]
        zet_repo: Option<String>,

        /// Show full file paths instead of bare filenames
        #[arg(long = "full-path")]
        full_path: bool,

        /// Output as JSON for machine processing
        #[arg(long)]
        json: bool,
    },

    /// Create and register a new note repository
    AddRepo {
        /// Repository name (spaces become underscores)
        name: String,

        /// Parent folder for the repo (defaults to the install root)
        #[arg(short, long)]
        folder: Option<PathBuf>,

        /// Default template for notes created in this repo
        #[arg(long)]
        template: Option<String>,
    },

    /// Import every file under a folder into a repository
    Bulk {
        /// Folder of pre-existing files to import
        #[arg(short, long)]
        folder: PathBuf,

        /// Repository to import into
        #[arg(short = 'r', long = "zet-repo")]
        zet_repo: Option<String>,
    },

    /// Run `git init` in a repository folder
    Init {
        /// Repository name (defaults to the configured default repo)
        zet_repo: Option<String>,
    },

    /// Run `git add .` in a repository folder
    Add { zet_repo: Option<String> },

    /// Run `git commit -m <message>` in a repository folder
    Commit {
        /// Commit message
        #[arg(short, long)]
        message: String,

        zet_repo: Option<String>,
    },

    /// Run `git push` in a repository folder
    Push { zet_repo: Option<String> },

    /// Run `git pull` in a repository folder
    Pull { zet_repo: Option<String> },

    /// Open a note in the configured editor
    Editor {
        /// Path of the note to open
        path: PathBuf,
    },

    /// Rebuild the graph index from every registered repository
    Sync,
}
