// crates/zet-cli/src/services/git.rs - VCS Bridge
//
// Pass-through to the `git` binary with the working directory set to a
// repository folder. Every call is a single blocking process invocation:
// no retries, no timeouts. Captured stdout/stderr are returned to the
// caller; a non-zero exit is a typed error carrying the command's
// stderr so the CLI boundary can report it verbatim.

use std::path::Path;
use std::process::Command;
use thiserror::Error;
use tracing::debug;

/// Errors from invoking the external git binary
#[derive(Error, Debug)]
pub enum GitError {
    /// The git binary could not be launched at all
    #[error("failed to launch git {command:?}: {source}")]
    Launch {
        command: String,
        source: std::io::Error,
    },

    /// git ran but exited non-zero
    #[error("git {command} exited with {status}: {stderr}")]
    Failed {
        command: String,
        status: String,
        stderr: String,
    },
}

/// Captured output of a completed git command
#[derive(Debug, Clone)]
pub struct GitOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Wraps git operations against a repository folder
pub struct GitService;

impl GitService {
    /// `git init`
    pub fn init(folder: &Path) -> Result<GitOutput, GitError> {
        Self::run(folder, &["init"])
    }

    /// `git add .`
    pub fn add(folder: &Path) -> Result<GitOutput, GitError> {
        Self::run(folder, &["add", "."])
    }

    /// `git commit -m <message>`
    pub fn commit(folder: &Path, message: &str) -> Result<GitOutput, GitError> {
        Self::run(folder, &["commit", "-m", message])
    }

    /// `git push`
    pub fn push(folder: &Path) -> Result<GitOutput, GitError> {
        Self::run(folder, &["push"])
    }

    /// `git pull`
    pub fn pull(folder: &Path) -> Result<GitOutput, GitError> {
        Self::run(folder, &["pull"])
    }

    fn run(folder: &Path, args: &[&str]) -> Result<GitOutput, GitError> {
        let command = format!("git {}", args.join(" "));
        debug!(%command, folder = %folder.display(), "running vcs command");

        let output = Command::new("git")
            .args(args)
            .current_dir(folder)
            .output()
            .map_err(|source| GitError::Launch {
                command: command.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(GitError::Failed {
                command,
                status: output.status.to_string(),
                stderr,
            });
        }

        Ok(GitOutput { stdout, stderr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_reports_initialized_repository() {
        let temp = TempDir::new().unwrap();
        let output = GitService::init(temp.path()).unwrap();
        assert!(output.stdout.contains("Initialized empty Git repository"));
        assert!(temp.path().join(".git").exists());
    }

    #[test]
    fn test_add_in_initialized_repo_succeeds_quietly() {
        let temp = TempDir::new().unwrap();
        GitService::init(temp.path()).unwrap();
        std::fs::write(temp.path().join("note.md"), "content").unwrap();

        let output = GitService::add(temp.path()).unwrap();
        assert_eq!(output.stdout, "");
    }

    #[test]
    fn test_failed_command_carries_stderr() {
        let temp = TempDir::new().unwrap();
        // No repo here, so `git add` fails.
        let result = GitService::add(temp.path());
        match result {
            Err(GitError::Failed { stderr, .. }) => assert!(!stderr.is_empty()),
            other => panic!("expected Failed, got {:?}", other.map(|o| o.stdout)),
        }
    }
}
