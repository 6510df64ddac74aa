// crates/zet-cli/src/commands/mod.rs - Command handler modules
//
// One module per command family:
// - create: note creation from templates
// - list: repository listing
// - repo: repository registration
// - bulk: bulk import of existing files
// - git: version-control pass-through (init, add, commit, push, pull)
// - editor: open a note in the configured editor
// - sync: graph index rebuild

pub mod bulk;
pub mod create;
pub mod editor;
pub mod git;
pub mod list;
pub mod repo;
pub mod sync;
