// crates/zet-cli/src/services/mod.rs - Service layer modules
pub mod editor;
pub mod git;

pub use editor::EditorService;
pub use git::GitService;
