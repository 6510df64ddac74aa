// crates/zet-core/src/lib.rs - Core library for Zettelkasten management
//
// This crate contains all the domain logic for the zet CLI tool:
// settings storage, repository registration, note creation, listing,
// metadata parsing, and the graph index built from note links.
//
// DESIGN PRINCIPLES:
// - Explicit configuration: every component receives the loaded Settings
//   document as an argument. There is no global, module-level settings
//   singleton; the CLI loads settings once per invocation and passes
//   them down.
// - Typed errors: each module defines its own thiserror enum so callers
//   can match on failure kinds instead of string-matching messages.
// - Fail fast: no retries, no recovery. Filesystem and parse errors
//   propagate straight to the caller.

pub mod graph;
pub mod list;
pub mod metadata;
pub mod note;
pub mod repo;
pub mod settings;
