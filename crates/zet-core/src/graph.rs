// crates/zet-core/src/graph.rs - Graph Index
//
// A searchable representation of every note's metadata, across every
// registered repository. Each note becomes a node (id = path, body =
// metadata minus "links", schema = repo name); each entry in a note's
// "links" metadata list becomes an edge from that note to the linked
// path.
//
// The index is a plain JSON document at <install>/.env/zets.json. It
// does not support updates or deletions; `sync` deletes the file and
// rebuilds it from scratch, which is the right call whenever repos have
// changed in any way other than pure additions.

use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

use crate::metadata::{parse_metadata, Metadata, MetadataError};
use crate::repo::{self, RepoError};
use crate::settings::Settings;

/// Relative location of the graph index under the install root
pub const GRAPH_FILE: &str = ".env/zets.json";

/// Errors that can occur while building the graph index
#[derive(Error, Debug)]
pub enum GraphError {
    #[error(transparent)]
    Repo(#[from] RepoError),

    #[error(transparent)]
    Metadata(#[from] MetadataError),

    #[error("Failed to serialize graph index: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error writing graph index: {0}")]
    Io(#[from] std::io::Error),
}

/// One note, as a graph node
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    /// Repository the note belongs to
    pub schema: String,
    /// Full path of the note file; unique per note
    pub id: String,
    /// The note's metadata block, minus any "links" entry
    pub body: Metadata,
}

/// One link between two notes
#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    /// Repository of the note holding the link
    pub schema: String,
    /// Path of the note holding the link
    pub source: String,
    /// Path the link points at
    pub target: String,
}

/// The whole index: every node and edge from every repository
#[derive(Debug, Default, Serialize)]
pub struct GraphIndex {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// Rebuild the graph index from scratch and write it to disk
///
/// Walks every registered repository, parses each note's metadata, and
/// replaces any existing index file wholesale.
pub fn sync(settings: &Settings, install_root: &Path) -> Result<GraphIndex, GraphError> {
    let index = build(settings)?;

    let index_path = install_root.join(GRAPH_FILE);
    if index_path.exists() {
        fs::remove_file(&index_path)?;
    }
    if let Some(parent) = index_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&index_path, serde_json::to_string_pretty(&index)?)?;

    info!(
        nodes = index.nodes.len(),
        edges = index.edges.len(),
        path = %index_path.display(),
        "graph index rebuilt"
    );
    Ok(index)
}

/// Build the in-memory index without touching disk
pub fn build(settings: &Settings) -> Result<GraphIndex, GraphError> {
    let mut index = GraphIndex::default();

    for repo_name in settings.repo_names() {
        for note_path in repo::list(settings, Some(&repo_name), true)? {
            let mut metadata = parse_metadata(Path::new(&note_path))?;

            // Links become edges; the node body carries everything else.
            let links = match metadata.remove("links") {
                Some(value) => value.as_list().map(<[String]>::to_vec).unwrap_or_default(),
                None => Vec::new(),
            };

            // Edges carry the schema of the note holding the link.
            for link in links {
                index.edges.push(Edge {
                    schema: repo_name.clone(),
                    source: note_path.clone(),
                    target: link,
                });
            }

            index.nodes.push(Node {
                schema: repo_name.clone(),
                id: note_path,
                body: metadata,
            });
        }
        debug!(repo = %repo_name, "indexed repository");
    }

    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::create_note;
    use crate::settings::generate_env;
    use tempfile::TempDir;

    #[test]
    fn test_sync_indexes_every_note() {
        let temp = TempDir::new().unwrap();
        let settings = generate_env(temp.path()).unwrap();

        create_note(&settings, "first note", "cat", "a, b", None, None).unwrap();

        let index = sync(&settings, temp.path()).unwrap();
        assert_eq!(index.nodes.len(), 1);
        assert_eq!(index.nodes[0].schema, "zets");
        assert!(index.nodes[0].body.contains_key("title"));
        assert!(temp.path().join(GRAPH_FILE).exists());
    }

    #[test]
    fn test_links_become_edges_and_leave_the_body() {
        let temp = TempDir::new().unwrap();
        let settings = generate_env(temp.path()).unwrap();

        let target = create_note(&settings, "target", "cat", "t", None, None).unwrap();
        std::thread::sleep(std::time::Duration::from_secs(1));
        let source = create_note(&settings, "source", "cat", "t", None, None).unwrap();

        // Append a links entry to the source note's metadata block.
        let content = std::fs::read_to_string(&source.path).unwrap();
        let linked = content.replace(
            "tags: ",
            &format!("links: ['{}']\ntags: ", target.path.display()),
        );
        std::fs::write(&source.path, linked).unwrap();

        let index = build(&settings).unwrap();
        assert_eq!(index.edges.len(), 1);
        assert_eq!(index.edges[0].source, source.path.display().to_string());
        assert_eq!(index.edges[0].target, target.path.display().to_string());
        assert_eq!(index.edges[0].schema, "zets");

        // The links entry must not appear in any node body.
        assert!(index.nodes.iter().all(|n| !n.body.contains_key("links")));
    }

    #[test]
    fn test_cross_repo_link_keeps_the_source_schema() {
        let temp = TempDir::new().unwrap();
        let mut settings = generate_env(temp.path()).unwrap();
        crate::repo::add_repo(&mut settings, temp.path(), "other", None, None).unwrap();

        let target = create_note(&settings, "target", "cat", "t", Some("other"), None).unwrap();
        let source = create_note(&settings, "source", "cat", "t", None, None).unwrap();

        let content = std::fs::read_to_string(&source.path).unwrap();
        let linked = content.replace(
            "tags: ",
            &format!("links: ['{}']\ntags: ", target.path.display()),
        );
        std::fs::write(&source.path, linked).unwrap();

        // The edge belongs to the repo of the note holding the link,
        // even though the target lives in a different repo.
        let index = build(&settings).unwrap();
        assert_eq!(index.edges.len(), 1);
        assert_eq!(index.edges[0].schema, "zets");
        assert_eq!(index.edges[0].target, target.path.display().to_string());
    }

    #[test]
    fn test_sync_replaces_previous_index() {
        let temp = TempDir::new().unwrap();
        let settings = generate_env(temp.path()).unwrap();
        create_note(&settings, "only", "cat", "t", None, None).unwrap();

        sync(&settings, temp.path()).unwrap();
        let first = std::fs::read_to_string(temp.path().join(GRAPH_FILE)).unwrap();

        std::thread::sleep(std::time::Duration::from_secs(1));
        create_note(&settings, "another", "cat", "t", None, None).unwrap();
        let index = sync(&settings, temp.path()).unwrap();
        assert_eq!(index.nodes.len(), 2);

        let second = std::fs::read_to_string(temp.path().join(GRAPH_FILE)).unwrap();
        assert_ne!(first, second);
    }
}
