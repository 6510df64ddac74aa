// crates/zet-core/src/metadata.rs - Metadata Parser
//
// Every note starts with a metadata block bounded by a repeated
// delimiter line (commonly "+++"). Inside the block, each line is a
// key/value pair split on the first ": ":
//
//   +++
//   title: 'some title'
//   tags: ['some', 'tags']
//   +++
//
// GRAMMAR (line-oriented):
//   block     = delimiter NL line* delimiter NL
//   line      = key ": " value NL
//   value     = "'" scalar "'" | "[" ( "'" scalar "'" ),* "]"
//
// Multi-line values are not supported. A line inside the block that
// does not match the grammar is a typed error rather than a panic.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while parsing a note's metadata block
#[derive(Error, Debug)]
pub enum MetadataError {
    /// The note path does not exist on disk
    #[error("Note does not exist: {0}")]
    NoteNotFound(PathBuf),

    /// A line inside the metadata block does not match the grammar
    #[error("Malformed metadata line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("I/O error reading note: {0}")]
    Io(#[from] std::io::Error),
}

/// A single metadata value: quoted scalar or bracketed list of scalars
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MetaValue {
    Scalar(String),
    List(Vec<String>),
}

impl MetaValue {
    /// The value as a scalar, if it is one
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            Self::List(_) => None,
        }
    }

    /// The value as a list, if it is one
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Scalar(_) => None,
            Self::List(items) => Some(items),
        }
    }
}

/// Parsed metadata block: key → value, in key order
pub type Metadata = BTreeMap<String, MetaValue>;

/// Parse the metadata block at the top of a note file
///
/// Reads the first line as the delimiter, then scans key/value lines
/// until the delimiter reappears. Content after the closing delimiter
/// (the markdown body) is ignored. A file whose delimiter never
/// reappears yields whatever pairs were scanned before end of input.
pub fn parse_metadata(note_path: &Path) -> Result<Metadata, MetadataError> {
    if !note_path.exists() {
        return Err(MetadataError::NoteNotFound(note_path.to_path_buf()));
    }

    let content = fs::read_to_string(note_path)?;
    parse_block(&content)
}

/// Parse a metadata block from in-memory note content
pub fn parse_block(content: &str) -> Result<Metadata, MetadataError> {
    let mut lines = content.lines().enumerate();

    let delimiter = match lines.next() {
        Some((_, first)) => first.trim_end().to_string(),
        None => return Ok(Metadata::new()),
    };

    let mut metadata = Metadata::new();
    for (index, line) in lines {
        if line.trim_end() == delimiter {
            break;
        }

        let (key, raw_value) =
            line.split_once(": ")
                .ok_or_else(|| MetadataError::MalformedLine {
                    line: index + 1,
                    content: line.to_string(),
                })?;

        let value = parse_value(raw_value.trim_end()).ok_or_else(|| {
            MetadataError::MalformedLine {
                line: index + 1,
                content: line.to_string(),
            }
        })?;

        metadata.insert(key.trim().to_string(), value);
    }

    Ok(metadata)
}

/// Parse a raw value: bracketed list when a bracket is present,
/// single-quoted scalar otherwise.
fn parse_value(raw: &str) -> Option<MetaValue> {
    if raw.contains('[') {
        parse_list(raw).map(MetaValue::List)
    } else {
        quoted(raw).map(|s| MetaValue::Scalar(s.to_string()))
    }
}

/// Extract the substring between the first pair of single quotes
fn quoted(raw: &str) -> Option<&str> {
    let start = raw.find('\'')?;
    let rest = &raw[start + 1..];
    let end = rest.find('\'')?;
    Some(&rest[..end])
}

/// Scan a bracketed, comma-separated list of single-quoted scalars
///
/// Accepts trailing commas and arbitrary whitespace between items:
/// `['some', 'tags',]` → ["some", "tags"]. Unquoted or unterminated
/// items reject the whole value.
fn parse_list(raw: &str) -> Option<Vec<String>> {
    let open = raw.find('[')?;
    let close = raw.rfind(']')?;
    if close < open {
        return None;
    }

    let inner = &raw[open + 1..close];
    let mut items = Vec::new();
    for piece in inner.split(',') {
        let piece = piece.trim();
        if piece.is_empty() {
            continue; // trailing comma
        }
        if !(piece.starts_with('\'') && piece.ends_with('\'') && piece.len() >= 2) {
            return None;
        }
        items.push(piece[1..piece.len() - 1].to_string());
    }
    Some(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const NOTE: &str = "+++
path: '/2026/8/some-title-20260824120000'
date: '20260824120000'
title: 'some title'
category: 'some category'
tags: ['some', 'tags']
+++

# some title

Body text with a colon: not metadata.
";

    #[test]
    fn test_parses_scalars_and_lists() {
        let metadata = parse_block(NOTE).unwrap();
        assert_eq!(
            metadata.get("title").unwrap().as_scalar().unwrap(),
            "some title"
        );
        assert_eq!(
            metadata.get("category").unwrap().as_scalar().unwrap(),
            "some category"
        );
        assert_eq!(
            metadata.get("tags").unwrap(),
            &MetaValue::List(vec!["some".to_string(), "tags".to_string()])
        );
    }

    #[test]
    fn test_body_after_closing_delimiter_is_ignored() {
        let metadata = parse_block(NOTE).unwrap();
        assert_eq!(metadata.len(), 5);
        assert!(!metadata.contains_key("Body text with a colon"));
    }

    #[test]
    fn test_trailing_comma_in_list() {
        let metadata = parse_block("+++\ntags: ['a', 'b',]\n+++\n").unwrap();
        assert_eq!(
            metadata.get("tags").unwrap(),
            &MetaValue::List(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_missing_note_is_not_found() {
        let temp = TempDir::new().unwrap();
        let result = parse_metadata(&temp.path().join("absent.md"));
        assert!(matches!(result, Err(MetadataError::NoteNotFound(_))));
    }

    #[test]
    fn test_malformed_line_is_a_typed_error() {
        let result = parse_block("+++\nno separator here\n+++\n");
        assert!(matches!(
            result,
            Err(MetadataError::MalformedLine { line: 2, .. })
        ));
    }

    #[test]
    fn test_unquoted_scalar_is_malformed() {
        let result = parse_block("+++\ntitle: bare words\n+++\n");
        assert!(matches!(result, Err(MetadataError::MalformedLine { .. })));
    }

    #[test]
    fn test_parse_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("note.md");
        std::fs::write(&path, NOTE).unwrap();
        let metadata = parse_metadata(&path).unwrap();
        assert_eq!(
            metadata.get("date").unwrap().as_scalar().unwrap(),
            "20260824120000"
        );
    }
}
