//! Tree DTOs.
//!
//! - `Entry`: One record of the upstream flat tree listing (input)
//! - `Node`: Recursive tree node for the file tree sidebar (output)
//! - `TreeResponse`: Node forest plus listing metadata

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl Entry {
    pub fn new(path: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    pub fn blob(path: impl Into<String>) -> Self {
        Self::new(path, EntryKind::Blob)
    }

    pub fn tree(path: impl Into<String>) -> Self {
        Self::new(path, EntryKind::Tree)
    }
}

/// Upstream object kind. Only `blob` is a file; submodules (`commit`) and
/// anything unrecognised are treated as directories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Blob,
    Tree,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    File,
    Folder,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
}

impl Node {
    pub fn is_folder(&self) -> bool {
        self.node_type == NodeType::Folder
    }

    /// Children of a folder; empty for files.
    pub fn children(&self) -> &[Node] {
        self.children.as_deref().unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeResponse {
    pub owner: String,
    pub repo: String,
    pub branch: String,
    pub truncated: bool,
    pub file_count: usize,
    pub folder_count: usize,
    pub nodes: Vec<Node>,
}
