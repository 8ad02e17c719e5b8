//! Repository tree materialization.
//!
//! `build_tree` turns the upstream flat listing into the nested forest shown
//! in the sidebar; `flatten` and `count` walk a built forest.

pub mod builder;

pub use builder::{TreeError, build_tree};

use crate::models::{Node, NodeType};

/// Depth-first, pre-order `(path, type)` pairs.
pub fn flatten(nodes: &[Node]) -> Vec<(String, NodeType)> {
    let mut out = Vec::new();
    fn walk(nodes: &[Node], out: &mut Vec<(String, NodeType)>) {
        for node in nodes {
            out.push((node.path.clone(), node.node_type));
            walk(node.children(), out);
        }
    }
    walk(nodes, &mut out);
    out
}

/// `(files, folders)` across the whole forest.
pub fn count(nodes: &[Node]) -> (usize, usize) {
    nodes.iter().fold((0, 0), |(files, folders), node| {
        let (f, d) = count(node.children());
        if node.is_folder() {
            (files + f, folders + d + 1)
        } else {
            (files + f + 1, folders + d)
        }
    })
}
