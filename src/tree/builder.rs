//! Flat path list → hierarchical node forest.
//!
//! Nodes are allocated in an arena and addressed by index; a path-keyed
//! index maps every materialized path to its slot so repeated references to
//! the same directory reuse the first node created for it. Sibling order is
//! the order of first appearance in the input.

use std::collections::HashMap;

use thiserror::Error;

use crate::models::{Entry, EntryKind, Node, NodeType};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Invalid tree path {path:?}: {reason}")]
    InvalidPath { path: String, reason: &'static str },
}

struct Slot {
    name: String,
    path: String,
    node_type: NodeType,
    children: Vec<usize>,
}

pub fn build_tree(entries: &[Entry]) -> Result<Vec<Node>, TreeError> {
    let mut arena: Vec<Slot> = Vec::new();
    let mut roots: Vec<usize> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        let segments = split_path(&entry.path)?;
        let last = segments.len() - 1;
        let mut parent: Option<usize> = None;
        let mut cumulative = String::with_capacity(entry.path.len());

        for (i, segment) in segments.iter().enumerate() {
            if i > 0 {
                cumulative.push('/');
            }
            cumulative.push_str(segment);

            let is_file = i == last && entry.kind == EntryKind::Blob;

            let id = match index.get(&cumulative) {
                Some(&id) => {
                    // A file that turns out to have descendants, or is also
                    // tagged as a directory, becomes a folder.
                    if !is_file {
                        arena[id].node_type = NodeType::Folder;
                    }
                    id
                }
                None => {
                    let id = arena.len();
                    arena.push(Slot {
                        name: (*segment).to_string(),
                        path: cumulative.clone(),
                        node_type: if is_file {
                            NodeType::File
                        } else {
                            NodeType::Folder
                        },
                        children: Vec::new(),
                    });
                    index.insert(cumulative.clone(), id);
                    match parent {
                        Some(p) => arena[p].children.push(id),
                        None => roots.push(id),
                    }
                    id
                }
            };

            parent = Some(id);
        }
    }

    Ok(roots.iter().map(|&id| materialize(&arena, id)).collect())
}

fn split_path(path: &str) -> Result<Vec<&str>, TreeError> {
    let invalid = |reason: &'static str| TreeError::InvalidPath {
        path: path.to_string(),
        reason,
    };

    if path.is_empty() {
        return Err(invalid("path is empty"));
    }
    if path.starts_with('/') {
        return Err(invalid("leading slash"));
    }
    if path.ends_with('/') {
        return Err(invalid("trailing slash"));
    }

    let segments: Vec<&str> = path.split('/').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(invalid("empty path segment"));
    }
    Ok(segments)
}

fn materialize(arena: &[Slot], id: usize) -> Node {
    let slot = &arena[id];
    let children = match slot.node_type {
        NodeType::Folder => Some(
            slot.children
                .iter()
                .map(|&child| materialize(arena, child))
                .collect(),
        ),
        NodeType::File => None,
    };

    Node {
        name: slot.name.clone(),
        path: slot.path.clone(),
        node_type: slot.node_type,
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::flatten;

    fn file(path: &str) -> Node {
        Node {
            name: path.rsplit('/').next().unwrap().to_string(),
            path: path.to_string(),
            node_type: NodeType::File,
            children: None,
        }
    }

    fn folder(path: &str, children: Vec<Node>) -> Node {
        Node {
            name: path.rsplit('/').next().unwrap().to_string(),
            path: path.to_string(),
            node_type: NodeType::Folder,
            children: Some(children),
        }
    }

    #[test]
    fn single_top_level_file() {
        let nodes = build_tree(&[Entry::blob("README.md")]).unwrap();
        assert_eq!(nodes, vec![file("README.md")]);
    }

    #[test]
    fn file_implies_parent_folder() {
        let nodes = build_tree(&[Entry::blob("src/app.ts")]).unwrap();
        assert_eq!(nodes, vec![folder("src", vec![file("src/app.ts")])]);
    }

    #[test]
    fn siblings_keep_first_seen_order() {
        let nodes = build_tree(&[Entry::blob("src/app.ts"), Entry::blob("src/utils.ts")]).unwrap();
        assert_eq!(
            nodes,
            vec![folder("src", vec![file("src/app.ts"), file("src/utils.ts")])]
        );
    }

    #[test]
    fn explicit_tree_entry_is_not_duplicated() {
        let expected = vec![folder("lib", vec![file("lib/x.ts")])];

        let tree_first = build_tree(&[Entry::tree("lib"), Entry::blob("lib/x.ts")]).unwrap();
        assert_eq!(tree_first, expected);

        let blob_first = build_tree(&[Entry::blob("lib/x.ts"), Entry::tree("lib")]).unwrap();
        assert_eq!(blob_first, expected);
    }

    #[test]
    fn nested_and_shallow_children_share_parent() {
        let nodes = build_tree(&[Entry::blob("a/b/c.txt"), Entry::blob("a/d.txt")]).unwrap();
        assert_eq!(
            nodes,
            vec![folder(
                "a",
                vec![folder("a/b", vec![file("a/b/c.txt")]), file("a/d.txt")]
            )]
        );
    }

    #[test]
    fn empty_input_yields_empty_forest() {
        assert!(build_tree(&[]).unwrap().is_empty());
    }

    #[test]
    fn interleaved_siblings_are_grouped() {
        let nodes = build_tree(&[
            Entry::blob("src/main.rs"),
            Entry::blob("Cargo.toml"),
            Entry::blob("src/lib.rs"),
            Entry::blob("docs/guide.md"),
            Entry::blob("src/bin/tool.rs"),
        ])
        .unwrap();

        assert_eq!(
            nodes,
            vec![
                folder(
                    "src",
                    vec![
                        file("src/main.rs"),
                        file("src/lib.rs"),
                        folder("src/bin", vec![file("src/bin/tool.rs")]),
                    ]
                ),
                file("Cargo.toml"),
                folder("docs", vec![file("docs/guide.md")]),
            ]
        );
    }

    #[test]
    fn explicit_empty_directory_is_folder() {
        let nodes = build_tree(&[Entry::tree("empty")]).unwrap();
        assert_eq!(nodes, vec![folder("empty", vec![])]);
    }

    #[test]
    fn submodule_entry_is_folder() {
        let nodes = build_tree(&[Entry::new("vendor/dep", EntryKind::Other)]).unwrap();
        assert_eq!(nodes, vec![folder("vendor", vec![folder("vendor/dep", vec![])])]);
    }

    #[test]
    fn duplicate_blob_is_materialized_once() {
        let nodes = build_tree(&[Entry::blob("a.txt"), Entry::blob("a.txt")]).unwrap();
        assert_eq!(nodes, vec![file("a.txt")]);
    }

    #[test]
    fn file_extended_by_later_entry_becomes_folder() {
        let nodes = build_tree(&[Entry::blob("x"), Entry::blob("x/y")]).unwrap();
        assert_eq!(nodes, vec![folder("x", vec![file("x/y")])]);
    }

    #[test]
    fn blob_matching_existing_folder_keeps_folder() {
        let nodes = build_tree(&[Entry::blob("x/y"), Entry::blob("x")]).unwrap();
        assert_eq!(nodes, vec![folder("x", vec![file("x/y")])]);
    }

    #[test]
    fn file_retagged_as_tree_becomes_folder() {
        let nodes = build_tree(&[Entry::blob("x"), Entry::tree("x")]).unwrap();
        assert_eq!(nodes, vec![folder("x", vec![])]);
    }

    #[test]
    fn rejects_empty_segment() {
        let err = build_tree(&[Entry::blob("a//b")]).unwrap_err();
        assert_eq!(
            err,
            TreeError::InvalidPath {
                path: "a//b".to_string(),
                reason: "empty path segment",
            }
        );
    }

    #[test]
    fn rejects_malformed_paths() {
        for path in ["", "/a", "a/", "/"] {
            let result = build_tree(&[Entry::blob("ok.txt"), Entry::blob(path)]);
            assert!(
                matches!(result, Err(TreeError::InvalidPath { .. })),
                "expected {path:?} to be rejected"
            );
        }
    }

    #[test]
    fn identical_input_gives_identical_output() {
        let entries = vec![
            Entry::blob("b/2.txt"),
            Entry::tree("a"),
            Entry::blob("b/1.txt"),
            Entry::blob("a/z/9.txt"),
        ];
        let first = build_tree(&entries).unwrap();
        let second = build_tree(&entries).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn serializes_files_without_children() {
        let nodes = build_tree(&[Entry::blob("src/app.ts")]).unwrap();
        let json = serde_json::to_value(&nodes).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "name": "src",
                "path": "src",
                "type": "folder",
                "children": [{"name": "app.ts", "path": "src/app.ts", "type": "file"}]
            }])
        );
    }

    #[test]
    fn deserializes_upstream_entry_kinds() {
        let entries: Vec<Entry> = serde_json::from_str(
            r#"[{"path":"a","type":"tree"},{"path":"a/b","type":"blob"},{"path":"m","type":"commit"}]"#,
        )
        .unwrap();
        assert_eq!(entries[0].kind, EntryKind::Tree);
        assert_eq!(entries[1].kind, EntryKind::Blob);
        assert_eq!(entries[2].kind, EntryKind::Other);

        let flat = flatten(&build_tree(&entries).unwrap());
        assert_eq!(
            flat,
            vec![
                ("a".to_string(), NodeType::Folder),
                ("a/b".to_string(), NodeType::File),
                ("m".to_string(), NodeType::Folder),
            ]
        );
    }

    mod properties {
        use std::collections::BTreeSet;

        use proptest::prelude::*;

        use super::*;

        fn entry_strategy() -> impl Strategy<Value = Entry> {
            (
                prop::collection::vec(prop::sample::select(vec!["a", "b", "c"]), 1..4),
                prop::bool::weighted(0.8),
            )
                .prop_map(|(segments, is_blob)| {
                    let kind = if is_blob { EntryKind::Blob } else { EntryKind::Tree };
                    Entry::new(segments.join("/"), kind)
                })
        }

        fn implied_paths(entries: &[Entry]) -> BTreeSet<String> {
            let mut paths = BTreeSet::new();
            for entry in entries {
                let mut prefix = String::new();
                for segment in entry.path.split('/') {
                    if !prefix.is_empty() {
                        prefix.push('/');
                    }
                    prefix.push_str(segment);
                    paths.insert(prefix.clone());
                }
            }
            paths
        }

        fn sorted(mut nodes: Vec<Node>) -> Vec<Node> {
            nodes.sort_by(|a, b| a.name.cmp(&b.name));
            for node in &mut nodes {
                if let Some(children) = node.children.take() {
                    node.children = Some(sorted(children));
                }
            }
            nodes
        }

        fn assert_unique_siblings(nodes: &[Node]) {
            let names: BTreeSet<&str> = nodes.iter().map(|n| n.name.as_str()).collect();
            assert_eq!(names.len(), nodes.len());
            for node in nodes {
                assert_unique_siblings(node.children());
            }
        }

        fn assert_paths_match_ancestry(nodes: &[Node], parent: Option<&str>) {
            for node in nodes {
                let expected = match parent {
                    Some(p) => format!("{p}/{}", node.name),
                    None => node.name.clone(),
                };
                assert_eq!(node.path, expected);
                assert_eq!(node.children.is_some(), node.is_folder());
                assert_paths_match_ancestry(node.children(), Some(&node.path));
            }
        }

        proptest! {
            #[test]
            fn build_is_deterministic(entries in prop::collection::vec(entry_strategy(), 0..24)) {
                prop_assert_eq!(build_tree(&entries).unwrap(), build_tree(&entries).unwrap());
            }

            #[test]
            fn flatten_reproduces_implied_paths(entries in prop::collection::vec(entry_strategy(), 0..24)) {
                let nodes = build_tree(&entries).unwrap();
                let flat = flatten(&nodes);
                let produced: BTreeSet<String> = flat.iter().map(|(p, _)| p.clone()).collect();

                prop_assert_eq!(produced.len(), flat.len());
                prop_assert_eq!(produced, implied_paths(&entries));
            }

            #[test]
            fn structure_invariants_hold(entries in prop::collection::vec(entry_strategy(), 0..24)) {
                let nodes = build_tree(&entries).unwrap();
                assert_unique_siblings(&nodes);
                assert_paths_match_ancestry(&nodes, None);
            }

            #[test]
            fn file_iff_lone_blob(entries in prop::collection::vec(entry_strategy(), 0..24)) {
                let nodes = build_tree(&entries).unwrap();
                for (path, node_type) in flatten(&nodes) {
                    let only_blobs = entries
                        .iter()
                        .filter(|e| e.path == path)
                        .all(|e| e.kind == EntryKind::Blob);
                    let named = entries.iter().any(|e| e.path == path);
                    let extended = entries
                        .iter()
                        .any(|e| e.path.starts_with(&format!("{path}/")));
                    let expect_file = named && only_blobs && !extended;
                    prop_assert_eq!(node_type == NodeType::File, expect_file, "path {}", path);
                }
            }

            #[test]
            fn order_only_affects_sibling_order(entries in prop::collection::vec(entry_strategy(), 0..24)) {
                let forward = build_tree(&entries).unwrap();
                let reversed: Vec<Entry> = entries.iter().rev().cloned().collect();
                let backward = build_tree(&reversed).unwrap();
                prop_assert_eq!(sorted(forward), sorted(backward));
            }
        }
    }
}
