//! Case-insensitive prefix trie over file names

use std::collections::HashSet;

use crate::normalize::{ALPHABET_LEN, fold_name, slot};
use crate::record::FileRef;

use super::NodeId;

#[derive(Debug)]
struct TrieNode {
    label: Option<u8>,
    children: [Option<NodeId>; ALPHABET_LEN],
    /// Every file whose folded name passes through this node.
    matching: HashSet<FileRef>,
}

impl TrieNode {
    fn new(label: Option<u8>) -> Self {
        Self {
            label,
            children: [None; ALPHABET_LEN],
            matching: HashSet::new(),
        }
    }
}

/// Trie keyed by folded file name.
///
/// Node 0 is the root (the empty prefix). Nodes are created on first use and
/// never removed, so every node reachable from the root has a non-empty
/// matching set.
#[derive(Debug)]
pub struct PrefixIndex {
    nodes: Vec<TrieNode>,
    empty: HashSet<FileRef>,
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self {
            nodes: vec![TrieNode::new(None)],
            empty: HashSet::new(),
        }
    }
}

impl PrefixIndex {
    const ROOT: NodeId = NodeId::ROOT;

    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct files added.
    pub fn len(&self) -> usize {
        self.nodes[Self::ROOT.get()].matching.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of trie nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Register `file` under every prefix of its folded name, including "".
    pub fn add_file(&mut self, file: FileRef) {
        let mut at = Self::ROOT;
        self.nodes[at.get()].matching.insert(file.clone());

        for byte in file.folded_name().bytes() {
            let Some(slot) = slot(byte) else {
                // Record validation keeps names inside the alphabet.
                debug_assert!(false, "unindexable byte {:?} in {:?}", byte as char, file.name());
                break;
            };
            let existing = self.nodes[at.get()].children[slot];
            at = match existing {
                Some(child) => child,
                None => self.push_child(at, slot, byte),
            };
            self.nodes[at.get()].matching.insert(file.clone());
        }
    }

    /// Files whose folded name starts with the folded `prefix`.
    ///
    /// Returns the stored set itself; it is empty when no added name has the
    /// prefix or the prefix holds a character outside the alphabet.
    pub fn files_with_prefix(&self, prefix: &str) -> &HashSet<FileRef> {
        match self.find(&fold_name(prefix)) {
            Some(id) => &self.nodes[id.get()].matching,
            None => &self.empty,
        }
    }

    /// Folded path from the root to `prefix`'s node, if it exists.
    fn find(&self, folded: &str) -> Option<NodeId> {
        let mut at = Self::ROOT;
        for byte in folded.bytes() {
            at = self.nodes[at.get()].children[slot(byte)?]?;
        }
        Some(at)
    }

    fn push_child(&mut self, parent: NodeId, slot: usize, byte: u8) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(TrieNode::new(Some(byte)));
        self.nodes[parent.get()].children[slot] = Some(id);
        id
    }

    /// Reconstruct the folded path of `id` by following labels from the root.
    #[cfg(test)]
    fn path_of(&self, id: NodeId) -> Option<String> {
        fn walk(index: &PrefixIndex, at: NodeId, target: NodeId, path: &mut Vec<u8>) -> bool {
            if at == target {
                return true;
            }
            for child in index.nodes[at.get()].children.iter().flatten() {
                if let Some(label) = index.nodes[child.get()].label {
                    path.push(label);
                }
                if walk(index, *child, target, path) {
                    return true;
                }
                path.pop();
            }
            false
        }
        let mut path = Vec::new();
        walk(self, Self::ROOT, id, &mut path).then(|| String::from_utf8_lossy(&path).into_owned())
    }
}
