//! Height-balanced (AVL) tree from file size to the files of that size

use std::cmp::Ordering;

use crate::record::FileRef;

use super::NodeId;

#[derive(Debug)]
struct SizeNode {
    key: u64,
    /// Files of this size in insertion order.
    bucket: Vec<FileRef>,
    left: Option<NodeId>,
    right: Option<NodeId>,
    height: i32,
}

impl SizeNode {
    fn leaf(key: u64, file: FileRef) -> Self {
        Self {
            key,
            bucket: vec![file],
            left: None,
            right: None,
            height: 1,
        }
    }
}

/// Ordered index from size to a bucket of files sharing that size.
///
/// Nodes live in an arena owned by the index; children are referenced by
/// [`NodeId`], so rotations only rewrite ids. There is exactly one node per
/// distinct size.
#[derive(Debug, Default)]
pub struct SizeIndex {
    slots: Vec<Option<SizeNode>>,
    free: Vec<NodeId>,
    root: Option<NodeId>,
    len: usize,
}

impl SizeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of file entries (bucket entries across all sizes).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct sizes, i.e. tree nodes.
    pub fn distinct_sizes(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Height of the tree; 0 when empty.
    pub fn height(&self) -> usize {
        self.height_of(self.root) as usize
    }

    /// Files of exactly `size`, in insertion order.
    pub fn bucket(&self, size: u64) -> Option<&[FileRef]> {
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = self.node(id);
            cursor = match size.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(&node.bucket),
            };
        }
        None
    }

    /// Add `file` under its size.
    ///
    /// A new size creates a node and rebalances along the insertion path; a
    /// known size appends to the existing bucket. The same handle inserted
    /// twice appears twice.
    pub fn insert(&mut self, file: FileRef) {
        let key = file.size();
        self.root = Some(self.insert_at(self.root, key, file));
        self.len += 1;
    }

    /// Files whose size lies in the closed interval between the two bounds.
    ///
    /// Bounds may be given in either order. Results are ascending by size and
    /// in insertion order within one size.
    pub fn query(&self, min: u64, max: u64) -> Vec<FileRef> {
        let (min, max) = if min > max { (max, min) } else { (min, max) };

        let mut result = Vec::new();
        let mut stack = Vec::new();
        let mut cursor = self.root;

        loop {
            // Left subtrees can only hold qualifying keys when key >= min.
            while let Some(id) = cursor {
                let node = self.node(id);
                stack.push(id);
                cursor = if node.key >= min { node.left } else { None };
            }

            let Some(id) = stack.pop() else { break };
            let node = self.node(id);
            if node.key > max {
                // In-order from here on, every remaining key is larger.
                break;
            }
            if node.key >= min {
                result.extend(node.bucket.iter().cloned());
            }
            cursor = node.right;
        }

        result
    }

    /// Remove one entry of `file` from its size bucket.
    ///
    /// When the bucket empties its node is deleted and the tree rebalanced.
    /// Returns `false` if the handle was not indexed.
    pub fn remove(&mut self, file: &FileRef) -> bool {
        let mut removed = false;
        self.root = self.remove_at(self.root, file.size(), file, &mut removed);
        if removed {
            self.len -= 1;
        }
        removed
    }

    fn insert_at(&mut self, at: Option<NodeId>, key: u64, file: FileRef) -> NodeId {
        let Some(id) = at else {
            return self.alloc(SizeNode::leaf(key, file));
        };

        match key.cmp(&self.node(id).key) {
            Ordering::Less => {
                let child = self.insert_at(self.node(id).left, key, file);
                self.node_mut(id).left = Some(child);
            }
            Ordering::Greater => {
                let child = self.insert_at(self.node(id).right, key, file);
                self.node_mut(id).right = Some(child);
            }
            Ordering::Equal => {
                self.node_mut(id).bucket.push(file);
                return id;
            }
        }

        self.rebalance(id)
    }

    fn remove_at(
        &mut self,
        at: Option<NodeId>,
        key: u64,
        file: &FileRef,
        removed: &mut bool,
    ) -> Option<NodeId> {
        let id = at?;

        match key.cmp(&self.node(id).key) {
            Ordering::Less => {
                let child = self.remove_at(self.node(id).left, key, file, removed);
                self.node_mut(id).left = child;
            }
            Ordering::Greater => {
                let child = self.remove_at(self.node(id).right, key, file, removed);
                self.node_mut(id).right = child;
            }
            Ordering::Equal => {
                let node = self.node_mut(id);
                let Some(pos) = node.bucket.iter().position(|f| f.ptr_eq(file)) else {
                    return Some(id);
                };
                node.bucket.remove(pos);
                *removed = true;
                if !node.bucket.is_empty() {
                    return Some(id);
                }
                return self.unlink(id);
            }
        }

        Some(self.rebalance(id))
    }

    /// Delete node `id` and return the root of the subtree that replaces it.
    fn unlink(&mut self, id: NodeId) -> Option<NodeId> {
        let (left, right) = {
            let node = self.node(id);
            (node.left, node.right)
        };
        self.release(id);

        match (left, right) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let (rest, successor) = self.detach_min(right);
                let node = self.node_mut(successor);
                node.left = Some(left);
                node.right = rest;
                Some(self.rebalance(successor))
            }
        }
    }

    /// Detach the minimum node of the subtree at `id`.
    /// Returns the rebalanced remainder and the detached node.
    fn detach_min(&mut self, id: NodeId) -> (Option<NodeId>, NodeId) {
        match self.node(id).left {
            None => (self.node(id).right, id),
            Some(left) => {
                let (rest, min) = self.detach_min(left);
                self.node_mut(id).left = rest;
                (Some(self.rebalance(id)), min)
            }
        }
    }

    fn rebalance(&mut self, id: NodeId) -> NodeId {
        self.update_height(id);
        let balance = self.balance_of(id);

        if balance > 1 {
            let Some(left) = self.node(id).left else {
                return id;
            };
            if self.balance_of(left) < 0 {
                let rotated = self.rotate_left(left);
                self.node_mut(id).left = Some(rotated);
            }
            return self.rotate_right(id);
        }

        if balance < -1 {
            let Some(right) = self.node(id).right else {
                return id;
            };
            if self.balance_of(right) > 0 {
                let rotated = self.rotate_right(right);
                self.node_mut(id).right = Some(rotated);
            }
            return self.rotate_left(id);
        }

        id
    }

    fn rotate_right(&mut self, id: NodeId) -> NodeId {
        let Some(pivot) = self.node(id).left else {
            return id;
        };
        let inner = self.node(pivot).right;
        self.node_mut(id).left = inner;
        self.node_mut(pivot).right = Some(id);
        self.update_height(id);
        self.update_height(pivot);
        pivot
    }

    fn rotate_left(&mut self, id: NodeId) -> NodeId {
        let Some(pivot) = self.node(id).right else {
            return id;
        };
        let inner = self.node(pivot).left;
        self.node_mut(id).right = inner;
        self.node_mut(pivot).left = Some(id);
        self.update_height(id);
        self.update_height(pivot);
        pivot
    }

    fn update_height(&mut self, id: NodeId) {
        let node = self.node(id);
        let height = 1 + self.height_of(node.left).max(self.height_of(node.right));
        self.node_mut(id).height = height;
    }

    fn balance_of(&self, id: NodeId) -> i32 {
        let node = self.node(id);
        self.height_of(node.left) - self.height_of(node.right)
    }

    fn height_of(&self, id: Option<NodeId>) -> i32 {
        id.map_or(0, |id| self.node(id).height)
    }

    fn alloc(&mut self, node: SizeNode) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id.get()] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                NodeId::new(self.slots.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) {
        self.slots[id.get()] = None;
        self.free.push(id);
    }

    fn node(&self, id: NodeId) -> &SizeNode {
        self.slots[id.get()]
            .as_ref()
            .expect("live node id must point at an occupied slot")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut SizeNode {
        self.slots[id.get()]
            .as_mut()
            .expect("live node id must point at an occupied slot")
    }

    /// Walk the tree and panic on any ordering, height or balance violation.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        fn check(index: &SizeIndex, at: Option<NodeId>, lo: Option<u64>, hi: Option<u64>) -> i32 {
            let Some(id) = at else { return 0 };
            let node = index.node(id);
            assert!(!node.bucket.is_empty(), "empty bucket at key {}", node.key);
            assert!(lo.is_none_or(|lo| node.key > lo), "ordering violated at {}", node.key);
            assert!(hi.is_none_or(|hi| node.key < hi), "ordering violated at {}", node.key);
            let left = check(index, node.left, lo, Some(node.key));
            let right = check(index, node.right, Some(node.key), hi);
            assert!((left - right).abs() <= 1, "unbalanced at key {}", node.key);
            assert_eq!(node.height, 1 + left.max(right), "stale height at {}", node.key);
            node.height
        }
        check(self, self.root, None, None);
    }
}
