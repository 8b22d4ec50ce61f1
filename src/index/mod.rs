//! Size and prefix indexes over file records
//!
//! Two independent structures are fed by the same insertion stream:
//!
//! - `SizeIndex`: AVL tree keyed by size, answers inclusive range queries
//! - `PrefixIndex`: trie keyed by lowercase name, answers prefix lookups
//!
//! `FileIndex` inserts into both and combines their answers for a `Search`.

mod prefix;
mod size;

pub use prefix::PrefixIndex;
pub use size::SizeIndex;

use serde::Serialize;

use crate::query::Search;
use crate::record::FileRef;

/// Compact 32-bit id of a node inside an index arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub(crate) struct NodeId(u32);

impl NodeId {
    pub(crate) const ROOT: Self = Self(0);

    /// # Panics
    /// Panics if `index` does not fit in 32 bits.
    #[inline]
    pub(crate) fn new(index: usize) -> Self {
        assert!(index < u32::MAX as usize, "node index must be less than u32::MAX");
        Self(index as u32)
    }

    #[inline]
    pub(crate) fn get(self) -> usize {
        self.0 as usize
    }
}

/// Shape of a populated [`FileIndex`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub files: usize,
    pub distinct_sizes: usize,
    pub height: usize,
    pub trie_nodes: usize,
}

/// Both indexes, populated together.
#[derive(Debug, Default)]
pub struct FileIndex {
    sizes: SizeIndex,
    prefixes: PrefixIndex,
}

impl FileIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, file: FileRef) {
        self.sizes.insert(file.clone());
        self.prefixes.add_file(file);
    }

    pub fn sizes(&self) -> &SizeIndex {
        &self.sizes
    }

    pub fn prefixes(&self) -> &PrefixIndex {
        &self.prefixes
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            files: self.sizes.len(),
            distinct_sizes: self.sizes.distinct_sizes(),
            height: self.sizes.height(),
            trie_nodes: self.prefixes.node_count(),
        }
    }

    /// Run a search against the indexes.
    ///
    /// With a size range the result keeps range-query order (ascending size),
    /// narrowed to the prefix set when a prefix is also given. A prefix alone
    /// is ordered by folded name, then size. With neither, every file is
    /// returned ascending by size.
    pub fn search(&self, search: &Search) -> Vec<FileRef> {
        match (&search.size, &search.prefix) {
            (Some(range), Some(prefix)) => {
                let matching = self.prefixes.files_with_prefix(prefix);
                self.sizes
                    .query(range.min, range.max)
                    .into_iter()
                    .filter(|f| matching.contains(f))
                    .collect()
            }
            (Some(range), None) => self.sizes.query(range.min, range.max),
            (None, Some(prefix)) => {
                let mut files: Vec<FileRef> =
                    self.prefixes.files_with_prefix(prefix).iter().cloned().collect();
                files.sort_by(|a, b| {
                    a.folded_name()
                        .cmp(b.folded_name())
                        .then(a.size().cmp(&b.size()))
                        .then_with(|| a.path().cmp(&b.path()))
                });
                files
            }
            (None, None) => self.sizes.query(0, u64::MAX),
        }
    }
}

impl Extend<FileRef> for FileIndex {
    fn extend<I: IntoIterator<Item = FileRef>>(&mut self, iter: I) {
        for file in iter {
            self.insert(file);
        }
    }
}

impl FromIterator<FileRef> for FileIndex {
    fn from_iter<I: IntoIterator<Item = FileRef>>(iter: I) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}
