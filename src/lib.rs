//! Pith - find files by size range and name prefix
//!
//! A directory is scanned into a `FileIndex`, which keeps two independent
//! indexes fed by the same insertions: an AVL tree keyed by size for inclusive
//! range queries, and a trie keyed by lowercase name for prefix lookups.

pub mod error;
pub mod index;
pub mod logging;
pub mod normalize;
pub mod output;
pub mod query;
pub mod record;
pub mod scan;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{PithError, Result};
pub use index::{FileIndex, IndexStats, PrefixIndex, SizeIndex};
pub use output::{ConsoleFormatter, JsonReport, OutputConfig, print_json};
pub use query::{Search, SizeRange};
pub use record::{FileRecord, FileRef};
pub use scan::{ScanConfig, ScanReport, Scanner};
