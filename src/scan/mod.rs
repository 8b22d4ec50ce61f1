//! Directory scanning
//!
//! `Scanner` walks a directory (respecting .gitignore unless told otherwise),
//! reads file metadata in parallel and produces the records that populate a
//! `FileIndex`.

mod config;
mod utils;
mod walker;

pub use config::ScanConfig;
pub use utils::{format_size, glob_match};
pub use walker::{ScanReport, Scanner};
