//! File records and the shared handles the indexes store

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use crate::error::{PithError, Result};
use crate::normalize::{fold_name, is_name_char};

/// An immutable file description: a validated name and a byte size.
///
/// Records never change after construction, so the keys an index derives
/// from them (size, folded name) stay valid for as long as they are indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    name: String,
    folded: String,
    size: u64,
    path: Option<PathBuf>,
    modified: Option<SystemTime>,
}

impl FileRecord {
    /// Create a record with the given name and size.
    ///
    /// The name must be non-empty, contain only ASCII letters, digits and
    /// periods, and have at most one period.
    pub fn new(name: impl Into<String>, size: u64) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            folded: fold_name(&name),
            name,
            size,
            path: None,
            modified: None,
        })
    }

    /// Create a record whose size is the byte length of `contents`.
    pub fn with_contents(name: impl Into<String>, contents: &str) -> Result<Self> {
        Self::new(name, contents.len() as u64)
    }

    /// Create a record from a file on disk. Symlinks are not followed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| PithError::InvalidName {
                name: path.display().to_string(),
                reason: "not valid UTF-8",
            })?;
        let meta = path.symlink_metadata()?;
        let mut record = Self::new(name, meta.len())?;
        record.path = Some(path.to_path_buf());
        record.modified = meta.modified().ok();
        Ok(record)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lowercase name, computed once at construction.
    pub fn folded_name(&self) -> &str {
        &self.folded
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }

    pub fn into_ref(self) -> FileRef {
        FileRef::new(self)
    }
}

/// Check a name against the record naming rules.
pub fn validate_name(name: &str) -> Result<()> {
    let invalid = |reason| PithError::InvalidName {
        name: name.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(invalid("name is empty"));
    }
    if !name.chars().all(is_name_char) {
        return Err(invalid("only letters, digits and '.' are allowed"));
    }
    if name.matches('.').count() > 1 {
        return Err(invalid("at most one '.' is allowed"));
    }
    Ok(())
}

/// Shared handle to a [`FileRecord`].
///
/// Equality and hashing use the identity of the underlying allocation, not
/// the record's contents: two separately created records with the same name
/// and size are distinct entries, while clones of one handle are the same.
#[derive(Clone)]
pub struct FileRef(Arc<FileRecord>);

impl FileRef {
    pub fn new(record: FileRecord) -> Self {
        Self(Arc::new(record))
    }

    pub fn ptr_eq(&self, other: &FileRef) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for FileRef {
    type Target = FileRecord;

    fn deref(&self) -> &FileRecord {
        &self.0
    }
}

impl From<FileRecord> for FileRef {
    fn from(record: FileRecord) -> Self {
        Self::new(record)
    }
}

impl PartialEq for FileRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for FileRef {}

impl Hash for FileRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state);
    }
}

impl fmt::Debug for FileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileRef({:?}, {})", self.name, self.size)
    }
}
