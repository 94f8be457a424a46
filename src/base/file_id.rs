//! File identifiers for tracking schema source files.

use std::fmt;

/// An interned identifier for a schema source file.
///
/// `FileId` is a lightweight handle (just a u32) that uniquely identifies
/// a schema file within a compilation run. The actual path is stored by
/// whatever loaded the file.
///
/// Using `FileId` instead of `PathBuf` throughout the compiler:
/// - Makes comparisons O(1) instead of O(n)
/// - Reduces memory usage (4 bytes vs ~24+ bytes)
/// - Enables cheap copying and hashing
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct FileId(pub u32);

impl FileId {
    /// Create a new FileId from a raw index.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileId({})", self.0)
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file#{}", self.0)
    }
}

impl From<u32> for FileId {
    #[inline]
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<FileId> for u32 {
    #[inline]
    fn from(id: FileId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_id_roundtrips_through_u32() {
        let id = FileId::from(7u32);

        assert_eq!(id.index(), 7);
        assert_eq!(u32::from(id), 7);
        assert_eq!(id, FileId::new(7));
    }

    #[test]
    fn test_file_id_formatting_is_stable() {
        // Display feeds descriptor diagnostics ("file#0#1" and friends);
        // Debug is the developer-facing form.
        assert_eq!(FileId::new(0).to_string(), "file#0");
        assert_eq!(format!("{:?}", FileId::new(3)), "FileId(3)");
    }

    #[test]
    fn test_file_ids_key_per_file_state() {
        use std::collections::HashMap;

        // The descriptor set keys its per-file local-id counters on FileId.
        let mut next_local: HashMap<FileId, u32> = HashMap::new();
        next_local.insert(FileId::new(0), 1);
        next_local.insert(FileId::new(1), 4);
        *next_local.get_mut(&FileId::new(0)).unwrap() += 1;

        assert_eq!(next_local[&FileId::new(0)], 2);
        assert_eq!(next_local[&FileId::new(1)], 4);
        assert!(!next_local.contains_key(&FileId::new(2)));
    }

    #[test]
    fn test_file_id_stays_word_cheap() {
        assert_eq!(std::mem::size_of::<FileId>(), 4);
    }
}
