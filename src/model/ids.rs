//! Identity for schema descriptors.

use std::fmt;

use crate::base::FileId;

/// A globally unique identifier for a descriptor.
///
/// Combines the file a descriptor was declared in with a file-local ID.
/// Two descriptors compare equal exactly when they denote the same schema
/// element of the same compilation run, which is what the name table's
/// reverse map keys on — no deep structural comparison is ever needed.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct DescriptorId {
    /// The file this descriptor was declared in
    pub file: FileId,
    /// The local ID within the file
    pub local: LocalId,
}

impl DescriptorId {
    /// Create a new DescriptorId.
    #[inline]
    pub const fn new(file: FileId, local: LocalId) -> Self {
        Self { file, local }
    }
}

impl fmt::Debug for DescriptorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DescriptorId({:?}:{})", self.file, self.local.0)
    }
}

impl fmt::Display for DescriptorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.file, self.local.0)
    }
}

/// A file-local descriptor identifier.
///
/// Assigned sequentially as descriptors are added to a file, in declaration
/// order. The file's own descriptor is always `LocalId(0)`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct LocalId(pub u32);

impl LocalId {
    /// Create a new LocalId.
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

impl fmt::Debug for LocalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocalId({})", self.0)
    }
}

impl From<u32> for LocalId {
    #[inline]
    fn from(id: u32) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_id_equality() {
        let file1 = FileId::new(1);
        let file2 = FileId::new(2);

        let a = DescriptorId::new(file1, LocalId::new(0));
        let b = DescriptorId::new(file1, LocalId::new(0));
        let c = DescriptorId::new(file1, LocalId::new(1));
        let d = DescriptorId::new(file2, LocalId::new(0));

        assert_eq!(a, b);
        assert_ne!(a, c); // different local
        assert_ne!(a, d); // different file
    }

    #[test]
    fn test_descriptor_id_size() {
        // DescriptorId should be 8 bytes (FileId + LocalId)
        assert_eq!(std::mem::size_of::<DescriptorId>(), 8);
    }
}
