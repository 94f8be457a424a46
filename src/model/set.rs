//! In-memory descriptor storage with parent tracking.

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use thiserror::Error;

use crate::base::FileId;

use super::descriptor::{Descriptor, DescriptorKind};
use super::ids::{DescriptorId, LocalId};

/// Error raised when a descriptor set is grown incorrectly.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The named parent was never added to this set.
    #[error("parent descriptor {0} is not part of this descriptor set")]
    UnknownParent(DescriptorId),
    /// Files are roots; they cannot be nested under another descriptor.
    #[error("a file descriptor cannot be added as a child")]
    FileAsChild,
}

/// The set of all descriptors for one compilation run.
///
/// `DescriptorSet` assigns [`DescriptorId`]s as elements are added (files get
/// fresh [`FileId`]s, children get sequential file-local ids) and records the
/// parent edge of every child. It can serve both ingestion shapes the resolve
/// layer accepts: a flat descriptor list with [`parent_of`] lookups, or tree
/// traversal via the `DescriptorTree` trait.
///
/// Callers that already have their own descriptor tree implement
/// `DescriptorTree` directly and never touch this type.
///
/// [`parent_of`]: DescriptorSet::parent_of
#[derive(Clone, Debug, Default)]
pub struct DescriptorSet {
    /// All descriptors, in insertion (declaration) order.
    descriptors: IndexMap<DescriptorId, Arc<Descriptor>>,
    /// Child → parent edges. Files have no entry.
    parents: FxHashMap<DescriptorId, DescriptorId>,
    /// Next FileId to assign.
    next_file: u32,
    /// Next LocalId per file.
    next_local: FxHashMap<FileId, u32>,
}

impl DescriptorSet {
    /// Create a new empty descriptor set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file descriptor with the given package (possibly empty).
    ///
    /// Allocates a fresh [`FileId`]; the file itself is always local id 0
    /// within it.
    pub fn add_file(&mut self, package: impl Into<SmolStr>) -> Arc<Descriptor> {
        let file = FileId::new(self.next_file);
        self.next_file += 1;
        self.next_local.insert(file, 1);

        let id = DescriptorId::new(file, LocalId::new(0));
        let descriptor = Arc::new(Descriptor::file(id, package));
        self.descriptors.insert(id, descriptor.clone());
        descriptor
    }

    /// Add a named descriptor under `parent`.
    ///
    /// The child is declared in the same file as its parent and gets the next
    /// file-local id. Fails if `parent` was never added to this set or if
    /// `kind` is [`DescriptorKind::File`].
    pub fn add_child(
        &mut self,
        parent: &Descriptor,
        kind: DescriptorKind,
        name: impl Into<SmolStr>,
    ) -> Result<Arc<Descriptor>, ModelError> {
        if kind.is_file() {
            return Err(ModelError::FileAsChild);
        }
        if !self.descriptors.contains_key(&parent.id()) {
            return Err(ModelError::UnknownParent(parent.id()));
        }

        let file = parent.id().file;
        let local = self.next_local.entry(file).or_insert(1);
        let id = DescriptorId::new(file, LocalId::new(*local));
        *local += 1;

        let descriptor = Arc::new(Descriptor::named(id, kind, name));
        self.descriptors.insert(id, descriptor.clone());
        self.parents.insert(id, parent.id());
        Ok(descriptor)
    }

    /// Get a descriptor by id.
    pub fn get(&self, id: DescriptorId) -> Option<&Arc<Descriptor>> {
        self.descriptors.get(&id)
    }

    /// The parent of a descriptor, or `None` for files (and for descriptors
    /// that are not part of this set).
    pub fn parent_of(&self, descriptor: &Descriptor) -> Option<Arc<Descriptor>> {
        let parent_id = self.parents.get(&descriptor.id())?;
        self.descriptors.get(parent_id).cloned()
    }

    /// Iterate all descriptors in declaration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &Arc<Descriptor>> {
        self.descriptors.values()
    }

    /// Get the number of descriptors in the set.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
