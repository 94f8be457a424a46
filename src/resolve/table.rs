//! The name table — the bidirectional qualified-name map.
//!
//! Built exactly once per compilation run from the complete descriptor set,
//! then queried read-only for the remainder of the run. Construction fails
//! fast on the first malformed chain or duplicate qualified name; a partially
//! built table is never exposed.

use std::sync::Arc;

use indexmap::IndexMap;
use indexmap::map::Entry;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::model::{Descriptor, DescriptorId};

use super::chain::{self, ChainPair, DescriptorTree};
use super::compose::compose_type_name;
use super::error::{BuildError, LookupError};

/// Immutable bidirectional map between qualified names and nameable
/// descriptors.
///
/// The forward map is insertion-ordered, so iteration (and therefore
/// generated output and error reporting in later phases) is deterministic
/// for a given input order. No operation mutates the table after
/// construction, so it can be shared by reference across parallel
/// code-generation workers without locking.
#[derive(Clone, Debug, Default)]
pub struct NameTable {
    /// Qualified name → descriptor, in first-composed order.
    forward: IndexMap<Arc<str>, Arc<Descriptor>>,
    /// Descriptor identity → qualified name.
    reverse: FxHashMap<DescriptorId, Arc<str>>,
}

impl NameTable {
    // ========================================================================
    // CONSTRUCTION
    // ========================================================================

    /// Build a table from a flat descriptor list and a parent-lookup
    /// function.
    ///
    /// Non-nameable descriptors are skipped; for each remaining target the
    /// parent relation is climbed to the file root. Fails with
    /// [`BuildError::MalformedChain`] on a structurally invalid chain (or a
    /// cycling parent relation) and [`BuildError::DuplicateName`] when two
    /// distinct descriptors compose to the same qualified name.
    pub fn from_descriptors<'a, I, P>(descriptors: I, parent_of: P) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = &'a Arc<Descriptor>>,
        P: Fn(&Descriptor) -> Option<Arc<Descriptor>>,
    {
        let pairs = chain::collect_from_descriptors(descriptors, parent_of)?;
        Self::from_pairs(pairs)
    }

    /// Build a table from a pre-built descriptor tree.
    ///
    /// Uses the tree's own traversal and ancestor primitives; otherwise
    /// identical to [`NameTable::from_descriptors`].
    pub fn from_tree<T: DescriptorTree + ?Sized>(tree: &T) -> Result<Self, BuildError> {
        Self::from_pairs(chain::collect_from_tree(tree))
    }

    /// Single build pass shared by both ingestion shapes.
    fn from_pairs(pairs: Vec<ChainPair>) -> Result<Self, BuildError> {
        let mut forward: IndexMap<Arc<str>, Arc<Descriptor>> =
            IndexMap::with_capacity(pairs.len());
        let mut reverse: FxHashMap<DescriptorId, Arc<str>> =
            FxHashMap::with_capacity_and_hasher(pairs.len(), Default::default());

        for (target, ancestors) in pairs {
            let name = compose_type_name(&ancestors, &target)?;
            trace!(name = %name, target = %target.id(), "composed qualified name");

            match forward.entry(name.clone()) {
                Entry::Occupied(occupied) => {
                    // Seeing the identical descriptor twice is harmless;
                    // a different descriptor under the same name is fatal.
                    if occupied.get().id() != target.id() {
                        return Err(BuildError::DuplicateName {
                            name,
                            first: occupied.get().id(),
                            second: target.id(),
                        });
                    }
                }
                Entry::Vacant(vacant) => {
                    reverse.insert(target.id(), name);
                    vacant.insert(target);
                }
            }
        }

        debug!(entries = forward.len(), "name table sealed");
        Ok(Self { forward, reverse })
    }

    // ========================================================================
    // LOOKUP SERVICE
    // ========================================================================

    /// Normalize a type name to its canonical dot-free form.
    ///
    /// Strips a single leading `.` if present; otherwise returns the input
    /// unchanged. Total and idempotent, never fails.
    pub fn normalize_type_name(name: &str) -> &str {
        name.strip_prefix('.').unwrap_or(name)
    }

    /// Resolve a type name to its descriptor.
    ///
    /// For call sites that treat an unresolved reference as a hard
    /// compilation error; use [`NameTable::peek_type_name`] to tolerate
    /// misses instead.
    pub fn resolve_type_name(&self, name: &str) -> Result<&Arc<Descriptor>, LookupError> {
        self.peek_type_name(name)
            .ok_or_else(|| LookupError::UnresolvedName {
                name: name.to_owned(),
            })
    }

    /// Look up a type name, returning `None` when it is not in the table.
    pub fn peek_type_name(&self, name: &str) -> Option<&Arc<Descriptor>> {
        self.forward.get(Self::normalize_type_name(name))
    }

    /// The qualified name this table composed for `descriptor`.
    ///
    /// Fails with [`LookupError::UnknownDescriptor`] when the descriptor was
    /// never part of this table's construction — a programming error
    /// (descriptor from a different compilation run), not a schema error.
    pub fn make_type_name(&self, descriptor: &Descriptor) -> Result<&Arc<str>, LookupError> {
        self.reverse
            .get(&descriptor.id())
            .ok_or(LookupError::UnknownDescriptor {
                id: descriptor.id(),
            })
    }

    /// Check whether a (possibly leading-dot) name is a key of the table.
    pub fn contains_name(&self, name: &str) -> bool {
        self.forward.contains_key(Self::normalize_type_name(name))
    }

    /// Iterate (qualified name, descriptor) entries in first-composed order.
    pub fn iter(&self) -> impl Iterator<Item = (&Arc<str>, &Arc<Descriptor>)> {
        self.forward.iter()
    }

    /// The number of nameable descriptors in the table.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}
