//! Ancestor-chain acquisition.
//!
//! The name table accepts descriptors in two shapes: a flat list paired with
//! a parent-lookup function, or a pre-built descriptor tree. Both shapes are
//! reduced here to the same internal representation — one (target, root-first
//! ancestor chain) pair per nameable descriptor — before any name is composed.

use std::sync::Arc;

use rustc_hash::FxHashSet;

use crate::model::{Descriptor, DescriptorSet};

use super::error::{BuildError, ChainFault};

/// A nameable target together with its root-first ancestor chain.
pub(crate) type ChainPair = (Arc<Descriptor>, Vec<Arc<Descriptor>>);

// ============================================================================
// SHAPE B — PRE-BUILT TREE
// ============================================================================

/// A pre-built descriptor tree with traversal and ancestor primitives.
///
/// Implemented by whatever component owns the parsed descriptor hierarchy.
/// [`DescriptorSet`] implements it for callers using the in-crate store.
pub trait DescriptorTree {
    /// Visit every nameable descriptor in the tree, in a stable order.
    fn visit_types(&self, visit: &mut dyn FnMut(&Arc<Descriptor>));

    /// The root-first ancestor chain of `descriptor`: from its file
    /// descriptor down to its immediate parent, never including `descriptor`
    /// itself. Empty for roots and for descriptors the tree does not know.
    fn ancestors_of(&self, descriptor: &Descriptor) -> Vec<Arc<Descriptor>>;
}

impl DescriptorTree for DescriptorSet {
    fn visit_types(&self, visit: &mut dyn FnMut(&Arc<Descriptor>)) {
        for descriptor in self.descriptors() {
            if descriptor.is_nameable() {
                visit(descriptor);
            }
        }
    }

    fn ancestors_of(&self, descriptor: &Descriptor) -> Vec<Arc<Descriptor>> {
        let mut chain = Vec::new();
        let mut current = self.parent_of(descriptor);
        while let Some(ancestor) = current {
            current = self.parent_of(&ancestor);
            chain.push(ancestor);
        }
        chain.reverse();
        chain
    }
}

/// Collect (target, chain) pairs from a pre-built tree.
pub(crate) fn collect_from_tree<T: DescriptorTree + ?Sized>(tree: &T) -> Vec<ChainPair> {
    let mut pairs = Vec::new();
    tree.visit_types(&mut |target| {
        pairs.push((target.clone(), tree.ancestors_of(target)));
    });
    pairs
}

// ============================================================================
// SHAPE A — FLAT LIST + PARENT FUNCTION
// ============================================================================

/// Collect (target, chain) pairs from a flat descriptor list and a
/// parent-lookup function.
///
/// Non-nameable descriptors are skipped. For each nameable target the parent
/// relation is climbed strictly upward — target, its parent, that parent's
/// parent — until the function returns `None`, prepending each visited
/// ancestor so the finished chain reads root-first.
pub(crate) fn collect_from_descriptors<'a, I, P>(
    descriptors: I,
    parent_of: P,
) -> Result<Vec<ChainPair>, BuildError>
where
    I: IntoIterator<Item = &'a Arc<Descriptor>>,
    P: Fn(&Descriptor) -> Option<Arc<Descriptor>>,
{
    let mut pairs = Vec::new();
    for target in descriptors {
        if !target.is_nameable() {
            continue;
        }
        let chain = climb(target, &parent_of)?;
        pairs.push((target.clone(), chain));
    }
    Ok(pairs)
}

/// Climb the parent relation from `target` up to the root.
///
/// A misbehaving descriptor source could hand us a parent relation that
/// cycles; a visited set over descriptor ids turns that into a typed
/// `MalformedChain` instead of an infinite loop.
fn climb<P>(target: &Arc<Descriptor>, parent_of: &P) -> Result<Vec<Arc<Descriptor>>, BuildError>
where
    P: Fn(&Descriptor) -> Option<Arc<Descriptor>>,
{
    let mut chain: Vec<Arc<Descriptor>> = Vec::new();
    let mut visited = FxHashSet::default();
    visited.insert(target.id());

    let mut current = parent_of(target);
    while let Some(ancestor) = current {
        if !visited.insert(ancestor.id()) {
            return Err(BuildError::MalformedChain {
                target: target.id(),
                fault: ChainFault::ParentCycle(ancestor.id()),
            });
        }
        current = parent_of(&ancestor);
        chain.push(ancestor);
    }

    chain.reverse();
    Ok(chain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::FileId;
    use crate::model::{DescriptorId, DescriptorKind, LocalId};
    use rustc_hash::FxHashMap;

    fn id(local: u32) -> DescriptorId {
        DescriptorId::new(FileId::new(0), LocalId::new(local))
    }

    /// Flat fixture: file `pkg` > message `Outer` > message `Inner`,
    /// plus a non-nameable field under `Inner`.
    fn flat_fixture() -> (Vec<Arc<Descriptor>>, FxHashMap<DescriptorId, Arc<Descriptor>>) {
        let file = Arc::new(Descriptor::file(id(0), "pkg"));
        let outer = Arc::new(Descriptor::named(id(1), DescriptorKind::Message, "Outer"));
        let inner = Arc::new(Descriptor::named(id(2), DescriptorKind::Message, "Inner"));
        let field = Arc::new(Descriptor::named(id(3), DescriptorKind::Field, "count"));

        let mut parents = FxHashMap::default();
        parents.insert(outer.id(), file.clone());
        parents.insert(inner.id(), outer.clone());
        parents.insert(field.id(), inner.clone());

        (vec![file, outer, inner, field], parents)
    }

    #[test]
    fn test_flat_chains_are_root_first() {
        let (descriptors, parents) = flat_fixture();
        let pairs =
            collect_from_descriptors(&descriptors, |d| parents.get(&d.id()).cloned()).unwrap();

        // Only Outer and Inner are nameable
        assert_eq!(pairs.len(), 2);

        let (inner, chain) = &pairs[1];
        assert_eq!(inner.name(), Some("Inner"));
        assert_eq!(chain.len(), 2);
        assert!(chain[0].kind().is_file(), "chain must start at the file");
        assert_eq!(chain[1].name(), Some("Outer"));
    }

    #[test]
    fn test_flat_skips_non_nameable() {
        let (descriptors, parents) = flat_fixture();
        let pairs =
            collect_from_descriptors(&descriptors, |d| parents.get(&d.id()).cloned()).unwrap();

        assert!(pairs.iter().all(|(t, _)| t.is_nameable()));
    }

    #[test]
    fn test_parent_cycle_is_detected() {
        let a = Arc::new(Descriptor::named(id(1), DescriptorKind::Message, "A"));
        let b = Arc::new(Descriptor::named(id(2), DescriptorKind::Message, "B"));

        // a -> b -> a
        let mut parents = FxHashMap::default();
        parents.insert(a.id(), b.clone());
        parents.insert(b.id(), a.clone());

        let descriptors = vec![a];
        let err = collect_from_descriptors(&descriptors, |d| parents.get(&d.id()).cloned())
            .unwrap_err();

        assert!(matches!(
            err,
            BuildError::MalformedChain {
                fault: ChainFault::ParentCycle(_),
                ..
            }
        ));
    }

    #[test]
    fn test_tree_shape_matches_flat_shape() {
        let mut set = DescriptorSet::new();
        let file = set.add_file("pkg");
        let outer = set
            .add_child(&file, DescriptorKind::Message, "Outer")
            .unwrap();
        set.add_child(&outer, DescriptorKind::Message, "Inner")
            .unwrap();

        let from_tree = collect_from_tree(&set);
        let descriptors: Vec<_> = set.descriptors().cloned().collect();
        let from_flat =
            collect_from_descriptors(&descriptors, |d| set.parent_of(d)).unwrap();

        assert_eq!(from_tree.len(), from_flat.len());
        for ((t1, c1), (t2, c2)) in from_tree.iter().zip(&from_flat) {
            assert_eq!(t1.id(), t2.id());
            let ids1: Vec<_> = c1.iter().map(|d| d.id()).collect();
            let ids2: Vec<_> = c2.iter().map(|d| d.id()).collect();
            assert_eq!(ids1, ids2);
        }
    }
}
