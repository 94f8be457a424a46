//! Typed failures for name-table construction and lookup.

use std::sync::Arc;

use thiserror::Error;

use crate::model::{DescriptorId, DescriptorKind};

// ============================================================================
// BUILD-TIME ERRORS
// ============================================================================

/// The specific way an ancestor chain failed validation.
///
/// Every variant carries the offending kind or identity so the diagnostic
/// points at the element the descriptor source got wrong.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ChainFault {
    /// The combined ancestors-plus-target sequence was empty.
    #[error("chain is empty")]
    Empty,
    /// The first chain element was not a file descriptor.
    #[error("chain root is a {0}, expected a file")]
    RootNotFile(DescriptorKind),
    /// The target is not a nameable kind (message, enum, or service).
    #[error("target is a {0}, which has no global qualified name")]
    TargetNotNameable(DescriptorKind),
    /// An element below the file root carries no local name.
    #[error("{0} element below the file root has no local name")]
    UnnamedElement(DescriptorKind),
    /// The parent relation revisited a descriptor while climbing.
    #[error("parent relation cycles back through descriptor {0}")]
    ParentCycle(DescriptorId),
}

/// Fatal error aborting name-table construction.
///
/// Both variants indicate the input descriptor set is invalid; retrying the
/// same build is pointless.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A (target, ancestor-chain) pair was structurally invalid. This is a
    /// bug in the descriptor source, not a user-schema error.
    #[error("malformed ancestor chain for descriptor {target}: {fault}")]
    MalformedChain {
        /// The nameable target the chain was built for.
        target: DescriptorId,
        /// What exactly was wrong with the chain.
        fault: ChainFault,
    },
    /// Two distinct descriptors composed to the same qualified name — e.g.
    /// two input files independently declaring the same fully-qualified type.
    #[error("duplicate qualified name `{name}` (declared by {first} and {second})")]
    DuplicateName {
        /// The colliding qualified name.
        name: Arc<str>,
        /// The descriptor already registered under the name.
        first: DescriptorId,
        /// The descriptor that collided with it.
        second: DescriptorId,
    },
}

// ============================================================================
// LOOKUP ERRORS
// ============================================================================

/// Error from a query against a finished name table.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The (normalized) name is not a key of the table. Callers decide
    /// whether this becomes a user-facing "unknown type" diagnostic.
    #[error("unresolved type name `{name}`")]
    UnresolvedName {
        /// The name as given by the caller, before normalization.
        name: String,
    },
    /// The descriptor was not part of this table's construction. This is an
    /// internal invariant violation (a descriptor from a different
    /// compilation run), not a schema error.
    #[error("descriptor {id} was not part of this name table's construction")]
    UnknownDescriptor {
        /// Identity of the foreign descriptor.
        id: DescriptorId,
    },
}
