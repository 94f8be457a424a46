//! # schemac-base
//!
//! Core library for schema descriptor modeling and qualified-name resolution.
//!
//! This crate is the symbol-resolution layer of the schemac compiler: it takes
//! the descriptors produced by the schema parser (files, messages, enums,
//! services, and their nested members), composes a fully-qualified dotted name
//! for every independently-nameable element, and builds the immutable
//! [`NameTable`] that later compilation phases query in both directions.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! resolve  → name composition, ancestor chains, NameTable lookup API
//!   ↓
//! model    → descriptor kinds, descriptor ids, descriptor sets
//!   ↓
//! base     → primitives (FileId)
//! ```
//!
//! ## Example
//!
//! ```
//! use schemac::{DescriptorKind, DescriptorSet, NameTable};
//!
//! let mut set = DescriptorSet::new();
//! let file = set.add_file("pkg");
//! let outer = set.add_child(&file, DescriptorKind::Message, "Outer").unwrap();
//! set.add_child(&outer, DescriptorKind::Message, "Inner").unwrap();
//!
//! let table = NameTable::from_tree(&set).unwrap();
//! let inner = table.resolve_type_name("pkg.Outer.Inner").unwrap().clone();
//! assert_eq!(table.make_type_name(&inner).unwrap().as_ref(), "pkg.Outer.Inner");
//! ```

/// Foundation types: FileId
pub mod base;

/// Descriptor model: kinds, ids, in-memory descriptor sets
pub mod model;

/// Name resolution: qualified-name composition and the NameTable
pub mod resolve;

// Re-export foundation types
pub use base::FileId;

// Re-export the descriptor model
pub use model::{Descriptor, DescriptorId, DescriptorKind, DescriptorSet, LocalId, ModelError};

// Re-export the resolution core
pub use resolve::{
    BuildError, ChainFault, DescriptorTree, LookupError, NameTable, compose_type_name,
};
