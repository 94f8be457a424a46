//! Name resolution — composing qualified names and serving lookups.
//!
//! This is the core of the symbol-resolution layer:
//!
//! 1. **Chain acquisition** reduces either ingestion shape (flat list +
//!    parent function, or pre-built [`DescriptorTree`]) to (target,
//!    root-first ancestor chain) pairs.
//! 2. **Name composition** ([`compose_type_name`]) turns each pair into the
//!    canonical dotted qualified name, rejecting malformed chains.
//! 3. **The [`NameTable`]** collects all (name, descriptor) pairs into an
//!    immutable bidirectional map, failing fast on duplicates, and serves
//!    `normalize`/`resolve`/`peek`/reverse lookups to later phases.

mod chain;
mod compose;
mod error;
mod table;

pub use chain::DescriptorTree;
pub use compose::compose_type_name;
pub use error::{BuildError, ChainFault, LookupError};
pub use table::NameTable;
