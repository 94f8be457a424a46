//! The descriptor model: schema elements as the parser hands them over.
//!
//! - [`DescriptorKind`] - closed kind taxonomy with the nameable subset
//! - [`Descriptor`] - one schema element (file, message, enum, ...)
//! - [`DescriptorId`], [`LocalId`] - descriptor identity
//! - [`DescriptorSet`] - in-memory store with parent tracking

mod descriptor;
mod ids;
mod set;

pub use descriptor::{Descriptor, DescriptorKind};
pub use ids::{DescriptorId, LocalId};
pub use set::{DescriptorSet, ModelError};
