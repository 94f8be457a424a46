//! Qualified-name composition.
//!
//! A qualified name is the canonical dotted identifier of a nameable
//! descriptor: the file's package (when non-empty), then the local name of
//! every enclosing type, then the target's own local name, joined with `.`.
//! The composed form never carries a leading period.

use std::sync::Arc;

use crate::model::Descriptor;

use super::error::{BuildError, ChainFault};

/// Compose the qualified name for `target` from its root-first ancestor chain.
///
/// `ancestors` runs from the file descriptor down to (but not including)
/// `target`. The chain is validated before any string is built:
///
/// - the combined sequence must be non-empty and rooted at a file descriptor
/// - `target` must be nameable (message, enum, or service)
/// - every element below the file root must carry a local name
///
/// Any violation is a [`BuildError::MalformedChain`] naming the target and
/// the concrete [`ChainFault`].
pub fn compose_type_name(
    ancestors: &[Arc<Descriptor>],
    target: &Arc<Descriptor>,
) -> Result<Arc<str>, BuildError> {
    let fault = |fault: ChainFault| BuildError::MalformedChain {
        target: target.id(),
        fault,
    };

    let mut elements = ancestors.iter().chain(std::iter::once(target));
    let Some(root) = elements.next() else {
        return Err(fault(ChainFault::Empty));
    };
    if !root.kind().is_file() {
        return Err(fault(ChainFault::RootNotFile(root.kind())));
    }
    if !target.is_nameable() {
        return Err(fault(ChainFault::TargetNotNameable(target.kind())));
    }

    let mut segments: Vec<&str> = Vec::with_capacity(ancestors.len() + 1);
    // An empty package contributes no segment.
    match root.package() {
        Some(package) if !package.is_empty() => segments.push(package),
        _ => {}
    }
    for element in elements {
        match element.name() {
            Some(name) => segments.push(name),
            None => return Err(fault(ChainFault::UnnamedElement(element.kind()))),
        }
    }

    Ok(Arc::from(segments.join(".")))
}
