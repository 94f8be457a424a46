//! Foundation types for the schemac toolchain.
//!
//! This module provides fundamental types used throughout the compiler:
//! - [`FileId`] - Interned schema-file identifiers
//!
//! This module has NO dependencies on other schemac modules.

mod file_id;

pub use file_id::FileId;
