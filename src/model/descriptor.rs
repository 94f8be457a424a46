//! Schema descriptor records and their kind taxonomy.
//!
//! A [`Descriptor`] is one element of a parsed schema: a file, a message, an
//! enum, a service, or one of their non-nameable members (fields, oneofs,
//! methods). The parser produces these; the resolve layer only reads them.

use std::fmt;

use smol_str::SmolStr;

use super::ids::DescriptorId;

// ============================================================================
// DESCRIPTOR KIND
// ============================================================================

/// The closed set of schema-element kinds.
///
/// Only a subset of kinds is *nameable* — addressable by a global qualified
/// name. Files are never nameable themselves but are valid ancestors (they
/// contribute their package prefix).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DescriptorKind {
    /// A schema file; carries a package instead of a local name.
    File,
    /// A message type (may nest further messages and enums).
    Message,
    /// An enum type.
    Enum,
    /// A service declaration.
    Service,
    /// A message field (non-nameable leaf).
    Field,
    /// A oneof group (non-nameable leaf).
    Oneof,
    /// A service method (non-nameable leaf).
    Method,
}

impl DescriptorKind {
    /// Check if this kind participates in the name table.
    ///
    /// Messages, enums, and services get a global qualified name; everything
    /// else is addressed only through its enclosing type.
    pub fn is_nameable(self) -> bool {
        matches!(
            self,
            DescriptorKind::Message | DescriptorKind::Enum | DescriptorKind::Service
        )
    }

    /// Check if this is the file kind.
    pub fn is_file(self) -> bool {
        matches!(self, DescriptorKind::File)
    }

    /// Lowercase noun for diagnostics ("message", "enum", ...).
    pub fn noun(self) -> &'static str {
        match self {
            DescriptorKind::File => "file",
            DescriptorKind::Message => "message",
            DescriptorKind::Enum => "enum",
            DescriptorKind::Service => "service",
            DescriptorKind::Field => "field",
            DescriptorKind::Oneof => "oneof",
            DescriptorKind::Method => "method",
        }
    }
}

impl fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

// ============================================================================
// DESCRIPTOR
// ============================================================================

/// A single schema element.
///
/// Flat record rather than a variant-per-kind enum: every descriptor carries
/// its [`DescriptorId`], its [`DescriptorKind`], and either a local name (all
/// kinds except `File`) or a package (files only, possibly empty).
///
/// Descriptors are immutable once constructed; the resolve layer shares them
/// as `Arc<Descriptor>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Descriptor {
    id: DescriptorId,
    kind: DescriptorKind,
    /// Local (unqualified) name. `None` only for files and for placeholder
    /// elements the parser could not name.
    name: Option<SmolStr>,
    /// Package declared by a file descriptor. `None` for every other kind.
    package: Option<SmolStr>,
}

impl Descriptor {
    /// Create a file descriptor with the given package (possibly empty).
    pub fn file(id: DescriptorId, package: impl Into<SmolStr>) -> Self {
        Self {
            id,
            kind: DescriptorKind::File,
            name: None,
            package: Some(package.into()),
        }
    }

    /// Create a named descriptor of any non-file kind.
    ///
    /// # Panics
    /// Panics if `kind` is [`DescriptorKind::File`]; files carry a package,
    /// not a local name — use [`Descriptor::file`].
    pub fn named(id: DescriptorId, kind: DescriptorKind, name: impl Into<SmolStr>) -> Self {
        assert!(
            !kind.is_file(),
            "file descriptors carry a package, not a local name"
        );
        Self {
            id,
            kind,
            name: Some(name.into()),
            package: None,
        }
    }

    /// Create a nameless placeholder descriptor of a non-file kind.
    ///
    /// Parsers may emit these for malformed input; the resolve layer rejects
    /// them with a typed error instead of composing a broken name.
    pub fn anonymous(id: DescriptorId, kind: DescriptorKind) -> Self {
        assert!(!kind.is_file(), "use Descriptor::file for file descriptors");
        Self {
            id,
            kind,
            name: None,
            package: None,
        }
    }

    /// This descriptor's identity.
    #[inline]
    pub fn id(&self) -> DescriptorId {
        self.id
    }

    /// This descriptor's kind.
    #[inline]
    pub fn kind(&self) -> DescriptorKind {
        self.kind
    }

    /// The local (unqualified) name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The declared package, for file descriptors. Empty string means the
    /// file declares no package.
    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    /// Check if this descriptor participates in the name table.
    #[inline]
    pub fn is_nameable(&self) -> bool {
        self.kind.is_nameable()
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.name.as_deref(), self.package.as_deref()) {
            (Some(name), _) => write!(f, "{} `{}`", self.kind, name),
            (None, Some(pkg)) if !pkg.is_empty() => write!(f, "file (package `{pkg}`)"),
            (None, Some(_)) => write!(f, "file (no package)"),
            (None, None) => write!(f, "unnamed {}", self.kind),
        }
    }
}
