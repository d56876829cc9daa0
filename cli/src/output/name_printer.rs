//! `kind[.group]/name` printer for resource identities.
//!
//! clutch resources carry type metadata and a name but no full object
//! metadata, so the printer checks capabilities in order instead of assuming
//! one accessor: a direct name accessor, then generic object metadata, then
//! a placeholder.

use std::io::Write;

use serde_json::Value;
use thiserror::Error;

use crate::domain::{Cluster, Registry, TypeMeta};

/// Placeholder for a name or kind that could not be resolved.
pub const UNKNOWN: &str = "<unknown>";

#[derive(Debug, Error)]
pub enum PrintError {
    #[error("missing kind for resource with name {name}")]
    MissingKind { name: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ── Capabilities ──────────────────────────────────────────────────────────────

/// Objects that expose a name directly.
pub trait Named {
    fn name(&self) -> &str;
}

/// Objects that carry generic object metadata.
pub trait MetadataAccessor {
    fn metadata_name(&self) -> Option<&str>;
}

/// Anything the name printer can render.
///
/// Every capability is optional; the defaults advertise none.
pub trait PrintableObject {
    /// Explicit type descriptor.
    fn type_meta(&self) -> Option<&TypeMeta> {
        None
    }

    /// Type descriptor read from a generic document.
    fn unstructured_type(&self) -> Option<TypeMeta> {
        None
    }

    fn as_named(&self) -> Option<&dyn Named> {
        None
    }

    fn as_metadata(&self) -> Option<&dyn MetadataAccessor> {
        None
    }
}

/// Kind plus API group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupKind {
    pub group: String,
    pub kind: String,
}

impl GroupKind {
    fn from_type_meta(tm: &TypeMeta) -> Self {
        Self {
            group: tm.group().to_string(),
            kind: tm.kind.clone(),
        }
    }

    fn unknown() -> Self {
        Self {
            group: String::new(),
            kind: UNKNOWN.to_string(),
        }
    }
}

/// Name of `obj`: name accessor, then object metadata, then `<unknown>`.
#[must_use]
pub fn object_name(obj: &dyn PrintableObject) -> String {
    obj.as_named()
        .map(Named::name)
        .filter(|n| !n.is_empty())
        .or_else(|| {
            obj.as_metadata()
                .and_then(MetadataAccessor::metadata_name)
                .filter(|n| !n.is_empty())
        })
        .unwrap_or(UNKNOWN)
        .to_string()
}

/// Group and kind of `obj`: explicit descriptor, then generic, then `<unknown>`.
#[must_use]
pub fn object_group_kind(obj: &dyn PrintableObject) -> GroupKind {
    if let Some(tm) = obj.type_meta().filter(|tm| !tm.kind.is_empty()) {
        return GroupKind::from_type_meta(tm);
    }
    if let Some(tm) = obj.unstructured_type().filter(|tm| !tm.kind.is_empty()) {
        return GroupKind::from_type_meta(&tm);
    }
    GroupKind::unknown()
}

// ── Printer ───────────────────────────────────────────────────────────────────

/// Prints `kind[.group]/name[ operation]` lines.
#[derive(Debug, Clone, Default)]
pub struct NamePrinter {
    /// Omit the operation and print only the identity.
    pub short_output: bool,
    /// Action that was applied to the object, e.g. `created`.
    pub operation: String,
}

impl NamePrinter {
    #[must_use]
    pub fn new(operation: &str, short_output: bool) -> Self {
        Self {
            short_output,
            operation: operation.to_string(),
        }
    }

    /// Write one identity line for `obj` to `w`.
    ///
    /// # Errors
    ///
    /// Returns `MissingKind` (writing nothing) if no kind can be resolved,
    /// or `Io` if the sink fails.
    pub fn print_obj(
        &self,
        obj: &dyn PrintableObject,
        w: &mut dyn Write,
    ) -> Result<(), PrintError> {
        let name = object_name(obj);
        let group_kind = object_group_kind(obj);
        let line = self.format_line(&name, &group_kind)?;
        w.write_all(line.as_bytes())?;
        Ok(())
    }

    fn format_line(&self, name: &str, gk: &GroupKind) -> Result<String, PrintError> {
        if gk.kind.is_empty() || gk.kind == UNKNOWN {
            return Err(PrintError::MissingKind {
                name: name.to_string(),
            });
        }

        let operation = if self.short_output || self.operation.is_empty() {
            String::new()
        } else {
            format!(" {}", self.operation)
        };

        let kind = gk.kind.to_lowercase();
        if gk.group.is_empty() {
            Ok(format!("{kind}/{name}{operation}\n"))
        } else {
            Ok(format!("{kind}.{}/{name}{operation}\n", gk.group))
        }
    }
}

// ── Implementations for clutch resources ──────────────────────────────────────

impl Named for Cluster {
    fn name(&self) -> &str {
        &self.name
    }
}

impl PrintableObject for Cluster {
    fn type_meta(&self) -> Option<&TypeMeta> {
        Some(&self.type_meta)
    }

    fn as_named(&self) -> Option<&dyn Named> {
        Some(self)
    }
}

impl Named for Registry {
    fn name(&self) -> &str {
        &self.name
    }
}

impl PrintableObject for Registry {
    fn type_meta(&self) -> Option<&TypeMeta> {
        Some(&self.type_meta)
    }

    fn as_named(&self) -> Option<&dyn Named> {
        Some(self)
    }
}

/// Arbitrary resource document with `apiVersion`, `kind` and `metadata.name`.
#[derive(Debug, Clone, PartialEq)]
pub struct Unstructured(pub Value);

impl MetadataAccessor for Unstructured {
    fn metadata_name(&self) -> Option<&str> {
        self.0.get("metadata")?.get("name")?.as_str()
    }
}

impl PrintableObject for Unstructured {
    fn unstructured_type(&self) -> Option<TypeMeta> {
        let field = |key: &str| self.0.get(key).and_then(Value::as_str).unwrap_or_default();
        Some(TypeMeta::new(field("apiVersion"), field("kind")))
    }

    fn as_metadata(&self) -> Option<&dyn MetadataAccessor> {
        Some(self)
    }
}

// ── Unit tests ────────────────────────────────────────────────────────────────
