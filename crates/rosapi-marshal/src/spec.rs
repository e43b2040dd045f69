//! Field specifications: how one record field appears on the wire.
//!
//! A field may carry an override tag of the form `primary[,qualifier]`:
//! - `-` excludes the field from both decoding and encoding
//! - `name` sets the wire name explicitly
//! - `name,ro` additionally marks the field read-only (decoded, never encoded)
//!
//! Without a tag, or with an empty primary value, the wire name is derived
//! from the field name.

use std::fmt;

use crate::naming::to_wire_name;

/// Tag value that excludes a field.
pub const EXCLUDE_TAG: &str = "-";

/// Tag qualifier that marks a field read-only.
pub const READ_ONLY_QUALIFIER: &str = "ro";

/// The semantic kind of a field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// Boolean.
    Bool,
    /// Base-10 integer.
    Integer,
    /// IP address; unparseable values are errors.
    Ip,
    /// IP address; unparseable values decode as unset.
    IpBestEffort,
    /// Duration such as `1h30m`.
    Duration,
    /// Comma-separated list of text values.
    TextList,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Text => write!(f, "text"),
            FieldKind::Bool => write!(f, "bool"),
            FieldKind::Integer => write!(f, "integer"),
            FieldKind::Ip => write!(f, "ip"),
            FieldKind::IpBestEffort => write!(f, "ip (best effort)"),
            FieldKind::Duration => write!(f, "duration"),
            FieldKind::TextList => write!(f, "text list"),
        }
    }
}

/// How a field is named and treated on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    /// Key used in attribute sets and argument words.
    pub wire_name: String,
    /// Kind of the field's value.
    pub kind: FieldKind,
    /// Never decoded or encoded.
    pub excluded: bool,
    /// Decoded but never encoded.
    pub read_only: bool,
}

impl FieldSpec {
    /// Resolve the spec for a field from its declared name and optional tag.
    pub fn resolve(field_name: &str, tag: Option<&str>, kind: FieldKind) -> FieldSpec {
        let mut spec = FieldSpec {
            wire_name: String::new(),
            kind,
            excluded: false,
            read_only: false,
        };

        let (primary, qualifier) = match tag {
            Some(tag) => match tag.split_once(',') {
                Some((primary, qualifier)) => (primary, Some(qualifier)),
                None => (tag, None),
            },
            None => ("", None),
        };

        if primary == EXCLUDE_TAG {
            spec.excluded = true;
            spec.wire_name = to_wire_name(field_name);
            return spec;
        }

        spec.read_only = qualifier == Some(READ_ONLY_QUALIFIER);
        spec.wire_name = if primary.is_empty() {
            to_wire_name(field_name)
        } else {
            primary.to_string()
        };
        spec
    }

    /// Whether the encoder may emit this field at all.
    pub fn is_writable(&self) -> bool {
        !self.excluded && !self.read_only
    }
}
