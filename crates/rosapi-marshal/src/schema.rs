//! Static record schemas.
//!
//! This module provides:
//! - [`Record`] - Trait for types that can be decoded from and encoded to attribute sets
//! - [`Schema`] - The per-type field table, in declaration order
//! - [`FieldDef`] - One field: its resolved [`FieldSpec`] plus typed accessors
//! - [`wire_record!`](crate::wire_record) - Declares the schema for a struct
//!
//! A schema is built once per record type and reused for every call, so the
//! resolved field specs are identical across calls.

use std::fmt;

use crate::error::ValueError;
use crate::spec::{FieldKind, FieldSpec};
use crate::value::WireValue;

type DecodeFn<R> = Box<dyn Fn(&mut R, &str) -> Result<(), ValueError> + Send + Sync>;
type EncodeFn<R> = Box<dyn Fn(&R) -> Option<String> + Send + Sync>;

// ============================================================================
// Record Trait
// ============================================================================

/// A typed record with a static wire schema.
///
/// Implement it with [`wire_record!`](crate::wire_record) rather than by hand.
pub trait Record: Default + 'static {
    /// The schema for this record type.
    fn schema() -> &'static Schema<Self>;
}

// ============================================================================
// Field Definition
// ============================================================================

/// One field of a record type.
pub struct FieldDef<R> {
    name: &'static str,
    spec: FieldSpec,
    trim: Option<&'static str>,
    decode: DecodeFn<R>,
    encode: EncodeFn<R>,
}

impl<R: 'static> FieldDef<R> {
    /// Create a field definition.
    ///
    /// `name` is the declared field name, `tag` the optional override
    /// (`name`, `name,ro` or `-`); the accessors select the field.
    pub fn new<T: WireValue + 'static>(
        name: &'static str,
        tag: Option<&'static str>,
        get: fn(&R) -> &T,
        get_mut: fn(&mut R) -> &mut T,
    ) -> Self {
        FieldDef {
            name,
            spec: FieldSpec::resolve(name, tag, T::KIND),
            trim: None,
            decode: Box::new(move |record, raw| {
                *get_mut(record) = T::from_wire(raw)?;
                Ok(())
            }),
            encode: Box::new(move |record| {
                let value = get(record);
                if value.is_empty_value() {
                    None
                } else {
                    Some(value.to_wire())
                }
            }),
        }
    }

    /// Strip these characters from both ends of the raw value before decoding.
    pub fn with_trim(mut self, cutset: &'static str) -> Self {
        self.trim = Some(cutset);
        self
    }
}

impl<R> FieldDef<R> {
    /// The declared field name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The resolved wire spec.
    pub fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    /// The trim cutset, if any.
    pub fn trim(&self) -> Option<&'static str> {
        self.trim
    }

    /// Apply the trim directive to a raw value.
    pub fn trimmed<'a>(&self, raw: &'a str) -> &'a str {
        match self.trim {
            Some(cutset) => raw.trim_matches(|c: char| cutset.contains(c)),
            None => raw,
        }
    }

    /// Parse `raw` into the field of `record`.
    pub(crate) fn assign(&self, record: &mut R, raw: &str) -> Result<(), ValueError> {
        (self.decode)(record, raw)
    }

    /// The field's wire value, or `None` when it holds its kind's empty value.
    pub(crate) fn non_empty_value(&self, record: &R) -> Option<String> {
        (self.encode)(record)
    }
}

impl<R> fmt::Debug for FieldDef<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDef")
            .field("name", &self.name)
            .field("spec", &self.spec)
            .field("trim", &self.trim)
            .finish()
    }
}

// ============================================================================
// Schema
// ============================================================================

/// The field table of a record type.
#[derive(Debug)]
pub struct Schema<R> {
    type_name: &'static str,
    fields: Vec<FieldDef<R>>,
    identifier: Option<usize>,
}

impl<R: 'static> Schema<R> {
    /// Start building a schema.
    pub fn builder(type_name: &'static str) -> SchemaBuilder<R> {
        SchemaBuilder {
            type_name,
            fields: Vec::new(),
            identifier: None,
        }
    }
}

impl<R> Schema<R> {
    /// Name of the record type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldDef<R>] {
        &self.fields
    }

    /// Look up a field by its declared name.
    pub fn field(&self, name: &str) -> Option<&FieldDef<R>> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Look up a field by its wire name.
    pub fn field_by_wire_name(&self, wire_name: &str) -> Option<&FieldDef<R>> {
        self.fields.iter().find(|f| f.spec.wire_name == wire_name)
    }

    /// The identifier field, if the type declares one.
    pub fn identifier(&self) -> Option<&FieldDef<R>> {
        self.identifier.map(|idx| &self.fields[idx])
    }

    /// Resolved specs in declaration order.
    pub fn specs(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().map(|f| &f.spec)
    }
}

/// Builder for [`Schema`].
pub struct SchemaBuilder<R> {
    type_name: &'static str,
    fields: Vec<FieldDef<R>>,
    identifier: Option<&'static str>,
}

impl<R> SchemaBuilder<R> {
    /// Append a field; declaration order is encoding order.
    pub fn field(mut self, field: FieldDef<R>) -> Self {
        self.fields.push(field);
        self
    }

    /// Name the identifier field. It must be a text field.
    pub fn identifier(mut self, name: &'static str) -> Self {
        self.identifier = Some(name);
        self
    }

    /// Finish the schema.
    ///
    /// An identifier that names no text field is dropped; the record then has
    /// no identifier and injection is a no-op.
    pub fn build(self) -> Schema<R> {
        let identifier = self.identifier.and_then(|name| {
            let idx = self
                .fields
                .iter()
                .position(|f| f.name == name && f.spec.kind == FieldKind::Text);
            if idx.is_none() {
                log::warn!(
                    "{}: identifier `{}` is not a text field, ignoring",
                    self.type_name,
                    name
                );
            }
            idx
        });

        Schema {
            type_name: self.type_name,
            fields: self.fields,
            identifier,
        }
    }
}

// ============================================================================
// Declaration Macro
// ============================================================================

#[doc(hidden)]
#[macro_export]
macro_rules! __wire_opt {
    () => {
        ::std::option::Option::None
    };
    ($value:expr) => {
        ::std::option::Option::Some($value)
    };
}

/// Declare the wire schema of a struct.
///
/// ```rust,ignore
/// #[derive(Debug, Default)]
/// struct IpAddress {
///     id: String,
///     address: String,
///     actual_interface: String,
///     dynamic: bool,
///     comment: String,
/// }
///
/// wire_record! {
///     IpAddress, identifier = id;
///     id: ".id",
///     address,
///     actual_interface,
///     dynamic: "dynamic,ro",
///     comment trim "\"",
/// }
/// ```
///
/// Each entry is `field`, optionally followed by `: "tag"` and `trim "chars"`.
/// Every field type must implement [`WireValue`](crate::WireValue).
#[macro_export]
macro_rules! wire_record {
    (
        $ty:ident $(, identifier = $id:ident)? ;
        $( $field:ident $(: $tag:literal)? $(trim $trim:literal)? ),* $(,)?
    ) => {
        impl $crate::Record for $ty {
            fn schema() -> &'static $crate::Schema<Self> {
                static SCHEMA: ::std::sync::OnceLock<$crate::Schema<$ty>> =
                    ::std::sync::OnceLock::new();
                SCHEMA.get_or_init(|| {
                    $crate::Schema::<$ty>::builder(stringify!($ty))
                        $( .identifier(stringify!($id)) )?
                        $(
                            .field(
                                $crate::FieldDef::<$ty>::new(
                                    stringify!($field),
                                    $crate::__wire_opt!($($tag)?),
                                    |record: &$ty| &record.$field,
                                    |record: &mut $ty| &mut record.$field,
                                )
                                $( .with_trim($trim) )?
                            )
                        )*
                        .build()
                })
            }
        }
    };
}

// ============================================================================
// Tests
// ============================================================================
