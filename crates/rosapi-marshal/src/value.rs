//! Wire value conversion.
//!
//! This module provides:
//! - [`WireValue`] - Trait for types a record field may have
//! - [`LenientIp`] - An IP address that decodes unparseable input as unset
//!
//! Every conversion goes through the raw wire string. Nothing is cached: a
//! value is parsed when decoded and formatted when encoded.

use std::net::IpAddr;
use std::time::Duration;

use crate::duration::{format_duration, parse_duration};
use crate::error::ValueError;
use crate::spec::FieldKind;

/// Separator between the elements of a [`FieldKind::TextList`] value.
pub const LIST_SEPARATOR: &str = ",";

// ============================================================================
// WireValue Trait
// ============================================================================

/// Trait for types that can be stored in a record field.
///
/// Implement this for application enumerations that travel as text.
pub trait WireValue: Sized {
    /// The semantic kind reported in the field's spec.
    const KIND: FieldKind;

    /// Parse a raw wire value.
    fn from_wire(raw: &str) -> Result<Self, ValueError>;

    /// Format the value the way [`WireValue::from_wire`] reads it back.
    fn to_wire(&self) -> String;

    /// Whether this is the kind's empty value, which the encoder omits.
    ///
    /// Kinds without a notion of emptiness are always encoded.
    fn is_empty_value(&self) -> bool {
        false
    }
}

// ============================================================================
// Text
// ============================================================================

impl WireValue for String {
    const KIND: FieldKind = FieldKind::Text;

    fn from_wire(raw: &str) -> Result<Self, ValueError> {
        Ok(raw.to_string())
    }

    fn to_wire(&self) -> String {
        self.clone()
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

// ============================================================================
// Boolean
// ============================================================================

/// Parse one of the canonical boolean tokens.
pub fn parse_bool(raw: &str) -> Result<bool, ValueError> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ValueError::InvalidBool(raw.to_string())),
    }
}

impl WireValue for bool {
    const KIND: FieldKind = FieldKind::Bool;

    fn from_wire(raw: &str) -> Result<Self, ValueError> {
        parse_bool(raw)
    }

    fn to_wire(&self) -> String {
        self.to_string()
    }

    fn is_empty_value(&self) -> bool {
        !*self
    }
}

// ============================================================================
// Integers
// ============================================================================

macro_rules! impl_integer_wire_value {
    ($($ty:ty),*) => {
        $(
            impl WireValue for $ty {
                const KIND: FieldKind = FieldKind::Integer;

                fn from_wire(raw: &str) -> Result<Self, ValueError> {
                    Ok(raw.parse::<$ty>()?)
                }

                fn to_wire(&self) -> String {
                    self.to_string()
                }

                fn is_empty_value(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_integer_wire_value!(i64, i32, u64, u32, u16);

// ============================================================================
// IP Addresses
// ============================================================================

/// Strict IP address: an empty wire value is unset, anything unparseable is an error.
impl WireValue for Option<IpAddr> {
    const KIND: FieldKind = FieldKind::Ip;

    fn from_wire(raw: &str) -> Result<Self, ValueError> {
        if raw.is_empty() {
            return Ok(None);
        }
        Ok(Some(raw.parse::<IpAddr>()?))
    }

    fn to_wire(&self) -> String {
        self.map(|ip| ip.to_string()).unwrap_or_default()
    }

    fn is_empty_value(&self) -> bool {
        self.is_none()
    }
}

/// An IP address decoded on a best-effort basis.
///
/// Values that do not parse as an address (for example `10.0.0.0/24` or
/// `auto`) decode as unset instead of failing the whole record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LenientIp(pub Option<IpAddr>);

impl LenientIp {
    /// The address, if one was parsed.
    pub fn get(&self) -> Option<IpAddr> {
        self.0
    }
}

impl From<IpAddr> for LenientIp {
    fn from(ip: IpAddr) -> Self {
        LenientIp(Some(ip))
    }
}

impl WireValue for LenientIp {
    const KIND: FieldKind = FieldKind::IpBestEffort;

    fn from_wire(raw: &str) -> Result<Self, ValueError> {
        match raw.parse::<IpAddr>() {
            Ok(ip) => Ok(LenientIp(Some(ip))),
            Err(_) => {
                if !raw.is_empty() {
                    log::trace!("treating unparseable address {:?} as unset", raw);
                }
                Ok(LenientIp(None))
            }
        }
    }

    fn to_wire(&self) -> String {
        self.0.to_wire()
    }

    fn is_empty_value(&self) -> bool {
        self.0.is_none()
    }
}

// ============================================================================
// Durations
// ============================================================================

impl WireValue for Duration {
    const KIND: FieldKind = FieldKind::Duration;

    fn from_wire(raw: &str) -> Result<Self, ValueError> {
        parse_duration(raw)
    }

    fn to_wire(&self) -> String {
        format_duration(*self)
    }
}

// ============================================================================
// Repeated Text
// ============================================================================

/// Comma-separated text.
///
/// A list whose joined form is empty (`[]` or `[""]`) is the empty value and
/// decodes back as `[]`. Elements must not contain [`LIST_SEPARATOR`].
impl WireValue for Vec<String> {
    const KIND: FieldKind = FieldKind::TextList;

    fn from_wire(raw: &str) -> Result<Self, ValueError> {
        if raw.is_empty() {
            return Ok(Vec::new());
        }
        Ok(raw.split(LIST_SEPARATOR).map(str::to_string).collect())
    }

    fn to_wire(&self) -> String {
        self.join(LIST_SEPARATOR)
    }

    fn is_empty_value(&self) -> bool {
        match self.as_slice() {
            [] => true,
            [only] => only.is_empty(),
            _ => false,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
