//! Attribute marshaling for the RouterOS API
//!
//! This crate converts between the flat, text-only attribute sets that travel
//! on the wire and strongly typed application records.
//!
//! # Overview
//!
//! - **Naming**: record field names map to wire names (`ActualInterface` and
//!   `actual_interface` both become `actual-interface`)
//! - **Field specs**: an override tag renames a field, marks it read-only
//!   (`name,ro`) or excludes it (`-`)
//! - **Schemas**: [`wire_record!`] declares a static field table per record type
//! - **Decoding**: attribute sets are coerced into records additively
//! - **Encoding**: records become `=name=value` words, empty values omitted
//! - **Injection**: a created item's `ret` id is copied into the identifier field
//!
//! # Example
//!
//! ```rust,ignore
//! use rosapi_marshal::{decode, encode, wire_record};
//!
//! #[derive(Debug, Default)]
//! struct Interface {
//!     id: String,
//!     name: String,
//!     mtu: i64,
//!     running: bool,
//! }
//!
//! wire_record! {
//!     Interface, identifier = id;
//!     id: ".id",
//!     name,
//!     mtu,
//!     running: "running,ro",
//! }
//!
//! let iface: Interface = decode(&attrs)?;
//! let words = encode(&iface);
//! ```

mod decode;
mod duration;
mod encode;
mod error;
mod inject;
mod naming;
mod schema;
mod spec;
mod value;

pub use decode::*;
pub use duration::*;
pub use encode::*;
pub use error::*;
pub use inject::*;
pub use naming::*;
pub use schema::*;
pub use spec::*;
pub use value::*;
