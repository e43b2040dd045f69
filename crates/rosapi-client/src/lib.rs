//! Typed RouterOS API sessions
//!
//! This crate ties the wire vocabulary of `rosapi-proto` to the marshaling
//! engine of `rosapi-marshal`:
//!
//! - [`Session`] serializes every command/reply exchange on one connection and
//!   resynchronizes the connection after a failed exchange
//! - record exchanges (`print`, `find`, `add`, `set`, ...) encode and decode
//!   [`Record`](rosapi_marshal::Record) types on top of it
//! - [`SessionConfig`] is loaded from YAML
//!
//! # Example
//!
//! ```rust,ignore
//! use rosapi_client::Session;
//!
//! let session = Session::new(connection);
//! let mut address = IpAddress { address: "10.0.0.1/24".into(), interface: "ether1".into(), ..Default::default() };
//! session.add("/ip/address/add", &mut address)?;
//! let all: Vec<IpAddress> = session.print("/ip/address/print")?;
//! ```

mod config;
mod error;
mod session;

pub use config::*;
pub use error::*;
pub use session::*;
