//! RouterOS API sentence vocabulary
//!
//! This crate provides the types that travel over a RouterOS API connection
//! once the transport has framed them into sentences. It deliberately knows
//! nothing about sockets, login or the command-path tree; those live in
//! whatever implements [`Transport`].
//!
//! # Protocol Overview
//!
//! Every exchange is a command sentence followed by zero or more reply
//! sentences and a terminal `!done`:
//!
//! - **Command** (host → device): a command path such as `/ip/address/add`
//!   followed by argument words
//! - **Attribute word**: `=<name>=<value>`, e.g. `=interface=ether1`
//! - **Query word**: `?<name>=<value>`, used by `print` to filter
//! - **Identifier**: the pseudo-attribute `.id` addresses an existing item
//! - **Reply** (device → host): each `!re` sentence is a flat [`AttributeSet`];
//!   the `!done` sentence may carry `ret` holding a newly created item's id
//!
//! # Example
//!
//! ```rust,ignore
//! use rosapi_proto::{AttributeSet, Token};
//!
//! let words = vec![Token::id("*1").to_string(), Token::attribute("comment", "uplink").to_string()];
//! let attrs = AttributeSet::from_words(&words);
//! assert_eq!(attrs.get("comment"), "uplink");
//! ```

mod codec;
mod error;
mod reply;
mod tokens;
mod transport;

pub use codec::*;
pub use error::*;
pub use reply::*;
pub use tokens::*;
pub use transport::*;
