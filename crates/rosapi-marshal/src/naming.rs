//! Conversion between record field names and wire names.
//!
//! Wire names are lowercase and hyphen-separated (`actual-interface`).
//! Record names are either concatenated capitalized words (`ActualInterface`)
//! or Rust snake_case (`actual_interface`); both map to the same wire name.
//!
//! Every uppercase letter after the first character starts a new segment, so
//! acronym runs split letter by letter: `MTU` becomes `m-t-u`. Fields named
//! that way need an explicit wire name.

/// Convert a record field name to its wire name.
///
/// A name must use one convention or the other. Mixing them (`Actual_Interface`)
/// yields a doubled separator (`actual--interface`).
pub fn to_wire_name(field_name: &str) -> String {
    let mut wire = String::with_capacity(field_name.len() + 2);
    for (i, c) in field_name.chars().enumerate() {
        if c == '_' {
            wire.push('-');
            continue;
        }
        if i > 0 && c.is_uppercase() {
            wire.push('-');
        }
        wire.extend(c.to_lowercase());
    }
    wire
}

/// Convert a wire name to the capitalized record convention.
///
/// `actual-interface` becomes `ActualInterface`. Decoding never needs this;
/// it exists for tooling that generates record declarations.
pub fn to_field_name(wire_name: &str) -> String {
    let mut name = String::with_capacity(wire_name.len());
    for segment in wire_name.split('-') {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
    }
    name
}
