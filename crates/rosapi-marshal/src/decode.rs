//! Attribute set → record.
//!
//! Decoding is additive: only fields whose wire name is present in the set
//! are written, everything else keeps its current value. Attributes with no
//! matching field are ignored.

use rosapi_proto::AttributeSet;

use crate::error::{MarshalError, MarshalResult};
use crate::schema::Record;

/// Decode one attribute set into an existing record.
///
/// Fields are visited in declaration order; the first coercion failure stops
/// decoding and is returned. Fields decoded before the failure keep their new
/// values.
pub fn decode_into<R: Record>(attrs: &AttributeSet, record: &mut R) -> MarshalResult<()> {
    for field in R::schema().fields() {
        let spec = field.spec();
        if spec.excluded {
            continue;
        }

        let raw = match attrs.lookup(&spec.wire_name) {
            Some(raw) => field.trimmed(raw),
            None => continue,
        };

        if let Err(source) = field.assign(record, raw) {
            log::debug!(
                "{}: failed to decode `{}` from {:?}: {}",
                R::schema().type_name(),
                spec.wire_name,
                raw,
                source
            );
            return Err(MarshalError::Coercion {
                field: spec.wire_name.clone(),
                value: raw.to_string(),
                source,
            });
        }
    }
    Ok(())
}

/// Decode one attribute set into a fresh record.
pub fn decode<R: Record>(attrs: &AttributeSet) -> MarshalResult<R> {
    let mut record = R::default();
    decode_into(attrs, &mut record)?;
    Ok(record)
}

/// Decode each attribute set into a fresh record and append it to `out`.
///
/// Records are appended in the order of `sets`. The first failure aborts the
/// batch: records appended before it stay in `out`, the failing one and
/// everything after it are not appended.
pub fn decode_many<'a, R, I>(sets: I, out: &mut Vec<R>) -> MarshalResult<()>
where
    R: Record,
    I: IntoIterator<Item = &'a AttributeSet>,
{
    for attrs in sets {
        out.push(decode(attrs)?);
    }
    Ok(())
}

/// Apply every attribute set to the same record, in order.
///
/// Later sets overwrite values from earlier ones. This is how a single record
/// is read from a reply that may carry several sentences.
pub fn decode_reply_into<'a, R, I>(sets: I, record: &mut R) -> MarshalResult<()>
where
    R: Record,
    I: IntoIterator<Item = &'a AttributeSet>,
{
    for attrs in sets {
        decode_into(attrs, record)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValueError;
    use crate::value::LenientIp;
    use std::net::{IpAddr, Ipv4Addr};
    use std::time::Duration;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Interface {
        id: String,
        name: String,
        mtu: i64,
        running: bool,
        comment: String,
        slave_ports: Vec<String>,
        keepalive: Duration,
        secret: String,
    }

    crate::wire_record! {
        Interface, identifier = id;
        id: ".id",
        name,
        mtu,
        running,
        comment trim "\"",
        slave_ports,
        keepalive: "keepalive-timeout",
        secret: "-",
    }

    #[derive(Debug, Default, PartialEq)]
    struct Neighbor {
        address: Option<IpAddr>,
        address4: LenientIp,
    }

    crate::wire_record! {
        Neighbor;
        address,
        address4,
    }

    fn attrs(pairs: &[(&str, &str)]) -> AttributeSet {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_decode_scenario() {
        let record: Interface =
            decode(&attrs(&[("name", "eth1"), ("mtu", "1500"), ("running", "true")])).unwrap();
        assert_eq!(record.name, "eth1");
        assert_eq!(record.mtu, 1500);
        assert!(record.running);
    }

    #[test]
    fn test_decode_is_additive() {
        let mut record = Interface {
            name: "old".to_string(),
            mtu: 1400,
            comment: "keep me".to_string(),
            ..Default::default()
        };
        decode_into(&attrs(&[("mtu", "9000")]), &mut record).unwrap();
        assert_eq!(record.mtu, 9000);
        assert_eq!(record.name, "old");
        assert_eq!(record.comment, "keep me");
    }

    #[test]
    fn test_unknown_attributes_ignored() {
        let record: Interface =
            decode(&attrs(&[("name", "eth1"), ("fp-rx-byte", "12"), (".nextid", "*2")])).unwrap();
        assert_eq!(record.name, "eth1");
    }

    #[test]
    fn test_excluded_field_not_decoded() {
        let record: Interface = decode(&attrs(&[("secret", "s3cret"), ("-", "x")])).unwrap();
        assert_eq!(record.secret, "");
    }

    #[test]
    fn test_tagged_names_and_kinds() {
        let record: Interface = decode(&attrs(&[
            (".id", "*1"),
            ("slave-ports", "ether2,ether3"),
            ("keepalive-timeout", "1m30s"),
        ]))
        .unwrap();
        assert_eq!(record.id, "*1");
        assert_eq!(record.slave_ports, vec!["ether2", "ether3"]);
        assert_eq!(record.keepalive, Duration::from_secs(90));
    }

    #[test]
    fn test_trim_applied_before_assignment() {
        let record: Interface = decode(&attrs(&[("comment", "\"uplink\"")])).unwrap();
        assert_eq!(record.comment, "uplink");
    }

    #[test]
    fn test_coercion_error_surfaces() {
        let err = decode::<Interface>(&attrs(&[("mtu", "big")])).unwrap_err();
        assert_eq!(err.field(), "mtu");
        match err {
            MarshalError::Coercion { value, source, .. } => {
                assert_eq!(value, "big");
                assert!(matches!(source, ValueError::InvalidInteger(_)));
            }
        }

        let err = decode::<Interface>(&attrs(&[("running", "maybe")])).unwrap_err();
        assert_eq!(err.field(), "running");

        let err = decode::<Interface>(&attrs(&[("keepalive-timeout", "soon")])).unwrap_err();
        assert_eq!(err.field(), "keepalive-timeout");
    }

    #[test]
    fn test_strict_and_lenient_ip() {
        let record: Neighbor =
            decode(&attrs(&[("address", "10.0.0.1"), ("address4", "auto")])).unwrap();
        assert_eq!(record.address, Some(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1))));
        assert_eq!(record.address4, LenientIp(None));

        let err = decode::<Neighbor>(&attrs(&[("address", "auto")])).unwrap_err();
        assert_eq!(err.field(), "address");
    }

    #[test]
    fn test_decode_many_preserves_order() {
        let sets: Vec<AttributeSet> = ["ether1", "ether2", "ether3"]
            .iter()
            .map(|name| attrs(&[("name", *name)]))
            .collect();
        let mut out: Vec<Interface> = Vec::new();
        decode_many(&sets, &mut out).unwrap();
        let names: Vec<&str> = out.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["ether1", "ether2", "ether3"]);
    }

    #[test]
    fn test_decode_many_appends() {
        let mut out = vec![Interface {
            name: "existing".to_string(),
            ..Default::default()
        }];
        decode_many(&[attrs(&[("name", "new")])], &mut out).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].name, "existing");
        assert_eq!(out[1].name, "new");
    }

    #[test]
    fn test_decode_many_keeps_partial_results() {
        let sets = vec![
            attrs(&[("name", "ether1"), ("mtu", "1500")]),
            attrs(&[("name", "ether2"), ("mtu", "1500")]),
            attrs(&[("name", "ether3"), ("mtu", "oops")]),
            attrs(&[("name", "ether4"), ("mtu", "1500")]),
            attrs(&[("name", "ether5"), ("mtu", "1500")]),
        ];
        let mut out: Vec<Interface> = Vec::new();
        let err = decode_many(&sets, &mut out).unwrap_err();
        assert_eq!(err.field(), "mtu");
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].name, "ether2");
    }

    #[test]
    fn test_decode_reply_into_last_wins() {
        let sets = vec![
            attrs(&[("name", "first"), ("mtu", "1500")]),
            attrs(&[("name", "second")]),
        ];
        let mut record = Interface::default();
        decode_reply_into(&sets, &mut record).unwrap();
        assert_eq!(record.name, "second");
        assert_eq!(record.mtu, 1500);
    }
}
