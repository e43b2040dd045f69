//! Record → argument words.
//!
//! Fields are emitted in declaration order as `=wire-name=value`. A field is
//! skipped when it is excluded, read-only, or holds its kind's empty value
//! (empty text, `false`, zero, unset address, a list that joins to nothing).

use rosapi_proto::{encode_attribute_word, AttributeSet};

use crate::schema::Record;

/// Encode a record into attribute words.
pub fn encode<R: Record>(record: &R) -> Vec<String> {
    encoded_pairs(record)
        .map(|(name, value)| encode_attribute_word(name, &value))
        .collect()
}

/// Encode a record into an attribute set, applying the same omission rules.
pub fn encode_attributes<R: Record>(record: &R) -> AttributeSet {
    encoded_pairs(record).collect()
}

fn encoded_pairs<R: Record>(record: &R) -> impl Iterator<Item = (&'static str, String)> + '_ {
    R::schema().fields().iter().filter_map(move |field| {
        let spec = field.spec();
        if !spec.is_writable() {
            return None;
        }
        field
            .non_empty_value(record)
            .map(|value| (spec.wire_name.as_str(), value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;
    use crate::value::LenientIp;
    use std::net::{IpAddr, Ipv4Addr};
    use std::time::Duration;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Port {
        name: String,
        disabled: bool,
        comment: String,
    }

    crate::wire_record! {
        Port;
        name,
        disabled,
        comment,
    }

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Secret {
        id: String,
        name: String,
        service: String,
        local_address: Option<IpAddr>,
        remote_address: LenientIp,
        limit_bytes_in: u64,
        last_logged_out: String,
        session_timeout: Duration,
        routes: Vec<String>,
        cached: String,
    }

    crate::wire_record! {
        Secret, identifier = id;
        id: ".id,ro",
        name,
        service,
        local_address,
        remote_address,
        limit_bytes_in,
        last_logged_out: "last-logged-out,ro",
        session_timeout,
        routes,
        cached: "-",
    }

    fn full_secret() -> Secret {
        Secret {
            id: String::new(),
            name: "branch".to_string(),
            service: "l2tp".to_string(),
            local_address: Some(IpAddr::V4(Ipv4Addr::new(10, 1, 0, 1))),
            remote_address: LenientIp::from(IpAddr::V4(Ipv4Addr::new(10, 1, 0, 2))),
            limit_bytes_in: 1_000_000,
            last_logged_out: String::new(),
            session_timeout: Duration::from_secs(5_400),
            routes: vec!["10.2.0.0/24".to_string(), "10.3.0.0/24".to_string()],
            cached: String::new(),
        }
    }

    #[test]
    fn test_encode_scenario() {
        let port = Port {
            name: "eth1".to_string(),
            disabled: false,
            comment: String::new(),
        };
        assert_eq!(encode(&port), vec!["=name=eth1"]);
    }

    #[test]
    fn test_declaration_order() {
        let port = Port {
            name: "eth1".to_string(),
            disabled: true,
            comment: "uplink".to_string(),
        };
        assert_eq!(
            encode(&port),
            vec!["=name=eth1", "=disabled=true", "=comment=uplink"]
        );
    }

    #[test]
    fn test_read_only_and_excluded_never_encoded() {
        let mut secret = full_secret();
        secret.id = "*5".to_string();
        secret.last_logged_out = "jan/02/1970 00:00:00".to_string();
        secret.cached = "stale".to_string();

        let words = encode(&secret);
        assert!(words.iter().all(|w| !w.starts_with("=.id=")));
        assert!(words.iter().all(|w| !w.starts_with("=last-logged-out=")));
        assert!(words.iter().all(|w| !w.starts_with("=cached=")));
    }

    #[test]
    fn test_empty_values_omitted() {
        let words = encode(&Secret::default());
        // durations have no empty value
        assert_eq!(words, vec!["=session-timeout=0s"]);
    }

    #[test]
    fn test_empty_list_forms_are_omitted() {
        let mut secret = full_secret();
        secret.routes = vec![String::new()];
        let words = encode(&secret);
        assert!(words.iter().all(|w| !w.starts_with("=routes=")));

        let decoded: Secret = decode(&AttributeSet::from_words(&words)).unwrap();
        assert!(decoded.routes.is_empty());
    }

    #[test]
    fn test_single_element_list_round_trip() {
        let mut secret = full_secret();
        secret.routes = vec!["10.9.0.0/16".to_string()];
        let attrs = AttributeSet::from_words(encode(&secret));
        assert_eq!(attrs.get("routes"), "10.9.0.0/16");

        let decoded: Secret = decode(&attrs).unwrap();
        assert_eq!(decoded, secret);
    }

    #[test]
    fn test_kind_formatting() {
        let words = encode(&full_secret());
        assert_eq!(
            words,
            vec![
                "=name=branch",
                "=service=l2tp",
                "=local-address=10.1.0.1",
                "=remote-address=10.1.0.2",
                "=limit-bytes-in=1000000",
                "=session-timeout=1h30m",
                "=routes=10.2.0.0/24,10.3.0.0/24",
            ]
        );
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let original = full_secret();
        let attrs = AttributeSet::from_words(encode(&original));
        let decoded: Secret = decode(&attrs).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_encode_attributes() {
        let port = Port {
            name: "eth1".to_string(),
            disabled: true,
            comment: String::new(),
        };
        let attrs = encode_attributes(&port);
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("disabled"), "true");
        assert!(!attrs.contains("comment"));
    }

    #[test]
    fn test_encode_does_not_mutate() {
        let port = Port {
            name: "eth1".to_string(),
            ..Default::default()
        };
        let before = port.clone();
        let _ = encode(&port);
        assert_eq!(port, before);
    }
}
