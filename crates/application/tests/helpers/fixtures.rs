use dohgate_domain::{DohDialect, ResolverEndpoint, ResolverRegistry};
use serde_json::{json, Value};

pub fn example_a_body() -> Value {
    json!({
        "Status": 0,
        "TC": false,
        "RD": true,
        "RA": true,
        "AD": false,
        "CD": false,
        "Question": [{"name": "example.com.", "type": 1}],
        "Answer": [{"name": "example.com.", "type": 1, "TTL": 300, "data": "93.184.216.34"}]
    })
}

/// A minimal successful body echoing the requested type code.
pub fn body_for_type(type_code: u16, data: &str) -> Value {
    json!({
        "Status": 0,
        "RD": true,
        "RA": true,
        "Question": [{"name": "example.com.", "type": type_code}],
        "Answer": [{"name": "example.com.", "type": type_code, "TTL": 120, "data": data}]
    })
}

pub fn empty_noerror_body() -> Value {
    json!({
        "Status": 0,
        "Question": [{"name": "example.com.", "type": 15}]
    })
}

/// Built-in resolvers plus one registered endpoint the JSON normalizer
/// cannot read.
pub fn registry_with_wire_resolver() -> ResolverRegistry {
    let mut registry = ResolverRegistry::builtin();
    registry.insert(
        ResolverEndpoint::from_url(
            "wire",
            "https://wire.example/dns-query",
            DohDialect::DnsMessage,
        )
        .unwrap(),
    );
    registry
}
