use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Name of a registered resolver, normalized to lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ResolverId(Arc<str>);

impl ResolverId {
    fn normalized(raw: &str) -> Self {
        Self(raw.trim().to_ascii_lowercase().into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResolverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// JSON shape spoken by an upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DohDialect {
    /// `application/dns-json` as served by Cloudflare and Quad9.
    DnsJson,
    /// Google's `/resolve` JSON API: same core fields, a free-form
    /// `Comment` that is either a string or an array of strings, and empty
    /// sections left out entirely.
    GoogleJson,
    /// RFC 8484 binary wire format. Can be registered, but the JSON
    /// normalizer cannot read it.
    DnsMessage,
}

impl DohDialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            DohDialect::DnsJson => "dns-json",
            DohDialect::GoogleJson => "google-json",
            DohDialect::DnsMessage => "dns-message",
        }
    }
}

impl fmt::Display for DohDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DohDialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dns-json" => Ok(DohDialect::DnsJson),
            "google-json" => Ok(DohDialect::GoogleJson),
            "dns-message" => Ok(DohDialect::DnsMessage),
            _ => Err(format!(
                "Unknown dialect '{}'. Expected dns-json, google-json or dns-message",
                s
            )),
        }
    }
}

/// Where a resolver lives and how it answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverEndpoint {
    pub id: ResolverId,
    pub scheme: &'static str,
    /// Host with an optional `:port`.
    pub host: Arc<str>,
    pub path: Arc<str>,
    pub dialect: DohDialect,
}

impl ResolverEndpoint {
    /// Parses `http(s)://host[:port]/path`. Query strings and fragments are
    /// rejected since the client owns the query parameters.
    pub fn from_url(name: &str, url: &str, dialect: DohDialect) -> Result<Self, String> {
        let (scheme, rest) = if let Some(rest) = url.strip_prefix("https://") {
            ("https", rest)
        } else if let Some(rest) = url.strip_prefix("http://") {
            ("http", rest)
        } else {
            return Err(format!(
                "Invalid resolver URL '{}'. Expected 'https://HOST[:PORT]/PATH'",
                url
            ));
        };

        if rest.contains(['?', '#']) {
            return Err(format!(
                "Resolver URL '{}' must not carry a query string or fragment",
                url
            ));
        }

        let (host, path) = match rest.find('/') {
            Some(idx) => (&rest[..idx], &rest[idx..]),
            None => (rest, "/"),
        };
        if host.is_empty() || host.contains(char::is_whitespace) {
            return Err(format!("Resolver URL '{}' has no valid host", url));
        }
        if let Some((_, port)) = host.rsplit_once(':') {
            if !host.ends_with(']') {
                port.parse::<u16>()
                    .map_err(|e| format!("Invalid port in resolver URL '{}': {}", url, e))?;
            }
        }

        Ok(Self {
            id: ResolverId::normalized(name),
            scheme,
            host: host.into(),
            path: path.into(),
            dialect,
        })
    }

    pub fn url(&self) -> String {
        format!("{}://{}{}", self.scheme, self.host, self.path)
    }
}

/// Built-in resolver table: (name, host, path, dialect), all over https.
const BUILTIN_RESOLVERS: [(&str, &str, &str, DohDialect); 3] = [
    ("cloudflare", "cloudflare-dns.com", "/dns-query", DohDialect::DnsJson),
    ("google", "dns.google", "/resolve", DohDialect::GoogleJson),
    ("quad9", "dns.quad9.net:5053", "/dns-query", DohDialect::DnsJson),
];

/// The closed set of resolvers known to the process.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverRegistry {
    endpoints: BTreeMap<ResolverId, ResolverEndpoint>,
}

impl ResolverRegistry {
    pub fn builtin() -> Self {
        let mut registry = Self {
            endpoints: BTreeMap::new(),
        };
        for (name, host, path, dialect) in BUILTIN_RESOLVERS {
            registry.insert(ResolverEndpoint {
                id: ResolverId::normalized(name),
                scheme: "https",
                host: host.into(),
                path: path.into(),
                dialect,
            });
        }
        registry
    }

    pub fn empty() -> Self {
        Self {
            endpoints: BTreeMap::new(),
        }
    }

    /// Adds or replaces an endpoint. Only used while the registry is being
    /// assembled.
    pub fn insert(&mut self, endpoint: ResolverEndpoint) {
        self.endpoints.insert(endpoint.id.clone(), endpoint);
    }

    /// Resolves a caller-supplied name to a member of the set.
    pub fn resolve_id(&self, name: &str) -> Result<ResolverId, DomainError> {
        self.endpoint_for(name).map(|endpoint| endpoint.id.clone())
    }

    pub fn endpoint_for(&self, name: &str) -> Result<&ResolverEndpoint, DomainError> {
        self.endpoints
            .get(&ResolverId::normalized(name))
            .ok_or_else(|| DomainError::UnknownResolver(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.endpoints.contains_key(&ResolverId::normalized(name))
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.endpoints.keys().map(ResolverId::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolverEndpoint> {
        self.endpoints.values()
    }
}

impl Default for ResolverRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
