use dohgate_domain::{DomainError, QuerySpec};
use serde::Deserialize;

/// Query string of `/dns-query/{resolver}`.
///
/// Flags are kept as raw strings so a bad value is reported as a 400 with
/// the usual JSON error body.
#[derive(Debug, Default, Deserialize)]
pub struct DnsQueryParams {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    #[serde(rename = "DO", alias = "do")]
    pub dnssec: Option<String>,
    #[serde(rename = "CD", alias = "cd")]
    pub checking_disabled: Option<String>,
}

impl DnsQueryParams {
    /// Builds the query. A domain taken from the path wins over `?name=`.
    pub fn into_spec(self, path_name: Option<String>) -> Result<QuerySpec, DomainError> {
        let name = path_name
            .or(self.name)
            .ok_or_else(|| DomainError::MalformedQuery("name is required".to_string()))?;
        let dnssec = parse_flag("DO", self.dnssec.as_deref())?;
        let checking_disabled = parse_flag("CD", self.checking_disabled.as_deref())?;

        QuerySpec::parse(&name, self.record_type.as_deref(), dnssec, checking_disabled)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct NslookupParams {
    pub name: Option<String>,
    pub resolver: Option<String>,
}

impl NslookupParams {
    pub fn require_name(&self) -> Result<&str, DomainError> {
        self.name
            .as_deref()
            .ok_or_else(|| DomainError::MalformedQuery("name is required".to_string()))
    }
}

/// Accepts `true`/`false`/`1`/`0` in any case; absent or empty means false.
pub fn parse_flag(key: &str, value: Option<&str>) -> Result<bool, DomainError> {
    let Some(raw) = value else {
        return Ok(false);
    };
    match raw.to_ascii_lowercase().as_str() {
        "" | "false" | "0" => Ok(false),
        "true" | "1" => Ok(true),
        _ => Err(DomainError::MalformedQuery(format!(
            "{} must be a boolean, got '{}'",
            key, raw
        ))),
    }
}
