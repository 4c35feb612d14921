use crate::resolver::DohDialect;
use serde::{Deserialize, Serialize};

/// A `[[resolvers]]` table entry. Entries extend the built-in set, or replace
/// a built-in resolver of the same name.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ResolverEntry {
    pub name: String,

    pub url: String,

    #[serde(default = "default_dialect")]
    pub dialect: DohDialect,
}

fn default_dialect() -> DohDialect {
    DohDialect::DnsJson
}
