use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DohConfig {
    /// Deadline for one upstream request, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Resolver used by `/nslookup?name=` when no resolver is given.
    #[serde(default = "default_resolver")]
    pub default_resolver: String,
}

impl Default for DohConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
            default_resolver: default_resolver(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_user_agent() -> String {
    concat!("dohgate/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_resolver() -> String {
    "cloudflare".to_string()
}
