pub mod lookup;
pub mod query;
pub mod resolver;

pub use lookup::{LookupResponse, SlotError};
pub use query::{DnsQueryParams, NslookupParams};
pub use resolver::{HealthResponse, ResolverResponse};
