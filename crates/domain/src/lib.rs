//! dohgate domain layer
pub mod answer;
pub mod config;
pub mod dns_query;
pub mod errors;
pub mod record_type;
pub mod resolver;
pub mod validators;

pub use answer::{
    AnswerRecord, CanonicalAnswer, LookupResult, LookupSlot, QuestionEntry, UpstreamFailure,
};
pub use config::{CliOverrides, Config, ConfigError, LogFormat};
pub use dns_query::QuerySpec;
pub use errors::DomainError;
pub use record_type::{RecordType, NSLOOKUP_TYPES, NSLOOKUP_TYPE_COUNT};
pub use resolver::{DohDialect, ResolverEndpoint, ResolverId, ResolverRegistry};
