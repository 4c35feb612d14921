pub mod doh;
pub mod errors;
pub mod logging;
pub mod resolvers;
pub mod root;
pub mod server;

pub use doh::DohConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use resolvers::ResolverEntry;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
