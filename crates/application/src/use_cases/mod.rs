pub mod dns_query;
pub mod nslookup;

pub use dns_query::QueryDohUseCase;
pub use nslookup::NslookupUseCase;
