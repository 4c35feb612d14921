pub mod dns_query;
pub mod health;
pub mod nslookup;
pub mod resolvers;
