//! dohgate application layer: the DoH query client, the response normalizer
//! and the nslookup fan-out.
pub mod ports;
pub mod services;
pub mod use_cases;
