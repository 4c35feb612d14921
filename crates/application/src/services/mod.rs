pub mod doh_client;
pub mod normalizer;

pub use doh_client::{DohQueryClient, INVALID_BODY_STATUS_TEXT};
pub use normalizer::{DialectMapper, NormalizeError, ResponseNormalizer};
