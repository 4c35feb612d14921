#![allow(dead_code)]

mod fixtures;
mod mock_transport;

pub use fixtures::*;
pub use mock_transport::{BlockingTransport, MockDohTransport};
