#![allow(dead_code)]

pub mod mock_doh_server;

pub use mock_doh_server::MockDohServer;
