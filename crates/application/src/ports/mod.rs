mod doh_transport;

pub use doh_transport::{DohReply, DohRequest, DohTransport, DNS_JSON_CONTENT_TYPE};
