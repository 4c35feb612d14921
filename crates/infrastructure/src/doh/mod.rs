pub mod https;

pub use https::ReqwestDohTransport;
