pub mod doh;
