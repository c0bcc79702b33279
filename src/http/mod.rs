//! HTTP client for the Monobank API: endpoint URL resolution plus the two
//! raw round-trip operations.

mod client;
mod url;

pub use client::Client;
