//! Concurrent directory and subdomain brute-forcing over HTTP.
pub mod function;
