//! Postbar library
//!
//! Exposes the cache, fetch, parsing, and rendering modules for use by the
//! binary and by integration tests.

pub mod cache;
pub mod cli;
pub mod config;
pub mod dates;
pub mod error;
pub mod notify;
pub mod output;
pub mod postal;
