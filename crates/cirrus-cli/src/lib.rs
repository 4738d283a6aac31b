//! cirrus-cli — the sample deployment unit.
//!
//! The library half holds the config parser and the stack assembly so
//! integration tests can assemble and inspect the stack without going
//! through the binary.

pub mod app;
pub mod config;
