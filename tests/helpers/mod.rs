//! Test helpers module
//!
//! Shared fixtures for the integration tests.

pub mod test_data;

#[allow(unused_imports)]
pub use test_data::*;
