//! State management module
//!
//! This module tracks which conversation flow each user is in

pub mod storage;

pub use storage::{InMemoryUserStateStore, StoreStats, UserStateStore};
