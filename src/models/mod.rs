//! Data models module
//!
//! This module contains the data structures shared with the message-handling layer

pub mod user_state;

pub use user_state::{UserState, UserStateKind};
