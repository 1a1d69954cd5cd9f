//! Telebill conversational state
//!
//! Per-user conversation state for a bill-keeping Telegram bot. A stateless
//! message handler asks the store which flow a user is in (creating a bill,
//! setting up a keyboard, or nothing), acts on the message, and writes the
//! next state back.

pub mod config;
pub mod models;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use models::{UserState, UserStateKind};
pub use state::{InMemoryUserStateStore, StoreStats, UserStateStore};
pub use utils::errors::{Result, TelebillError};

