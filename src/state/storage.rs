//! User state storage
//!
//! This module keeps the conversational state of every user in process memory.
//! Handles are cheap to clone and all clones share one map, so a single store
//! can be built at startup and handed to every request handler.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::StateConfig;
use crate::models::{UserState, UserStateKind};
use crate::utils::errors::{Result, TelebillError};
use crate::utils::logging::{log_state_cleared, log_state_transition};

/// Per-user conversational state storage.
///
/// A user without an entry is in the [`UserStateKind::Empty`] state. Each call
/// is atomic for its key; a `get_state` followed by a `set_state` is not, so
/// callers needing read-modify-write must serialize it themselves.
pub trait UserStateStore: Send + Sync {
    /// Current state of the user, `UserState::empty()` when none is stored
    fn get_state(&self, user_id: i64) -> Result<UserState>;

    /// Replace the user's state
    fn set_state(&self, user_id: i64, state: UserState) -> Result<()>;

    /// Forget the user's state; succeeds whether or not one was stored
    fn clear_state(&self, user_id: i64) -> Result<()>;
}

/// In-memory user state store
#[derive(Clone)]
pub struct InMemoryUserStateStore {
    states: Arc<RwLock<HashMap<i64, UserState>>>,
    strict_consistency: bool,
}

impl InMemoryUserStateStore {
    /// Create an empty store that accepts any state
    pub fn new() -> Self {
        Self::from_config(&StateConfig::default())
    }

    /// Create an empty store from configuration
    pub fn from_config(config: &StateConfig) -> Self {
        Self {
            states: Arc::new(RwLock::new(HashMap::with_capacity(config.initial_capacity))),
            strict_consistency: config.strict_consistency,
        }
    }

    /// Whether `set_state` rejects states with mismatched bill fields
    pub fn is_strict(&self) -> bool {
        self.strict_consistency
    }

    /// Check if a user has an explicitly stored state
    pub fn contains(&self, user_id: i64) -> bool {
        self.read().contains_key(&user_id)
    }

    /// Number of users with a stored state
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Users with a stored state, in ascending order
    pub fn active_users(&self) -> Vec<i64> {
        let mut user_ids: Vec<i64> = self.read().keys().copied().collect();
        user_ids.sort_unstable();

        debug!("Found {} users with stored state", user_ids.len());
        user_ids
    }

    /// Get storage statistics
    pub fn stats(&self) -> StoreStats {
        let states = self.read();
        let mut stats = StoreStats {
            total_users: states.len(),
            ..StoreStats::default()
        };

        for state in states.values() {
            match state.kind {
                UserStateKind::Empty => stats.empty += 1,
                UserStateKind::CreatingBill => stats.creating_bill += 1,
                UserStateKind::SettingKeyboard => stats.setting_keyboard += 1,
            }
        }

        stats
    }

    /// Drop every stored state, returning how many were removed
    pub fn clear_all(&self) -> usize {
        let mut states = self.write();
        let count = states.len();
        states.clear();
        drop(states);

        debug!(cleared_count = count, "All user states cleared");
        count
    }

    // Every mutation is a single insert or remove, so the map is well-formed
    // even after a panic on another thread.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<i64, UserState>> {
        self.states.read().unwrap_or_else(|poisoned| {
            warn!("User state lock poisoned, recovering");
            let guard = poisoned.into_inner();
            self.states.clear_poison();
            guard
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<i64, UserState>> {
        self.states.write().unwrap_or_else(|poisoned| {
            warn!("User state lock poisoned, recovering");
            let guard = poisoned.into_inner();
            self.states.clear_poison();
            guard
        })
    }
}

impl UserStateStore for InMemoryUserStateStore {
    fn get_state(&self, user_id: i64) -> Result<UserState> {
        let state = self.read().get(&user_id).cloned();

        match state {
            Some(state) => {
                debug!(user_id = user_id, kind = %state.kind, "User state loaded");
                Ok(state)
            }
            None => {
                debug!(user_id = user_id, "No user state stored, using empty state");
                Ok(UserState::empty())
            }
        }
    }

    fn set_state(&self, user_id: i64, state: UserState) -> Result<()> {
        if self.strict_consistency {
            if let Err(reason) = state.validate() {
                warn!(
                    user_id = user_id,
                    kind = %state.kind,
                    reason = %reason,
                    "Rejected inconsistent user state"
                );
                return Err(TelebillError::InconsistentState { user_id, reason });
            }
        }

        let kind = state.kind;
        let previous = self.write().insert(user_id, state);

        log_state_transition(user_id, previous.map(|s| s.kind).unwrap_or_default(), kind);
        Ok(())
    }

    fn clear_state(&self, user_id: i64) -> Result<()> {
        let previous = self.write().remove(&user_id);

        log_state_cleared(user_id, previous.map(|s| s.kind));
        Ok(())
    }
}

impl Default for InMemoryUserStateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InMemoryUserStateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryUserStateStore")
            .field("users", &self.len())
            .field("strict_consistency", &self.strict_consistency)
            .finish_non_exhaustive()
    }
}

/// Storage statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub total_users: usize,
    pub empty: usize,
    pub creating_bill: usize,
    pub setting_keyboard: usize,
}
