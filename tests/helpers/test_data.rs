//! Test data helpers for creating user states
//!
//! This module provides the states a bill-keeping conversation moves through
//! and a proptest strategy over arbitrary states.

#![allow(dead_code)]

use proptest::prelude::*;
use telebill::{UserState, UserStateKind};

/// User id used by the walkthrough scenarios
pub const TEST_USER_ID: i64 = 42;

/// Bill flow right after the category was picked
pub fn bill_with_category(category: &str) -> UserState {
    UserState::creating_bill(category)
}

/// Bill flow after both category and name were entered
pub fn bill_with_name(category: &str, name: &str) -> UserState {
    UserState::creating_bill(category).with_bill_name(name)
}

/// The states a typical bill conversation goes through, in order
pub fn bill_flow_states() -> Vec<UserState> {
    vec![
        UserState {
            kind: UserStateKind::CreatingBill,
            bill_category: None,
            bill_name: None,
        },
        bill_with_category("food"),
        bill_with_name("food", "lunch"),
    ]
}

pub fn arb_kind() -> impl Strategy<Value = UserStateKind> {
    prop_oneof![
        Just(UserStateKind::Empty),
        Just(UserStateKind::CreatingBill),
        Just(UserStateKind::SettingKeyboard),
    ]
}

/// Any state, consistent or not; the default store accepts all of them
pub fn arb_user_state() -> impl Strategy<Value = UserState> {
    (
        arb_kind(),
        proptest::option::of("[a-z]{1,12}"),
        proptest::option::of("[a-zA-Z ]{1,20}"),
    )
        .prop_map(|(kind, bill_category, bill_name)| UserState {
            kind,
            bill_category,
            bill_name,
        })
}
