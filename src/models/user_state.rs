//! User state model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which multi-step interaction a user is in the middle of
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UserStateKind {
    #[default]
    Empty,
    CreatingBill,
    SettingKeyboard,
}

impl UserStateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStateKind::Empty => "empty",
            UserStateKind::CreatingBill => "creatingBill",
            UserStateKind::SettingKeyboard => "settingKeyboard",
        }
    }
}

impl fmt::Display for UserStateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStateKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "empty" => Ok(UserStateKind::Empty),
            "creatingBill" => Ok(UserStateKind::CreatingBill),
            "settingKeyboard" => Ok(UserStateKind::SettingKeyboard),
            other => Err(format!("unknown user state kind: {}", other)),
        }
    }
}

/// A user's in-progress interaction together with the data entered so far.
///
/// `bill_category` and `bill_name` only mean something while `kind` is
/// [`UserStateKind::CreatingBill`]. A missing `bill_name` means the user has
/// not named the bill yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserState {
    #[serde(rename = "type")]
    pub kind: UserStateKind,
    #[serde(default)]
    pub bill_category: Option<String>,
    #[serde(default)]
    pub bill_name: Option<String>,
}

impl UserState {
    /// No interaction in progress
    pub fn empty() -> Self {
        Self::default()
    }

    /// Bill creation with the category already chosen
    pub fn creating_bill(category: impl Into<String>) -> Self {
        Self {
            kind: UserStateKind::CreatingBill,
            bill_category: Some(category.into()),
            bill_name: None,
        }
    }

    pub fn setting_keyboard() -> Self {
        Self {
            kind: UserStateKind::SettingKeyboard,
            ..Self::default()
        }
    }

    /// Attach the bill name entered by the user
    pub fn with_bill_name(mut self, name: impl Into<String>) -> Self {
        self.bill_name = Some(name.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.kind == UserStateKind::Empty
    }

    pub fn is_creating_bill(&self) -> bool {
        self.kind == UserStateKind::CreatingBill
    }

    pub fn is_setting_keyboard(&self) -> bool {
        self.kind == UserStateKind::SettingKeyboard
    }

    pub fn has_bill_name(&self) -> bool {
        self.bill_name.is_some()
    }

    /// Check that the bill fields agree with the kind.
    ///
    /// Bill fields are only allowed while creating a bill, and a name needs a
    /// category. Returns a description of the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.kind != UserStateKind::CreatingBill {
            if self.bill_category.is_some() || self.bill_name.is_some() {
                return Err(format!("bill fields set while state is {}", self.kind));
            }
            return Ok(());
        }

        if self.bill_name.is_some() && self.bill_category.is_none() {
            return Err("bill name set before a category was chosen".to_string());
        }

        Ok(())
    }
}
