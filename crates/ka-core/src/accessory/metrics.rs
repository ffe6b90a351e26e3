use serde::{Deserialize, Serialize};

/// Accessory tab a metric sample belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessoryTabType {
    Passwords,
}

impl AccessoryTabType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessoryTabType::Passwords => "passwords",
        }
    }
}

/// Kind of suggestion the user picked.
/// 用户选择的建议类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessorySuggestionType {
    Username,
    Password,
}

impl AccessorySuggestionType {
    /// Obfuscated suggestions are secrets, everything else is an identifier.
    pub fn for_obfuscated(is_obfuscated: bool) -> Self {
        if is_obfuscated {
            AccessorySuggestionType::Password
        } else {
            AccessorySuggestionType::Username
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessorySuggestionType::Username => "username",
            AccessorySuggestionType::Password => "password",
        }
    }
}
