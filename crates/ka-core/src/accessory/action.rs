use std::fmt;

use serde::{Deserialize, Serialize};

use super::SelectCallback;

/// Commands that can be surfaced next to the item list.
/// 可在列表旁展示的命令类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessoryAction {
    /// Offer to generate a new credential for the focused field.
    GenerateCredential,
}

impl AccessoryAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessoryAction::GenerateCredential => "generate_credential",
        }
    }
}

/// A standalone command published through the action provider.
///
/// Rebuilt every time availability changes; the callback may outlive the
/// bridge that created it and must check liveness itself.
#[derive(Clone)]
pub struct Action {
    caption: String,
    action_type: AccessoryAction,
    on_invoke: SelectCallback,
}

impl Action {
    pub fn new(
        caption: impl Into<String>,
        action_type: AccessoryAction,
        on_invoke: SelectCallback,
    ) -> Self {
        Self {
            caption: caption.into(),
            action_type,
            on_invoke,
        }
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn action_type(&self) -> AccessoryAction {
        self.action_type
    }

    pub fn invoke(&self) {
        (self.on_invoke)();
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("caption", &self.caption)
            .field("action_type", &self.action_type)
            .finish_non_exhaustive()
    }
}

// Callback identity is irrelevant for equality.
impl PartialEq for Action {
    fn eq(&self, other: &Self) -> bool {
        self.caption == other.caption && self.action_type == other.action_type
    }
}
