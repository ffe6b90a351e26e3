//! Inbound events sent by the backend to the bridge
//! 后端发送给桥接层的入站事件

use serde::{Deserialize, Serialize};

use crate::sheet::AccessorySheetData;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BridgeEvent {
    /// A new sheet replaces whatever was published before.
    ItemsAvailable { sheet: AccessorySheetData },
    /// Credential generation became available or unavailable for the
    /// focused field.
    GenerationStatusChanged { available: bool },
    ShowWhenKeyboardIsVisible,
    Hide,
    CloseAccessorySheet,
    SwapSheetWithKeyboard,
    /// The backend is going away. Nothing may cross the boundary afterwards.
    Destroy,
}

impl BridgeEvent {
    pub fn name(&self) -> &'static str {
        match self {
            BridgeEvent::ItemsAvailable { .. } => "items_available",
            BridgeEvent::GenerationStatusChanged { .. } => "generation_status_changed",
            BridgeEvent::ShowWhenKeyboardIsVisible => "show_when_keyboard_is_visible",
            BridgeEvent::Hide => "hide",
            BridgeEvent::CloseAccessorySheet => "close_accessory_sheet",
            BridgeEvent::SwapSheetWithKeyboard => "swap_sheet_with_keyboard",
            BridgeEvent::Destroy => "destroy",
        }
    }
}
