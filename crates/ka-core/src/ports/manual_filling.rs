use std::sync::Arc;

use crate::accessory::{Action, Item};
use crate::provider::PropertyProvider;

/// Presentation-side coordinator that renders the accessory.
/// 负责渲染附件栏的展示层协调器。
pub trait ManualFillingPort: Send + Sync {
    /// Register the provider of the password sheet items.
    fn register_password_provider(&self, provider: Arc<PropertyProvider<Vec<Item>>>);

    /// Register a provider of accessory bar actions.
    fn register_action_provider(&self, provider: Arc<PropertyProvider<Vec<Action>>>);

    fn show_when_keyboard_is_visible(&self);

    fn hide(&self);

    fn close_accessory_sheet(&self);

    fn swap_sheet_with_keyboard(&self);
}
