use crate::accessory::{AccessoryAction, AccessorySuggestionType, AccessoryTabType};

/// Side-effecting metrics sink. Recording never fails from the caller's
/// point of view.
pub trait AccessoryMetricsPort: Send + Sync {
    fn record_action_selected(&self, action: AccessoryAction);

    fn record_suggestion_selected(
        &self,
        tab: AccessoryTabType,
        suggestion_type: AccessorySuggestionType,
    );

    fn record_footer_command_selected(&self, tab: AccessoryTabType);
}
