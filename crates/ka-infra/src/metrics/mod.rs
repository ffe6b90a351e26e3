//! Metrics recording through `tracing`
//! 通过 tracing 记录指标

use ka_core::accessory::{AccessoryAction, AccessorySuggestionType, AccessoryTabType};
use ka_core::ports::AccessoryMetricsPort;
use tracing::info;

pub const ACTION_SELECTED_HISTOGRAM: &str = "KeyboardAccessory.AccessoryActionSelected";
pub const SUGGESTION_SELECTED_HISTOGRAM: &str = "KeyboardAccessory.AccessorySuggestionSelected";
pub const FOOTER_COMMAND_SELECTED_HISTOGRAM: &str = "KeyboardAccessory.FooterCommandSelected";

/// Emits one `metrics` target event per recorded sample.
///
/// Collectors filter on `target = "metrics"` and group by `histogram`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingMetricsRecorder;

impl TracingMetricsRecorder {
    pub fn new() -> Self {
        Self
    }
}

impl AccessoryMetricsPort for TracingMetricsRecorder {
    fn record_action_selected(&self, action: AccessoryAction) {
        info!(
            target: "metrics",
            histogram = ACTION_SELECTED_HISTOGRAM,
            sample = action.as_str(),
            "Accessory action selected"
        );
    }

    fn record_suggestion_selected(
        &self,
        tab: AccessoryTabType,
        suggestion_type: AccessorySuggestionType,
    ) {
        info!(
            target: "metrics",
            histogram = SUGGESTION_SELECTED_HISTOGRAM,
            tab = tab.as_str(),
            sample = suggestion_type.as_str(),
            "Accessory suggestion selected"
        );
    }

    fn record_footer_command_selected(&self, tab: AccessoryTabType) {
        info!(
            target: "metrics",
            histogram = FOOTER_COMMAND_SELECTED_HISTOGRAM,
            tab = tab.as_str(),
            "Footer command selected"
        );
    }
}
