//! Accessory bridge
//! 附件桥接层
//!
//! The bridge sits between the backend peer and the presentation layer. It
//! owns the native handle, one provider per published stream (items and
//! actions), reacts to inbound [`BridgeEvent`]s and forwards user actions
//! back across the boundary.
//!
//! ## Lifecycle / 生命周期
//!
//! - **Live**: holds a valid handle. Every forward reaches the backend.
//! - **Destroyed**: after [`AccessoryBridge::destroy`]. The item list is
//!   cleared first, then the handle is invalidated. Any later forward, from
//!   the bridge or from a callback it published earlier, is a lifecycle
//!   violation handled by the configured
//!   [`LifecycleViolationPolicy`](ka_core::config::LifecycleViolationPolicy).
//!
//! There is no way back from Destroyed to Live.

mod event_loop;
mod link;

pub use event_loop::run_event_loop;

use std::sync::Arc;

use ka_core::accessory::{AccessoryAction, Action, IconCallback, Item};
use ka_core::config::{BridgeConfig, GenerationConfig};
use ka_core::event::BridgeEvent;
use ka_core::handle::NativeHandle;
use ka_core::ports::{AccessoryBackendPort, AccessoryMetricsPort, ManualFillingPort};
use ka_core::provider::PropertyProvider;
use ka_core::sheet::AccessorySheetData;
use tracing::{debug, info};

use crate::projection::{convert_to_items, SheetActionSink};
use link::BridgeLink;

/// Whether the event loop should keep consuming events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFlow {
    Continue,
    Stop,
}

pub struct AccessoryBridge {
    item_provider: Arc<PropertyProvider<Vec<Item>>>,
    action_provider: Arc<PropertyProvider<Vec<Action>>>,
    manual_filling: Arc<dyn ManualFillingPort>,
    generation: GenerationConfig,
    link: Arc<BridgeLink>,
}

/// Helper for constructing the bridge with explicit dependency fields.
pub struct AccessoryBridgeDeps {
    pub handle: NativeHandle,
    pub backend: Arc<dyn AccessoryBackendPort>,
    pub metrics: Arc<dyn AccessoryMetricsPort>,
    pub manual_filling: Arc<dyn ManualFillingPort>,
    pub config: BridgeConfig,
}

impl AccessoryBridge {
    /// Create a live bridge and register its providers with the
    /// presentation coordinator.
    pub fn new(
        handle: NativeHandle,
        backend: Arc<dyn AccessoryBackendPort>,
        metrics: Arc<dyn AccessoryMetricsPort>,
        manual_filling: Arc<dyn ManualFillingPort>,
        config: &BridgeConfig,
    ) -> Self {
        let item_provider = Arc::new(PropertyProvider::new());
        let action_provider = Arc::new(PropertyProvider::with_default_type(
            AccessoryAction::GenerateCredential,
        ));
        manual_filling.register_password_provider(item_provider.clone());
        manual_filling.register_action_provider(action_provider.clone());

        info!(%handle, "Accessory bridge created");

        Self {
            item_provider,
            action_provider,
            manual_filling,
            generation: config.generation.clone(),
            link: Arc::new(BridgeLink::new(
                handle,
                backend,
                metrics,
                config.lifecycle.violation_policy,
            )),
        }
    }

    /// Construct a bridge from dependency bundle.
    pub fn from_deps(deps: AccessoryBridgeDeps) -> Self {
        let AccessoryBridgeDeps {
            handle,
            backend,
            metrics,
            manual_filling,
            config,
        } = deps;

        Self::new(handle, backend, metrics, manual_filling, &config)
    }

    pub fn item_provider(&self) -> &Arc<PropertyProvider<Vec<Item>>> {
        &self.item_provider
    }

    pub fn action_provider(&self) -> &Arc<PropertyProvider<Vec<Action>>> {
        &self.action_provider
    }

    pub fn is_live(&self) -> bool {
        self.link.is_live()
    }

    /// Dispatch one inbound backend event.
    pub fn handle_event(&self, event: BridgeEvent) -> EventFlow {
        debug!(event = event.name(), "Handling bridge event");
        match event {
            BridgeEvent::ItemsAvailable { sheet } => self.on_items_available(&sheet),
            BridgeEvent::GenerationStatusChanged { available } => {
                self.on_generation_status_changed(available)
            }
            BridgeEvent::ShowWhenKeyboardIsVisible => self.show_when_keyboard_is_visible(),
            BridgeEvent::Hide => self.hide(),
            BridgeEvent::CloseAccessorySheet => self.close_accessory_sheet(),
            BridgeEvent::SwapSheetWithKeyboard => self.swap_sheet_with_keyboard(),
            BridgeEvent::Destroy => {
                self.destroy();
                return EventFlow::Stop;
            }
        }
        EventFlow::Continue
    }

    /// Project `sheet` and publish the items, replacing the previous list.
    pub fn on_items_available(&self, sheet: &AccessorySheetData) {
        let sink: Arc<dyn SheetActionSink> = self.link.clone();
        let items = convert_to_items(sheet, &sink);
        debug!(
            item_count = items.len(),
            user_info_count = sheet.user_info_list().len(),
            "Publishing accessory items"
        );
        self.item_provider.notify_observers(items);
    }

    /// Publish the generation action when available, or no action otherwise.
    pub fn on_generation_status_changed(&self, available: bool) {
        let actions = if available {
            let link = self.link.clone();
            vec![Action::new(
                self.generation.active_caption(),
                AccessoryAction::GenerateCredential,
                Arc::new(move || link.request_generation()),
            )]
        } else {
            Vec::new()
        };
        debug!(available, "Publishing generation action");
        self.action_provider.notify_observers(actions);
    }

    pub fn show_when_keyboard_is_visible(&self) {
        self.manual_filling.show_when_keyboard_is_visible();
    }

    pub fn hide(&self) {
        self.manual_filling.hide();
    }

    pub fn close_accessory_sheet(&self) {
        self.manual_filling.close_accessory_sheet();
    }

    pub fn swap_sheet_with_keyboard(&self) {
        self.manual_filling.swap_sheet_with_keyboard();
    }

    /// Forward an icon request for the current origin.
    pub fn request_icon(&self, desired_size_px: u32, callback: IconCallback) {
        self.link.request_icon(desired_size_px, callback);
    }

    pub fn forward_selection(&self, is_obfuscated: bool, text_to_fill: &str) {
        self.link.forward_selection(is_obfuscated, text_to_fill);
    }

    pub fn forward_option_selection(&self, selected_option: &str) {
        self.link.forward_option_selection(selected_option);
    }

    /// Clear the published items, then invalidate the handle.
    ///
    /// Waits for forwards already running on other threads to reach the
    /// backend. Calling it again only republishes the empty list.
    pub fn destroy(&self) {
        self.item_provider.notify_observers(Vec::new());
        match self.link.invalidate() {
            Some(handle) => info!(%handle, "Accessory bridge destroyed"),
            None => debug!("Accessory bridge already destroyed"),
        }
    }
}

impl std::fmt::Debug for AccessoryBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessoryBridge")
            .field("live", &self.is_live())
            .field("item_observers", &self.item_provider.observer_count())
            .field("action_observers", &self.action_provider.observer_count())
            .finish_non_exhaustive()
    }
}

