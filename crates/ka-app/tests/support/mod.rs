//! Recording fakes shared by the bridge integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use ka_app::{AccessoryBridge, AccessoryBridgeDeps};
use ka_core::accessory::{
    AccessoryAction, AccessorySuggestionType, AccessoryTabType, Action, IconCallback, Item,
};
use ka_core::config::{BridgeConfig, LifecycleViolationPolicy};
use ka_core::handle::NativeHandle;
use ka_core::ports::{AccessoryBackendPort, AccessoryMetricsPort, ManualFillingPort};
use ka_core::provider::PropertyProvider;
use ka_core::sheet::{AccessorySheetBuilder, AccessorySheetData, UserInfoField};

pub const HANDLE: u64 = 0x5eed;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    Favicon(u64, u32),
    Filling(u64, bool, String),
    OptionSelected(u64, String),
    Generation(u64),
}

#[derive(Default)]
pub struct RecordingBackend {
    pub calls: Mutex<Vec<BackendCall>>,
    pub pending_icons: Mutex<Vec<IconCallback>>,
}

impl RecordingBackend {
    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl AccessoryBackendPort for RecordingBackend {
    fn on_favicon_requested(
        &self,
        handle: NativeHandle,
        desired_size_px: u32,
        callback: IconCallback,
    ) {
        self.calls
            .lock()
            .unwrap()
            .push(BackendCall::Favicon(handle.get(), desired_size_px));
        self.pending_icons.lock().unwrap().push(callback);
    }

    fn on_filling_triggered(&self, handle: NativeHandle, is_obfuscated: bool, text_to_fill: &str) {
        self.calls.lock().unwrap().push(BackendCall::Filling(
            handle.get(),
            is_obfuscated,
            text_to_fill.to_string(),
        ));
    }

    fn on_option_selected(&self, handle: NativeHandle, selected_option: &str) {
        self.calls
            .lock()
            .unwrap()
            .push(BackendCall::OptionSelected(handle.get(), selected_option.to_string()));
    }

    fn on_generation_requested(&self, handle: NativeHandle) {
        self.calls
            .lock()
            .unwrap()
            .push(BackendCall::Generation(handle.get()));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricSample {
    Action(AccessoryAction),
    Suggestion(AccessoryTabType, AccessorySuggestionType),
    FooterCommand(AccessoryTabType),
}

#[derive(Default)]
pub struct RecordingMetrics {
    pub samples: Mutex<Vec<MetricSample>>,
}

impl RecordingMetrics {
    pub fn samples(&self) -> Vec<MetricSample> {
        self.samples.lock().unwrap().clone()
    }
}

impl AccessoryMetricsPort for RecordingMetrics {
    fn record_action_selected(&self, action: AccessoryAction) {
        self.samples.lock().unwrap().push(MetricSample::Action(action));
    }

    fn record_suggestion_selected(
        &self,
        tab: AccessoryTabType,
        suggestion_type: AccessorySuggestionType,
    ) {
        self.samples
            .lock()
            .unwrap()
            .push(MetricSample::Suggestion(tab, suggestion_type));
    }

    fn record_footer_command_selected(&self, tab: AccessoryTabType) {
        self.samples
            .lock()
            .unwrap()
            .push(MetricSample::FooterCommand(tab));
    }
}

#[derive(Default)]
pub struct RecordingManualFilling {
    pub commands: Mutex<Vec<&'static str>>,
    pub password_providers: Mutex<Vec<Arc<PropertyProvider<Vec<Item>>>>>,
    pub action_providers: Mutex<Vec<Arc<PropertyProvider<Vec<Action>>>>>,
}

impl RecordingManualFilling {
    pub fn commands(&self) -> Vec<&'static str> {
        self.commands.lock().unwrap().clone()
    }
}

impl ManualFillingPort for RecordingManualFilling {
    fn register_password_provider(&self, provider: Arc<PropertyProvider<Vec<Item>>>) {
        self.password_providers.lock().unwrap().push(provider);
    }

    fn register_action_provider(&self, provider: Arc<PropertyProvider<Vec<Action>>>) {
        self.action_providers.lock().unwrap().push(provider);
    }

    fn show_when_keyboard_is_visible(&self) {
        self.commands.lock().unwrap().push("show_when_keyboard_is_visible");
    }

    fn hide(&self) {
        self.commands.lock().unwrap().push("hide");
    }

    fn close_accessory_sheet(&self) {
        self.commands.lock().unwrap().push("close_accessory_sheet");
    }

    fn swap_sheet_with_keyboard(&self) {
        self.commands.lock().unwrap().push("swap_sheet_with_keyboard");
    }
}

/// A bridge wired to recording fakes, with observers logging every publish.
pub struct Harness {
    pub bridge: Arc<AccessoryBridge>,
    pub backend: Arc<RecordingBackend>,
    pub metrics: Arc<RecordingMetrics>,
    pub manual_filling: Arc<RecordingManualFilling>,
    pub published_items: Arc<Mutex<Vec<Vec<Item>>>>,
    pub published_actions: Arc<Mutex<Vec<Vec<Action>>>>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(config_with_policy(LifecycleViolationPolicy::Panic))
    }

    pub fn with_config(config: BridgeConfig) -> Self {
        let backend = Arc::new(RecordingBackend::default());
        let metrics = Arc::new(RecordingMetrics::default());
        let manual_filling = Arc::new(RecordingManualFilling::default());
        let bridge = Arc::new(AccessoryBridge::from_deps(AccessoryBridgeDeps {
            handle: NativeHandle::new(HANDLE).expect("non-zero handle"),
            backend: backend.clone(),
            metrics: metrics.clone(),
            manual_filling: manual_filling.clone(),
            config,
        }));

        let published_items = Arc::new(Mutex::new(Vec::new()));
        let items_log = published_items.clone();
        bridge
            .item_provider()
            .add_observer(Arc::new(move |items: &Vec<Item>| {
                items_log.lock().unwrap().push(items.clone())
            }));

        let published_actions = Arc::new(Mutex::new(Vec::new()));
        let actions_log = published_actions.clone();
        bridge
            .action_provider()
            .add_observer(Arc::new(move |actions: &Vec<Action>| {
                actions_log.lock().unwrap().push(actions.clone())
            }));

        Self {
            bridge,
            backend,
            metrics,
            manual_filling,
            published_items,
            published_actions,
        }
    }

    pub fn last_items(&self) -> Vec<Item> {
        self.published_items
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("items were published")
    }

    pub fn last_actions(&self) -> Vec<Action> {
        self.published_actions
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("actions were published")
    }
}

pub fn config_with_policy(policy: LifecycleViolationPolicy) -> BridgeConfig {
    let mut config = BridgeConfig::default();
    config.lifecycle.violation_policy = policy;
    config
}

pub fn example_sheet() -> AccessorySheetData {
    AccessorySheetBuilder::new("example.com")
        .with_user_info(vec![
            UserInfoField::new("user1", "user1", false, true),
            UserInfoField::new("••••", "password", true, true),
        ])
        .with_footer_command("Manage passwords")
        .build()
}

pub fn suggestion_at(items: &[Item], index: usize) -> &ka_core::accessory::SuggestionItem {
    match &items[index] {
        Item::Suggestion(suggestion) => suggestion,
        other => panic!("expected suggestion at {index}, got {other:?}"),
    }
}

pub fn option_at(items: &[Item], index: usize) -> &ka_core::accessory::OptionItem {
    match &items[index] {
        Item::Option(option) => option,
        other => panic!("expected option at {index}, got {other:?}"),
    }
}
