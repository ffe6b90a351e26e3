use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use ka_core::accessory::{Action, Item};
use ka_core::ports::ManualFillingPort;
use ka_core::provider::PropertyProvider;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Everything the presentation side is asked to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum ManualFillingCommand {
    ItemsPublished(Vec<Item>),
    ActionsPublished(Vec<Action>),
    ShowWhenKeyboardIsVisible,
    Hide,
    CloseAccessorySheet,
    SwapSheetWithKeyboard,
}

impl ManualFillingCommand {
    pub fn name(&self) -> &'static str {
        match self {
            ManualFillingCommand::ItemsPublished(_) => "items_published",
            ManualFillingCommand::ActionsPublished(_) => "actions_published",
            ManualFillingCommand::ShowWhenKeyboardIsVisible => "show_when_keyboard_is_visible",
            ManualFillingCommand::Hide => "hide",
            ManualFillingCommand::CloseAccessorySheet => "close_accessory_sheet",
            ManualFillingCommand::SwapSheetWithKeyboard => "swap_sheet_with_keyboard",
        }
    }
}

/// Manual filling coordinator that relays to a UI task over a channel.
///
/// 通过 channel 将展示命令转发给 UI 任务的协调器实现。
///
/// Registered providers are kept alive here and observed; each publish turns
/// into an `ItemsPublished` or `ActionsPublished` command.
pub struct ChannelManualFillingAdapter {
    command_tx: mpsc::UnboundedSender<ManualFillingCommand>,
    password_providers: Mutex<Vec<Arc<PropertyProvider<Vec<Item>>>>>,
    action_providers: Mutex<Vec<Arc<PropertyProvider<Vec<Action>>>>>,
}

impl ChannelManualFillingAdapter {
    pub fn new(command_tx: mpsc::UnboundedSender<ManualFillingCommand>) -> Self {
        Self {
            command_tx,
            password_providers: Mutex::new(Vec::new()),
            action_providers: Mutex::new(Vec::new()),
        }
    }

    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ManualFillingCommand>) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        (Self::new(command_tx), command_rx)
    }

    pub fn password_provider_count(&self) -> usize {
        lock(&self.password_providers).len()
    }

    pub fn action_provider_count(&self) -> usize {
        lock(&self.action_providers).len()
    }

    fn send(&self, command: ManualFillingCommand) {
        send_command(&self.command_tx, command);
    }
}

fn send_command(tx: &mpsc::UnboundedSender<ManualFillingCommand>, command: ManualFillingCommand) {
    let name = command.name();
    if tx.send(command).is_err() {
        warn!(command = name, "Manual filling channel closed, dropping command");
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl ManualFillingPort for ChannelManualFillingAdapter {
    fn register_password_provider(&self, provider: Arc<PropertyProvider<Vec<Item>>>) {
        let tx = self.command_tx.clone();
        provider.add_observer(Arc::new(move |items: &Vec<Item>| {
            send_command(&tx, ManualFillingCommand::ItemsPublished(items.clone()))
        }));
        debug!("Registered password provider");
        lock(&self.password_providers).push(provider);
    }

    fn register_action_provider(&self, provider: Arc<PropertyProvider<Vec<Action>>>) {
        let tx = self.command_tx.clone();
        provider.add_observer(Arc::new(move |actions: &Vec<Action>| {
            send_command(&tx, ManualFillingCommand::ActionsPublished(actions.clone()))
        }));
        debug!(default_type = ?provider.default_type(), "Registered action provider");
        lock(&self.action_providers).push(provider);
    }

    fn show_when_keyboard_is_visible(&self) {
        self.send(ManualFillingCommand::ShowWhenKeyboardIsVisible);
    }

    fn hide(&self) {
        self.send(ManualFillingCommand::Hide);
    }

    fn close_accessory_sheet(&self) {
        self.send(ManualFillingCommand::CloseAccessorySheet);
    }

    fn swap_sheet_with_keyboard(&self) {
        self.send(ManualFillingCommand::SwapSheetWithKeyboard);
    }
}
