//! Display-ready accessory models
//! 可直接展示的附件模型
//!
//! Items and actions are produced fresh whenever the backend publishes new
//! data and are consumed read-only by the presentation layer. Callbacks are
//! shared closures; they are never compared for equality.

mod action;
mod icon;
mod item;
mod metrics;

use std::sync::Arc;

pub use action::{AccessoryAction, Action};
pub use icon::Icon;
pub use item::{Item, OptionItem, SuggestionItem};
pub use metrics::{AccessorySuggestionType, AccessoryTabType};

/// Callback run when the user selects an item or invokes an action.
pub type SelectCallback = Arc<dyn Fn() + Send + Sync>;

/// One-shot receiver for an icon fetch. `None` means no icon is available.
pub type IconCallback = Box<dyn FnOnce(Option<Icon>) + Send>;

/// Requests an icon of the given pixel size for a suggestion.
pub type IconFetcher = Arc<dyn Fn(u32, IconCallback) + Send + Sync>;
