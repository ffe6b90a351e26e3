//! # ka-core
//!
//! Core domain models and ports for the keyboard accessory bridge.
//!
//! This crate contains pure data and contracts without any runtime or
//! infrastructure dependencies.

// Public module exports
pub mod accessory;
pub mod config;
pub mod event;
pub mod handle;
pub mod ports;
pub mod provider;
pub mod sheet;

// Re-export commonly used types at the crate root
pub use accessory::{AccessoryAction, Action, Icon, Item, OptionItem, SuggestionItem};
pub use config::{BridgeConfig, LifecycleViolationPolicy};
pub use event::BridgeEvent;
pub use handle::{HandleCell, HandleLease, NativeHandle};
pub use provider::{PropertyObserver, PropertyProvider};
pub use sheet::{AccessorySheetBuilder, AccessorySheetData, FooterCommand, UserInfo, UserInfoField};
