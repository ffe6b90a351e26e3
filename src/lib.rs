//! Keyboard accessory bridge
//!
//! 键盘附件桥接库
//!
//! Bootstraps the accessory bridge from `ka-app` with the channel adapters
//! from `ka-infra`.

pub mod bootstrap;

pub use bootstrap::{start_bridge, BridgeOutputs, BridgeRuntime};
pub use ka_app::AccessoryBridge;
pub use ka_core::config::BridgeConfig;
pub use ka_core::event::BridgeEvent;
