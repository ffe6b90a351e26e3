//! Keyboard Accessory Application Layer
//!
//! This crate turns backend sheets into display-ready items, publishes them
//! to the presentation layer and routes user actions back to the backend.

pub mod bridge;
pub mod projection;

pub use bridge::{run_event_loop, AccessoryBridge, AccessoryBridgeDeps, EventFlow};
pub use projection::{convert_to_items, SheetActionSink};
