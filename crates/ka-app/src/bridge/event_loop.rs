//! Serialized inbound event loop
//! 串行化的入站事件循环

use std::sync::Arc;

use ka_core::event::BridgeEvent;
use tokio::sync::mpsc;
use tracing::{info, info_span, warn, Instrument};

use super::{AccessoryBridge, EventFlow};

/// Consume backend events one at a time until `Destroy` arrives.
///
/// If the sending side goes away without a `Destroy`, the bridge is torn
/// down here so observers never keep items that point at a dead backend.
pub async fn run_event_loop(
    bridge: Arc<AccessoryBridge>,
    mut events: mpsc::Receiver<BridgeEvent>,
) {
    let span = info_span!("bridge.event_loop");

    async move {
        info!("Bridge event loop started");

        while let Some(event) = events.recv().await {
            if bridge.handle_event(event) == EventFlow::Stop {
                info!("Bridge event loop stopped after destroy");
                return;
            }
        }

        warn!("Bridge event channel closed without destroy, tearing bridge down");
        bridge.destroy();
    }
    .instrument(span)
    .await
}
