//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Create the channel, metrics and codec adapters / 创建 infra 层适配器
//! - ✅ Inject them into the bridge through its ports / 通过端口注入桥接层
//! - ✅ Spawn the serialized event loop and feed it / 启动事件循环并输入事件
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No bridge logic / 禁止包含桥接业务逻辑**
//! - What an event means is decided by `AccessoryBridge`, not here

use std::sync::Arc;

use ka_app::{run_event_loop, AccessoryBridge, AccessoryBridgeDeps};
use ka_core::config::BridgeConfig;
use ka_core::event::BridgeEvent;
use ka_core::handle::NativeHandle;
use ka_infra::{
    decode_line, BackendRequest, ChannelBackendAdapter, ChannelManualFillingAdapter,
    ManualFillingCommand, TracingMetricsRecorder,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

const EVENT_QUEUE_CAPACITY: usize = 64;

/// Errors during bridge assembly
/// 桥接层组装错误
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Native handle must be non-zero, got {0:#x}")]
    InvalidHandle(u64),

    #[error("Bridge event loop is not running")]
    EventLoopStopped,
}

/// A started bridge and its inbound event queue.
pub struct BridgeRuntime {
    bridge: Arc<AccessoryBridge>,
    events_tx: mpsc::Sender<BridgeEvent>,
    event_loop: JoinHandle<()>,
}

/// Channel ends the bridge's owner drains.
///
/// Both close once the bridge and every callback it published are dropped.
pub struct BridgeOutputs {
    /// Outbound calls for the backend, in the order they were made.
    pub backend_requests: mpsc::UnboundedReceiver<BackendRequest>,
    /// Publishes and presentation commands for the UI side.
    pub presentation_commands: mpsc::UnboundedReceiver<ManualFillingCommand>,
}

/// Wire a live bridge with channel adapters and spawn its event loop.
///
/// Must be called from within a tokio runtime.
pub fn start_bridge(
    raw_handle: u64,
    config: &BridgeConfig,
) -> Result<(BridgeRuntime, BridgeOutputs), WiringError> {
    let handle = NativeHandle::new(raw_handle).ok_or(WiringError::InvalidHandle(raw_handle))?;

    let (backend, backend_requests) = ChannelBackendAdapter::channel();
    let (manual_filling, presentation_commands) = ChannelManualFillingAdapter::channel();

    let bridge = Arc::new(AccessoryBridge::from_deps(AccessoryBridgeDeps {
        handle,
        backend: Arc::new(backend),
        metrics: Arc::new(TracingMetricsRecorder::new()),
        manual_filling: Arc::new(manual_filling),
        config: config.clone(),
    }));

    let (events_tx, events_rx) = mpsc::channel(EVENT_QUEUE_CAPACITY);
    let event_loop = tokio::spawn(run_event_loop(bridge.clone(), events_rx));

    info!(%handle, "Bridge runtime started");

    Ok((
        BridgeRuntime {
            bridge,
            events_tx,
            event_loop,
        },
        BridgeOutputs {
            backend_requests,
            presentation_commands,
        },
    ))
}

impl BridgeRuntime {
    pub fn bridge(&self) -> &Arc<AccessoryBridge> {
        &self.bridge
    }

    /// Sender for feeding events from another task.
    pub fn events(&self) -> mpsc::Sender<BridgeEvent> {
        self.events_tx.clone()
    }

    pub async fn send(&self, event: BridgeEvent) -> Result<(), WiringError> {
        self.events_tx
            .send(event)
            .await
            .map_err(|_| WiringError::EventLoopStopped)
    }

    /// Destroy the bridge through its event queue and wait for the loop.
    ///
    /// Safe to call after a `Destroy` was already sent.
    pub async fn shutdown(self) -> anyhow::Result<()> {
        let BridgeRuntime {
            bridge,
            events_tx,
            event_loop,
        } = self;
        drop(bridge);
        if events_tx.send(BridgeEvent::Destroy).await.is_err() {
            debug!("Event loop already stopped before shutdown");
        }
        drop(events_tx);
        event_loop.await?;
        Ok(())
    }
}

/// Line counts from one [`pump_events`] run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PumpStats {
    pub forwarded: usize,
    pub skipped: usize,
}

/// Read JSON-line events from `reader` and queue them in order.
///
/// Malformed lines are logged and skipped. Stops at end of input, or early
/// once the event loop is gone.
pub async fn pump_events<R>(
    reader: R,
    events: mpsc::Sender<BridgeEvent>,
) -> anyhow::Result<PumpStats>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut stats = PumpStats::default();
    let mut line_number = 0usize;

    while let Some(line) = lines.next_line().await? {
        line_number += 1;
        let event = match decode_line(&line) {
            Ok(Some(event)) => event,
            Ok(None) => continue,
            Err(err) => {
                warn!(line_number, error = %err, "Skipping malformed bridge event");
                stats.skipped += 1;
                continue;
            }
        };

        let name = event.name();
        if events.send(event).await.is_err() {
            debug!(event = name, "Event loop stopped, ending pump");
            break;
        }
        stats.forwarded += 1;
    }

    Ok(stats)
}
