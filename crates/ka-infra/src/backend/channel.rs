use ka_core::accessory::IconCallback;
use ka_core::handle::NativeHandle;
use ka_core::ports::AccessoryBackendPort;
use tokio::sync::mpsc;
use tracing::warn;

/// One outbound call to the backend, as queued for its owner.
pub enum BackendRequest {
    Favicon {
        handle: NativeHandle,
        desired_size_px: u32,
        callback: IconCallback,
    },
    Filling {
        handle: NativeHandle,
        is_obfuscated: bool,
        text_to_fill: String,
    },
    OptionSelected {
        handle: NativeHandle,
        selected_option: String,
    },
    GenerationRequested {
        handle: NativeHandle,
    },
}

impl BackendRequest {
    pub fn handle(&self) -> NativeHandle {
        match self {
            BackendRequest::Favicon { handle, .. }
            | BackendRequest::Filling { handle, .. }
            | BackendRequest::OptionSelected { handle, .. }
            | BackendRequest::GenerationRequested { handle } => *handle,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            BackendRequest::Favicon { .. } => "favicon",
            BackendRequest::Filling { .. } => "filling",
            BackendRequest::OptionSelected { .. } => "option_selected",
            BackendRequest::GenerationRequested { .. } => "generation_requested",
        }
    }
}

// Filled text never goes into debug output.
impl std::fmt::Debug for BackendRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendRequest::Favicon {
                handle,
                desired_size_px,
                ..
            } => f
                .debug_struct("Favicon")
                .field("handle", handle)
                .field("desired_size_px", desired_size_px)
                .finish_non_exhaustive(),
            BackendRequest::Filling {
                handle,
                is_obfuscated,
                ..
            } => f
                .debug_struct("Filling")
                .field("handle", handle)
                .field("is_obfuscated", is_obfuscated)
                .finish_non_exhaustive(),
            BackendRequest::OptionSelected {
                handle,
                selected_option,
            } => f
                .debug_struct("OptionSelected")
                .field("handle", handle)
                .field("selected_option", selected_option)
                .finish(),
            BackendRequest::GenerationRequested { handle } => f
                .debug_struct("GenerationRequested")
                .field("handle", handle)
                .finish(),
        }
    }
}

/// Backend port that queues every call on an in-process channel.
///
/// 通过进程内 channel 转发后端调用的适配器。
///
/// Sends never block. If the receiving side is gone the request is dropped
/// with a warning; for favicon requests that also drops the callback, so the
/// requester simply never hears back.
pub struct ChannelBackendAdapter {
    request_tx: mpsc::UnboundedSender<BackendRequest>,
}

impl ChannelBackendAdapter {
    pub fn new(request_tx: mpsc::UnboundedSender<BackendRequest>) -> Self {
        Self { request_tx }
    }

    /// Create an adapter together with the receiver its requests land on.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<BackendRequest>) {
        let (request_tx, request_rx) = mpsc::unbounded_channel();
        (Self::new(request_tx), request_rx)
    }

    fn send(&self, request: BackendRequest) {
        if let Err(err) = self.request_tx.send(request) {
            let request = err.0;
            warn!(
                handle = %request.handle(),
                request = request.kind(),
                "Backend request channel closed, dropping request"
            );
        }
    }
}

impl AccessoryBackendPort for ChannelBackendAdapter {
    fn on_favicon_requested(
        &self,
        handle: NativeHandle,
        desired_size_px: u32,
        callback: IconCallback,
    ) {
        self.send(BackendRequest::Favicon {
            handle,
            desired_size_px,
            callback,
        });
    }

    fn on_filling_triggered(&self, handle: NativeHandle, is_obfuscated: bool, text_to_fill: &str) {
        self.send(BackendRequest::Filling {
            handle,
            is_obfuscated,
            text_to_fill: text_to_fill.to_string(),
        });
    }

    fn on_option_selected(&self, handle: NativeHandle, selected_option: &str) {
        self.send(BackendRequest::OptionSelected {
            handle,
            selected_option: selected_option.to_string(),
        });
    }

    fn on_generation_requested(&self, handle: NativeHandle) {
        self.send(BackendRequest::GenerationRequested { handle });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ka_core::accessory::Icon;
    use std::sync::{Arc, Mutex};

    fn handle() -> NativeHandle {
        NativeHandle::new(7).unwrap()
    }

    #[tokio::test]
    async fn queues_requests_in_call_order() {
        let (adapter, mut rx) = ChannelBackendAdapter::channel();

        adapter.on_filling_triggered(handle(), true, "secret");
        adapter.on_option_selected(handle(), "Manage passwords");
        adapter.on_generation_requested(handle());

        match rx.recv().await.expect("filling") {
            BackendRequest::Filling {
                is_obfuscated,
                text_to_fill,
                ..
            } => {
                assert!(is_obfuscated);
                assert_eq!(text_to_fill, "secret");
            }
            other => panic!("unexpected request: {other:?}"),
        }
        assert_eq!(rx.recv().await.expect("option").kind(), "option_selected");
        assert_eq!(
            rx.recv().await.expect("generation").kind(),
            "generation_requested"
        );
    }

    #[tokio::test]
    async fn favicon_callback_travels_with_request() {
        let (adapter, mut rx) = ChannelBackendAdapter::channel();
        let received = Arc::new(Mutex::new(None));
        let slot = received.clone();

        adapter.on_favicon_requested(
            handle(),
            48,
            Box::new(move |icon: Option<Icon>| *slot.lock().unwrap() = Some(icon)),
        );

        let BackendRequest::Favicon {
            desired_size_px,
            callback,
            ..
        } = rx.recv().await.expect("favicon")
        else {
            panic!("expected favicon request");
        };
        assert_eq!(desired_size_px, 48);
        callback(None);
        assert_eq!(*received.lock().unwrap(), Some(None));
    }

    #[test]
    fn closed_channel_drops_request_quietly() {
        let (adapter, rx) = ChannelBackendAdapter::channel();
        drop(rx);

        adapter.on_generation_requested(handle());
        adapter.on_filling_triggered(handle(), false, "alice");
    }

    #[test]
    fn debug_output_hides_filled_text() {
        let request = BackendRequest::Filling {
            handle: handle(),
            is_obfuscated: true,
            text_to_fill: "hunter2".to_string(),
        };

        let rendered = format!("{request:?}");

        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("is_obfuscated: true"));
    }
}
