use crate::accessory::IconCallback;
use crate::handle::NativeHandle;

/// Outbound requests from the bridge to the backend peer.
/// 桥接层发往后端的出站请求。
///
/// Every method addresses the peer through the live [`NativeHandle`]; the
/// bridge never calls these with an invalidated handle.
pub trait AccessoryBackendPort: Send + Sync {
    /// Request the icon for the current origin. The backend answers through
    /// `callback`, possibly much later.
    fn on_favicon_requested(
        &self,
        handle: NativeHandle,
        desired_size_px: u32,
        callback: IconCallback,
    );

    /// The user picked a suggestion; fill `text_to_fill` into the focused field.
    fn on_filling_triggered(&self, handle: NativeHandle, is_obfuscated: bool, text_to_fill: &str);

    fn on_option_selected(&self, handle: NativeHandle, selected_option: &str);

    fn on_generation_requested(&self, handle: NativeHandle);
}
