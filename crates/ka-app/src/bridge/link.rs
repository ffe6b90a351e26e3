//! Guarded forwarding state shared by the bridge and every callback it
//! publishes.
//!
//! Published items and actions can outlive the bridge. They hold an
//! `Arc<BridgeLink>` and re-check the handle at call time instead of
//! capturing whether it was live when they were created. Each forward holds
//! a handle lease from the check to the backend call, so teardown on another
//! thread lands strictly before or after it.

use std::sync::Arc;

use ka_core::accessory::{
    AccessoryAction, AccessorySuggestionType, AccessoryTabType, IconCallback,
};
use ka_core::config::LifecycleViolationPolicy;
use ka_core::handle::{HandleCell, HandleLease, NativeHandle};
use ka_core::ports::{AccessoryBackendPort, AccessoryMetricsPort};
use tracing::{debug, error};

use crate::projection::SheetActionSink;

pub(crate) struct BridgeLink {
    handle: HandleCell,
    backend: Arc<dyn AccessoryBackendPort>,
    metrics: Arc<dyn AccessoryMetricsPort>,
    violation_policy: LifecycleViolationPolicy,
}

impl BridgeLink {
    pub(crate) fn new(
        handle: NativeHandle,
        backend: Arc<dyn AccessoryBackendPort>,
        metrics: Arc<dyn AccessoryMetricsPort>,
        violation_policy: LifecycleViolationPolicy,
    ) -> Self {
        Self {
            handle: HandleCell::new(handle),
            backend,
            metrics,
            violation_policy,
        }
    }

    pub(crate) fn is_live(&self) -> bool {
        self.handle.is_live()
    }

    pub(crate) fn invalidate(&self) -> Option<NativeHandle> {
        self.handle.invalidate()
    }

    /// A lease on the live handle, or `None` after reporting the violation.
    ///
    /// With [`LifecycleViolationPolicy::Panic`] this does not return for an
    /// invalidated handle.
    fn enter(&self, operation: &'static str) -> Option<HandleLease<'_>> {
        match self.handle.lease() {
            Some(lease) => Some(lease),
            None => self.violation(operation),
        }
    }

    /// Re-check a lease after running port code that may have torn the
    /// bridge down on this thread.
    fn still_live(
        &self,
        lease: &HandleLease<'_>,
        operation: &'static str,
    ) -> Option<NativeHandle> {
        if lease.is_still_live() {
            Some(lease.handle())
        } else {
            self.violation(operation)
        }
    }

    fn violation<T>(&self, operation: &'static str) -> Option<T> {
        error!(
            operation,
            policy = ?self.violation_policy,
            "Bridge operation invoked after the bridge was destroyed"
        );
        match self.violation_policy {
            LifecycleViolationPolicy::Panic => {
                panic!("{operation} invoked after the bridge was destroyed")
            }
            LifecycleViolationPolicy::Log => None,
        }
    }

    pub(crate) fn request_generation(&self) {
        const OPERATION: &str = "request_generation";
        let Some(lease) = self.enter(OPERATION) else {
            return;
        };
        self.metrics
            .record_action_selected(AccessoryAction::GenerateCredential);
        let Some(handle) = self.still_live(&lease, OPERATION) else {
            return;
        };
        debug!(%handle, "Forwarding generation request");
        self.backend.on_generation_requested(handle);
    }

    pub(crate) fn request_icon(&self, desired_size_px: u32, callback: IconCallback) {
        let Some(lease) = self.enter("request_icon") else {
            return;
        };
        let handle = lease.handle();
        debug!(%handle, desired_size_px, "Forwarding icon request");
        self.backend
            .on_favicon_requested(handle, desired_size_px, callback);
    }

    pub(crate) fn forward_selection(&self, is_obfuscated: bool, text_to_fill: &str) {
        const OPERATION: &str = "forward_selection";
        let Some(lease) = self.enter(OPERATION) else {
            return;
        };
        self.metrics.record_suggestion_selected(
            AccessoryTabType::Passwords,
            AccessorySuggestionType::for_obfuscated(is_obfuscated),
        );
        let Some(handle) = self.still_live(&lease, OPERATION) else {
            return;
        };
        debug!(%handle, is_obfuscated, "Forwarding suggestion selection");
        self.backend
            .on_filling_triggered(handle, is_obfuscated, text_to_fill);
    }

    pub(crate) fn forward_option_selection(&self, selected_option: &str) {
        const OPERATION: &str = "forward_option_selection";
        let Some(lease) = self.enter(OPERATION) else {
            return;
        };
        self.metrics
            .record_footer_command_selected(AccessoryTabType::Passwords);
        let Some(handle) = self.still_live(&lease, OPERATION) else {
            return;
        };
        debug!(%handle, selected_option, "Forwarding option selection");
        self.backend.on_option_selected(handle, selected_option);
    }
}

impl SheetActionSink for BridgeLink {
    fn on_suggestion_selected(&self, is_obfuscated: bool, text_to_fill: &str) {
        self.forward_selection(is_obfuscated, text_to_fill);
    }

    fn on_option_selected(&self, selected_option: &str) {
        self.forward_option_selection(selected_option);
    }

    fn on_icon_requested(&self, desired_size_px: u32, callback: IconCallback) {
        self.request_icon(desired_size_px, callback);
    }
}
