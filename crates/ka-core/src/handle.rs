//! Native handle to the backend peer.
//! 指向后端对端的原生句柄。
//!
//! The bridge addresses the backend through an opaque non-zero identifier.
//! Zero is never a valid handle: once a [`HandleCell`] has been invalidated
//! it never becomes live again.

use std::fmt;
use std::num::NonZeroU64;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, ThreadId};

use serde::{Deserialize, Serialize};

/// A valid (non-zero) identifier of the backend peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NativeHandle(NonZeroU64);

impl NativeHandle {
    /// Returns `None` for the zero sentinel.
    pub fn new(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(Self)
    }

    pub fn get(&self) -> u64 {
        self.0.get()
    }
}

impl From<NonZeroU64> for NativeHandle {
    fn from(raw: NonZeroU64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NativeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0.get())
    }
}

/// Holds a live handle until it is invalidated exactly once.
///
/// Forwards run under a [`HandleLease`]. [`HandleCell::invalidate`] first
/// stops handing out leases, then waits for leases held by other threads to
/// be released, so a forward on another thread is either refused or
/// completes before the handle goes away. A lease held by the invalidating
/// thread itself is not waited for; [`HandleLease::is_still_live`] reports
/// that case.
pub struct HandleCell {
    state: Mutex<CellState>,
    released: Condvar,
}

struct CellState {
    handle: Option<NativeHandle>,
    closing: bool,
    leases: Vec<ThreadId>,
}

impl HandleCell {
    pub fn new(handle: NativeHandle) -> Self {
        Self {
            state: Mutex::new(CellState {
                handle: Some(handle),
                closing: false,
                leases: Vec::new(),
            }),
            released: Condvar::new(),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, CellState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The handle while the cell still accepts forwards.
    pub fn current(&self) -> Option<NativeHandle> {
        let state = self.lock_state();
        if state.closing {
            None
        } else {
            state.handle
        }
    }

    pub fn is_live(&self) -> bool {
        self.current().is_some()
    }

    /// Take a lease on the live handle for the duration of one forward.
    ///
    /// Returns `None` once invalidation has started.
    pub fn lease(&self) -> Option<HandleLease<'_>> {
        let mut state = self.lock_state();
        if state.closing {
            return None;
        }
        let handle = state.handle?;
        state.leases.push(thread::current().id());
        Some(HandleLease { cell: self, handle })
    }

    /// Replace the handle with the invalidated sentinel.
    ///
    /// Blocks until leases held by other threads are released. Returns the
    /// handle that was live, or `None` if the cell had already been
    /// invalidated.
    pub fn invalidate(&self) -> Option<NativeHandle> {
        let me = thread::current().id();
        let mut state = self.lock_state();
        state.closing = true;
        let mut state = self
            .released
            .wait_while(state, |state| state.leases.iter().any(|id| *id != me))
            .unwrap_or_else(PoisonError::into_inner);
        state.handle.take()
    }

    fn release(&self) {
        let me = thread::current().id();
        let mut state = self.lock_state();
        if let Some(index) = state.leases.iter().position(|id| *id == me) {
            state.leases.swap_remove(index);
        }
        drop(state);
        self.released.notify_all();
    }
}

impl fmt::Debug for HandleCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.current() {
            Some(handle) => write!(f, "HandleCell({handle})"),
            None => write!(f, "HandleCell(<invalidated>)"),
        }
    }
}

/// Keeps invalidation from completing on other threads while held.
///
/// Must be dropped on the thread that took it.
pub struct HandleLease<'a> {
    cell: &'a HandleCell,
    handle: NativeHandle,
}

impl HandleLease<'_> {
    pub fn handle(&self) -> NativeHandle {
        self.handle
    }

    /// False when the lease holder's own thread invalidated the cell while
    /// the lease was held.
    pub fn is_still_live(&self) -> bool {
        self.cell.lock_state().handle.is_some()
    }
}

impl Drop for HandleLease<'_> {
    fn drop(&mut self) {
        self.cell.release();
    }
}
