//! Typed value provider
//! 类型化的值提供者
//!
//! A [`PropertyProvider`] publishes replacement values to every registered
//! observer, synchronously and in registration order. It keeps no history:
//! an observer registered after a publish receives nothing until the next one.
//!
//! Registering the same observer twice delivers every value to it twice.
//! Avoiding duplicate registration is the caller's job.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::accessory::AccessoryAction;

/// Receives every value published by a [`PropertyProvider`].
pub trait PropertyObserver<T>: Send + Sync {
    fn on_property_changed(&self, value: &T);
}

impl<T, F> PropertyObserver<T> for F
where
    F: Fn(&T) + Send + Sync,
{
    fn on_property_changed(&self, value: &T) {
        self(value)
    }
}

pub struct PropertyProvider<T> {
    default_type: Option<AccessoryAction>,
    observers: Mutex<Vec<Arc<dyn PropertyObserver<T>>>>,
}

impl<T> PropertyProvider<T> {
    pub fn new() -> Self {
        Self {
            default_type: None,
            observers: Mutex::new(Vec::new()),
        }
    }

    /// Create a provider tagged with the action type it usually carries, so
    /// the presentation layer can tell providers apart.
    pub fn with_default_type(default_type: AccessoryAction) -> Self {
        Self {
            default_type: Some(default_type),
            observers: Mutex::new(Vec::new()),
        }
    }

    pub fn default_type(&self) -> Option<AccessoryAction> {
        self.default_type
    }

    pub fn add_observer(&self, observer: Arc<dyn PropertyObserver<T>>) {
        self.lock_observers().push(observer);
    }

    /// Remove the first registration of `observer`. No-op if it is absent.
    pub fn remove_observer(&self, observer: &Arc<dyn PropertyObserver<T>>) {
        let mut observers = self.lock_observers();
        if let Some(index) = observers
            .iter()
            .position(|registered| Arc::ptr_eq(registered, observer))
        {
            observers.remove(index);
        }
    }

    pub fn observer_count(&self) -> usize {
        self.lock_observers().len()
    }

    /// Publish `value` to all observers before returning.
    ///
    /// Observers run outside the internal lock, so an observer may register
    /// or remove observers; such changes apply from the next publish.
    pub fn notify_observers(&self, value: T) {
        let observers = { self.lock_observers().clone() };
        for observer in observers {
            observer.on_property_changed(&value);
        }
    }

    fn lock_observers(&self) -> MutexGuard<'_, Vec<Arc<dyn PropertyObserver<T>>>> {
        self.observers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Default for PropertyProvider<T> {
    fn default() -> Self {
        Self::new()
    }
}
