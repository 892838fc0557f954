//! Subscription handles.
//!
//! Every listener registration in weft returns a `Registration`. Disposing
//! it removes the listener; the removal is guaranteed to be observed
//! immediately, even when it happens in the middle of a notification
//! cascade.

use alloc::boxed::Box;
use alloc::vec::Vec;

/// A single-shot disposer for a subscription.
///
/// The wrapped teardown closure runs at most once. Disposing a registration
/// a second time is a silent no-op, so callers never need to track whether
/// a registration has already been released.
///
/// Dropping an undisposed registration does NOT tear the subscription down;
/// cleanup is explicit by contract.
pub struct Registration {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Registration {
    /// Creates a registration that runs `teardown` on first disposal.
    pub fn new<F>(teardown: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    /// Creates an already-disposed registration.
    ///
    /// Useful for sources that never change (constants) and as a
    /// placeholder before a real subscription is wired up.
    pub fn empty() -> Self {
        Self { teardown: None }
    }

    /// Combines several registrations into one that disposes them in order.
    pub fn from_many(regs: Vec<Registration>) -> Self {
        Self::new(move || {
            for mut reg in regs {
                reg.dispose();
            }
        })
    }

    /// Runs the teardown if it has not run yet.
    pub fn dispose(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }

    /// Returns true if the teardown already ran (or never existed).
    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.teardown.is_none()
    }
}

impl Default for Registration {
    fn default() -> Self {
        Self::empty()
    }
}
