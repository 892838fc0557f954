//! Live transform handles.

use weft_event::Registration;

/// A live handle for one active transform instance.
///
/// The transformation owns every subscription that was created to produce
/// and maintain its target collection. Disposing it unregisters them all,
/// freezing the target at its current contents; disposing again is a
/// silent no-op. Clearing an externally-owned sink is deliberately not
/// part of disposal (that is the role synchronizer's job on detach).
pub struct Transformation<S, T> {
    source: S,
    target: T,
    teardown: Registration,
}

impl<S, T> Transformation<S, T> {
    /// Wraps a started transform. `teardown` must release every
    /// subscription the transform created.
    pub fn new(source: S, target: T, teardown: Registration) -> Self {
        Self {
            source,
            target,
            teardown,
        }
    }

    /// Returns the source this transformation reads from.
    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the maintained target.
    #[inline]
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Stops maintaining the target and releases all subscriptions.
    pub fn dispose(&mut self) {
        self.teardown.dispose();
    }

    /// Returns true if `dispose` already ran.
    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.teardown.is_disposed()
    }
}
