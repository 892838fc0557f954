//! Animation contract.
//!
//! The platform layer (DOM, native toolkit) expresses long-running visual
//! effects as values implementing [`Animation`]. The core consumes them
//! only through this contract: start the effect, get a callback when it
//! finished. Companions typically trigger animations from their
//! `attached`/`detached` hooks; the synchronizer never waits on one.

use alloc::boxed::Box;

/// A run-to-completion visual effect.
pub trait Animation {
    /// Starts the effect; `on_done` is invoked exactly once when it
    /// completes. Completion may be synchronous.
    fn run(self: Box<Self>, on_done: Box<dyn FnOnce()>);
}

/// An animation that completes immediately.
///
/// The headless stand-in for platform effects; useful in tests and
/// non-visual embeddings.
pub struct ImmediateAnimation;

impl Animation for ImmediateAnimation {
    fn run(self: Box<Self>, on_done: Box<dyn FnOnce()>) {
        on_done();
    }
}

struct FnAnimation<F>(F);

impl<F> Animation for FnAnimation<F>
where
    F: FnOnce(Box<dyn FnOnce()>),
{
    fn run(self: Box<Self>, on_done: Box<dyn FnOnce()>) {
        (self.0)(on_done);
    }
}

/// Wraps a closure as an [`Animation`].
///
/// The closure receives the completion callback and is responsible for
/// invoking it exactly once.
pub fn from_fn<F>(run: F) -> Box<dyn Animation>
where
    F: FnOnce(Box<dyn FnOnce()>) + 'static,
{
    Box::new(FnAnimation(run))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;

    #[test]
    fn test_immediate_animation_completes_synchronously() {
        let done = Rc::new(Cell::new(false));

        let d = done.clone();
        let animation: Box<dyn Animation> = Box::new(ImmediateAnimation);
        animation.run(Box::new(move || d.set(true)));

        assert!(done.get());
    }

    #[test]
    fn test_from_fn_controls_completion() {
        let done = Rc::new(Cell::new(false));

        let animation = from_fn(|on_done| on_done());

        let d = done.clone();
        animation.run(Box::new(move || d.set(true)));

        assert!(done.get());
    }
}
