//! Never-changing readable values.

use crate::traits::{ChangeHandler, ReadableProperty, Watchable};
use alloc::rc::Rc;
use weft_event::Registration;

/// A readable value that never changes.
///
/// Listener registration is accepted for interface compatibility and
/// returns an already-disposed registration, since no event will ever fire.
pub struct Constant<T> {
    value: T,
}

impl<T> Clone for Constant<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
        }
    }
}

impl<T: Clone + 'static> Constant<T> {
    /// Wraps `value` as a constant readable property.
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Returns this constant as a type-erased dependency handle.
    pub fn as_dependency(&self) -> Rc<dyn Watchable> {
        Rc::new(Constant {
            value: self.value.clone(),
        })
    }
}

impl<T: Clone + 'static> ReadableProperty<T> for Constant<T> {
    fn get(&self) -> T {
        self.value.clone()
    }

    fn add_handler(&self, _handler: ChangeHandler<T>) -> Registration {
        Registration::empty()
    }
}

impl<T: Clone + 'static> Watchable for Constant<T> {
    fn watch(&self, _callback: Rc<dyn Fn()>) -> Registration {
        Registration::empty()
    }
}

/// Shorthand for `Constant::new`.
#[inline]
pub fn constant<T: Clone + 'static>(value: T) -> Constant<T> {
    Constant::new(value)
}
