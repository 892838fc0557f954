//! Mutable observable value cells.

use crate::event::PropertyChangeEvent;
use crate::traits::{ChangeHandler, ReadableProperty, Watchable};
use alloc::rc::Rc;
use core::cell::RefCell;
use weft_event::{Listeners, Registration};

struct PropertyInner<T> {
    value: RefCell<T>,
    listeners: Listeners<PropertyChangeEvent<T>>,
}

/// A mutable observable cell.
///
/// The handle is cheap to clone; clones share the same cell. `set` notifies
/// listeners synchronously, in registration order, before it returns, and
/// only when the new value differs from the old one by `PartialEq`.
///
/// A `set` issued from inside a notification takes effect immediately:
/// later listeners of the outer round observe the newer value through
/// `get`, and the inner round completes before the outer one resumes.
pub struct Property<T> {
    inner: Rc<PropertyInner<T>>,
}

impl<T> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Clone + PartialEq + 'static> Property<T> {
    /// Creates a cell holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(PropertyInner {
                value: RefCell::new(value),
                listeners: Listeners::new(),
            }),
        }
    }

    /// Returns the current value.
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Replaces the value and notifies listeners if it changed.
    ///
    /// An equal value is a silent no-op.
    pub fn set(&self, value: T) {
        let old = {
            let mut current = self.inner.value.borrow_mut();
            if *current == value {
                return;
            }
            core::mem::replace(&mut *current, value.clone())
        };
        self.inner
            .listeners
            .fire(&PropertyChangeEvent::new(old, value));
    }

    /// Returns the number of registered listeners.
    #[inline]
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.len()
    }

    /// Returns this property as a type-erased dependency handle.
    pub fn as_dependency(&self) -> Rc<dyn Watchable> {
        Rc::new(self.clone())
    }
}

impl<T: Clone + PartialEq + 'static> ReadableProperty<T> for Property<T> {
    fn get(&self) -> T {
        Property::get(self)
    }

    fn add_handler(&self, handler: ChangeHandler<T>) -> Registration {
        self.inner.listeners.add(move |event| handler(event))
    }
}

impl<T: Clone + PartialEq + 'static> Watchable for Property<T> {
    fn watch(&self, callback: Rc<dyn Fn()>) -> Registration {
        self.inner.listeners.add(move |_| (callback.as_ref())())
    }
}
