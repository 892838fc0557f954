//! Traits shared by all observable values.

use crate::event::PropertyChangeEvent;
use alloc::boxed::Box;
use alloc::rc::Rc;
use weft_event::Registration;

/// Boxed change handler, the object-safe callback currency of this crate.
pub type ChangeHandler<T> = Box<dyn Fn(&PropertyChangeEvent<T>)>;

/// A value change listener.
///
/// The trait-shaped alternative to a closure handler, for behaviours that
/// carry their own state.
pub trait ValueListener<T> {
    /// Called after the value changed.
    fn on_value_changed(&self, event: &PropertyChangeEvent<T>);
}

/// A readable observable value.
///
/// `get` returns the current value; `add_handler` registers for future
/// changes. Implementations fire a change event only when the value
/// actually changed by `PartialEq`.
pub trait ReadableProperty<T> {
    /// Returns the current value.
    fn get(&self) -> T;

    /// Registers a handler for future change events.
    ///
    /// Disposing the returned registration guarantees no further
    /// notifications to the handler.
    fn add_handler(&self, handler: ChangeHandler<T>) -> Registration;

    /// Registers a `ValueListener` for future change events.
    fn add_listener(&self, listener: Rc<dyn ValueListener<T>>) -> Registration
    where
        T: 'static,
    {
        self.add_handler(Box::new(move |event| listener.on_value_changed(event)))
    }
}

/// A type-erased observable: something that can report "I changed".
///
/// Derived values declare dependencies through this trait so that
/// dependencies of different value types can sit in one list. The payload
/// of the change is deliberately dropped; a dependent recomputes from
/// current values rather than patching from deltas.
pub trait Watchable {
    /// Invokes `callback` after every change until the registration is
    /// disposed.
    fn watch(&self, callback: Rc<dyn Fn()>) -> Registration;
}
