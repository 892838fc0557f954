//! Reentrancy-safe listener lists.
//!
//! A `Listeners<E>` delivers events synchronously, in registration order.
//! Handlers are allowed to add and remove listeners (including themselves)
//! while a delivery is in progress: firing walks a registration-order
//! snapshot and checks each listener's active flag at call time.

use crate::registration::Registration;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

struct Entry<E> {
    id: u64,
    handler: Rc<dyn Fn(&E)>,
    active: Rc<Cell<bool>>,
}

struct Inner<E> {
    entries: RefCell<Vec<Entry<E>>>,
    next_id: Cell<u64>,
}

/// An ordered list of event listeners.
///
/// Listeners are notified in the order they were registered. Registering
/// during a fire does not deliver the in-flight event to the new listener;
/// disposing during a fire silences the removed listener immediately, even
/// if its turn in the current round has not come yet.
pub struct Listeners<E> {
    inner: Rc<Inner<E>>,
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Listeners<E> {
    /// Creates an empty listener list.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                entries: RefCell::new(Vec::new()),
                next_id: Cell::new(1),
            }),
        }
    }

    /// Returns the number of registered listeners.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.entries.borrow().len()
    }

    /// Returns true if no listener is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.entries.borrow().is_empty()
    }

    /// Delivers `event` to every listener registered at the time of the
    /// call, in registration order.
    ///
    /// Recursive fires from inside a handler are permitted and complete
    /// depth-first before the outer round resumes.
    pub fn fire(&self, event: &E) {
        // Snapshot so handlers may mutate the list mid-round.
        let snapshot: Vec<(Rc<dyn Fn(&E)>, Rc<Cell<bool>>)> = self
            .inner
            .entries
            .borrow()
            .iter()
            .map(|entry| (entry.handler.clone(), entry.active.clone()))
            .collect();

        for (handler, active) in snapshot {
            if active.get() {
                (handler.as_ref())(event);
            }
        }
    }
}

impl<E: 'static> Listeners<E> {
    /// Registers a listener for future events.
    ///
    /// The returned registration removes the listener; after disposal the
    /// listener receives no further events, including events already being
    /// delivered when the disposal happens.
    pub fn add<F>(&self, handler: F) -> Registration
    where
        F: Fn(&E) + 'static,
    {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);

        let active = Rc::new(Cell::new(true));
        self.inner.entries.borrow_mut().push(Entry {
            id,
            handler: Rc::new(handler),
            active: active.clone(),
        });

        let weak: Weak<Inner<E>> = Rc::downgrade(&self.inner);
        Registration::new(move || {
            active.set(false);
            if let Some(inner) = weak.upgrade() {
                inner.entries.borrow_mut().retain(|entry| entry.id != id);
            }
        })
    }
}
