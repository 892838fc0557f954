//! Unordered observable container with identity semantics.

use crate::event::{dispatch, CollectionItemEvent, CollectionListener, ItemHandler};
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::hash::Hash;
use hashbrown::HashSet;
use weft_event::{Listeners, Registration};

struct SetInner<T> {
    items: RefCell<HashSet<T>>,
    listeners: Listeners<CollectionItemEvent<T>>,
}

/// An unordered unique-by-equality container that emits structural events.
///
/// Membership is identity by `Eq`/`Hash`; there is no positional order, so
/// event indices carry no meaning (always 0). Adding an already-present
/// item is silently rejected: no mutation, no event.
pub struct ObservableHashSet<T> {
    inner: Rc<SetInner<T>>,
}

impl<T> Clone for ObservableHashSet<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Default for ObservableHashSet<T>
where
    T: Clone + Eq + Hash + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Eq + Hash + 'static> ObservableHashSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(SetInner {
                items: RefCell::new(HashSet::new()),
                listeners: Listeners::new(),
            }),
        }
    }

    /// Returns the number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.items.borrow().len()
    }

    /// Returns true if the set has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.items.borrow().is_empty()
    }

    /// Returns true if an equal member is present.
    pub fn contains(&self, item: &T) -> bool {
        self.inner.items.borrow().contains(item)
    }

    /// Returns a snapshot of the current members, in no particular order.
    pub fn to_vec(&self) -> Vec<T> {
        self.inner.items.borrow().iter().cloned().collect()
    }

    /// Iterates over a snapshot of the current members.
    pub fn iter(&self) -> impl Iterator<Item = T> {
        self.to_vec().into_iter()
    }

    /// Adds `item`, firing item-added if it was not already a member.
    ///
    /// Returns false (and fires nothing) on duplicate membership.
    pub fn add(&self, item: T) -> bool {
        let inserted = self.inner.items.borrow_mut().insert(item.clone());
        if inserted {
            self.inner
                .listeners
                .fire(&CollectionItemEvent::added(0, item));
        }
        inserted
    }

    /// Removes `item`, firing item-removed if it was a member.
    pub fn remove(&self, item: &T) -> bool {
        let removed = self.inner.items.borrow_mut().remove(item);
        if removed {
            self.inner
                .listeners
                .fire(&CollectionItemEvent::removed(0, item.clone()));
        }
        removed
    }

    /// Removes every member, firing item-removed per member.
    pub fn clear(&self) {
        let drained: Vec<T> = self.inner.items.borrow_mut().drain().collect();
        for item in drained {
            self.inner
                .listeners
                .fire(&CollectionItemEvent::removed(0, item));
        }
    }

    /// Registers a closure handler for structural events.
    pub fn add_handler(&self, handler: ItemHandler<T>) -> Registration {
        self.inner.listeners.add(move |event| handler(event))
    }

    /// Registers a `CollectionListener` for structural events.
    pub fn add_listener(&self, listener: Rc<dyn CollectionListener<T>>) -> Registration {
        self.inner
            .listeners
            .add(move |event| dispatch(&listener, event))
    }
}
