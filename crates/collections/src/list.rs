//! Ordered observable container.

use crate::event::{dispatch, CollectionItemEvent, CollectionListener, ItemHandler};
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use weft_event::{Listeners, Registration};

struct ListInner<T> {
    items: RefCell<Vec<T>>,
    listeners: Listeners<CollectionItemEvent<T>>,
}

/// An ordered container that emits structural events.
///
/// The handle is cheap to clone; clones share the same backing storage.
/// Every mutation fires its events synchronously, in listener-registration
/// order, before the mutating call returns. Iteration walks a snapshot, so
/// listeners may mutate the list while another caller iterates.
pub struct ObservableList<T> {
    inner: Rc<ListInner<T>>,
}

impl<T> Clone for ObservableList<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Default for ObservableList<T>
where
    T: Clone + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + 'static> ObservableList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(ListInner {
                items: RefCell::new(Vec::new()),
                listeners: Listeners::new(),
            }),
        }
    }

    /// Creates a list from existing items without firing events.
    pub fn from_vec(items: Vec<T>) -> Self {
        Self {
            inner: Rc::new(ListInner {
                items: RefCell::new(items),
                listeners: Listeners::new(),
            }),
        }
    }

    /// Returns the number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.items.borrow().len()
    }

    /// Returns true if the list holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.items.borrow().is_empty()
    }

    /// Returns a clone of the item at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<T> {
        self.inner.items.borrow().get(index).cloned()
    }

    /// Returns a snapshot of the current items.
    pub fn to_vec(&self) -> Vec<T> {
        self.inner.items.borrow().clone()
    }

    /// Iterates over a snapshot of the current items.
    pub fn iter(&self) -> impl Iterator<Item = T> {
        self.to_vec().into_iter()
    }

    /// Appends `item` and fires item-added at the new last index.
    pub fn add(&self, item: T) {
        let index = self.inner.items.borrow().len();
        self.insert(index, item);
    }

    /// Inserts `item` at `index` and fires item-added.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&self, index: usize, item: T) {
        {
            let mut items = self.inner.items.borrow_mut();
            assert!(
                index <= items.len(),
                "insert index {} out of range for list of length {}",
                index,
                items.len()
            );
            items.insert(index, item.clone());
        }
        self.inner
            .listeners
            .fire(&CollectionItemEvent::added(index, item));
    }

    /// Removes and returns the item at `index`, firing item-removed with
    /// the index at the time of removal.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove_at(&self, index: usize) -> T {
        let item = {
            let mut items = self.inner.items.borrow_mut();
            assert!(
                index < items.len(),
                "remove index {} out of range for list of length {}",
                index,
                items.len()
            );
            items.remove(index)
        };
        self.inner
            .listeners
            .fire(&CollectionItemEvent::removed(index, item.clone()));
        item
    }

    /// Removes every item, back to front, firing item-removed per item.
    pub fn clear(&self) {
        while !self.is_empty() {
            let index = self.len() - 1;
            self.remove_at(index);
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

impl<T: Clone + PartialEq + 'static> ObservableList<T> {
    /// Returns true if an equal item is present.
    pub fn contains(&self, item: &T) -> bool {
        self.inner.items.borrow().contains(item)
    }

    /// Removes the first occurrence equal to `item`.
    ///
    /// Returns false (and fires nothing) if no occurrence exists.
    pub fn remove(&self, item: &T) -> bool {
        let position = self.inner.items.borrow().iter().position(|x| x == item);
        match position {
            Some(index) => {
                self.remove_at(index);
                true
            }
            None => false,
        }
    }

    /// Keeps only the items satisfying `predicate`, firing the same
    /// item-removed events as removing each rejected item directly.
    pub fn retain<F>(&self, predicate: F)
    where
        F: Fn(&T) -> bool,
    {
        let mut index = 0;
        while index < self.len() {
            // get() re-reads under the lock each round; a listener may
            // have shifted the tail.
            match self.get(index) {
                Some(item) if !predicate(&item) => {
                    self.remove_at(index);
                }
                Some(_) => index += 1,
                None => break,
            }
        }
    }
}
