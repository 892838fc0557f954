//! Mapped views over observable collections.

use crate::event::{dispatch, CollectionItemEvent, CollectionListener, ItemHandler};
use crate::set::ObservableHashSet;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::hash::Hash;
use weft_event::Registration;

/// A two-way mapped view over an observable set.
///
/// The wrapper presents an `ObservableHashSet<S>` as a set of `T`:
/// mutations translate through `to_source` and are applied to the
/// underlying set (which is where events originate), while listeners and
/// iteration see items translated through `to_target`.
///
/// The wrapper holds no state of its own; every registered handler is a
/// relay subscription on the underlying set.
pub struct ObservableSetWrapper<S, T> {
    source: ObservableHashSet<S>,
    to_target: Rc<dyn Fn(&S) -> T>,
    to_source: Rc<dyn Fn(&T) -> S>,
}

impl<S, T> Clone for ObservableSetWrapper<S, T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            to_target: self.to_target.clone(),
            to_source: self.to_source.clone(),
        }
    }
}

impl<S, T> ObservableSetWrapper<S, T>
where
    S: Clone + Eq + Hash + 'static,
    T: Clone + 'static,
{
    /// Wraps `source` with the given conversions.
    ///
    /// `to_source(to_target(s))` must equal `s` for membership queries and
    /// removals through the wrapper to line up with the underlying set.
    pub fn new<F, G>(source: ObservableHashSet<S>, to_target: F, to_source: G) -> Self
    where
        F: Fn(&S) -> T + 'static,
        G: Fn(&T) -> S + 'static,
    {
        Self {
            source,
            to_target: Rc::new(to_target),
            to_source: Rc::new(to_source),
        }
    }

    /// Returns the number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Returns true if the underlying set has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Returns true if an equivalent member is present.
    pub fn contains(&self, item: &T) -> bool {
        self.source.contains(&(self.to_source.as_ref())(item))
    }

    /// Adds the translation of `item` to the underlying set.
    pub fn add(&self, item: T) -> bool {
        self.source.add((self.to_source.as_ref())(&item))
    }

    /// Removes the translation of `item` from the underlying set.
    pub fn remove(&self, item: &T) -> bool {
        self.source.remove(&(self.to_source.as_ref())(item))
    }

    /// Returns a snapshot of the members, translated.
    pub fn to_vec(&self) -> Vec<T> {
        let to_target = self.to_target.as_ref();
        self.source.iter().map(|item| to_target(&item)).collect()
    }

    /// Iterates over a snapshot of the members, translated.
    pub fn iter(&self) -> impl Iterator<Item = T> {
        self.to_vec().into_iter()
    }

    /// Registers a closure handler; events are relayed from the underlying
    /// set with items translated.
    pub fn add_handler(&self, handler: ItemHandler<T>) -> Registration {
        let to_target = self.to_target.clone();
        self.source.add_handler(alloc::boxed::Box::new(
            move |event: &CollectionItemEvent<S>| {
                handler(&CollectionItemEvent {
                    kind: event.kind,
                    index: event.index,
                    item: (to_target.as_ref())(&event.item),
                });
            },
        ))
    }

    /// Registers a `CollectionListener`; events are relayed translated.
    pub fn add_listener(&self, listener: Rc<dyn CollectionListener<T>>) -> Registration {
        let to_target = self.to_target.clone();
        self.source.add_handler(alloc::boxed::Box::new(
            move |event: &CollectionItemEvent<S>| {
                let translated = CollectionItemEvent {
                    kind: event.kind,
                    index: event.index,
                    item: (to_target.as_ref())(&event.item),
                };
                dispatch(&listener, &translated);
            },
        ))
    }
}
