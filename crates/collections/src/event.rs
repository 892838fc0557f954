//! Structural change events and listener traits.

use alloc::boxed::Box;
use alloc::rc::Rc;

/// What happened to the collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    /// An item entered the collection.
    Add,
    /// An item left the collection.
    Remove,
}

/// A structural change notification.
///
/// For lists the index is the position at the time of the mutation. For
/// sets the index carries no meaning and is always 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectionItemEvent<T> {
    /// Kind of change.
    pub kind: EventKind,
    /// Position of the change (lists only).
    pub index: usize,
    /// The item that was added or removed.
    pub item: T,
}

impl<T> CollectionItemEvent<T> {
    /// Creates an item-added event.
    #[inline]
    pub fn added(index: usize, item: T) -> Self {
        Self {
            kind: EventKind::Add,
            index,
            item,
        }
    }

    /// Creates an item-removed event.
    #[inline]
    pub fn removed(index: usize, item: T) -> Self {
        Self {
            kind: EventKind::Remove,
            index,
            item,
        }
    }
}

/// Boxed structural handler, the object-safe callback currency of this
/// crate.
pub type ItemHandler<T> = Box<dyn Fn(&CollectionItemEvent<T>)>;

/// The fixed capability set of a structural listener.
///
/// Both methods default to no-ops, so a concrete behaviour implements only
/// the events it cares about (adapter pattern).
pub trait CollectionListener<T> {
    /// Called after an item was added.
    fn on_item_added(&self, _event: &CollectionItemEvent<T>) {}

    /// Called after an item was removed.
    fn on_item_removed(&self, _event: &CollectionItemEvent<T>) {}
}

/// Dispatches an event to the matching `CollectionListener` method.
pub(crate) fn dispatch<T>(listener: &Rc<dyn CollectionListener<T>>, event: &CollectionItemEvent<T>) {
    match event.kind {
        EventKind::Add => listener.on_item_added(event),
        EventKind::Remove => listener.on_item_removed(event),
    }
}
