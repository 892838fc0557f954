//! Target representation sinks.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use weft_collections::ObservableList;

/// An externally-owned ordered sequence the synchronizer writes
/// representations into.
///
/// Only index-based insertion and removal are required; the sink manages
/// its own storage. The synchronizer never reorders a sink behind its
/// back: every mutation is an insert or remove at a single index.
pub trait TargetSink<R> {
    /// Inserts `item` at `index`.
    fn insert(&mut self, index: usize, item: R);

    /// Removes the item at `index`.
    fn remove(&mut self, index: usize);

    /// Returns the number of items currently in the sink.
    fn len(&self) -> usize;

    /// Returns true if the sink holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<R: Clone + 'static> TargetSink<R> for ObservableList<R> {
    fn insert(&mut self, index: usize, item: R) {
        ObservableList::insert(self, index, item);
    }

    fn remove(&mut self, index: usize) {
        self.remove_at(index);
    }

    fn len(&self) -> usize {
        ObservableList::len(self)
    }
}

impl<R> TargetSink<R> for Rc<RefCell<Vec<R>>> {
    fn insert(&mut self, index: usize, item: R) {
        self.borrow_mut().insert(index, item);
    }

    fn remove(&mut self, index: usize) {
        self.borrow_mut().remove(index);
    }

    fn len(&self) -> usize {
        self.borrow().len()
    }
}
