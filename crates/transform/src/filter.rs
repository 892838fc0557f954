//! Live filtering of observable lists.
//!
//! The target always contains, in source relative order, exactly the
//! subsequence of source items whose inclusion property currently reads as
//! included. Inclusion is re-resolved per item when the source changes and
//! when the item's own inclusion property changes; nothing else is ever
//! re-evaluated.

use crate::traits::{Included, Transformer};
use crate::transformation::Transformation;
use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::marker::PhantomData;
use weft_collections::{CollectionItemEvent, EventKind, ObservableList};
use weft_event::Registration;
use weft_property::ReadableProperty;

/// Per-item bookkeeping.
///
/// Entries mirror source order, one per source item, included or not, so
/// that duplicate-equal items stay independent: an item is identified by
/// its entry, never by value equality.
struct FilterEntry<T, P> {
    item: T,
    /// Resolved inclusion state; flips drive target mutations.
    included: Cell<bool>,
    inclusion: P,
    subscription: RefCell<Registration>,
}

type EntryList<T, P> = Rc<RefCell<Vec<Rc<FilterEntry<T, P>>>>>;

/// Number of included entries strictly before `index`: the target position
/// an entry at `index` occupies (or would occupy) while included.
fn included_before<T, P>(entries: &[Rc<FilterEntry<T, P>>], index: usize) -> usize {
    entries[..index]
        .iter()
        .filter(|entry| entry.included.get())
        .count()
}

fn on_inclusion_changed<T, B, P>(
    entry: &Rc<FilterEntry<T, P>>,
    entries: &EntryList<T, P>,
    target: &ObservableList<T>,
) where
    T: Clone + 'static,
    B: Included + 'static,
    P: ReadableProperty<B> + 'static,
{
    let now = entry.inclusion.get().included();
    if now == entry.included.get() {
        return;
    }
    entry.included.set(now);

    // Locate this entry by identity; the borrow ends before the target
    // mutation below so its listeners may reenter freely.
    let target_index = {
        let list = entries.borrow();
        list.iter()
            .position(|candidate| Rc::ptr_eq(candidate, entry))
            .map(|position| included_before(&list, position))
    };
    let Some(target_index) = target_index else {
        return;
    };

    if now {
        target.insert(target_index, entry.item.clone());
    } else {
        target.remove_at(target_index);
    }
}

/// Creates an entry for `item`: resolves its inclusion property through
/// `rule` and subscribes to it for future toggles.
fn make_entry<T, B, P, F>(
    item: T,
    rule: &Rc<F>,
    entries: &EntryList<T, P>,
    target: &ObservableList<T>,
) -> Rc<FilterEntry<T, P>>
where
    T: Clone + 'static,
    B: Included + 'static,
    P: ReadableProperty<B> + 'static,
    F: Fn(&T) -> P + 'static,
{
    let inclusion = (rule.as_ref())(&item);
    let included = inclusion.get().included();
    let entry = Rc::new(FilterEntry {
        item,
        included: Cell::new(included),
        inclusion,
        subscription: RefCell::new(Registration::empty()),
    });

    let weak_entry = Rc::downgrade(&entry);
    let weak_entries = Rc::downgrade(entries);
    let target = target.clone();
    let subscription = entry.inclusion.add_handler(Box::new(move |_| {
        let (entry, entries) = match (weak_entry.upgrade(), weak_entries.upgrade()) {
            (Some(entry), Some(entries)) => (entry, entries),
            _ => return,
        };
        on_inclusion_changed(&entry, &entries, &target);
    }));
    *entry.subscription.borrow_mut() = subscription;

    entry
}

/// A live filter over an observable list.
///
/// The per-item inclusion rule is an observable value produced by the
/// `rule` factory: a constant for static filters, a property or derived
/// value for filters that follow application state. See [`filter`].
pub struct FilterTransformer<T, B, P, F> {
    rule: Rc<F>,
    _marker: PhantomData<(T, B, P)>,
}

/// Creates a live filter transformer from a per-item inclusion factory.
///
/// `rule` is invoked exactly once per source item, at admission time; the
/// returned observable inclusion value is then tracked for the item's
/// whole stay in the source. An inclusion value of `None` means excluded.
pub fn filter<T, B, P, F>(rule: F) -> FilterTransformer<T, B, P, F>
where
    T: Clone + 'static,
    B: Included + 'static,
    P: ReadableProperty<B> + 'static,
    F: Fn(&T) -> P + 'static,
{
    FilterTransformer {
        rule: Rc::new(rule),
        _marker: PhantomData,
    }
}

impl<T, B, P, F> Transformer<ObservableList<T>, ObservableList<T>> for FilterTransformer<T, B, P, F>
where
    T: Clone + 'static,
    B: Included + 'static,
    P: ReadableProperty<B> + 'static,
    F: Fn(&T) -> P + 'static,
{
    fn transform_into(
        &self,
        source: ObservableList<T>,
        target: ObservableList<T>,
    ) -> Transformation<ObservableList<T>, ObservableList<T>> {
        let entries: EntryList<T, P> = Rc::new(RefCell::new(Vec::new()));

        // Initial synchronization pass.
        for item in source.iter() {
            let entry = make_entry(item, &self.rule, &entries, &target);
            let admit = entry.included.get();
            entries.borrow_mut().push(entry.clone());
            if admit {
                target.add(entry.item.clone());
            }
        }

        let rule = self.rule.clone();
        let listener_entries = entries.clone();
        let listener_target = target.clone();
        let source_reg = source.add_handler(Box::new(move |event: &CollectionItemEvent<T>| {
            match event.kind {
                EventKind::Add => {
                    let entry = make_entry(
                        event.item.clone(),
                        &rule,
                        &listener_entries,
                        &listener_target,
                    );
                    let target_index = {
                        let mut list = listener_entries.borrow_mut();
                        list.insert(event.index, entry.clone());
                        if entry.included.get() {
                            Some(included_before(&list, event.index))
                        } else {
                            None
                        }
                    };
                    if let Some(index) = target_index {
                        listener_target.insert(index, entry.item.clone());
                    }
                }
                EventKind::Remove => {
                    let entry = listener_entries.borrow_mut().remove(event.index);
                    entry.subscription.borrow_mut().dispose();
                    if entry.included.get() {
                        let index = included_before(&listener_entries.borrow(), event.index);
                        listener_target.remove_at(index);
                    }
                }
            }
        }));

        let teardown_entries = entries;
        let teardown = Registration::from_many(vec![
            source_reg,
            Registration::new(move || {
                let drained: Vec<_> = core::mem::take(&mut *teardown_entries.borrow_mut());
                for entry in drained {
                    entry.subscription.borrow_mut().dispose();
                }
            }),
        ]);

        Transformation::new(source, target, teardown)
    }
}
