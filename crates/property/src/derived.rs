//! Dependency-tracked derived values.

use crate::event::PropertyChangeEvent;
use crate::traits::{ChangeHandler, ReadableProperty, Watchable};
use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use weft_event::{Listeners, Registration};

struct Tracking<T> {
    /// Last value computed while tracking was active. Kept after the last
    /// listener leaves; it is stale from then on and only `get` refreshes.
    cached: Option<T>,
    /// Live subscriptions to the dependencies, one per dependency.
    dep_regs: Vec<Registration>,
    active: bool,
}

struct DerivedInner<T> {
    compute: Box<dyn Fn() -> T>,
    deps: Vec<Rc<dyn Watchable>>,
    listeners: Listeners<PropertyChangeEvent<T>>,
    tracking: RefCell<Tracking<T>>,
}

/// A read-only observable value computed from other observable values.
///
/// The derived value subscribes to its dependencies only while at least one
/// listener is attached. On the first listener it subscribes everywhere and
/// caches the computed value; on each dependency change it recomputes and
/// fires a change event only when the result differs from the previously
/// emitted value; on the last listener's departure it unsubscribes and
/// keeps the (now stale) cache. An unlistened `get` recomputes directly
/// from current dependency values.
///
/// Dependency changes are never coalesced: each mutation of a dependency
/// triggers its own recompute-and-compare.
pub struct DerivedProperty<T> {
    inner: Rc<DerivedInner<T>>,
}

impl<T> Clone for DerivedProperty<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Clone + PartialEq + 'static> DerivedProperty<T> {
    /// Creates a derived value computed by `compute` over `deps`.
    ///
    /// `compute` must be pure over the current values of the dependencies;
    /// every dependency it reads must appear in `deps`, or listeners will
    /// miss updates.
    ///
    /// # Panics
    ///
    /// Panics if `deps` is empty.
    pub fn new<F>(deps: Vec<Rc<dyn Watchable>>, compute: F) -> Self
    where
        F: Fn() -> T + 'static,
    {
        assert!(
            !deps.is_empty(),
            "a derived property needs at least one dependency"
        );
        Self {
            inner: Rc::new(DerivedInner {
                compute: Box::new(compute),
                deps,
                listeners: Listeners::new(),
                tracking: RefCell::new(Tracking {
                    cached: None,
                    dep_regs: Vec::new(),
                    active: false,
                }),
            }),
        }
    }

    /// Returns the current value: the cache while tracking is active, a
    /// fresh computation otherwise.
    pub fn get(&self) -> T {
        {
            let tracking = self.inner.tracking.borrow();
            if tracking.active {
                if let Some(value) = tracking.cached.clone() {
                    return value;
                }
            }
        }
        (self.inner.compute)()
    }

    /// Returns the number of registered listeners.
    #[inline]
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.len()
    }

    /// Returns this derived value as a type-erased dependency handle.
    pub fn as_dependency(&self) -> Rc<dyn Watchable> {
        Rc::new(self.clone())
    }

    fn activate(inner: &Rc<DerivedInner<T>>) {
        let value = (inner.compute)();
        {
            let mut tracking = inner.tracking.borrow_mut();
            tracking.cached = Some(value);
            tracking.active = true;
        }

        let weak = Rc::downgrade(inner);
        let callback: Rc<dyn Fn()> = Rc::new(move || {
            if let Some(inner) = weak.upgrade() {
                Self::on_dependency_changed(&inner);
            }
        });
        let regs: Vec<Registration> = inner
            .deps
            .iter()
            .map(|dep| dep.watch(callback.clone()))
            .collect();
        inner.tracking.borrow_mut().dep_regs = regs;
    }

    fn deactivate(inner: &Rc<DerivedInner<T>>) {
        let mut regs = {
            let mut tracking = inner.tracking.borrow_mut();
            tracking.active = false;
            core::mem::take(&mut tracking.dep_regs)
        };
        for reg in &mut regs {
            reg.dispose();
        }
    }

    fn on_dependency_changed(inner: &Rc<DerivedInner<T>>) {
        let new_value = (inner.compute)();
        let event = {
            let mut tracking = inner.tracking.borrow_mut();
            let old_value = match tracking.cached.clone() {
                Some(value) if tracking.active => value,
                _ => return,
            };
            if old_value == new_value {
                return;
            }
            tracking.cached = Some(new_value.clone());
            PropertyChangeEvent::new(old_value, new_value)
        };
        inner.listeners.fire(&event);
    }
}

impl<T: Clone + PartialEq + 'static> ReadableProperty<T> for DerivedProperty<T> {
    fn get(&self) -> T {
        DerivedProperty::get(self)
    }

    fn add_handler(&self, handler: ChangeHandler<T>) -> Registration {
        if self.inner.listeners.is_empty() {
            Self::activate(&self.inner);
        }
        let mut listener_reg = self.inner.listeners.add(move |event| handler(event));

        let weak = Rc::downgrade(&self.inner);
        Registration::new(move || {
            listener_reg.dispose();
            if let Some(inner) = weak.upgrade() {
                if inner.listeners.is_empty() {
                    Self::deactivate(&inner);
                }
            }
        })
    }
}

impl<T: Clone + PartialEq + 'static> Watchable for DerivedProperty<T> {
    fn watch(&self, callback: Rc<dyn Fn()>) -> Registration {
        // Goes through add_handler so that a watching dependent keeps this
        // derived value's own dependency tracking alive.
        self.add_handler(Box::new(move |_| (callback.as_ref())()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Property;
    use alloc::string::String;
    use alloc::vec;

    #[test]
    fn test_suppresses_event_when_value_unchanged() {
        let prop: Property<Option<String>> = Property::new(None);
        let length = DerivedProperty::new(vec![prop.as_dependency()], {
            let prop = prop.clone();
            move || prop.get().map(|s| s.len()).unwrap_or(0)
        });

        prop.set(Some(String::from("xyz")));

        let events = Rc::new(RefCell::new(Vec::new()));
        let e = events.clone();
        let _reg = length.add_handler(Box::new(move |event: &PropertyChangeEvent<usize>| {
            e.borrow_mut().push(event.clone());
        }));

        // Dependency changes but the derived value does not: silence.
        prop.set(Some(String::from("abc")));
        assert!(events.borrow().is_empty());

        // Actual change: exactly one event with (old, new).
        prop.set(Some(String::from("")));
        assert_eq!(*events.borrow(), vec![PropertyChangeEvent::new(3, 0)]);
    }

    #[test]
    fn test_lazy_get_without_listeners() {
        let prop = Property::new(2);
        let doubled = DerivedProperty::new(vec![prop.as_dependency()], {
            let prop = prop.clone();
            move || prop.get() * 2
        });

        assert_eq!(doubled.get(), 4);
        prop.set(5);
        assert_eq!(doubled.get(), 10);
        assert_eq!(prop.listener_count(), 0);
    }

    #[test]
    fn test_active_get_uses_cache() {
        let prop = Property::new(1);
        let computes = Rc::new(RefCell::new(0));

        let c = computes.clone();
        let derived = DerivedProperty::new(vec![prop.as_dependency()], {
            let prop = prop.clone();
            move || {
                *c.borrow_mut() += 1;
                prop.get() + 10
            }
        });

        let _reg = derived.add_handler(Box::new(|_| {}));
        let computed_on_attach = *computes.borrow();

        assert_eq!(derived.get(), 11);
        assert_eq!(derived.get(), 11);
        assert_eq!(*computes.borrow(), computed_on_attach); // cache served both

        assert_eq!(prop.listener_count(), 1); // subscribed while listened to
    }

    #[test]
    fn test_last_listener_removal_stops_tracking() {
        let prop = Property::new(1);
        let computes = Rc::new(RefCell::new(0));

        let c = computes.clone();
        let derived = DerivedProperty::new(vec![prop.as_dependency()], {
            let prop = prop.clone();
            move || {
                *c.borrow_mut() += 1;
                prop.get()
            }
        });

        let mut reg = derived.add_handler(Box::new(|_| {}));
        reg.dispose();
        assert_eq!(prop.listener_count(), 0);

        let before = *computes.borrow();
        prop.set(2); // no recompute without listeners
        assert_eq!(*computes.borrow(), before);

        assert_eq!(derived.get(), 2); // lazy get is still fresh
    }

    #[test]
    fn test_multiple_dependencies() {
        let a = Property::new(1);
        let b = Property::new(10);
        let sum = DerivedProperty::new(vec![a.as_dependency(), b.as_dependency()], {
            let a = a.clone();
            let b = b.clone();
            move || a.get() + b.get()
        });

        let events = Rc::new(RefCell::new(Vec::new()));
        let e = events.clone();
        let _reg = sum.add_handler(Box::new(move |event: &PropertyChangeEvent<i32>| {
            e.borrow_mut().push((event.old_value, event.new_value));
        }));

        a.set(2);
        b.set(20);

        // Two separate mutations, two separate events: no coalescing.
        assert_eq!(*events.borrow(), vec![(11, 12), (12, 22)]);
        assert_eq!(sum.get(), 22);
    }

    #[test]
    fn test_derived_of_derived() {
        let prop = Property::new(3);
        let doubled = DerivedProperty::new(vec![prop.as_dependency()], {
            let prop = prop.clone();
            move || prop.get() * 2
        });
        let doubled_plus_one = DerivedProperty::new(vec![doubled.as_dependency()], {
            let doubled = doubled.clone();
            move || doubled.get() + 1
        });

        let events = Rc::new(RefCell::new(Vec::new()));
        let e = events.clone();
        let _reg = doubled_plus_one.add_handler(Box::new(
            move |event: &PropertyChangeEvent<i32>| {
                e.borrow_mut().push(event.new_value);
            },
        ));

        // Watching the outer derived keeps the inner one tracking too.
        assert_eq!(prop.listener_count(), 1);

        prop.set(5);
        assert_eq!(*events.borrow(), vec![11]);
        assert_eq!(doubled_plus_one.get(), 11);
    }

    #[test]
    fn test_second_listener_does_not_resubscribe() {
        let prop = Property::new(1);
        let derived = DerivedProperty::new(vec![prop.as_dependency()], {
            let prop = prop.clone();
            move || prop.get()
        });

        let _r1 = derived.add_handler(Box::new(|_| {}));
        let _r2 = derived.add_handler(Box::new(|_| {}));

        assert_eq!(prop.listener_count(), 1);
        assert_eq!(derived.listener_count(), 2);
    }

    #[test]
    #[should_panic(expected = "at least one dependency")]
    fn test_empty_dependency_list_panics() {
        let _derived: DerivedProperty<i32> = DerivedProperty::new(Vec::new(), || 0);
    }
}
