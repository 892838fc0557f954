//! Live mapping of observable lists.

use crate::traits::Transformer;
use crate::transformation::Transformation;
use alloc::boxed::Box;
use alloc::rc::Rc;
use core::marker::PhantomData;
use weft_collections::{CollectionItemEvent, EventKind, ObservableList};

/// A live map over an observable list.
///
/// The target holds `f(item)` for every source item, in source order; the
/// correspondence is positional, so source and target indices always
/// match. See [`map`].
pub struct MapTransformer<S, T, F> {
    f: Rc<F>,
    _marker: PhantomData<(S, T)>,
}

/// Creates a live map transformer from a per-item function.
///
/// `f` is invoked once per source item at admission time; items are not
/// re-mapped while they stay in the source.
pub fn map<S, T, F>(f: F) -> MapTransformer<S, T, F>
where
    S: Clone + 'static,
    T: Clone + 'static,
    F: Fn(&S) -> T + 'static,
{
    MapTransformer {
        f: Rc::new(f),
        _marker: PhantomData,
    }
}

impl<S, T, F> Transformer<ObservableList<S>, ObservableList<T>> for MapTransformer<S, T, F>
where
    S: Clone + 'static,
    T: Clone + 'static,
    F: Fn(&S) -> T + 'static,
{
    fn transform_into(
        &self,
        source: ObservableList<S>,
        target: ObservableList<T>,
    ) -> Transformation<ObservableList<S>, ObservableList<T>> {
        for item in source.iter() {
            target.add((self.f.as_ref())(&item));
        }

        let f = self.f.clone();
        let listener_target = target.clone();
        let source_reg = source.add_handler(Box::new(move |event: &CollectionItemEvent<S>| {
            match event.kind {
                EventKind::Add => {
                    listener_target.insert(event.index, (f.as_ref())(&event.item));
                }
                EventKind::Remove => {
                    listener_target.remove_at(event.index);
                }
            }
        }));

        Transformation::new(source, target, source_reg)
    }
}
