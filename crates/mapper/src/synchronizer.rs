//! Collection role synchronizer.
//!
//! Generalizes the live transformers: for every element of a transformed
//! item sequence, a companion object is constructed and its representation
//! placed into an externally-owned target sequence at the matching index.
//! The synchronizer exclusively owns every companion it creates.

use crate::companion::{Companion, CompanionFactory};
use crate::error::{Error, Result};
use crate::sink::TargetSink;
use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::marker::PhantomData;
use weft_collections::{CollectionItemEvent, EventKind, ObservableList};
use weft_event::Registration;
use weft_transform::{Transformation, Transformer};

struct AttachedState<Src, M> {
    transformation: Transformation<Src, ObservableList<M>>,
    items_reg: Registration,
}

/// Keeps an external target sequence of companion representations in
/// one-to-one, order-preserving correspondence with a transformed source.
///
/// On `attach`, the synchronizer builds a fresh intermediate item list,
/// starts the transformer into it, constructs a companion per item and
/// inserts its representation into the target. From then on, item-added
/// and item-removed events of the intermediate list drive companion
/// construction and destruction at the event index. `detach` tears all of
/// it down and leaves the target empty.
pub struct RoleSynchronizer<Src, M, R, X, F, K>
where
    F: CompanionFactory<M, R>,
{
    source: Src,
    transformer: X,
    factory: Rc<F>,
    target: Rc<RefCell<K>>,
    companions: Rc<RefCell<Vec<F::Companion>>>,
    attached: Option<AttachedState<Src, M>>,
    _marker: PhantomData<R>,
}

impl<Src, M, R, X, F, K> RoleSynchronizer<Src, M, R, X, F, K>
where
    Src: Clone + 'static,
    M: Clone + 'static,
    R: 'static,
    X: Transformer<Src, ObservableList<M>>,
    F: CompanionFactory<M, R> + 'static,
    F::Companion: 'static,
    K: TargetSink<R> + 'static,
{
    /// Creates a detached synchronizer.
    ///
    /// Nothing is constructed or subscribed until `attach`.
    pub fn new(source: Src, transformer: X, factory: F, target: K) -> Self {
        Self {
            source,
            transformer,
            factory: Rc::new(factory),
            target: Rc::new(RefCell::new(target)),
            companions: Rc::new(RefCell::new(Vec::new())),
            attached: None,
            _marker: PhantomData,
        }
    }

    /// Returns true while attached.
    #[inline]
    pub fn is_attached(&self) -> bool {
        self.attached.is_some()
    }

    /// Returns the number of live companions.
    #[inline]
    pub fn companion_count(&self) -> usize {
        self.companions.borrow().len()
    }

    /// Returns the source this synchronizer reads from.
    #[inline]
    pub fn source(&self) -> &Src {
        &self.source
    }

    /// Starts synchronizing: initial full pass, then incremental updates.
    ///
    /// Fails with `Error::AlreadyAttached` on an attached synchronizer.
    pub fn attach(&mut self) -> Result<()> {
        if self.attached.is_some() {
            return Err(Error::AlreadyAttached);
        }

        let items: ObservableList<M> = ObservableList::new();
        let transformation = self
            .transformer
            .transform_into(self.source.clone(), items.clone());

        // Initial pass over the transformed item sequence.
        for item in items.iter() {
            let index = self.companions.borrow().len();
            let companion = self.factory.create(&item);
            self.target
                .borrow_mut()
                .insert(index, companion.representation());
            self.companions.borrow_mut().push(companion);
            // Post-insertion hook, with the companion already in place.
            if let Some(companion) = self.companions.borrow_mut().get_mut(index) {
                companion.attached();
            }
        }

        let factory = self.factory.clone();
        let target = self.target.clone();
        let companions = self.companions.clone();
        let items_reg = items.add_handler(Box::new(move |event: &CollectionItemEvent<M>| {
            match event.kind {
                EventKind::Add => {
                    let companion = factory.create(&event.item);
                    target
                        .borrow_mut()
                        .insert(event.index, companion.representation());
                    companions.borrow_mut().insert(event.index, companion);
                    if let Some(companion) = companions.borrow_mut().get_mut(event.index) {
                        companion.attached();
                    }
                }
                EventKind::Remove => {
                    let mut companion = companions.borrow_mut().remove(event.index);
                    target.borrow_mut().remove(event.index);
                    companion.detached();
                }
            }
        }));

        self.attached = Some(AttachedState {
            transformation,
            items_reg,
        });
        Ok(())
    }

    /// Stops synchronizing: unsubscribes, disposes the transformation, and
    /// removes every representation from the target (back to front).
    ///
    /// Fails with `Error::NotAttached` on a detached synchronizer.
    pub fn detach(&mut self) -> Result<()> {
        let mut state = self.attached.take().ok_or(Error::NotAttached)?;
        state.items_reg.dispose();
        state.transformation.dispose();

        loop {
            let index = {
                let companions = self.companions.borrow();
                if companions.is_empty() {
                    break;
                }
                companions.len() - 1
            };
            let mut companion = self.companions.borrow_mut().remove(index);
            self.target.borrow_mut().remove(index);
            companion.detached();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::String;
    use alloc::vec;
    use weft_property::{constant, Property};
    use weft_transform::filter;

    struct Label {
        text: String,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Companion<String> for Label {
        fn representation(&self) -> String {
            self.text.clone()
        }

        fn attached(&mut self) {
            self.log.borrow_mut().push(format!("+{}", self.text));
        }

        fn detached(&mut self) {
            self.log.borrow_mut().push(format!("-{}", self.text));
        }
    }

    fn label_factory(
        log: &Rc<RefCell<Vec<String>>>,
    ) -> impl Fn(&&'static str) -> Label + 'static {
        let log = log.clone();
        move |item: &&'static str| Label {
            text: String::from(*item),
            log: log.clone(),
        }
    }

    #[test]
    fn test_attach_runs_initial_pass_in_order() {
        let source: ObservableList<&str> = ObservableList::new();
        source.add("a");
        source.add("b");

        let rendered: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::new(RefCell::new(Vec::new()));

        let mut sync = RoleSynchronizer::new(
            source,
            filter(|_: &&str| constant(true)),
            label_factory(&log),
            rendered.clone(),
        );

        assert!(!sync.is_attached());
        sync.attach().unwrap();

        assert!(sync.is_attached());
        assert_eq!(sync.companion_count(), 2);
        assert_eq!(*rendered.borrow(), vec!["a", "b"]);
        assert_eq!(*log.borrow(), vec!["+a", "+b"]);
    }

    #[test]
    fn test_source_mutations_drive_companions() {
        let source: ObservableList<&str> = ObservableList::new();
        source.add("a");
        source.add("b");

        let rendered: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::new(RefCell::new(Vec::new()));

        let mut sync = RoleSynchronizer::new(
            source.clone(),
            filter(|_: &&str| constant(true)),
            label_factory(&log),
            rendered.clone(),
        );
        sync.attach().unwrap();

        source.insert(1, "c");
        assert_eq!(*rendered.borrow(), vec!["a", "c", "b"]);
        assert_eq!(sync.companion_count(), 3);

        source.remove_at(0);
        assert_eq!(*rendered.borrow(), vec!["c", "b"]);
        assert_eq!(sync.companion_count(), 2);

        assert_eq!(*log.borrow(), vec!["+a", "+b", "+c", "-a"]);
    }

    #[test]
    fn test_predicate_flips_construct_and_destroy_companions() {
        let gate = Property::new(true);

        let source: ObservableList<&str> = ObservableList::new();
        source.add("a");
        source.add("b");

        let rendered: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::new(RefCell::new(Vec::new()));

        let g = gate.clone();
        let mut sync = RoleSynchronizer::new(
            source,
            filter(move |_: &&str| g.clone()),
            label_factory(&log),
            rendered.clone(),
        );
        sync.attach().unwrap();
        assert_eq!(*rendered.borrow(), vec!["a", "b"]);

        // One mutation, every companion destroyed before set returns.
        gate.set(false);
        assert!(rendered.borrow().is_empty());
        assert_eq!(sync.companion_count(), 0);

        gate.set(true);
        assert_eq!(*rendered.borrow(), vec!["a", "b"]);
        assert_eq!(sync.companion_count(), 2);
    }

    #[test]
    fn test_detach_clears_target_back_to_front() {
        let source: ObservableList<&str> = ObservableList::new();
        source.add("a");
        source.add("b");

        let rendered: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::new(RefCell::new(Vec::new()));

        let mut sync = RoleSynchronizer::new(
            source.clone(),
            filter(|_: &&str| constant(true)),
            label_factory(&log),
            rendered.clone(),
        );
        sync.attach().unwrap();
        sync.detach().unwrap();

        assert!(!sync.is_attached());
        assert!(rendered.borrow().is_empty());
        assert_eq!(sync.companion_count(), 0);
        assert_eq!(*log.borrow(), vec!["+a", "+b", "-b", "-a"]);

        // Detached: further source mutations produce no companion activity.
        source.add("c");
        assert!(rendered.borrow().is_empty());
        assert_eq!(log.borrow().len(), 4);
    }

    #[test]
    fn test_lifecycle_errors() {
        let source: ObservableList<&str> = ObservableList::new();
        let rendered: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::new(RefCell::new(Vec::new()));

        let mut sync = RoleSynchronizer::new(
            source,
            filter(|_: &&str| constant(true)),
            label_factory(&log),
            rendered,
        );

        assert_eq!(sync.detach(), Err(Error::NotAttached));

        sync.attach().unwrap();
        assert_eq!(sync.attach(), Err(Error::AlreadyAttached));

        sync.detach().unwrap();
        assert_eq!(sync.detach(), Err(Error::NotAttached));
    }

    #[test]
    fn test_reattach_after_detach() {
        let source: ObservableList<&str> = ObservableList::new();
        source.add("a");

        let rendered: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::new(RefCell::new(Vec::new()));

        let mut sync = RoleSynchronizer::new(
            source.clone(),
            filter(|_: &&str| constant(true)),
            label_factory(&log),
            rendered.clone(),
        );

        sync.attach().unwrap();
        sync.detach().unwrap();
        sync.attach().unwrap();

        source.add("b");
        assert_eq!(*rendered.borrow(), vec!["a", "b"]);
        assert_eq!(*log.borrow(), vec!["+a", "-a", "+a", "+b"]);
    }

    #[test]
    fn test_observable_list_as_sink() {
        let source: ObservableList<&str> = ObservableList::new();
        source.add("a");

        let rendered: ObservableList<String> = ObservableList::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let mut sync = RoleSynchronizer::new(
            source.clone(),
            filter(|_: &&str| constant(true)),
            label_factory(&log),
            rendered.clone(),
        );
        sync.attach().unwrap();

        source.add("b");
        assert_eq!(rendered.to_vec(), vec![String::from("a"), String::from("b")]);
    }
}
