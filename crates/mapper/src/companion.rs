//! Companion objects and their factories.

/// An object constructed per surviving source item by a role synchronizer.
///
/// A companion (a child view-model, typically) owns an externally-visible
/// representation of type `R` that the synchronizer places into the target
/// sequence. The lifecycle hooks default to no-ops; the synchronizer calls
/// `attached` right after insertion and `detached` right before the
/// companion is dropped.
pub trait Companion<R> {
    /// Returns the target representation this companion owns.
    fn representation(&self) -> R;

    /// Post-insertion hook.
    fn attached(&mut self) {}

    /// Pre-drop hook.
    fn detached(&mut self) {}
}

/// Produces a companion for a source item.
///
/// Invoked synchronously during admission. Implemented for plain closures
/// returning a companion.
pub trait CompanionFactory<S, R> {
    /// The concrete companion type this factory builds.
    type Companion: Companion<R>;

    /// Builds the companion for `item`.
    fn create(&self, item: &S) -> Self::Companion;
}

impl<S, R, C, F> CompanionFactory<S, R> for F
where
    C: Companion<R>,
    F: Fn(&S) -> C,
{
    type Companion = C;

    fn create(&self, item: &S) -> C {
        self(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Chip(i32);

    impl Companion<i32> for Chip {
        fn representation(&self) -> i32 {
            self.0
        }
    }

    #[test]
    fn test_closure_is_a_factory() {
        let factory = |item: &i32| Chip(item * 10);
        let companion = factory.create(&4);
        assert_eq!(companion.representation(), 40);
    }

    #[test]
    fn test_default_hooks_are_noops() {
        let mut chip = Chip(1);
        chip.attached();
        chip.detached();
        assert_eq!(chip.representation(), 1);
    }
}
