//! Transformer and inclusion traits.

use crate::transformation::Transformation;

/// Conversion of an observable inclusion value to a yes/no decision.
///
/// An absent value (`None`) means excluded; it is a defined data case, not
/// an error.
pub trait Included {
    /// Returns true if the value admits the item.
    fn included(&self) -> bool;
}

impl Included for bool {
    #[inline]
    fn included(&self) -> bool {
        *self
    }
}

impl Included for Option<bool> {
    #[inline]
    fn included(&self) -> bool {
        self.unwrap_or(false)
    }
}

/// A factory for live transforms.
///
/// A transformer is stateless and reusable: each `transform` call creates
/// an independent live `Transformation` maintaining its own target.
pub trait Transformer<Source, Target> {
    /// Starts maintaining `target` as the transform of `source`.
    ///
    /// The target is expected to start empty; the initial synchronization
    /// pass appends to it. Returns the live handle owning every
    /// subscription this call created.
    fn transform_into(&self, source: Source, target: Target) -> Transformation<Source, Target>;

    /// Starts a transform into a fresh target.
    fn transform(&self, source: Source) -> Transformation<Source, Target>
    where
        Target: Default,
    {
        self.transform_into(source, Target::default())
    }
}
