//! Weft Property - observable values for the weft model.
//!
//! This crate implements the value half of the reactive model: mutable
//! observable cells, constants, and derived values that recompute from
//! their dependencies and suppress change events when the recomputed value
//! is unchanged.
//!
//! # Core Concepts
//!
//! - `Property<T>`: a mutable cell that notifies listeners on actual change
//! - `Constant<T>`: a readable value that never changes
//! - `DerivedProperty<T>`: a read-only value computed from other observable
//!   values, subscribed to its dependencies only while listened to
//! - `ReadableProperty<T>`: the object-safe read + listen trait all of the
//!   above implement
//! - `Watchable`: type-erased "tell me when anything changed" handle used
//!   to declare dependencies of mixed value types
//!
//! # Example
//!
//! ```ignore
//! use weft_property::{DerivedProperty, Property, ReadableProperty};
//!
//! let name = Property::new(String::from("xyz"));
//! let len = DerivedProperty::new(vec![name.as_dependency()], {
//!     let name = name.clone();
//!     move || name.get().len()
//! });
//!
//! assert_eq!(len.get(), 3);
//! name.set(String::from("abc")); // same length: no change event fires
//! ```

#![no_std]

extern crate alloc;

pub mod constant;
pub mod derived;
pub mod event;
pub mod traits;
pub mod value;

pub use constant::{constant, Constant};
pub use derived::DerivedProperty;
pub use event::PropertyChangeEvent;
pub use traits::{ChangeHandler, ReadableProperty, ValueListener, Watchable};
pub use value::Property;
