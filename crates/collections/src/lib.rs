//! Weft Collections - observable collections for the weft model.
//!
//! This crate implements the structural half of the reactive model:
//! containers that emit item-added / item-removed events as they mutate,
//! which is what the live transformers and synchronizers feed on.
//!
//! # Core Concepts
//!
//! - `CollectionItemEvent<T>`: a structural change (kind, index, item)
//! - `CollectionListener<T>`: the fixed listener capability set with no-op
//!   defaults, so behaviours implement only what they need
//! - `ObservableList<T>`: ordered container with index-carrying events
//! - `ObservableHashSet<T>`: unordered unique container with index-less
//!   events and silent duplicate rejection
//! - `wrappers::ObservableSetWrapper`: a two-way mapped view over a set
//!
//! # Example
//!
//! ```ignore
//! use weft_collections::ObservableList;
//!
//! let list: ObservableList<&str> = ObservableList::new();
//! let _reg = list.add_handler(Box::new(|event| {
//!     println!("{:?} {} at {}", event.kind, event.item, event.index);
//! }));
//!
//! list.add("a");            // Add "a" at 0
//! list.insert(0, "b");      // Add "b" at 0
//! list.remove_at(1);        // Remove "a" at 1
//! ```

#![no_std]

extern crate alloc;

pub mod event;
pub mod list;
pub mod set;
pub mod wrappers;

pub use event::{CollectionItemEvent, CollectionListener, EventKind, ItemHandler};
pub use list::ObservableList;
pub use set::ObservableHashSet;
pub use wrappers::ObservableSetWrapper;
