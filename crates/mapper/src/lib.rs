//! Weft Mapper - collection role synchronization for the weft model.
//!
//! This crate generalizes the live transformers of `weft-transform`: where
//! a transformer maintains a derived collection of items, a role
//! synchronizer maintains a parallel sequence of constructed companion
//! objects (child view-models, typically), each owning an
//! externally-visible representation that is kept at the matching index of
//! an externally-owned target sequence.
//!
//! # Core Concepts
//!
//! - `Companion`: an object constructed per surviving source item, owning
//!   a target representation and attach/detach lifecycle hooks
//! - `CompanionFactory`: builds a companion for a source item (closures
//!   qualify)
//! - `TargetSink`: the externally-owned ordered sequence representations
//!   are inserted into and removed from by index
//! - `RoleSynchronizer`: the attach/detach-scoped engine tying the three
//!   together on top of a transformer
//! - `animation`: the run-to-completion contract platform effects are
//!   consumed through
//!
//! # Example
//!
//! ```ignore
//! use weft_mapper::RoleSynchronizer;
//! use weft_transform::filter;
//! use weft_property::constant;
//!
//! let mut sync = RoleSynchronizer::new(
//!     items,                                  // ObservableList<Item>
//!     filter(|item: &Item| constant(true)),   // which items survive
//!     |item: &Item| ItemView::new(item),      // companion per item
//!     rendered,                               // external target sequence
//! );
//! sync.attach()?;
//! // ... source mutations now drive ItemView construction/destruction
//! sync.detach()?;
//! ```

#![no_std]

extern crate alloc;

pub mod animation;
pub mod companion;
pub mod error;
pub mod sink;
pub mod synchronizer;

pub use animation::{from_fn, Animation, ImmediateAnimation};
pub use companion::{Companion, CompanionFactory};
pub use error::{Error, Result};
pub use sink::TargetSink;
pub use synchronizer::RoleSynchronizer;
