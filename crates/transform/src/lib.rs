//! Weft Transform - live collection transformers for the weft model.
//!
//! A transformer produces and maintains a derived observable collection
//! from a source observable collection. The derived collection is kept in
//! sync incrementally: structural changes of the source and changes of the
//! per-item inclusion properties patch the target in place, never by
//! recomputing it from scratch.
//!
//! # Core Concepts
//!
//! - `Transformer`: factory for live transforms (`transform` /
//!   `transform_into`)
//! - `Transformation`: the live handle owning every subscription a
//!   transform created; disposal tears them all down (idempotently)
//! - `filter`: keeps the target equal to the subsequence of source items
//!   whose observable inclusion value is currently true
//! - `map`: keeps the target equal to the source mapped through a function
//! - `Included`: conversion of inclusion values (`bool`, `Option<bool>`)
//!   to a yes/no decision; an absent value means excluded
//!
//! # Example
//!
//! ```ignore
//! use weft_collections::ObservableList;
//! use weft_property::constant;
//! use weft_transform::{filter, Transformer};
//!
//! let source: ObservableList<&str> = ObservableList::new();
//! source.add("a");
//! source.add("aa");
//!
//! let even_length = filter(|s: &&str| constant(s.len() % 2 == 0));
//! let transformation = even_length.transform(source.clone());
//! assert_eq!(transformation.target().to_vec(), vec!["aa"]);
//!
//! source.add("bbbb"); // target follows along: ["aa", "bbbb"]
//! ```

#![no_std]

extern crate alloc;

pub mod filter;
pub mod map;
pub mod traits;
pub mod transformation;

pub use filter::{filter, FilterTransformer};
pub use map::{map, MapTransformer};
pub use traits::{Included, Transformer};
pub use transformation::Transformation;
