//! Weft Event - registrations and listener lists for the weft model.
//!
//! This crate is the subscription layer everything else in weft builds on.
//! It knows nothing about values or collections; it only manages who is
//! listening and how a listener stops listening.
//!
//! # Core Concepts
//!
//! - `Registration`: a single-shot disposer returned by every subscription;
//!   disposing it guarantees no further notifications
//! - `Listeners<E>`: an ordered listener list that is safe to mutate from
//!   inside a notification (reentrancy-safe firing)
//!
//! # Example
//!
//! ```ignore
//! use weft_event::Listeners;
//!
//! let listeners: Listeners<i32> = Listeners::new();
//! let mut reg = listeners.add(|event| println!("got {event}"));
//!
//! listeners.fire(&1); // prints "got 1"
//! reg.dispose();
//! listeners.fire(&2); // nothing
//! ```

#![no_std]

extern crate alloc;

pub mod listeners;
pub mod registration;

pub use listeners::Listeners;
pub use registration::Registration;
