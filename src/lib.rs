//! Growable storage observed through lightweight views.
//!
//! A [`BackingStore`] is a fixed block of slots; a [`View`] is a cheap
//! `(store, offset, length)` window into one. Any number of views can share
//! a store, and that sharing is the whole point: writes through one view are
//! read back through every view whose range overlaps. The rules for when
//! that aliasing holds and when an operation silently severs it are the
//! contract of this crate.
//!
//! ```
//! use view_buffer::View;
//!
//! let pets = View::from_slice(&["cat", "dog"]);
//!
//! // No room left, so the append reallocates: the result is detached.
//! let pets = pets.append(&["bear", "owl"]).into_view();
//!
//! // Cloning a view shares its store...
//! let shared = pets.clone();
//! pets.set(0, "charmander").unwrap();
//! assert_eq!(shared.get(0).unwrap(), "charmander");
//!
//! // ...only clone_buffer copies onto independent storage.
//! let isolated = pets.clone_buffer();
//! pets.set(0, "cat").unwrap();
//! assert_eq!(isolated.get(0).unwrap(), "charmander");
//! ```
//!
//! # Appending
//!
//! [`View::append`] never mutates the view it is called on; it returns a new
//! view, tagged [`Append::InPlace`] or [`Append::Reallocated`]. In the
//! in-place case the new elements land on the *shared* store, where other
//! views may observe them; in the reallocated case the result moves to a
//! fresh store sized by an amortized growth policy ([`grow_amortized`]) and
//! stops aliasing everything else. Both behaviors are deliberate and
//! documented rather than smoothed over — callers who need isolation take a
//! [`View::clone_buffer`] first.
//!
//! # Nil versus empty
//!
//! A view without a store (the *nil* view, [`View::new`]) and a zero-length
//! view over allocated capacity are distinguishable via [`View::is_nil`],
//! but behave identically everywhere length decides: both are
//! [`is_empty`](View::is_empty), both append by allocating as needed.
//! Check `is_empty` unless you specifically care about storage presence.
//!
//! # Threading
//!
//! Single-threaded by construction: stores are `Rc`-shared with interior
//! mutability, so views are neither `Send` nor `Sync`. A concurrent port
//! would have to lock every in-place mutation path; two threads appending
//! in place to an aliased store is a data race by construction.

mod append;
mod error;
mod grow;
mod store;
mod view;

pub use append::Append;
pub use error::Error;
pub use grow::grow_amortized;
pub use store::BackingStore;
pub use view::{Iter, View};
