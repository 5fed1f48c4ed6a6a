use std::rc::Rc;

use crate::grow::grow_amortized;
use crate::store::BackingStore;
use crate::view::View;

/// Outcome of [`View::append`].
///
/// Which variant comes back is part of the contract, not an allocator
/// accident: callers (and tests) can tell whether an append mutated shared
/// storage or detached onto a fresh store.
#[derive(Debug, Clone)]
pub enum Append<T> {
    /// The elements were written in place on the existing store. The write
    /// is visible through every other view over those slots.
    InPlace(View<T>),
    /// The store had no room after the view's offset; the result lives on a
    /// freshly allocated store and no longer aliases anything.
    Reallocated(View<T>),
}

impl<T> Append<T> {
    /// The resulting view, dropping the branch tag.
    pub fn into_view(self) -> View<T> {
        match self {
            Append::InPlace(view) | Append::Reallocated(view) => view,
        }
    }

    pub fn view(&self) -> &View<T> {
        match self {
            Append::InPlace(view) | Append::Reallocated(view) => view,
        }
    }

    pub fn reallocated(&self) -> bool {
        matches!(self, Append::Reallocated(_))
    }
}

impl<T: Clone + Default> View<T> {
    /// Appends `values`, returning the resulting view tagged with how the
    /// write happened.
    ///
    /// If the store has room after this view's offset, the elements are
    /// written in place at `offset + len` and the result shares the store.
    /// Beware: those slots may sit inside ranges other views are watching —
    /// an in-place append is an observable mutation of shared state, and
    /// that is intentional. Callers wanting isolation must take a
    /// [`clone_buffer`] first.
    ///
    /// Without room, a new store is allocated via the growth policy, the
    /// view's logical contents are copied over and the result starts at
    /// offset zero on the new store. This is the detachment point: the old
    /// store is untouched and every view still on it is now fully decoupled
    /// from the result. A nil view always takes this branch.
    ///
    /// Appending nothing returns a view identical to `self` (same store,
    /// offset and length) without allocating.
    ///
    /// [`clone_buffer`]: View::clone_buffer
    pub fn append(&self, values: &[T]) -> Append<T> {
        if values.is_empty() {
            return Append::InPlace(self.clone());
        }
        let required = self.len.saturating_add(values.len());

        if let Some(store) = &self.store {
            if required <= store.capacity() - self.offset {
                store.fill_from(self.offset + self.len, values);
                return Append::InPlace(View {
                    store: Some(Rc::clone(store)),
                    offset: self.offset,
                    len: required,
                });
            }
        }

        let new_store = BackingStore::allocate(grow_amortized(self.capacity(), required));
        if let Some(src) = &self.store {
            new_store.fill_from(0, &src.clone_range(self.offset, self.len));
        }
        new_store.fill_from(self.len, values);
        Append::Reallocated(View {
            store: Some(new_store),
            offset: 0,
            len: required,
        })
    }

    /// Appends a single element, dropping the branch tag.
    pub fn push(&self, value: T) -> View<T> {
        self.append(std::slice::from_ref(&value)).into_view()
    }
}
