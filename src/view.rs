use std::fmt;
use std::rc::Rc;

use crate::error::Error;
use crate::store::BackingStore;

/// A bounded, non-owning window into a [`BackingStore`].
///
/// A view is an `(store, offset, length)` descriptor: cloning one is cheap
/// and shares the store rather than the contents. Two views whose ranges
/// overlap on the same store *alias*: an element written through one (via
/// [`set`] or an in-place [`append`]) is read back through the other. Only
/// [`clone_buffer`] and a reallocating append produce independent storage.
///
/// A view with no store at all is the *nil* variant, distinct from a view
/// over an allocated store with length zero. [`is_empty`] treats both as
/// empty and is the check callers should normally reach for; [`is_nil`]
/// answers the narrower presence question.
///
/// [`set`]: View::set
/// [`append`]: View::append
/// [`clone_buffer`]: View::clone_buffer
/// [`is_empty`]: View::is_empty
/// [`is_nil`]: View::is_nil
pub struct View<T> {
    pub(crate) store: Option<Rc<BackingStore<T>>>,
    pub(crate) offset: usize,
    pub(crate) len: usize,
}

impl<T> View<T> {
    /// The nil view: no store, offset and length zero.
    pub fn new() -> Self {
        View {
            store: None,
            offset: 0,
            len: 0,
        }
    }

    /// An empty view over a freshly allocated store of `capacity` slots.
    ///
    /// Preallocating avoids the reallocations (and the detachment they
    /// cause) of growing through repeated appends.
    pub fn with_capacity(capacity: usize) -> Self
    where
        T: Default,
    {
        View {
            store: Some(BackingStore::allocate(capacity)),
            offset: 0,
            len: 0,
        }
    }

    /// A view spanning the first `len` slots of `store`.
    ///
    /// Fails with [`Error::OutOfBounds`] if `len` exceeds the store's
    /// capacity.
    pub fn from_store(store: Rc<BackingStore<T>>, len: usize) -> Result<Self, Error> {
        if len > store.capacity() {
            return Err(Error::OutOfBounds {
                index: len,
                limit: store.capacity(),
            });
        }
        Ok(View {
            store: Some(store),
            offset: 0,
            len,
        })
    }

    /// A view over a new store sized and filled from `values`.
    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone + Default,
    {
        let store = BackingStore::allocate(values.len());
        store.fill_from(0, values);
        View {
            store: Some(store),
            offset: 0,
            len: values.len(),
        }
    }

    /// A narrower window `start..end` into the same store.
    ///
    /// The result aliases `self` wherever the ranges overlap. Fails with
    /// [`Error::Range`] if `start > end` or `end` exceeds this view's
    /// length.
    pub fn subview(&self, start: usize, end: usize) -> Result<Self, Error> {
        if start > end || end > self.len {
            return Err(Error::Range {
                start,
                end,
                len: self.len,
            });
        }
        Ok(View {
            store: self.store.clone(),
            offset: self.offset + start,
            len: end - start,
        })
    }

    /// Whether this view references no store at all.
    ///
    /// Rarely what you want: a nil view and an empty allocated view behave
    /// identically under every length-based operation. Use [`is_empty`]
    /// unless the presence of storage itself is the question.
    ///
    /// [`is_empty`]: View::is_empty
    pub fn is_nil(&self) -> bool {
        self.store.is_none()
    }

    /// Whether the view's logical length is zero. True for nil views too.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of elements visible through this view.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Where this view starts within its store.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The capacity of the referenced store, or zero for a nil view.
    pub fn capacity(&self) -> usize {
        self.store.as_ref().map_or(0, |s| s.capacity())
    }

    /// Slots left between the end of this view and the end of the store,
    /// i.e. how many elements an append can take without reallocating.
    pub fn remaining_capacity(&self) -> usize {
        self.capacity() - self.offset - self.len
    }

    /// The referenced store, if any.
    pub fn store(&self) -> Option<&Rc<BackingStore<T>>> {
        self.store.as_ref()
    }

    /// Whether both views reference the same store. Two nil views compare
    /// equal.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.store, &other.store) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    /// Whether the two views overlap on the same store, so that writing
    /// through one is observable through the other. Empty ranges never
    /// alias.
    pub fn aliases(&self, other: &Self) -> bool {
        match (&self.store, &other.store) {
            (Some(a), Some(b)) => {
                Rc::ptr_eq(a, b)
                    && self.offset < other.offset + other.len
                    && other.offset < self.offset + self.len
            }
            _ => false,
        }
    }

    /// Reads the element at `index`. Fails with [`Error::OutOfBounds`] at
    /// or past the view's length.
    pub fn get(&self, index: usize) -> Result<T, Error>
    where
        T: Clone,
    {
        match &self.store {
            Some(store) if index < self.len => store.read(self.offset + index),
            _ => Err(Error::OutOfBounds {
                index,
                limit: self.len,
            }),
        }
    }

    /// Writes the element at `index`, observable through every aliasing
    /// view. Fails with [`Error::OutOfBounds`] at or past the view's
    /// length.
    pub fn set(&self, index: usize, value: T) -> Result<(), Error> {
        match &self.store {
            Some(store) if index < self.len => store.write(self.offset + index, value),
            _ => Err(Error::OutOfBounds {
                index,
                limit: self.len,
            }),
        }
    }

    /// Iterates over clones of the view's elements.
    pub fn iter(&self) -> Iter<T> {
        Iter {
            view: self.clone(),
            index: 0,
        }
    }

    /// Copies the view's logical contents out into a `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        match &self.store {
            Some(store) => store.clone_range(self.offset, self.len),
            None => Vec::new(),
        }
    }

    /// Allocates an independent duplicate of this view's contents.
    ///
    /// The result sits at offset zero on a fresh store of capacity
    /// [`len`]; no aliasing exists between the two views afterwards, no
    /// matter what is appended to or written through either. Copying a nil
    /// view yields the empty allocated variant, not another nil view.
    ///
    /// [`len`]: View::len
    pub fn clone_buffer(&self) -> Self
    where
        T: Clone + Default,
    {
        let store = BackingStore::allocate(self.len);
        if let Some(src) = &self.store {
            store.fill_from(0, &src.clone_range(self.offset, self.len));
        }
        View {
            store: Some(store),
            offset: 0,
            len: self.len,
        }
    }
}

// Cloning copies the descriptor and shares the store; it does not need
// `T: Clone`.
impl<T> Clone for View<T> {
    fn clone(&self) -> Self {
        View {
            store: self.store.clone(),
            offset: self.offset,
            len: self.len,
        }
    }
}

impl<T> Default for View<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for View<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.store {
            Some(store) => store.with_range(self.offset, self.len, |slice| {
                f.debug_list().entries(slice).finish()
            }),
            None => f.debug_list().finish(),
        }
    }
}

impl<T: PartialEq> PartialEq for View<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        if self.ptr_eq(other) && self.offset == other.offset {
            return true;
        }
        match (&self.store, &other.store) {
            (Some(a), Some(b)) => a.with_range(self.offset, self.len, |x| {
                b.with_range(other.offset, other.len, |y| x == y)
            }),
            // Nil against empty-but-allocated: both hold no contents.
            _ => true,
        }
    }
}

impl<T: PartialEq> PartialEq<&[T]> for View<T> {
    fn eq(&self, other: &&[T]) -> bool {
        match &self.store {
            Some(store) => {
                self.len == other.len()
                    && store.with_range(self.offset, self.len, |slice| slice == *other)
            }
            None => other.is_empty(),
        }
    }
}

/// Cloning iterator over a view's elements.
pub struct Iter<T> {
    view: View<T>,
    index: usize,
}

impl<T: Clone> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.index >= self.view.len {
            return None;
        }
        let item = self.view.get(self.index).ok();
        self.index += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.view.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for Iter<T> {}

impl<T: Clone> IntoIterator for &View<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        self.iter()
    }
}
