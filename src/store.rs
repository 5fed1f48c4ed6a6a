use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::Error;

/// The physically allocated buffer underlying one or more [`View`]s.
///
/// A store is a fixed block of `capacity` slots shared, read/write, by every
/// view that references it. It never resizes: growth always allocates a new
/// store and leaves the old one behind for whichever views still point at it.
/// The last referencing view to drop reclaims the allocation.
///
/// Slots start out holding `T::default()`. Which slots are logically in use
/// is tracked by the views, not the store.
///
/// [`View`]: crate::View
pub struct BackingStore<T> {
    slots: RefCell<Box<[T]>>,
}

impl<T> BackingStore<T> {
    /// Allocates a store with `capacity` slots, all logically unused.
    pub fn allocate(capacity: usize) -> Rc<Self>
    where
        T: Default,
    {
        let slots = (0..capacity).map(|_| T::default()).collect();
        Rc::new(BackingStore {
            slots: RefCell::new(slots),
        })
    }

    /// The number of slots this store was allocated with.
    pub fn capacity(&self) -> usize {
        self.slots.borrow().len()
    }

    /// Writes one slot. Fails with [`Error::OutOfBounds`] past the capacity.
    pub fn write(&self, index: usize, value: T) -> Result<(), Error> {
        let mut slots = self.slots.borrow_mut();
        if index >= slots.len() {
            return Err(Error::OutOfBounds {
                index,
                limit: slots.len(),
            });
        }
        slots[index] = value;
        Ok(())
    }

    /// Reads one slot. Fails with [`Error::OutOfBounds`] past the capacity.
    pub fn read(&self, index: usize) -> Result<T, Error>
    where
        T: Clone,
    {
        let slots = self.slots.borrow();
        slots.get(index).cloned().ok_or(Error::OutOfBounds {
            index,
            limit: slots.len(),
        })
    }

    // Bulk operations for the append and copy paths. Callers guarantee the
    // ranges are within capacity.

    pub(crate) fn fill_from(&self, start: usize, values: &[T])
    where
        T: Clone,
    {
        self.slots.borrow_mut()[start..start + values.len()].clone_from_slice(values);
    }

    pub(crate) fn clone_range(&self, start: usize, len: usize) -> Vec<T>
    where
        T: Clone,
    {
        self.slots.borrow()[start..start + len].to_vec()
    }

    pub(crate) fn with_range<R>(&self, start: usize, len: usize, f: impl FnOnce(&[T]) -> R) -> R {
        f(&self.slots.borrow()[start..start + len])
    }
}

impl<T> fmt::Debug for BackingStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackingStore")
            .field("capacity", &self.capacity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::BackingStore;
    use crate::error::Error;

    #[test]
    fn allocate_and_rw() {
        let store = BackingStore::allocate(3);
        assert_eq!(store.capacity(), 3);

        store.write(0, 7u32).unwrap();
        store.write(2, 9).unwrap();
        assert_eq!(store.read(0).unwrap(), 7);
        assert_eq!(store.read(1).unwrap(), 0);
        assert_eq!(store.read(2).unwrap(), 9);
    }

    #[test]
    fn out_of_bounds() {
        let store = BackingStore::<u32>::allocate(2);
        assert_eq!(
            store.write(2, 1),
            Err(Error::OutOfBounds { index: 2, limit: 2 })
        );
        assert_eq!(
            store.read(5),
            Err(Error::OutOfBounds { index: 5, limit: 2 })
        );
    }

    #[test]
    fn zero_capacity() {
        let store = BackingStore::<u32>::allocate(0);
        assert_eq!(store.capacity(), 0);
        assert!(store.write(0, 1).is_err());
    }
}
