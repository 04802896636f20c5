//! Bounded set of the largest distinct values seen so far.
//!
//! Values are kept in descending order so the current minimum is always the
//! last slot:
//!
//! - a full set rejects anything not above its minimum in O(1);
//! - admission binary-searches for the slot in O(log K) and shifts in O(K);
//! - the backing storage is reserved once and never grows.
//!
//! Iteration runs from the tail, yielding values in ascending order.

use std::iter::Rev;
use std::slice;

use tracing::trace;

use crate::error::{Error, Result};
use crate::number::EncodedNumber;

/// Keeps the `capacity` largest distinct values added to it.
///
/// The set owns everything passed to [`add`](Self::add). Rejected and
/// evicted values are dropped on the spot, which releases any storage they
/// hold; the remaining ones are dropped with the set.
///
/// # Example
///
/// ```rust
/// use topdigits::BoundedTopKSet;
///
/// let mut set = BoundedTopKSet::new(3).unwrap();
/// for n in [5u32, 3, 9, 1, 7, 2] {
///     set.add(n);
/// }
///
/// let top: Vec<u32> = set.iter().copied().collect();
/// assert_eq!(top, vec![5, 7, 9]);
/// ```
#[derive(Debug)]
pub struct BoundedTopKSet<T = EncodedNumber> {
    /// Descending, no two elements equal, `len() <= capacity`.
    items: Vec<T>,
    capacity: usize,
}

impl<T: Ord> BoundedTopKSet<T> {
    /// Create an empty set holding at most `capacity` values.
    ///
    /// # Errors
    ///
    /// - `InvalidCapacity` if `capacity` is zero.
    /// - `OutOfMemory` if storage for `capacity` values cannot be reserved.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity);
        }

        let mut items = Vec::new();
        items.try_reserve_exact(capacity)?;

        Ok(Self { items, capacity })
    }

    /// Offer `value` to the set, taking ownership of it.
    ///
    /// The value is kept if it is larger than some resident value (or the
    /// set has room) and no resident value is equal to it. When a full set
    /// admits a value its minimum is evicted. A value that is not kept is
    /// dropped before returning.
    pub fn add(&mut self, value: T) {
        if self.is_full() && self.items.last().is_some_and(|min| value <= *min) {
            trace!("rejected: not above the minimum");
            return;
        }

        // Descending storage, so the probe ordering is reversed.
        let index = match self.items.binary_search_by(|probe| value.cmp(probe)) {
            Ok(_) => {
                trace!("rejected: duplicate");
                return;
            }
            Err(index) => index,
        };

        if self.is_full() {
            self.items.pop();
            trace!(index, "evicted minimum");
        }

        debug_assert!(self.items.len() < self.capacity);
        self.items.insert(index, value);
    }

    /// Smallest resident value.
    pub fn min(&self) -> Option<&T> {
        self.items.last()
    }

    /// Largest resident value.
    pub fn max(&self) -> Option<&T> {
        self.items.first()
    }

    /// Whether `value` is equal to a resident value.
    pub fn contains(&self, value: &T) -> bool {
        self.items
            .binary_search_by(|probe| value.cmp(probe))
            .is_ok()
    }
}

impl<T> BoundedTopKSet<T> {
    /// Values in ascending order. The set stays their owner.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.items.iter().rev(),
        }
    }

    /// Number of resident values.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no value has been admitted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maximum number of resident values.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the next admission evicts the minimum.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Consume the set, returning its values in ascending order.
    pub fn into_ascending_vec(mut self) -> Vec<T> {
        self.items.reverse();
        self.items
    }
}

/// Ascending iterator over a [`BoundedTopKSet`].
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    inner: Rev<slice::Iter<'a, T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a BoundedTopKSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascending<T: Copy>(set: &BoundedTopKSet<T>) -> Vec<T> {
        set.iter().copied().collect()
    }

    fn num(text: &str) -> EncodedNumber {
        text.parse().unwrap()
    }

    #[test]
    fn test_zero_capacity() {
        assert!(matches!(
            BoundedTopKSet::<u32>::new(0),
            Err(Error::InvalidCapacity)
        ));
    }

    #[test]
    fn test_keeps_largest() {
        let mut set = BoundedTopKSet::new(3).unwrap();
        for n in [5u32, 3, 9, 1, 7, 2] {
            set.add(n);
        }

        assert_eq!(ascending(&set), vec![5, 7, 9]);
        assert_eq!(set.min(), Some(&5));
        assert_eq!(set.max(), Some(&9));
        assert!(set.is_full());
    }

    #[test]
    fn test_partial_fill() {
        let mut set = BoundedTopKSet::new(10).unwrap();
        for n in [4u32, 8, 1] {
            set.add(n);
        }

        assert_eq!(ascending(&set), vec![1, 4, 8]);
        assert_eq!(set.len(), 3);
        assert!(!set.is_full());
        assert_eq!(set.capacity(), 10);
    }

    #[test]
    fn test_deduplicates() {
        let mut set = BoundedTopKSet::new(5).unwrap();
        for n in [3u32, 3, 1, 3, 1] {
            set.add(n);
        }

        assert_eq!(ascending(&set), vec![1, 3]);
    }

    #[test]
    fn test_rejects_minimum_duplicate_when_full() {
        let mut set = BoundedTopKSet::new(2).unwrap();
        set.add(4u32);
        set.add(6);
        set.add(4);
        set.add(2);

        assert_eq!(ascending(&set), vec![4, 6]);
    }

    #[test]
    fn test_capacity_one() {
        let mut set = BoundedTopKSet::new(1).unwrap();
        for text in ["0", "00", "5"] {
            set.add(num(text));
        }

        let out: Vec<String> = set.iter().map(ToString::to_string).collect();
        assert_eq!(out, vec!["5"]);
    }

    #[test]
    fn test_first_padding_wins() {
        let mut set = BoundedTopKSet::new(2).unwrap();
        for text in ["007", "7", "07"] {
            set.add(num(text));
        }

        let out: Vec<String> = set.iter().map(ToString::to_string).collect();
        assert_eq!(out, vec!["007"]);
    }

    #[test]
    fn test_iteration_is_restartable() {
        let mut set = BoundedTopKSet::new(4).unwrap();
        for n in [10u32, 30, 20] {
            set.add(n);
        }

        assert_eq!(ascending(&set), ascending(&set));
        assert_eq!(set.iter().len(), 3);
        assert_eq!(set.iter().rev().copied().collect::<Vec<_>>(), vec![30, 20, 10]);

        let mut seen = Vec::new();
        for n in &set {
            seen.push(*n);
        }
        assert_eq!(seen, vec![10, 20, 30]);
    }

    #[test]
    fn test_contains() {
        let mut set = BoundedTopKSet::new(3).unwrap();
        set.add(num("12"));
        set.add(num("400"));

        assert!(set.contains(&num("0012")));
        assert!(!set.contains(&num("13")));
    }

    #[test]
    fn test_into_ascending_vec() {
        let mut set = BoundedTopKSet::new(3).unwrap();
        for n in [2u32, 9, 4, 6] {
            set.add(n);
        }

        assert_eq!(set.into_ascending_vec(), vec![4, 6, 9]);
    }

    #[test]
    fn test_storage_never_grows() {
        let mut set = BoundedTopKSet::new(8).unwrap();
        let reserved = set.items.capacity();
        for n in 0u32..1000 {
            set.add(n.wrapping_mul(2_654_435_761) % 997);
        }

        assert_eq!(set.len(), 8);
        assert_eq!(set.items.capacity(), reserved);
    }
}
