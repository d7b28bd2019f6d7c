//! Structural checks used by debug assertions and tests.

use crate::comparator::Comparator;
use crate::data_structures::heap::{is_heap_slice, Polarity};

/// Defines invariants over algorithm outputs
pub trait Invariant<T: ?Sized> {
    /// Checks if a value satisfies the invariant
    fn check(&self, value: &T) -> bool;
}

/// Slice is non-decreasing under the comparator.
pub struct SortedBy<C>(pub C);

impl<T, C: Comparator<T>> Invariant<[T]> for SortedBy<C> {
    fn check(&self, value: &[T]) -> bool {
        value.windows(2).all(|w| !self.0.greater_than(&w[0], &w[1]))
    }
}

/// Slice satisfies the heap property for the given polarity.
pub struct HeapOrdered<C> {
    pub polarity: Polarity,
    pub comparator: C,
}

impl<T, C: Comparator<T>> Invariant<[T]> for HeapOrdered<C> {
    fn check(&self, value: &[T]) -> bool {
        is_heap_slice(value, self.polarity, &self.comparator)
    }
}
