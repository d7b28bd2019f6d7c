//! Indexable binary heap with a pluggable comparator and a min/max polarity.
//!
//! Variables:
//!   data     : Vec<T>    — heap array, 0-indexed
//!   N        : usize     — current size
//!   polarity : Polarity  — Min ranks by less_than, Max by greater_than
//!   ahead(a,b)           — heap-order relation selected by polarity
//!
//! Equations:
//!   parent(i)     = (i - 1) / 2
//!   left_child(i) = 2*i + 1
//!   right_child(i)= 2*i + 2
//!
//!   Heap invariant: !ahead(data[c], data[parent(c)])  for all 0 < c < N
//!
//!   insert(x):    data[N] = x, sift_up(N), N' = N+1                    O(log N)
//!   delete(i):    i >= N => no-op
//!                 swap(i, N-1), N' = N-1, sift_down(i) (sift_up(i))   O(log N)
//!   heapify():    sift_down(i)  for i = N/2 .. 0                       O(N)
//!   heapify_to_index(m): sift_down_bounded(i, m)  for i = m .. 0
//!
//! Ties: sift_up also swaps when data[i] == data[parent(i)], so equal keys
//! inserted later surface above earlier ones. sift_down only swaps on a strict
//! `ahead`, left child first.

use crate::comparator::{Comparator, NaturalOrder};
use crate::error::HeapError;

/// Which end of the order sits at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Polarity {
    Min,
    Max,
}

impl Polarity {
    /// The heap-order relation: `a` belongs strictly above `b`.
    #[inline]
    pub fn ahead<T: ?Sized, C: Comparator<T>>(self, cmp: &C, a: &T, b: &T) -> bool {
        match self {
            Polarity::Min => cmp.less_than(a, b),
            Polarity::Max => cmp.greater_than(a, b),
        }
    }
}

#[inline]
fn left(i: usize) -> usize {
    2 * i + 1
}

#[inline]
fn right(i: usize) -> usize {
    left(i) + 1
}

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}

/// Moves `data[i]` down until neither child within `[0, max_idx)` is ahead of it.
///
/// Indices at or past `max_idx` are treated as absent, so a heap can shrink
/// logically without touching the storage behind it.
pub fn sift_down_bounded<T, C: Comparator<T>>(
    data: &mut [T],
    mut i: usize,
    max_idx: usize,
    polarity: Polarity,
    cmp: &C,
) {
    let end = max_idx.min(data.len());
    loop {
        let mut best = i;
        let (l, r) = (left(i), right(i));
        if l < end && polarity.ahead(cmp, &data[l], &data[best]) {
            best = l;
        }
        if r < end && polarity.ahead(cmp, &data[r], &data[best]) {
            best = r;
        }
        if best == i {
            break;
        }
        data.swap(i, best);
        i = best;
    }
}

fn sift_up<T, C: Comparator<T>>(data: &mut [T], mut i: usize, polarity: Polarity, cmp: &C) {
    while i > 0 {
        let p = parent(i);
        if polarity.ahead(cmp, &data[i], &data[p]) || cmp.equal_to(&data[i], &data[p]) {
            data.swap(i, p);
            i = p;
        } else {
            break;
        }
    }
}

// Strict variant for deletion repair; equal keys stay put.
fn sift_up_strict<T, C: Comparator<T>>(data: &mut [T], mut i: usize, polarity: Polarity, cmp: &C) {
    while i > 0 {
        let p = parent(i);
        if !polarity.ahead(cmp, &data[i], &data[p]) {
            break;
        }
        data.swap(i, p);
        i = p;
    }
}

/// Establishes the heap property over the whole slice.
pub fn heapify_slice<T, C: Comparator<T>>(data: &mut [T], polarity: Polarity, cmp: &C) {
    let len = data.len();
    for i in (0..=len / 2).rev() {
        sift_down_bounded(data, i, len, polarity, cmp);
    }
}

/// Establishes the heap property over the prefix `[0, max_idx)`.
///
/// `max_idx` is clamped to the slice length.
pub fn heapify_slice_to_index<T, C: Comparator<T>>(
    data: &mut [T],
    max_idx: usize,
    polarity: Polarity,
    cmp: &C,
) {
    let max_idx = max_idx.min(data.len());
    for i in (0..=max_idx).rev() {
        sift_down_bounded(data, i, max_idx, polarity, cmp);
    }
}

pub fn is_heap_slice<T, C: Comparator<T>>(data: &[T], polarity: Polarity, cmp: &C) -> bool {
    let len = data.len();
    (0..len).all(|i| {
        [left(i), right(i)]
            .into_iter()
            .filter(|&c| c < len)
            .all(|c| !polarity.ahead(cmp, &data[c], &data[i]))
    })
}

/// Array-backed binary heap addressable by position.
///
/// Unlike [`std::collections::BinaryHeap`] any element can be removed by its
/// index, and the order is supplied by a [`Comparator`] rather than `Ord`.
#[derive(Debug, Clone)]
pub struct IndexedHeap<T, C = NaturalOrder> {
    data: Vec<T>,
    polarity: Polarity,
    comparator: C,
}

impl<T: Ord> IndexedHeap<T> {
    /// Takes ownership of `elements` and heapifies them under `T`'s natural order.
    pub fn new(polarity: Polarity, elements: Vec<T>) -> Self {
        Self::with_comparator(polarity, elements, NaturalOrder)
    }
}

impl<T, C: Comparator<T>> IndexedHeap<T, C> {
    pub fn with_comparator(polarity: Polarity, elements: Vec<T>, comparator: C) -> Self {
        log::debug!("building {:?} heap over {} elements", polarity, elements.len());
        let mut heap = Self {
            data: elements,
            polarity,
            comparator,
        };
        heap.heapify();
        heap
    }

    pub fn insert(&mut self, item: T) {
        self.data.push(item);
        let last = self.data.len() - 1;
        sift_up(&mut self.data, last, self.polarity, &self.comparator);
    }

    /// Removes the element at `index`. Out-of-range indices are ignored.
    pub fn delete(&mut self, index: usize) {
        let _ = self.remove(index);
    }

    /// Removes and returns the element at `index`.
    pub fn remove(&mut self, index: usize) -> Result<T, HeapError> {
        let len = self.data.len();
        if index >= len {
            return Err(HeapError::IndexOutOfRange { index, len });
        }

        // Moves the last element into `index`; a no-op move when `index` is last.
        let removed = self.data.swap_remove(index);
        if index < self.data.len() {
            sift_down_bounded(
                &mut self.data,
                index,
                len - 1,
                self.polarity,
                &self.comparator,
            );
            // The replacement came from another subtree and may outrank the
            // ancestors of `index`.
            sift_up_strict(&mut self.data, index, self.polarity, &self.comparator);
        }
        Ok(removed)
    }

    /// Removes the root.
    pub fn pop(&mut self) -> Option<T> {
        self.remove(0).ok()
    }

    pub fn try_pop(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }
        self.remove(0)
    }

    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn heapify(&mut self) {
        heapify_slice(&mut self.data, self.polarity, &self.comparator);
    }

    /// Re-heapifies only the prefix `[0, max_idx)`, leaving the tail untouched.
    pub fn heapify_to_index(&mut self, max_idx: usize) {
        heapify_slice_to_index(&mut self.data, max_idx, self.polarity, &self.comparator);
    }

    pub fn is_valid_heap(&self) -> bool {
        is_heap_slice(&self.data, self.polarity, &self.comparator)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Backing storage in heap order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Ord> From<Vec<T>> for IndexedHeap<T> {
    /// Min-heap over the natural order.
    fn from(elements: Vec<T>) -> Self {
        Self::new(Polarity::Min, elements)
    }
}
