use crate::comparator::{Comparator, NaturalOrder};
use crate::data_structures::heap::{heapify_slice, sift_down_bounded, Polarity};
use crate::invariant::{Invariant, SortedBy};

pub fn heap_sort<T: Ord>(arr: &mut [T]) {
    heap_sort_by(arr, &NaturalOrder);
}

/// Sorts ascending in place: max-heap over the slice, then repeatedly move the
/// root behind the shrinking prefix `[0, i)` and sift the new root down.
pub fn heap_sort_by<T, C: Comparator<T>>(arr: &mut [T], cmp: &C) {
    let len = arr.len();
    log::debug!("heap sort over {} elements", len);

    heapify_slice(arr, Polarity::Max, cmp);
    for i in (1..len).rev() {
        arr.swap(0, i);
        sift_down_bounded(arr, 0, i, Polarity::Max, cmp);
    }

    debug_assert!(SortedBy(cmp).check(&*arr));
}
