use crate::comparator::{Comparator, NaturalOrder};

/// Stable, in place. O(n²) worst case, O(n) on sorted input.
pub fn insertion_sort<T: Ord>(arr: &mut [T]) {
    insertion_sort_by(arr, &NaturalOrder);
}

pub fn insertion_sort_by<T, C: Comparator<T>>(arr: &mut [T], cmp: &C) {
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && cmp.greater_than(&arr[j - 1], &arr[j]) {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}
