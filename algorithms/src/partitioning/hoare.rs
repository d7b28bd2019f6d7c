//! Hoare partition scheme.
//!
//! Variables:
//!   p    : T      — pivot, a copy of arr[0]
//!   i, j : usize  — left/right cursors
//!
//! Equations:
//!   i advances while arr[i] < p,  j retreats while arr[j] > p
//!   i < j  =>  swap(i, j), i += 1, j -= 1
//!   i >= j =>  stop, return j
//!
//!   Post: arr[..=j] <= p <= arr[j+1..]

use crate::comparator::{Comparator, NaturalOrder};

pub fn hoare_partition<T: Ord + Clone>(arr: &mut [T]) -> usize {
    hoare_partition_by(arr, &NaturalOrder)
}

/// Partitions around the first element and returns the final right cursor.
///
/// Slices of length 0 or 1 are left untouched and yield 0.
pub fn hoare_partition_by<T: Clone, C: Comparator<T>>(arr: &mut [T], cmp: &C) -> usize {
    if arr.len() <= 1 {
        return 0;
    }

    let pivot = arr[0].clone();
    let (mut i, mut j) = (0, arr.len() - 1);
    loop {
        while cmp.less_than(&arr[i], &pivot) {
            i += 1;
        }
        while cmp.greater_than(&arr[j], &pivot) {
            j -= 1;
        }
        if i >= j {
            return j;
        }
        arr.swap(i, j);
        i += 1;
        j -= 1;
    }
}
