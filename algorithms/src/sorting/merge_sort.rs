//! Top-down merge sort.
//!
//! Stable: on ties the element from the left run is taken first.
//! Uses one scratch buffer of `arr.len()` elements for the whole sort.

use crate::comparator::{Comparator, NaturalOrder};

pub fn merge_sort<T: Ord + Clone>(arr: &mut [T]) {
    merge_sort_by(arr, &NaturalOrder);
}

pub fn merge_sort_by<T: Clone, C: Comparator<T>>(arr: &mut [T], cmp: &C) {
    if arr.len() <= 1 {
        return;
    }
    let mut scratch = Vec::with_capacity(arr.len());
    split_and_sort(arr, &mut scratch, cmp);
}

fn split_and_sort<T: Clone, C: Comparator<T>>(arr: &mut [T], scratch: &mut Vec<T>, cmp: &C) {
    let len = arr.len();
    if len <= 1 {
        return;
    }
    if len == 2 {
        if cmp.greater_than(&arr[0], &arr[1]) {
            arr.swap(0, 1);
        }
        return;
    }
    let mid = len / 2;
    split_and_sort(&mut arr[..mid], scratch, cmp);
    split_and_sort(&mut arr[mid..], scratch, cmp);
    merge(arr, mid, scratch, cmp);
}

/// Merges the sorted runs `arr[..mid]` and `arr[mid..]`.
fn merge<T: Clone, C: Comparator<T>>(arr: &mut [T], mid: usize, scratch: &mut Vec<T>, cmp: &C) {
    scratch.clear();
    let (mut l, mut r) = (0, mid);
    while l < mid && r < arr.len() {
        if cmp.greater_than(&arr[l], &arr[r]) {
            scratch.push(arr[r].clone());
            r += 1;
        } else {
            scratch.push(arr[l].clone());
            l += 1;
        }
    }
    scratch.extend_from_slice(&arr[l..mid]);
    scratch.extend_from_slice(&arr[r..]);
    arr.clone_from_slice(scratch);
}
