use crate::comparator::{Comparator, NaturalOrder};

pub fn selection_sort<T: Ord>(arr: &mut [T]) {
    selection_sort_by(arr, &NaturalOrder);
}

pub fn selection_sort_by<T, C: Comparator<T>>(arr: &mut [T], cmp: &C) {
    let len = arr.len();
    for from in 0..len {
        let mut min = from;
        for i in from + 1..len {
            if cmp.less_than(&arr[i], &arr[min]) {
                min = i;
            }
        }
        arr.swap(from, min);
    }
}
