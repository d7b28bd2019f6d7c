use crate::comparator::{Comparator, NaturalOrder};

pub fn quick_sort<T: Ord>(arr: &mut [T]) {
    quick_sort_by(arr, &NaturalOrder);
}

/// Recurses into the smaller side and loops on the larger one, so stack depth
/// stays O(log n) whatever the pivots.
pub fn quick_sort_by<T, C: Comparator<T>>(mut arr: &mut [T], cmp: &C) {
    while arr.len() > 1 {
        let (lt, gt) = partition(arr, cmp);
        let (left, rest) = std::mem::take(&mut arr).split_at_mut(lt);
        let right = &mut rest[gt - lt..];
        if left.len() < right.len() {
            quick_sort_by(left, cmp);
            arr = right;
        } else {
            quick_sort_by(right, cmp);
            arr = left;
        }
    }
}

/// Three-way partition around the middle element.
///
/// Returns `(lt, gt)` such that `arr[..lt] < pivot`, `arr[lt..gt] == pivot`
/// and `arr[gt..] > pivot`.
fn partition<T, C: Comparator<T>>(arr: &mut [T], cmp: &C) -> (usize, usize) {
    arr.swap(0, arr.len() / 2);
    // pivot lives at arr[lt] for the whole scan
    let (mut lt, mut i, mut gt) = (0, 1, arr.len());
    while i < gt {
        if cmp.less_than(&arr[i], &arr[lt]) {
            arr.swap(i, lt);
            lt += 1;
            i += 1;
        } else if cmp.equal_to(&arr[i], &arr[lt]) {
            i += 1;
        } else {
            gt -= 1;
            arr.swap(i, gt);
        }
    }
    (lt, gt)
}
