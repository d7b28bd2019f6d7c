pub mod heap_sort;
pub mod insertion_sort;
pub mod merge_sort;
pub mod quick_sort;
pub mod selection_sort;

pub use heap_sort::{heap_sort, heap_sort_by};
pub use insertion_sort::{insertion_sort, insertion_sort_by};
pub use merge_sort::{merge_sort, merge_sort_by};
pub use quick_sort::{quick_sort, quick_sort_by};
pub use selection_sort::{selection_sort, selection_sort_by};
