//! # Algos
//!
//! In-memory reordering and pattern-search primitives over pluggable comparators.
//!
//! ## Modules
//!
//! - `comparator` – Total orders (`NaturalOrder`, `Reversed`, `by_key`)
//! - `data_structures` – Indexable binary heap (min/max, delete by index, bounded heapify)
//! - `sorting` – Ordering algorithms (insertion, selection, merge, quick, heap)
//! - `partitioning` – Hoare partition
//! - `searching` – Maximum subarray (Kadane)
//! - `string_algorithms` – Pattern matching (KMP)
//! - `invariant` – Sortedness and heap-order checks
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use algos::data_structures::{IndexedHeap, Polarity};
//! use algos::sorting::heap_sort;
//!
//! let mut heap = IndexedHeap::new(Polarity::Max, vec![10, 15, 20, 5]);
//! assert_eq!(heap.peek(), Some(&20));
//! heap.delete(0);
//! assert!(heap.is_valid_heap());
//!
//! let mut data = [5, 2, 9, 1, 5, 6];
//! heap_sort(&mut data);
//! assert_eq!(data, [1, 2, 5, 5, 6, 9]);
//! ```

pub mod comparator;
pub mod data_structures;
pub mod error;
pub mod invariant;
pub mod partitioning;
pub mod searching;
pub mod sorting;
pub mod string_algorithms;

pub use comparator::{by_key, Comparator, NaturalOrder, Reversed};
pub use data_structures::{IndexedHeap, Polarity};
pub use error::HeapError;
