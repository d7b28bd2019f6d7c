pub mod heap;

pub use heap::{IndexedHeap, Polarity};
