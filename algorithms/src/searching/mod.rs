pub mod kadane;

pub use kadane::kadane_search;
