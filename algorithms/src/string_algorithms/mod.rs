pub mod kmp;

pub use kmp::{kmp_search, kmp_search_with, KmpConfig};
