//! Knuth–Morris–Pratt substring search.
//!
//! Variables:
//!   t   : &[T]       — text, length N
//!   p   : &[T]       — pattern, length M
//!   lps : Vec<usize> — lps[k] = length of the longest proper prefix of p[..=k]
//!                      that is also a suffix of it
//!
//! Equations:
//!   t[i] == p[j]      =>  i += 1, j += 1
//!   j == M            =>  emit i - M,  j = lps[M-1]      (overlapping matches)
//!   mismatch, j > 0   =>  j = lps[j-1]
//!   mismatch, j == 0  =>  i += 1
//!
//!   Complexity: O(N + M)

use std::fmt::Debug;

const TARGET: &str = "algos::kmp";

/// Per-call search options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KmpConfig {
    /// Emit `log::trace!` diagnostics under the `algos::kmp` target.
    pub trace: bool,
}

macro_rules! kmp_trace {
    ($config:expr, $($arg:tt)+) => {
        if $config.trace {
            log::trace!(target: TARGET, $($arg)+);
        }
    };
}

/// Every start offset of `pattern` in `text`, counted in `char`s.
pub fn kmp_search(text: &str, pattern: &str) -> Vec<usize> {
    kmp_search_with(text, pattern, &KmpConfig::default())
}

pub fn kmp_search_with(text: &str, pattern: &str, config: &KmpConfig) -> Vec<usize> {
    let t: Vec<char> = text.chars().collect();
    let p: Vec<char> = pattern.chars().collect();
    kmp_search_slice_with(&t, &p, config)
}

pub fn kmp_search_slice<T: PartialEq + Debug>(text: &[T], pattern: &[T]) -> Vec<usize> {
    kmp_search_slice_with(text, pattern, &KmpConfig::default())
}

/// Returns an empty result for an empty pattern or one longer than the text.
pub fn kmp_search_slice_with<T: PartialEq + Debug>(
    text: &[T],
    pattern: &[T],
    config: &KmpConfig,
) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return vec![];
    }

    let lps = build_lps(pattern, config);

    let mut res = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < text.len() {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;
            if j == pattern.len() {
                kmp_trace!(config, "match at {}", i - j);
                res.push(i - j);
                j = lps[j - 1];
            }
        } else if j > 0 {
            kmp_trace!(
                config,
                "mismatch text[{}]={:?}, falling back j {} -> {}",
                i,
                text[i],
                j,
                lps[j - 1]
            );
            j = lps[j - 1];
        } else {
            i += 1;
        }
    }
    res
}

pub fn longest_prefix_suffix<T: PartialEq + Debug>(pattern: &[T]) -> Vec<usize> {
    build_lps(pattern, &KmpConfig::default())
}

fn build_lps<T: PartialEq + Debug>(p: &[T], config: &KmpConfig) -> Vec<usize> {
    let mut lps = vec![0; p.len()];
    let mut len = 0;
    for i in 1..p.len() {
        while len > 0 && p[i] != p[len] {
            len = lps[len - 1];
        }
        if p[i] == p[len] {
            len += 1;
            lps[i] = len;
        }
        kmp_trace!(config, "p[{}]={:?} lps[{}]={}", i, p[i], i, lps[i]);
    }
    kmp_trace!(config, "lps table {:?}", lps);
    lps
}
