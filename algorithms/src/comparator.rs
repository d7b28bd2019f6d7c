//! Pluggable total orders.
//!
//! Variables:
//!   a, b : &T  — operands
//!
//! Equations:
//!   exactly one of  less_than(a,b) | greater_than(a,b) | equal_to(a,b)  holds
//!   greater_than(a,b) = less_than(b,a)
//!   equal_to(a,b)     = !less_than(a,b) && !less_than(b,a)

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

/// Total order over `T` consumed by every sort and the heap.
pub trait Comparator<T: ?Sized> {
    /// Strict `a < b`.
    fn less_than(&self, a: &T, b: &T) -> bool;

    /// Strict `a > b`.
    fn greater_than(&self, a: &T, b: &T) -> bool {
        self.less_than(b, a)
    }

    /// Neither operand ranks strictly ahead of the other.
    fn equal_to(&self, a: &T, b: &T) -> bool {
        !self.less_than(a, b) && !self.less_than(b, a)
    }
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> Comparator<T> for &C {
    fn less_than(&self, a: &T, b: &T) -> bool {
        (**self).less_than(a, b)
    }
    fn greater_than(&self, a: &T, b: &T) -> bool {
        (**self).greater_than(a, b)
    }
    fn equal_to(&self, a: &T, b: &T) -> bool {
        (**self).equal_to(a, b)
    }
}

/// The type's own `Ord`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    fn less_than(&self, a: &T, b: &T) -> bool {
        a.cmp(b) == Ordering::Less
    }
    fn greater_than(&self, a: &T, b: &T) -> bool {
        a.cmp(b) == Ordering::Greater
    }
    fn equal_to(&self, a: &T, b: &T) -> bool {
        a.cmp(b) == Ordering::Equal
    }
}

/// Swaps `less_than` and `greater_than` of the wrapped comparator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn less_than(&self, a: &T, b: &T) -> bool {
        self.0.greater_than(a, b)
    }
    fn greater_than(&self, a: &T, b: &T) -> bool {
        self.0.less_than(a, b)
    }
    fn equal_to(&self, a: &T, b: &T) -> bool {
        self.0.equal_to(a, b)
    }
}

/// Orders values by a key extracted with `F`, e.g. a date field of a record.
pub struct ByKey<F, K> {
    key: F,
    _key: PhantomData<fn() -> K>,
}

impl<F: Clone, K> Clone for ByKey<F, K> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            _key: PhantomData,
        }
    }
}

impl<F, K> fmt::Debug for ByKey<F, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByKey").finish_non_exhaustive()
    }
}

impl<T, K, F> Comparator<T> for ByKey<F, K>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    fn less_than(&self, a: &T, b: &T) -> bool {
        (self.key)(a) < (self.key)(b)
    }
    fn greater_than(&self, a: &T, b: &T) -> bool {
        (self.key)(a) > (self.key)(b)
    }
    fn equal_to(&self, a: &T, b: &T) -> bool {
        (self.key)(a) == (self.key)(b)
    }
}

pub fn by_key<T, K, F>(key: F) -> ByKey<F, K>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    ByKey {
        key,
        _key: PhantomData,
    }
}
