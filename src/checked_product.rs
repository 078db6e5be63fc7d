//! Utility for calculating the product of iterators while checking for overflow.
//!
//! [`CheckedProduct`] is implemented for iterators of any type with [`CheckedMul`] and [`One`],
//! which covers the primitive integers.

use num_traits::{CheckedMul, One};

/// Iterator extension trait for calculating the product of numbers with overflow checking.
pub trait CheckedProduct<T> {
    /// Multiplies numbers in an iterator, checking for overflow.
    /// Returns `None` if overflow occurred.
    fn checked_product(self) -> Option<T>;
}

impl<T, I> CheckedProduct<T> for I
where
    T: CheckedMul + One,
    I: Iterator<Item = T>,
{
    fn checked_product(mut self) -> Option<T> {
        self.try_fold(T::one(), |acc, value| acc.checked_mul(&value))
    }
}
