//! Overflow-checked products of iterators, complementing [`checked_sum::CheckedSum`].

use num_traits::{CheckedMul, One};

/// Iterator extension for multiplying all items, stopping at overflow.
pub trait CheckedProduct<T> {
    /// Multiply every item together. Returns `None` on overflow.
    ///
    /// An empty iterator has a product of one.
    fn checked_product(self) -> Option<T>;
}

impl<T, I> CheckedProduct<T> for I
where
    T: CheckedMul + One,
    I: Iterator<Item = T>,
{
    fn checked_product(mut self) -> Option<T> {
        self.try_fold(T::one(), |product, factor| product.checked_mul(&factor))
    }
}

#[cfg(test)]
mod tests {
    use super::CheckedProduct;

    #[test]
    fn multiplies_items() {
        assert_eq!([3u32, 4, 5].into_iter().checked_product(), Some(60));
    }

    #[test]
    fn empty_product_is_one() {
        assert_eq!(std::iter::empty::<u64>().checked_product(), Some(1));
    }

    #[test]
    fn overflow_is_none() {
        assert_eq!([16u8, 16].into_iter().checked_product(), None);
        assert_eq!([1i8, -128, -1].into_iter().checked_product(), None);
    }
}
