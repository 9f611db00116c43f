//! Index/value access to the elements of a sparse source.

/// An `(index, value)` element of a sparse source.
///
/// Implemented for tuples whose first component is an unsigned integer and
/// for references to any `SparsePair`, so that both owned pair collections and
/// iterators over borrowed pairs can act as sparse sources.
pub trait SparsePair {
    /// The value type carried by the pair.
    type Value: ?Sized;

    /// Dense position of this pair.
    fn index(&self) -> usize;

    fn value(&self) -> &Self::Value;
}

macro_rules! impl_sparse_pair {
    ($($t:ty),*) => {
        $(
            impl<T> SparsePair for ($t, T) {
                type Value = T;

                /// Indices that do not fit in `usize` saturate to `usize::MAX`,
                /// which lies outside of every dense domain.
                #[inline]
                fn index(&self) -> usize {
                    usize::try_from(self.0).unwrap_or(usize::MAX)
                }

                #[inline]
                fn value(&self) -> &T {
                    &self.1
                }
            }
        )*
    };
}

impl_sparse_pair!(usize, u64, u32, u16, u8);

impl<P: SparsePair + ?Sized> SparsePair for &P {
    type Value = P::Value;

    #[inline]
    fn index(&self) -> usize {
        (**self).index()
    }

    #[inline]
    fn value(&self) -> &Self::Value {
        (**self).value()
    }
}
