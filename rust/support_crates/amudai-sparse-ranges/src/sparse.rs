//! Dense view over a sparse sequence of `(index, value)` pairs.
//!
//! [`SparseAdaptor`] presents a sparse source as the dense sequence of length
//! `len`, where every position that has no pair in the source yields the
//! default value. The dense sequence is produced lazily:
//!
//! - Push traversal ([`PushRange`]) is available for every sparse source.
//! - Pull traversal ([`IndexRange`]) is available when the sparse source is an
//!   [`IndexRange`] itself.
//!
//! The sparse source must yield pairs with strictly increasing indices, all
//! below `len`. This is checked by debug assertions only; use
//! [`SparseAdaptor::try_new`] or [`SparseAdaptor::validate`] to check it
//! explicitly.
//!
//! # Ownership
//!
//! Both the source and the default are taken by value. Passing a reference
//! (`&pairs`, `&default`) borrows instead of moving, since `&R` is a range
//! whenever `R` is, and `&T` borrows as `T`.

use std::borrow::Borrow;

use amudai_common::{Result, error::Error};

use crate::{
    flow::{BREAK, CONTINUE, Flow, IntoFlow},
    pair::SparsePair,
    range::{IndexIter, IndexRange, PushRange, for_each},
};

/// The value type of the pairs produced by the sparse source `S`.
pub type SparseValue<S> = <<S as PushRange>::Item as SparsePair>::Value;

/// Lazily adapts a sparse source of `(index, value)` pairs to a dense range
/// of `len` values, yielding `default` for the missing positions.
///
/// Created by [`sparse_range`], [`sparse_range_default`] or
/// [`SparseRangeExt::into_dense`].
#[derive(Debug, Clone)]
pub struct SparseAdaptor<S, D> {
    /// Sparse pairs with strictly increasing indices below `len`.
    source: S,
    /// Length of the dense range.
    len: usize,
    /// The value of every position that has no pair in `source`.
    /// Handed out by reference, never cloned per element.
    default: D,
}

impl<S, D> SparseAdaptor<S, D> {
    /// Creates the adaptor without checking the sparse source.
    pub fn new(source: S, len: usize, default: D) -> Self {
        log::trace!("sparse adaptor created over dense length {len}");
        SparseAdaptor {
            source,
            len,
            default,
        }
    }

    /// Length of the dense range.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Decomposes the adaptor into `(source, len, default)`.
    pub fn into_parts(self) -> (S, usize, D) {
        (self.source, self.len, self.default)
    }
}

impl<S, D> SparseAdaptor<S, D>
where
    S: PushRange,
    S::Item: SparsePair,
    D: Borrow<SparseValue<S>>,
{
    /// Creates the adaptor after verifying that the source indices are
    /// strictly increasing and below `len`.
    pub fn try_new(source: S, len: usize, default: D) -> Result<Self> {
        let adaptor = Self::new(source, len, default);
        adaptor.validate()?;
        Ok(adaptor)
    }

    /// Walks the sparse source once and verifies that its indices are
    /// strictly increasing and below `len`.
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<()> {
        let len = self.len;
        let mut next = 0usize;
        let mut error = None;
        let flow = self.source.for_each_until(|pair| {
            let index = pair.index();
            if index < next {
                error = Some(Error::unordered_index(index, next));
                return BREAK;
            }
            if index >= len {
                error = Some(Error::index_out_of_domain(index, len));
                return BREAK;
            }
            next = index + 1;
            CONTINUE
        });
        match (flow, error) {
            (Flow::Break(()), Some(e)) => {
                log::debug!("sparse source rejected: {e}");
                Err(e)
            }
            _ => Ok(()),
        }
    }

    pub fn default_value(&self) -> &SparseValue<S> {
        self.default.borrow()
    }

    /// Push-traverses the dense range.
    ///
    /// `func` is invoked once per dense position, in order, and may return
    /// `()` or a [`Flow`]; a [`Flow::Break`] stops the traversal and is
    /// returned.
    pub fn for_each<F, R>(&self, func: F) -> Flow
    where
        F: FnMut(&SparseValue<S>) -> R,
        R: IntoFlow,
    {
        for_each(self, func)
    }

    /// Materializes the dense range.
    pub fn to_vec(&self) -> Vec<SparseValue<S>>
    where
        SparseValue<S>: Clone,
    {
        let mut res = Vec::with_capacity(self.len);
        let flow = self.for_each_until(|value| {
            res.push(value.clone());
            CONTINUE
        });
        debug_assert!(flow.is_continue());
        res
    }
}

impl<S, D> PushRange for SparseAdaptor<S, D>
where
    S: PushRange,
    S::Item: SparsePair,
    D: Borrow<SparseValue<S>>,
{
    type Item = SparseValue<S>;

    fn for_each_until<F>(&self, mut func: F) -> Flow
    where
        F: FnMut(&Self::Item) -> Flow,
    {
        let default: &SparseValue<S> = self.default.borrow();
        let len = self.len;
        let mut n = 0usize;
        self.source.for_each_until(|pair| {
            let index = pair.index();
            debug_assert!(
                index >= n,
                "sparse index {index} is not strictly increasing (expected at least {n})"
            );
            debug_assert!(
                index < len,
                "sparse index {index} is outside of the dense domain 0..{len}"
            );
            while n < index {
                n += 1;
                func(default)?;
            }
            n += 1;
            func(pair.value())
        })?;
        while n < len {
            n += 1;
            func(default)?;
        }
        CONTINUE
    }
}

/// Cursor into a [`SparseAdaptor`].
///
/// Pairs the dense position with a cursor into the sparse source. The source
/// cursor is advanced only past pairs that have been consumed, so it is fully
/// determined by the dense position: two cursors compare equal when their
/// positions do.
#[derive(Debug, Clone)]
pub struct SparseIndex<I> {
    pos: usize,
    inner: I,
}

impl<I> SparseIndex<I> {
    /// Dense position of the cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Cursor into the sparse source.
    pub fn inner(&self) -> &I {
        &self.inner
    }
}

impl<I> PartialEq for SparseIndex<I> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<I> Eq for SparseIndex<I> {}

impl<S, D> SparseAdaptor<S, D>
where
    S: IndexRange,
    S::Item: SparsePair,
    D: Borrow<SparseValue<S>>,
{
    /// Whether the position under `index` has no pair in the source.
    fn is_default(&self, index: &SparseIndex<S::Index>) -> bool {
        debug_assert!(
            index.pos < self.len,
            "dense position {} is past the end of the dense range 0..{}",
            index.pos,
            self.len
        );
        if self.source.at_end_index(&index.inner) {
            return true;
        }
        let next = self.source.dereference_index(&index.inner).index();
        debug_assert!(
            next >= index.pos,
            "sparse index {next} is not strictly increasing (expected at least {})",
            index.pos
        );
        debug_assert!(
            next < self.len,
            "sparse index {next} is outside of the dense domain 0..{}",
            self.len
        );
        next != index.pos
    }

    /// Returns a std [`Iterator`] over the dense values.
    pub fn iter(&self) -> IndexIter<'_, Self> {
        self.index_iter()
    }
}

impl<S, D> IndexRange for SparseAdaptor<S, D>
where
    S: IndexRange,
    S::Item: SparsePair,
    D: Borrow<SparseValue<S>>,
{
    type Index = SparseIndex<S::Index>;

    fn begin_index(&self) -> Self::Index {
        SparseIndex {
            pos: 0,
            inner: self.source.begin_index(),
        }
    }

    fn end_index(&self) -> Self::Index {
        SparseIndex {
            pos: self.len,
            inner: self.source.end_index(),
        }
    }

    #[inline]
    fn equal_index(&self, lhs: &Self::Index, rhs: &Self::Index) -> bool {
        lhs.pos == rhs.pos
    }

    fn increment_index(&self, index: &mut Self::Index) {
        if !self.is_default(index) {
            self.source.increment_index(&mut index.inner);
        }
        index.pos += 1;
    }

    #[inline]
    fn at_end_index(&self, index: &Self::Index) -> bool {
        index.pos == self.len
    }

    fn dereference_index(&self, index: &Self::Index) -> &Self::Item {
        if self.is_default(index) {
            self.default.borrow()
        } else {
            self.source.dereference_index(&index.inner).value()
        }
    }

    fn remaining(&self, index: &Self::Index) -> Option<usize> {
        Some(self.len - index.pos)
    }
}

impl<S, D> ExactSizeIterator for IndexIter<'_, SparseAdaptor<S, D>>
where
    S: IndexRange,
    S::Item: SparsePair,
    D: Borrow<SparseValue<S>>,
{
}

impl<'a, S, D> IntoIterator for &'a SparseAdaptor<S, D>
where
    S: IndexRange,
    S::Item: SparsePair,
    D: Borrow<SparseValue<S>>,
{
    type Item = &'a SparseValue<S>;
    type IntoIter = IndexIter<'a, SparseAdaptor<S, D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.index_iter()
    }
}

/// Creates a dense view of `len` values over the sparse `source`, yielding
/// `default` at every position without a pair.
///
/// `source` and `default` are owned by the adaptor when passed by value and
/// borrowed when passed by reference.
pub fn sparse_range<S, D>(source: S, len: usize, default: D) -> SparseAdaptor<S, D>
where
    S: PushRange,
    S::Item: SparsePair,
    D: Borrow<SparseValue<S>>,
{
    SparseAdaptor::new(source, len, default)
}

/// Same as [`sparse_range`], with the value type's [`Default`] as the
/// default value.
pub fn sparse_range_default<S>(source: S, len: usize) -> SparseAdaptor<S, SparseValue<S>>
where
    S: PushRange,
    S::Item: SparsePair,
    SparseValue<S>: Default + Sized,
{
    SparseAdaptor::new(source, len, Default::default())
}

/// Extension trait for building dense views from sparse sources.
pub trait SparseRangeExt: PushRange + Sized {
    /// Adapts `self` to the dense range of `len` values, see [`sparse_range`].
    fn into_dense<D>(self, len: usize, default: D) -> SparseAdaptor<Self, D>
    where
        Self::Item: SparsePair,
        D: Borrow<SparseValue<Self>>,
    {
        sparse_range(self, len, default)
    }

    /// Adapts `self` to the dense range of `len` values, see
    /// [`sparse_range_default`].
    fn into_dense_default(self, len: usize) -> SparseAdaptor<Self, SparseValue<Self>>
    where
        Self::Item: SparsePair,
        SparseValue<Self>: Default + Sized,
    {
        sparse_range_default(self, len)
    }
}

impl<R: PushRange> SparseRangeExt for R {}
