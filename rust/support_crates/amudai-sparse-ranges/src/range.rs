//! Push and pull traversal protocols over ranges.
//!
//! - [`PushRange`] is the minimal contract: the range drives a callback over its
//!   elements in order and honors [`Flow::Break`].
//! - [`IndexRange`] adds an explicit forward cursor ("index") that the consumer
//!   advances and dereferences itself.
//!
//! Slices, arrays, `Vec` and `VecDeque` implement both. [`IterRange`] and
//! [`FnRange`] wrap one-shot producers and implement only [`PushRange`].

use std::{collections::VecDeque, iter::FusedIterator, marker::PhantomData};

use crate::flow::{CONTINUE, Flow, IntoFlow};

/// A range that can be traversed by pushing its elements into a callback.
///
/// The traversal takes `&self`: a push range can be traversed any number of
/// times, each traversal starting from the first element.
pub trait PushRange {
    type Item: ?Sized;

    /// Invokes `func` once per element, in order, until the elements are
    /// exhausted or `func` returns [`Flow::Break`].
    ///
    /// Returns the signal that terminated the traversal: `Break` if `func`
    /// requested it, `Continue` otherwise.
    fn for_each_until<F>(&self, func: F) -> Flow
    where
        F: FnMut(&Self::Item) -> Flow;
}

/// A range that additionally exposes a forward cursor.
///
/// An index produced by [`begin_index`](IndexRange::begin_index) is advanced
/// with [`increment_index`](IndexRange::increment_index) until
/// [`at_end_index`](IndexRange::at_end_index) reports the end. Indices are
/// plain values owned by the caller; independent indices over the same range
/// do not interact.
pub trait IndexRange: PushRange {
    type Index: Clone;

    fn begin_index(&self) -> Self::Index;

    /// The past-the-end index. It must never be dereferenced.
    fn end_index(&self) -> Self::Index;

    fn equal_index(&self, lhs: &Self::Index, rhs: &Self::Index) -> bool;

    /// Advances `index` by one element.
    ///
    /// Requires `!self.at_end_index(index)`.
    fn increment_index(&self, index: &mut Self::Index);

    fn at_end_index(&self, index: &Self::Index) -> bool;

    /// Returns the element at `index`.
    ///
    /// Requires `!self.at_end_index(index)`.
    fn dereference_index(&self, index: &Self::Index) -> &Self::Item;

    /// Number of elements between `index` and the end, when known.
    fn remaining(&self, _index: &Self::Index) -> Option<usize> {
        None
    }

    /// Returns a std [`Iterator`] driven by this range's cursor.
    fn index_iter(&self) -> IndexIter<'_, Self> {
        IndexIter {
            range: self,
            index: self.begin_index(),
        }
    }
}

/// Push-traverses `range`, invoking `func` for every element.
///
/// `func` may return `()` (always continue) or a [`Flow`].
pub fn for_each<R, F, Ret>(range: &R, mut func: F) -> Flow
where
    R: PushRange + ?Sized,
    F: FnMut(&R::Item) -> Ret,
    Ret: IntoFlow,
{
    range.for_each_until(|item| func(item).into_flow())
}

/// Iterator over the elements of an [`IndexRange`].
///
/// Created by [`IndexRange::index_iter`].
pub struct IndexIter<'a, R: IndexRange + ?Sized> {
    range: &'a R,
    index: R::Index,
}

impl<'a, R: IndexRange + ?Sized> IndexIter<'a, R> {
    /// The current cursor of the iterator, i.e. the index of the element
    /// that the next call to `next()` returns.
    pub fn index(&self) -> &R::Index {
        &self.index
    }
}

impl<R: IndexRange + ?Sized> Clone for IndexIter<'_, R> {
    fn clone(&self) -> Self {
        IndexIter {
            range: self.range,
            index: self.index.clone(),
        }
    }
}

impl<'a, R: IndexRange + ?Sized> Iterator for IndexIter<'a, R> {
    type Item = &'a R::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.range.at_end_index(&self.index) {
            return None;
        }
        let item = self.range.dereference_index(&self.index);
        self.range.increment_index(&mut self.index);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.range.remaining(&self.index) {
            Some(n) => (n, Some(n)),
            None => (0, None),
        }
    }
}

impl<R: IndexRange + ?Sized> FusedIterator for IndexIter<'_, R> {}

impl<T> PushRange for [T] {
    type Item = T;

    fn for_each_until<F>(&self, mut func: F) -> Flow
    where
        F: FnMut(&T) -> Flow,
    {
        for item in self {
            func(item)?;
        }
        CONTINUE
    }
}

impl<T> IndexRange for [T] {
    type Index = usize;

    #[inline]
    fn begin_index(&self) -> usize {
        0
    }

    #[inline]
    fn end_index(&self) -> usize {
        self.len()
    }

    #[inline]
    fn equal_index(&self, lhs: &usize, rhs: &usize) -> bool {
        lhs == rhs
    }

    #[inline]
    fn increment_index(&self, index: &mut usize) {
        debug_assert!(*index < self.len());
        *index += 1;
    }

    #[inline]
    fn at_end_index(&self, index: &usize) -> bool {
        *index == self.len()
    }

    #[inline]
    fn dereference_index(&self, index: &usize) -> &T {
        &self[*index]
    }

    fn remaining(&self, index: &usize) -> Option<usize> {
        Some(self.len() - *index)
    }
}

/// Forwards both protocols to a slice view of the collection.
macro_rules! impl_via_slice {
    ($ty:ty, $($generics:tt)*) => {
        impl<$($generics)*> PushRange for $ty {
            type Item = T;

            fn for_each_until<F>(&self, func: F) -> Flow
            where
                F: FnMut(&T) -> Flow,
            {
                self.as_slice().for_each_until(func)
            }
        }

        impl<$($generics)*> IndexRange for $ty {
            type Index = usize;

            fn begin_index(&self) -> usize {
                0
            }

            fn end_index(&self) -> usize {
                self.len()
            }

            fn equal_index(&self, lhs: &usize, rhs: &usize) -> bool {
                lhs == rhs
            }

            fn increment_index(&self, index: &mut usize) {
                self.as_slice().increment_index(index)
            }

            fn at_end_index(&self, index: &usize) -> bool {
                *index == self.len()
            }

            fn dereference_index(&self, index: &usize) -> &T {
                &self[*index]
            }

            fn remaining(&self, index: &usize) -> Option<usize> {
                Some(self.len() - *index)
            }
        }
    };
}

impl_via_slice!(Vec<T>, T);
impl_via_slice!([T; N], T, const N: usize);

impl<T> PushRange for VecDeque<T> {
    type Item = T;

    fn for_each_until<F>(&self, mut func: F) -> Flow
    where
        F: FnMut(&T) -> Flow,
    {
        let (front, back) = self.as_slices();
        front.for_each_until(&mut func)?;
        back.for_each_until(func)
    }
}

impl<T> IndexRange for VecDeque<T> {
    type Index = usize;

    fn begin_index(&self) -> usize {
        0
    }

    fn end_index(&self) -> usize {
        self.len()
    }

    fn equal_index(&self, lhs: &usize, rhs: &usize) -> bool {
        lhs == rhs
    }

    fn increment_index(&self, index: &mut usize) {
        debug_assert!(*index < self.len());
        *index += 1;
    }

    fn at_end_index(&self, index: &usize) -> bool {
        *index == self.len()
    }

    fn dereference_index(&self, index: &usize) -> &T {
        &self[*index]
    }

    fn remaining(&self, index: &usize) -> Option<usize> {
        Some(self.len() - *index)
    }
}

impl<R: PushRange + ?Sized> PushRange for &R {
    type Item = R::Item;

    #[inline]
    fn for_each_until<F>(&self, func: F) -> Flow
    where
        F: FnMut(&Self::Item) -> Flow,
    {
        (**self).for_each_until(func)
    }
}

impl<R: IndexRange + ?Sized> IndexRange for &R {
    type Index = R::Index;

    #[inline]
    fn begin_index(&self) -> Self::Index {
        (**self).begin_index()
    }

    #[inline]
    fn end_index(&self) -> Self::Index {
        (**self).end_index()
    }

    #[inline]
    fn equal_index(&self, lhs: &Self::Index, rhs: &Self::Index) -> bool {
        (**self).equal_index(lhs, rhs)
    }

    #[inline]
    fn increment_index(&self, index: &mut Self::Index) {
        (**self).increment_index(index)
    }

    #[inline]
    fn at_end_index(&self, index: &Self::Index) -> bool {
        (**self).at_end_index(index)
    }

    #[inline]
    fn dereference_index(&self, index: &Self::Index) -> &Self::Item {
        (**self).dereference_index(index)
    }

    fn remaining(&self, index: &Self::Index) -> Option<usize> {
        (**self).remaining(index)
    }
}

/// Push-only range over a cloneable iterator (or any cloneable `IntoIterator`).
///
/// Every traversal clones the wrapped value and drains the clone, so the
/// wrapped iterator itself is never advanced.
#[derive(Debug, Clone)]
pub struct IterRange<I> {
    inner: I,
}

impl<I> IterRange<I>
where
    I: IntoIterator + Clone,
{
    pub fn new(inner: I) -> Self {
        IterRange { inner }
    }
}

impl<I> PushRange for IterRange<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;

    fn for_each_until<F>(&self, mut func: F) -> Flow
    where
        F: FnMut(&I::Item) -> Flow,
    {
        for item in self.inner.clone() {
            func(&item)?;
        }
        CONTINUE
    }
}

/// Push-only range backed by a generator function.
///
/// The generator receives a sink and must feed it the range's elements in
/// order, returning as soon as the sink returns [`Flow::Break`] (propagating
/// that signal). Elements are produced on the fly and may be temporaries.
///
/// ```
/// use amudai_sparse_ranges::{Flow, FnRange, PushRange};
///
/// let squares = FnRange::new(|sink: &mut dyn FnMut(&u64) -> Flow| {
///     for i in 0..4u64 {
///         sink(&(i * i))?;
///     }
///     Flow::Continue(())
/// });
/// let mut out = Vec::new();
/// let _ = squares.for_each_until(|&v| {
///     out.push(v);
///     Flow::Continue(())
/// });
/// assert_eq!(out, vec![0, 1, 4, 9]);
/// ```
pub struct FnRange<T, G> {
    generator: G,
    _p: PhantomData<fn(&T)>,
}

impl<T, G> FnRange<T, G>
where
    G: Fn(&mut dyn FnMut(&T) -> Flow) -> Flow,
{
    pub fn new(generator: G) -> Self {
        FnRange {
            generator,
            _p: PhantomData,
        }
    }
}

impl<T, G: Clone> Clone for FnRange<T, G> {
    fn clone(&self) -> Self {
        FnRange {
            generator: self.generator.clone(),
            _p: PhantomData,
        }
    }
}

impl<T, G> PushRange for FnRange<T, G>
where
    G: Fn(&mut dyn FnMut(&T) -> Flow) -> Flow,
{
    type Item = T;

    fn for_each_until<F>(&self, mut func: F) -> Flow
    where
        F: FnMut(&T) -> Flow,
    {
        (self.generator)(&mut func)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::{FnRange, IndexRange, IterRange, PushRange, for_each};
    use crate::flow::{BREAK, CONTINUE, Flow};

    fn collect_push<R>(range: &R) -> Vec<R::Item>
    where
        R: PushRange + ?Sized,
        R::Item: Clone,
    {
        let mut res = Vec::new();
        let flow = for_each(range, |item: &R::Item| res.push(item.clone()));
        assert_eq!(flow, CONTINUE);
        res
    }

    #[test]
    fn test_slice_push_and_pull() {
        let v = vec![1u32, 2, 3];
        assert_eq!(collect_push(&v), vec![1, 2, 3]);
        assert_eq!(collect_push(v.as_slice()), vec![1, 2, 3]);
        assert_eq!(v.index_iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);

        let mut idx = v.begin_index();
        assert!(v.equal_index(&idx, &0));
        v.increment_index(&mut idx);
        assert_eq!(*v.dereference_index(&idx), 2);
        v.increment_index(&mut idx);
        v.increment_index(&mut idx);
        assert!(v.at_end_index(&idx));
        assert!(v.equal_index(&idx, &v.end_index()));
    }

    #[test]
    fn test_push_break() {
        let v = [10, 20, 30, 40];
        let mut seen = Vec::new();
        let flow = v.for_each_until(|&x| {
            seen.push(x);
            if x == 20 { BREAK } else { CONTINUE }
        });
        assert_eq!(flow, BREAK);
        assert_eq!(seen, vec![10, 20]);
    }

    #[test]
    fn test_vec_deque_wrapped() {
        let mut d = VecDeque::new();
        d.push_back(2);
        d.push_back(3);
        d.push_front(1);
        assert_eq!(collect_push(&d), vec![1, 2, 3]);
        assert_eq!(d.index_iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);

        let mut seen = Vec::new();
        let flow = d.for_each_until(|&x| {
            seen.push(x);
            if x == 1 { BREAK } else { CONTINUE }
        });
        assert_eq!(flow, BREAK);
        assert_eq!(seen, vec![1]);
    }

    #[test]
    fn test_index_iter_size_hint() {
        let v = vec!["a", "b", "c"];
        let mut it = v.index_iter();
        assert_eq!(it.size_hint(), (3, Some(3)));
        it.next();
        assert_eq!(it.size_hint(), (2, Some(2)));
        assert_eq!(*it.index(), 1);
        let rest: Vec<_> = it.clone().collect();
        assert_eq!(rest, vec![&"b", &"c"]);
        it.by_ref().for_each(drop);
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_iter_range_is_repeatable() {
        let r = IterRange::new((0..5u32).map(|i| i * 2));
        assert_eq!(collect_push(&r), vec![0, 2, 4, 6, 8]);
        assert_eq!(collect_push(&r), vec![0, 2, 4, 6, 8]);
    }

    #[test]
    fn test_fn_range() {
        let r = FnRange::new(|sink: &mut dyn FnMut(&String) -> Flow| {
            for s in ["x", "y", "z"] {
                sink(&s.to_string())?;
            }
            CONTINUE
        });
        assert_eq!(collect_push(&r), vec!["x", "y", "z"]);

        let mut count = 0;
        let flow = r.for_each_until(|_| {
            count += 1;
            BREAK
        });
        assert_eq!(flow, BREAK);
        assert_eq!(count, 1);
    }
}
