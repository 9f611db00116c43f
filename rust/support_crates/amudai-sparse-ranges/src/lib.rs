//! Lazy sparse-to-dense range adaptation.
//!
//! This crate turns a sparse, strictly increasing sequence of `(index, value)`
//! pairs over a domain `0..len` into the logical dense sequence of length `len`,
//! substituting a default value for every index absent from the sparse input.
//! The dense sequence is never materialized.
//!
//! Two consumption protocols are supported:
//!
//! - **Push**: [`PushRange::for_each_until`] invokes a callback for every element,
//!   and the callback may stop the traversal early by returning [`Flow::Break`].
//! - **Pull**: [`IndexRange`] exposes a forward cursor (`begin/end/increment/
//!   dereference`). The dense adaptor implements it only when the sparse source
//!   implements it as well.
//!
//! # Key Types
//!
//! - [`SparseAdaptor`] - The dense view over a sparse source
//! - [`SparsePair`] - Index/value access to the pairs of a sparse source
//! - [`SparseRangeExt`] - Extension trait to build a dense view from any sparse source
//!
//! # Example
//!
//! ```
//! use amudai_sparse_ranges::{sparse_range, IndexRange};
//!
//! let pairs = vec![(1usize, "a"), (3, "b")];
//! let dense = sparse_range(&pairs, 5, "x");
//!
//! let mut pushed = Vec::new();
//! dense.for_each(|&s| pushed.push(s));
//! assert_eq!(pushed, ["x", "a", "x", "b", "x"]);
//!
//! let pulled: Vec<&str> = dense.index_iter().copied().collect();
//! assert_eq!(pulled, pushed);
//! ```

pub mod flow;
pub mod pair;
pub mod range;
pub mod sparse;

pub use flow::{Flow, IntoFlow};
pub use pair::SparsePair;
pub use range::{FnRange, IndexIter, IndexRange, IterRange, PushRange, for_each};
pub use sparse::{
    SparseAdaptor, SparseIndex, SparseRangeExt, SparseValue, sparse_range, sparse_range_default,
};
