//! Continue/break signaling for push-style traversal.
//!
//! Callbacks driven by [`PushRange`](crate::PushRange) report whether the
//! traversal should go on. A [`Flow::Break`] aborts the remaining iteration at
//! every enclosing level; a [`Flow::Continue`] or a callback returning `()`
//! keeps it going.

use std::ops::ControlFlow;

/// Two-valued traversal signal.
pub type Flow = ControlFlow<()>;

pub const CONTINUE: Flow = ControlFlow::Continue(());

pub const BREAK: Flow = ControlFlow::Break(());

/// Result of a push-traversal callback.
///
/// Implemented for `()` (always continue) and for [`Flow`] itself, so that
/// callbacks which never stop early do not have to spell out a result.
pub trait IntoFlow {
    fn into_flow(self) -> Flow;
}

impl IntoFlow for () {
    #[inline]
    fn into_flow(self) -> Flow {
        CONTINUE
    }
}

impl IntoFlow for Flow {
    #[inline]
    fn into_flow(self) -> Flow {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{BREAK, CONTINUE, IntoFlow};

    #[test]
    fn test_into_flow() {
        assert_eq!(().into_flow(), CONTINUE);
        assert_eq!(CONTINUE.into_flow(), CONTINUE);
        assert_eq!(BREAK.into_flow(), BREAK);
        assert!(BREAK.is_break());
    }
}
