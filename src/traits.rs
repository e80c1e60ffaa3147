//! Core trait definitions for sequence-scan problems.
//!
//! A problem plugs into one of two drivers:
//! - [`ScanPolicy`] for the monotonic-stack scan run by
//!   [`StackEngine`](crate::engine::StackEngine): one left-to-right pass,
//!   pops resolved against the incoming element, then a drain against the
//!   end of the sequence.
//! - [`ConvergePolicy`] for the two-pointer driver
//!   [`converge`](crate::converge::converge): pointers start at both ends and
//!   the policy decides which side advances at each step.
//!
//! Drivers own all transient scan state; a policy only folds contributions
//! into its accumulator and turns it into an output at the end.

use crate::stack::{Monotonicity, StackEntry};

/// Why an entry left the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Popped because the element at the resolving index violated the ordering.
    Displaced,
    /// Popped during the final drain; the resolving index is the sequence length.
    Drained,
}

/// A problem solved by a single monotonic-stack scan.
///
/// Semantics:
/// - `init(n)` builds the accumulator before the scan (e.g. a zeroed buffer).
/// - For every index `i`, each entry that does not admit `values[i]` under
///   [`order`](Self::order) is popped and passed to `resolve` with `at = i`
///   and [`Resolution::Displaced`].
/// - `entry_for` builds the entry pushed for `values[i]`, given the last entry
///   popped for it (if any).
/// - Remaining entries are popped top-down with `at = n` and
///   [`Resolution::Drained`].
/// - `finish` converts the accumulator into the output.
pub trait ScanPolicy {
    /// Element type of the scanned sequence.
    type Value: PartialOrd + Copy;

    /// Running state folded by `resolve` (result buffer or aggregate).
    type Accumulator;

    /// Final result of a scan.
    type Output;

    /// Ordering the stack keeps bottom to top.
    fn order(&self) -> Monotonicity;

    /// Accumulator for a sequence of `len` elements.
    fn init(&self, len: usize) -> Self::Accumulator;

    /// Entry pushed for `value` at `index`.
    ///
    /// `last_popped` is the lowest entry displaced by this value, which lets
    /// area-style policies extend the new entry leftwards. Returned indices
    /// must stay above the entry that remains on top of the stack.
    #[inline]
    fn entry_for(
        &self,
        index: usize,
        value: Self::Value,
        last_popped: Option<StackEntry<Self::Value>>,
    ) -> StackEntry<Self::Value> {
        let _ = last_popped;
        StackEntry::new(index, value)
    }

    /// Record the final contribution of a popped entry.
    fn resolve(
        &self,
        acc: &mut Self::Accumulator,
        popped: StackEntry<Self::Value>,
        at: usize,
        resolution: Resolution,
    );

    /// Convert the accumulator into the output.
    fn finish(&self, acc: Self::Accumulator) -> Self::Output;
}

/// Pointer advanced by a [`ConvergePolicy`] step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    /// Move both pointers inwards.
    Both,
    /// End the pass; the remaining pairs are never inspected.
    Stop,
}

/// A problem solved by two pointers converging from both ends.
pub trait ConvergePolicy {
    type Value: Copy;
    type State;
    type Output;

    fn init(&self) -> Self::State;

    /// Inspect `values[left]` and `values[right]` (`left < right`), fold any
    /// contribution into `state`, and report which pointer moves inwards.
    fn step(
        &self,
        state: &mut Self::State,
        values: &[Self::Value],
        left: usize,
        right: usize,
    ) -> Side;

    fn finish(&self, state: Self::State) -> Self::Output;
}
