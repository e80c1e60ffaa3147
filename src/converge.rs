//! Two-pointer driver.
//!
//! Pointers start at both ends of the sequence and move inwards one step at
//! a time until they meet; the [`ConvergePolicy`] inspects the pair at each
//! step and picks the side to advance. The pass is O(n) time and O(1) space
//! beyond the policy's own state.

use crate::traits::{ConvergePolicy, Side};

/// Run `policy` over `values` with two converging pointers.
///
/// Sequences of fewer than two elements never step; the policy's initial
/// state is finished directly.
pub fn converge<P: ConvergePolicy>(policy: &P, values: &[P::Value]) -> P::Output {
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("converge", len = values.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut state = policy.init();
    if values.len() >= 2 {
        let mut left = 0;
        let mut right = values.len() - 1;
        while left < right {
            match policy.step(&mut state, values, left, right) {
                Side::Left => left += 1,
                Side::Right => right -= 1,
                Side::Both => {
                    left += 1;
                    right -= 1;
                }
                Side::Stop => break,
            }
        }
    }
    policy.finish(state)
}
