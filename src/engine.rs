//! Generic monotonic-stack scan engine.
//!
//! This module implements the single-pass algorithm shared by every
//! [`ScanPolicy`]:
//! 1. A left-to-right scan that pops every stack entry the incoming element
//!    violates, resolving each one against the incoming index, then pushes
//!    the incoming element.
//! 2. A drain that resolves the surviving entries against the end of the
//!    sequence.
//!
//! Every index is pushed once and popped at most once, so a scan is O(n)
//! time and O(n) worst-case space. The engine is completely generic over
//! implementations of [`ScanPolicy`].

use crate::stack::MonotonicStack;
use crate::traits::{Resolution, ScanPolicy};
use crate::utils::default_stack_capacity;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Monotonic-stack engine for a given policy `P`.
///
/// Typical usage:
/// ```
/// use monostack::{StackEngine, problems::next_greater::NextGreater};
///
/// let temperatures = [73, 74, 75, 71, 69, 72, 76, 73];
/// let engine = StackEngine::new(NextGreater::<i32>::new());
/// let days = engine.run(&temperatures);
/// assert_eq!(days, vec![1, 1, 4, 2, 1, 1, 0, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct StackEngine<P: ScanPolicy> {
    policy: P,
    capacity_hint: Option<usize>,
}

impl<P: ScanPolicy> StackEngine<P> {
    /// Create an engine that sizes its stack from the input length.
    pub fn new(policy: P) -> Self {
        Self {
            policy,
            capacity_hint: None,
        }
    }

    /// Create an engine that preallocates `capacity` stack slots per scan.
    ///
    /// The hint only affects allocation; the stack still grows as needed.
    pub fn with_capacity(policy: P, capacity: usize) -> Self {
        Self {
            policy,
            capacity_hint: Some(capacity),
        }
    }

    /// Expose immutable reference to the underlying policy.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Expose mutable reference if callers need to adjust configuration.
    pub fn policy_mut(&mut self) -> &mut P {
        &mut self.policy
    }

    /// Return the configured capacity hint, if any.
    pub fn capacity_hint(&self) -> Option<usize> {
        self.capacity_hint
    }

    fn stack_for(&self, len: usize) -> MonotonicStack<P::Value> {
        let capacity = self
            .capacity_hint
            .unwrap_or_else(|| default_stack_capacity(len))
            .min(len);
        MonotonicStack::with_capacity(self.policy.order(), capacity)
    }

    /// Run one scan over `values`.
    ///
    /// The input is only read; all working state is local to this call, so
    /// repeated runs over the same input return identical outputs.
    pub fn run(&self, values: &[P::Value]) -> P::Output {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("stack_scan", len = values.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let len = values.len();
        let mut stack = self.stack_for(len);
        let mut acc = self.policy.init(len);
        #[cfg(feature = "tracing")]
        let mut pops = 0usize;

        for (index, &value) in values.iter().enumerate() {
            let mut last_popped = None;
            while let Some(popped) = stack.pop_violating(&value) {
                self.policy
                    .resolve(&mut acc, popped, index, Resolution::Displaced);
                last_popped = Some(popped);
                #[cfg(feature = "tracing")]
                {
                    pops += 1;
                }
            }
            stack.push(self.policy.entry_for(index, value, last_popped));
        }

        {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("stack_drain", remaining = stack.len(), pops);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            while let Some(popped) = stack.pop() {
                self.policy
                    .resolve(&mut acc, popped, len, Resolution::Drained);
            }
        }

        self.policy.finish(acc)
    }
}

#[cfg(feature = "parallel")]
impl<P> StackEngine<P>
where
    P: ScanPolicy + Sync,
    P::Value: Sync,
    P::Output: Send,
{
    /// Run independent scans over every sequence in `inputs` on the rayon
    /// pool. Outputs are returned in input order.
    pub fn run_batch<S>(&self, inputs: &[S]) -> Vec<P::Output>
    where
        S: AsRef<[P::Value]> + Sync,
    {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("stack_batch", sequences = inputs.len(), parallel = true);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        inputs.par_iter().map(|seq| self.run(seq.as_ref())).collect()
    }
}

#[cfg(not(feature = "parallel"))]
impl<P: ScanPolicy> StackEngine<P> {
    /// Run independent scans over every sequence in `inputs` (serial
    /// execution). Outputs are returned in input order.
    pub fn run_batch<S>(&self, inputs: &[S]) -> Vec<P::Output>
    where
        S: AsRef<[P::Value]>,
    {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("stack_batch", sequences = inputs.len(), parallel = false);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        inputs.iter().map(|seq| self.run(seq.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::{Monotonicity, StackEntry};

    /// Records every resolution so tests can inspect the engine's schedule.
    struct Recorder;

    impl ScanPolicy for Recorder {
        type Value = i32;
        type Accumulator = Vec<(usize, usize, Resolution)>;
        type Output = Vec<(usize, usize, Resolution)>;

        fn order(&self) -> Monotonicity {
            Monotonicity::NonIncreasing
        }
        fn init(&self, _len: usize) -> Self::Accumulator {
            Vec::new()
        }
        fn resolve(
            &self,
            acc: &mut Self::Accumulator,
            popped: StackEntry<i32>,
            at: usize,
            resolution: Resolution,
        ) {
            acc.push((popped.index, at, resolution));
        }
        fn finish(&self, acc: Self::Accumulator) -> Self::Output {
            acc
        }
    }

    #[test]
    fn every_index_resolved_exactly_once() {
        let values = [3, 1, 4, 1, 5, 9, 2, 6];
        let log = StackEngine::new(Recorder).run(&values);
        let mut seen: Vec<usize> = log.iter().map(|&(i, _, _)| i).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..values.len()).collect::<Vec<_>>());
    }

    #[test]
    fn drain_resolves_against_length() {
        let values = [5, 4, 3];
        let log = StackEngine::new(Recorder).run(&values);
        assert_eq!(
            log,
            vec![
                (2, 3, Resolution::Drained),
                (1, 3, Resolution::Drained),
                (0, 3, Resolution::Drained),
            ]
        );
    }

    #[test]
    fn displaced_entries_resolve_at_incoming_index() {
        let log = StackEngine::new(Recorder).run(&[1, 2]);
        assert_eq!(
            log,
            vec![(0, 1, Resolution::Displaced), (1, 2, Resolution::Drained)]
        );
    }

    #[test]
    fn empty_input_never_resolves() {
        let log = StackEngine::with_capacity(Recorder, 16).run(&[]);
        assert!(log.is_empty());
    }

    #[test]
    fn batch_preserves_input_order() {
        let engine = StackEngine::new(Recorder);
        let inputs = vec![vec![1, 2], vec![], vec![2, 1]];
        let outputs = engine.run_batch(&inputs);
        assert_eq!(outputs.len(), 3);
        assert_eq!(outputs[0], engine.run(&inputs[0]));
        assert!(outputs[1].is_empty());
        assert_eq!(outputs[2], engine.run(&inputs[2]));
    }
}
