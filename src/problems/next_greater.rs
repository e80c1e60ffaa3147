//! Next strictly greater element ("daily temperatures").
//!
//! For every index `i`, report the distance `d` to the first later index
//! whose value is strictly greater than `values[i]`, or 0 if none exists.
//!
//! The stack keeps indices whose answer is still unknown; their values are
//! non-increasing bottom to top, so an incoming value pops exactly the
//! entries it is the first strictly greater element for.
//!
//! Values must be totally ordered. An incomparable value such as `NaN` would
//! be admitted on top of every entry and hide the answers below it, so the
//! policy requires `Ord`.

use std::marker::PhantomData;

use crate::engine::StackEngine;
use crate::stack::{Monotonicity, StackEntry};
use crate::traits::{Resolution, ScanPolicy};

/// Scan policy producing next-greater distances.
#[derive(Debug, Clone, Copy, Default)]
pub struct NextGreater<T> {
    _marker: PhantomData<T>,
}

impl<T> NextGreater<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: Ord + Copy> ScanPolicy for NextGreater<T> {
    type Value = T;
    type Accumulator = Vec<usize>;
    type Output = Vec<usize>;

    fn order(&self) -> Monotonicity {
        Monotonicity::NonIncreasing
    }

    fn init(&self, len: usize) -> Self::Accumulator {
        vec![0; len]
    }

    fn resolve(
        &self,
        acc: &mut Self::Accumulator,
        popped: StackEntry<T>,
        at: usize,
        resolution: Resolution,
    ) {
        // Drained entries have no greater successor; their slot stays 0.
        if resolution == Resolution::Displaced {
            debug_assert_eq!(acc[popped.index], 0, "slot written twice");
            acc[popped.index] = at - popped.index;
        }
    }

    fn finish(&self, acc: Self::Accumulator) -> Self::Output {
        acc
    }
}

/// Days to wait for a strictly warmer temperature, per day.
///
/// Readings must be `Ord`; floats are rejected at compile time:
/// ```compile_fail
/// monostack::problems::next_greater::days_until_warmer(&[1.0, f64::NAN, 2.0]);
/// ```
pub fn days_until_warmer<T: Ord + Copy>(temperatures: &[T]) -> Vec<usize> {
    StackEngine::new(NextGreater::<T>::new()).run(temperatures)
}
