//! Largest rectangle under a histogram skyline.
//!
//! Bars are kept on a non-decreasing stack. Each entry is anchored at the
//! leftmost index its bar height extends to: when an incoming bar displaces
//! taller bars, it inherits the anchor of the lowest one it displaced. A
//! popped entry therefore spans `[anchor, at)` at its own height, where `at`
//! is the first index to its right holding a strictly lower bar (or the end
//! of the skyline).
//!
//! Areas are accumulated as `u128`: a `u64` height times a `usize` width
//! always fits, so the result is exact for every input.

use std::marker::PhantomData;

use crate::engine::StackEngine;
use crate::stack::{Monotonicity, StackEntry};
use crate::traits::{Resolution, ScanPolicy};

/// Scan policy producing the maximal rectangle area.
#[derive(Debug, Clone, Copy, Default)]
pub struct LargestRectangle<T> {
    _marker: PhantomData<T>,
}

impl<T> LargestRectangle<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> ScanPolicy for LargestRectangle<T>
where
    T: Copy + Ord + Into<u64>,
{
    type Value = T;
    type Accumulator = u128;
    type Output = u128;

    fn order(&self) -> Monotonicity {
        Monotonicity::NonDecreasing
    }

    fn init(&self, _len: usize) -> Self::Accumulator {
        0
    }

    fn entry_for(
        &self,
        index: usize,
        value: T,
        last_popped: Option<StackEntry<T>>,
    ) -> StackEntry<T> {
        let anchor = last_popped.map_or(index, |p| p.index);
        StackEntry::new(anchor, value)
    }

    fn resolve(
        &self,
        acc: &mut Self::Accumulator,
        popped: StackEntry<T>,
        at: usize,
        _resolution: Resolution,
    ) {
        let width = (at - popped.index) as u128;
        let area = u128::from(popped.value.into()) * width;
        *acc = (*acc).max(area);
    }

    fn finish(&self, acc: Self::Accumulator) -> Self::Output {
        acc
    }
}

/// Area of the largest axis-aligned rectangle that fits under `heights`.
pub fn largest_rectangle<T>(heights: &[T]) -> u128
where
    T: Copy + Ord + Into<u64>,
{
    StackEngine::new(LargestRectangle::<T>::new()).run(heights)
}
