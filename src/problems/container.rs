//! Container with the most water.
//!
//! Choose two walls `i < j`; the container holds `(j - i) * min(h[i], h[j])`.
//! Starting from the widest pair, only moving the lower wall can ever find a
//! larger container, so the pointers converge in one pass. Volumes are
//! `u128` and exact.

use std::marker::PhantomData;

use crate::converge::converge;
use crate::traits::{ConvergePolicy, Side};

#[derive(Debug, Clone, Copy, Default)]
pub struct MostWater<T> {
    _marker: PhantomData<T>,
}

impl<T> MostWater<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> ConvergePolicy for MostWater<T>
where
    T: Copy + Into<u64>,
{
    type Value = T;
    type State = u128;
    type Output = u128;

    fn init(&self) -> Self::State {
        0
    }

    fn step(&self, best: &mut Self::State, values: &[T], left: usize, right: usize) -> Side {
        let lh: u64 = values[left].into();
        let rh: u64 = values[right].into();
        let area = u128::from(lh.min(rh)) * (right - left) as u128;
        *best = (*best).max(area);
        if lh < rh {
            Side::Left
        } else {
            Side::Right
        }
    }

    fn finish(&self, best: Self::State) -> Self::Output {
        best
    }
}

/// Largest volume any two walls of `heights` can hold.
pub fn max_container<T: Copy + Into<u64>>(heights: &[T]) -> u128 {
    converge(&MostWater::<T>::new(), heights)
}

#[cfg(test)]
mod tests {
    use super::max_container;

    #[test]
    fn classic_example() {
        assert_eq!(max_container(&[1u32, 8, 6, 2, 5, 4, 8, 3, 7]), 49);
    }

    #[test]
    fn two_walls() {
        assert_eq!(max_container(&[1u32, 1]), 1);
        assert_eq!(max_container(&[0u32, 9]), 0);
    }

    #[test]
    fn tall_distant_walls() {
        assert_eq!(
            max_container(&[u64::MAX, 1, 1, u64::MAX]),
            u128::from(u64::MAX) * 3
        );
    }

    #[test]
    fn fewer_than_two_walls() {
        assert_eq!(max_container::<u32>(&[]), 0);
        assert_eq!(max_container(&[10u32]), 0);
    }
}
