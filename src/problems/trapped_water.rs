//! Rain water trapped between elevation bars.
//!
//! Two pointers converge from both ends, each carrying the highest bar seen
//! on its side. The side with the lower current bar moves: its water level is
//! bounded by its own running maximum, because the opposite side is already
//! known to hold a bar at least as high.
//!
//! The volume is a `u128`; it never exceeds `len * u64::MAX`, so no sum
//! overflows.

use std::marker::PhantomData;

use crate::converge::converge;
use crate::traits::{ConvergePolicy, Side};

/// Running maxima and total volume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WaterLevel {
    pub max_left: u64,
    pub max_right: u64,
    pub volume: u128,
}

/// Two-pointer policy accumulating trapped volume.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrappedWater<T> {
    _marker: PhantomData<T>,
}

impl<T> TrappedWater<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> ConvergePolicy for TrappedWater<T>
where
    T: Copy + Into<u64>,
{
    type Value = T;
    type State = WaterLevel;
    type Output = u128;

    fn init(&self) -> Self::State {
        WaterLevel::default()
    }

    fn step(&self, state: &mut Self::State, values: &[T], left: usize, right: usize) -> Side {
        let lh: u64 = values[left].into();
        let rh: u64 = values[right].into();
        if lh < rh {
            if lh >= state.max_left {
                state.max_left = lh;
            } else {
                state.volume += u128::from(state.max_left - lh);
            }
            Side::Left
        } else {
            if rh >= state.max_right {
                state.max_right = rh;
            } else {
                state.volume += u128::from(state.max_right - rh);
            }
            Side::Right
        }
    }

    fn finish(&self, state: Self::State) -> Self::Output {
        state.volume
    }
}

/// Total units of water held by the elevation map `heights`.
pub fn trapped_water<T: Copy + Into<u64>>(heights: &[T]) -> u128 {
    converge(&TrappedWater::<T>::new(), heights)
}

#[cfg(test)]
mod tests {
    use super::trapped_water;

    #[test]
    fn classic_example() {
        let h = [0u32, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1];
        assert_eq!(trapped_water(&h), 6);
    }

    #[test]
    fn second_example() {
        assert_eq!(trapped_water(&[4u32, 2, 0, 3, 2, 5]), 9);
    }

    #[test]
    fn monotone_maps_hold_nothing() {
        assert_eq!(trapped_water(&[1u32, 2, 3, 4]), 0);
        assert_eq!(trapped_water(&[4u32, 3, 2, 1]), 0);
    }

    #[test]
    fn equal_walls() {
        assert_eq!(trapped_water(&[3u32, 0, 0, 3]), 6);
    }

    #[test]
    fn volume_wider_than_u64_is_exact() {
        let h = [u64::MAX, 0, 0, 0, u64::MAX];
        assert_eq!(trapped_water(&h), u128::from(u64::MAX) * 3);
    }

    #[test]
    fn empty_and_single() {
        assert_eq!(trapped_water::<u32>(&[]), 0);
        assert_eq!(trapped_water(&[5u32]), 0);
    }
}
