//! Pair with a given sum in a sorted sequence.
//!
//! With the input sorted ascending, a sum below the target can only grow by
//! moving the left pointer and a sum above it can only shrink by moving the
//! right one. The first exact hit ends the pass. Sums are formed in `i128`.

use std::cmp::Ordering;

use crate::converge::converge;
use crate::error::{EngineError, Result};
use crate::traits::{ConvergePolicy, Side};

/// Two-pointer policy locating a pair that sums to `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairSum {
    target: i64,
}

impl PairSum {
    pub fn new(target: i64) -> Self {
        Self { target }
    }

    pub fn target(&self) -> i64 {
        self.target
    }
}

impl ConvergePolicy for PairSum {
    type Value = i64;
    type State = Option<(usize, usize)>;
    type Output = Option<(usize, usize)>;

    fn init(&self) -> Self::State {
        None
    }

    fn step(&self, found: &mut Self::State, values: &[i64], left: usize, right: usize) -> Side {
        let sum = i128::from(values[left]) + i128::from(values[right]);
        match sum.cmp(&i128::from(self.target)) {
            Ordering::Less => Side::Left,
            Ordering::Greater => Side::Right,
            Ordering::Equal => {
                *found = Some((left, right));
                Side::Stop
            }
        }
    }

    fn finish(&self, found: Self::State) -> Self::Output {
        found
    }
}

/// Zero-based indices `(i, j)`, `i < j`, with `numbers[i] + numbers[j] == target`.
///
/// When several pairs qualify, the first one met by the converging pointers
/// is returned.
///
/// # Errors
/// [`EngineError::InvalidArgument`] if `numbers` is not sorted ascending.
pub fn two_sum_sorted(numbers: &[i64], target: i64) -> Result<Option<(usize, usize)>> {
    if let Some(i) = numbers.windows(2).position(|w| w[0] > w[1]) {
        return Err(EngineError::invalid(
            "numbers",
            format!(
                "must be sorted ascending, but index {} holds {} after {}",
                i + 1,
                numbers[i + 1],
                numbers[i]
            ),
        ));
    }
    Ok(converge(&PairSum::new(target), numbers))
}
