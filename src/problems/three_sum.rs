//! Distinct triplets summing to zero.
//!
//! The input is sorted once. Each distinct value in turn anchors a triplet,
//! and a two-pointer pass over the values after it collects every distinct
//! pair that completes the sum.

use std::cmp::Ordering;

use crate::converge::converge;
use crate::traits::{ConvergePolicy, Side};

/// Collects every distinct value pair of a sorted slice summing to `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistinctPairs {
    target: i128,
}

impl DistinctPairs {
    pub fn new(target: i128) -> Self {
        Self { target }
    }
}

impl ConvergePolicy for DistinctPairs {
    type Value = i64;
    type State = Vec<(i64, i64)>;
    type Output = Vec<(i64, i64)>;

    fn init(&self) -> Self::State {
        Vec::new()
    }

    fn step(&self, pairs: &mut Self::State, values: &[i64], left: usize, right: usize) -> Side {
        let (a, b) = (values[left], values[right]);
        match (i128::from(a) + i128::from(b)).cmp(&self.target) {
            Ordering::Less => Side::Left,
            Ordering::Greater => Side::Right,
            Ordering::Equal => {
                // Hits arrive with non-decreasing `a`, so repeats are adjacent.
                if pairs.last() != Some(&(a, b)) {
                    pairs.push((a, b));
                }
                Side::Both
            }
        }
    }

    fn finish(&self, pairs: Self::State) -> Self::Output {
        pairs
    }
}

/// Every distinct `[a, b, c]` with `a <= b <= c` drawn from distinct
/// positions of `nums` and `a + b + c == 0`, in lexicographic order.
pub fn three_sum(nums: &[i64]) -> Vec<[i64; 3]> {
    let mut sorted = nums.to_vec();
    sorted.sort_unstable();

    let mut triplets = Vec::new();
    for (i, &first) in sorted.iter().enumerate() {
        if first > 0 {
            break;
        }
        if i > 0 && sorted[i - 1] == first {
            continue;
        }
        let pairs = converge(&DistinctPairs::new(-i128::from(first)), &sorted[i + 1..]);
        triplets.extend(pairs.into_iter().map(|(b, c)| [first, b, c]));
    }
    triplets
}
