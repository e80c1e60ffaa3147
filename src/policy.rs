//! Unified entry point over the range-extremum variants.
//!
//! [`compute_range_extremum`] takes a raw integer sequence and a [`Policy`]
//! and dispatches to the matching driver: the monotonic-stack engine for
//! next-greater distances and histogram areas, the two-pointer driver
//! ([`converge`](crate::converge::converge)) for trapped water.

use crate::error::{EngineError, Result};
use crate::problems::{
    histogram::largest_rectangle, next_greater::days_until_warmer, trapped_water::trapped_water,
};

/// Which range-extremum quantity to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Per index: distance to the next strictly greater element, 0 if none.
    NextGreater,
    /// Aggregate: largest rectangle under the sequence read as bar heights.
    HistogramArea,
    /// Aggregate: water trapped by the sequence read as elevations.
    TrappedWater,
}

impl Policy {
    pub const ALL: [Policy; 3] = [
        Policy::NextGreater,
        Policy::HistogramArea,
        Policy::TrappedWater,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Policy::NextGreater => "next_greater",
            Policy::HistogramArea => "histogram_area",
            Policy::TrappedWater => "trapped_water",
        }
    }

    /// Whether the result carries one slot per input index.
    pub fn is_per_index(self) -> bool {
        matches!(self, Policy::NextGreater)
    }
}

/// Result of [`compute_range_extremum`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeExtremum {
    PerIndex(Vec<usize>),
    Scalar(u64),
}

impl RangeExtremum {
    pub fn as_per_index(&self) -> Option<&[usize]> {
        match self {
            RangeExtremum::PerIndex(v) => Some(v),
            RangeExtremum::Scalar(_) => None,
        }
    }

    pub fn as_scalar(&self) -> Option<u64> {
        match self {
            RangeExtremum::Scalar(v) => Some(*v),
            RangeExtremum::PerIndex(_) => None,
        }
    }
}

/// Heights must be non-negative for the area and volume policies.
fn as_heights(values: &[i64]) -> Result<Vec<u64>> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            u64::try_from(v).map_err(|_| {
                EngineError::invalid(
                    "sequence",
                    format!("height at index {i} must be non-negative, got {v}"),
                )
            })
        })
        .collect()
}

/// Aggregates are computed exactly in `u128` and narrowed here.
fn narrow(total: u128, len: usize) -> Result<u64> {
    u64::try_from(total).map_err(|_| EngineError::overflow(len))
}

/// Compute the range-extremum quantity selected by `policy` over `values`.
///
/// An empty sequence yields an empty per-index result or a zero aggregate.
///
/// # Errors
/// [`EngineError::InvalidArgument`] if a negative value is passed to
/// [`Policy::HistogramArea`] or [`Policy::TrappedWater`], and
/// [`EngineError::Overflow`] (at `values.len()`) if the aggregate exceeds
/// `u64::MAX`.
pub fn compute_range_extremum(values: &[i64], policy: Policy) -> Result<RangeExtremum> {
    #[cfg(feature = "tracing")]
    let span = tracing::debug_span!("range_extremum", policy = policy.as_str(), len = values.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let result = match policy {
        Policy::NextGreater => RangeExtremum::PerIndex(days_until_warmer(values)),
        Policy::HistogramArea => {
            let heights = as_heights(values)?;
            RangeExtremum::Scalar(narrow(largest_rectangle(heights.as_slice()), values.len())?)
        }
        Policy::TrappedWater => {
            let heights = as_heights(values)?;
            RangeExtremum::Scalar(narrow(trapped_water(heights.as_slice()), values.len())?)
        }
    };
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_each_policy() {
        assert_eq!(
            compute_range_extremum(&[73, 74, 75, 71, 69, 72, 76, 73], Policy::NextGreater),
            Ok(RangeExtremum::PerIndex(vec![1, 1, 4, 2, 1, 1, 0, 0]))
        );
        assert_eq!(
            compute_range_extremum(&[2, 1, 5, 6, 2, 3], Policy::HistogramArea),
            Ok(RangeExtremum::Scalar(10))
        );
        assert_eq!(
            compute_range_extremum(&[0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1], Policy::TrappedWater),
            Ok(RangeExtremum::Scalar(6))
        );
    }

    #[test]
    fn empty_sequence_is_neutral() {
        for policy in Policy::ALL {
            let out = compute_range_extremum(&[], policy).unwrap();
            if policy.is_per_index() {
                assert_eq!(out.as_per_index(), Some(&[][..]));
            } else {
                assert_eq!(out.as_scalar(), Some(0));
            }
        }
    }

    #[test]
    fn negative_heights_are_rejected() {
        for policy in [Policy::HistogramArea, Policy::TrappedWater] {
            let err = compute_range_extremum(&[3, -1, 2], policy).unwrap_err();
            assert!(matches!(
                err,
                EngineError::InvalidArgument {
                    name: "sequence",
                    ..
                }
            ));
        }
    }

    #[test]
    fn aggregates_beyond_u64_report_overflow() {
        assert_eq!(
            compute_range_extremum(&[i64::MAX; 3], Policy::HistogramArea),
            Err(EngineError::Overflow { position: 3 })
        );
        assert_eq!(
            compute_range_extremum(&[i64::MAX, 0, 0, 0, i64::MAX], Policy::TrappedWater),
            Err(EngineError::Overflow { position: 5 })
        );
    }

    #[test]
    fn largest_aggregate_that_fits() {
        // 2 * i64::MAX is still below u64::MAX.
        assert_eq!(
            compute_range_extremum(&[i64::MAX; 2], Policy::HistogramArea),
            Ok(RangeExtremum::Scalar(2 * i64::MAX as u64))
        );
    }

    #[test]
    fn next_greater_accepts_negative_values() {
        assert_eq!(
            compute_range_extremum(&[-5, -7, -1], Policy::NextGreater),
            Ok(RangeExtremum::PerIndex(vec![2, 1, 0]))
        );
    }
}
