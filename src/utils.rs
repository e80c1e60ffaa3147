//! Assorted utilities and helpers.

use std::cmp::Ordering;

/// Initial stack capacity for a scan over `len` elements.
///
/// The stack only reaches `len` entries on fully monotone input, so start
/// from about √len and let it grow. This is the heuristic used by
/// [`crate::engine::StackEngine::new`].
#[inline]
pub fn default_stack_capacity(len: usize) -> usize {
    if len <= 1 {
        len
    } else {
        (len as f64).sqrt().ceil() as usize
    }
}

/// Compare the fractions `a_num / a_den` and `b_num / b_den` exactly.
///
/// Both denominators must be positive.
#[inline]
pub fn cmp_ratio(a_num: i64, a_den: i64, b_num: i64, b_den: i64) -> Ordering {
    debug_assert!(a_den > 0 && b_den > 0, "denominators must be positive");
    let lhs = i128::from(a_num) * i128::from(b_den);
    let rhs = i128::from(b_num) * i128::from(a_den);
    lhs.cmp(&rhs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_lengths_pass_through() {
        assert_eq!(default_stack_capacity(0), 0);
        assert_eq!(default_stack_capacity(1), 1);
    }

    #[test]
    fn sqrt_ceiling_behavior() {
        assert_eq!(default_stack_capacity(2), 2);
        assert_eq!(default_stack_capacity(4), 2);
        assert_eq!(default_stack_capacity(5), 3);
        assert_eq!(default_stack_capacity(100), 10);
        assert_eq!(default_stack_capacity(101), 11);
    }

    #[test]
    fn monotonic_non_decreasing() {
        let mut prev = 0;
        for len in 0..500 {
            let c = default_stack_capacity(len);
            assert!(c >= prev, "capacity decreased at len={len}: {c} < {prev}");
            prev = c;
        }
    }

    #[test]
    fn ratio_comparison_is_exact() {
        assert_eq!(cmp_ratio(1, 3, 2, 6), Ordering::Equal);
        assert_eq!(cmp_ratio(7, 2, 3, 1), Ordering::Greater);
        assert_eq!(cmp_ratio(0, 5, 1, 1_000_000), Ordering::Less);
        assert_eq!(
            cmp_ratio(i64::MAX, 1, i64::MAX - 1, 1),
            Ordering::Greater
        );
    }
}
