//! Monotonic-stack range analysis (monostack)
//!
//! This crate provides a generic engine for answering "nearest enclosing
//! extremum" questions over a sequence in amortised linear time.
//!
//! ## Core idea
//! 1. Scan the sequence once, keeping an auxiliary stack of `(index, value)`
//!    entries that is monotone by value.
//! 2. When an incoming element breaks the ordering, pop the offending entries;
//!    the incoming index is exactly the boundary each of them was waiting for.
//! 3. Drain what is left against the end of the sequence.
//!
//! Each index is pushed and popped at most once, so the whole pass is O(n).
//! Implement [`ScanPolicy`] to decide what a pop contributes, and let
//! [`StackEngine`] run the scan. Problems that converge from both ends
//! instead implement [`ConvergePolicy`] and run through [`converge`].
//!
//! ## Quick start
//! ```
//! use monostack::{compute_range_extremum, Policy, RangeExtremum};
//!
//! let area = compute_range_extremum(&[2, 1, 5, 6, 2, 3], Policy::HistogramArea).unwrap();
//! assert_eq!(area, RangeExtremum::Scalar(10));
//!
//! let water = compute_range_extremum(&[0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1], Policy::TrappedWater)
//!     .unwrap();
//! assert_eq!(water.as_scalar(), Some(6));
//! ```
//!
//! ## Built-in problems
//! The `problems` module contains reference implementations for:
//! - Next strictly greater element (daily temperatures)
//! - Largest rectangle in a histogram
//! - Trapping rain water, container with most water, pair and triplet sums,
//!   and palindromes (two pointers)
//! - Car fleets, a min-tracking stack, RPN evaluation, bracket balancing and
//!   bracket generation
//!
//! ## Features
//! - `parallel`: run [`StackEngine::run_batch`] on the rayon pool.
//! - `tracing`: emit spans for scans, drains and rejected inputs.

pub mod builder;
pub mod converge;
pub mod engine;
pub mod error;
pub mod policy;
pub mod problems;
pub mod stack;
pub mod traits;
pub mod utils;

pub use crate::builder::StackEngineBuilder;
pub use crate::converge::converge;
pub use crate::engine::StackEngine;
pub use crate::error::{EngineError, Result};
pub use crate::policy::{compute_range_extremum, Policy, RangeExtremum};
pub use crate::traits::{ConvergePolicy, ScanPolicy};
