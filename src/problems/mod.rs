//! Reference problem implementations.
//!
//! Stack-scan policies for [`StackEngine`](crate::engine::StackEngine):
//! - [`next_greater`]  : distance to the next strictly greater element.
//! - [`histogram`]     : largest rectangle under a skyline.
//!
//! Two-pointer policies for [`converge`](crate::converge::converge):
//! - [`trapped_water`]  : water held between elevation bars.
//! - [`container`]      : widest-and-tallest pair of walls.
//! - [`two_sum_sorted`] : pair with a given sum in sorted input.
//! - [`three_sum`]      : distinct zero-sum triplets.
//! - [`palindrome`]     : mirrored alphanumeric text.
//!
//! Standalone stack problems:
//! - [`car_fleet`], [`min_stack`], [`rpn`], [`brackets`], [`parentheses`].

pub mod brackets;
pub mod car_fleet;
pub mod container;
pub mod histogram;
pub mod min_stack;
pub mod next_greater;
pub mod palindrome;
pub mod parentheses;
pub mod rpn;
pub mod three_sum;
pub mod trapped_water;
pub mod two_sum_sorted;
